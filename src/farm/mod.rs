//! Farm run wiring: phase state, run-wide resources, and the order the
//! driver steps execute in.

use bevy::prelude::*;

use crate::shared::*;

pub struct FarmPlugin;

impl Plugin for FarmPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<FarmPhase>()
            .init_resource::<Transcript>()
            .init_resource::<AnimalCount>()
            .configure_sets(
                OnEnter(FarmPhase::Running),
                (
                    DriverStep::SpawnPlayer,
                    DriverStep::StockFarm,
                    DriverStep::StockInventory,
                    DriverStep::CopyPlayer,
                    DriverStep::Welcome,
                    DriverStep::Harvest,
                    DriverStep::Inspect,
                    DriverStep::Combine,
                    DriverStep::Finish,
                )
                    .chain(),
            )
            .add_systems(
                OnEnter(FarmPhase::Running),
                finish_run.in_set(DriverStep::Finish),
            )
            .add_systems(OnEnter(FarmPhase::Done), report_done);
    }
}

fn finish_run(mut next_state: ResMut<NextState<FarmPhase>>) {
    next_state.set(FarmPhase::Done);
}

fn report_done(transcript: Res<Transcript>, animal_count: Res<AnimalCount>) {
    debug!(
        "[Farm] Run complete: {} lines, {} animals",
        transcript.lines.len(),
        animal_count.0
    );
}

/// True once the run has reached FarmPhase::Done.
pub fn run_finished(world: &World) -> bool {
    world
        .get_resource::<State<FarmPhase>>()
        .is_some_and(|state| *state.get() == FarmPhase::Done)
}
