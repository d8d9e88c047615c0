//! Player domain: spawning the farmer, copying them, greeting, harvesting.

use bevy::prelude::*;

use crate::data::ScenarioDef;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(FarmPhase::Running),
            (
                spawn_player.in_set(DriverStep::SpawnPlayer),
                copy_player.in_set(DriverStep::CopyPlayer),
                welcome_player.in_set(DriverStep::Welcome),
                harvest_farm.in_set(DriverStep::Harvest),
            ),
        );
    }
}

pub fn spawn_player(mut commands: Commands, scenario: Res<ScenarioDef>) {
    let entity = commands
        .spawn((Player::new(scenario.player.clone()), PrimaryPlayer))
        .id();
    debug!("[Player] Spawned {:?} as {:?}", scenario.player, entity);
}

/// Spawns a second player copied from the primary one. The copy shares the
/// name only; it starts with nothing.
pub fn copy_player(
    mut commands: Commands,
    primary: Query<(Entity, &Player), With<PrimaryPlayer>>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok((source, player)) = primary.get_single() else {
        warn!("[Player] No primary player to copy");
        return;
    };

    let copy = Player::copy_from(player, &mut transcript);
    let entity = commands.spawn((copy, CopiedPlayer { source })).id();
    debug!("[Player] Copied {:?} into {:?}", source, entity);
}

pub fn welcome_player(
    primary: Query<&Player, With<PrimaryPlayer>>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok(player) = primary.get_single() else {
        warn!("[Player] No primary player to welcome");
        return;
    };

    transcript.say(format!("Welcome {} to your farm!", player.name));
    player.inventory.display(&mut transcript);
}

pub fn harvest_farm(
    primary: Query<&Player, With<PrimaryPlayer>>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok(player) = primary.get_single() else {
        warn!("[Player] No primary player to harvest for");
        return;
    };

    player.harvest(&mut transcript);
    debug!(
        "[Player] {} harvested from {} farm entities",
        player.name,
        player.entities.len()
    );
}
