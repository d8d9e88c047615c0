use bevy::prelude::*;

use crate::data::ScenarioDef;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Stocking and inspecting the farm
//
// StockFarm puts every scenario animal on the primary player's farm, in
// roster order, bumping the run-wide AnimalCount as it goes. Inspect prints
// each animal's name and age in the same order.
// ─────────────────────────────────────────────────────────────────────────────

pub struct AnimalPlugin;

impl Plugin for AnimalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(FarmPhase::Running),
            (
                stock_farm.in_set(DriverStep::StockFarm),
                display_farm_info.in_set(DriverStep::Inspect),
            ),
        );
    }
}

pub fn stock_farm(
    scenario: Res<ScenarioDef>,
    mut primary: Query<&mut Player, With<PrimaryPlayer>>,
    mut animal_count: ResMut<AnimalCount>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok(mut player) = primary.get_single_mut() else {
        warn!("[Animals] No primary player to stock");
        return;
    };

    for def in &scenario.animals {
        player.add_entity(def.to_entity(), &mut animal_count, &mut transcript);
    }
    debug!(
        "[Animals] {} now keeps {} animals ({} on the farm overall)",
        player.name,
        player.entities.len(),
        animal_count.0
    );
}

pub fn display_farm_info(
    primary: Query<&Player, With<PrimaryPlayer>>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok(player) = primary.get_single() else {
        warn!("[Animals] No primary player to inspect");
        return;
    };

    for entity in &player.entities {
        entity.display_info(&mut transcript);
    }
}
