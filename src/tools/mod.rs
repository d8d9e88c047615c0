//! Tools: handing them to the player and combining them.

use bevy::prelude::*;

use crate::data::ScenarioDef;
use crate::shared::*;

pub struct ToolPlugin;

impl Plugin for ToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Workbench>().add_systems(
            OnEnter(FarmPhase::Running),
            (
                stock_inventory.in_set(DriverStep::StockInventory),
                combine_tools.in_set(DriverStep::Combine),
            ),
        );
    }
}

/// Combining keeps the first tool; the second is only mentioned.
pub fn combine(first: Tool, second: Tool, transcript: &mut Transcript) -> Tool {
    transcript.say(format!("Combining tools: {} and {}", first.name, second.name));
    first
}

/// Makes each scenario tool on the workbench and adds a copy to the primary
/// player's inventory, one at a time.
pub fn stock_inventory(
    scenario: Res<ScenarioDef>,
    mut workbench: ResMut<Workbench>,
    mut primary: Query<&mut Player, With<PrimaryPlayer>>,
    mut transcript: ResMut<Transcript>,
) {
    let Ok(mut player) = primary.get_single_mut() else {
        warn!("[Tools] No primary player to equip");
        return;
    };

    for name in &scenario.tools {
        let tool = Tool::new(name.clone());
        workbench.tools.push(tool.clone());
        if !player.inventory.add_one(tool, &mut transcript) {
            debug!("[Tools] {} had no room for {:?}", player.name, name);
        }
    }
}

pub fn combine_tools(mut workbench: ResMut<Workbench>, mut transcript: ResMut<Transcript>) {
    let (first, second) = match workbench.tools.as_slice() {
        [first, second, ..] => (first.clone(), second.clone()),
        tools => {
            warn!("[Tools] Need two tools to combine, workbench has {}", tools.len());
            return;
        }
    };

    let combined = combine(first, second, &mut transcript);
    debug!("[Tools] Combined result is {:?}", combined.name);
    workbench.combined = Some(combined);
}
