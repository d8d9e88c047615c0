//! Data layer — loads the farm scenario at startup.
//!
//! The roster is design data embedded in the binary as RON. This plugin
//! parses it in OnEnter(FarmPhase::Loading), inserts it as a resource, and
//! moves the run to FarmPhase::Running. A roster that fails to parse ends
//! the run quietly in FarmPhase::Done. Nothing is read from disk or the
//! environment.

use bevy::prelude::*;
use serde::Deserialize;

use crate::shared::*;

const SCENARIO_RON: &str = include_str!("scenario.ron");

#[derive(Debug, Clone, Deserialize)]
pub struct AnimalDef {
    pub kind: AnimalKind,
    pub name: String,
    pub age: u32,
}

impl AnimalDef {
    pub fn to_entity(&self) -> FarmEntity {
        FarmEntity::new(self.kind, self.name.clone(), self.age)
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
pub struct ScenarioDef {
    pub player: String,
    pub animals: Vec<AnimalDef>,
    pub tools: Vec<String>,
}

pub fn parse_scenario(source: &str) -> Result<ScenarioDef, ron::error::SpannedError> {
    ron::from_str(source)
}

/// RON text the scenario is parsed from.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScenarioSource(pub &'static str);

impl Default for ScenarioSource {
    fn default() -> Self {
        Self(SCENARIO_RON)
    }
}

/// `DataPlugin::default()` loads the embedded roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataPlugin {
    pub source: ScenarioSource,
}

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.source)
            .add_systems(OnEnter(FarmPhase::Loading), load_scenario);
    }
}

fn load_scenario(
    mut commands: Commands,
    source: Res<ScenarioSource>,
    mut next_state: ResMut<NextState<FarmPhase>>,
) {
    match parse_scenario(source.0) {
        Ok(scenario) => {
            debug!(
                "[Data] Scenario loaded: player {:?}, {} animals, {} tools",
                scenario.player,
                scenario.animals.len(),
                scenario.tools.len()
            );
            commands.insert_resource(scenario);
            next_state.set(FarmPhase::Running);
        }
        Err(err) => {
            error!("[Data] Scenario is malformed: {}", err);
            next_state.set(FarmPhase::Done);
        }
    }
}
