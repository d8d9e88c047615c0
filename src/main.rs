use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use farmstead::animals::AnimalPlugin;
use farmstead::console::ConsolePlugin;
use farmstead::data::DataPlugin;
use farmstead::farm::{run_finished, FarmPlugin};
use farmstead::player::PlayerPlugin;
use farmstead::shared::MAX_FRAMES;
use farmstead::tools::ToolPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        LogPlugin {
            filter: "warn,farmstead=info".to_string(),
            ..default()
        },
    ))
    .add_plugins((
        FarmPlugin,
        DataPlugin::default(),
        PlayerPlugin,
        AnimalPlugin,
        ToolPlugin,
        ConsolePlugin,
    ));

    // One run of the scenario, then exit normally.
    for _ in 0..MAX_FRAMES {
        app.update();
        if run_finished(app.world()) {
            return;
        }
    }
    warn!("[Farm] Stopped after {} frames without finishing", MAX_FRAMES);
}
