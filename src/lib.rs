//! Farmstead: one scripted farm run on a headless Bevy app.
//!
//! `main.rs` wires these plugins and ticks the app until the run is done;
//! `tests/headless.rs` wires the same plugins and inspects the world.

pub mod shared;
pub mod farm;
pub mod data;
pub mod player;
pub mod animals;
pub mod tools;
pub mod console;
