//! Writes the transcript to stdout. Diagnostics go through the log macros
//! (stderr), so stdout carries only what the farm says.

use bevy::prelude::*;
use std::io::Write;

use crate::shared::*;

pub struct ConsolePlugin;

impl Plugin for ConsolePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Last, print_transcript);
    }
}

pub fn print_transcript(mut transcript: ResMut<Transcript>) {
    let lines = transcript.take_unprinted();
    if lines.is_empty() {
        return;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        if let Err(err) = writeln!(out, "{}", line) {
            error!("[Console] Failed to write to stdout: {}", err);
            return;
        }
    }
    if let Err(err) = out.flush() {
        error!("[Console] Failed to flush stdout: {}", err);
    }
}
