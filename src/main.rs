//! Duck Hunt - Entry Point
//!
//! Controls:
//! - Arrow keys: Navigate the selector
//! - Enter: Confirm / next level / play again
//! - Escape: Back / exit
//! - Left mouse: Shoot

use bevy::prelude::*;

use duck_hunt::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Duck Hunt".to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Kira-backed audio
        .add_plugins(bevy_kira_audio::AudioPlugin)
        // Our game plugin
        .add_plugins(duck_hunt::DuckHuntPlugin)
        .run();
}
