//! Duck Hunt - an arcade light-gun clone in Bevy.
//!
//! Six scripted levels of duck shooting: pick a background and a
//! crosshair, then hit every duck before the ammo runs out.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, the session resource
//! - **Catalog**: Asset paths and the startup existence check
//! - **Audio**: Music and sound effects, driven by global events
//! - **Menu**: Title screen and the background/crosshair selector
//! - **Level**: The data-driven level runner - spawning, scripted duck
//!   flight, hit-testing, ammo and outcome bookkeeping
//! - **UI**: HUD texts, fade/flash effects, the crosshair cursor

pub mod audio;
pub mod catalog;
pub mod core;
pub mod level;
pub mod menu;
pub mod ui;

use bevy::prelude::*;

/// Logical window width in pixels (256 source pixels at 3x scale).
pub const WINDOW_WIDTH: f32 = 768.0;
/// Logical window height in pixels (240 source pixels at 3x scale).
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Main game plugin that adds all sub-plugins.
pub struct DuckHuntPlugin;

impl Plugin for DuckHuntPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Sound library and playback
            .add_plugins(audio::GameAudioPlugin)
            // Title and selector screens
            .add_plugins(menu::MenuPlugin)
            // The level runner
            .add_plugins(level::LevelPlugin)
            // HUD and crosshair
            .add_plugins(ui::UiPlugin);
    }
}
