//! UI plugin - HUD, text effects, and the crosshair cursor.

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::LevelProgress;

use super::crosshair;
use super::hud;
use super::text_fx;

/// UI plugin - everything drawn over the scene.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app
            // Text effects run in every state; the title screen flashes too
            .add_systems(Update, (text_fx::fade_in_texts, text_fx::flash_texts))
            // Level HUD
            .add_systems(OnEnter(GameState::Playing), hud::spawn_hud)
            .add_systems(OnExit(GameState::Playing), hud::cleanup_hud)
            .add_systems(
                Update,
                (
                    hud::update_ammo_text
                        .run_if(resource_exists_and_changed::<LevelProgress>),
                    hud::reveal_outcome_texts,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            // The selector is keyboard-driven; no pointer there either
            .add_systems(OnEnter(GameState::Selecting), crosshair::hide_native_cursor)
            .add_systems(OnExit(GameState::Selecting), crosshair::show_native_cursor)
            // Crosshair replaces the OS cursor during gameplay
            .add_systems(
                OnEnter(GameState::Playing),
                (crosshair::hide_native_cursor, crosshair::spawn_crosshair),
            )
            .add_systems(
                OnExit(GameState::Playing),
                (crosshair::show_native_cursor, crosshair::cleanup_crosshair),
            )
            .add_systems(
                Update,
                crosshair::follow_cursor.run_if(in_state(GameState::Playing)),
            );
    }
}
