//! Menu plugin - title screen and selector screen flow.

use bevy::prelude::*;

use crate::core::{GameState, StartCountdown};

use super::selector;
use super::title;

/// Menu plugin - everything before the first shot is fired.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app
            // Title screen
            .add_systems(OnEnter(GameState::Title), title::spawn_title)
            .add_systems(Update, title::title_input.run_if(in_state(GameState::Title)))
            .add_systems(OnExit(GameState::Title), title::cleanup_title)
            // Selector screen
            .add_systems(OnEnter(GameState::Selecting), selector::spawn_selector)
            .add_systems(
                Update,
                (
                    selector::selector_input.run_if(not(resource_exists::<StartCountdown>)),
                    selector::refresh_previews.run_if(resource_changed::<crate::core::GameSession>),
                )
                    .run_if(in_state(GameState::Selecting)),
            )
            .add_systems(OnExit(GameState::Selecting), selector::cleanup_selector);
    }
}
