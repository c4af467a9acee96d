//! Level plugin - registers the level runner systems.

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::logic::LevelProgress;

use super::data::LevelRegistry;
use super::systems;

/// Level plugin - one parameterized runner for every level.
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .add_systems(OnEnter(GameState::Playing), systems::spawn_level)
            .add_systems(OnExit(GameState::Playing), systems::cleanup_level)
            // Input before animation so a hit stops motion the same frame
            .add_systems(
                Update,
                (
                    systems::handle_shot,
                    systems::handle_outcome_keys,
                    systems::animate_ducks,
                    systems::animate_flap,
                    systems::animate_falling,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_exists::<LevelProgress>),
            );
    }
}
