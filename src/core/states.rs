//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! the shooting systems only run in the Playing state, while the
//! selector systems only run in the Selecting state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Boot` to load level data and validate assets
/// - Move to `Title` when loading completes
/// - Enter `Selecting` when the player presses ENTER on the title screen
/// - Enter `Playing` after the selector countdown finishes
/// - `LevelTransition` exists only to re-enter `Playing` so that the
///   level spawn/cleanup systems run again on advance and restart
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading level data files and checking assets
    #[default]
    Boot,
    /// Title screen with looping music
    Title,
    /// Background and crosshair selection screen
    Selecting,
    /// One-frame hop used to restart or advance the active level
    LevelTransition,
    /// Active gameplay - one level from spawn to outcome
    Playing,
}
