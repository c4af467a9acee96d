//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. For example, the level
//! runner sends ShotFired when a click is processed, and the audio system
//! receives it to play the gunshot clip. This keeps systems independent
//! and testable.

use bevy::prelude::*;

/// Per-level result. Decided exactly once per level instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Ducks still alive and ammo remaining
    #[default]
    Undecided,
    /// All ducks in the level are dead
    Win,
    /// Ammo ran out with at least one duck alive
    Lose,
}

/// Sent when a click is processed as a shot (hit or miss).
#[derive(Event)]
pub struct ShotFired {
    /// Click position in world coordinates
    pub position: Vec2,
}

/// Sent when a shot brings down a duck.
///
/// The audio system plays the falling sound; the HUD does not care.
#[derive(Event)]
pub struct DuckDowned {
    /// The duck entity that was hit
    pub duck: Entity,
}

/// Sent once when a level's outcome is decided.
///
/// The HUD reveals the matching texts and the audio system plays the
/// level-complete, game-complete or game-over clip.
#[derive(Event)]
pub struct OutcomeDecided {
    pub outcome: Outcome,
    /// True when this was the last level (win shows the completion screen)
    pub final_level: bool,
}

/// Sent when the player confirms the selector screen.
///
/// The audio system stops the title music and plays the intro jingle
/// while the start countdown runs.
#[derive(Event)]
pub struct StartRequested;
