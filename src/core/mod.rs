//! Core game module - states, events, session, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod session;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, StartCountdown};
pub use session::{cycle_index, Cycle, GameSession};
pub use states::*;
