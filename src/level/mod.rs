//! Level module - the data-driven level runner.

mod animation;
mod components;
pub mod data;
mod error;
mod logic;
mod plugin;
mod systems;

pub use animation::{Keyframe, MotionSchedule, Track};
pub use components::*;
pub use data::{DuckSpec, LevelRegistry, LevelSpec};
pub use error::DataLoadError;
pub use logic::{LevelProgress, Outcome};
pub use plugin::LevelPlugin;
