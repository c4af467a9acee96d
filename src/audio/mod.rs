//! Audio module - sound library and event-driven playback.

mod plugin;

pub use plugin::{GameAudioPlugin, SoundLibrary};
