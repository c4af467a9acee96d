//! Menu module - title and selector screens.

mod plugin;
mod selector;
mod title;

pub use plugin::MenuPlugin;
