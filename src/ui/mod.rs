//! UI module - HUD, text effects, crosshair cursor.

mod crosshair;
mod hud;
mod plugin;
mod text_fx;

pub use hud::TEXT_ORANGE;
pub use plugin::UiPlugin;
pub use text_fx::{FadeInText, FlashingText};
