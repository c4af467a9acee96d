//! Text presentation effects: one-second fade-in and indefinite flashing.

use bevy::color::Alpha;
use bevy::prelude::*;

/// Fades a text in over one second, then removes itself.
#[derive(Component)]
pub struct FadeInText {
    timer: Timer,
}

impl Default for FadeInText {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Once),
        }
    }
}

/// Flashes a text on and off every half second, forever.
#[derive(Component)]
pub struct FlashingText {
    timer: Timer,
    shown: bool,
}

impl Default for FlashingText {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            shown: true,
        }
    }
}

pub fn fade_in_texts(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FadeInText, &mut TextColor)>,
) {
    for (entity, mut fade, mut color) in query.iter_mut() {
        fade.timer.tick(time.delta());
        color.0.set_alpha(fade.timer.fraction());
        if fade.timer.finished() {
            commands.entity(entity).remove::<FadeInText>();
        }
    }
}

pub fn flash_texts(time: Res<Time>, mut query: Query<(&mut FlashingText, &mut TextColor)>) {
    for (mut flash, mut color) in query.iter_mut() {
        if flash.timer.tick(time.delta()).just_finished() {
            flash.shown = !flash.shown;
            color.0.set_alpha(if flash.shown { 1.0 } else { 0.0 });
        }
    }
}
