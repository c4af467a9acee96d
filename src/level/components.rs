//! Level-scene components.

use bevy::prelude::*;

use super::animation::MotionSchedule;

/// On-screen duck size in world units (sprite scaled 3x from the source
/// art). Also defines the hit-test bounds.
pub const DUCK_SIZE: Vec2 = Vec2::new(60.0, 60.0);

/// How long the hit pose is held before the duck starts to drop.
pub const HIT_HOLD_SECS: f32 = 0.4;
/// How long the drop to the bottom of the screen takes.
pub const FALL_SECS: f32 = 0.8;

/// Marker for everything spawned for the current level. Cleaned up
/// together when the level ends.
#[derive(Component)]
pub struct LevelScene;

/// Marker component for all ducks.
#[derive(Component)]
pub struct Duck;

/// Scripted flight along a looping keyframe schedule.
///
/// Removed when the duck is shot; a duck without this component no
/// longer moves or counts as a live target.
#[derive(Component)]
pub struct DuckMotion {
    pub schedule: MotionSchedule,
    pub elapsed: f32,
}

impl DuckMotion {
    pub fn new(schedule: MotionSchedule) -> Self {
        Self {
            schedule,
            elapsed: 0.0,
        }
    }
}

/// Three-frame wing flap, ping-ponging at a fixed rate forever.
#[derive(Component)]
pub struct FlapCycle {
    pub frames: [Handle<Image>; 3],
    pub timer: Timer,
    index: usize,
    forward: bool,
}

impl FlapCycle {
    pub fn new(frames: [Handle<Image>; 3]) -> Self {
        Self {
            frames,
            timer: Timer::from_seconds(0.1, TimerMode::Repeating),
            index: 0,
            forward: true,
        }
    }

    /// Step to the next frame index: 0, 1, 2, 1, 0, 1, ...
    pub fn advance(&mut self) -> usize {
        match (self.index, self.forward) {
            (2, true) => self.forward = false,
            (0, false) => self.forward = true,
            _ => {}
        }
        if self.forward {
            self.index += 1;
        } else {
            self.index -= 1;
        }
        self.index
    }
}

/// Hit frame and fall frame for a shot duck.
#[derive(Component)]
pub struct DeathSprites {
    pub hit: Handle<Image>,
    pub fall: Handle<Image>,
}

/// Death animation: hold the hit pose, then drop off the bottom edge.
#[derive(Component)]
pub struct Falling {
    pub hold: Timer,
    pub fall: Timer,
    pub start_y: f32,
}

impl Falling {
    pub fn new(start_y: f32) -> Self {
        Self {
            hold: Timer::from_seconds(HIT_HOLD_SECS, TimerMode::Once),
            fall: Timer::from_seconds(FALL_SECS, TimerMode::Once),
            start_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flap_cycle_ping_pongs() {
        let mut flap = FlapCycle::new([
            Handle::default(),
            Handle::default(),
            Handle::default(),
        ]);
        let steps: Vec<usize> = (0..6).map(|_| flap.advance()).collect();
        assert_eq!(steps, vec![1, 2, 1, 0, 1, 2]);
    }
}
