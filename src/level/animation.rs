//! Keyframe sampling for the scripted duck motion.
//!
//! Duck movement is declarative: a looping schedule of `(time, value)`
//! pairs per axis, interpolated linearly. There is no physics and no AI;
//! the only runtime decision is where on the loop a duck currently is.

use bevy::prelude::*;

use super::data::DuckSpec;

/// One `(time, value)` pair on a track. Times are seconds from the start
/// of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub t: f32,
    pub value: f32,
}

/// A single-property keyframe track.
#[derive(Debug, Clone)]
pub struct Track {
    keyframes: Vec<Keyframe>,
}

impl Track {
    /// Build a track from `(time, value)` pairs. Pairs must be sorted by
    /// time and non-empty; level validation guarantees both.
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Self {
        Self {
            keyframes: pairs
                .iter()
                .map(|&(t, value)| Keyframe { t, value })
                .collect(),
        }
    }

    /// Sample the track at `t` seconds into the cycle.
    ///
    /// Holds the first value before the first keyframe and the last value
    /// after the last keyframe; interpolates linearly in between.
    pub fn sample(&self, t: f32) -> f32 {
        let first = self.keyframes[0];
        if t <= first.t {
            return first.value;
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let fraction = (t - a.t) / (b.t - a.t);
                return a.value + (b.value - a.value) * fraction;
            }
        }
        self.keyframes[self.keyframes.len() - 1].value
    }
}

/// Looping two-axis motion schedule for one duck.
#[derive(Debug, Clone)]
pub struct MotionSchedule {
    cycle: f32,
    x: Track,
    y: Track,
}

impl MotionSchedule {
    pub fn from_spec(spec: &DuckSpec) -> Self {
        Self {
            cycle: spec.cycle,
            x: Track::from_pairs(&spec.x),
            y: Track::from_pairs(&spec.y),
        }
    }

    /// Position at `elapsed` seconds since the duck spawned. The schedule
    /// repeats indefinitely.
    pub fn sample(&self, elapsed: f32) -> Vec2 {
        let t = elapsed.rem_euclid(self.cycle);
        Vec2::new(self.x.sample(t), self.y.sample(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DuckColor, FlightStyle};

    fn sweep() -> MotionSchedule {
        MotionSchedule::from_spec(&DuckSpec {
            color: DuckColor::Black,
            style: FlightStyle::Gliding,
            cycle: 4.0,
            x: vec![(0.0, -100.0), (2.0, 100.0), (4.0, -100.0)],
            y: vec![(0.0, 50.0)],
        })
    }

    #[test]
    fn exact_values_at_keyframes() {
        let schedule = sweep();
        assert_eq!(schedule.sample(0.0), Vec2::new(-100.0, 50.0));
        assert_eq!(schedule.sample(2.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn midpoints_interpolate_linearly() {
        let schedule = sweep();
        assert_eq!(schedule.sample(1.0).x, 0.0);
        assert_eq!(schedule.sample(3.0).x, 0.0);
        assert_eq!(schedule.sample(0.5).x, -50.0);
    }

    #[test]
    fn schedule_wraps_at_cycle_end() {
        let schedule = sweep();
        assert_eq!(schedule.sample(4.0), schedule.sample(0.0));
        assert_eq!(schedule.sample(5.0), schedule.sample(1.0));
        assert_eq!(schedule.sample(42.5), schedule.sample(2.5));
    }

    #[test]
    fn track_holds_after_last_keyframe() {
        // A y track can end before the cycle does; the value holds.
        let track = Track::from_pairs(&[(0.0, 10.0), (1.0, 20.0)]);
        assert_eq!(track.sample(1.5), 20.0);
        assert_eq!(track.sample(3.0), 20.0);
    }

    #[test]
    fn single_keyframe_track_is_constant() {
        let track = Track::from_pairs(&[(0.0, 7.0)]);
        assert_eq!(track.sample(0.0), 7.0);
        assert_eq!(track.sample(2.0), 7.0);
    }
}
