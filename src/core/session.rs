//! Per-run session state carried between screens.

use bevy::prelude::*;

use crate::catalog;

/// Cycling direction for the selector's wrap-around index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

/// Wrap-around index step: from 0, a backward step lands on `len - 1`;
/// from `len - 1`, a forward step lands on 0.
pub fn cycle_index(index: usize, len: usize, direction: Cycle) -> usize {
    match direction {
        Cycle::Forward => (index + 1) % len,
        Cycle::Backward => (index + len - 1) % len,
    }
}

/// Session state for one process run.
///
/// Replaces what would otherwise be process-wide statics: the selector
/// writes the background/crosshair choice here and every level scene
/// reads it back when spawning.
#[derive(Resource)]
pub struct GameSession {
    /// Index into [`catalog::BACKGROUNDS`] (and the matching foreground)
    pub background_index: usize,
    /// Index into [`catalog::CROSSHAIRS`]
    pub crosshair_index: usize,
    /// Current level number, 1-based
    pub level: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            background_index: 0,
            crosshair_index: 0,
            level: 1,
        }
    }
}

impl GameSession {
    pub fn cycle_background(&mut self, direction: Cycle) {
        self.background_index =
            cycle_index(self.background_index, catalog::BACKGROUNDS.len(), direction);
    }

    pub fn cycle_crosshair(&mut self, direction: Cycle) {
        self.crosshair_index =
            cycle_index(self.crosshair_index, catalog::CROSSHAIRS.len(), direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_step_wraps_to_zero() {
        assert_eq!(cycle_index(5, 6, Cycle::Forward), 0);
        assert_eq!(cycle_index(6, 7, Cycle::Forward), 0);
    }

    #[test]
    fn backward_step_wraps_to_last() {
        assert_eq!(cycle_index(0, 6, Cycle::Backward), 5);
        assert_eq!(cycle_index(0, 7, Cycle::Backward), 6);
    }

    #[test]
    fn interior_steps_do_not_wrap() {
        assert_eq!(cycle_index(2, 6, Cycle::Forward), 3);
        assert_eq!(cycle_index(2, 6, Cycle::Backward), 1);
    }

    #[test]
    fn crosshair_down_from_zero_lands_on_six() {
        // Seven crosshair images; DOWN is a backward step.
        let mut session = GameSession::default();
        session.cycle_crosshair(Cycle::Backward);
        assert_eq!(session.crosshair_index, 6);
        session.cycle_crosshair(Cycle::Forward);
        assert_eq!(session.crosshair_index, 0);
    }
}
