//! Shot resolution and outcome bookkeeping.
//!
//! Kept free of engine types so the win/lose rules can be tested on
//! their own. The click-handling system feeds it the number of ducks a
//! shot brought down; everything else (sprites, sounds, texts) reacts
//! to the returned outcome.

use bevy::prelude::*;

pub use crate::core::Outcome;

/// Ammo and liveness bookkeeping for the active level.
///
/// Invariants: ammo never increases and never goes below zero; the
/// outcome is decided at most once, after which shots are no-ops.
#[derive(Resource, Debug)]
pub struct LevelProgress {
    ammo: u32,
    alive: u32,
    outcome: Outcome,
}

impl LevelProgress {
    pub fn new(ammo: u32, ducks: u32) -> Self {
        Self {
            ammo,
            alive: ducks,
            outcome: Outcome::Undecided,
        }
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the level has already ended, making further clicks no-ops.
    pub fn concluded(&self) -> bool {
        self.outcome != Outcome::Undecided
    }

    /// Process one shot that brought down `hits` live ducks.
    ///
    /// Ammo decrements whether or not anything was hit. The win check
    /// runs before the lose check, so killing the last duck with the
    /// last round counts as a win.
    pub fn register_shot(&mut self, hits: u32) -> Outcome {
        if self.concluded() {
            return self.outcome;
        }

        self.alive = self.alive.saturating_sub(hits);
        if self.ammo > 0 {
            self.ammo -= 1;
        }

        if self.alive == 0 {
            self.outcome = Outcome::Win;
        } else if self.ammo == 0 {
            self.outcome = Outcome::Lose;
        }
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_shot_kill_wins_level_one() {
        // Level 1: one duck, three rounds
        let mut progress = LevelProgress::new(3, 1);
        assert_eq!(progress.register_shot(1), Outcome::Win);
        assert_eq!(progress.ammo(), 2);
    }

    #[test]
    fn three_misses_lose() {
        let mut progress = LevelProgress::new(3, 1);
        assert_eq!(progress.register_shot(0), Outcome::Undecided);
        assert_eq!(progress.register_shot(0), Outcome::Undecided);
        assert_eq!(progress.register_shot(0), Outcome::Lose);
        assert_eq!(progress.ammo(), 0);
    }

    #[test]
    fn two_duck_level_wins_only_after_both_dead() {
        // Level 3: two ducks, six rounds
        let mut progress = LevelProgress::new(6, 2);
        assert_eq!(progress.register_shot(1), Outcome::Undecided);
        assert_eq!(progress.register_shot(0), Outcome::Undecided);
        assert_eq!(progress.register_shot(1), Outcome::Win);
        assert_eq!(progress.ammo(), 3);
    }

    #[test]
    fn ammo_decrements_once_per_shot_and_floors_at_zero() {
        let mut progress = LevelProgress::new(2, 5);
        progress.register_shot(0);
        assert_eq!(progress.ammo(), 1);
        progress.register_shot(0);
        assert_eq!(progress.ammo(), 0);
        // Concluded: nothing changes no matter how often we fire
        progress.register_shot(3);
        assert_eq!(progress.ammo(), 0);
        assert_eq!(progress.outcome(), Outcome::Lose);
    }

    #[test]
    fn shots_after_win_change_nothing() {
        let mut progress = LevelProgress::new(3, 1);
        progress.register_shot(1);
        assert_eq!(progress.register_shot(0), Outcome::Win);
        assert_eq!(progress.ammo(), 2);
    }

    #[test]
    fn last_round_kill_of_last_duck_wins_the_tie() {
        // Ammo hits zero on the same click that clears the level:
        // the win check runs first.
        let mut progress = LevelProgress::new(1, 1);
        assert_eq!(progress.register_shot(1), Outcome::Win);
    }

    #[test]
    fn double_hit_in_one_shot_counts_both() {
        let mut progress = LevelProgress::new(6, 2);
        assert_eq!(progress.register_shot(2), Outcome::Win);
        assert_eq!(progress.ammo(), 5);
    }
}
