//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::session::GameSession;
use super::states::GameState;
use crate::catalog;
use crate::level::data::load_level_definitions;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Boot, Title, Selecting, Playing)
/// - Global events (ShotFired, OutcomeDecided, etc.)
/// - The session resource and basic game flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .init_resource::<GameSession>()
            // Register global events
            .add_event::<ShotFired>()
            .add_event::<DuckDowned>()
            .add_event::<OutcomeDecided>()
            .add_event::<StartRequested>()
            // One shared 2D camera for every screen
            .add_systems(Startup, spawn_camera)
            // Boot sequence: check assets, load level data, then show the title
            .add_systems(
                OnEnter(GameState::Boot),
                (catalog::validate_assets, load_level_definitions, finish_boot).chain(),
            )
            // Non-blocking delay between the selector and the first level
            .add_systems(
                Update,
                tick_start_countdown
                    .run_if(in_state(GameState::Selecting))
                    .run_if(resource_exists::<StartCountdown>),
            )
            // LevelTransition immediately re-enters Playing so the level
            // spawn/cleanup systems fire again
            .add_systems(OnEnter(GameState::LevelTransition), enter_level);
    }
}

/// Delay between confirming the selector and entering the first level,
/// sized to the intro jingle. Runs on the schedule instead of blocking
/// the event loop.
#[derive(Resource)]
pub struct StartCountdown(pub Timer);

impl Default for StartCountdown {
    fn default() -> Self {
        Self(Timer::from_seconds(6.0, TimerMode::Once))
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Move on to the title screen once boot work has run.
fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Title);
}

/// Count down the intro delay, then start level 1.
fn tick_start_countdown(
    mut commands: Commands,
    time: Res<Time>,
    mut countdown: ResMut<StartCountdown>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if countdown.0.tick(time.delta()).just_finished() {
        commands.remove_resource::<StartCountdown>();
        session.level = 1;
        next_state.set(GameState::Playing);
    }
}

fn enter_level(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}
