//! Audio plugin - music and sound effects, driven by the global events.
//!
//! Nothing else in the game touches the audio API; systems announce what
//! happened (a shot, a downed duck, a decided level) and this plugin
//! plays the matching clip.

use bevy::prelude::*;
use bevy_kira_audio::prelude::{Audio, AudioControl, AudioSource};

use crate::catalog::sounds;
use crate::core::{DuckDowned, GameState, Outcome, OutcomeDecided, ShotFired, StartRequested};

/// Handles for every named sound clip.
#[derive(Resource)]
pub struct SoundLibrary {
    pub title: Handle<AudioSource>,
    pub intro: Handle<AudioSource>,
    pub gunshot: Handle<AudioSource>,
    pub duck_falls: Handle<AudioSource>,
    pub level_completed: Handle<AudioSource>,
    pub game_completed: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
}

/// Audio plugin - loads the sound library and reacts to game events.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_sound_library)
            .add_systems(OnEnter(GameState::Title), play_title_music)
            // Key handling already stopped the level; silence its jingles
            .add_systems(OnExit(GameState::Playing), stop_all)
            .add_systems(Update, play_intro_on_start)
            .add_systems(
                Update,
                play_level_sounds.run_if(in_state(GameState::Playing)),
            );
    }
}

fn load_sound_library(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundLibrary {
        title: asset_server.load(sounds::TITLE),
        intro: asset_server.load(sounds::INTRO),
        gunshot: asset_server.load(sounds::GUNSHOT),
        duck_falls: asset_server.load(sounds::DUCK_FALLS),
        level_completed: asset_server.load(sounds::LEVEL_COMPLETED),
        game_completed: asset_server.load(sounds::GAME_COMPLETED),
        game_over: asset_server.load(sounds::GAME_OVER),
    });
}

/// Loop the title music on the title and selector screens.
fn play_title_music(audio: Res<Audio>, library: Res<SoundLibrary>) {
    audio.stop();
    audio.play(library.title.clone()).looped();
}

fn stop_all(audio: Res<Audio>) {
    audio.stop();
}

/// Swap the title music for the intro jingle while the start countdown runs.
fn play_intro_on_start(
    mut events: EventReader<StartRequested>,
    audio: Res<Audio>,
    library: Res<SoundLibrary>,
) {
    if !events.is_empty() {
        events.clear();
        audio.stop();
        audio.play(library.intro.clone());
    }
}

/// One-shot effects during a level: gunshots, falling ducks, outcomes.
fn play_level_sounds(
    mut shots: EventReader<ShotFired>,
    mut downed: EventReader<DuckDowned>,
    mut outcomes: EventReader<OutcomeDecided>,
    audio: Res<Audio>,
    library: Res<SoundLibrary>,
) {
    if !shots.is_empty() {
        shots.clear();
        audio.play(library.gunshot.clone());
    }

    for _ in downed.read() {
        audio.play(library.duck_falls.clone());
    }

    for event in outcomes.read() {
        match (event.outcome, event.final_level) {
            (Outcome::Win, false) => {
                audio.play(library.level_completed.clone());
            }
            (Outcome::Win, true) => {
                audio.play(library.game_completed.clone());
            }
            (Outcome::Lose, _) => {
                audio.play(library.game_over.clone());
            }
            (Outcome::Undecided, _) => {}
        }
    }
}
