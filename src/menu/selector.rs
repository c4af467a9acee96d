//! Background and crosshair selection screen.
//!
//! Arrow keys cycle the previewed background and crosshair; the choice
//! lives in [`GameSession`] and is read back by every level scene.
//! Confirming starts a non-blocking countdown sized to the intro jingle
//! before the first level begins.

use bevy::prelude::*;

use crate::catalog;
use crate::core::{Cycle, GameSession, GameState, StartCountdown, StartRequested};
use crate::ui::TEXT_ORANGE;
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Marker for selector screen entities.
#[derive(Component)]
pub struct SelectorScene;

/// Marker for the full-screen background preview sprite.
#[derive(Component)]
pub struct BackgroundPreview;

/// Marker for the centered crosshair preview sprite.
#[derive(Component)]
pub struct CrosshairPreview;

pub fn spawn_selector(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<GameSession>,
) {
    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::BACKGROUNDS[session.background_index]),
            custom_size: Some(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            ..default()
        },
        BackgroundPreview,
        SelectorScene,
    ));

    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::CROSSHAIRS[session.crosshair_index]),
            custom_size: Some(Vec2::new(36.0, 36.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        CrosshairPreview,
        SelectorScene,
    ));

    commands.spawn((
        Text::new("USE ARROW KEYS TO NAVIGATE\nPRESS ENTER TO START\nPRESS ESC TO ESCAPE"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(TEXT_ORANGE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            width: Val::Percent(100.0),
            ..default()
        },
        SelectorScene,
    ));
}

/// Cycle the previews and confirm or leave the screen.
///
/// Not run while the start countdown is ticking; input during the intro
/// is ignored.
pub fn selector_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextState<GameState>>,
    mut start_events: EventWriter<StartRequested>,
) {
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        session.cycle_background(Cycle::Backward);
    } else if keyboard.just_pressed(KeyCode::ArrowRight) {
        session.cycle_background(Cycle::Forward);
    } else if keyboard.just_pressed(KeyCode::ArrowUp) {
        session.cycle_crosshair(Cycle::Forward);
    } else if keyboard.just_pressed(KeyCode::ArrowDown) {
        session.cycle_crosshair(Cycle::Backward);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Title);
    } else if keyboard.just_pressed(KeyCode::Enter) {
        commands.init_resource::<StartCountdown>();
        start_events.send(StartRequested);
    }
}

/// Swap the preview images when the selection changes.
pub fn refresh_previews(
    asset_server: Res<AssetServer>,
    session: Res<GameSession>,
    mut backgrounds: Query<&mut Sprite, With<BackgroundPreview>>,
    mut crosshairs: Query<&mut Sprite, (With<CrosshairPreview>, Without<BackgroundPreview>)>,
) {
    if let Ok(mut sprite) = backgrounds.get_single_mut() {
        sprite.image = asset_server.load(catalog::BACKGROUNDS[session.background_index]);
    }
    if let Ok(mut sprite) = crosshairs.get_single_mut() {
        sprite.image = asset_server.load(catalog::CROSSHAIRS[session.crosshair_index]);
    }
}

pub fn cleanup_selector(mut commands: Commands, query: Query<Entity, With<SelectorScene>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
