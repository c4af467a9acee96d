//! Title screen - welcome backdrop, looping music, flashing start prompt.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::catalog;
use crate::core::GameState;
use crate::ui::{FlashingText, TEXT_ORANGE};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Marker for title screen entities.
#[derive(Component)]
pub struct TitleScene;

pub fn spawn_title(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::WELCOME),
            custom_size: Some(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            ..default()
        },
        TitleScene,
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            TitleScene,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PRESS ENTER TO START\nPRESS ESC TO EXIT"),
                TextFont {
                    font_size: 54.0,
                    ..default()
                },
                TextColor(TEXT_ORANGE),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    // Below the logo on the welcome image
                    margin: UiRect::top(Val::Px(180.0)),
                    ..default()
                },
                FlashingText::default(),
            ));
        });
}

pub fn title_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Selecting);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

pub fn cleanup_title(mut commands: Commands, query: Query<Entity, With<TitleScene>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
