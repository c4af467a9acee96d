//! In-level HUD - level/ammo status and outcome texts.

use bevy::prelude::*;

use crate::core::{GameSession, Outcome, OutcomeDecided};
use crate::level::{LevelProgress, LevelRegistry};

use super::text_fx::{FadeInText, FlashingText};

/// The orange used by every game text.
pub const TEXT_ORANGE: Color = Color::srgb(1.0, 0.65, 0.0);

const HEADLINE_SIZE: f32 = 48.0;
const STATUS_SIZE: f32 = 30.0;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the ammo counter text.
#[derive(Component)]
pub struct AmmoText;

/// The outcome texts, hidden until the level is decided.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeText {
    /// "YOU WIN!"
    Win,
    /// "GAME OVER!"
    Lose,
    /// "You have completed the game!"
    Completed,
    /// "Press ENTER to play next level"
    NextLevel,
    /// "Press ENTER to play again / Press ESC to exit"
    PlayAgain,
}

/// Spawn the HUD for the current level.
pub fn spawn_hud(mut commands: Commands, session: Res<GameSession>, registry: Res<LevelRegistry>) {
    // Level counter, top center
    commands.spawn((
        Text::new(format!("Level {}/{}", session.level, registry.last_level())),
        TextFont {
            font_size: STATUS_SIZE,
            ..default()
        },
        TextColor(TEXT_ORANGE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            width: Val::Percent(100.0),
            ..default()
        },
        HudRoot,
    ));

    // Ammo counter, top right
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: STATUS_SIZE,
            ..default()
        },
        TextColor(TEXT_ORANGE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            right: Val::Px(16.0),
            ..default()
        },
        AmmoText,
        HudRoot,
    ));

    // Outcome texts, stacked in the middle of the screen
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_outcome_text(parent, "YOU WIN!", OutcomeText::Win);
            spawn_outcome_text(parent, "GAME OVER!", OutcomeText::Lose);
            spawn_outcome_text(parent, "You have completed the game!", OutcomeText::Completed);
            spawn_outcome_text(parent, "Press ENTER to play next level", OutcomeText::NextLevel);
            spawn_outcome_text(
                parent,
                "Press ENTER to play again\nPress ESC to exit",
                OutcomeText::PlayAgain,
            );
        });
}

fn spawn_outcome_text(parent: &mut ChildBuilder, text: &str, kind: OutcomeText) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: HEADLINE_SIZE,
            ..default()
        },
        TextColor(TEXT_ORANGE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            margin: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        Visibility::Hidden,
        kind,
    ));
}

/// Keep the ammo counter in sync with the level progress.
pub fn update_ammo_text(
    progress: Res<LevelProgress>,
    mut query: Query<&mut Text, With<AmmoText>>,
) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    text.0 = format!("Ammo Left: {}", progress.ammo());
}

/// Reveal the texts matching a decided outcome.
///
/// The headline fades in and the key prompt flashes.
pub fn reveal_outcome_texts(
    mut commands: Commands,
    mut events: EventReader<OutcomeDecided>,
    mut query: Query<(Entity, &OutcomeText, &mut Visibility)>,
) {
    for event in events.read() {
        let (headline, prompt) = match (event.outcome, event.final_level) {
            (Outcome::Win, false) => (OutcomeText::Win, OutcomeText::NextLevel),
            (Outcome::Win, true) => (OutcomeText::Completed, OutcomeText::PlayAgain),
            (Outcome::Lose, _) => (OutcomeText::Lose, OutcomeText::PlayAgain),
            (Outcome::Undecided, _) => continue,
        };

        for (entity, kind, mut visibility) in query.iter_mut() {
            if *kind == headline {
                *visibility = Visibility::Visible;
                commands.entity(entity).insert(FadeInText::default());
            } else if *kind == prompt {
                *visibility = Visibility::Visible;
                commands.entity(entity).insert(FlashingText::default());
            }
        }
    }
}

/// Clean up HUD entities.
pub fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
