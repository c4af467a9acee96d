//! The level runner: scene spawning, shooting, animation, progression.
//!
//! One parameterized set of systems runs every level; which ducks fly
//! and how much ammo the player gets comes entirely from the
//! [`LevelRegistry`] data.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::catalog::{self, FALL_FRAME, HIT_FRAME};
use crate::core::{DuckDowned, GameSession, GameState, Outcome, OutcomeDecided, ShotFired};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

use super::animation::MotionSchedule;
use super::components::*;
use super::data::LevelRegistry;
use super::logic::LevelProgress;

/// Build the level scene from the session's current level definition.
pub fn spawn_level(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<GameSession>,
    registry: Res<LevelRegistry>,
) {
    let Some(spec) = registry.get(session.level) else {
        error!("Level {} not found in registry", session.level);
        return;
    };

    info!(
        "Starting level {} ({} ducks, {} rounds)",
        spec.number,
        spec.ducks.len(),
        spec.ammo
    );

    let screen = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    // Background behind the ducks, foreground overlay in front of them
    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::BACKGROUNDS[session.background_index]),
            custom_size: Some(screen),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        LevelScene,
    ));
    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::FOREGROUNDS[session.background_index]),
            custom_size: Some(screen),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
        LevelScene,
    ));

    for duck in &spec.ducks {
        let frames = duck
            .style
            .flap_frames()
            .map(|n| asset_server.load(duck.color.frame(n)));
        let schedule = MotionSchedule::from_spec(duck);
        let start = schedule.sample(0.0);

        commands.spawn((
            Sprite {
                image: frames[0].clone(),
                custom_size: Some(DUCK_SIZE),
                ..default()
            },
            Transform::from_translation(start.extend(1.0)),
            Duck,
            DuckMotion::new(schedule),
            FlapCycle::new(frames),
            DeathSprites {
                hit: asset_server.load(duck.color.frame(HIT_FRAME)),
                fall: asset_server.load(duck.color.frame(FALL_FRAME)),
            },
            LevelScene,
        ));
    }

    commands.insert_resource(LevelProgress::new(spec.ammo, spec.ducks.len() as u32));
}

/// Tear the level scene down when leaving the Playing state.
pub fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelScene>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<LevelProgress>();
}

/// Process a click as a shot: hit-test every live duck, spend a round,
/// and decide the outcome.
#[allow(clippy::too_many_arguments)]
pub fn handle_shot(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut progress: ResMut<LevelProgress>,
    session: Res<GameSession>,
    registry: Res<LevelRegistry>,
    mut ducks: Query<
        (Entity, &Transform, &mut Sprite, &DeathSprites),
        (With<Duck>, Without<Falling>),
    >,
    mut shots: EventWriter<ShotFired>,
    mut downed: EventWriter<DuckDowned>,
    mut outcomes: EventWriter<OutcomeDecided>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    // The level is over; clicks are no-ops until a key resolves it
    if progress.concluded() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    shots.send(ShotFired { position: point });

    let mut hits = 0;
    for (entity, transform, mut sprite, death) in ducks.iter_mut() {
        let bounds = Rect::from_center_size(transform.translation.truncate(), DUCK_SIZE);
        if !bounds.contains(point) {
            continue;
        }

        hits += 1;
        sprite.image = death.hit.clone();
        commands
            .entity(entity)
            .remove::<(DuckMotion, FlapCycle)>()
            .insert(Falling::new(transform.translation.y));
        downed.send(DuckDowned { duck: entity });
    }

    let outcome = progress.register_shot(hits);
    if outcome != Outcome::Undecided {
        outcomes.send(OutcomeDecided {
            outcome,
            final_level: session.level >= registry.last_level(),
        });
    }
}

/// Advance every live duck along its motion schedule, mirroring the
/// sprite on the return leg.
pub fn animate_ducks(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut DuckMotion, &mut Sprite), With<Duck>>,
) {
    for (mut transform, mut motion, mut sprite) in query.iter_mut() {
        motion.elapsed += time.delta_secs();
        let pos = motion.schedule.sample(motion.elapsed);

        let dx = pos.x - transform.translation.x;
        if dx > f32::EPSILON {
            sprite.flip_x = false;
        } else if dx < -f32::EPSILON {
            sprite.flip_x = true;
        }

        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

/// Cycle the wing-flap frames of every live duck.
pub fn animate_flap(
    time: Res<Time>,
    mut query: Query<(&mut FlapCycle, &mut Sprite), With<Duck>>,
) {
    for (mut flap, mut sprite) in query.iter_mut() {
        if flap.timer.tick(time.delta()).just_finished() {
            let index = flap.advance();
            sprite.image = flap.frames[index].clone();
        }
    }
}

/// Play out the death animation: hold the hit pose, then drop the duck
/// below the bottom edge of the screen.
pub fn animate_falling(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Sprite, &mut Falling, &DeathSprites)>,
) {
    let target_y = -WINDOW_HEIGHT / 2.0 - DUCK_SIZE.y;

    for (mut transform, mut sprite, mut falling, death) in query.iter_mut() {
        if !falling.hold.finished() {
            if falling.hold.tick(time.delta()).just_finished() {
                sprite.image = death.fall.clone();
                sprite.flip_x = false;
            }
            continue;
        }

        if falling.fall.finished() {
            continue;
        }
        falling.fall.tick(time.delta());
        let fraction = falling.fall.fraction();
        transform.translation.y = falling.start_y + (target_y - falling.start_y) * fraction;
    }
}

/// Resolve the decided level on key input.
///
/// Keys do nothing while the outcome is undecided. On a win ENTER
/// advances (or replays from level 1 after the final level); on a loss
/// ENTER restarts from level 1 and ESC returns to the title screen.
pub fn handle_outcome_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    progress: Res<LevelProgress>,
    mut session: ResMut<GameSession>,
    registry: Res<LevelRegistry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match progress.outcome() {
        Outcome::Undecided => {}
        Outcome::Win => {
            let final_level = session.level >= registry.last_level();
            if keyboard.just_pressed(KeyCode::Enter) {
                session.level = if final_level { 1 } else { session.level + 1 };
                next_state.set(GameState::LevelTransition);
            } else if final_level && keyboard.just_pressed(KeyCode::Escape) {
                next_state.set(GameState::Title);
            }
        }
        Outcome::Lose => {
            if keyboard.just_pressed(KeyCode::Enter) {
                session.level = 1;
                next_state.set(GameState::LevelTransition);
            } else if keyboard.just_pressed(KeyCode::Escape) {
                next_state.set(GameState::Title);
            }
        }
    }
}
