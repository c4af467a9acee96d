//! Crosshair cursor - replaces the OS pointer during gameplay.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::catalog;
use crate::core::GameSession;

/// On-screen crosshair size in world units (3x the source art).
const CROSSHAIR_SIZE: Vec2 = Vec2::new(36.0, 36.0);

/// Marker for the crosshair sprite following the mouse.
#[derive(Component)]
pub struct CrosshairCursor;

pub fn hide_native_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.visible = false;
    }
}

pub fn show_native_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.visible = true;
    }
}

/// Spawn the crosshair chosen on the selector screen. Hidden until the
/// mouse moves inside the window.
pub fn spawn_crosshair(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    session: Res<GameSession>,
) {
    commands.spawn((
        Sprite {
            image: asset_server.load(catalog::CROSSHAIRS[session.crosshair_index]),
            custom_size: Some(CROSSHAIR_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        Visibility::Hidden,
        CrosshairCursor,
    ));
}

/// Keep the crosshair under the mouse; hide it while the cursor is
/// outside the window.
pub fn follow_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut query: Query<(&mut Transform, &mut Visibility), With<CrosshairCursor>>,
) {
    let Ok((mut transform, mut visibility)) = query.get_single_mut() else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    match window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
    {
        Some(point) => {
            transform.translation.x = point.x;
            transform.translation.y = point.y;
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

pub fn cleanup_crosshair(mut commands: Commands, query: Query<Entity, With<CrosshairCursor>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
