use bevy::prelude::*;

#[derive(Component)]
pub struct SurfaceCamera;

/// The surface is centered on the world origin, so the camera looks straight at it.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        SurfaceCamera,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}
