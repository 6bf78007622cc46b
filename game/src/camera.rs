use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::player::Player;

/// Fixed offset from the actor to the camera: a 45-degree diagonal trail.
const CAMERA_OFFSET: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Vertical world-space extent of the orthographic frustum (meters).
/// The horizontal extent follows the live viewport aspect ratio.
const FRUSTUM_HEIGHT: f32 = 12.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(PostUpdate, follow_player);
}

fn add_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: FRUSTUM_HEIGHT,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Stateless follow: the camera pose is a pure function of the actor's
/// position.
fn follow_player(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    target: Query<&Transform, (With<Player>, Without<Camera3d>)>,
) {
    let Ok(mut cam_tf) = camera_query.single_mut() else {
        return;
    };
    let Ok(target) = target.single() else {
        return;
    };

    cam_tf.translation = target.translation + CAMERA_OFFSET;
    cam_tf.look_at(target.translation, Vec3::Y);
}
