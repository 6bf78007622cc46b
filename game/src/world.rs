use bevy::prelude::*;

use crate::level::{LevelSetup, to_vec3};
use crate::player::{Actor, Player};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
    app.add_systems(Update, highlight_active_checkpoint);
}

/// Disc prop marking one checkpoint anchor.
#[derive(Component)]
struct CheckpointProp(usize);

#[derive(Resource)]
struct CheckpointMaterials {
    active: Handle<StandardMaterial>,
    inactive: Handle<StandardMaterial>,
}

fn setup(
    mut commands: Commands,
    level: Res<LevelSetup>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground sized to the playable rectangle.
    let field = level.playfield;
    commands.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(field.half_width * 2.0, field.half_depth * 2.0)
                    .build(),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    commands.insert_resource(AmbientLight {
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // One flat disc per checkpoint anchor; the current one renders lit.
    let disc = meshes.add(Cylinder::new(0.6, 0.12));
    let inactive = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.8, 0.1),
        emissive: LinearRgba::rgb(0.6, 0.3, 0.0),
        ..default()
    });
    let active = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.9, 0.2),
        emissive: LinearRgba::rgb(0.0, 0.5, 0.0),
        ..default()
    });

    for (index, anchor) in level.checkpoints.anchors().iter().enumerate() {
        commands.spawn((
            CheckpointProp(index),
            Transform::from_translation(to_vec3(anchor) + Vec3::Y * 0.06),
            Mesh3d(disc.clone()),
            MeshMaterial3d(inactive.clone()),
        ));
    }
    commands.insert_resource(CheckpointMaterials { active, inactive });
}

/// Recolor the discs so the current respawn checkpoint reads as lit.
fn highlight_active_checkpoint(
    actors: Query<&Actor, With<Player>>,
    palette: Res<CheckpointMaterials>,
    mut props: Query<(&CheckpointProp, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Ok(actor) = actors.single() else {
        return;
    };
    let current = actor.0.checkpoints().current_index();

    for (prop, mut material) in &mut props {
        let want = if prop.0 == current {
            &palette.active
        } else {
            &palette.inactive
        };
        if material.0 != *want {
            material.0 = want.clone();
        }
    }
}
