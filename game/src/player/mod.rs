mod input;
mod tick;

use bevy::prelude::*;
use sim::ActorSim;
use sim::constants::RUN_SPEED_MPS;

use crate::level::{LevelSetup, to_vec3};

/// The character model. Scene 0 plus five baked animation clips.
pub const PLAYER_SCENE: &str = "models/character.glb";

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_player);

    // One ordered chain per frame: sample input, latch one-shots, advance
    // the simulation, then pick the animation for the committed state.
    app.add_systems(
        Update,
        (
            input::sample_intent,
            input::arm_one_shots,
            tick::tick_actor,
            crate::animation::drive_animations,
        )
            .chain(),
    );
}

/// The controllable actor.
#[derive(Component)]
pub struct Player;

/// Single owner of the actor's simulation state (transform, behavioral
/// state, checkpoint progress). Written only by `tick::tick_actor`.
#[derive(Component)]
pub struct Actor(pub ActorSim);

fn spawn_player(mut commands: Commands, level: Res<LevelSetup>, asset_server: Res<AssetServer>) {
    let sim = ActorSim::new(
        level.spawn,
        level.playfield,
        level.checkpoints.clone(),
        RUN_SPEED_MPS,
    );

    commands.spawn((
        Player,
        Actor(sim),
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(PLAYER_SCENE))),
        Transform::from_translation(to_vec3(&level.spawn)).with_scale(Vec3::splat(1.5)),
    ));
}
