use bevy::prelude::*;
use sim::constants::{FALLBACK_ATTACK_CLIP_SECONDS, FALLBACK_JUMP_CLIP_SECONDS};
use sim::{ActorState, TickInput};

use super::{Actor, Player};
use crate::animation::{ActorAnimations, AnimationId};
use crate::input::{CurrentIntent, PendingActions};
use crate::level::to_vec3;

/// The per-frame orchestrator, and the only writer of [`Actor`]: builds
/// the tick input from the sampled intent, the one-shot latch, and the
/// animation clip facts, advances the simulation, then commits the new
/// transform.
pub(super) fn tick_actor(
    mut actors: Query<(&mut Actor, &mut Transform), With<Player>>,
    intent: Res<CurrentIntent>,
    mut pending: ResMut<PendingActions>,
    anims: Res<ActorAnimations>,
    clips: Res<Assets<AnimationClip>>,
    rigs: Query<&AnimationPlayer>,
    time: Res<Time>,
) {
    let Ok((mut actor, mut transform)) = actors.single_mut() else {
        return;
    };

    // Completion fact for whichever one-shot action is in flight. The
    // animation system reports a finished clip on a later frame than the
    // one that started it; the simulation is written to tolerate that.
    let action_finished = match actor.0.state {
        ActorState::Jumping { .. } => clip_finished(&rigs, &anims, AnimationId::Jump),
        ActorState::Attacking { kind, .. } => {
            clip_finished(&rigs, &anims, AnimationId::from_attack(kind))
        }
        _ => false,
    };

    // Clip lengths come from the loaded assets; a missing clip falls back
    // to a nominal length so the state machine still progresses.
    let jump_duration = anims
        .clip_seconds(AnimationId::Jump, &clips)
        .unwrap_or(FALLBACK_JUMP_CLIP_SECONDS);
    let attack_duration = pending
        .0
        .attack
        .and_then(|kind| anims.clip_seconds(AnimationId::from_attack(kind), &clips))
        .unwrap_or(FALLBACK_ATTACK_CLIP_SECONDS);

    let out = actor.0.tick(&TickInput {
        intent: intent.0,
        jump: pending.0.jump,
        attack: pending.0.attack,
        action_finished,
        jump_duration,
        attack_duration,
        dt: time.delta_secs(),
    });

    if out.consumed_jump {
        pending.0.clear_jump();
    }
    if out.consumed_attack {
        pending.0.clear_attack();
    }
    if out.respawned {
        info!(
            checkpoint = actor.0.checkpoints().current_index(),
            "fell out of bounds, respawned"
        );
    }
    if let Some(index) = out.reached_checkpoint {
        info!(index, "checkpoint reached");
    }

    transform.translation = to_vec3(&actor.0.position);
    transform.rotation = Quat::from_rotation_y(actor.0.yaw);
}

fn clip_finished(
    rigs: &Query<&AnimationPlayer>,
    anims: &ActorAnimations,
    id: AnimationId,
) -> bool {
    let node = anims.node(id);
    rigs.iter()
        .any(|player| player.animation(node).is_some_and(|a| a.is_finished()))
}
