//! Animation clip roster, graph setup, and cross-fade driving.
//!
//! The character GLB carries five clips. Locomotion clips loop; jump and
//! attack clips play once and clamp on their last frame, and their
//! finished flag is the completion fact the actor tick consumes.

use std::time::Duration;

use bevy::prelude::*;
use sim::{ActorState, AttackKind};

use crate::player::{Actor, PLAYER_SCENE, Player};

/// Cross-fade length for every animation swap.
const CROSSFADE: Duration = Duration::from_millis(200);

/// Logical names for the clips baked into the character GLB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationId {
    AttackLight,
    AttackHeavy,
    Idle,
    Jump,
    Run,
}

impl AnimationId {
    const ALL: [AnimationId; 5] = [
        AnimationId::AttackLight,
        AnimationId::AttackHeavy,
        AnimationId::Idle,
        AnimationId::Jump,
        AnimationId::Run,
    ];

    /// Clip index inside the GLB. The exporter writes clips in name
    /// order: attack1, attack4, idle, jump, run.
    fn clip_index(self) -> usize {
        match self {
            Self::AttackLight => 0,
            Self::AttackHeavy => 1,
            Self::Idle => 2,
            Self::Jump => 3,
            Self::Run => 4,
        }
    }

    /// Locomotion loops; one-shot actions play once and clamp.
    fn looped(self) -> bool {
        matches!(self, Self::Idle | Self::Run)
    }

    pub fn from_attack(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Light => Self::AttackLight,
            AttackKind::Heavy => Self::AttackHeavy,
        }
    }

    /// Which clip a behavioral state plays. The descent has no dedicated
    /// clip in the source asset, so it reuses the airborne pose.
    fn for_state(state: &ActorState) -> Self {
        match state {
            ActorState::Idle => Self::Idle,
            ActorState::Running => Self::Run,
            ActorState::Jumping { .. } => Self::Jump,
            ActorState::Falling { .. } => Self::Jump,
            ActorState::Attacking { kind, .. } => Self::from_attack(*kind),
        }
    }
}

/// The shared animation graph plus per-clip handles, one node per clip.
#[derive(Resource)]
pub struct ActorAnimations {
    graph: Handle<AnimationGraph>,
    nodes: [AnimationNodeIndex; 5],
    clips: [Handle<AnimationClip>; 5],
}

impl ActorAnimations {
    pub fn node(&self, id: AnimationId) -> AnimationNodeIndex {
        self.nodes[id.clip_index()]
    }

    /// Authored clip length, once the asset has loaded.
    pub fn clip_seconds(&self, id: AnimationId, clips: &Assets<AnimationClip>) -> Option<f32> {
        clips
            .get(&self.clips[id.clip_index()])
            .map(|clip| clip.duration())
    }
}

/// Which clip the rig is currently playing. Re-selecting the same clip
/// performs no fade, keeping per-frame state re-evaluation from churning
/// the mixer.
#[derive(Component)]
struct CurrentAnimation(AnimationId);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, build_graph);
    app.add_systems(Update, attach_rig);
}

fn build_graph(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    let clips: [Handle<AnimationClip>; 5] = AnimationId::ALL.map(|id| {
        asset_server.load(GltfAssetLabel::Animation(id.clip_index()).from_asset(PLAYER_SCENE))
    });

    let mut graph = AnimationGraph::new();
    let root = graph.root;
    let nodes = clips.clone().map(|clip| graph.add_clip(clip, 1.0, root));

    commands.insert_resource(ActorAnimations {
        graph: graphs.add(graph),
        nodes,
        clips,
    });
}

/// The GLB scene spawns its `AnimationPlayer` a few frames after load;
/// wire the graph and start the idle loop as soon as it appears.
fn attach_rig(
    mut commands: Commands,
    anims: Res<ActorAnimations>,
    mut rigs: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    for (entity, mut player) in &mut rigs {
        let mut transitions = AnimationTransitions::new();
        transitions
            .play(&mut player, anims.node(AnimationId::Idle), Duration::ZERO)
            .repeat();
        commands.entity(entity).insert((
            AnimationGraphHandle(anims.graph.clone()),
            transitions,
            CurrentAnimation(AnimationId::Idle),
        ));
    }
}

/// Map the committed actor state to a clip and cross-fade when it
/// changes. A state whose clip is absent from the asset still lands here
/// as a target; playing its empty node is a no-op fade and the state
/// change stands.
pub(crate) fn drive_animations(
    actors: Query<&Actor, With<Player>>,
    anims: Res<ActorAnimations>,
    mut rigs: Query<(
        &mut AnimationPlayer,
        &mut AnimationTransitions,
        &mut CurrentAnimation,
    )>,
) {
    let Ok(actor) = actors.single() else {
        return;
    };
    let target = AnimationId::for_state(&actor.0.state);

    for (mut player, mut transitions, mut current) in &mut rigs {
        if current.0 == target {
            continue;
        }
        let playing = transitions.play(&mut player, anims.node(target), CROSSFADE);
        if target.looped() {
            playing.repeat();
        }
        current.0 = target;
    }
}
