use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use sim::{AttackKind, MoveIntent};

use crate::input::{CurrentIntent, InputAction, PendingActions};

/// Recompute directional intent from the held key set. No memory across
/// frames; opposing keys cancel.
pub(super) fn sample_intent(
    actions: Res<ActionState<InputAction>>,
    mut intent: ResMut<CurrentIntent>,
) {
    intent.0 = MoveIntent::from_axes(
        actions.pressed(&InputAction::MoveNorth),
        actions.pressed(&InputAction::MoveSouth),
        actions.pressed(&InputAction::MoveWest),
        actions.pressed(&InputAction::MoveEast),
    );
}

/// Latch one-shot requests on input edges. Only the actor tick clears
/// these; re-pressing while armed does nothing.
pub(super) fn arm_one_shots(
    actions: Res<ActionState<InputAction>>,
    mut pending: ResMut<PendingActions>,
) {
    if actions.just_pressed(&InputAction::Jump) {
        pending.0.arm_jump();
    }
    if actions.just_pressed(&InputAction::AttackLight) {
        pending.0.arm_attack(AttackKind::Light);
    }
    if actions.just_pressed(&InputAction::AttackHeavy) {
        pending.0.arm_attack(AttackKind::Heavy);
    }
}
