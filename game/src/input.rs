use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use sim::{MoveIntent, OneShots};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveNorth,
    MoveSouth,
    MoveWest,
    MoveEast,
    Jump,
    AttackLight,
    AttackHeavy,
}

/// Directional intent sampled fresh each frame from the held key set.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CurrentIntent(pub MoveIntent);

/// One-shot request latch. Armed here on input edges; cleared only by the
/// actor tick when a request is accepted into a transition.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PendingActions(pub OneShots);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    // Two physical bindings per direction, OR-combined by the action map.
    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::MoveNorth, KeyCode::KeyW);
    input_map.insert(InputAction::MoveNorth, KeyCode::ArrowUp);
    input_map.insert(InputAction::MoveSouth, KeyCode::KeyS);
    input_map.insert(InputAction::MoveSouth, KeyCode::ArrowDown);
    input_map.insert(InputAction::MoveWest, KeyCode::KeyA);
    input_map.insert(InputAction::MoveWest, KeyCode::ArrowLeft);
    input_map.insert(InputAction::MoveEast, KeyCode::KeyD);
    input_map.insert(InputAction::MoveEast, KeyCode::ArrowRight);
    input_map.insert(InputAction::Jump, KeyCode::Space);
    input_map.insert(InputAction::AttackLight, MouseButton::Left);
    input_map.insert(InputAction::AttackHeavy, MouseButton::Right);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());

    app.init_resource::<CurrentIntent>();
    app.init_resource::<PendingActions>();
}
