/// Ground run speed in meters per second.
///
/// The authored value was 0.05 m per 60 Hz frame; expressed here as a
/// per-second speed so integration is frame-rate independent.
pub const RUN_SPEED_MPS: f32 = 3.0;

/// Peak height of the scripted jump arc (meters).
pub const JUMP_HEIGHT_M: f32 = 1.5;

/// Gravity magnitude in meters per second squared (positive value).
/// Applied only to the out-of-bounds descent; the jump arc is scripted.
pub const GRAVITY_MPS2: f32 = 9.81;

/// Most negative vertical speed reachable while falling (meters/second).
pub const TERMINAL_FALL_SPEED_MPS: f32 = -50.0;

/// Vertical coordinate of the walkable ground plane (meters).
pub const GROUND_Y: f32 = 0.0;

/// Default half-extent of the playable rectangle along X (meters).
pub const DEFAULT_HALF_WIDTH: f32 = 30.0;

/// Default half-extent of the playable rectangle along Z (meters).
pub const DEFAULT_HALF_DEPTH: f32 = 10.0;

/// Default threshold below which a falling actor respawns (meters).
pub const DEFAULT_FLOOR_Y: f32 = -5.0;

/// Default checkpoint capture radius (meters).
pub const DEFAULT_CHECKPOINT_RADIUS: f32 = 2.0;

/// Multiplier on an attack clip's length after which the action is
/// force-completed even if the clip never reports finishing.
pub const STUCK_ACTION_SAFETY_FACTOR: f32 = 1.5;

/// Jump clip length assumed when the backing animation asset is missing
/// or not yet loaded (seconds).
pub const FALLBACK_JUMP_CLIP_SECONDS: f32 = 0.7;

/// Attack clip length assumed when the backing animation asset is missing
/// or not yet loaded (seconds).
pub const FALLBACK_ATTACK_CLIP_SECONDS: f32 = 0.8;
