//! The actor's per-tick update: request precedence, state transitions,
//! kinematic integration, and checkpoint/respawn handling in one place.

use nalgebra::Point3;

use crate::checkpoint::CheckpointTrack;
use crate::constants::{GROUND_Y, JUMP_HEIGHT_M, STUCK_ACTION_SAFETY_FACTOR};
use crate::intent::MoveIntent;
use crate::motion::{fall_step, jump_height, step_planar};
use crate::playfield::Playfield;
use crate::state::{ActorState, AttackKind};

/// Facts the state machine consumes for one tick.
///
/// `jump` and `attack` are views of the armed one-shot latch; consumption
/// is reported back through [`TickOutput`] so the input layer clears the
/// latch exactly when a request was accepted, and only then.
#[derive(Clone, Copy, Debug)]
pub struct TickInput {
    pub intent: MoveIntent,
    /// Armed jump one-shot.
    pub jump: bool,
    /// Armed attack one-shot.
    pub attack: Option<AttackKind>,
    /// Did the clip backing the in-flight action report finishing?
    pub action_finished: bool,
    /// Authored jump clip length (seconds).
    pub jump_duration: f32,
    /// Authored length of the armed attack's clip (seconds).
    pub attack_duration: f32,
    pub dt: f32,
}

/// What a tick did, for the layers around the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutput {
    pub consumed_jump: bool,
    pub consumed_attack: bool,
    /// The actor fell below the floor and was teleported to the respawn
    /// anchor this tick.
    pub respawned: bool,
    /// Checkpoint progression advanced to this index this tick.
    pub reached_checkpoint: Option<usize>,
}

/// The single owner of the actor's transform, behavioral state, and
/// checkpoint progress. Everything here is mutated only inside [`tick`].
///
/// [`tick`]: ActorSim::tick
#[derive(Clone, Debug)]
pub struct ActorSim {
    pub position: Point3<f32>,
    /// Yaw about +Y from the last nonzero movement direction. Persists
    /// while idle.
    pub yaw: f32,
    pub state: ActorState,
    playfield: Playfield,
    checkpoints: CheckpointTrack,
    speed_mps: f32,
}

impl ActorSim {
    pub fn new(
        spawn: Point3<f32>,
        playfield: Playfield,
        checkpoints: CheckpointTrack,
        speed_mps: f32,
    ) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
            state: ActorState::Idle,
            playfield,
            checkpoints,
            speed_mps,
        }
    }

    /// Read-only view of checkpoint progress for presentation layers.
    pub fn checkpoints(&self) -> &CheckpointTrack {
        &self.checkpoints
    }

    /// Advance the actor by one frame.
    ///
    /// Precedence, evaluated in order:
    /// 1. leaving the playable rectangle forces `Falling`
    /// 2. while falling: descend, respawn once below the floor
    /// 3. jump one-shot, accepted from `Idle`/`Running` only
    /// 4. attack one-shot, accepted from `Idle`/`Running` only
    /// 5. locomotion default: `Running` iff there is intent, else `Idle`
    pub fn tick(&mut self, input: &TickInput) -> TickOutput {
        let mut out = TickOutput::default();
        let dt = input.dt.max(0.0);

        // 1) The bounds check overrides every other state, including an
        // in-flight jump or attack.
        if !self.state.is_falling()
            && !self.playfield.contains(self.position.x, self.position.z)
        {
            self.state = ActorState::Falling {
                vertical_speed: 0.0,
            };
        }

        match self.state {
            ActorState::Falling { mut vertical_speed } => {
                // Horizontal input is suppressed for the whole descent.
                self.position.y += fall_step(&mut vertical_speed, dt);
                if self.playfield.below_floor(self.position.y) {
                    self.position = self.checkpoints.respawn_anchor();
                    self.state = ActorState::Idle;
                    out.respawned = true;
                } else {
                    self.state = ActorState::Falling { vertical_speed };
                }
            }
            ActorState::Jumping { elapsed, duration } => {
                let elapsed = elapsed + dt;
                // Aerial control: planar movement stays live mid-jump.
                self.step_planar_and_face(input.intent, dt);
                if input.action_finished || elapsed >= duration {
                    self.position.y = GROUND_Y;
                    self.state = if input.intent.is_moving() {
                        ActorState::Running
                    } else {
                        ActorState::Idle
                    };
                } else {
                    self.position.y = GROUND_Y + jump_height(elapsed, duration, JUMP_HEIGHT_M);
                    self.state = ActorState::Jumping { elapsed, duration };
                }
            }
            ActorState::Attacking {
                kind,
                elapsed,
                max_duration,
            } => {
                let elapsed = elapsed + dt;
                // Strafing while attacking is deliberate, not an oversight.
                self.step_planar_and_face(input.intent, dt);
                if input.action_finished || elapsed >= max_duration {
                    self.state = ActorState::Idle;
                } else {
                    self.state = ActorState::Attacking {
                        kind,
                        elapsed,
                        max_duration,
                    };
                }
            }
            ActorState::Idle | ActorState::Running => {
                if input.jump {
                    self.state = ActorState::Jumping {
                        elapsed: 0.0,
                        duration: input.jump_duration.max(0.0),
                    };
                    out.consumed_jump = true;
                } else if let Some(kind) = input.attack {
                    self.state = ActorState::Attacking {
                        kind,
                        elapsed: 0.0,
                        max_duration: input.attack_duration.max(0.0) * STUCK_ACTION_SAFETY_FACTOR,
                    };
                    out.consumed_attack = true;
                }
                self.step_planar_and_face(input.intent, dt);
                if !self.state.in_flight_action() {
                    self.state = if input.intent.is_moving() {
                        ActorState::Running
                    } else {
                        ActorState::Idle
                    };
                }
            }
        }

        // Checkpoint proximity runs on the committed position; a falling
        // actor cannot capture checkpoints.
        if !self.state.is_falling() {
            out.reached_checkpoint = self.checkpoints.check_proximity(&self.position);
        }

        out
    }

    fn step_planar_and_face(&mut self, intent: MoveIntent, dt: f32) {
        step_planar(&mut self.position, intent, self.speed_mps, dt);
        if let Some(yaw) = intent.yaw() {
            self.yaw = yaw;
        }
    }
}
