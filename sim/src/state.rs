/// Which of the two attack animations a press maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    /// Left mouse button.
    Light,
    /// Right mouse button.
    Heavy,
}

/// The actor's authoritative behavioral state.
///
/// Exactly one variant is active at a time; the vertical modes and the
/// action mode can never overlap because they share the tag. Horizontal
/// movement is still applied during `Jumping` (aerial control) and
/// `Attacking` (strafing), but suppressed entirely during `Falling`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActorState {
    Idle,
    Running,
    /// Scripted jump arc in flight. `elapsed` accumulates frame deltas;
    /// `duration` is the authored jump clip length in seconds.
    Jumping { elapsed: f32, duration: f32 },
    /// Out-of-bounds descent. `vertical_speed` is zero on entry and grows
    /// more negative under constant acceleration.
    Falling { vertical_speed: f32 },
    /// One-shot attack in flight. Force-completed once `elapsed` reaches
    /// `max_duration`, even if the clip never reports finishing.
    Attacking {
        kind: AttackKind,
        elapsed: f32,
        max_duration: f32,
    },
}

impl ActorState {
    pub fn is_falling(&self) -> bool {
        matches!(self, Self::Falling { .. })
    }

    /// Is a one-shot action (jump or attack) currently in flight?
    pub fn in_flight_action(&self) -> bool {
        matches!(self, Self::Jumping { .. } | Self::Attacking { .. })
    }
}

/// Edge-triggered one-shot requests.
///
/// Armed by the input layer on a released-to-pressed transition and
/// cleared exactly once by the state machine when it accepts the request
/// into a transition. Arming while already armed is a no-op, so a request
/// is never queued twice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OneShots {
    pub jump: bool,
    pub attack: Option<AttackKind>,
}

impl OneShots {
    pub fn arm_jump(&mut self) {
        self.jump = true;
    }

    /// The first armed kind wins; re-pressing either button before the
    /// pending attack is consumed is ignored.
    pub fn arm_attack(&mut self, kind: AttackKind) {
        if self.attack.is_none() {
            self.attack = Some(kind);
        }
    }

    pub fn clear_jump(&mut self) {
        self.jump = false;
    }

    pub fn clear_attack(&mut self) {
        self.attack = None;
    }
}
