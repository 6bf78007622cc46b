pub mod actor;
pub mod checkpoint;
pub mod constants;
pub mod intent;
pub mod motion;
pub mod playfield;
pub mod state;

pub use actor::{ActorSim, TickInput, TickOutput};
pub use checkpoint::{CheckpointTrack, TrackError};
pub use intent::MoveIntent;
pub use playfield::Playfield;
pub use state::{ActorState, AttackKind, OneShots};
