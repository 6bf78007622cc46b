//! Level description: parsed from RON and validated into simulation types
//! before the app starts.

use bevy::prelude::*;
use nalgebra::Point3;
use serde::Deserialize;
use sim::{CheckpointTrack, Playfield, TrackError};
use thiserror::Error;

const DEFAULT_LEVEL: &str = include_str!("../../assets/level.ron");

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level file is not valid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("checkpoint configuration rejected: {0}")]
    Checkpoints(#[from] TrackError),
}

/// On-disk level description.
#[derive(Debug, Deserialize)]
pub struct LevelConfig {
    pub spawn: [f32; 3],
    pub half_width: f32,
    pub half_depth: f32,
    pub floor_y: f32,
    #[serde(default = "default_checkpoint_radius")]
    pub checkpoint_radius: f32,
    pub checkpoints: Vec<[f32; 3]>,
}

fn default_checkpoint_radius() -> f32 {
    sim::constants::DEFAULT_CHECKPOINT_RADIUS
}

/// Validated level data, ready for the simulation. Built once in `main`
/// so a broken level file can never reach the first frame.
#[derive(Resource, Clone, Debug)]
pub struct LevelSetup {
    pub spawn: Point3<f32>,
    pub playfield: Playfield,
    pub checkpoints: CheckpointTrack,
}

impl LevelSetup {
    pub fn load_default() -> Result<Self, LevelError> {
        Self::parse(DEFAULT_LEVEL)
    }

    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let config: LevelConfig = ron::from_str(source)?;
        let anchors = config.checkpoints.iter().map(|a| point(*a)).collect();
        let checkpoints = CheckpointTrack::new(anchors, config.checkpoint_radius)?;

        Ok(Self {
            spawn: point(config.spawn),
            playfield: Playfield {
                half_width: config.half_width,
                half_depth: config.half_depth,
                floor_y: config.floor_y,
            },
            checkpoints,
        })
    }
}

fn point([x, y, z]: [f32; 3]) -> Point3<f32> {
    Point3::new(x, y, z)
}

/// nalgebra-to-Bevy boundary conversion.
pub(crate) fn to_vec3(p: &Point3<f32>) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_level_parses_and_validates() {
        let level = LevelSetup::load_default().unwrap();

        assert_eq!(level.checkpoints.anchors().len(), 4);
        assert_eq!(level.checkpoints.current_index(), 0);
        assert_eq!(level.playfield.half_width, 30.0);
        assert_eq!(level.playfield.floor_y, -5.0);
        assert_eq!(level.spawn, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn level_without_checkpoints_is_rejected() {
        let source = r#"(
            spawn: (0.0, 0.0, 0.0),
            half_width: 30.0,
            half_depth: 10.0,
            floor_y: -5.0,
            checkpoint_radius: 2.0,
            checkpoints: [],
        )"#;

        let err = LevelSetup::parse(source).unwrap_err();
        assert!(matches!(err, LevelError::Checkpoints(TrackError::Empty)));
    }

    #[test]
    fn malformed_level_is_rejected() {
        assert!(matches!(
            LevelSetup::parse("(spawn: oops)"),
            Err(LevelError::Parse(_))
        ));
    }
}
