//! Checkpoint progression and respawn anchors.

use nalgebra::Point3;
use thiserror::Error;

/// Rejected configurations for [`CheckpointTrack::new`].
#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    /// A respawn anchor cannot be derived from nothing. An empty track is
    /// a configuration bug and is never silently defaulted to the origin.
    #[error("checkpoint track has no anchors")]
    Empty,
    #[error("checkpoint radius must be positive, got {0}")]
    NonPositiveRadius(f32),
}

/// Ordered checkpoint anchors plus the index of the checkpoint the actor
/// has progressed to.
///
/// The anchor list is fixed at load time; only `current` moves, and only
/// forward. The respawn anchor is always `anchors[current]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointTrack {
    anchors: Vec<Point3<f32>>,
    radius: f32,
    current: usize,
}

impl CheckpointTrack {
    /// Build a track from world-space anchors. Fails fast on an empty
    /// list or a non-positive capture radius.
    pub fn new(anchors: Vec<Point3<f32>>, radius: f32) -> Result<Self, TrackError> {
        if anchors.is_empty() {
            return Err(TrackError::Empty);
        }
        if radius <= 0.0 {
            return Err(TrackError::NonPositiveRadius(radius));
        }
        Ok(Self {
            anchors,
            radius,
            current: 0,
        })
    }

    /// Advance progression if `position` is within the capture radius of
    /// a later checkpoint, returning the new index.
    ///
    /// Progress is monotonic: earlier checkpoints are never re-captured,
    /// and when several anchors are in range at once the highest index
    /// wins, making the result independent of anchor spacing. Calling
    /// this again with an unchanged position is a no-op.
    pub fn check_proximity(&mut self, position: &Point3<f32>) -> Option<usize> {
        let radius_sq = self.radius * self.radius;
        let mut reached = None;
        for (index, anchor) in self.anchors.iter().enumerate().skip(self.current + 1) {
            if (position - anchor).norm_squared() < radius_sq {
                reached = Some(index);
            }
        }
        if let Some(index) = reached {
            self.current = index;
        }
        reached
    }

    /// The current respawn anchor. Pure read; never changes the track.
    pub fn respawn_anchor(&self) -> Point3<f32> {
        self.anchors[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn anchors(&self) -> &[Point3<f32>] {
        &self.anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> CheckpointTrack {
        CheckpointTrack::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(20.0, 0.0, 0.0),
            ],
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn empty_track_is_rejected() {
        assert_eq!(CheckpointTrack::new(vec![], 2.0), Err(TrackError::Empty));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let anchors = vec![Point3::origin()];
        assert_eq!(
            CheckpointTrack::new(anchors.clone(), 0.0),
            Err(TrackError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            CheckpointTrack::new(anchors, -1.0),
            Err(TrackError::NonPositiveRadius(-1.0))
        );
    }

    #[test]
    fn starts_at_the_first_anchor() {
        let track = track();
        assert_eq!(track.current_index(), 0);
        assert_eq!(track.respawn_anchor(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn advances_when_inside_the_capture_radius() {
        let mut track = track();

        // Still outside: the radius boundary itself does not capture.
        assert_eq!(track.check_proximity(&Point3::new(8.0, 0.0, 0.0)), None);

        assert_eq!(track.check_proximity(&Point3::new(8.5, 0.0, 0.0)), Some(1));
        assert_eq!(track.current_index(), 1);
        assert_eq!(track.respawn_anchor(), Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn repeated_checks_at_the_same_position_are_idempotent() {
        let mut track = track();

        assert_eq!(track.check_proximity(&Point3::new(10.0, 0.0, 0.0)), Some(1));
        assert_eq!(track.check_proximity(&Point3::new(10.0, 0.0, 0.0)), None);
        assert_eq!(track.current_index(), 1);
    }

    #[test]
    fn progress_never_moves_backward() {
        let mut track = track();
        track.check_proximity(&Point3::new(20.0, 0.0, 0.0));
        assert_eq!(track.current_index(), 2);

        // Walking back over the first disc changes nothing.
        assert_eq!(track.check_proximity(&Point3::new(0.0, 0.0, 0.0)), None);
        assert_eq!(track.current_index(), 2);
        assert_eq!(track.respawn_anchor(), Point3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn highest_index_wins_when_anchors_overlap() {
        let mut track = CheckpointTrack::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(11.0, 0.0, 0.0),
            ],
            2.0,
        )
        .unwrap();

        assert_eq!(
            track.check_proximity(&Point3::new(10.5, 0.0, 0.0)),
            Some(2)
        );
    }

    #[test]
    fn distance_is_euclidean_not_planar() {
        let mut track = track();
        // Directly above the second anchor but too high to capture it.
        assert_eq!(track.check_proximity(&Point3::new(10.0, 3.0, 0.0)), None);
        assert_eq!(track.check_proximity(&Point3::new(10.0, 1.0, 0.0)), Some(1));
    }
}
