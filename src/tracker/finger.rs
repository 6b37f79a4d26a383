//! Per-finger fold classification.

use crate::tracker::hand_side::HandSide;
use crate::tracker::hand_tracker::TrackerConfig;
use crate::tracker::landmark::{JOINTS_PER_FINGER, Landmark};

/// Finger identity. The thumb folds sideways, the others vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerKind {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl FingerKind {
    /// All fingers in detector order.
    pub const ALL: [FingerKind; 5] = [
        FingerKind::Thumb,
        FingerKind::Index,
        FingerKind::Middle,
        FingerKind::Ring,
        FingerKind::Pinky,
    ];

    /// Position of this finger's chain in a detection (0 = thumb).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Thumb => 0,
            Self::Index => 1,
            Self::Middle => 2,
            Self::Ring => 3,
            Self::Pinky => 4,
        }
    }
}

/// One finger chain, base joint first, tip last.
#[derive(Debug, Clone, PartialEq)]
pub struct Finger {
    pub kind: FingerKind,
    joints: [Landmark; JOINTS_PER_FINGER],
}

impl Finger {
    pub fn new(kind: FingerKind, joints: [Landmark; JOINTS_PER_FINGER]) -> Self {
        Self { kind, joints }
    }

    /// Replace all four joints with this frame's positions.
    pub fn update(&mut self, joints: [Landmark; JOINTS_PER_FINGER]) {
        self.joints = joints;
    }

    pub fn joints(&self) -> &[Landmark; JOINTS_PER_FINGER] {
        &self.joints
    }

    pub fn base(&self) -> &Landmark {
        &self.joints[0]
    }

    pub fn tip(&self) -> &Landmark {
        &self.joints[JOINTS_PER_FINGER - 1]
    }

    /// Fold classification.
    ///
    /// Ordinary fingers: folded when `(base.y - tip.y) * fold_scale` exceeds
    /// `fold_threshold`, i.e. the tip sits well above the base in image space.
    /// The thumb compares the tip's x against the joint before it; the
    /// direction depends on `side`.
    ///
    /// The hand's finger count is the number of fingers reporting `true` here.
    pub fn fold_state(&self, side: HandSide, config: &TrackerConfig) -> bool {
        match self.kind {
            FingerKind::Thumb => {
                let tip = self.tip();
                let mid = &self.joints[JOINTS_PER_FINGER - 2];
                match side {
                    HandSide::Left => tip.x > mid.x,
                    HandSide::Right => tip.x < mid.x,
                }
            }
            _ => {
                let tip_y = self.tip().y * config.fold_scale;
                let base_y = self.base().y * config.fold_scale;
                base_y - tip_y > config.fold_threshold
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(kind: FingerKind, base_y: f32, tip_y: f32) -> Finger {
        Finger::new(
            kind,
            [
                Landmark::new(0.5, base_y, 0.0),
                Landmark::new(0.5, base_y, 0.0),
                Landmark::new(0.5, tip_y, 0.0),
                Landmark::new(0.5, tip_y, 0.0),
            ],
        )
    }

    fn thumb(mid_x: f32, tip_x: f32) -> Finger {
        Finger::new(
            FingerKind::Thumb,
            [
                Landmark::new(0.5, 0.5, 0.0),
                Landmark::new(0.5, 0.5, 0.0),
                Landmark::new(mid_x, 0.5, 0.0),
                Landmark::new(tip_x, 0.5, 0.0),
            ],
        )
    }

    #[test]
    fn test_fold_threshold_default_scale() {
        let config = TrackerConfig::default();
        // 0.1 * 1100 = 110 > 75
        assert!(vertical(FingerKind::Index, 0.6, 0.5).fold_state(HandSide::Left, &config));
        // 0.05 * 1100 = 55
        assert!(!vertical(FingerKind::Index, 0.55, 0.5).fold_state(HandSide::Left, &config));
        // Tip below base never folds
        assert!(!vertical(FingerKind::Ring, 0.5, 0.9).fold_state(HandSide::Right, &config));
    }

    #[test]
    fn test_fold_threshold_boundary_is_exclusive() {
        // Dyadic scale so the scaled difference is exactly 75.
        let config = TrackerConfig {
            fold_scale: 1024.0,
            ..TrackerConfig::default()
        };
        let at_boundary = vertical(FingerKind::Middle, 587.0 / 1024.0, 0.5);
        assert!(!at_boundary.fold_state(HandSide::Left, &config));

        let just_over = vertical(FingerKind::Middle, 588.0 / 1024.0, 0.5);
        assert!(just_over.fold_state(HandSide::Left, &config));
    }

    #[test]
    fn test_thumb_depends_on_side() {
        let config = TrackerConfig::default();
        let finger = thumb(0.4, 0.45);
        assert!(finger.fold_state(HandSide::Left, &config));
        assert!(!finger.fold_state(HandSide::Right, &config));

        let finger = thumb(0.4, 0.35);
        assert!(!finger.fold_state(HandSide::Left, &config));
        assert!(finger.fold_state(HandSide::Right, &config));
    }

    #[test]
    fn test_thumb_ignores_vertical_rule() {
        let config = TrackerConfig::default();
        // Tip far above base, but x equal: never folded for either side.
        let mut finger = vertical(FingerKind::Thumb, 0.9, 0.1);
        finger.update([
            Landmark::new(0.5, 0.9, 0.0),
            Landmark::new(0.5, 0.7, 0.0),
            Landmark::new(0.5, 0.3, 0.0),
            Landmark::new(0.5, 0.1, 0.0),
        ]);
        assert!(!finger.fold_state(HandSide::Left, &config));
        assert!(!finger.fold_state(HandSide::Right, &config));
    }
}
