//! Two-slot hand tracker.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::LandmarkError;
use crate::tracker::hand::Hand;
use crate::tracker::hand_side::HandSide;
use crate::tracker::landmark::{HandDetection, index};

/// Maximum number of hands tracked per frame.
pub const MAX_HANDS: usize = 2;

/// Geometry parameters for the finger and hand classifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Height unit normalized y coordinates are scaled by before the fold test.
    pub fold_scale: f32,
    /// Scaled base-to-tip rise above which a finger counts as folded.
    pub fold_threshold: f32,
    /// Width unit normalized x coordinates are scaled by for the straightness test.
    pub straight_scale: f32,
    /// Maximum scaled horizontal offset between middle fingertip and wrist.
    pub straight_tolerance: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            fold_scale: 1100.0,
            fold_threshold: 75.0,
            straight_scale: 1100.0,
            straight_tolerance: 200.0,
        }
    }
}

/// Keeps at most one [`Hand`] per side across frames.
///
/// The tracker's whole state is a left/right slot pair. A slot keeps its
/// `Hand` while that side keeps being detected and is emptied as soon as a
/// frame no longer reports that side.
#[derive(Debug, Clone, Default)]
pub struct HandTracker {
    slots: [Option<Hand>; MAX_HANDS],
    config: TrackerConfig,
}

impl HandTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            slots: [None, None],
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Side of a detection: left when the wrist is left of the first thumb joint.
    pub fn classify_side(detection: &HandDetection) -> HandSide {
        let landmarks = detection.landmarks();
        if landmarks[index::WRIST].x < landmarks[index::THUMB_CMC].x {
            HandSide::Left
        } else {
            HandSide::Right
        }
    }

    /// Feed one frame's detections.
    ///
    /// More than [`MAX_HANDS`] detections is malformed input; the tracker is
    /// left untouched in that case.
    pub fn update(&mut self, detections: &[HandDetection]) -> Result<(), LandmarkError> {
        if detections.len() > MAX_HANDS {
            return Err(LandmarkError::TooManyHands(detections.len()));
        }

        let mut seen = [false; MAX_HANDS];
        for detection in detections {
            let side = Self::classify_side(detection);
            seen[side.index()] = true;

            let slot = &mut self.slots[side.index()];
            if let Some(hand) = slot.as_mut() {
                hand.update(detection);
            } else {
                debug!(side = side.as_str(), "hand entered");
                *slot = Some(Hand::new(side, detection));
            }
        }

        for side in HandSide::ALL {
            if !seen[side.index()] && self.slots[side.index()].take().is_some() {
                debug!(side = side.as_str(), "hand left");
            }
        }

        trace!(
            hands = self.hand_count(),
            fingers = self.count_fingers(),
            "tracker updated"
        );
        Ok(())
    }

    pub fn hand(&self, side: HandSide) -> Option<&Hand> {
        self.slots[side.index()].as_ref()
    }

    /// Present hands in slot order (left first).
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.slots.iter().flatten()
    }

    pub fn hand_count(&self) -> usize {
        self.hands().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Combined finger count over both slots (0 to 10).
    pub fn count_fingers(&self) -> u32 {
        self.hands().map(|h| h.count_fingers(&self.config)).sum()
    }
}
