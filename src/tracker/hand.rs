//! A tracked hand: wrist plus five finger chains.

use crate::tracker::finger::{Finger, FingerKind};
use crate::tracker::hand_side::HandSide;
use crate::tracker::hand_tracker::TrackerConfig;
use crate::tracker::landmark::{HandDetection, Landmark};
use crate::tracker::rect::Rect;

/// A hand occupying one tracker slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Slot this hand occupies
    pub side: HandSide,
    /// Wrist landmark
    pub wrist: Landmark,
    /// Thumb, index, middle, ring, pinky
    fingers: [Finger; 5],
    /// Frames this hand has been continuously present
    pub frames_seen: u32,
}

impl Hand {
    /// Create a new Hand from a detection.
    pub fn new(side: HandSide, detection: &HandDetection) -> Self {
        let fingers =
            FingerKind::ALL.map(|kind| Finger::new(kind, detection.finger_joints(kind.index())));
        Self {
            side,
            wrist: *detection.wrist(),
            fingers,
            frames_seen: 1,
        }
    }

    /// Replace wrist and finger joints in place with a newer detection.
    pub fn update(&mut self, detection: &HandDetection) {
        for finger in self.fingers.iter_mut() {
            finger.update(detection.finger_joints(finger.kind.index()));
        }
        self.wrist = *detection.wrist();
        self.frames_seen = self.frames_seen.saturating_add(1);
    }

    pub fn fingers(&self) -> &[Finger; 5] {
        &self.fingers
    }

    pub fn finger(&self, kind: FingerKind) -> &Finger {
        &self.fingers[kind.index()]
    }

    /// Number of fingers whose fold state is `true`.
    pub fn count_fingers(&self, config: &TrackerConfig) -> u32 {
        self.fingers
            .iter()
            .filter(|f| f.fold_state(self.side, config))
            .count() as u32
    }

    /// True if any fingertip, scaled to `screen_size` pixels, lies strictly
    /// inside `rect`. An empty screen contains nothing.
    pub fn tip_in_rectangle(&self, rect: &Rect, screen_size: (f32, f32)) -> bool {
        let (width, height) = screen_size;
        if !is_screen_extent(width) || !is_screen_extent(height) {
            return false;
        }
        self.fingers.iter().any(|finger| {
            let tip = finger.tip();
            rect.contains_strict(tip.x * width, tip.y * height)
        })
    }

    /// True if the wrist lies above the horizontal line `limit` pixels from
    /// the top of a `screen_height` tall screen.
    pub fn wrist_above(&self, limit: f32, screen_height: f32) -> bool {
        if !is_screen_extent(screen_height) {
            return false;
        }
        self.wrist.y * screen_height < limit
    }

    /// Hand held upright: no joint lower than the wrist, and the middle
    /// fingertip within `straight_tolerance` of the wrist horizontally.
    pub fn is_straight(&self, config: &TrackerConfig) -> bool {
        let wrist_y = self.wrist.y;
        let raised = self
            .fingers
            .iter()
            .flat_map(|f| f.joints().iter())
            .all(|joint| joint.y <= wrist_y);
        if !raised {
            return false;
        }

        let scale = config.straight_scale;
        let tip_x = self.finger(FingerKind::Middle).tip().x * scale;
        let wrist_x = self.wrist.x * scale;
        tip_x - config.straight_tolerance < wrist_x && wrist_x < tip_x + config.straight_tolerance
    }
}

#[inline]
fn is_screen_extent(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
