//! Builder for assembling HandDetection objects joint by joint.

use crate::error::LandmarkError;
use crate::tracker::{
    FingerKind, HandDetection, JOINTS_PER_FINGER, LANDMARK_COUNT, Landmark, index,
};

/// Builder for creating `HandDetection` objects.
///
/// Every landmark starts at the origin. Useful for synthetic input and for
/// adapting detectors that report joints one at a time.
#[derive(Debug, Clone)]
pub struct HandDetectionBuilder {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Default for HandDetectionBuilder {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::origin(); LANDMARK_COUNT],
        }
    }
}

impl HandDetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing detection.
    pub fn from_detection(detection: &HandDetection) -> Self {
        Self {
            landmarks: *detection.landmarks(),
        }
    }

    /// Set one landmark by detector index. Out-of-range indices are ignored.
    pub fn joint(mut self, idx: usize, x: f32, y: f32, z: f32) -> Self {
        if let Some(slot) = self.landmarks.get_mut(idx) {
            *slot = Landmark::new(x, y, z);
        }
        self
    }

    /// Set the wrist position (z = 0).
    pub fn wrist(self, x: f32, y: f32) -> Self {
        self.joint(index::WRIST, x, y, 0.0)
    }

    /// Set a finger's four joints, base to tip (z = 0).
    pub fn finger(mut self, kind: FingerKind, joints: [(f32, f32); JOINTS_PER_FINGER]) -> Self {
        let start = 1 + kind.index() * JOINTS_PER_FINGER;
        for (offset, (x, y)) in joints.into_iter().enumerate() {
            self.landmarks[start + offset] = Landmark::new(x, y, 0.0);
        }
        self
    }

    /// Set a finger as a straight vertical chain at `x`, from `base_y` to `tip_y`.
    pub fn vertical_finger(self, kind: FingerKind, x: f32, base_y: f32, tip_y: f32) -> Self {
        let step = (tip_y - base_y) / (JOINTS_PER_FINGER - 1) as f32;
        let joints = [
            (x, base_y),
            (x, base_y + step),
            (x, base_y + 2.0 * step),
            (x, tip_y),
        ];
        self.finger(kind, joints)
    }

    /// Shift every landmark by `(dx, dy)` in normalized units.
    pub fn translate(mut self, dx: f32, dy: f32) -> Self {
        for landmark in self.landmarks.iter_mut() {
            landmark.x += dx;
            landmark.y += dy;
        }
        self
    }

    /// Build the final `HandDetection`.
    pub fn build(self) -> Result<HandDetection, LandmarkError> {
        HandDetection::from_points(&self.landmarks)
    }
}
