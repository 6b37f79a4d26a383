//! Raw per-frame hand landmarks as delivered by a hand-pose detector.

use nalgebra::Point3;
use ndarray::ArrayView2;

use crate::error::LandmarkError;

/// A single normalized joint position.
///
/// `x` and `y` lie in `[0, 1]` relative to the frame, with `y` growing
/// downward. `z` is depth relative to the wrist.
pub type Landmark = Point3<f32>;

/// Number of landmarks in one hand detection.
pub const LANDMARK_COUNT: usize = 21;

/// Number of joints in one finger chain (base to tip).
pub const JOINTS_PER_FINGER: usize = 4;

/// Hand landmark indices, in detector order.
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_TIP: usize = 20;
}

/// One detected hand: exactly 21 landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct HandDetection {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandDetection {
    /// Build a detection from a slice of exactly 21 points.
    pub fn from_points(points: &[Landmark]) -> Result<Self, LandmarkError> {
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongLandmarkCount(points.len()))?;
        Self::validated(landmarks)
    }

    /// Build a detection from a `(21, 3)` array of `x, y, z` rows.
    pub fn from_array(array: ArrayView2<'_, f32>) -> Result<Self, LandmarkError> {
        let (rows, cols) = array.dim();
        if rows != LANDMARK_COUNT || cols != 3 {
            return Err(LandmarkError::WrongShape { rows, cols });
        }

        let mut landmarks = [Landmark::origin(); LANDMARK_COUNT];
        for (i, row) in array.outer_iter().enumerate() {
            landmarks[i] = Landmark::new(row[0], row[1], row[2]);
        }
        Self::validated(landmarks)
    }

    /// Build a detection from a flat `x0, y0, z0, x1, ...` buffer.
    pub fn from_flat(coords: &[f32]) -> Result<Self, LandmarkError> {
        let expected = LANDMARK_COUNT * 3;
        if coords.len() != expected {
            return Err(LandmarkError::WrongFlatLength {
                expected,
                got: coords.len(),
            });
        }

        let mut landmarks = [Landmark::origin(); LANDMARK_COUNT];
        for (i, xyz) in coords.chunks_exact(3).enumerate() {
            landmarks[i] = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Self::validated(landmarks)
    }

    fn validated(landmarks: [Landmark; LANDMARK_COUNT]) -> Result<Self, LandmarkError> {
        if let Some(index) = landmarks
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(LandmarkError::NonFinite { index });
        }
        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn wrist(&self) -> &Landmark {
        &self.landmarks[index::WRIST]
    }

    /// The four joints of finger `n` (0 = thumb, 4 = pinky), base to tip.
    pub fn finger_joints(&self, n: usize) -> [Landmark; JOINTS_PER_FINGER] {
        let start = 1 + n * JOINTS_PER_FINGER;
        [
            self.landmarks[start],
            self.landmarks[start + 1],
            self.landmarks[start + 2],
            self.landmarks[start + 3],
        ]
    }
}
