//! Trait for hand-landmark inference backends.

use ndarray::Array2;

use crate::error::LandmarkError;
use crate::tracker::HandDetection;

/// Trait for hand-pose detection backends.
///
/// Implement this trait to connect any hand-landmark model to the gesture
/// pipeline.
///
/// # Example
///
/// ```ignore
/// use finger_quiz::{HandDetection, LandmarkSource};
///
/// struct MyLandmarker {
///     // Your model here
/// }
///
/// impl LandmarkSource for MyLandmarker {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<HandDetection>, Self::Error> {
///         // Run inference and return up to two hands
///         Ok(vec![])
///     }
/// }
/// ```
pub trait LandmarkSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on one camera frame.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// Zero to two hand detections, or an error.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<HandDetection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `HandDetection`s.
pub trait IntoHandDetections {
    /// Convert the output, validating every hand.
    fn into_hand_detections(self) -> Result<Vec<HandDetection>, LandmarkError>;
}

impl IntoHandDetections for Vec<HandDetection> {
    fn into_hand_detections(self) -> Result<Vec<HandDetection>, LandmarkError> {
        Ok(self)
    }
}

/// One `(21, 3)` array per hand.
impl IntoHandDetections for Vec<Array2<f32>> {
    fn into_hand_detections(self) -> Result<Vec<HandDetection>, LandmarkError> {
        self.iter()
            .map(|array| HandDetection::from_array(array.view()))
            .collect()
    }
}

/// One flat `x, y, z` buffer of 63 values per hand.
impl IntoHandDetections for Vec<Vec<f32>> {
    fn into_hand_detections(self) -> Result<Vec<HandDetection>, LandmarkError> {
        self.iter().map(|flat| HandDetection::from_flat(flat)).collect()
    }
}
