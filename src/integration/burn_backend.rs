//! Burn inference backend for hand-landmark models.
//!
//! This module provides a `BurnLandmarker` that implements `LandmarkSource`
//! for running hand-pose models built with the Burn framework.
//!
//! # Example
//!
//! ```ignore
//! use finger_quiz::integration::{BurnLandmarker, BurnLandmarkModel, RawHand};
//! use burn::backend::NdArray;
//!
//! // Implement BurnLandmarkModel for your hand-pose model
//! struct MyHandModel { /* ... */ }
//!
//! impl BurnLandmarkModel<NdArray> for MyHandModel {
//!     fn forward(&self, input: burn::tensor::Tensor<NdArray, 4>) -> Vec<RawHand> {
//!         // Run inference
//!     }
//! }
//!
//! let model = MyHandModel::load("hand_landmarker.bin");
//! let landmarker = BurnLandmarker::new(model, Default::default());
//! ```

use burn::prelude::*;
use burn::tensor::Tensor;
use thiserror::Error;

use super::LandmarkSource;
use crate::error::LandmarkError;
use crate::tracker::{HandDetection, MAX_HANDS};

/// Error type for Burn landmark inference failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BurnLandmarkerError {
    /// Input image has invalid dimensions.
    #[error("invalid input dimensions: expected {expected:?}, got {got:?}")]
    InvalidInputDimensions {
        expected: (u32, u32, u32),
        got: (u32, u32, u32),
    },
    /// Preprocessing failed.
    #[error("preprocessing error: {0}")]
    Preprocessing(String),
    /// Model output could not be turned into landmarks.
    #[error(transparent)]
    Landmarks(#[from] LandmarkError),
}

/// Raw per-hand model output.
#[derive(Debug, Clone)]
pub struct RawHand {
    /// 21 landmarks as flat normalized `x, y, z` triples
    pub landmarks: Vec<f32>,
    /// Hand presence score
    pub score: f32,
}

/// Trait for Burn-based hand-landmark models.
///
/// Implement this trait for your specific model architecture.
pub trait BurnLandmarkModel<B: Backend>: Send + Sync {
    /// Run forward pass on the input tensor.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape [batch, channels, height, width]
    ///
    /// # Returns
    /// One entry per candidate hand.
    fn forward(&self, input: Tensor<B, 4>) -> Vec<RawHand>;

    /// Get the expected input size (channels, height, width).
    fn input_size(&self) -> (u32, u32, u32) {
        (3, 224, 224)
    }
}

/// Burn-based hand landmarker implementing `LandmarkSource`.
pub struct BurnLandmarker<B: Backend, M: BurnLandmarkModel<B>> {
    model: M,
    device: B::Device,
    presence_threshold: f32,
}

impl<B: Backend, M: BurnLandmarkModel<B>> BurnLandmarker<B, M> {
    /// Create a new landmarker with the given model and device.
    pub fn new(model: M, device: B::Device) -> Self {
        Self {
            model,
            device,
            presence_threshold: 0.5,
        }
    }

    /// Set the minimum hand presence score.
    pub fn with_presence_threshold(mut self, threshold: f32) -> Self {
        self.presence_threshold = threshold;
        self
    }

    /// Preprocess raw image bytes to a Burn tensor.
    pub fn preprocess(
        &self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Tensor<B, 4>, BurnLandmarkerError> {
        let (channels, target_h, target_w) = self.model.input_size();
        let expected_len = (width * height * channels) as usize;

        if input.len() != expected_len {
            return Err(BurnLandmarkerError::InvalidInputDimensions {
                expected: (channels, height, width),
                got: (channels, height, input.len() as u32 / (height * channels).max(1)),
            });
        }

        if height != target_h || width != target_w {
            return Err(BurnLandmarkerError::Preprocessing(format!(
                "input size {}x{} doesn't match model size {}x{}",
                width, height, target_w, target_h
            )));
        }

        let data: Vec<f32> = input.iter().map(|&x| x as f32 / 255.0).collect();
        let tensor = Tensor::<B, 1>::from_floats(data.as_slice(), &self.device).reshape([
            1,
            channels as usize,
            height as usize,
            width as usize,
        ]);

        Ok(tensor)
    }

    /// Keep the most confident hands above the presence threshold.
    fn postprocess(&self, mut raw: Vec<RawHand>) -> Result<Vec<HandDetection>, BurnLandmarkerError> {
        raw.retain(|h| h.score >= self.presence_threshold);
        raw.sort_by(|a, b| b.score.total_cmp(&a.score));
        raw.truncate(MAX_HANDS);
        raw.iter()
            .map(|h| HandDetection::from_flat(&h.landmarks).map_err(Into::into))
            .collect()
    }
}

impl<B: Backend, M: BurnLandmarkModel<B>> LandmarkSource for BurnLandmarker<B, M> {
    type Error = BurnLandmarkerError;

    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<HandDetection>, Self::Error> {
        let tensor = self.preprocess(input, width, height)?;
        let raw = self.model.forward(tensor);
        self.postprocess(raw)
    }
}
