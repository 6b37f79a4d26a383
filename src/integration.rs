//! Integration module for connecting hand-landmark detectors with the
//! gesture pipeline.
//!
//! This module provides traits and utilities for integrating various inference
//! backends (Burn, ONNX Runtime, a MediaPipe bridge, etc.) with the tracker
//! and debouncer.

mod builder;
mod detector;
mod pipeline;

pub use builder::HandDetectionBuilder;
pub use detector::{IntoHandDetections, LandmarkSource};
pub use pipeline::{FrameReport, GesturePipeline, PipelineError};

#[cfg(feature = "burn-backend")]
mod burn_backend;

#[cfg(feature = "burn-backend")]
pub use burn_backend::{BurnLandmarkModel, BurnLandmarker, BurnLandmarkerError, RawHand};
