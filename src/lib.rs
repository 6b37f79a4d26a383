//! Hand-gesture interpretation for a finger-counting arithmetic quiz.
//!
//! Per-frame hand landmark detections flow through the pipeline:
//!
//! ```text
//! HandDetection -> HandTracker (left/right slots) -> GestureDebouncer -> Intent -> QuizSession
//! ```
//!
//! The tracker classifies every finger as folded or extended and exposes the
//! spatial predicates the debouncer needs. The debouncer applies the presence
//! cooldown and hold timers and emits discrete [`Intent`]s.

mod error;

pub mod gesture;
pub mod integration;
pub mod quiz;
pub mod tracker;

pub use error::LandmarkError;
pub use gesture::{Answer, GestureConfig, GestureDebouncer, GesturePhase, Intent};
pub use integration::{
    FrameReport, GesturePipeline, HandDetectionBuilder, IntoHandDetections, LandmarkSource,
    PipelineError,
};
pub use quiz::{QuizConfig, QuizSession, Verdict};
pub use tracker::{
    Finger, FingerKind, Hand, HandDetection, HandSide, HandTracker, Landmark, Rect, TrackerConfig,
};
