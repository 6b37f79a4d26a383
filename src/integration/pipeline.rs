//! GesturePipeline for combining landmark detection with gesture interpretation.

use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::error::LandmarkError;
use crate::gesture::{GestureConfig, GestureDebouncer, GesturePhase, Intent};
use crate::quiz::{QuizConfig, QuizSession, Verdict};
use crate::tracker::{HandDetection, HandTracker, TrackerConfig};

use super::LandmarkSource;

/// Failure while processing one frame.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    #[error("landmark source failed: {0}")]
    Source(E),
    #[error(transparent)]
    Landmarks(#[from] LandmarkError),
}

/// Everything the presentation layer needs after one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Combined finger count of the tracked hands
    pub finger_count: u32,
    pub phase: GesturePhase,
    pub intents: Vec<Intent>,
    /// Verdict produced by a submit on this frame
    pub verdict: Option<Verdict>,
    /// The verdict window closed this frame; a new question is needed
    pub round_finished: bool,
    pub answer: String,
}

/// A combined pipeline that bundles landmark inference, hand tracking,
/// gesture debouncing and the quiz session.
pub struct GesturePipeline<S: LandmarkSource> {
    source: S,
    tracker: HandTracker,
    debouncer: GestureDebouncer,
    quiz: QuizSession,
}

impl<S: LandmarkSource> GesturePipeline<S> {
    /// Create a new pipeline with the given source and configuration.
    pub fn new(
        source: S,
        tracker_config: TrackerConfig,
        gesture_config: GestureConfig,
        quiz_config: QuizConfig,
    ) -> Self {
        Self {
            source,
            tracker: HandTracker::new(tracker_config),
            debouncer: GestureDebouncer::new(gesture_config),
            quiz: QuizSession::new(quiz_config),
        }
    }

    /// Create a new pipeline with default configuration.
    pub fn with_default_config(source: S) -> Self {
        Self::new(
            source,
            TrackerConfig::default(),
            GestureConfig::default(),
            QuizConfig::default(),
        )
    }

    /// Detect hands in one camera frame and interpret them.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `now` - Capture time of the frame
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        now: Instant,
    ) -> Result<FrameReport, PipelineError<S::Error>> {
        let detections = self
            .source
            .detect(input, width, height)
            .map_err(PipelineError::Source)?;
        Ok(self.process_detections(&detections, now)?)
    }

    /// Interpret hands that were already detected.
    pub fn process_detections(
        &mut self,
        detections: &[HandDetection],
        now: Instant,
    ) -> Result<FrameReport, LandmarkError> {
        self.tracker.update(detections)?;
        let intents = self.debouncer.update(&self.tracker, now);

        let mut verdict = None;
        for intent in &intents {
            if let Intent::SubmitRequest { answer } = intent {
                verdict = verdict.or(self.quiz.submit(answer, now));
            }
        }

        let round_finished = self.quiz.poll(now);
        if round_finished {
            debug!("new question needed");
            self.debouncer.reset_answer();
        }

        Ok(FrameReport {
            finger_count: self.tracker.count_fingers(),
            phase: self.debouncer.phase(),
            intents,
            verdict,
            round_finished,
            answer: self.debouncer.answer().to_string(),
        })
    }

    /// Get a reference to the underlying landmark source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying landmark source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn tracker(&self) -> &HandTracker {
        &self.tracker
    }

    pub fn debouncer(&self) -> &GestureDebouncer {
        &self.debouncer
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    /// Mutable access to the quiz, e.g. to install the next question.
    pub fn quiz_mut(&mut self) -> &mut QuizSession {
        &mut self.quiz
    }
}
