//! Temporal filtering of per-frame hand readings into discrete intents.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gesture::answer::Answer;
use crate::gesture::intent::{GesturePhase, Intent};
use crate::tracker::{Hand, HandTracker, Rect};

/// Timing, screen and button layout for the debouncer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Continuous presence required before any reading is considered.
    pub presence_cooldown: Duration,
    /// Hold time between two confirmed readings.
    pub hold_duration: Duration,
    /// Screen size (width, height) fingertips are scaled to for button tests.
    pub screen_size: (f32, f32),
    /// The wrist must not be above this line to confirm a reading.
    pub confirm_band_top: f32,
    /// The wrist must be above this line to confirm a reading.
    pub confirm_band_bottom: f32,
    /// Screen height the confirmation band lines are measured against.
    pub band_screen_height: f32,
    /// Maximum answer length in characters.
    pub max_answer_len: usize,
    pub reset_button: Rect,
    pub submit_button: Rect,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            presence_cooldown: Duration::from_millis(200),
            hold_duration: Duration::from_millis(1500),
            screen_size: (1100.0, 700.0),
            confirm_band_top: 450.0,
            confirm_band_bottom: 700.0,
            band_screen_height: 700.0,
            max_answer_len: 4,
            reset_button: Rect::from_tlbr(40.0, 20.0, 220.0, 80.0),
            submit_button: Rect::from_tlbr(880.0, 20.0, 1060.0, 80.0),
        }
    }
}

/// Gesture debouncer and intent state machine.
///
/// Call [`GestureDebouncer::update`] once per frame after the tracker has
/// been fed. Digit entry is gated by a presence cooldown followed by a hold
/// timer; button presses react on the frame a fingertip enters the button.
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    config: GestureConfig,
    phase: GesturePhase,
    /// When continuous hand presence began
    present_since: Option<Instant>,
    /// Start of the current hold window
    hold_since: Option<Instant>,
    answer: Answer,
    finger_count: u32,
    reset_armed: bool,
    submit_armed: bool,
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureDebouncer {
    pub fn new(config: GestureConfig) -> Self {
        let answer = Answer::new(config.max_answer_len);
        Self {
            config,
            phase: GesturePhase::Idle,
            present_since: None,
            hold_since: None,
            answer,
            finger_count: 0,
            reset_armed: false,
            submit_armed: false,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Put the answer back to "0", e.g. when the game moves to a new question.
    pub fn reset_answer(&mut self) {
        self.answer.reset();
    }

    /// Combined finger count sampled on the last frame with a hand present.
    pub fn finger_count(&self) -> u32 {
        self.finger_count
    }

    pub fn is_reset_armed(&self) -> bool {
        self.reset_armed
    }

    pub fn is_submit_armed(&self) -> bool {
        self.submit_armed
    }

    /// Process one frame of tracker state observed at `now`.
    pub fn update(&mut self, tracker: &HandTracker, now: Instant) -> Vec<Intent> {
        let mut intents = Vec::new();

        if tracker.is_empty() {
            self.present_since = None;
            self.hold_since = None;
            self.reset_armed = false;
            self.submit_armed = false;
            self.set_phase(GesturePhase::Idle);
            return intents;
        }

        self.finger_count = tracker.count_fingers();

        let present_since = *self.present_since.get_or_insert(now);
        // No representable arming instant means the cooldown never elapses.
        let armed_at = present_since
            .checked_add(self.config.presence_cooldown)
            .filter(|armed_at| now >= *armed_at);

        if let Some(armed_at) = armed_at {
            let hold_since = *self.hold_since.get_or_insert(armed_at);
            if now.saturating_duration_since(hold_since) >= self.config.hold_duration {
                self.set_phase(GesturePhase::Confirmed);
                if let Some(intent) = self.confirm_reading(tracker) {
                    intents.push(intent);
                }
                self.hold_since = Some(now);
            } else {
                self.set_phase(GesturePhase::Armed);
            }
        } else {
            self.set_phase(GesturePhase::Settling);
        }

        self.check_buttons(tracker, &mut intents);

        for intent in &intents {
            debug!(?intent, answer = self.answer.as_str(), "intent emitted");
        }
        intents
    }

    /// Whether `hand` is held in the confirmation band and upright.
    pub fn qualifies(&self, hand: &Hand, tracker: &HandTracker) -> bool {
        let height = self.config.band_screen_height;
        !hand.wrist_above(self.config.confirm_band_top, height)
            && hand.wrist_above(self.config.confirm_band_bottom, height)
            && hand.is_straight(tracker.config())
    }

    /// Only the first qualifying hand in slot order decides; the reading is
    /// the combined count of both hands.
    fn confirm_reading(&mut self, tracker: &HandTracker) -> Option<Intent> {
        let hand = tracker.hands().find(|hand| self.qualifies(hand, tracker))?;
        let reading = self.finger_count;
        if self.answer.push_reading(reading) {
            Some(Intent::AppendDigit(reading))
        } else {
            debug!(
                side = hand.side.as_str(),
                reading,
                answer = self.answer.as_str(),
                "reading dropped, answer full"
            );
            None
        }
    }

    fn check_buttons(&mut self, tracker: &HandTracker, intents: &mut Vec<Intent>) {
        let screen = self.config.screen_size;
        let mut reset_hit = false;
        let mut submit_hit = false;
        for hand in tracker.hands() {
            if hand.tip_in_rectangle(&self.config.reset_button, screen) {
                reset_hit = true;
            } else if hand.tip_in_rectangle(&self.config.submit_button, screen) {
                submit_hit = true;
            }
        }

        if reset_hit && self.answer.reset() {
            intents.push(Intent::ClearAnswer);
        }
        self.reset_armed = reset_hit;

        if submit_hit && !self.submit_armed {
            intents.push(Intent::SubmitRequest {
                answer: self.answer.to_string(),
            });
        }
        self.submit_armed = submit_hit;
    }

    fn set_phase(&mut self, phase: GesturePhase) {
        if self.phase != phase {
            debug!(from = self.phase.as_str(), to = phase.as_str(), "gesture phase");
            self.phase = phase;
        }
    }
}
