//! Game-side consumer of submit requests: answer checking and score.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// How long a verdict stays on screen before the next question.
    pub verdict_display: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            verdict_display: Duration::from_secs(2),
        }
    }
}

/// Result of evaluating one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    /// Score after this verdict
    pub score: u32,
}

/// Score and verdict cooldown for the current question.
///
/// Questions themselves come from the caller through
/// [`QuizSession::set_expected`].
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    config: QuizConfig,
    expected: Option<i64>,
    score: u32,
    last_verdict: Option<Verdict>,
    verdict_since: Option<Instant>,
}

impl QuizSession {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Install the expected result of a new question.
    pub fn set_expected(&mut self, expected: i64) {
        self.expected = Some(expected);
    }

    pub fn expected(&self) -> Option<i64> {
        self.expected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Verdict currently on display, if any.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict_since.and(self.last_verdict)
    }

    pub fn is_showing_verdict(&self) -> bool {
        self.verdict_since.is_some()
    }

    /// Evaluate a submitted answer.
    ///
    /// Ignored while a verdict is displayed or before any question is set.
    /// Text that does not parse as a number is a wrong answer.
    pub fn submit(&mut self, answer: &str, now: Instant) -> Option<Verdict> {
        if self.verdict_since.is_some() {
            return None;
        }
        let expected = self.expected?;

        let correct = answer.parse::<i64>().is_ok_and(|value| value == expected);
        if correct {
            self.score += 1;
        }
        let verdict = Verdict {
            correct,
            score: self.score,
        };
        debug!(answer, expected, correct, score = self.score, "answer submitted");

        self.last_verdict = Some(verdict);
        self.verdict_since = Some(now);
        Some(verdict)
    }

    /// Advance the verdict timer. Returns true once, when the verdict window
    /// closes and the round is over; the caller then resets the answer and
    /// installs the next question.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.verdict_since {
            Some(since) if now.saturating_duration_since(since) > self.config.verdict_display => {
                self.verdict_since = None;
                self.expected = None;
                debug!(score = self.score, "round finished");
                true
            }
            _ => false,
        }
    }
}
