//! Gesture debouncing and intent emission.
//!
//! The tracker answers "what do the hands look like right now"; this module
//! answers "what did the player mean". Finger counts are resampled every
//! frame but only committed once per hold window, and button presses are
//! edge-triggered on fingertip entry.

mod answer;
mod debouncer;
mod intent;

pub use answer::{Answer, EMPTY_ANSWER};
pub use debouncer::{GestureConfig, GestureDebouncer};
pub use intent::{GesturePhase, Intent};
