mod finger;
mod hand;
mod hand_side;
mod hand_tracker;
mod landmark;
mod rect;

pub use finger::{Finger, FingerKind};
pub use hand::Hand;
pub use hand_side::HandSide;
pub use hand_tracker::{HandTracker, MAX_HANDS, TrackerConfig};
pub use landmark::{HandDetection, JOINTS_PER_FINGER, LANDMARK_COUNT, Landmark, index};
pub use rect::Rect;
