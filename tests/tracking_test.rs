mod common;

use common::{left_hand, right_hand};
use finger_quiz::{HandDetection, HandSide, HandTracker, LandmarkError, TrackerConfig};

#[test]
fn test_basic_tracking() {
    let mut tracker = HandTracker::new(TrackerConfig::default());

    // Two empty frames
    tracker.update(&[]).unwrap();
    tracker.update(&[]).unwrap();
    assert!(tracker.is_empty());

    // Frame 3: one right hand appears
    tracker.update(&[right_hand(2)]).unwrap();
    assert_eq!(tracker.hand_count(), 1);
    assert!(tracker.hand(HandSide::Left).is_none());
    let right = tracker.hand(HandSide::Right).unwrap();
    assert_eq!(right.side, HandSide::Right);
    assert_eq!(right.frames_seen, 1);
    assert_eq!(tracker.count_fingers(), 3);

    // Frame 4: left hand joins, right hand is updated in place
    tracker.update(&[left_hand(3), right_hand(4)]).unwrap();
    assert_eq!(tracker.hand_count(), 2);
    assert_eq!(tracker.hand(HandSide::Right).unwrap().frames_seen, 2);
    assert_eq!(tracker.hand(HandSide::Left).unwrap().frames_seen, 1);
    assert_eq!(tracker.count_fingers(), 4 + 5);

    // Frame 5: only the left hand remains
    tracker.update(&[left_hand(3)]).unwrap();
    assert!(tracker.hand(HandSide::Right).is_none());
    assert_eq!(tracker.hand(HandSide::Left).unwrap().frames_seen, 2);
    assert_eq!(tracker.count_fingers(), 4);

    // Frame 6: hands gone
    tracker.update(&[]).unwrap();
    assert!(tracker.is_empty());
    assert_eq!(tracker.count_fingers(), 0);

    // Frame 7: right hand returns as a fresh hand
    tracker.update(&[right_hand(0)]).unwrap();
    assert_eq!(tracker.hand(HandSide::Right).unwrap().frames_seen, 1);
}

#[test]
fn test_single_detection_clears_other_side() {
    let mut tracker = HandTracker::default();
    tracker.update(&[left_hand(1), right_hand(1)]).unwrap();

    tracker.update(&[right_hand(1)]).unwrap();
    assert!(tracker.hand(HandSide::Left).is_none());
    assert!(tracker.hand(HandSide::Right).is_some());

    tracker.update(&[left_hand(1), right_hand(1)]).unwrap();
    tracker.update(&[left_hand(1)]).unwrap();
    assert!(tracker.hand(HandSide::Left).is_some());
    assert!(tracker.hand(HandSide::Right).is_none());
}

#[test]
fn test_thumb_flips_with_side() {
    let tracker_config = TrackerConfig::default();
    let mut tracker = HandTracker::new(tracker_config.clone());

    // Same thumb geometry; only the wrist moves across the thumb base.
    let right = right_hand(0);
    let left = finger_quiz::HandDetectionBuilder::from_detection(&right)
        .wrist(0.5, 0.8)
        .build()
        .unwrap();

    tracker.update(&[right]).unwrap();
    assert_eq!(tracker.count_fingers(), 1);

    tracker.update(&[left]).unwrap();
    assert!(tracker.hand(HandSide::Left).is_some());
    assert_eq!(tracker.count_fingers(), 0);
}

#[test]
fn test_malformed_landmarks() {
    assert_eq!(
        HandDetection::from_flat(&[0.5; 60]),
        Err(LandmarkError::WrongFlatLength {
            expected: 63,
            got: 60
        })
    );

    let mut tracker = HandTracker::default();
    let hands = vec![right_hand(1), left_hand(1), right_hand(2)];
    assert_eq!(
        tracker.update(&hands),
        Err(LandmarkError::TooManyHands(3))
    );
}
