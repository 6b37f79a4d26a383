#![allow(dead_code)]

use finger_quiz::{FingerKind, HandDetection, HandDetectionBuilder};

/// Right-side hand (wrist right of the thumb base), upright, wrist at
/// `y = 0.8` inside the confirmation band. Counts `raised` of the four
/// ordinary fingers plus the thumb.
pub fn right_hand(raised: usize) -> HandDetection {
    let mut builder = HandDetectionBuilder::new().wrist(0.6, 0.8).finger(
        FingerKind::Thumb,
        [(0.55, 0.75), (0.52, 0.7), (0.50, 0.65), (0.48, 0.6)],
    );
    builder = ordinary_fingers(builder, 0.56, raised);
    builder.build().unwrap()
}

/// Left-side hand mirrored from [`right_hand`].
pub fn left_hand(raised: usize) -> HandDetection {
    let mut builder = HandDetectionBuilder::new().wrist(0.3, 0.8).finger(
        FingerKind::Thumb,
        [(0.35, 0.75), (0.38, 0.7), (0.40, 0.65), (0.42, 0.6)],
    );
    builder = ordinary_fingers(builder, 0.26, raised);
    builder.build().unwrap()
}

fn ordinary_fingers(
    mut builder: HandDetectionBuilder,
    first_x: f32,
    raised: usize,
) -> HandDetectionBuilder {
    let kinds = [
        FingerKind::Index,
        FingerKind::Middle,
        FingerKind::Ring,
        FingerKind::Pinky,
    ];
    for (i, kind) in kinds.into_iter().enumerate() {
        let x = first_x + 0.04 * i as f32;
        builder = if i < raised {
            builder.vertical_finger(kind, x, 0.7, 0.5)
        } else {
            builder.vertical_finger(kind, x, 0.7, 0.68)
        };
    }
    builder
}

/// Move the hand so its index fingertip sits at pixel `(px, py)` on a
/// 1100x700 screen.
pub fn with_index_tip_at(detection: &HandDetection, px: f32, py: f32) -> HandDetection {
    let tip = detection.finger_joints(FingerKind::Index.index())[3];
    HandDetectionBuilder::from_detection(detection)
        .translate(px / 1100.0 - tip.x, py / 700.0 - tip.y)
        .build()
        .unwrap()
}
