use detpost::{suppress, Candidate, Rect};

fn candidate(class_id: usize, confidence: f32, x: f32, y: f32, w: f32, h: f32) -> Candidate {
    Candidate {
        class_id,
        confidence,
        rect: Rect {
            x,
            y,
            width: w,
            height: h,
        },
    }
}

#[test]
fn duplicate_keeps_only_the_highest_confidence_box() {
    let kept = suppress(
        vec![
            candidate(0, 0.5, 80.0, 80.0, 40.0, 40.0),
            candidate(0, 0.9, 80.0, 80.0, 40.0, 40.0),
        ],
        0.45,
    );

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].confidence, 0.9);
}

#[test]
fn overlap_exactly_at_threshold_is_not_suppressed() {
    // The 50x100 box sits inside the 100x100 box: intersection 5000,
    // union 10000, IoU exactly 0.5.
    let kept = suppress(
        vec![
            candidate(0, 0.9, 0.0, 0.0, 100.0, 100.0),
            candidate(0, 0.8, 0.0, 0.0, 50.0, 100.0),
        ],
        0.5,
    );

    assert_eq!(kept.len(), 2);
}

#[test]
fn overlap_marginally_above_threshold_is_suppressed() {
    // 51x100 inside 100x100: IoU 0.51.
    let kept = suppress(
        vec![
            candidate(0, 0.9, 0.0, 0.0, 100.0, 100.0),
            candidate(0, 0.8, 0.0, 0.0, 51.0, 100.0),
        ],
        0.5,
    );

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].confidence, 0.9);
}

#[test]
fn perfectly_overlapping_boxes_of_different_classes_both_survive() {
    let kept = suppress(
        vec![
            candidate(3, 0.9, 80.0, 80.0, 40.0, 40.0),
            candidate(7, 0.8, 80.0, 80.0, 40.0, 40.0),
        ],
        0.45,
    );

    assert_eq!(kept.len(), 2);
}

#[test]
fn equal_confidence_ties_keep_the_first_seen_box() {
    let first = candidate(0, 0.8, 10.0, 10.0, 40.0, 40.0);
    let second = candidate(0, 0.8, 12.0, 10.0, 40.0, 40.0);
    let kept = suppress(vec![first, second], 0.45);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].rect, first.rect);
}

#[test]
fn zero_area_boxes_neither_suppress_nor_get_suppressed() {
    let kept = suppress(
        vec![
            candidate(0, 0.95, 50.0, 50.0, 0.0, 0.0),
            candidate(0, 0.9, 0.0, 0.0, 100.0, 100.0),
        ],
        0.45,
    );

    assert_eq!(kept.len(), 2);
}

#[test]
fn survivors_never_exceed_input_and_respect_the_overlap_bound() {
    let threshold = 0.45;
    let mut input = Vec::new();
    for i in 0..20 {
        let offset = (i % 5) as f32 * 3.0;
        input.push(candidate(
            i % 3,
            0.3 + 0.03 * i as f32,
            100.0 + offset,
            100.0 + offset,
            40.0,
            40.0,
        ));
    }

    let kept = suppress(input.clone(), threshold);

    assert!(kept.len() <= input.len());
    for (i, a) in kept.iter().enumerate() {
        for b in kept.iter().skip(i + 1) {
            if a.class_id == b.class_id {
                assert!(
                    a.rect.iou(&b.rect) <= threshold,
                    "same-class survivors overlap more than the threshold"
                );
            }
        }
    }
}
