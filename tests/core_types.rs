use detpost::{DetPostError, OutputView, PostConfig};

#[cfg(feature = "serde")]
use detpost::Detection;

#[test]
fn output_view_rejects_length_mismatch() {
    let data = vec![0.0f32; 17];

    let err = OutputView::new(&data, 6, 3).err().unwrap();
    assert_eq!(
        err,
        DetPostError::ShapeMismatch {
            expected: 18,
            got: 17,
        }
    );
}

#[test]
fn output_view_rejects_too_few_rows() {
    let data = vec![0.0f32; 12];

    let err = OutputView::new(&data, 4, 3).err().unwrap();
    assert_eq!(err, DetPostError::InvalidShape { rows: 4, cols: 3 });
}

#[test]
fn output_view_rejects_zero_anchors() {
    let data: Vec<f32> = Vec::new();

    let err = OutputView::new(&data, 84, 0).err().unwrap();
    assert_eq!(err, DetPostError::InvalidShape { rows: 84, cols: 0 });
}

#[test]
fn output_view_indexes_row_major() {
    // 5 channels x 2 anchors; value = channel * 10 + anchor.
    let mut data = vec![0.0f32; 10];
    for channel in 0..5 {
        for anchor in 0..2 {
            data[channel * 2 + anchor] = (channel * 10 + anchor) as f32;
        }
    }
    let view = OutputView::new(&data, 5, 2).unwrap();

    assert_eq!(view.rows(), 5);
    assert_eq!(view.cols(), 2);
    assert_eq!(view.num_classes(), 1);
    assert_eq!(view.at(0, 0), 0.0);
    assert_eq!(view.at(3, 1), 31.0);
    assert_eq!(view.at(4, 0), 40.0);
    assert_eq!(view.as_slice().len(), 10);
}

#[test]
fn default_config_matches_reference_deployment() {
    let config = PostConfig::default();
    assert_eq!(config.input_size, 640);
    assert_eq!(config.confidence_threshold, 0.25);
    assert_eq!(config.nms_threshold, 0.45);
    assert!(!config.subpixel);
}

#[cfg(feature = "serde")]
#[test]
fn detection_records_round_trip_through_json() {
    let detection = Detection {
        class_id: 7,
        confidence: 0.75,
        cx: 100.0,
        cy: 120.0,
        width: 40.0,
        height: 50.0,
    };

    let json = serde_json::to_string(&detection).unwrap();
    let decoded: Detection = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, detection);

    // Field names are the boundary contract consumers key on.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["class_id"], 7);
    assert_eq!(value["width"], 40.0);
}
