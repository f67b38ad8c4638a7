//! Integration tests: missing-aware label encoding

use ampute::encoding::NanLabelEncoder;
use ampute::AmputeError;

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_fit_orders_classes_with_sentinel_last() {
    let mut encoder = NanLabelEncoder::default();
    encoder
        .fit(&[some("a"), some("b"), None, some("a")])
        .unwrap();

    assert_eq!(encoder.classes().unwrap(), &["a", "b", "---NaN---"]);
    assert_eq!(encoder.num_classes().unwrap(), 2);
}

#[test]
fn test_unseen_mapped_to_sentinel_when_enabled() {
    let mut encoder = NanLabelEncoder::default().with_unknown_as_missing(true);
    encoder
        .fit(&[some("a"), some("b"), None, some("a")])
        .unwrap();

    let codes = encoder.transform(&[some("a"), some("c")]).unwrap();
    assert_eq!(codes, vec![0.0, 2.0]);
}

#[test]
fn test_unseen_fails_when_disabled() {
    let mut encoder = NanLabelEncoder::default();
    encoder
        .fit(&[some("a"), some("b"), None, some("a")])
        .unwrap();

    let err = encoder.transform(&[some("a"), some("c")]).unwrap_err();
    match err {
        AmputeError::UnseenLabel(msg) => assert!(msg.contains('c')),
        other => panic!("expected UnseenLabel, got {:?}", other),
    }
}

#[test]
fn test_round_trip_including_missing() {
    let mut encoder = NanLabelEncoder::default();
    encoder
        .fit(&[some("blue"), some("red"), None, some("green")])
        .unwrap();

    let labels = vec![some("red"), None, some("blue"), some("green"), None];
    let codes = encoder.transform(&labels).unwrap();
    let restored = encoder.inverse_transform(&codes).unwrap();

    assert_eq!(restored, labels);
}

#[test]
fn test_missing_encodes_as_nan_placeholder() {
    let mut encoder = NanLabelEncoder::default();
    encoder.fit(&[some("a"), None]).unwrap();

    let codes = encoder.transform(&[None, some("a")]).unwrap();
    assert!(codes[0].is_nan());
    assert_eq!(codes[1], 0.0);
}

#[test]
fn test_inverse_sentinel_index_is_missing() {
    let mut encoder = NanLabelEncoder::default();
    encoder.fit(&[some("a"), some("b")]).unwrap();

    // index 2 is the sentinel class
    let restored = encoder.inverse_transform(&[2.0, 0.0]).unwrap();
    assert_eq!(restored, vec![None, some("a")]);
}

#[test]
fn test_inverse_rejects_out_of_range_codes() {
    let mut encoder = NanLabelEncoder::default();
    encoder.fit(&[some("a"), some("b")]).unwrap();

    let err = encoder.inverse_transform(&[0.0, 7.0]).unwrap_err();
    match err {
        AmputeError::UnseenLabel(msg) => assert!(msg.contains('7')),
        other => panic!("expected UnseenLabel, got {:?}", other),
    }

    let err = encoder.inverse_transform(&[0.5]).unwrap_err();
    assert!(matches!(err, AmputeError::UnseenLabel(_)));
}

#[test]
fn test_marker_collision_is_config_error() {
    let mut encoder = NanLabelEncoder::new("b".to_string());
    let err = encoder.fit(&[some("a"), some("b")]).unwrap_err();
    assert!(matches!(err, AmputeError::Config(_)));

    let mut encoder = NanLabelEncoder::new("x".to_string()).with_labels(vec!["x".to_string()]);
    let err = encoder.fit(&[some("a")]).unwrap_err();
    assert!(matches!(err, AmputeError::Config(_)));
}

#[test]
fn test_declared_labels_are_encoded() {
    let mut encoder = NanLabelEncoder::default().with_labels(vec!["z".to_string()]);
    encoder.fit(&[some("a")]).unwrap();

    let codes = encoder.transform(&[some("z")]).unwrap();
    assert_eq!(codes, vec![1.0]);
}

#[test]
fn test_transform_before_fit_fails() {
    let encoder = NanLabelEncoder::default();
    assert!(matches!(
        encoder.transform(&[some("a")]),
        Err(AmputeError::NotFitted)
    ));
}
