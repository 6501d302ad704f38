use super::*;

#[test]
fn test_from_pairs_keeps_order() {
    let v = LabeledScoreVector::from_pairs("es", [("b", 2.0), ("a", -1.0), ("c", 0.5)]).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.label(0), Some("b"));
    assert_eq!(v.label(2), Some("c"));
    assert_eq!(v.score("a"), Some(-1.0));
    assert_eq!(v.score("zz"), None);
    let collected: Vec<_> = v.iter().collect();
    assert_eq!(collected, vec![("b", 2.0), ("a", -1.0), ("c", 0.5)]);
}

#[test]
fn test_length_mismatch_rejected() {
    let err = LabeledScoreVector::new("es", vec!["a".to_string()], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument(_)));
}

#[test]
fn test_duplicate_label_rejected() {
    let err = LabeledScoreVector::from_pairs("es", [("a", 1.0), ("a", 2.0)]).unwrap_err();
    assert!(err.to_string().contains("duplicate label a"));
}

#[test]
fn test_empty_vector() {
    let v = LabeledScoreVector::from_pairs("es", Vec::<(String, f64)>::new()).unwrap();
    assert!(v.is_empty());
    assert_eq!(v.name(), "es");
}
