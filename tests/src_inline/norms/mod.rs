use super::*;

#[test]
fn test_registry_names_in_order() {
    assert_eq!(NormMode::names(), vec!["None", "meandiv"]);
}

#[test]
fn test_from_name_round_trips_registry() {
    for mode in NormMode::ALL {
        assert_eq!(NormMode::from_name(mode.name()).unwrap(), mode);
        assert_eq!(mode.to_string().parse::<NormMode>().unwrap(), mode);
    }
}

#[test]
fn test_empty_name_is_invalid_argument() {
    assert!(matches!(
        create("", 1.0, &[1.0]),
        Err(NormError::InvalidArgument(_))
    ));
    assert!(matches!(
        NormMode::from_name("   "),
        Err(NormError::InvalidArgument(_))
    ));
}

#[test]
fn test_unknown_name() {
    let err = create("bogus-name", 1.0, &[1.0]).unwrap_err();
    assert_eq!(err, NormError::UnknownStrategy("bogus-name".to_string()));
    assert_eq!(err.to_string(), "unknown norm mode: bogus-name");
}

#[test]
fn test_names_are_case_sensitive() {
    assert!(matches!(
        NormMode::from_name("MEANDIV"),
        Err(NormError::UnknownStrategy(_))
    ));
}

#[test]
fn test_none_is_identity_bitwise() {
    let nan = f64::from_bits(0x7ff8_0000_0000_0abc);
    let rnd = [1.5, nan, -0.0, f64::INFINITY];
    let norm = create("None", nan, &rnd).unwrap();
    assert_eq!(norm.mode, NormMode::None);
    assert!(norm.stats.is_none());
    assert_eq!(norm.real_norm().to_bits(), nan.to_bits());
    let got: Vec<u64> = norm.random_norm().iter().map(|v| v.to_bits()).collect();
    let want: Vec<u64> = rnd.iter().map(|v| v.to_bits()).collect();
    assert_eq!(got, want);
}

#[test]
fn test_meandiv_through_registry() {
    let norm = create("meandiv", 2.0, &[1.0, 2.0, 3.0, -1.0, -2.0]).unwrap();
    assert_eq!(norm.mode, NormMode::MeanDivPosNegSeparate);
    let stats = norm.stats.unwrap();
    assert_eq!((stats.n_pos, stats.n_neg), (3, 2));
    assert!((norm.real_norm() - 1.0).abs() < 1e-12);
    let result = norm.into_result();
    assert_eq!(result.rnd.len(), 5);
}

#[test]
fn test_default_mode_is_meandiv() {
    assert_eq!(NormMode::default(), NormMode::MeanDivPosNegSeparate);
}

#[test]
fn test_serde_by_name() {
    let json = serde_json::to_string(&NormMode::None).unwrap();
    assert_eq!(json, "\"None\"");
    let mode: NormMode = serde_json::from_str("\"meandiv\"").unwrap();
    assert_eq!(mode, NormMode::MeanDivPosNegSeparate);
    let err = serde_json::from_str::<NormMode>("\"zscore\"").unwrap_err();
    assert!(err.to_string().contains("unknown norm mode: zscore"));
}
