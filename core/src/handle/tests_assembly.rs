use super::{build_slices, verify_ascending, HandleConfig, HandleProfiles, Resolution, MAX_SEGMENTS};
use crate::error::HandleError;
use crate::geometry::{ApproxEq, Polygon};

fn expected_len(config: &HandleConfig) -> usize {
    let steps = config.resolution().interpolation_steps;
    steps + config.count * (steps - 1) + (steps - 1)
}

#[test]
fn test_default_handle_slice_count() {
    let config = HandleConfig::default();
    assert_eq!(config.count, 8);
    assert!(config.offset.approx_eq(&20.0));

    let slices = build_slices(&config).unwrap();
    // entry cap (8) + 8 segments * 7 + exit cap (7)
    assert_eq!(slices.len(), 71);
    assert_eq!(slices.len(), expected_len(&config));
    assert_eq!(config.slice_count(), Some(71));
    verify_ascending(&slices).unwrap();
    assert!(slices.iter().all(|s| s.len() == 36));
}

#[test]
fn test_handle_spans_end_caps() {
    let slices = build_slices(&HandleConfig::default()).unwrap();
    assert!(slices.first().unwrap().z().unwrap().approx_eq(&-1.0));
    assert!(slices.last().unwrap().z().unwrap().approx_eq(&81.0));
}

#[test]
fn test_end_cap_is_shrunk_large_profile() {
    let slices = build_slices(&HandleConfig::default()).unwrap();
    // First vertex sits on the +X axis at half the width.
    let entry = slices.first().unwrap().points()[0];
    assert!(entry.x.approx_eq(&7.75));
    let exit = slices.last().unwrap().points()[0];
    assert!(exit.x.approx_eq(&7.75));
}

#[test]
fn test_segments_alternate_large_and_small() {
    let config = HandleConfig::default();
    let steps = config.resolution().interpolation_steps;
    let slices = build_slices(&config).unwrap();

    // Last slice of the entry cap is the large profile at z = 0.
    let large_start = &slices[steps - 1];
    assert!(large_start.z().unwrap().approx_eq(&0.0));
    assert!(large_start.points()[0].x.approx_eq(&8.25));

    // End of segment 0 is small at z = 10, end of segment 1 is large at z = 20.
    let seg0_end = &slices[steps - 1 + (steps - 1)];
    assert!(seg0_end.z().unwrap().approx_eq(&10.0));
    assert!(seg0_end.points()[0].x.approx_eq(&5.5));

    let seg1_end = &slices[steps - 1 + 2 * (steps - 1)];
    assert!(seg1_end.z().unwrap().approx_eq(&20.0));
    assert!(seg1_end.points()[0].x.approx_eq(&8.25));
}

#[test]
fn test_low_resolution_halves_sampling() {
    let config = HandleConfig {
        low_resolution: true,
        ..Default::default()
    };
    assert_eq!(config.resolution(), Resolution::LOW);

    let slices = build_slices(&config).unwrap();
    assert_eq!(slices.len(), expected_len(&config));
    assert_eq!(slices.len(), 6 + 8 * 5 + 5);
    assert!(slices.iter().all(|s| s.len() == 18));
    verify_ascending(&slices).unwrap();
}

#[test]
fn test_odd_count_exits_from_small_profile() {
    let config = HandleConfig {
        count: 3,
        ..Default::default()
    };
    let steps = config.resolution().interpolation_steps;
    let slices = build_slices(&config).unwrap();
    assert_eq!(slices.len(), expected_len(&config));
    verify_ascending(&slices).unwrap();

    // Last segment ends on the small profile at z = 30.
    let last_segment = &slices[slices.len() - steps];
    assert!(last_segment.z().unwrap().approx_eq(&30.0));
    assert!(last_segment.points()[0].x.approx_eq(&5.5));
}

#[test]
fn test_zero_segments_only_caps() {
    let config = HandleConfig {
        count: 0,
        ..Default::default()
    };
    let slices = build_slices(&config).unwrap();
    assert_eq!(slices.len(), 8 + 7);
    verify_ascending(&slices).unwrap();
}

#[test]
fn test_profiles_sit_at_expected_heights() {
    let profiles = HandleProfiles::new(&HandleConfig::default()).unwrap();
    assert!(profiles.large_start.z().unwrap().approx_eq(&0.0));
    assert!(profiles.small_mid.z().unwrap().approx_eq(&10.0));
    assert!(profiles.small_start.z().unwrap().approx_eq(&0.0));
    assert!(profiles.large_mid.z().unwrap().approx_eq(&10.0));
    assert!(profiles.entry.z().unwrap().approx_eq(&-1.0));
}

#[test]
fn test_invalid_config_is_rejected() {
    let bad_order = HandleConfig {
        small: super::Dimension::new(11.0, 10.5, 0.0),
        ..Default::default()
    };
    assert!(matches!(build_slices(&bad_order), Err(HandleError::Validation(_))));

    let bad_offset = HandleConfig {
        offset: 0.0,
        ..Default::default()
    };
    assert!(matches!(build_slices(&bad_offset), Err(HandleError::Validation(_))));

    let huge_count = HandleConfig {
        count: usize::MAX,
        ..Default::default()
    };
    assert_eq!(huge_count.slice_count(), None);
    assert!(matches!(huge_count.validate(), Err(HandleError::Validation(_))));
    assert!(matches!(build_slices(&huge_count), Err(HandleError::Validation(_))));

    let just_over = HandleConfig {
        count: MAX_SEGMENTS + 1,
        ..Default::default()
    };
    assert!(matches!(just_over.validate(), Err(HandleError::Validation(_))));

    let mut over_shrunk = HandleConfig::default();
    over_shrunk.end.shrink = 20.0;
    assert!(matches!(build_slices(&over_shrunk), Err(HandleError::Validation(_))));
}

#[test]
fn test_config_from_partial_json() {
    let config = HandleConfig::from_json_str(r#"{ "count": 4, "low_resolution": true }"#).unwrap();
    assert_eq!(config.count, 4);
    assert!(config.low_resolution);
    assert_eq!(config.large, HandleConfig::default().large);
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(matches!(
        HandleConfig::from_json_str("{ count: }"),
        Err(HandleError::Config(_))
    ));
}

#[test]
fn test_verify_ascending_flags_repeated_heights() {
    let a = Polygon::from_arrays(&[[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
    assert!(verify_ascending(&[a.clone(), a]).is_err());
}
