use super::*;

#[test]
fn defaults_match_mock_timings() {
    let config = PortalConfig::default();
    assert_eq!(config.storage_key, "user");
    assert_eq!(config.auth_latency(), Duration::from_secs(1));
    assert_eq!(config.recommendations_latency(), Duration::from_millis(1500));
    assert_eq!(config.allocation_latency(), Duration::from_secs(3));
    assert!(config.allotment_available);
}

#[test]
fn normalize_value_trims_and_rejects_empty() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(normalize_value(" portal_user "), Some("portal_user".to_owned()));
}

#[test]
fn parse_millis_rejects_garbage() {
    assert_eq!(parse_millis(" 250 "), Some(250));
    assert_eq!(parse_millis("-1"), None);
    assert_eq!(parse_millis("soon"), None);
}

#[test]
fn parse_flag_accepts_common_spellings() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn empty_overrides_keep_current_values() {
    let mut config = PortalConfig::default();
    Overrides::default().apply(&mut config);
    assert_eq!(config, PortalConfig::default());
}

#[test]
fn overrides_replace_present_values_only() {
    let mut config = PortalConfig::default();
    Overrides {
        storage_key: Some("portal_identity".to_owned()),
        auth_latency_ms: Some(0),
        allotment_available: Some(false),
        ..Overrides::default()
    }
    .apply(&mut config);

    assert_eq!(config.storage_key, "portal_identity");
    assert_eq!(config.auth_latency_ms, 0);
    assert!(!config.allotment_available);
    assert_eq!(config.request_latency_ms, DEFAULT_REQUEST_LATENCY_MS);
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_uses_build_values() {
    assert_eq!(PortalConfig::load(), PortalConfig::from_build_env());
}
