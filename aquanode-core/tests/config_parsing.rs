//! Loading node configuration from JSON

#![cfg(feature = "serde")]

use aquanode_core::{ConfigError, GeoPosition, NodeConfig, PhCalibration, PhSensor, Region, TdsCalibration};

#[test]
fn empty_document_gives_defaults() {
    let config: NodeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, NodeConfig::default());
}

#[test]
fn full_document() {
    let json = r#"{
        "region": "AU915",
        "app_port": 10,
        "confirmed": true,
        "tx_interval_ms": 60000,
        "position": { "latitude": -33.8688, "longitude": 151.2093 },
        "max_payload_len": 51,
        "fallback_temperature_c": 20.0
    }"#;

    let config: NodeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.region, Region::Au915);
    assert_eq!(config.app_port, 10);
    assert!(config.confirmed);
    assert_eq!(config.tx_interval_ms, 60_000);
    assert_eq!(config.position, GeoPosition { latitude: -33.8688, longitude: 151.2093 });
    assert_eq!(config.fallback_temperature_c, 20.0);
    assert!(config.validate().is_ok());
    assert_eq!(config.encoder().strategy_name(), "compact");
}

#[test]
fn unknown_region_is_a_parse_error() {
    assert!(serde_json::from_str::<NodeConfig>(r#"{ "region": "MARS1" }"#).is_err());
}

#[test]
fn parsed_but_unusable() {
    let config: NodeConfig = serde_json::from_str(r#"{ "max_payload_len": 300 }"#).unwrap();
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidPayloadLength { len: 300, max: 242 })
    );
}

#[test]
fn round_trips_through_json() {
    let config = NodeConfig::default().with_region(Region::Kr920).with_tx_interval(30_000);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"KR920\""));
    assert_eq!(serde_json::from_str::<NodeConfig>(&json).unwrap(), config);
}

#[test]
fn stored_ph_profile_with_flat_slope_is_refused() {
    let json = r#"{
        "slope": 0.0,
        "neutral_voltage_mv": 1500.0,
        "acid_voltage_mv": 2030.0,
        "temp_coefficient": 0.003,
        "reference_temp_c": 25.0,
        "is_calibrated": true
    }"#;

    let err = serde_json::from_str::<PhCalibration>(json).unwrap_err();
    assert!(err.to_string().contains("slope"), "{}", err);
}

#[test]
fn stored_ph_profile_round_trips() {
    let mut profile = PhCalibration::default();
    profile.calibrate_two_point(2030.0, 1500.0).unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    let restored: PhCalibration = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);

    let sensor = PhSensor::with_calibration(restored).unwrap();
    assert!((0.0..=14.0).contains(&sensor.convert(500.0, 25.0)));
}

#[test]
fn stored_tds_profile_with_zero_cell_constant_is_refused() {
    let json = r#"{
        "k_value": 0.0,
        "offset_mv": 0.0,
        "temp_coefficient": 0.02,
        "reference_temp_c": 25.0,
        "is_calibrated": false
    }"#;

    assert!(serde_json::from_str::<TdsCalibration>(json).is_err());
}
