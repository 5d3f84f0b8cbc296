//! Node configuration
//!
//! Everything that differs between deployments: radio region, uplink port
//! and cadence, the node's fixed position and the payload bound. Sensor
//! calibration defaults are not here; they live in `constants` and in each
//! probe's calibration profile.
//!
//! With the `serde` feature the configuration can be loaded from JSON (or
//! any serde format). Missing fields take their defaults:
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use aquanode_core::{NodeConfig, Region};
//!
//! let config: NodeConfig = serde_json::from_str(r#"{ "region": "US915" }"#).unwrap();
//! assert_eq!(config.region, Region::Us915);
//! assert_eq!(config.app_port, 2);
//! # }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::payload::{LORAWAN_DEFAULT_APP_PORT, LORAWAN_MAX_APP_PAYLOAD};
use crate::constants::time::DEFAULT_TX_INTERVAL_MS;
use crate::constants::water::PH_REFERENCE_TEMP_C;
use crate::errors::{ConfigError, ConfigResult};
use crate::payload::{PayloadEncoder, Region};

/// Default latitude (°N)
pub const DEFAULT_LATITUDE: f32 = 36.7461;

/// Default longitude (°E)
pub const DEFAULT_LONGITUDE: f32 = 10.4231;

/// Fixed node position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeoPosition {
    /// Degrees north, negative for south
    pub latitude: f32,
    /// Degrees east, negative for west
    pub longitude: f32,
}

impl Default for GeoPosition {
    fn default() -> Self {
        Self { latitude: DEFAULT_LATITUDE, longitude: DEFAULT_LONGITUDE }
    }
}

/// Deployment settings for one node
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeConfig {
    /// Radio region the node joins in
    pub region: Region,
    /// LoRaWAN application port
    pub app_port: u8,
    /// Request network acknowledgement
    pub confirmed: bool,
    /// Period between uplinks (ms)
    pub tx_interval_ms: u64,
    /// Static position reported in every uplink
    pub position: GeoPosition,
    /// Upper bound on the application payload (bytes)
    pub max_payload_len: usize,
    /// Compensation temperature used when the water probe fails (°C)
    pub fallback_temperature_c: f32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            app_port: LORAWAN_DEFAULT_APP_PORT,
            confirmed: false,
            tx_interval_ms: DEFAULT_TX_INTERVAL_MS,
            position: GeoPosition::default(),
            max_payload_len: LORAWAN_MAX_APP_PAYLOAD,
            fallback_temperature_c: PH_REFERENCE_TEMP_C,
        }
    }
}

impl NodeConfig {
    /// Set the radio region
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Set the uplink period
    pub fn with_tx_interval(mut self, interval_ms: u64) -> Self {
        self.tx_interval_ms = interval_ms;
        self
    }

    /// Set the payload bound
    pub fn with_max_payload_len(mut self, len: usize) -> Self {
        self.max_payload_len = len;
        self
    }

    /// Set confirmed uplinks
    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Reject settings the node cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tx_interval_ms == 0 {
            return Err(ConfigError::ZeroTxInterval);
        }

        if self.max_payload_len == 0 || self.max_payload_len > LORAWAN_MAX_APP_PAYLOAD {
            return Err(ConfigError::InvalidPayloadLength {
                len: self.max_payload_len,
                max: LORAWAN_MAX_APP_PAYLOAD,
            });
        }

        let GeoPosition { latitude, longitude } = self.position;
        if !((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)) {
            return Err(ConfigError::InvalidPosition { latitude, longitude });
        }

        Ok(())
    }

    /// Payload encoder for the configured region and bound
    ///
    /// The bound is the tighter of the region limit and `max_payload_len`.
    pub fn encoder(&self) -> PayloadEncoder {
        PayloadEncoder::for_region(self.region)
            .with_limit(self.max_payload_len.min(self.region.max_payload_len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NodeConfig::default();
        assert_eq!(config.region, Region::Eu868);
        assert_eq!(config.app_port, 2);
        assert!(!config.confirmed);
        assert_eq!(config.tx_interval_ms, 10_000);
        assert_eq!(config.max_payload_len, 242);
        assert_eq!(config.fallback_temperature_c, 25.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unusable_settings() {
        assert_eq!(
            NodeConfig::default().with_tx_interval(0).validate(),
            Err(ConfigError::ZeroTxInterval)
        );
        assert!(NodeConfig::default().with_max_payload_len(0).validate().is_err());
        assert!(NodeConfig::default().with_max_payload_len(243).validate().is_err());
        assert!(NodeConfig::default().with_max_payload_len(51).validate().is_ok());

        let mut config = NodeConfig::default();
        config.position.latitude = 91.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPosition { .. })));
    }

    #[test]
    fn encoder_follows_region() {
        let config = NodeConfig::default().with_region(Region::Au915).with_max_payload_len(51);
        let encoder = config.encoder();
        assert_eq!(encoder.strategy_name(), "compact");

        let payload = encoder.encode(&crate::payload::PayloadInputs::new(config.position));
        assert!(payload.limit() == 51);
    }
}
