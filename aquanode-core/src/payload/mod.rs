//! Uplink Payload Encoding
//!
//! ## Overview
//!
//! One uplink is a flat list of `[channel][type][value]` entries bounded by
//! the LoRaWAN application payload size. What goes into it depends on the
//! radio region:
//!
//! | channels  | content                         | full | compact |
//! |-----------|---------------------------------|------|---------|
//! | 1-3       | pressure, air temp, humidity    | ✓    | ✓       |
//! | 4-6       | water temp, pH, TDS (ppm)       | ✓    | ✓       |
//! | 7-8       | latitude, longitude             | ✓    | ✓       |
//! | 9         | water-quality code              | ✓    |         |
//! | 10-12     | thermal min/max/avg (+100 °C)   | ✓    |         |
//! | 20-21     | thermal grid width/height       | ✓    |         |
//! | 30-93     | Format B pixels                 | ✓    |         |
//! | 18        | water-quality code              |      | ✓       |
//! | 19        | thermal avg (+100 °C)           |      | ✓       |
//!
//! Channels whose reading failed or is invalid are left out. The shape is a
//! [`PayloadStrategy`] chosen by [`Region::strategy`], so supporting a new
//! region means mapping it to an existing strategy or adding one.
//!
//! ```rust
//! use aquanode_core::config::GeoPosition;
//! use aquanode_core::payload::{PayloadEncoder, PayloadInputs, Region};
//!
//! let inputs = PayloadInputs::new(GeoPosition::default());
//! let payload = PayloadEncoder::for_region(Region::Eu868).encode(&inputs);
//!
//! // latitude, longitude, water-quality code
//! assert_eq!(payload.len(), 4 + 4 + 3);
//! ```

pub mod encoder;
pub mod lpp;
pub mod region;
pub mod strategy;

pub use encoder::{PayloadEncoder, PayloadInputs, ThermalSummary};
pub use lpp::{EncodedPayload, Entries, LppEntry, PAYLOAD_CAPACITY};
pub use region::Region;
pub use strategy::{CompactPayload, FullPayload, PayloadStrategy};
