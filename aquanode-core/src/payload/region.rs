//! LoRaWAN regions and their payload strategy

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::strategy::{CompactPayload, FullPayload, PayloadStrategy};
use crate::constants::payload::LORAWAN_MAX_APP_PAYLOAD;

/// Radio regulatory region the node is joined in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Asia 923 MHz
    As923,
    /// Australia 915 MHz
    Au915,
    /// China 470 MHz
    Cn470,
    /// China 779 MHz
    Cn779,
    /// Europe 433 MHz
    Eu433,
    /// Europe 868 MHz
    #[default]
    Eu868,
    /// South Korea 920 MHz
    Kr920,
    /// India 865 MHz
    In865,
    /// North America 915 MHz
    Us915,
    /// Russia 864 MHz
    Ru864,
}

static FULL: FullPayload = FullPayload;
static COMPACT: CompactPayload = CompactPayload;

impl Region {
    /// Every supported region
    pub const ALL: [Region; 10] = [
        Region::As923,
        Region::Au915,
        Region::Cn470,
        Region::Cn779,
        Region::Eu433,
        Region::Eu868,
        Region::Kr920,
        Region::In865,
        Region::Us915,
        Region::Ru864,
    ];

    /// Regional short name
    pub fn name(self) -> &'static str {
        match self {
            Self::As923 => "AS923",
            Self::Au915 => "AU915",
            Self::Cn470 => "CN470",
            Self::Cn779 => "CN779",
            Self::Eu433 => "EU433",
            Self::Eu868 => "EU868",
            Self::Kr920 => "KR920",
            Self::In865 => "IN865",
            Self::Us915 => "US915",
            Self::Ru864 => "RU864",
        }
    }

    /// Payload shape used in this region
    ///
    /// The 915/923 MHz plans allow as little as 11 bytes at their slowest
    /// data rates, so they only carry the compact set.
    pub fn strategy(self) -> &'static dyn PayloadStrategy {
        match self {
            Self::Us915 | Self::Au915 | Self::As923 => &COMPACT,
            _ => &FULL,
        }
    }

    /// Largest application payload the stack accepts (bytes)
    pub fn max_payload_len(self) -> usize {
        LORAWAN_MAX_APP_PAYLOAD
    }
}
