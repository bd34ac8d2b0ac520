//! Top-level configuration document
//!
//! A firmware config contains many blocks; this compiler owns only the
//! `bedjet` hub block and the `climate` list. The `time` and `ble_client`
//! blocks are parsed just far enough to register the ids that bedjet
//! blocks may reference; blocks owned by other components are ignored.

use serde::Deserialize;

use super::climate::BedjetClimateConfig;
use super::hub::BedjetHubConfig;

/// A declared real-time-clock component. The component itself is
/// external; only its id matters here.
#[derive(Deserialize, Clone, Debug)]
pub struct TimeComponent {
    pub platform: String,
    pub id: String,
}

/// A declared BLE transport. External; only the id matters here.
#[derive(Deserialize, Clone, Debug)]
pub struct BleClientConfig {
    pub id: String,
    #[serde(default)]
    pub mac_address: Option<String>,
}

/// A `climate:` list entry, dispatched on its `platform` key. Platforms
/// other than bedjet are not this compiler's to translate and fail the
/// parse.
#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum ClimateEntry {
    Bedjet(BedjetClimateConfig),
}

#[derive(Deserialize, Debug, Default)]
pub struct ConfigDocument {
    #[serde(default)]
    pub time: Vec<TimeComponent>,
    #[serde(default)]
    pub ble_client: Vec<BleClientConfig>,
    #[serde(default)]
    pub bedjet: Vec<BedjetHubConfig>,
    #[serde(default)]
    pub climate: Vec<ClimateEntry>,
}
