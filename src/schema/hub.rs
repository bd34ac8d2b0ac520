//! The top-level `bedjet` hub block
//!
//! The hub owns the BLE connection to the physical accessory and fans
//! status updates out to its child entities. Climate blocks bind to a hub
//! through `bedjet_id`.

use serde::Deserialize;

use super::time_period::TimePeriod;

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct BedjetHubConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub ble_client_id: String,
    #[serde(default)]
    pub receive_timeout: Option<TimePeriod>,
}
