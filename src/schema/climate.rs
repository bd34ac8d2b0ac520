//! The `climate` / `platform: bedjet` block
//!
//! This is the configuration surface translated into setter calls on the
//! native `bedjet::Bedjet` component. Unknown keys are rejected; the keys
//! owned by other schemas (entity name, visual bounds, polling interval)
//! carry the defaults those schemas would apply.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};

use super::time_period::TimePeriod;
use super::ConfigError;
use crate::constants::defaults;

/// Strategy used by the device for the climate HEAT mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeatMode {
    /// Regular heat, limited to 4 hours on the device.
    #[default]
    Heat,
    /// Extended heat, limited to 10 hours.
    Extended,
}

static HEAT_MODES: Lazy<HashMap<&'static str, HeatMode>> = Lazy::new(|| {
    HashMap::from([("heat", HeatMode::Heat), ("extended", HeatMode::Extended)])
});

impl HeatMode {
    /// Name of the native enum constant passed to `set_heating_mode`.
    pub fn cpp_constant(&self) -> &'static str {
        match self {
            Self::Heat => "bedjet::HEAT_MODE_HEAT",
            Self::Extended => "bedjet::HEAT_MODE_EXTENDED",
        }
    }
}

impl FromStr for HeatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HEAT_MODES
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownHeatMode(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for HeatMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Visual bounds inherited from the generic climate schema.
#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct VisualConfig {
    #[serde(default = "defaults::visual_min_temperature")]
    pub min_temperature: f32,
    #[serde(default = "defaults::visual_max_temperature")]
    pub max_temperature: f32,
    #[serde(default = "defaults::visual_temperature_step")]
    pub temperature_step: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            min_temperature: defaults::visual_min_temperature(),
            max_temperature: defaults::visual_max_temperature(),
            temperature_step: defaults::visual_temperature_step(),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct BedjetClimateConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub heat_mode: HeatMode,
    #[serde(default)]
    pub time_id: Option<String>,
    #[serde(default)]
    pub receive_timeout: TimePeriod,
    #[serde(default)]
    pub ble_client_id: Option<String>,
    #[serde(default)]
    pub bedjet_id: Option<String>,
    #[serde(default = "defaults::update_interval")]
    pub update_interval: TimePeriod,
    #[serde(default)]
    pub visual: Option<VisualConfig>,
}
