mod climate;
mod document;
mod hub;
mod ids;
mod time_period;
mod validate;

pub use climate::{BedjetClimateConfig, HeatMode, VisualConfig};
pub use document::{BleClientConfig, ClimateEntry, ConfigDocument, TimeComponent};
pub use hub::BedjetHubConfig;
pub use ids::{is_valid_ident, ComponentKind, IdRegistry};
pub use time_period::{TimePeriod, TimePeriodError};
pub use validate::{validate, ResolvedIds, ValidationErrors};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse config YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("invalid heat_mode '{0}': expected one of 'heat', 'extended'")]
    UnknownHeatMode(String),
    #[error("'{0}' is not a valid component id")]
    InvalidId(String),
    #[error("duplicate component id '{0}'")]
    DuplicateId(String),
    #[error("'{id}' does not reference a declared {expected}")]
    UnresolvedReference { id: String, expected: &'static str },
    #[error("at most one of 'ble_client_id' and 'bedjet_id' may be set")]
    ConflictingTransport,
    #[error("climate entry needs a non-empty 'name'")]
    EmptyName,
    #[error("'{0}' must be a positive time period")]
    NonPositivePeriod(&'static str),
    #[error("visual range is invalid: min_temperature {min} must be below max_temperature {max}")]
    InvalidVisualRange { min: f32, max: f32 },
    #[error("visual temperature_step {0} must be positive")]
    NonPositiveStep(f32),
}

pub fn from_str(config_raw: &str) -> Result<ConfigDocument, ConfigError> {
    serde_yaml::from_str::<ConfigDocument>(config_raw).map_err(Into::into)
}
