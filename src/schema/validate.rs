//! Cross-field validation
//!
//! Everything here runs after the YAML parse and before code generation.
//! All failures in a document are collected and reported together, in
//! document order, rather than stopping at the first.

use std::fmt;

use itertools::Itertools;

use super::document::{ClimateEntry, ConfigDocument};
use super::ids::{ComponentKind, IdRegistry};
use super::ConfigError;

/// Ids assigned to the bedjet-owned blocks, in document order. Blocks
/// that omitted an id get an auto-generated one.
#[derive(Debug)]
pub struct ResolvedIds {
    pub hubs: Vec<String>,
    pub climates: Vec<String>,
}

#[derive(Debug)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.to_string()).join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

fn declare(
    registry: &mut IdRegistry,
    errors: &mut Vec<ConfigError>,
    id: &str,
    kind: ComponentKind,
) {
    if let Err(e) = registry.declare(id, kind) {
        errors.push(e);
    }
}

pub fn validate(doc: &ConfigDocument) -> Result<ResolvedIds, ValidationErrors> {
    let mut errors: Vec<ConfigError> = Vec::new();
    let mut registry = IdRegistry::new();

    for time in &doc.time {
        declare(&mut registry, &mut errors, &time.id, ComponentKind::Time);
    }
    for ble in &doc.ble_client {
        declare(&mut registry, &mut errors, &ble.id, ComponentKind::BleClient);
    }
    for hub in &doc.bedjet {
        if let Some(id) = &hub.id {
            declare(&mut registry, &mut errors, id, ComponentKind::BedjetHub);
        }
    }
    for ClimateEntry::Bedjet(climate) in &doc.climate {
        if let Some(id) = &climate.id {
            declare(&mut registry, &mut errors, id, ComponentKind::BedjetClimate);
        }
    }

    // Auto ids are assigned only after every explicit id is known, so a
    // generated name can never shadow a later declaration.
    let hubs: Vec<String> = doc
        .bedjet
        .iter()
        .map(|hub| match &hub.id {
            Some(id) => id.clone(),
            None => registry.generate(ComponentKind::BedjetHub),
        })
        .collect();
    let climates: Vec<String> = doc
        .climate
        .iter()
        .map(|ClimateEntry::Bedjet(climate)| match &climate.id {
            Some(id) => id.clone(),
            None => registry.generate(ComponentKind::BedjetClimate),
        })
        .collect();

    for hub in &doc.bedjet {
        if let Err(e) = registry.resolve(&hub.ble_client_id, ComponentKind::BleClient) {
            errors.push(e);
        }
    }

    for ClimateEntry::Bedjet(climate) in &doc.climate {
        if climate.ble_client_id.is_some() && climate.bedjet_id.is_some() {
            errors.push(ConfigError::ConflictingTransport);
        }
        if let Some(id) = &climate.ble_client_id {
            if let Err(e) = registry.resolve(id, ComponentKind::BleClient) {
                errors.push(e);
            }
        }
        if let Some(id) = &climate.bedjet_id {
            if let Err(e) = registry.resolve(id, ComponentKind::BedjetHub) {
                errors.push(e);
            }
        }
        if let Some(id) = &climate.time_id {
            if let Err(e) = registry.resolve(id, ComponentKind::Time) {
                errors.push(e);
            }
        }
        if climate.name.trim().is_empty() {
            errors.push(ConfigError::EmptyName);
        }
        if climate.update_interval.is_zero() {
            errors.push(ConfigError::NonPositivePeriod("update_interval"));
        }
        if let Some(visual) = &climate.visual {
            if visual.min_temperature >= visual.max_temperature {
                errors.push(ConfigError::InvalidVisualRange {
                    min: visual.min_temperature,
                    max: visual.max_temperature,
                });
            }
            if visual.temperature_step <= 0.0 {
                errors.push(ConfigError::NonPositiveStep(visual.temperature_step));
            }
        }
    }

    if errors.is_empty() {
        Ok(ResolvedIds { hubs, climates })
    } else {
        Err(ValidationErrors(errors))
    }
}
