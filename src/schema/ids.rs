//! Component-id registry
//!
//! Every block in the document may declare an id; bedjet-owned blocks may
//! also reference ids declared elsewhere (`time_id`, `ble_client_id`,
//! `bedjet_id`). The registry tracks which kind of component each id
//! belongs to, so references are checked against the right block type,
//! and hands out auto-generated ids for blocks that omit one.

use std::collections::HashMap;

use super::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    Time,
    BleClient,
    BedjetHub,
    BedjetClimate,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Time => "time component",
            Self::BleClient => "ble_client",
            Self::BedjetHub => "bedjet hub",
            Self::BedjetClimate => "bedjet climate",
        }
    }

    fn auto_id_base(&self) -> &'static str {
        match self {
            Self::Time => "time_rtc",
            Self::BleClient => "ble_client_bleclient",
            Self::BedjetHub => "bedjet_bedjethub",
            Self::BedjetClimate => "bedjet_bedjet",
        }
    }
}

pub fn is_valid_ident(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Default)]
pub struct IdRegistry {
    ids: HashMap<String, ComponentKind>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, id: &str, kind: ComponentKind) -> Result<(), ConfigError> {
        if !is_valid_ident(id) {
            return Err(ConfigError::InvalidId(id.to_string()));
        }
        if self.ids.contains_key(id) {
            return Err(ConfigError::DuplicateId(id.to_string()));
        }
        self.ids.insert(id.to_string(), kind);
        Ok(())
    }

    pub fn resolve(&self, id: &str, expected: ComponentKind) -> Result<(), ConfigError> {
        match self.ids.get(id) {
            Some(kind) if *kind == expected => Ok(()),
            _ => Err(ConfigError::UnresolvedReference {
                id: id.to_string(),
                expected: expected.label(),
            }),
        }
    }

    /// Assign an auto-generated id following the `<base>`, `<base>_2`, ...
    /// convention, skipping ids already taken by explicit declarations.
    pub fn generate(&mut self, kind: ComponentKind) -> String {
        let base = kind.auto_id_base();
        let mut candidate = base.to_string();
        let mut n = 1;
        while self.ids.contains_key(&candidate) {
            n += 1;
            candidate = format!("{base}_{n}");
        }
        self.ids.insert(candidate.clone(), kind);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_validity() {
        assert!(is_valid_ident("sntp_time"));
        assert!(is_valid_ident("_hub2"));
        assert!(!is_valid_ident(""));
        assert!(!is_valid_ident("2fast"));
        assert!(!is_valid_ident("my-hub"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut reg = IdRegistry::new();
        reg.declare("hub_a", ComponentKind::BedjetHub).unwrap();
        assert!(matches!(
            reg.declare("hub_a", ComponentKind::BleClient),
            Err(ConfigError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_resolve_checks_component_kind() {
        let mut reg = IdRegistry::new();
        reg.declare("hub_a", ComponentKind::BedjetHub).unwrap();
        assert!(reg.resolve("hub_a", ComponentKind::BedjetHub).is_ok());
        assert!(reg.resolve("hub_a", ComponentKind::BleClient).is_err());
        assert!(reg.resolve("missing", ComponentKind::BedjetHub).is_err());
    }

    #[test]
    fn test_generated_ids_disambiguate() {
        let mut reg = IdRegistry::new();
        assert_eq!(reg.generate(ComponentKind::BedjetClimate), "bedjet_bedjet");
        assert_eq!(reg.generate(ComponentKind::BedjetClimate), "bedjet_bedjet_2");
        reg.declare("bedjet_bedjet_3", ComponentKind::BedjetClimate)
            .unwrap();
        assert_eq!(reg.generate(ComponentKind::BedjetClimate), "bedjet_bedjet_4");
    }
}
