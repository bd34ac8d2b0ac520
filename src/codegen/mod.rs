//! Translation of a validated document into static C++ initialization
//! statements for the native bedjet components.
//!
//! There is deliberately no logic here beyond "if option present, emit a
//! setter call": everything that could fail has already failed during
//! validation, so generation is a flat formatting pass.

mod climate;
mod hub;

pub use climate::climate_to_code;
pub use hub::hub_to_code;

use crate::schema::{ClimateEntry, ConfigDocument, ResolvedIds};

/// Emit the setup statements for every bedjet-owned block, hubs first so
/// a climate entry can reference its parent hub's variable.
pub fn generate(doc: &ConfigDocument, ids: &ResolvedIds) -> Vec<String> {
    let mut stmts = Vec::new();
    for (hub, id) in doc.bedjet.iter().zip(&ids.hubs) {
        stmts.extend(hub_to_code(hub, id));
    }
    for (entry, id) in doc.climate.iter().zip(&ids.climates) {
        let ClimateEntry::Bedjet(climate) = entry;
        stmts.extend(climate_to_code(climate, id));
    }
    stmts
}

/// Render a C++ string literal.
pub(crate) fn cstr(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
