use std::fs;

use anyhow::{Context, Result};

use crate::argsets::ValidateArgs;
use bjc::schema;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config_path)
        .with_context(|| format!("could not read {}", args.config_path.display()))?;
    let doc = schema::from_str(&raw)?;
    let resolved = schema::validate(&doc)?;
    log::info!(
        "configuration valid: {} bedjet hub(s), {} climate entr{}",
        resolved.hubs.len(),
        resolved.climates.len(),
        if resolved.climates.len() == 1 { "y" } else { "ies" },
    );
    Ok(())
}
