use std::fs;

use anyhow::{Context, Result};

use crate::argsets::GenerateArgs;
use bjc::{codegen, schema};

pub fn generate(args: GenerateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config_path)
        .with_context(|| format!("could not read {}", args.config_path.display()))?;
    let doc = schema::from_str(&raw)?;
    let resolved = schema::validate(&doc)?;
    for stmt in codegen::generate(&doc, &resolved) {
        println!("{stmt}");
    }
    Ok(())
}
