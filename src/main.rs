mod argsets;
mod command;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

const CMD_VALIDATE: &str = "validate";
const CMD_GENERATE: &str = "generate";

const LOG_LEVEL_ENV_VAR: &str = "LOGGING_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "INFO";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_VALIDATE) => command::validate(argsets::ValidateArgs {
            config_path: args.free_from_str()?,
        }),
        Some(CMD_GENERATE) => command::generate(argsets::GenerateArgs {
            config_path: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'validate', 'generate'"
        )),
    }
}
