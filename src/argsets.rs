use std::path::PathBuf;

pub struct ValidateArgs {
    pub config_path: PathBuf,
}

pub struct GenerateArgs {
    pub config_path: PathBuf,
}
