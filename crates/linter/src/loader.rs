use crate::config::LintConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".gqlintrc.yml",
    ".gqlintrc.yaml",
    ".gqlintrc.json",
    ".gqlintrc",
];

/// Errors from loading a lint config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Find a lint config file by walking up the directory tree from the given
/// start directory. Returns the path to the config file if found.
#[must_use]
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::debug!(path = %config_path.display(), "Found config file");
                return Some(config_path);
            }
        }

        if !current_dir.pop() {
            tracing::debug!("No config file found");
            return None;
        }
    }
}

/// Load a lint config from the specified path.
/// Automatically detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<LintConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a lint config from a string.
/// The path is used for format detection only.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<LintConfig, ConfigError> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config: LintConfig = match extension {
        "json" => serde_json::from_str(contents)?,
        // `.gqlintrc` without an extension is YAML by convention
        _ => serde_yaml::from_str(contents)?,
    };

    config.validate().map_err(ConfigError::Invalid)?;

    tracing::debug!("Config loaded successfully");
    Ok(config)
}
