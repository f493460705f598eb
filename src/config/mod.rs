pub mod types;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils::resolve_config_dir;
use crate::versioning::CreationMethod;
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Resolve the path to the config file.
pub fn resolve_config_path() -> PathBuf {
    let dir = resolve_config_dir();
    let json_path = dir.join("vercalc.json");
    if json_path.exists() {
        return json_path;
    }
    let yaml_path = dir.join("vercalc.yaml");
    if yaml_path.exists() {
        return yaml_path;
    }
    let yml_path = dir.join("vercalc.yml");
    if yml_path.exists() {
        return yml_path;
    }
    // Default to JSON
    json_path
}

/// Load configuration from the default config path.
pub fn load_config() -> Result<VercalcConfig, ConfigError> {
    let config_path = resolve_config_path();
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path. A missing file yields defaults.
pub fn load_config_from_path(path: &Path) -> Result<VercalcConfig, ConfigError> {
    if !path.exists() {
        return Ok(VercalcConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = substitute_env_vars(&contents);

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let config: VercalcConfig = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&contents)?,
        _ => serde_json::from_str(&contents)?,
    };
    Ok(config)
}

/// Simple ${ENV_VAR} substitution in config strings.
fn substitute_env_vars(input: &str) -> String {
    let re = regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_default()
    }).into_owned()
}

/// Creation method used when the command line does not name one.
pub fn resolve_default_method(config: &VercalcConfig) -> CreationMethod {
    config.default_method.unwrap_or(CreationMethod::Minor)
}

pub fn resolve_output_format(config: &VercalcConfig) -> OutputFormat {
    config.output.as_ref()
        .and_then(|o| o.format)
        .unwrap_or_default()
}

pub fn resolve_log_level(config: &VercalcConfig) -> Option<&str> {
    config.logging.as_ref()
        .and_then(|l| l.level.as_deref())
        .map(str::trim)
        .filter(|l| !l.is_empty())
}
