//! Application configuration for rubrix.
//!
//! User config lives at `~/.rubrix/rubrix.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RubrixError};
use crate::types::DEFAULT_SUB_LIST_SPACING;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "rubrix.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".rubrix";

// ---------------------------------------------------------------------------
// Config structs (matching rubrix.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Spaces of indentation per nesting level in outputs.
    #[serde(default = "default_sub_list_spacing")]
    pub sub_list_spacing: u32,

    /// Default path for the human-readable listing artifact.
    #[serde(default = "default_text_output")]
    pub text_output: String,

    /// Default path for the JSON export artifact.
    #[serde(default = "default_json_output")]
    pub json_output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sub_list_spacing: default_sub_list_spacing(),
            text_output: default_text_output(),
            json_output: default_json_output(),
        }
    }
}

fn default_sub_list_spacing() -> u32 {
    DEFAULT_SUB_LIST_SPACING
}
fn default_text_output() -> String {
    "output.txt".into()
}
fn default_json_output() -> String {
    "json.txt".into()
}

// ---------------------------------------------------------------------------
// Extract config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime extraction configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Spaces of indentation per nesting level.
    pub sub_list_spacing: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            sub_list_spacing: DEFAULT_SUB_LIST_SPACING,
        }
    }
}

impl From<&AppConfig> for ExtractConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            sub_list_spacing: config.defaults.sub_list_spacing,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.rubrix/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RubrixError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.rubrix/rubrix.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RubrixError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| RubrixError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| RubrixError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RubrixError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RubrixError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("sub_list_spacing"));
        assert!(toml_str.contains("output.txt"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.sub_list_spacing, 2);
        assert_eq!(parsed.defaults.json_output, "json.txt");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
sub_list_spacing = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.sub_list_spacing, 4);
        assert_eq!(config.defaults.text_output, "output.txt");
    }

    #[test]
    fn extract_config_from_app_config() {
        let mut app = AppConfig::default();
        app.defaults.sub_list_spacing = 3;
        let extract = ExtractConfig::from(&app);
        assert_eq!(extract.sub_list_spacing, 3);
    }
}
