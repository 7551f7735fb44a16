/// CLI configuration
use crate::error::{CliError, Result};
use ::config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tapedeck_importer::ImportConfig;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tapedeck.toml";

/// Prefix of environment overrides, e.g. `TAPEDECK_IMPORT__MAX_CONCURRENT=8`
pub const ENV_PREFIX: &str = "TAPEDECK";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub import: ImportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImportSettings {
    #[serde(default = "default_audio_extensions")]
    pub audio_extensions: Vec<String>,

    #[serde(default = "default_cover_keywords")]
    pub cover_keywords: Vec<String>,

    #[serde(default = "default_id3_scan_limit")]
    pub id3_scan_limit: usize,

    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Follow symbolic links while scanning directories
    #[serde(default)]
    pub follow_links: bool,

    /// Directory depth limit while scanning
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            audio_extensions: default_audio_extensions(),
            cover_keywords: default_cover_keywords(),
            id3_scan_limit: default_id3_scan_limit(),
            max_concurrent: default_max_concurrent(),
            follow_links: false,
            max_depth: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `tapedeck.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment instead of the process environment
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut settings = Config::builder();

        settings = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file {} not found",
                        path.display()
                    )));
                }
                settings.add_source(File::from(path.to_path_buf()))
            }
            None => {
                settings.add_source(File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false))
            }
        };

        // Override with environment variables (prefixed with TAPEDECK_)
        settings = settings.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("import.audio_extensions")
                .with_list_parse_key("import.cover_keywords")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.import_config().map(|_| ())
    }

    /// Importer settings, normalized and validated
    pub fn import_config(&self) -> Result<ImportConfig> {
        let import = &self.import;
        ImportConfig {
            audio_extensions: import.audio_extensions.clone(),
            cover_keywords: import.cover_keywords.clone(),
            id3_scan_limit: import.id3_scan_limit,
            max_concurrent: import.max_concurrent,
        }
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))
    }
}

// Default values
fn default_audio_extensions() -> Vec<String> {
    ImportConfig::default().audio_extensions
}

fn default_cover_keywords() -> Vec<String> {
    ImportConfig::default().cover_keywords
}

fn default_id3_scan_limit() -> usize {
    ImportConfig::default().id3_scan_limit
}

fn default_max_concurrent() -> usize {
    ImportConfig::default().max_concurrent
}
