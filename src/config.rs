use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::{DEFAULT_FUNCTION_NAMES, ExtractorConfig};

pub const CONFIG_FILE_NAME: &str = ".rosettarc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_function_names")]
    pub function_names: Vec<String>,
    #[serde(default = "default_target_languages")]
    pub target_languages: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_extensions() -> Vec<String> {
    ["vue", "js", "ts"].map(String::from).to_vec()
}

fn default_function_names() -> Vec<String> {
    DEFAULT_FUNCTION_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_target_languages() -> Vec<String> {
    ["dk", "sw", "es", "pt"].map(String::from).to_vec()
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            function_names: default_function_names(),
            target_languages: default_target_languages(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores`, an empty extension list and
    /// empty or blank function names.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.function_names.is_empty() {
            bail!("'functionNames' must list at least one function name");
        }
        if let Some(name) = self
            .function_names
            .iter()
            .find(|name| name.trim().is_empty() || name.chars().any(char::is_whitespace))
        {
            bail!("Invalid function name in 'functionNames': \"{}\"", name);
        }

        Ok(())
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            function_names: self.function_names.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!("using config file {}", path.display());
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
