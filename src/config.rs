//! CLI configuration
//!
//! Settings come from four layers, highest priority first:
//!
//! 1. command-line flags
//! 2. environment (`BL_ACCESS_TOKEN`, `BL_API_URL`, `BL_CONTEXT`)
//! 3. the YAML config file (`<config dir>/bl/config.yaml` by default)
//! 4. built-in defaults
//!
//! ```yaml
//! access-token: 3a1f...
//! api-url: https://api.binarylane.com.au
//! context: staging
//! auth-contexts:
//!   staging: 9c2e...
//! output: text
//! ```

use crate::error::{Error, Result};
use crate::http::DEFAULT_API_URL;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ACCESS_TOKEN: &str = "BL_ACCESS_TOKEN";
pub const ENV_API_URL: &str = "BL_API_URL";
pub const ENV_CONTEXT: &str = "BL_CONTEXT";

/// Context that reads the top-level `access-token`
pub const DEFAULT_CONTEXT: &str = "default";

const CONFIG_DIR_NAME: &str = "bl";
const CONFIG_FILENAME: &str = "config.yaml";

// ============================================================================
// Output Format
// ============================================================================

/// How command results are written to stdout
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// ============================================================================
// Config File
// ============================================================================

/// Contents of the YAML config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConfigFile {
    /// Token of the default context
    pub access_token: Option<String>,

    /// API base URL
    pub api_url: Option<String>,

    /// Selected auth context
    pub context: Option<String>,

    /// Tokens of named contexts
    pub auth_contexts: BTreeMap<String, String>,

    /// Default output format
    pub output: Option<OutputFormat>,
}

impl ConfigFile {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
    }

    /// Load the config file at `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Token configured for `context`
    pub fn token_for(&self, context: &str) -> Option<&str> {
        if context == DEFAULT_CONTEXT {
            self.access_token.as_deref()
        } else {
            self.auth_contexts.get(context).map(String::as_str)
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub access_token: Option<String>,
    pub api_url: Option<String>,
    pub context: Option<String>,
    pub output: Option<OutputFormat>,
}

/// Fully resolved settings for one invocation
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub access_token: String,
    pub api_url: String,
    pub context: String,
    pub output: OutputFormat,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("access_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("context", &self.context)
            .field("output", &self.output)
            .finish()
    }
}

impl Settings {
    /// Resolve settings against the process environment
    pub fn resolve(file: &ConfigFile, flags: &Overrides) -> Result<Self> {
        Self::resolve_with_env(file, flags, |key| std::env::var(key).ok())
    }

    /// Resolve settings, reading environment variables through `env`
    pub fn resolve_with_env<F>(file: &ConfigFile, flags: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let context = flags
            .context
            .clone()
            .or_else(|| lookup(ENV_CONTEXT))
            .or_else(|| file.context.clone())
            .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

        let api_url = flags
            .api_url
            .clone()
            .or_else(|| lookup(ENV_API_URL))
            .or_else(|| file.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let access_token = match flags.access_token.clone().or_else(|| lookup(ENV_ACCESS_TOKEN)) {
            Some(token) => token,
            None => Self::file_token(file, &context)?,
        };

        let output = flags.output.or(file.output).unwrap_or_default();

        Ok(Self {
            access_token,
            api_url,
            context,
            output,
        })
    }

    fn file_token(file: &ConfigFile, context: &str) -> Result<String> {
        if let Some(token) = file.token_for(context).filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }
        if context != DEFAULT_CONTEXT && !file.auth_contexts.contains_key(context) {
            return Err(Error::config(format!("unknown auth context '{context}'")));
        }
        Err(Error::missing_field("access-token"))
    }
}
