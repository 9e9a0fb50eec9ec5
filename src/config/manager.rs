use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{LanguagePair, default_server_url, validate_language_pair};

/// Environment variable holding the DeepL key unless configured otherwise.
pub const DEFAULT_AUTH_KEY_ENV: &str = "AUTH_KEY";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings in the `[deepl]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeepLConfig {
    /// Environment variable name containing the auth key.
    #[serde(default)]
    pub auth_key_env: Option<String>,
    /// Auth key stored directly in config (not recommended).
    #[serde(default)]
    pub auth_key: Option<String>,
    /// API host override, e.g. `https://api-free.deepl.com`.
    #[serde(default)]
    pub server_url: Option<String>,
    /// Source language code (DeepL form, e.g. `JA`).
    #[serde(default)]
    pub source_lang: Option<String>,
    /// Target language code (DeepL form, e.g. `EN-US`).
    #[serde(default)]
    pub target_lang: Option<String>,
}

impl DeepLConfig {
    pub fn auth_key_env(&self) -> &str {
        self.auth_key_env.as_deref().unwrap_or(DEFAULT_AUTH_KEY_ENV)
    }

    /// Gets the auth key, preferring the environment variable over config file.
    pub fn get_auth_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.auth_key_env())
            && !key.is_empty()
        {
            return Some(key);
        }
        self.auth_key.clone().filter(|key| !key.is_empty())
    }
}

/// Settings in the `[output]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/deepl-tmx/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub deepl: DeepLConfig,
    #[serde(default)]
    pub output: OutputSection,
}

/// Configuration after merging CLI options, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub auth_key: String,
    pub server_url: String,
    pub languages: LanguagePair,
    pub output_dir: PathBuf,
}

impl ResolvedConfig {
    /// The auth key with everything but its last four characters hidden.
    pub fn masked_auth_key(&self) -> String {
        let chars: Vec<char> = self.auth_key.chars().collect();
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub output_dir: Option<PathBuf>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns an error if no auth key is available or a language code is not
/// supported.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let deepl = &config_file.deepl;

    let auth_key = deepl.get_auth_key().ok_or_else(|| {
        let env_var = deepl.auth_key_env();
        anyhow::anyhow!(
            "Missing DeepL auth key\n\n\
             Set the {env_var} environment variable or add it to a .env file:\n  \
             {env_var}=\"your-auth-key\"\n\n\
             Or set auth_key in ~/.config/deepl-tmx/config.toml"
        )
    })?;

    let server_url = deepl
        .server_url
        .clone()
        .unwrap_or_else(|| default_server_url(&auth_key).to_string());

    let defaults = LanguagePair::default();
    let languages = LanguagePair {
        source: deepl.source_lang.clone().unwrap_or(defaults.source),
        target: deepl.target_lang.clone().unwrap_or(defaults.target),
    };
    validate_language_pair(&languages)?;

    let output_dir = options
        .output_dir
        .clone()
        .or_else(|| config_file.output.dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    Ok(ResolvedConfig {
        auth_key,
        server_url,
        languages,
        output_dir,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/deepl-tmx/config.toml`
    /// or `~/.config/deepl-tmx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Loads the config file; a missing file yields defaults, a broken one an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
