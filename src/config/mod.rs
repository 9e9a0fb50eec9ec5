mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_AUTH_KEY_ENV, DEFAULT_OUTPUT_DIR, DeepLConfig,
    OutputSection, ResolveOptions, ResolvedConfig, resolve_config,
};
