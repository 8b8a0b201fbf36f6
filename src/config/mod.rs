//! Configuration module for picbed
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PICBED_*)
//! 3. `--config` file, else `picbed.private.toml`, else `picbed.toml`,
//!    else the user config (~/.config/picbed/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, config_path, ConfigWarning, LoadedConfig, DEFAULT_CONFIG_FILE,
    PRIVATE_CONFIG_FILE,
};
pub use types::{AliyunOssConfig, Config, HttpConfig, MigrateConfig, StoreBackend, StoreConfig};
