//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::migrate::{MigrateOptions, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT_DIR};
use crate::error::PicbedResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

// Re-export StoreBackend from domain layer
pub use crate::domain::value_objects::StoreBackend;

/// Aliyun OSS bucket settings
///
/// Defaults are placeholders; real credentials belong in the private
/// override file or the environment.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliyunOssConfig {
    #[serde(default = "default_oss_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_access_key_id")]
    pub access_key_id: String,

    #[serde(default = "default_access_key_secret")]
    pub access_key_secret: String,

    #[serde(default = "default_bucket_name")]
    pub bucket_name: String,

    /// Prepended verbatim to every uploaded file name
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for AliyunOssConfig {
    fn default() -> Self {
        Self {
            endpoint: default_oss_endpoint(),
            access_key_id: default_access_key_id(),
            access_key_secret: default_access_key_secret(),
            bucket_name: default_bucket_name(),
            prefix: default_prefix(),
            scheme: default_scheme(),
        }
    }
}

impl fmt::Debug for AliyunOssConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliyunOssConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .field("bucket_name", &self.bucket_name)
            .field("prefix", &self.prefix)
            .field("scheme", &self.scheme)
            .finish()
    }
}

fn default_oss_endpoint() -> String {
    "oss-cn-beijing.aliyuncs.com".to_string()
}

fn default_access_key_id() -> String {
    "your_access_key_id".to_string()
}

fn default_access_key_secret() -> String {
    "your_access_key_secret".to_string()
}

fn default_bucket_name() -> String {
    "your_bucket_name".to_string()
}

fn default_prefix() -> String {
    "your_file_path_prefix".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

/// Picture bed selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default)]
    pub aliyun_oss: AliyunOssConfig,
}

/// Where migrations read and write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrateConfig {
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of documents picked up when migrating a folder
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_extension() -> String {
    "md".to_string()
}

/// HTTP client settings shared by picture fetches and bucket requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("picbed/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub migrate: MigrateConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PicbedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PicbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration for a run: explicit file, private override,
    /// checked-in default, user config, then built-in defaults, with
    /// `PICBED_*` environment overrides applied on top.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> PicbedResult<LoadedConfig> {
        loader::resolve(explicit, dir)
    }

    /// Apply environment variable overrides (PICBED_* prefix)
    pub fn with_env_overrides(self) -> PicbedResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Migrate options described by this configuration
    pub fn migrate_options(&self) -> MigrateOptions {
        MigrateOptions::new()
            .with_cache_dir(&self.migrate.cache_dir)
            .with_output_dir(&self.migrate.output_dir)
    }
}
