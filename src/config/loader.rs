//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PicbedError, PicbedResult};

use super::types::{Config, StoreBackend};

/// Checked-in configuration with placeholder values
pub const DEFAULT_CONFIG_FILE: &str = "picbed.toml";
/// Private override, takes precedence over the default file when present
pub const PRIVATE_CONFIG_FILE: &str = "picbed.private.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from (None = built-in defaults)
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PicbedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| PicbedError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PicbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the configuration file for a run.
///
/// The private override wins over the checked-in default; the user config
/// is the last resort.
pub fn config_path(dir: &Path) -> Option<PathBuf> {
    let private = dir.join(PRIVATE_CONFIG_FILE);
    if private.is_file() {
        return Some(private);
    }

    let default = dir.join(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        return Some(default);
    }

    let user = dirs::config_dir()?.join("picbed/config.toml");
    user.is_file().then_some(user)
}

/// Resolve configuration from an explicit file or the lookup order, then
/// apply environment overrides.
pub fn resolve(explicit: Option<&Path>, dir: &Path) -> PicbedResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_path(dir),
    };

    let (config, warnings) = match &path {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config)?,
        warnings,
        path,
    })
}

/// Apply environment variable overrides (PICBED_* prefix)
pub fn with_env_overrides(config: Config) -> PicbedResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> PicbedResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // PICBED_BACKEND
    if let Some(backend) = lookup("PICBED_BACKEND") {
        config.store.backend = backend.parse::<StoreBackend>()?;
    }

    let oss = &mut config.store.aliyun_oss;
    for (var, field) in [
        ("PICBED_OSS_ENDPOINT", &mut oss.endpoint),
        ("PICBED_OSS_ACCESS_KEY_ID", &mut oss.access_key_id),
        ("PICBED_OSS_ACCESS_KEY_SECRET", &mut oss.access_key_secret),
        ("PICBED_OSS_BUCKET", &mut oss.bucket_name),
        ("PICBED_OSS_PREFIX", &mut oss.prefix),
    ] {
        if let Some(value) = lookup(var) {
            *field = value;
        }
    }

    if let Some(dir) = lookup("PICBED_CACHE_DIR") {
        config.migrate.cache_dir = PathBuf::from(dir);
    }
    if let Some(dir) = lookup("PICBED_OUTPUT_DIR") {
        config.migrate.output_dir = PathBuf::from(dir);
    }

    Ok(config)
}

/// First line that assigns `key` or opens a table named `key`
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    let name = if line.starts_with('[') {
        line.trim_start_matches('[').split(']').next()
    } else {
        line.split_once('=').map(|(lhs, _)| lhs)
    };

    name.and_then(|n| n.rsplit('.').next())
        .map(|n| n.trim().trim_matches('"'))
        == Some(key)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "backend",
        "aliyun_oss",
        "endpoint",
        "access_key_id",
        "access_key_secret",
        "bucket_name",
        "prefix",
        "scheme",
        "migrate",
        "cache_dir",
        "output_dir",
        "extension",
        "http",
        "timeout_secs",
        "user_agent",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
