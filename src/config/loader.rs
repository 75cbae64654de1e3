//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use super::types::Config;

/// Why a configuration file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `origin` is only used in warnings and errors
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
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
                file: origin.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A file that exists but cannot be parsed is skipped with a warning.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let project = project_root.map(|root| root.join("paddock.toml"));
    let user = dirs_config_dir().map(|dir| dir.join("paddock/config.toml"));

    for candidate in project.into_iter().chain(user) {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    warn!("{}", warning);
                }
                return with_env_overrides(config);
            }
            Err(err) => warn!(error = %err, "ignoring config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (PADDOCK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // PADDOCK_STORE_PATH
    if let Ok(path) = std::env::var("PADDOCK_STORE_PATH") {
        if !path.trim().is_empty() {
            config.store.path = PathBuf::from(path);
        }
    }

    // PADDOCK_MAX_ATTEMPTS
    if let Ok(raw) = std::env::var("PADDOCK_MAX_ATTEMPTS") {
        match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => config.transactions.max_attempts = n,
            _ => warn!(
                value = %raw,
                "PADDOCK_MAX_ATTEMPTS must be a positive integer; ignored"
            ),
        }
    }

    // PADDOCK_REPAIR_ON_READ
    if let Ok(val) = std::env::var("PADDOCK_REPAIR_ON_READ") {
        config.repair.on_read = parse_flag(&val);
    }

    // PADDOCK_DETACH_ORPHANS
    if let Ok(val) = std::env::var("PADDOCK_DETACH_ORPHANS") {
        config.repair.detach_orphans = parse_flag(&val);
    }

    // PADDOCK_LOG
    if let Ok(filter) = std::env::var("PADDOCK_LOG") {
        if !filter.trim().is_empty() {
            config.logging.filter = filter;
        }
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no" && val != "off"
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "naming",
        "farm_prefix",
        "fence_prefix",
        "transactions",
        "max_attempts",
        "repair",
        "on_read",
        "detach_orphans",
        "store",
        "path",
        "logging",
        "filter",
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

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
