//! Configuration loading, discovery and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FerryError, FerryResult};

use super::types::Config;

/// Name of the project-level config file
pub const CONFIG_FILE: &str = "ferry.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FerryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FerryError::InvalidConfig {
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

    Ok((with_env_overrides(config), warnings))
}

/// Find the config file: explicit path, ./ferry.toml, then the user config
/// directory. Explicit paths must exist; the fallbacks are optional.
pub fn discover(explicit: Option<&Path>) -> FerryResult<(Config, Vec<ConfigWarning>, PathBuf)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(FerryError::ConfigNotFound {
                message: format!("{} does not exist", path.display()),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((config, warnings, path.to_path_buf()));
    }

    let project_config = PathBuf::from(CONFIG_FILE);
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((config, warnings, project_config));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((config, warnings, user_config));
        }
    }

    Err(FerryError::ConfigNotFound {
        message: format!(
            "no {} in the current directory and no user config - run from the project root or pass --config",
            CONFIG_FILE
        ),
    })
}

/// User-level config location (`<config dir>/ferry/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ferry/config.toml"))
}

/// Apply environment variable overrides (FERRY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Override application, parameterized for tests
fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(host) = var("FERRY_HOST") {
        if !host.trim().is_empty() {
            config.target.host = Some(host);
        }
    }

    if let Some(root) = var("FERRY_ROOT") {
        if !root.trim().is_empty() {
            config.target.root = Some(root);
        }
    }

    // FERRY_SERVICES (comma-separated) replaces the restart set
    if let Some(services) = var("FERRY_SERVICES") {
        let parsed: Vec<String> = services
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.services.restart = parsed;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "target",
        "host",
        "root",
        "sync",
        "source",
        "exclude",
        "ownership",
        "path",
        "user",
        "group",
        "mode",
        "services",
        "restart",
        "compose_file",
        "output",
        "color",
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
