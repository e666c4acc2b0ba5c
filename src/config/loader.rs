//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::parse_utc_date;
use crate::error::{CapTableError, CapTableResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "captable.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CapTableResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CapTableError::InvalidConfig {
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

/// Explicit file, then `<project_root>/captable.toml`, then the user config,
/// then defaults. Environment overrides apply last.
///
/// An explicit file must exist; the others are skipped when absent.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> CapTableResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(project_root.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.exists()),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CAPTABLE_* prefix).
///
/// Unparseable values are ignored.
pub fn with_env_overrides(mut config: Config) -> Config {
    // CAPTABLE_AS_OF
    if let Ok(raw) = std::env::var("CAPTABLE_AS_OF") {
        if let Ok(date) = parse_utc_date(raw.trim()) {
            config.calc.as_of = Some(date);
        }
    }

    // CAPTABLE_POST_MONEY
    if let Ok(val) = std::env::var("CAPTABLE_POST_MONEY") {
        config.safe.post_money = is_truthy(&val);
    }

    // CAPTABLE_STRICT
    if let Ok(val) = std::env::var("CAPTABLE_STRICT") {
        config.validation.strict = is_truthy(&val);
    }

    // CAPTABLE_LOG
    if let Ok(filter) = std::env::var("CAPTABLE_LOG") {
        if !filter.trim().is_empty() {
            config.log.filter = filter.trim().to_string();
        }
    }

    config
}

fn is_truthy(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

/// `<config_dir>/captable/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("captable").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "calc",
        "as_of",
        "safe",
        "post_money",
        "validation",
        "strict",
        "log",
        "filter",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
