//! # Configuration
//!
//! Centralizes the widget's timing with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.people-picker/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub query_delay_ms: Option<u64>,
    pub visibility_delay_ms: Option<u64>,
    pub blur_grace_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUERY_DELAY_MS: u64 = 1000;
/// 100ms after the query settles, so the list never flashes stale results.
pub const DEFAULT_VISIBILITY_DELAY_MS: u64 = 1100;
/// Long enough for a click on a suggestion to land before the list hides.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;
/// Minimum gap between the query and visibility debounces.
pub const MIN_VISIBILITY_SKEW_MS: u64 = 100;
/// Upper bound on any configured delay. Larger values are capped.
pub const MAX_DELAY_MS: u64 = 60_000;

pub const QUERY_DELAY_ENV: &str = "PEOPLE_PICKER_QUERY_DELAY_MS";
pub const VISIBILITY_DELAY_ENV: &str = "PEOPLE_PICKER_VISIBILITY_DELAY_MS";
pub const BLUR_GRACE_ENV: &str = "PEOPLE_PICKER_BLUR_GRACE_MS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// The widget's three delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub query_delay: Duration,
    pub visibility_delay: Duration,
    pub blur_grace: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            query_delay: Duration::from_millis(DEFAULT_QUERY_DELAY_MS),
            visibility_delay: Duration::from_millis(DEFAULT_VISIBILITY_DELAY_MS),
            blur_grace: Duration::from_millis(DEFAULT_BLUR_GRACE_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub timing: Timing,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.people-picker/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".people-picker").join("config.toml"))
}

/// Load config from `~/.people-picker/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PickerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PickerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PickerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PickerConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<PickerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PickerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# people-picker configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [timing]
# query_delay_ms = 1000        # Or PEOPLE_PICKER_QUERY_DELAY_MS
# visibility_delay_ms = 1100   # Kept at least 100ms above query_delay_ms
# blur_grace_ms = 200          # Or PEOPLE_PICKER_BLUR_GRACE_MS
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &PickerConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &PickerConfig, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let query_ms = capped(
        "query_delay_ms",
        env_millis(&env, QUERY_DELAY_ENV)
            .or(config.timing.query_delay_ms)
            .unwrap_or(DEFAULT_QUERY_DELAY_MS),
    );

    let mut visibility_ms = capped(
        "visibility_delay_ms",
        env_millis(&env, VISIBILITY_DELAY_ENV)
            .or(config.timing.visibility_delay_ms)
            .unwrap_or(DEFAULT_VISIBILITY_DELAY_MS),
    );

    // Visibility must settle strictly after the query.
    let min_visibility_ms = query_ms.saturating_add(MIN_VISIBILITY_SKEW_MS);
    if visibility_ms < min_visibility_ms {
        warn!(
            "visibility_delay_ms ({}) must be at least {}ms above query_delay_ms ({}); using {}",
            visibility_ms, MIN_VISIBILITY_SKEW_MS, query_ms, min_visibility_ms
        );
        visibility_ms = min_visibility_ms;
    }

    let blur_ms = capped(
        "blur_grace_ms",
        env_millis(&env, BLUR_GRACE_ENV)
            .or(config.timing.blur_grace_ms)
            .unwrap_or(DEFAULT_BLUR_GRACE_MS),
    );

    ResolvedConfig {
        timing: Timing {
            query_delay: Duration::from_millis(query_ms),
            visibility_delay: Duration::from_millis(visibility_ms),
            blur_grace: Duration::from_millis(blur_ms),
        },
    }
}

fn capped(name: &str, ms: u64) -> u64 {
    if ms > MAX_DELAY_MS {
        warn!("{} ({}) exceeds {}ms; capping", name, ms, MAX_DELAY_MS);
        return MAX_DELAY_MS;
    }
    ms
}

fn env_millis<F>(env: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PickerConfig::default();
        assert!(config.timing.query_delay_ms.is_none());
        assert!(config.timing.blur_grace_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PickerConfig::default(), no_env);
        assert_eq!(resolved.timing, Timing::default());
        assert_eq!(resolved.timing.query_delay, Duration::from_millis(1000));
        assert_eq!(resolved.timing.visibility_delay, Duration::from_millis(1100));
        assert_eq!(resolved.timing.blur_grace, Duration::from_millis(200));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PickerConfig {
            timing: TimingConfig {
                query_delay_ms: Some(300),
                visibility_delay_ms: Some(450),
                blur_grace_ms: Some(150),
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.timing.query_delay, Duration::from_millis(300));
        assert_eq!(resolved.timing.visibility_delay, Duration::from_millis(450));
        assert_eq!(resolved.timing.blur_grace, Duration::from_millis(150));
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = PickerConfig {
            timing: TimingConfig {
                query_delay_ms: Some(300),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, |key| {
            (key == QUERY_DELAY_ENV).then(|| "500".to_string())
        });
        assert_eq!(resolved.timing.query_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_env_is_ignored() {
        let resolved = resolve_with_env(&PickerConfig::default(), |key| {
            (key == BLUR_GRACE_ENV).then(|| "soon".to_string())
        });
        assert_eq!(resolved.timing.blur_grace, Duration::from_millis(200));
    }

    #[test]
    fn test_visibility_is_raised_above_query() {
        let config = PickerConfig {
            timing: TimingConfig {
                query_delay_ms: Some(2000),
                visibility_delay_ms: Some(1500),
                blur_grace_ms: None,
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.timing.visibility_delay, Duration::from_millis(2100));
    }

    #[test]
    fn test_huge_query_delay_is_capped_and_keeps_skew() {
        let resolved = resolve_with_env(&PickerConfig::default(), |key| {
            (key == QUERY_DELAY_ENV).then(|| u64::MAX.to_string())
        });
        assert_eq!(resolved.timing.query_delay, Duration::from_millis(MAX_DELAY_MS));
        assert_eq!(
            resolved.timing.visibility_delay,
            Duration::from_millis(MAX_DELAY_MS + MIN_VISIBILITY_SKEW_MS)
        );
        assert!(resolved.timing.visibility_delay > resolved.timing.query_delay);
    }

    #[test]
    fn test_huge_file_delays_are_capped() {
        let config = PickerConfig {
            timing: TimingConfig {
                query_delay_ms: Some(u64::MAX - 1),
                visibility_delay_ms: Some(u64::MAX),
                blur_grace_ms: Some(u64::MAX),
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(
            resolved.timing.visibility_delay,
            Duration::from_millis(MAX_DELAY_MS + MIN_VISIBILITY_SKEW_MS)
        );
        assert_eq!(resolved.timing.blur_grace, Duration::from_millis(MAX_DELAY_MS));
    }

    #[test]
    fn test_raised_query_drags_default_visibility() {
        let resolved = resolve_with_env(&PickerConfig::default(), |key| {
            (key == QUERY_DELAY_ENV).then(|| "1500".to_string())
        });
        assert_eq!(resolved.timing.visibility_delay, Duration::from_millis(1600));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[timing]
blur_grace_ms = 250
"#;
        let config: PickerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.blur_grace_ms, Some(250));
        assert!(config.timing.query_delay_ms.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: PickerConfig = toml::from_str("").unwrap();
        assert!(config.timing.visibility_delay_ms.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "people-picker-bad-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[timing\nquery_delay_ms = ").unwrap();
        let result = load_config_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("people-picker-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
