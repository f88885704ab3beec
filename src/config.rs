// Configuration loading and parsing (config/courtside.toml).
//
// Everything has a sensible default; the config file is optional and may be
// partial. Only the values that exist in the file override the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the JSON snapshot files. When omitted, the platform
    /// data directory is used.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Render tick interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 33 }
    }
}

/// Artificial pauses, in milliseconds, mimicking a remote backend. All of
/// them may be set to zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub mutation_ms: u64,
    pub initial_load_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 500,
            mutation_ms: 300,
            initial_load_ms: 800,
        }
    }
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.latency.login_ms)
    }

    pub fn mutation_delay(&self) -> Duration {
        Duration::from_millis(self.latency.mutation_ms)
    }

    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.latency.initial_load_ms)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/courtside.toml` under `base_dir`. A
/// missing file yields the defaults; a present but malformed file is an
/// error.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("courtside.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.ui.tick_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.ui.tick_ms > 1000 {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_ms".into(),
            message: format!("must be at most 1000, got {}", config.ui.tick_ms),
        });
    }

    // An accidental extra zero in any of these makes the app feel hung.
    let latencies = [
        ("latency.login_ms", config.latency.login_ms),
        ("latency.mutation_ms", config.latency.mutation_ms),
        ("latency.initial_load_ms", config.latency.initial_load_ms),
    ];
    for (field, value) in latencies {
        if value > 10_000 {
            return Err(ConfigError::ValidationError {
                field: field.into(),
                message: format!("must be at most 10000, got {value}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tmp_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        tmp
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = std::env::temp_dir().join("courtside_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let config = load_config_from(&tmp).expect("defaults should load");
        assert_eq!(config.ui.tick_ms, 33);
        assert_eq!(config.latency.login_ms, 500);
        assert_eq!(config.latency.mutation_ms, 300);
        assert_eq!(config.latency.initial_load_ms, 800);
        assert!(config.storage.data_dir.is_none());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn partial_file_overrides_only_what_it_names() {
        let tmp = tmp_dir("courtside_config_partial");
        fs::write(
            tmp.join("config/courtside.toml"),
            "[latency]\nlogin_ms = 0\n",
        )
        .unwrap();

        let config = load_config_from(&tmp).expect("partial config should load");
        assert_eq!(config.latency.login_ms, 0);
        assert_eq!(config.latency.mutation_ms, 300);
        assert_eq!(config.ui.tick_ms, 33);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn full_file_parses() {
        let tmp = tmp_dir("courtside_config_full");
        fs::write(
            tmp.join("config/courtside.toml"),
            r#"
[storage]
data_dir = "/tmp/courtside-data"

[ui]
tick_ms = 50

[latency]
login_ms = 100
mutation_ms = 50
initial_load_ms = 0
"#,
        )
        .unwrap();

        let config = load_config_from(&tmp).expect("full config should load");
        assert_eq!(
            config.storage.data_dir.as_deref(),
            Some(Path::new("/tmp/courtside-data"))
        );
        assert_eq!(config.ui.tick_ms, 50);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.login_delay(), Duration::from_millis(100));
        assert_eq!(config.initial_load_delay(), Duration::ZERO);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_tick() {
        let tmp = tmp_dir("courtside_config_zero_tick");
        fs::write(tmp.join("config/courtside.toml"), "[ui]\ntick_ms = 0\n").unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "ui.tick_ms");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_excessive_initial_load() {
        let tmp = tmp_dir("courtside_config_slow_load");
        fs::write(
            tmp.join("config/courtside.toml"),
            "[latency]\ninitial_load_ms = 60000\n",
        )
        .unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "latency.initial_load_ms");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_excessive_login_and_mutation_delays() {
        for (name, body) in [
            ("courtside_config_slow_login", "[latency]\nlogin_ms = 99999\n"),
            (
                "courtside_config_slow_mutation",
                "[latency]\nmutation_ms = 99999\n",
            ),
        ] {
            let tmp = tmp_dir(name);
            fs::write(tmp.join("config/courtside.toml"), body).unwrap();

            let err = load_config_from(&tmp).unwrap_err();
            match &err {
                ConfigError::ValidationError { field, .. } => {
                    assert!(field.starts_with("latency."), "{field}");
                }
                other => panic!("expected ValidationError, got: {other}"),
            }

            let _ = fs::remove_dir_all(&tmp);
        }
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = tmp_dir("courtside_config_invalid");
        fs::write(
            tmp.join("config/courtside.toml"),
            "this is not valid [[[ toml",
        )
        .unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("courtside.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
