use std::{env, path::PathBuf, time::Duration};

/// Environment variable overriding where settings are stored.
pub const DATA_DIR_ENV: &str = "SNEAKER_CALC_DATA_DIR";
/// Environment variable overriding the input persistence debounce (milliseconds).
pub const DEBOUNCE_ENV: &str = "SNEAKER_CALC_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means the platform config directory.
    pub data_dir: Option<PathBuf>,
    pub debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let debounce = match lookup(DEBOUNCE_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    tracing::warn!("ignoring {DEBOUNCE_ENV}={raw:?}: {err}");
                    DEFAULT_DEBOUNCE
                }
            },
            None => DEFAULT_DEBOUNCE,
        };

        Self { data_dir, debounce }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[(DATA_DIR_ENV, "/tmp/sneakers"), (DEBOUNCE_ENV, "50")]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/sneakers")));
        assert_eq!(config.debounce, Duration::from_millis(50));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[(DATA_DIR_ENV, "  "), (DEBOUNCE_ENV, "soon")]);
        assert_eq!(config, AppConfig::default());
    }
}
