use std::{env, path::PathBuf};

use tokio::time::Duration;

use crate::notify::DEFAULT_POLL_INTERVAL;

const DATA_DIR_ENV: &str = "DAYPLAN_DATA_DIR";
const DEBUG_ENV: &str = "DAYPLAN_DEBUG";
const PREFERENCES_FILE: &str = "user_preferences.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub preferences_file: String,
    pub poll_interval: Duration,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            preferences_file: PREFERENCES_FILE.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let debug = lookup(DEBUG_ENV)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            data_dir,
            debug,
            ..defaults
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(&self.preferences_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.preferences_path(), PathBuf::from("./user_preferences.json"));
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert!(!config.debug);
    }

    #[test]
    fn reads_data_dir_and_debug_flag() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_DIR_ENV, "/tmp/dayplan"),
            (DEBUG_ENV, "TRUE"),
        ]));
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/dayplan/user_preferences.json")
        );
        assert!(config.debug);
    }

    #[test]
    fn blank_data_dir_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[(DATA_DIR_ENV, "  ")]));
        assert_eq!(config.data_dir, PathBuf::from("."));
    }
}
