use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock, RwLockReadGuard},
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    #[default]
    Normal,
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Normal => "normal",
            StressLevel::High => "high",
        }
    }
}

/// Advisory only: selection does not read it yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductiveHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for ProductiveHours {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    #[serde(default)]
    pub productive_hours: ProductiveHours,
    #[serde(default)]
    pub preferred_tasks: Vec<String>,
    #[serde(default)]
    pub stress_level: StressLevel,
}

/// Preferences loaded once at startup and written back after every change.
///
/// A missing file means first run; a file that does not parse is treated the
/// same way. Stores built with [`PreferencesStore::in_memory`] never touch
/// the filesystem.
fn load_preferences(path: &Path) -> Result<UserPreferences> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read preferences from {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse preferences from {}", path.display()))
}

pub struct PreferencesStore {
    path: Option<PathBuf>,
    data: RwLock<UserPreferences>,
}

impl PreferencesStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            load_preferences(&path).unwrap_or_else(|err| {
                warn!("Ignoring unreadable preferences at {}: {err:#}", path.display());
                UserPreferences::default()
            })
        } else {
            UserPreferences::default()
        };

        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    pub fn in_memory(preferences: UserPreferences) -> Self {
        Self {
            path: None,
            data: RwLock::new(preferences),
        }
    }

    pub fn get(&self) -> UserPreferences {
        self.read().clone()
    }

    pub fn stress_level(&self) -> StressLevel {
        self.read().stress_level
    }

    pub fn set_stress_level(&self, level: StressLevel) -> Result<()> {
        self.update(|prefs| prefs.stress_level = level)
    }

    pub fn set_preferred_tasks(&self, tasks: Vec<String>) -> Result<()> {
        self.update(|prefs| prefs.preferred_tasks = tasks)
    }

    pub fn add_preferred_task(&self, task: String) -> Result<()> {
        self.update(|prefs| prefs.preferred_tasks.push(task))
    }

    pub fn set_productive_hours(&self, hours: ProductiveHours) -> Result<()> {
        self.update(|prefs| prefs.productive_hours = hours)
    }

    fn read(&self) -> RwLockReadGuard<'_, UserPreferences> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, apply: impl FnOnce(&mut UserPreferences)) -> Result<()> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut guard);
        self.persist(&guard)
    }

    fn persist(&self, data: &UserPreferences) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}
