use serde::{Deserialize, Serialize};

pub const MEDITATION: &str = "Meditation";
pub const RELAX: &str = "Relax";

const DEFAULT_DAILY_TASKS: [&str; 9] = [
    "Exercise",
    "Meal Prep",
    RELAX,
    MEDITATION,
    "Grocery Shopping",
    "House Chores",
    "Reading",
    "Creative Writing",
    "Project Work",
];

const DEFAULT_BREAKS: [&str; 2] = ["Short Break", "Long Break"];

const DEFAULT_SLEEP_LABEL: &str = "Sleep";

const DEFAULT_STUDY_PATHS: [&str; 8] = [
    "Advanced Math",
    "Physics",
    "Machine Learning",
    "Network Security",
    "Cryptography",
    "Software Engineering",
    "Data Analysis",
    "Quantum Computing",
];

/// Candidate task names the selector draws filler tasks from.
///
/// The daily pool only ever grows: goal breakdowns and free-text additions
/// append to it, duplicates included. Because nothing is removed, the default
/// calming tasks ("Relax", "Meditation") stay available for high-stress
/// selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalog {
    daily_tasks: Vec<String>,
    breaks: Vec<String>,
    sleep_label: String,
    study_paths: Vec<String>,
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self {
            daily_tasks: DEFAULT_DAILY_TASKS.iter().map(|s| s.to_string()).collect(),
            breaks: DEFAULT_BREAKS.iter().map(|s| s.to_string()).collect(),
            sleep_label: DEFAULT_SLEEP_LABEL.to_string(),
            study_paths: DEFAULT_STUDY_PATHS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with a custom daily pool and the default break and sleep labels.
    pub fn with_daily_tasks<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            daily_tasks: tasks.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn daily_tasks(&self) -> &[String] {
        &self.daily_tasks
    }

    pub fn breaks(&self) -> &[String] {
        &self.breaks
    }

    pub fn sleep_label(&self) -> &str {
        &self.sleep_label
    }

    pub fn study_paths(&self) -> &[String] {
        &self.study_paths
    }

    pub fn push_task(&mut self, task: impl Into<String>) {
        self.daily_tasks.push(task.into());
    }

    pub fn extend_tasks<I: IntoIterator<Item = String>>(&mut self, tasks: I) {
        self.daily_tasks.extend(tasks);
    }

    /// Whether `task` counts as restful for high-stress selection.
    pub fn is_calming(&self, task: &str) -> bool {
        task == MEDITATION || task == RELAX || self.breaks.iter().any(|b| b == task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_keeps_calming_tasks() {
        let catalog = TaskCatalog::new();
        assert!(catalog.daily_tasks().iter().any(|t| t == RELAX));
        assert!(catalog.daily_tasks().iter().any(|t| t == MEDITATION));
        assert_eq!(catalog.sleep_label(), "Sleep");
        assert_eq!(catalog.breaks(), ["Short Break", "Long Break"]);
    }

    #[test]
    fn default_study_paths_are_listed() {
        let catalog = TaskCatalog::new();
        assert_eq!(catalog.study_paths().len(), DEFAULT_STUDY_PATHS.len());
        assert_eq!(catalog.study_paths().len(), 8);
    }

    #[test]
    fn push_does_not_deduplicate() {
        let mut catalog = TaskCatalog::with_daily_tasks(["Exercise"]);
        catalog.push_task("Exercise");
        assert_eq!(catalog.daily_tasks(), ["Exercise", "Exercise"]);
    }

    #[test]
    fn calming_covers_breaks_and_rest() {
        let catalog = TaskCatalog::new();
        assert!(catalog.is_calming("Long Break"));
        assert!(catalog.is_calming("Relax"));
        assert!(!catalog.is_calming("Exercise"));
    }
}
