use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedTask {
    pub task: String,
    pub completed_at: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub description: String,
    pub achieved_at: DateTime<Local>,
}

/// Append-only completion and achievement logs.
///
/// Selection only asks whether any completion has been recorded; an empty
/// log keeps the selector in its cold-start mode.
#[derive(Debug, Clone, Default)]
pub struct TaskHistory {
    completions: Vec<CompletedTask>,
    achievements: Vec<Achievement>,
}

impl TaskHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cold_start(&self) -> bool {
        self.completions.is_empty()
    }

    pub fn record_completion(&mut self, task: impl Into<String>, completed_at: DateTime<Local>) {
        self.completions.push(CompletedTask {
            task: task.into(),
            completed_at,
        });
    }

    pub fn record_achievement(
        &mut self,
        description: impl Into<String>,
        achieved_at: DateTime<Local>,
    ) {
        self.achievements.push(Achievement {
            description: description.into(),
            achieved_at,
        });
    }

    pub fn completions(&self) -> &[CompletedTask] {
        &self.completions
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievements_do_not_end_cold_start() {
        let mut history = TaskHistory::new();
        assert!(history.is_cold_start());

        history.record_achievement("First week streak", Local::now());
        assert!(history.is_cold_start());

        history.record_completion("Reading", Local::now());
        assert!(!history.is_cold_start());
        assert_eq!(history.completions().len(), 1);
        assert_eq!(history.achievements().len(), 1);
    }
}
