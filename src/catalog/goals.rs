use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pool::TaskCatalog;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GoalKind {
    Target,
    YearlyTask,
    ComplexTask,
}

impl GoalKind {
    /// Number of pool tasks one goal of this kind breaks into.
    pub fn step_count(&self) -> usize {
        match self {
            GoalKind::Target => 5,
            GoalKind::YearlyTask => 12,
            GoalKind::ComplexTask => 4,
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            GoalKind::Target => "Step",
            GoalKind::YearlyTask => "Month",
            GoalKind::ComplexTask => "Week",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Target => "target",
            GoalKind::YearlyTask => "yearly task",
            GoalKind::ComplexTask => "complex task",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub name: String,
    pub kind: GoalKind,
    pub deadline: NaiveDate,
}

/// Goals by kind, keyed by name. Re-adding a name replaces its deadline.
#[derive(Debug, Clone, Default)]
pub struct GoalRegistry {
    targets: HashMap<String, NaiveDate>,
    yearly_tasks: HashMap<String, NaiveDate>,
    complex_tasks: HashMap<String, NaiveDate>,
}

impl GoalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, goal: &Goal) {
        self.registry_mut(goal.kind)
            .insert(goal.name.clone(), goal.deadline);
    }

    pub fn deadline(&self, kind: GoalKind, name: &str) -> Option<NaiveDate> {
        self.registry(kind).get(name).copied()
    }

    pub fn len(&self, kind: GoalKind) -> usize {
        self.registry(kind).len()
    }

    fn registry(&self, kind: GoalKind) -> &HashMap<String, NaiveDate> {
        match kind {
            GoalKind::Target => &self.targets,
            GoalKind::YearlyTask => &self.yearly_tasks,
            GoalKind::ComplexTask => &self.complex_tasks,
        }
    }

    fn registry_mut(&mut self, kind: GoalKind) -> &mut HashMap<String, NaiveDate> {
        match kind {
            GoalKind::Target => &mut self.targets,
            GoalKind::YearlyTask => &mut self.yearly_tasks,
            GoalKind::ComplexTask => &mut self.complex_tasks,
        }
    }
}

/// Derived task names for a goal, e.g. "Launch project - Week 3".
pub fn breakdown(name: &str, kind: GoalKind) -> Vec<String> {
    (1..=kind.step_count())
        .map(|i| format!("{name} - {} {i}", kind.unit_label()))
        .collect()
}

/// Appends the breakdown of `name` to the daily pool and returns how many
/// tasks were added. Nothing is scheduled until the next regeneration.
pub fn decompose_goal(catalog: &mut TaskCatalog, name: &str, kind: GoalKind) -> usize {
    let tasks = breakdown(name, kind);
    let added = tasks.len();
    catalog.extend_tasks(tasks);
    added
}
