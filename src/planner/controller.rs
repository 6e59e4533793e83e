use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    advice::{motivational_quote, with_advice},
    catalog::{decompose_goal, Goal, GoalKind, GoalRegistry, TaskCatalog, TaskHistory},
    error::PlannerError,
    mood::{stress_for_label, MoodClassifier},
    schedule::{generate_daily_schedule, RoutineTemplate, Schedule, ScheduleEntry, ScheduleStore},
    settings::{PreferencesStore, ProductiveHours, StressLevel, UserPreferences},
    slot::TimeSlot,
};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// Single owner of all mutable planning state.
///
/// Every mutation runs on the caller's thread. The schedule itself lives in
/// a shared [`ScheduleStore`] that background readers hold on to; each
/// regeneration publishes a complete day in one swap.
///
/// Manual entries (`add_task`, `adjust`) are kept as overrides and laid over
/// every regenerated day, so they survive later regenerations until
/// [`Planner::clear_overrides`] is called.
pub struct Planner<R: Rng = StdRng> {
    catalog: TaskCatalog,
    goals: GoalRegistry,
    history: TaskHistory,
    preferences: PreferencesStore,
    template: RoutineTemplate,
    store: Arc<ScheduleStore>,
    overrides: Schedule,
    rng: R,
}

impl Planner<StdRng> {
    pub fn new(preferences: PreferencesStore) -> Self {
        Self::with_rng(preferences, StdRng::from_entropy())
    }
}

impl<R: Rng> Planner<R> {
    pub fn with_rng(preferences: PreferencesStore, rng: R) -> Self {
        Self {
            catalog: TaskCatalog::new(),
            goals: GoalRegistry::new(),
            history: TaskHistory::new(),
            preferences,
            template: RoutineTemplate::default(),
            store: Arc::new(ScheduleStore::new()),
            overrides: Schedule::new(),
            rng,
        }
    }

    pub fn with_catalog(mut self, catalog: TaskCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Shared handle for readers such as the notification scheduler.
    pub fn store(&self) -> Arc<ScheduleStore> {
        Arc::clone(&self.store)
    }

    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn goals(&self) -> &GoalRegistry {
        &self.goals
    }

    pub fn history(&self) -> &TaskHistory {
        &self.history
    }

    pub fn preferences(&self) -> UserPreferences {
        self.preferences.get()
    }

    pub fn sorted_view(&self) -> Vec<ScheduleEntry> {
        self.store.sorted_view()
    }

    /// Rebuilds the whole day and publishes it. Filler picks are redrawn on
    /// every call; routine entries and overrides are not.
    pub fn regenerate(&mut self) -> usize {
        let preferences = self.preferences.get();
        let mut schedule = generate_daily_schedule(
            &self.template,
            &self.catalog,
            &preferences,
            &self.history,
            &mut self.rng,
        );
        for entry in self.overrides.entries() {
            schedule.set(entry.slot, entry.task.clone());
        }

        let count = schedule.len();
        self.store.replace(schedule);
        log_info!(
            "Regenerated schedule: {} entries ({} overrides, stress {})",
            count,
            self.overrides.len(),
            preferences.stress_level.as_str()
        );
        count
    }

    /// Writes `task` at `slot` as given, without advice.
    pub fn add_task(&mut self, slot: TimeSlot, task: impl Into<String>) {
        let task = task.into();
        self.overrides.set(slot, task.clone());
        self.store.set(slot, task);
    }

    /// Appends a free-text task to the daily pool for future fills.
    pub fn add_daily_task(&mut self, name: impl Into<String>) {
        let name = name.into();
        log_debug!("Added daily task '{}'", name);
        self.catalog.push_task(name);
    }

    /// Registers a goal and appends its breakdown to the daily pool.
    /// `deadline` is stored as given.
    pub fn add_goal(
        &mut self,
        kind: GoalKind,
        name: impl Into<String>,
        deadline: NaiveDate,
    ) -> usize {
        let goal = Goal {
            name: name.into(),
            kind,
            deadline,
        };
        self.goals.insert(&goal);
        let added = decompose_goal(&mut self.catalog, &goal.name, kind);
        log_info!(
            "Added {} '{}' due {}: {} tasks queued for the next regeneration",
            kind.as_str(),
            goal.name,
            goal.deadline,
            added
        );
        added
    }

    /// Replaces the task at an existing slot with `"<task> - <advice>"` and
    /// regenerates the day around it.
    pub fn adjust(&mut self, slot: TimeSlot, new_task: &str) -> Result<String, PlannerError> {
        if !self.store.contains(&slot) {
            return Err(PlannerError::SlotNotFound(slot));
        }

        let composed = with_advice(new_task, &mut self.rng);
        self.overrides.set(slot, composed.clone());
        self.regenerate();
        Ok(composed)
    }

    pub fn clear_overrides(&mut self) {
        self.overrides = Schedule::new();
    }

    /// Maps a sentiment label to a stress level, persists it and
    /// regenerates so new fills reflect it. The schedule is regenerated
    /// even if saving fails.
    pub fn apply_mood_classification(&mut self, label: &str) -> Result<StressLevel, PlannerError> {
        let level = stress_for_label(label);
        let persisted = self.preferences.set_stress_level(level);
        if let Err(err) = &persisted {
            log_warn!("Stress level {} not saved: {err:#}", level.as_str());
        }
        log_info!("Mood '{}' logged as {} stress", label.trim(), level.as_str());

        self.regenerate();
        persisted?;
        Ok(level)
    }

    /// Classifies `raw_text` and applies the result. The text itself is
    /// not kept.
    pub fn log_mood(
        &mut self,
        raw_text: &str,
        classifier: &dyn MoodClassifier,
    ) -> Result<StressLevel, PlannerError> {
        if raw_text.trim().is_empty() {
            return Err(PlannerError::EmptyMoodText);
        }
        let label = classifier
            .classify(raw_text)
            .map_err(PlannerError::Classification)?;
        self.apply_mood_classification(&label)
    }

    pub fn record_completion(&mut self, task: impl Into<String>) {
        self.history.record_completion(task, Local::now());
    }

    pub fn record_achievement(&mut self, description: impl Into<String>) {
        self.history.record_achievement(description, Local::now());
    }

    pub fn set_preferred_tasks(&mut self, tasks: Vec<String>) -> Result<(), PlannerError> {
        self.preferences.set_preferred_tasks(tasks)?;
        Ok(())
    }

    pub fn add_preferred_task(&mut self, task: impl Into<String>) -> Result<(), PlannerError> {
        self.preferences.add_preferred_task(task.into())?;
        Ok(())
    }

    pub fn set_productive_hours(&mut self, hours: ProductiveHours) -> Result<(), PlannerError> {
        self.preferences.set_productive_hours(hours)?;
        Ok(())
    }

    pub fn motivational_quote(&mut self) -> &'static str {
        motivational_quote(&mut self.rng)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
