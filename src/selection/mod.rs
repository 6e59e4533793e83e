//! Filler-task selection for slots the routine template leaves open.

use rand::{seq::SliceRandom, Rng};

use crate::{
    advice::with_advice,
    catalog::{TaskCatalog, TaskHistory},
    settings::{StressLevel, UserPreferences},
};

/// Picks one task for an empty slot.
///
/// 1. With no recorded completions, any daily task is returned as-is.
/// 2. Under high stress only calming tasks from the daily pool are eligible.
/// 3. A preferred task that happens to be eligible is returned as-is.
/// 4. Otherwise an eligible task is returned with advice appended.
///
/// Returns `None` only when the eligible pool is empty, which the default
/// catalog rules out.
pub fn select_task<R: Rng + ?Sized>(
    catalog: &TaskCatalog,
    preferences: &UserPreferences,
    history: &TaskHistory,
    rng: &mut R,
) -> Option<String> {
    if history.is_cold_start() {
        return catalog.daily_tasks().choose(rng).cloned();
    }

    let eligible: Vec<&String> = match preferences.stress_level {
        StressLevel::High => catalog
            .daily_tasks()
            .iter()
            .filter(|task| catalog.is_calming(task))
            .collect(),
        StressLevel::Low | StressLevel::Normal => catalog.daily_tasks().iter().collect(),
    };

    if let Some(preferred) = preferences.preferred_tasks.choose(rng) {
        if eligible.iter().any(|task| *task == preferred) {
            return Some(preferred.clone());
        }
    }

    eligible
        .choose(rng)
        .map(|task| with_advice(task, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::all_advice_for;
    use chrono::Local;
    use rand::{rngs::StdRng, SeedableRng};

    fn warm_history() -> TaskHistory {
        let mut history = TaskHistory::new();
        history.record_completion("Exercise", Local::now());
        history
    }

    fn prefs(stress_level: StressLevel, preferred: &[&str]) -> UserPreferences {
        UserPreferences {
            stress_level,
            preferred_tasks: preferred.iter().map(|s| s.to_string()).collect(),
            ..UserPreferences::default()
        }
    }

    fn split_advice(picked: &str) -> (&str, &str) {
        picked.split_once(" - ").expect("advice suffix")
    }

    #[test]
    fn cold_start_returns_bare_pool_task() {
        let catalog = TaskCatalog::with_daily_tasks(["Exercise", "Relax"]);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let picked = select_task(
                &catalog,
                &prefs(StressLevel::Normal, &[]),
                &TaskHistory::new(),
                &mut rng,
            )
            .unwrap();
            assert!(picked == "Exercise" || picked == "Relax", "{picked}");
        }
    }

    #[test]
    fn cold_start_ignores_stress() {
        let catalog = TaskCatalog::with_daily_tasks(["Exercise"]);
        let mut rng = StdRng::seed_from_u64(5);
        let picked = select_task(
            &catalog,
            &prefs(StressLevel::High, &[]),
            &TaskHistory::new(),
            &mut rng,
        );
        assert_eq!(picked.as_deref(), Some("Exercise"));
    }

    #[test]
    fn high_stress_only_picks_calming_tasks_with_advice() {
        let catalog = TaskCatalog::with_daily_tasks(["Exercise", "Relax", "Meditation"]);
        let history = warm_history();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            let picked =
                select_task(&catalog, &prefs(StressLevel::High, &[]), &history, &mut rng).unwrap();
            let (task, advice) = split_advice(&picked);
            assert!(task == "Relax" || task == "Meditation", "{picked}");
            assert!(all_advice_for(task).contains(&advice.to_string()));
        }
    }

    #[test]
    fn high_stress_includes_break_labels_present_in_pool() {
        let catalog = TaskCatalog::with_daily_tasks(["Project Work", "Short Break"]);
        let history = warm_history();
        let mut rng = StdRng::seed_from_u64(8);
        let picked =
            select_task(&catalog, &prefs(StressLevel::High, &[]), &history, &mut rng).unwrap();
        assert!(picked.starts_with("Short Break - "), "{picked}");
    }

    #[test]
    fn high_stress_with_no_calming_tasks_yields_none() {
        let catalog = TaskCatalog::with_daily_tasks(["Project Work"]);
        let mut rng = StdRng::seed_from_u64(2);
        let picked = select_task(
            &catalog,
            &prefs(StressLevel::High, &[]),
            &warm_history(),
            &mut rng,
        );
        assert!(picked.is_none());
    }

    #[test]
    fn eligible_preference_short_circuits_advice() {
        let catalog = TaskCatalog::with_daily_tasks(["Exercise", "Reading"]);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let picked = select_task(
                &catalog,
                &prefs(StressLevel::Normal, &["Reading"]),
                &warm_history(),
                &mut rng,
            );
            assert_eq!(picked.as_deref(), Some("Reading"));
        }
    }

    #[test]
    fn ineligible_preference_falls_back_to_advice() {
        let catalog = TaskCatalog::with_daily_tasks(["Exercise", "Relax"]);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let picked = select_task(
                &catalog,
                &prefs(StressLevel::High, &["Exercise"]),
                &warm_history(),
                &mut rng,
            )
            .unwrap();
            assert!(picked.starts_with("Relax - "), "{picked}");
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let catalog = TaskCatalog::new();
        let history = warm_history();
        let preferences = prefs(StressLevel::Normal, &[]);
        let a = select_task(&catalog, &preferences, &history, &mut StdRng::seed_from_u64(77));
        let b = select_task(&catalog, &preferences, &history, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
