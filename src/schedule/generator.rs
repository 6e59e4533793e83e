use rand::Rng;

use crate::{
    catalog::{TaskCatalog, TaskHistory},
    selection::select_task,
    settings::UserPreferences,
    slot::{minute_of_day, TimeSlot},
};

use super::{store::Schedule, template::RoutineTemplate};

/// Builds a complete day: routine entries first, then one entry per hourly
/// fill slot that the routine did not already claim.
///
/// The result is meant to be published in one swap; nothing here touches the
/// live store.
pub fn generate_daily_schedule<R: Rng + ?Sized>(
    template: &RoutineTemplate,
    catalog: &TaskCatalog,
    preferences: &UserPreferences,
    history: &TaskHistory,
    rng: &mut R,
) -> Schedule {
    let mut schedule = Schedule::new();

    for entry in template.entries() {
        schedule.set(entry.slot, entry.task.clone());
    }

    for slot in fill_slots(template) {
        if schedule.contains(&slot) {
            continue;
        }
        let task = fill_task(template, catalog, preferences, history, slot, rng);
        schedule.set(slot, task);
    }

    schedule
}

/// Hourly point slots from `fill_start` up to, not including, `fill_end`.
pub fn fill_slots(template: &RoutineTemplate) -> Vec<TimeSlot> {
    let start = minute_of_day(template.fill_start);
    let end = minute_of_day(template.fill_end);
    let step = template.fill_step_minutes.max(1) as usize;

    (start..end)
        .step_by(step)
        .filter_map(TimeSlot::from_minute_of_day)
        .collect()
}

fn fill_task<R: Rng + ?Sized>(
    template: &RoutineTemplate,
    catalog: &TaskCatalog,
    preferences: &UserPreferences,
    history: &TaskHistory,
    slot: TimeSlot,
    rng: &mut R,
) -> String {
    let hour = slot.hour();
    if hour < template.morning_cutoff_hour {
        return template.morning_task.clone();
    }
    if hour >= template.sleep_from_hour {
        return format!("{} - {}", catalog.sleep_label(), template.sleep_note);
    }

    // An empty eligible pool only happens with a hand-built catalog.
    select_task(catalog, preferences, history, rng).unwrap_or_else(|| {
        catalog
            .breaks()
            .first()
            .cloned()
            .unwrap_or_else(|| catalog.sleep_label().to_string())
    })
}
