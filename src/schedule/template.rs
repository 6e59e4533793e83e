use chrono::NaiveTime;

use crate::slot::TimeSlot;

type RawEntry = ((u32, u32), (u32, u32), &'static str);

const MORNING_ROUTINE: &[RawEntry] = &[
    ((5, 45), (6, 0), "Wake up & Hydrate"),
    ((6, 0), (7, 0), "Exercise (Physical/Stretching)"),
    ((7, 0), (8, 0), "Breakfast"),
];

const PLANNING: &[RawEntry] = &[((8, 0), (9, 0), "Plan the day and journal thoughts")];

const BUSINESS_WORK: &[RawEntry] = &[(
    (9, 0),
    (12, 30),
    "Focused work on business strategy, research, or other business-related tasks",
)];

const MIDDAY_BREAK: &[RawEntry] = &[((12, 30), (13, 30), "Lunch and relaxation")];

const READING: &[RawEntry] = &[(
    (13, 30),
    (15, 0),
    "Reading for personal growth or skill development",
)];

const LEARNING_WORK: &[RawEntry] = &[
    ((15, 0), (17, 30), "Learning courses or skills development"),
    ((17, 45), (20, 0), "Focused work on projects or assignments"),
];

const EVENING_ROUTINE: &[RawEntry] = &[
    ((20, 0), (21, 0), "Networking or community engagement"),
    ((21, 0), (22, 0), "Dinner & Relaxation"),
    ((22, 0), (23, 0), "Review the day and plan for tomorrow"),
];

const BLOCKS: &[(&str, &[RawEntry])] = &[
    ("MORNING ROUTINE", MORNING_ROUTINE),
    ("PLANNING AND JOURNALING", PLANNING),
    ("WORK SLOT: BUSINESS", BUSINESS_WORK),
    ("MIDDAY BREAK", MIDDAY_BREAK),
    ("PERSONAL DEVELOPMENT: READING", READING),
    ("WORK SLOT: LEARNING", LEARNING_WORK),
    ("EVENING ROUTINE", EVENING_ROUTINE),
];

#[derive(Debug, Clone)]
pub struct RoutineEntry {
    pub slot: TimeSlot,
    pub task: String,
}

#[derive(Debug, Clone)]
pub struct RoutineBlock {
    pub name: String,
    pub entries: Vec<RoutineEntry>,
}

/// Fixed routine blocks plus the rules for the hourly fill pass.
#[derive(Debug, Clone)]
pub struct RoutineTemplate {
    pub blocks: Vec<RoutineBlock>,

    /// Fill pass walks `[fill_start, fill_end)` in `fill_step_minutes` steps
    pub fill_start: NaiveTime,
    pub fill_end: NaiveTime,
    pub fill_step_minutes: u32,

    /// Hours before this get `morning_task`
    pub morning_cutoff_hour: u32,
    pub morning_task: String,

    /// Hours from this on get the sleep label plus `sleep_note`
    pub sleep_from_hour: u32,
    pub sleep_note: String,
}

impl Default for RoutineTemplate {
    fn default() -> Self {
        let blocks = BLOCKS
            .iter()
            .map(|(name, entries)| RoutineBlock {
                name: name.to_string(),
                entries: entries
                    .iter()
                    .map(|&(start, end, task)| RoutineEntry {
                        slot: TimeSlot::between(clock(start), clock(end)),
                        task: task.to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            blocks,
            fill_start: clock((5, 45)),
            fill_end: clock((23, 0)),
            fill_step_minutes: 60,
            morning_cutoff_hour: 8,
            morning_task: "Morning Exercise - Start your day with some physical activity!".into(),
            sleep_from_hour: 21,
            sleep_note: "Time to rest and recharge for tomorrow.".into(),
        }
    }
}

impl RoutineTemplate {
    pub fn entries(&self) -> impl Iterator<Item = &RoutineEntry> {
        self.blocks.iter().flat_map(|block| block.entries.iter())
    }

    pub fn entry_count(&self) -> usize {
        self.blocks.iter().map(|block| block.entries.len()).sum()
    }
}

// Only called on the literal tables above.
fn clock((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("routine table holds valid clock times")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_has_twelve_entries_in_seven_blocks() {
        let template = RoutineTemplate::default();
        assert_eq!(template.blocks.len(), 7);
        assert_eq!(template.entry_count(), 12);
        assert_eq!(template.blocks[0].name, "MORNING ROUTINE");
    }

    #[test]
    fn entries_render_as_ranges() {
        let template = RoutineTemplate::default();
        let first = template.entries().next().unwrap();
        assert_eq!(first.slot.to_string(), "5:45 AM - 6:00 AM");
        assert_eq!(first.task, "Wake up & Hydrate");

        let last = template.entries().last().unwrap();
        assert_eq!(last.slot.to_string(), "10:00 PM - 11:00 PM");
    }
}
