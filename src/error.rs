use crate::slot::TimeSlot;

/// Failures surfaced by planner operations.
#[derive(thiserror::Error, Debug)]
pub enum PlannerError {
    /// No entry at that slot. The schedule is left unchanged.
    #[error("Time slot '{0}' not found in the schedule")]
    SlotNotFound(TimeSlot),

    /// Text that is not a valid slot label.
    #[error("Invalid time slot '{0}': expected H:MM AM/PM or a 'start - end' range")]
    InvalidTimeSlot(String),

    /// Blank mood text, rejected before classification.
    #[error("Mood text is empty")]
    EmptyMoodText,

    /// The mood classifier returned an error. Stress level is untouched.
    #[error("Mood classification failed: {0:#}")]
    Classification(anyhow::Error),

    /// Preferences could not be saved. The in-memory change still applies.
    #[error("Failed to persist preferences: {0:#}")]
    Persistence(#[from] anyhow::Error),
}
