use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub slot: TimeSlot,
    pub task: String,
}

/// One day's slot → task mapping, kept in insertion order.
///
/// Writing an existing slot replaces its task in place, so the entry keeps
/// its original position for tie-breaking in [`Schedule::sorted_view`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: TimeSlot, task: impl Into<String>) {
        let task = task.into();
        match self.entries.iter_mut().find(|entry| entry.slot == slot) {
            Some(entry) => entry.task = task,
            None => self.entries.push(ScheduleEntry { slot, task }),
        }
    }

    pub fn get(&self, slot: &TimeSlot) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.slot == *slot)
            .map(|entry| entry.task.as_str())
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.get(slot).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Entries ordered by time of day. Equal start times keep insertion order.
    pub fn sorted_view(&self) -> Vec<ScheduleEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| entry.slot.minute_of_day());
        sorted
    }
}

/// The published schedule.
///
/// Readers take an `Arc` snapshot and never see a half-built day: every
/// write builds a complete [`Schedule`] and swaps the pointer under a short
/// write lock.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    current: RwLock<Arc<Schedule>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<Schedule> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, schedule: Schedule) {
        let next = Arc::new(schedule);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Insert-or-replace one slot, published as a fresh copy.
    pub fn set(&self, slot: TimeSlot, task: impl Into<String>) {
        let mut next = (*self.snapshot()).clone();
        next.set(slot, task);
        self.replace(next);
    }

    pub fn get(&self, slot: &TimeSlot) -> Option<String> {
        self.snapshot().get(slot).map(str::to_string)
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.snapshot().contains(slot)
    }

    pub fn clear(&self) {
        self.replace(Schedule::new());
    }

    pub fn sorted_view(&self) -> Vec<ScheduleEntry> {
        self.snapshot().sorted_view()
    }
}
