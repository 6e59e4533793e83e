use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveTime};
use log::info;
use serde::Serialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{schedule::Schedule, slot::TimeSlot};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub slot: TimeSlot,
    pub task: String,
    pub fired_at: DateTime<Local>,
}

/// Where reminders end up. Called off the polling task, so a slow or
/// failing display cannot hold up the next check.
pub trait ReminderSink: Send + Sync + 'static {
    fn deliver(&self, reminder: &Reminder) -> Result<()>;
}

pub struct LogReminderSink;

impl ReminderSink for LogReminderSink {
    fn deliver(&self, reminder: &Reminder) -> Result<()> {
        info!("Task reminder at {}: It's time for: {}", reminder.slot, reminder.task);
        Ok(())
    }
}

/// Forwards reminders to the presentation layer.
pub struct ChannelReminderSink {
    tx: mpsc::UnboundedSender<Reminder>,
}

impl ChannelReminderSink {
    pub fn new(tx: mpsc::UnboundedSender<Reminder>) -> Self {
        Self { tx }
    }
}

impl ReminderSink for ChannelReminderSink {
    fn deliver(&self, reminder: &Reminder) -> Result<()> {
        self.tx
            .send(reminder.clone())
            .map_err(|_| anyhow!("reminder receiver dropped"))
    }
}

/// Reminder for the entry keyed exactly at `now`'s minute, if any.
pub fn due_reminder(
    schedule: &Schedule,
    now: NaiveTime,
    fired_at: DateTime<Local>,
) -> Option<Reminder> {
    let slot = TimeSlot::at(now);
    schedule.get(&slot).map(|task| Reminder {
        id: Uuid::new_v4().to_string(),
        slot,
        task: task.to_string(),
        fired_at,
    })
}
