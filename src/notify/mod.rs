pub mod controller;
pub mod loop_worker;
pub mod reminder;

use std::sync::Arc;

use chrono::NaiveTime;

pub use controller::{NotificationScheduler, DEFAULT_POLL_INTERVAL};
pub use reminder::{ChannelReminderSink, LogReminderSink, Reminder, ReminderSink};

/// Wall-clock source for the polling loop.
pub type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;
