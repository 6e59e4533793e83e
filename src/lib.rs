pub mod advice;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mood;
pub mod notify;
pub mod planner;
pub mod schedule;
pub mod selection;
pub mod settings;
pub mod slot;
mod utils;

use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use log::info;

pub use catalog::GoalKind;
pub use config::AppConfig;
pub use error::PlannerError;
pub use notify::{NotificationScheduler, Reminder, ReminderSink};
pub use planner::Planner;
pub use schedule::{ScheduleEntry, ScheduleStore};
pub use settings::{PreferencesStore, StressLevel, UserPreferences};
pub use slot::TimeSlot;

/// Loads preferences, publishes today's schedule, and keeps the reminder
/// loop running until Ctrl-C.
pub async fn run() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(if config.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    info!("Day planner starting up...");

    fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("failed to create data directory {}", config.data_dir.display())
    })?;
    let preferences = PreferencesStore::new(config.preferences_path())?;

    let mut planner = Planner::new(preferences);
    planner.regenerate();

    println!("{}", planner.motivational_quote());
    for entry in planner.sorted_view() {
        println!("{:<22} {}", entry.slot.to_string(), entry.task);
    }
    println!("Study paths: {}", planner.catalog().study_paths().join(", "));

    let mut notifications =
        NotificationScheduler::new(planner.store(), Arc::new(notify::LogReminderSink))
            .with_poll_interval(config.poll_interval);
    notifications.start()?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("Shutting down");
    notifications.stop().await
}
