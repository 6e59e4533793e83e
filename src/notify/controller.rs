use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Local;
use log::info;
use tokio::{task::JoinHandle, time::Duration};
use tokio_util::sync::CancellationToken;

use crate::schedule::ScheduleStore;

use super::{loop_worker::reminder_loop, reminder::ReminderSink, Clock};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Owns the background reminder task. The task only ever reads the store.
pub struct NotificationScheduler {
    store: Arc<ScheduleStore>,
    sink: Arc<dyn ReminderSink>,
    clock: Clock,
    poll_interval: Duration,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl NotificationScheduler {
    pub fn new(store: Arc<ScheduleStore>, sink: Arc<dyn ReminderSink>) -> Self {
        Self {
            store,
            sink,
            clock: Arc::new(|| Local::now().time()),
            poll_interval: DEFAULT_POLL_INTERVAL,
            handle: None,
            cancel_token: None,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            bail!("notification scheduler already running");
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(reminder_loop(
            Arc::clone(&self.store),
            Arc::clone(&self.sink),
            Arc::clone(&self.clock),
            self.poll_interval,
            cancel_token.clone(),
        ));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("reminder loop task failed to join")?;
            info!("Notification scheduler stopped");
        }
        Ok(())
    }
}
