use std::sync::Arc;

use chrono::Local;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::schedule::ScheduleStore;

use super::{
    reminder::{due_reminder, Reminder, ReminderSink},
    Clock,
};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info, log_warn};

/// Polls the published schedule once per `poll_interval` until cancelled.
///
/// Missed ticks are skipped, not replayed: a slot that passed while the
/// process was suspended never fires. Two polls landing on the same minute
/// both fire.
pub async fn reminder_loop(
    store: Arc<ScheduleStore>,
    sink: Arc<dyn ReminderSink>,
    clock: Clock,
    poll_interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log_info!(
        "reminder loop started (poll every {}s)",
        poll_interval.as_secs()
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let schedule = store.snapshot();
                if let Some(reminder) = due_reminder(&schedule, clock(), Local::now()) {
                    dispatch(Arc::clone(&sink), reminder);
                }
            }
            _ = cancel_token.cancelled() => {
                log_info!("reminder loop shutting down");
                break;
            }
        }
    }
}

fn dispatch(sink: Arc<dyn ReminderSink>, reminder: Reminder) {
    let slot = reminder.slot;
    let delivery = tokio::task::spawn_blocking(move || sink.deliver(&reminder));

    tokio::spawn(async move {
        match delivery.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => log_warn!("reminder for {} not delivered: {err:#}", slot),
            Err(join_err) => log_error!("reminder delivery for {} panicked: {join_err}", slot),
        }
    });
}
