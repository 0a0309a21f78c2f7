//! Periodic weather refresh for native hosts
//!
//! Runs one refresh cycle right away and then one per interval on the tokio
//! runtime. Cycles run inline in the timer task and never overlap: a tick
//! that fell due while the previous cycle was still running is dropped.

use std::{sync::Arc, time::Duration};

use application::{DEFAULT_REFRESH_INTERVAL, WeatherCardView, WeatherWidgetService};
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval},
};
use tracing::{debug, info, warn};

/// Task name for the weather refresh
pub const WEATHER_REFRESH_TASK: &str = "weather_refresh";

/// Handle to a running refresh task
///
/// Dropping the handle stops the task.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the task
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the task has stopped
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the periodic weather refresh
///
/// Must be called from within a tokio runtime. A zero `period` falls back
/// to [`DEFAULT_REFRESH_INTERVAL`].
pub fn spawn_weather_refresh<V>(
    service: Arc<WeatherWidgetService>,
    view: Arc<V>,
    period: Duration,
) -> RefreshHandle
where
    V: WeatherCardView + Send + Sync + ?Sized + 'static,
{
    let period = if period.is_zero() {
        warn!(
            task = WEATHER_REFRESH_TASK,
            "Zero refresh interval, using default"
        );
        DEFAULT_REFRESH_INTERVAL
    } else {
        period
    };

    info!(
        task = WEATHER_REFRESH_TASK,
        period_secs = period.as_secs(),
        "Starting weather refresh"
    );

    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut busy_until: Option<Instant> = None;

        loop {
            let due = ticker.tick().await;
            if busy_until.is_some_and(|end| due < end) {
                debug!(
                    task = WEATHER_REFRESH_TASK,
                    "Tick fell due during the previous cycle, skipping"
                );
                continue;
            }

            let report = service.refresh_all(view.as_ref()).await;
            busy_until = Some(Instant::now());
            debug!(
                task = WEATHER_REFRESH_TASK,
                updated = report.updated_count(),
                "Weather refresh tick done"
            );
        }
    });

    RefreshHandle { task }
}
