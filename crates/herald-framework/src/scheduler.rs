//! Event scheduler.
//!
//! Every registered event gets its own spawned loop with its own
//! [`tokio::time::interval`]: a slow or failing tick delays only that
//! event's next tick and can never starve another event or the command
//! dispatcher. The first tick fires one full interval after
//! [`Scheduler::start`].
//!
//! Tick errors and panics are caught at the loop boundary, logged, and the
//! cadence continues. The loops run until [`SchedulerHandle::shutdown`] cancels
//! them at process shutdown; there is no dynamic add/remove.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use herald_core::{ChatClient, Event};

/// Starts the per-event timer loops.
pub struct Scheduler;

impl Scheduler {
    /// Spawns one independent repeating-timer task per event.
    ///
    /// The returned handle owns the tasks; dropping it detaches them, so
    /// keep it around until shutdown.
    pub fn start(events: Vec<Arc<dyn Event>>, client: Arc<dyn ChatClient>) -> SchedulerHandle {
        let cancel = CancellationToken::new();
        let mut tasks = Vec::with_capacity(events.len());

        for event in events {
            tasks.push(tokio::spawn(run_event_loop(
                event,
                Arc::clone(&client),
                cancel.child_token(),
            )));
        }

        SchedulerHandle { cancel, tasks }
    }
}

async fn run_event_loop(
    event: Arc<dyn Event>,
    client: Arc<dyn ChatClient>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(event.spec().period());
    // A tick that overruns pushes back this event's next tick instead of
    // bursting to catch up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The interval yields immediately once; consume it so the first run
    // lands one full period after start.
    ticker.tick().await;

    debug!(
        event = event.name(),
        interval_minutes = event.spec().interval_minutes().get(),
        "event loop started"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(event = event.name(), "event loop stopped");
                return;
            }
            _ = ticker.tick() => {
                // Catch panics too: a misbehaving handler must not kill its
                // own timer, let alone go unlogged.
                let tick = AssertUnwindSafe(event.run(client.as_ref())).catch_unwind();
                match tick.await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => {
                        warn!(event = event.name(), error = %err, "event tick failed");
                    }
                    Err(payload) => {
                        warn!(
                            event = event.name(),
                            panic = panic_label(payload.as_ref()),
                            "event tick panicked"
                        );
                    }
                }
            }
        }
    }
}

fn panic_label(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

/// Handle to the running event loops.
pub struct SchedulerHandle {
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Returns the number of running event loops.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no events were scheduled.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Cancels every event loop and waits for the tasks to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = futures::future::join_all(self.tasks).await;
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use herald_core::{EventSpec, SendError, SendResult};

    struct NullClient;

    #[async_trait]
    impl ChatClient for NullClient {
        async fn send_text(&self, _channel_id: &str, _text: &str) -> SendResult<()> {
            Ok(())
        }
    }

    struct CountingEvent {
        spec: EventSpec,
        ticks: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CountingEvent {
        fn new(minutes: u32, fail: bool) -> (Arc<dyn Event>, Arc<AtomicUsize>) {
            let ticks = Arc::new(AtomicUsize::new(0));
            let event = Arc::new(Self {
                spec: EventSpec::new(NonZeroU32::new(minutes).unwrap()),
                ticks: Arc::clone(&ticks),
                fail,
            });
            (event, ticks)
        }
    }

    #[async_trait]
    impl Event for CountingEvent {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn spec(&self) -> &EventSpec {
            &self.spec
        }

        async fn run(&self, _client: &dyn ChatClient) -> SendResult<()> {
            self.ticks.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SendError::NotConnected)
            } else {
                Ok(())
            }
        }
    }

    struct PanickingEvent {
        spec: EventSpec,
        ticks: Arc<AtomicUsize>,
    }

    impl PanickingEvent {
        fn new(minutes: u32) -> (Arc<dyn Event>, Arc<AtomicUsize>) {
            let ticks = Arc::new(AtomicUsize::new(0));
            let event = Arc::new(Self {
                spec: EventSpec::new(NonZeroU32::new(minutes).unwrap()),
                ticks: Arc::clone(&ticks),
            });
            (event, ticks)
        }
    }

    #[async_trait]
    impl Event for PanickingEvent {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn spec(&self) -> &EventSpec {
            &self.spec
        }

        async fn run(&self, _client: &dyn ChatClient) -> SendResult<()> {
            self.ticks.fetch_add(1, Ordering::SeqCst);
            panic!("tick blew up");
        }
    }

    fn client() -> Arc<dyn ChatClient> {
        Arc::new(NullClient)
    }

    #[tokio::test(start_paused = true)]
    async fn event_fires_once_per_interval() {
        let (event, ticks) = CountingEvent::new(60, false);
        let handle = Scheduler::start(vec![event], client());

        // Three full hours plus slack; the first tick lands at t + 60 min.
        tokio::time::sleep(Duration::from_secs(3 * 3600 + 30)).await;

        assert_eq!(ticks.load(Ordering::SeqCst), 3);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_before_first_interval() {
        let (event, ticks) = CountingEvent::new(60, false);
        let handle = Scheduler::start(vec![event], client());

        tokio::time::sleep(Duration::from_secs(3599)).await;

        assert_eq!(ticks.load(Ordering::SeqCst), 0);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn failing_event_does_not_disturb_others() {
        let (failing, failing_ticks) = CountingEvent::new(1, true);
        let (healthy, healthy_ticks) = CountingEvent::new(1, false);
        let handle = Scheduler::start(vec![failing, healthy], client());

        tokio::time::sleep(Duration::from_secs(5 * 60 + 30)).await;

        // The failing event keeps its own cadence too: errors are logged,
        // not fatal.
        assert_eq!(failing_ticks.load(Ordering::SeqCst), 5);
        assert_eq!(healthy_ticks.load(Ordering::SeqCst), 5);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn panicking_tick_does_not_cancel_future_ticks() {
        let (panicking, panicking_ticks) = PanickingEvent::new(1);
        let (healthy, healthy_ticks) = CountingEvent::new(1, false);
        let handle = Scheduler::start(vec![panicking, healthy], client());

        tokio::time::sleep(Duration::from_secs(5 * 60 + 30)).await;

        // Every tick panicked and every tick still fired on schedule.
        assert_eq!(panicking_ticks.load(Ordering::SeqCst), 5);
        assert_eq!(healthy_ticks.load(Ordering::SeqCst), 5);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn independent_intervals_keep_independent_cadence() {
        let (fast, fast_ticks) = CountingEvent::new(1, false);
        let (slow, slow_ticks) = CountingEvent::new(3, false);
        let handle = Scheduler::start(vec![fast, slow], client());

        tokio::time::sleep(Duration::from_secs(6 * 60 + 30)).await;

        assert_eq!(fast_ticks.load(Ordering::SeqCst), 6);
        assert_eq!(slow_ticks.load(Ordering::SeqCst), 2);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_future_ticks() {
        let (event, ticks) = CountingEvent::new(1, false);
        let handle = Scheduler::start(vec![event], client());

        tokio::time::sleep(Duration::from_secs(2 * 60 + 30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        handle.shutdown().await;
        tokio::time::sleep(Duration::from_secs(10 * 60)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handle_reports_loop_count() {
        let (a, _) = CountingEvent::new(1, false);
        let (b, _) = CountingEvent::new(2, false);
        let handle = Scheduler::start(vec![a, b], client());
        assert_eq!(handle.len(), 2);
        assert!(!handle.is_empty());
        handle.shutdown().await;
    }
}
