use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Fixed-interval background refresh.
///
/// The first tick runs immediately. Ticks never overlap: a slow tick delays
/// the next one instead of queueing a burst.
pub struct Poller;

impl Poller {
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> PollHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!("Poller '{}' started ({:?})", name, period);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => break,
                    _ = interval.tick() => tick().await,
                }
            }

            debug!("Poller '{}' stopped", name);
        });

        PollHandle {
            name,
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Owns a running poller; dropping it stops the loop
pub struct PollHandle {
    name: &'static str,
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the loop and wait for the in-flight tick to finish
    pub async fn cancel(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            let _ = self.shutdown_tx.send(());
        }
    }
}
