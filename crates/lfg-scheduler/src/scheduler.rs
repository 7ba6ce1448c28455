//! Admission scheduler — the control loop that forms parties and binds
//! them to free instances.
//!
//! One scheduler task drives admission: reserve a party's players, claim
//! the lowest free instance, spawn a runner. When players exist but every
//! instance is busy, the reservation is refunded and the loop parks on
//! the pool's release signal; when players are insufficient it re-polls
//! on a bounded interval and consults the [`TerminationDetector`].
//! Shutdown is one-way: in-flight parties always run to completion and
//! are drained before [`AdmissionScheduler::run`] returns.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use lfg_core::{ClearTimeRange, InstanceId};
use lfg_runtime::{InstancePool, run_party};

use crate::roster::RoleRoster;
use crate::termination::TerminationDetector;

/// Re-poll interval while the queue cannot form a party.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Callback invoked after each admission with the claimed instance id.
///
/// The daemon uses this to print a status dump as each party enters.
pub type AdmissionCallback = Arc<dyn Fn(InstanceId) -> BoxFuture + Send + Sync>;

type BoxFuture = std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>>;

pub struct AdmissionScheduler {
    roster: Arc<RoleRoster>,
    pool: Arc<InstancePool>,
    clear_range: ClearTimeRange,
    poll_interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    on_admission: Option<AdmissionCallback>,
}

impl AdmissionScheduler {
    pub fn new(
        roster: Arc<RoleRoster>,
        pool: Arc<InstancePool>,
        clear_range: ClearTimeRange,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            roster,
            pool,
            clear_range,
            poll_interval: DEFAULT_POLL_INTERVAL,
            shutdown_tx,
            shutdown_rx,
            on_admission: None,
        }
    }

    /// Override the scarcity re-poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set a callback invoked after each admission.
    pub fn with_admission_callback(mut self, callback: AdmissionCallback) -> Self {
        self.on_admission = Some(callback);
        self
    }

    /// Observe the one-way shutdown flag.
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Stop admitting new parties. In-flight parties still complete.
    ///
    /// The flag is monotonic: once set it is never cleared.
    pub fn request_shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    fn shutting_down(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Drive admission until no further progress is possible, then drain
    /// every in-flight party.
    pub async fn run(&self) {
        let detector = TerminationDetector::new(self.roster.clone(), self.pool.clone());
        let mut runners: Vec<JoinHandle<()>> = Vec::new();

        info!(instances = self.pool.capacity(), "admission scheduler started");

        while !self.shutting_down() {
            if self.roster.try_reserve().await {
                match self.pool.occupy_free().await {
                    Some(id) => {
                        runners.push(tokio::spawn(run_party(
                            self.pool.clone(),
                            id,
                            self.clear_range,
                        )));
                        debug!(instance = id, "party admitted");
                        if let Some(callback) = &self.on_admission {
                            callback(id).await;
                        }
                    }
                    None => {
                        // Every instance is busy: give the players back
                        // and park until a release.
                        self.roster.refund().await;
                        self.wait_for_release().await;
                    }
                }
            } else {
                tokio::time::sleep(self.poll_interval).await;
                if detector.check().await {
                    info!("no further parties can form, shutting down");
                    self.request_shutdown();
                }
            }
        }

        debug!(in_flight = runners.len(), "draining party runners");
        for handle in runners {
            let _ = handle.await;
        }
        info!("admission scheduler terminated");
    }

    /// Park until an instance is released or shutdown is requested.
    async fn wait_for_release(&self) {
        let mut shutdown = self.shutdown_rx.clone();
        tokio::select! {
            _ = self.pool.wait_for_release() => {}
            _ = shutdown.changed() => {}
        }
    }
}
