//! The vitals simulator: periodic tick engine over an in-memory roster.
//!
//! [`VitalsSimulator`] owns the roster, perturbs every patient's latest
//! sample each tick, and then publishes two updates: the full roster to
//! patient subscribers, followed by the current critical-alert set to
//! alert subscribers. Ticks are fully synchronous — all patients are
//! updated before anyone is notified — and the timer task only drives
//! [`tick`](VitalsSimulator::tick), which tests can call directly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;
use wardlight_core::alert::sort_newest_first;
use wardlight_core::{Alert, AlertEngine, AlertSeverity, Patient};
use wardlight_events::{AlertUpdate, FeedError, RosterUpdate, SubscriberSet, SubscriptionId};

use crate::walk;

/// Interval between simulation ticks unless overridden.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(60);

/// The simulator's view of alert logic: given a roster snapshot, return
/// the current critical alerts.
pub trait AlertSource: Send + Sync {
    fn critical_alerts(&self, patients: &[Patient]) -> Vec<Alert>;
}

/// Lenient sweep over the roster: per-patient failures (empty vitals)
/// are logged and skipped rather than failing the whole pass.
impl AlertSource for AlertEngine {
    fn critical_alerts(&self, patients: &[Patient]) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for patient in patients {
            match self.alerts_for(patient) {
                Ok(list) => alerts.extend(
                    list.into_iter()
                        .filter(|alert| alert.severity == AlertSeverity::Critical),
                ),
                Err(e) => {
                    tracing::warn!(patient_id = patient.id, error = %e, "Skipping patient in alert sweep");
                }
            }
        }

        sort_newest_first(&mut alerts);
        alerts
    }
}

struct SimInner {
    patients: RwLock<Vec<Patient>>,
    rng: Mutex<StdRng>,
    roster_feed: SubscriberSet<RosterUpdate>,
    alert_feed: SubscriberSet<AlertUpdate>,
    alerts: Box<dyn AlertSource>,
    tick_period: Duration,
    /// `Some` while the timer task is running.
    timer: Mutex<Option<CancellationToken>>,
    ticks: AtomicU64,
}

/// Cloneable handle to the simulation engine.
pub struct VitalsSimulator {
    inner: Arc<SimInner>,
}

impl Clone for VitalsSimulator {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl VitalsSimulator {
    /// Create a simulator with the default tick period and OS-entropy
    /// randomness.
    pub fn new(alerts: impl AlertSource + 'static) -> Self {
        Self::with_options(alerts, DEFAULT_TICK_PERIOD, None)
    }

    /// Create a simulator with an explicit tick period and, optionally, a
    /// fixed RNG seed for reproducible runs.
    pub fn with_options(
        alerts: impl AlertSource + 'static,
        tick_period: Duration,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            inner: Arc::new(SimInner {
                patients: RwLock::new(Vec::new()),
                rng: Mutex::new(rng),
                roster_feed: SubscriberSet::new(),
                alert_feed: SubscriberSet::new(),
                alerts: Box::new(alerts),
                tick_period,
                timer: Mutex::new(None),
                ticks: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the internal roster wholesale. No merging: the previous
    /// roster is discarded and the simulator owns the new one.
    pub fn set_patients(&self, patients: Vec<Patient>) {
        *self.inner.patients.write().expect("roster lock poisoned") = patients;
    }

    /// Cloned snapshot of the current roster.
    pub fn patients(&self) -> Vec<Patient> {
        self.inner
            .patients
            .read()
            .expect("roster lock poisoned")
            .clone()
    }

    /// Subscribe to roster updates (full roster snapshot per tick).
    pub fn subscribe(
        &self,
    ) -> Result<(SubscriptionId, UnboundedReceiver<RosterUpdate>), FeedError> {
        self.inner.roster_feed.subscribe()
    }

    /// Remove a roster subscription. Returns `false` for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.roster_feed.unsubscribe(id)
    }

    /// Subscribe to critical-alert updates (current alert set per tick).
    pub fn subscribe_alerts(
        &self,
    ) -> Result<(SubscriptionId, UnboundedReceiver<AlertUpdate>), FeedError> {
        self.inner.alert_feed.subscribe()
    }

    /// Remove an alert subscription. Returns `false` for unknown ids.
    pub fn unsubscribe_alerts(&self, id: SubscriptionId) -> bool {
        self.inner.alert_feed.unsubscribe(id)
    }

    /// Whether the periodic timer is active.
    pub fn is_running(&self) -> bool {
        self.inner
            .timer
            .lock()
            .expect("timer lock poisoned")
            .is_some()
    }

    /// Start the periodic tick timer. No-op if already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut timer = self.inner.timer.lock().expect("timer lock poisoned");
        if timer.is_some() {
            tracing::debug!("Simulator already running, start is a no-op");
            return;
        }

        let cancel = CancellationToken::new();
        *timer = Some(cancel.clone());
        spawn_timer(&self.inner, cancel);

        tracing::info!(
            period_secs = self.inner.tick_period.as_secs(),
            "Vitals simulation started"
        );
    }

    /// Stop scheduling future ticks. No-op if idle. An in-flight tick is
    /// never interrupted (ticks are synchronous and fast).
    pub fn stop(&self) {
        let mut timer = self.inner.timer.lock().expect("timer lock poisoned");
        match timer.take() {
            Some(cancel) => {
                cancel.cancel();
                tracing::info!("Vitals simulation stopped");
            }
            None => {
                tracing::debug!("Simulator already idle, stop is a no-op");
            }
        }
    }

    /// Run one simulation step synchronously.
    ///
    /// Every patient is updated before any subscriber is notified; the
    /// roster feed is published before the alert feed.
    pub fn tick(&self) {
        self.inner.tick();
    }
}

impl SimInner {
    fn tick(&self) {
        let snapshot = {
            let mut patients = self.patients.write().expect("roster lock poisoned");
            let mut rng = self.rng.lock().expect("rng lock poisoned");

            for patient in patients.iter_mut() {
                match patient.vitals.latest_sample() {
                    Some(previous) => {
                        let sample = walk::next_sample(&mut *rng, &previous, patient.age);
                        patient.vitals.record(sample);
                    }
                    None => {
                        tracing::warn!(
                            patient_id = patient.id,
                            "Skipping patient with empty vitals history"
                        );
                    }
                }
            }

            patients.clone()
        };

        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            tick,
            patient_count = snapshot.len(),
            "Vitals tick complete"
        );

        self.roster_feed.publish(RosterUpdate::new(snapshot.clone()));

        let alerts = self.alerts.critical_alerts(&snapshot);
        self.alert_feed.publish(AlertUpdate::new(alerts));
    }
}

/// Drive ticks on a fixed interval until cancelled or the simulator is
/// dropped (the task only holds a weak reference).
fn spawn_timer(inner: &Arc<SimInner>, cancel: CancellationToken) {
    let weak: Weak<SimInner> = Arc::downgrade(inner);
    let period = inner.tick_period;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first interval tick completes immediately; consume it so a
        // full period elapses before the first update.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Simulator timer cancelled");
                    break;
                }
                _ = interval.tick() => {
                    match weak.upgrade() {
                        Some(inner) => inner.tick(),
                        None => break,
                    }
                }
            }
        }
    });
}
