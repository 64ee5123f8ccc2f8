// ABOUTME: Active workout session with a ticking elapsed-time counter and a single-flight save
// ABOUTME: Timer runs as a tokio task publishing seconds through a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Session
//!
//! A session tracks how long the user has been training. [`WorkoutSession::start`]
//! spawns a task that republishes the elapsed whole seconds every tick; the
//! value is measured from a monotonic start instant, so late ticks never drift.
//!
//! Saving snapshots the routine into a [`WorkoutLog`]. Only one save can be in
//! flight: a second request while the first is pending is ignored, which stops
//! a double tap from storing the workout twice.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use metriq_core::errors::AppResult;
use metriq_core::models::{WorkoutLog, WorkoutRoutine};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::storage::WorkoutStore;

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The workout was stored under this id
    Saved(i64),
    /// Another save was already in flight; nothing was stored
    Ignored,
}

struct RunningTimer {
    started: Instant,
    active: Arc<AtomicBool>,
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl RunningTimer {
    fn stop(self) -> u64 {
        self.active.store(false, Ordering::Release);
        if let Err(e) = self.shutdown_tx.try_send(()) {
            debug!(error = ?e, "Session timer shutdown signal not delivered");
        }
        self.task.abort();
        self.started.elapsed().as_secs()
    }
}

/// Releases the in-flight flag when the save completes or fails
struct SaveGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One in-progress workout
pub struct WorkoutSession {
    tick_interval: Duration,
    elapsed_tx: Arc<watch::Sender<u64>>,
    timer: Mutex<Option<RunningTimer>>,
    saving: AtomicBool,
}

impl WorkoutSession {
    /// Create a stopped session
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            tick_interval: config.tick_interval,
            elapsed_tx: Arc::new(watch::channel(0).0),
            timer: Mutex::new(None),
            saving: AtomicBool::new(false),
        }
    }

    /// Start the timer; returns `false` when it was already running
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> bool {
        let mut timer = self.timer_slot();
        if timer.is_some() {
            debug!("Session timer already running");
            return false;
        }

        let started = Instant::now();
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let active = Arc::new(AtomicBool::new(true));
        let task_active = Arc::clone(&active);
        let elapsed_tx = Arc::clone(&self.elapsed_tx);
        let tick_interval = self.tick_interval;
        elapsed_tx.send_replace(0);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        // A tick racing a stop must not overwrite the final value
                        elapsed_tx.send_if_modified(|elapsed| {
                            if !task_active.load(Ordering::Acquire) {
                                return false;
                            }
                            *elapsed = started.elapsed().as_secs();
                            true
                        });
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Session timer received shutdown signal");
                        break;
                    }
                }
            }
        });

        *timer = Some(RunningTimer {
            started,
            active,
            shutdown_tx,
            task,
        });
        info!("Workout session started");
        true
    }

    /// Stop the timer and keep the final elapsed time
    ///
    /// Returns the elapsed seconds; a stopped session returns its last value.
    pub fn finish(&self) -> u64 {
        let timer = self.timer_slot().take();
        match timer {
            Some(timer) => {
                let elapsed = timer.stop();
                self.elapsed_tx.send_replace(elapsed);
                elapsed
            }
            None => self.elapsed(),
        }
    }

    /// Stop the timer and reset elapsed time to zero
    pub fn cancel(&self) {
        let timer = self.timer_slot().take();
        if let Some(timer) = timer {
            timer.stop();
        }
        self.elapsed_tx.send_replace(0);
        info!("Workout session cancelled");
    }

    /// Whether the timer is running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer_slot().is_some()
    }

    /// Last published elapsed seconds
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        *self.elapsed_tx.borrow()
    }

    /// Receive every elapsed-time update
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed_tx.subscribe()
    }

    /// Whether a save is in flight
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// Stop the timer and store the routine as a completed workout
    ///
    /// A call made while another save is pending returns
    /// [`SaveOutcome::Ignored`] without touching the store.
    ///
    /// # Errors
    ///
    /// Returns the store error when the insert fails; the session can then be
    /// saved again
    pub async fn save(
        &self,
        routine: &WorkoutRoutine,
        store: &dyn WorkoutStore,
        now: DateTime<Utc>,
    ) -> AppResult<SaveOutcome> {
        let Some(_guard) = SaveGuard::acquire(&self.saving) else {
            debug!(routine = %routine.name, "Save already in flight, ignoring request");
            return Ok(SaveOutcome::Ignored);
        };

        let duration_secs = self.finish();
        let log = WorkoutLog::from_routine(routine, now, duration_secs);
        let id = store.insert_log(log).await?;

        info!(log_id = id, routine = %routine.name, duration_secs, "Workout saved");
        Ok(SaveOutcome::Saved(id))
    }

    fn timer_slot(&self) -> MutexGuard<'_, Option<RunningTimer>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Drop for WorkoutSession {
    fn drop(&mut self) {
        let timer = self.timer_slot().take();
        if let Some(timer) = timer {
            timer.stop();
        }
    }
}
