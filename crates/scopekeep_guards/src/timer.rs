//! # Scope Timer
//!
//! Measures the lifetime of a scope. The measurement is reported when the
//! guard is dropped, so every exit path is covered: normal fall-through, early
//! `return`, `?` propagation and unwinding.
//!
//! ```text
//! {
//!     let _outer = ScopeTimer::start("outer");   ── starts
//!     {
//!         let _inner = ScopeTimer::start("inner");
//!     }                                          ── inner reported
//! }                                              ── outer reported
//! ```

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::config::{TimeUnit, TimerConfig};

/// One finished measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingRecord {
    /// Description passed to the timer.
    pub description: String,
    /// Time between start and release.
    pub elapsed: Duration,
}

/// Creates a channel for collecting [`TimingRecord`]s.
#[must_use]
pub fn timing_channel() -> (Sender<TimingRecord>, Receiver<TimingRecord>) {
    crossbeam_channel::unbounded()
}

/// A guard that reports how long it was alive.
///
/// Not `Clone`: a measurement has exactly one end.
///
/// # Example
///
/// ```rust,ignore
/// let (tx, rx) = timing_channel();
/// {
///     let _timer = ScopeTimer::start("load").with_sink(tx);
///     expensive_operation();
/// } // "load took 0.1 s" is logged and a record is sent
/// let record = rx.recv()?;
/// ```
#[derive(Debug)]
pub struct ScopeTimer {
    description: String,
    start: Instant,
    config: TimerConfig,
    sink: Option<Sender<TimingRecord>>,
}

impl ScopeTimer {
    /// Starts a timer with the default configuration.
    #[must_use = "the timer measures until it is dropped"]
    pub fn start(description: impl Into<String>) -> Self {
        Self::with_config(description, &TimerConfig::default())
    }

    /// Starts a timer with explicit settings.
    #[must_use = "the timer measures until it is dropped"]
    pub fn with_config(description: impl Into<String>, config: &TimerConfig) -> Self {
        let description = description.into();
        if config.enabled && config.log_start {
            tracing::info!("[TIMER] Starting: {}", description);
        }

        Self {
            description,
            start: Instant::now(),
            config: config.clone(),
            sink: None,
        }
    }

    /// Publishes the record to `sink` when the timer is released.
    #[must_use = "the timer measures until it is dropped"]
    pub fn with_sink(mut self, sink: Sender<TimingRecord>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Time since the timer started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The description given at start.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The unit durations are reported in.
    #[inline]
    pub fn unit(&self) -> TimeUnit {
        self.config.unit
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();

        if self.config.enabled {
            tracing::info!(
                "[TIMER] {} took {:.6} {}",
                self.description,
                self.config.unit.value(elapsed),
                self.config.unit.label()
            );
        }

        if let Some(sink) = self.sink.take() {
            // A dropped receiver only means nobody is collecting.
            let _ = sink.send(TimingRecord {
                description: std::mem::take(&mut self.description),
                elapsed,
            });
        }
    }
}
