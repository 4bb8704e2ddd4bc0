//! Polling awaiter: sample a resource until conditions hold or a deadline
//! passes.
//!
//! The awaiter never raises on timeout. Timing out is an [`AwaitOutcome`]
//! value carrying the last sample and the unmet conditions, so the core stays
//! reusable outside an assertion context; only configuration mistakes are
//! errors.

use crate::condition::Condition;
use crate::result::{EsperarError, EsperarResult};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default timeout for await operations (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

// =============================================================================
// AWAIT OPTIONS
// =============================================================================

/// Options for await operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for AwaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl AwaitOptions {
    /// Create new await options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Get timeout as Duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval as Duration
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Check the timeout/interval combination. Called by the awaiter before
    /// any sampling; an invalid combination is never retried.
    pub fn validate(&self) -> EsperarResult<()> {
        if self.poll_interval_ms == 0 {
            return Err(EsperarError::Configuration {
                message: "poll interval must be greater than zero".to_string(),
            });
        }
        if self.poll_interval_ms > self.timeout_ms {
            return Err(EsperarError::Configuration {
                message: format!(
                    "poll interval {}ms exceeds timeout {}ms",
                    self.poll_interval_ms, self.timeout_ms
                ),
            });
        }
        Ok(())
    }
}

// =============================================================================
// AWAIT OUTCOME
// =============================================================================

/// Outcome of a polling operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwaitOutcome<S> {
    /// All conditions held on one sample before the deadline
    Satisfied {
        /// Time spent polling
        elapsed: Duration,
        /// Number of samples taken
        polls: u32,
    },
    /// The deadline passed with at least one condition still false
    TimedOut {
        /// Time spent polling
        elapsed: Duration,
        /// Number of samples taken
        polls: u32,
        /// The last sample of the resource's state
        last_observed: S,
        /// Descriptions of the conditions still false on the last sample,
        /// in the order they were supplied
        unmet: Vec<String>,
    },
}

impl<S> AwaitOutcome<S> {
    /// Whether all conditions were satisfied before the deadline
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    /// Number of samples taken
    #[must_use]
    pub const fn polls(&self) -> u32 {
        match self {
            Self::Satisfied { polls, .. } | Self::TimedOut { polls, .. } => *polls,
        }
    }

    /// Time spent polling
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match self {
            Self::Satisfied { elapsed, .. } | Self::TimedOut { elapsed, .. } => *elapsed,
        }
    }
}

// =============================================================================
// POLLING AWAITER
// =============================================================================

/// Awaits a set of conditions over a polled resource.
///
/// Samples the resource immediately, then at each poll interval until all
/// conditions hold on one sample or the timeout elapses. Every condition is
/// evaluated against a single sample per tick (the resource is never re-read
/// mid-check). Blocks the calling thread between samples; reads are the only
/// side effect.
#[derive(Debug, Clone, Default)]
pub struct PollingAwaiter {
    options: AwaitOptions,
}

impl PollingAwaiter {
    /// Create a new awaiter with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom options
    #[must_use]
    pub const fn with_options(options: AwaitOptions) -> Self {
        Self { options }
    }

    /// Get the awaiter's options
    #[must_use]
    pub const fn options(&self) -> &AwaitOptions {
        &self.options
    }

    /// Await all `conditions` over the resource read by `sample`.
    ///
    /// Fails fast with [`EsperarError::Configuration`] before any sampling
    /// when `conditions` is empty, the poll interval is zero, or the poll
    /// interval exceeds the timeout. Timing out is not an error: it is
    /// reported as [`AwaitOutcome::TimedOut`].
    pub fn run<S, C, F>(&self, mut sample: F, conditions: &[C]) -> EsperarResult<AwaitOutcome<S>>
    where
        F: FnMut() -> S,
        C: Condition<S>,
    {
        if conditions.is_empty() {
            return Err(EsperarError::Configuration {
                message: "at least one condition is required".to_string(),
            });
        }
        self.options.validate()?;

        let timeout = self.options.timeout();
        let poll_interval = self.options.poll_interval();
        let start = Instant::now();
        let mut polls = 0u32;

        loop {
            let state = sample();
            polls += 1;

            let unmet: Vec<String> = conditions
                .iter()
                .filter(|condition| !condition.evaluate(&state))
                .map(Condition::description)
                .collect();

            if unmet.is_empty() {
                let elapsed = start.elapsed();
                debug!(polls, elapsed = ?elapsed, "all conditions satisfied");
                return Ok(AwaitOutcome::Satisfied { elapsed, polls });
            }

            let elapsed = start.elapsed();
            if elapsed >= timeout {
                warn!(polls, elapsed = ?elapsed, unmet = ?unmet, "await timed out");
                return Ok(AwaitOutcome::TimedOut {
                    elapsed,
                    polls,
                    last_observed: state,
                    unmet,
                });
            }

            trace!(polls, unmet = ?unmet, "conditions not yet satisfied");
            std::thread::sleep(poll_interval);
        }
    }
}

// =============================================================================
// CONVENIENCE FUNCTIONS
// =============================================================================

/// Await a boolean predicate with the default poll interval.
///
/// Timeouts shorter than the default interval poll at the timeout itself
/// (floored to 1ms), so a short deadline still gets sampled rather than
/// failing validation.
pub fn poll_until<F>(mut predicate: F, timeout_ms: u64) -> EsperarResult<AwaitOutcome<bool>>
where
    F: FnMut() -> bool,
{
    let poll_interval_ms = DEFAULT_POLL_INTERVAL_MS.min(timeout_ms.max(1));
    let awaiter = PollingAwaiter::with_options(
        AwaitOptions::new()
            .with_timeout(timeout_ms)
            .with_poll_interval(poll_interval_ms),
    );
    let condition = crate::condition::FnCondition::new(|ready: &bool| *ready, "predicate");
    awaiter.run(|| predicate(), std::slice::from_ref(&condition))
}

// =============================================================================
// TESTS
// =============================================================================
