//! Result and error types for Esperar.

use thiserror::Error;

/// Result type for Esperar operations
pub type EsperarResult<T> = Result<T, EsperarError>;

/// Errors that can occur in Esperar
#[derive(Debug, Error)]
pub enum EsperarError {
    /// Invalid await configuration (empty conditions, zero poll interval,
    /// or poll interval longer than the timeout). Raised before any sampling.
    #[error("Invalid await configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Conditions unmet by the deadline
    #[error(
        "{subject} did not satisfy [{unmet_list}] within {timeout_ms}ms \
         (last observed: {last_observed}) at {file}:{line}",
        unmet_list = .unmet.join(", ")
    )]
    ConditionTimeout {
        /// What was being awaited (element or screen name)
        subject: String,
        /// Descriptions of the conditions still false on the last sample,
        /// in the order they were supplied
        unmet: Vec<String>,
        /// The last observed state of the resource
        last_observed: String,
        /// Timeout in milliseconds
        timeout_ms: u64,
        /// Source file of the failing assertion
        file: &'static str,
        /// Source line of the failing assertion
        line: u32,
    },

    /// Resource visible but its value differs from the expected value.
    /// Distinct from a timeout so test output names actual vs. expected.
    #[error("{subject} has value {actual}, expected {expected} at {file}:{line}")]
    ValueMismatch {
        /// The element whose value was asserted
        subject: String,
        /// Expected value (Debug-formatted)
        expected: String,
        /// Actual value (Debug-formatted)
        actual: String,
        /// Source file of the failing assertion
        file: &'static str,
        /// Source line of the failing assertion
        line: u32,
    },

    /// An item's readiness condition never became true during a
    /// complete/dismiss sequence. Aborts the remaining items.
    #[error("{item} never became ready within {timeout_ms}ms at {file}:{line}")]
    ActionPrecondition {
        /// The item that never became ready
        item: String,
        /// Timeout in milliseconds
        timeout_ms: u64,
        /// Source file of the failing call
        file: &'static str,
        /// Source line of the failing call
        line: u32,
    },

    /// An item's own action returned an error. Aborts the remaining items.
    #[error("Action on {item} failed: {message}")]
    ActionFailed {
        /// The item whose action failed
        item: String,
        /// Error message
        message: String,
    },
}
