//! Convenience assertion and interaction layer.
//!
//! The test-facing surface over [`PollingAwaiter`]: `see`/`do_not_see`
//! visibility assertions, value assertions, and fail-fast complete/dismiss
//! sequences. Every method is `#[track_caller]`, so failures carry the
//! file/line of the assertion in test code rather than of this module.

use crate::awaiter::{AwaitOptions, AwaitOutcome, PollingAwaiter};
use crate::condition::{ElementCondition, FnCondition};
use crate::element::{Awaitable, Completable, Dismissable, Element, Screen, ValueRepresentable};
use crate::result::{EsperarError, EsperarResult};
use std::panic::Location;
use tracing::debug;

/// Conditions awaited by a visibility assertion
const SEE_CONDITIONS: [ElementCondition; 2] =
    [ElementCondition::Exists, ElementCondition::Visible];

/// Conditions awaited by an absence assertion
const DO_NOT_SEE_CONDITIONS: [ElementCondition; 1] = [ElementCondition::DoesNotExist];

/// Assertion and interaction context for test code.
///
/// Owns the await options used by every assertion it performs. Assertions are
/// strictly sequential; each call owns its own deadline.
#[derive(Debug, Clone, Default)]
pub struct Context {
    awaiter: PollingAwaiter,
}

impl Context {
    /// Create a context with default await options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with custom await options
    #[must_use]
    pub const fn with_options(options: AwaitOptions) -> Self {
        Self {
            awaiter: PollingAwaiter::with_options(options),
        }
    }

    /// Get the context's await options
    #[must_use]
    pub const fn options(&self) -> &AwaitOptions {
        self.awaiter.options()
    }

    /// Assert that an element can be seen, by awaiting for it to exist and
    /// be visible
    #[track_caller]
    pub fn see(&self, element: &dyn Element) -> EsperarResult<()> {
        self.await_element(element, &SEE_CONDITIONS, Location::caller())
    }

    /// Assert that an element does not exist, by awaiting for it to not exist.
    ///
    /// Idempotent: on an already-absent element this returns immediately,
    /// however many times it is called.
    #[track_caller]
    pub fn do_not_see(&self, element: &dyn Element) -> EsperarResult<()> {
        self.await_element(element, &DO_NOT_SEE_CONDITIONS, Location::caller())
    }

    /// Assert that a screen can be seen, by awaiting on its trait element
    #[track_caller]
    pub fn see_screen<S: Screen>(&self, screen: &S) -> EsperarResult<()> {
        self.see(screen.trait_element())
    }

    /// Assert that a screen does not exist, by awaiting on its trait element
    #[track_caller]
    pub fn do_not_see_screen<S: Screen>(&self, screen: &S) -> EsperarResult<()> {
        self.do_not_see(screen.trait_element())
    }

    /// Assert that an element is visible and its value equals `expected`.
    ///
    /// A mismatch is a [`EsperarError::ValueMismatch`], distinct from a
    /// timeout, naming both values.
    #[track_caller]
    pub fn see_value<E>(&self, expected: &E::Value, element: &E) -> EsperarResult<()>
    where
        E: ValueRepresentable,
    {
        let location = Location::caller();
        self.await_element(element, &SEE_CONDITIONS, location)?;
        let actual = element.value();
        if actual == *expected {
            Ok(())
        } else {
            Err(EsperarError::ValueMismatch {
                subject: element.name().to_string(),
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
                file: location.file(),
                line: location.line(),
            })
        }
    }

    /// Complete one or more things that know how to complete themselves.
    ///
    /// Items are processed left-to-right: each is awaited for readiness, then
    /// completed. The first failure aborts the remaining items. An empty
    /// sequence succeeds vacuously (nothing to process, nothing fails).
    #[track_caller]
    pub fn complete(&self, items: &[&dyn Completable]) -> EsperarResult<()> {
        let location = Location::caller();
        for item in items {
            self.await_ready(*item, location)?;
            item.complete().map_err(|err| wrap_action_error(item.name(), &err))?;
            debug!(item = item.name(), "completed");
        }
        Ok(())
    }

    /// Dismiss one or more things that know how to dismiss themselves.
    ///
    /// Same ordering, fail-fast, and empty-sequence behavior as
    /// [`Context::complete`].
    #[track_caller]
    pub fn dismiss(&self, items: &[&dyn Dismissable]) -> EsperarResult<()> {
        let location = Location::caller();
        for item in items {
            self.await_ready(*item, location)?;
            item.dismiss().map_err(|err| wrap_action_error(item.name(), &err))?;
            debug!(item = item.name(), "dismissed");
        }
        Ok(())
    }

    fn await_element(
        &self,
        element: &dyn Element,
        conditions: &[ElementCondition],
        location: &'static Location<'static>,
    ) -> EsperarResult<()> {
        match self.awaiter.run(|| element.state(), conditions)? {
            AwaitOutcome::Satisfied { elapsed, polls } => {
                debug!(element = element.name(), ?elapsed, polls, "assertion satisfied");
                Ok(())
            }
            AwaitOutcome::TimedOut {
                last_observed,
                unmet,
                ..
            } => Err(EsperarError::ConditionTimeout {
                subject: element.name().to_string(),
                unmet,
                last_observed: last_observed.to_string(),
                timeout_ms: self.options().timeout_ms,
                file: location.file(),
                line: location.line(),
            }),
        }
    }

    fn await_ready(
        &self,
        item: &dyn Awaitable,
        location: &'static Location<'static>,
    ) -> EsperarResult<()> {
        let condition = FnCondition::new(|ready: &bool| *ready, "ready");
        match self
            .awaiter
            .run(|| item.is_ready(), std::slice::from_ref(&condition))?
        {
            AwaitOutcome::Satisfied { .. } => Ok(()),
            AwaitOutcome::TimedOut { .. } => Err(EsperarError::ActionPrecondition {
                item: item.name().to_string(),
                timeout_ms: self.options().timeout_ms,
                file: location.file(),
                line: location.line(),
            }),
        }
    }
}

fn wrap_action_error(item: &str, err: &EsperarError) -> EsperarError {
    EsperarError::ActionFailed {
        item: item.to_string(),
        message: err.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
