//! Scripted test doubles for elements and completable/dismissable procedures.
//!
//! Probar-style mocks: play back a scripted state sequence in a controlled
//! environment so the actual polling and assertion code is what gets tested.

use crate::condition::ElementState;
use crate::element::{Awaitable, Completable, Dismissable, Element, ValueRepresentable};
use crate::result::{EsperarError, EsperarResult};
use std::cell::{Cell, RefCell};

// =============================================================================
// SCRIPTED ELEMENT
// =============================================================================

/// Element double that plays back a scripted sequence of state frames.
///
/// Each call to [`Element::state`] consumes one frame; after the script is
/// exhausted the last frame is held. The raw `exists`/`is_visible` accessors
/// peek at the current frame without consuming it.
#[derive(Debug)]
pub struct ScriptedElement {
    name: String,
    frames: Vec<ElementState>,
    cursor: Cell<usize>,
    samples: Cell<u32>,
    value: RefCell<String>,
}

impl ScriptedElement {
    /// Create an element that plays back `frames` one sample at a time
    #[must_use]
    pub fn new(name: impl Into<String>, frames: Vec<ElementState>) -> Self {
        Self {
            name: name.into(),
            frames,
            cursor: Cell::new(0),
            samples: Cell::new(0),
            value: RefCell::new(String::new()),
        }
    }

    /// Create an element that reports the same state forever
    #[must_use]
    pub fn always(name: impl Into<String>, state: ElementState) -> Self {
        Self::new(name, vec![state])
    }

    /// Create an element that is never in the UI tree
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self::always(name, ElementState::absent())
    }

    /// Set the value reported by [`ValueRepresentable::value`]
    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        *self.value.borrow_mut() = value.into();
        self
    }

    /// Number of samples taken so far
    #[must_use]
    pub fn samples(&self) -> u32 {
        self.samples.get()
    }

    fn current(&self) -> ElementState {
        match self.frames.get(self.cursor.get()) {
            Some(frame) => *frame,
            None => ElementState::absent(),
        }
    }

    fn advance(&self) -> ElementState {
        let frame = self.current();
        if self.cursor.get() + 1 < self.frames.len() {
            self.cursor.set(self.cursor.get() + 1);
        }
        self.samples.set(self.samples.get() + 1);
        frame
    }
}

impl Element for ScriptedElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn exists(&self) -> bool {
        self.current().exists
    }

    fn is_visible(&self) -> bool {
        self.current().visible
    }

    fn state(&self) -> ElementState {
        self.advance()
    }
}

impl ValueRepresentable for ScriptedElement {
    type Value = String;

    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

// =============================================================================
// SCRIPTED PROCEDURE
// =============================================================================

/// Completable/Dismissable double with a configurable readiness delay.
///
/// Reports not-ready for the first `ready_after` readiness checks, then ready
/// forever; records every action invocation.
#[derive(Debug)]
pub struct ScriptedProcedure {
    name: String,
    ready_after: u32,
    fail_action: bool,
    checks: Cell<u32>,
    completions: Cell<u32>,
    dismissals: Cell<u32>,
}

impl ScriptedProcedure {
    /// Create a procedure that is ready immediately
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ready_after: 0,
            fail_action: false,
            checks: Cell::new(0),
            completions: Cell::new(0),
            dismissals: Cell::new(0),
        }
    }

    /// Report not-ready for the first `checks` readiness checks
    #[must_use]
    pub const fn ready_after(mut self, checks: u32) -> Self {
        self.ready_after = checks;
        self
    }

    /// Create a procedure whose readiness never becomes true
    #[must_use]
    pub fn never_ready(name: impl Into<String>) -> Self {
        Self::new(name).ready_after(u32::MAX)
    }

    /// Make the action itself return an error
    #[must_use]
    pub const fn failing_action(mut self) -> Self {
        self.fail_action = true;
        self
    }

    /// Number of readiness checks so far
    #[must_use]
    pub fn checks(&self) -> u32 {
        self.checks.get()
    }

    /// Number of times `complete` was invoked
    #[must_use]
    pub fn completions(&self) -> u32 {
        self.completions.get()
    }

    /// Number of times `dismiss` was invoked
    #[must_use]
    pub fn dismissals(&self) -> u32 {
        self.dismissals.get()
    }

    fn act(&self, counter: &Cell<u32>) -> EsperarResult<()> {
        if self.fail_action {
            return Err(EsperarError::ActionFailed {
                item: self.name.clone(),
                message: "scripted action failure".to_string(),
            });
        }
        counter.set(counter.get() + 1);
        Ok(())
    }
}

impl Awaitable for ScriptedProcedure {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        let seen = self.checks.get();
        self.checks.set(seen.saturating_add(1));
        seen >= self.ready_after
    }
}

impl Completable for ScriptedProcedure {
    fn complete(&self) -> EsperarResult<()> {
        self.act(&self.completions)
    }
}

impl Dismissable for ScriptedProcedure {
    fn dismiss(&self) -> EsperarResult<()> {
        self.act(&self.dismissals)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod scripted_element_tests {
        use super::*;

        #[test]
        fn test_plays_frames_then_holds_last() {
            let element = ScriptedElement::new(
                "banner",
                vec![ElementState::absent(), ElementState::hidden(), ElementState::visible()],
            );
            assert_eq!(element.state(), ElementState::absent());
            assert_eq!(element.state(), ElementState::hidden());
            assert_eq!(element.state(), ElementState::visible());
            assert_eq!(element.state(), ElementState::visible());
            assert_eq!(element.samples(), 4);
        }

        #[test]
        fn test_accessors_peek_without_consuming() {
            let element =
                ScriptedElement::new("banner", vec![ElementState::hidden(), ElementState::visible()]);
            assert!(element.exists());
            assert!(!element.is_visible());
            assert_eq!(element.samples(), 0);
            assert_eq!(element.state(), ElementState::hidden());
        }

        #[test]
        fn test_empty_script_reads_as_absent() {
            let element = ScriptedElement::new("ghost", vec![]);
            assert_eq!(element.state(), ElementState::absent());
        }

        #[test]
        fn test_value() {
            let element =
                ScriptedElement::always("amount", ElementState::visible()).with_value("42");
            assert_eq!(element.value(), "42");
        }
    }

    mod scripted_procedure_tests {
        use super::*;

        #[test]
        fn test_ready_immediately_by_default() {
            let procedure = ScriptedProcedure::new("dialog");
            assert!(procedure.is_ready());
        }

        #[test]
        fn test_ready_after_delay() {
            let procedure = ScriptedProcedure::new("dialog").ready_after(2);
            assert!(!procedure.is_ready());
            assert!(!procedure.is_ready());
            assert!(procedure.is_ready());
            assert_eq!(procedure.checks(), 3);
        }

        #[test]
        fn test_never_ready() {
            let procedure = ScriptedProcedure::never_ready("dialog");
            for _ in 0..10 {
                assert!(!procedure.is_ready());
            }
        }

        #[test]
        fn test_records_actions() {
            let procedure = ScriptedProcedure::new("dialog");
            procedure.complete().unwrap();
            procedure.complete().unwrap();
            procedure.dismiss().unwrap();
            assert_eq!(procedure.completions(), 2);
            assert_eq!(procedure.dismissals(), 1);
        }

        #[test]
        fn test_failing_action() {
            let procedure = ScriptedProcedure::new("dialog").failing_action();
            assert!(procedure.complete().is_err());
            assert_eq!(procedure.completions(), 0);
        }
    }
}
