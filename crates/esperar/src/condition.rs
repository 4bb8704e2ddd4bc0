//! Conditions evaluated against a sampled resource state.
//!
//! A condition is a named, pure predicate over one sample of a resource's
//! state. The awaiter takes one sample per poll tick and evaluates every
//! condition against that single sample, so a tick can never observe two
//! different states mid-check.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// =============================================================================
// ELEMENT STATE
// =============================================================================

/// One sample of a UI element's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementState {
    /// Whether the element exists in the UI tree
    pub exists: bool,
    /// Whether the element is visible on screen
    pub visible: bool,
}

impl ElementState {
    /// Create a state sample from raw accessor readings
    #[must_use]
    pub const fn new(exists: bool, visible: bool) -> Self {
        Self { exists, visible }
    }

    /// State of an element that is not in the UI tree
    #[must_use]
    pub const fn absent() -> Self {
        Self::new(false, false)
    }

    /// State of an element that exists but is not visible
    #[must_use]
    pub const fn hidden() -> Self {
        Self::new(true, false)
    }

    /// State of an element that exists and is visible
    #[must_use]
    pub const fn visible() -> Self {
        Self::new(true, true)
    }
}

impl std::fmt::Display for ElementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exists={} visible={}", self.exists, self.visible)
    }
}

// =============================================================================
// CONDITION TRAIT
// =============================================================================

/// A named, pure predicate over a sampled state.
///
/// Conditions must be stateless and re-evaluable: the awaiter calls
/// [`Condition::evaluate`] once per poll tick, always against a single sample.
pub trait Condition<S> {
    /// Check whether the condition holds for the given sample
    fn evaluate(&self, state: &S) -> bool;

    /// Get description for failure messages
    fn description(&self) -> String;
}

// =============================================================================
// ELEMENT CONDITIONS
// =============================================================================

/// Named conditions over an element state sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCondition {
    /// The element exists in the UI tree
    Exists,
    /// The element is visible on screen
    Visible,
    /// The element does not exist in the UI tree
    DoesNotExist,
}

impl ElementCondition {
    /// Get the condition name used in failure messages
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Visible => "visible",
            Self::DoesNotExist => "does not exist",
        }
    }
}

impl std::fmt::Display for ElementCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Condition<ElementState> for ElementCondition {
    fn evaluate(&self, state: &ElementState) -> bool {
        match self {
            Self::Exists => state.exists,
            Self::Visible => state.visible,
            Self::DoesNotExist => !state.exists,
        }
    }

    fn description(&self) -> String {
        self.as_str().to_string()
    }
}

// =============================================================================
// FUNCTION CONDITION
// =============================================================================

/// A function-based condition over an arbitrary state type
pub struct FnCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    func: F,
    description: String,
    _state: PhantomData<fn(&S) -> bool>,
}

impl<S, F> std::fmt::Debug for FnCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCondition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<S, F> FnCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    /// Create a new function condition
    pub fn new(func: F, description: impl Into<String>) -> Self {
        Self {
            func,
            description: description.into(),
            _state: PhantomData,
        }
    }
}

impl<S, F> Condition<S> for FnCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    fn evaluate(&self, state: &S) -> bool {
        (self.func)(state)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
