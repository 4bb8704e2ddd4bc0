//! Resource-capability traits for awaitable UI entities.
//!
//! The external UI-automation framework owns the hard parts (tree traversal,
//! visibility detection, event dispatch); these traits are the seam it plugs
//! into. Consuming types pass elements and screens explicitly rather than
//! mixing behavior in through trait defaults.

use crate::condition::ElementState;
use crate::result::EsperarResult;
use std::fmt::Debug;

/// An external UI element whose state can be queried idempotently.
///
/// Accessors must be side-effect free and safe to call repeatedly from the
/// polling thread; the framework behind them is assumed to serialize access.
pub trait Element {
    /// Name used in failure messages (e.g., "save button")
    fn name(&self) -> &str;

    /// Whether the element currently exists in the UI tree
    fn exists(&self) -> bool;

    /// Whether the element is currently visible on screen
    fn is_visible(&self) -> bool;

    /// Take one sample of the element's observable state.
    ///
    /// The awaiter evaluates every condition of a poll tick against this
    /// single sample, never re-reading the element mid-check.
    fn state(&self) -> ElementState {
        ElementState::new(self.exists(), self.is_visible())
    }
}

/// An element that exposes a comparable value (text field contents,
/// slider position, switch state)
pub trait ValueRepresentable: Element {
    /// The exposed value type
    type Value: PartialEq + Debug;

    /// Read the element's current value
    fn value(&self) -> Self::Value;
}

/// A screen identified by a single trait element.
///
/// A screen is considered visible exactly when its trait element is.
pub trait Screen {
    /// The element whose presence identifies this screen
    type Trait: Element;

    /// Get the screen's identifying element
    fn trait_element(&self) -> &Self::Trait;
}

/// Something that must become ready before it can be acted on
pub trait Awaitable {
    /// Name used in failure messages (e.g., "cookie banner")
    fn name(&self) -> &str;

    /// Whether the item is ready for its action
    fn is_ready(&self) -> bool;
}

/// Something that knows how to complete itself (e.g., a form screen)
pub trait Completable: Awaitable {
    /// Perform the completing action
    fn complete(&self) -> EsperarResult<()>;
}

/// Something that knows how to dismiss itself (e.g., a modal sheet)
pub trait Dismissable: Awaitable {
    /// Perform the dismissing action
    fn dismiss(&self) -> EsperarResult<()>;
}
