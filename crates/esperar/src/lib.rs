//! Esperar: Polling-Assertion Core for UI Test Automation
//!
//! Esperar (Spanish: "to wait") is the synchronization core beneath a UI test
//! automation DSL: await one or more conditions over a polled resource, with
//! a timeout, and report failures attributed to the assertion's call site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    ESPERAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Test Code  │    │ Context    │    │ Polling    │            │
//! │   │ see/       │───►│ (caller    │───►│ Awaiter    │            │
//! │   │ complete   │    │ location)  │    │ (deadline) │            │
//! │   └────────────┘    └────────────┘    └─────┬──────┘            │
//! │                                             │ samples           │
//! │                                      ┌──────▼──────┐            │
//! │                                      │ UI framework│            │
//! │                                      │ (external)  │            │
//! │                                      └─────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The element polling primitives (tree traversal, visibility detection,
//! event dispatch) live in the external UI framework behind the [`Element`]
//! trait; Esperar owns only the sample-evaluate-sleep loop and the
//! assertion surface above it.
//!
//! # Example
//!
//! ```
//! use esperar::prelude::*;
//!
//! let ctx = Context::with_options(
//!     AwaitOptions::new().with_timeout(200).with_poll_interval(20),
//! );
//! let button = ScriptedElement::new(
//!     "save button",
//!     vec![ElementState::hidden(), ElementState::visible()],
//! );
//! ctx.see(&button).unwrap();
//! ```

#![warn(missing_docs)]

mod awaiter;
mod condition;
mod context;
mod element;
mod result;

/// Scripted test doubles for elements and procedures
pub mod mock;

pub use awaiter::{
    poll_until, AwaitOptions, AwaitOutcome, PollingAwaiter, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_TIMEOUT_MS,
};
pub use condition::{Condition, ElementCondition, ElementState, FnCondition};
pub use context::Context;
pub use element::{Awaitable, Completable, Dismissable, Element, Screen, ValueRepresentable};
pub use result::{EsperarError, EsperarResult};

/// Commonly used imports for test code
pub mod prelude {
    pub use crate::awaiter::{AwaitOptions, AwaitOutcome, PollingAwaiter};
    pub use crate::condition::{Condition, ElementCondition, ElementState, FnCondition};
    pub use crate::context::Context;
    pub use crate::element::{
        Awaitable, Completable, Dismissable, Element, Screen, ValueRepresentable,
    };
    pub use crate::mock::{ScriptedElement, ScriptedProcedure};
    pub use crate::result::{EsperarError, EsperarResult};
}
