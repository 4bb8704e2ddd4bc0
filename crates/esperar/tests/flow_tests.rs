//! End-to-end flow tests through the public API
//!
//! Drives a typical UI test sequence (see a screen, fill and complete forms,
//! assert a value, dismiss a sheet) against scripted doubles.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use esperar::prelude::*;

/// Install the test subscriber so awaiter/context diagnostics show up under
/// `RUST_LOG=esperar=debug`. Idempotent across tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct CheckoutScreen {
    title: ScriptedElement,
}

impl Screen for CheckoutScreen {
    type Trait = ScriptedElement;

    fn trait_element(&self) -> &Self::Trait {
        &self.title
    }
}

fn fast_context() -> Context {
    init_tracing();
    Context::with_options(AwaitOptions::new().with_timeout(200).with_poll_interval(10))
}

#[test]
fn test_full_checkout_flow() {
    let ctx = fast_context();

    // Screen appears after a couple of polls
    let screen = CheckoutScreen {
        title: ScriptedElement::new(
            "checkout title",
            vec![ElementState::absent(), ElementState::hidden(), ElementState::visible()],
        ),
    };
    ctx.see_screen(&screen).expect("checkout screen should appear");

    // Total renders once visible
    let total = ScriptedElement::always("order total", ElementState::visible()).with_value("42.00");
    ctx.see_value(&"42.00".to_string(), &total).expect("total should match");

    // Two forms completed in order, the first after a short readiness delay
    let shipping = ScriptedProcedure::new("shipping form").ready_after(2);
    let payment = ScriptedProcedure::new("payment form");
    ctx.complete(&[&shipping, &payment]).expect("forms should complete");
    assert_eq!(shipping.completions(), 1);
    assert_eq!(payment.completions(), 1);

    // Confirmation sheet dismissed, then gone
    let sheet = ScriptedProcedure::new("confirmation sheet");
    ctx.dismiss(&[&sheet]).expect("sheet should dismiss");
    assert_eq!(sheet.dismissals(), 1);

    let toast = ScriptedElement::new(
        "success toast",
        vec![ElementState::visible(), ElementState::absent()],
    );
    ctx.do_not_see(&toast).expect("toast should disappear");
}

#[test]
fn test_failure_messages_point_at_the_test_file() {
    let ctx = fast_context();
    let missing = ScriptedElement::absent("pay button");
    let err = ctx.see(&missing).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("pay button"));
    assert!(message.contains("flow_tests.rs"));
    assert!(message.contains("exists"));
}

#[test]
fn test_awaiter_is_usable_outside_an_assertion_context() {
    // Timing out is a value, not an error, for direct awaiter users
    let awaiter = PollingAwaiter::with_options(
        AwaitOptions::new().with_timeout(50).with_poll_interval(10),
    );
    let outcome = awaiter
        .run(|| ElementState::hidden(), &[ElementCondition::Visible])
        .unwrap();
    assert!(!outcome.is_satisfied());
}
