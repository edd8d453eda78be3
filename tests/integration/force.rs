//! Explicit override scenarios.

use super::bootstrapped;
use wp_context::context::{Context, WpContext};
use wp_context::error::ContextError;
use wp_context::hooks::HookEvent;

#[test]
fn test_force_login_on_fresh_state() {
    let mut context = WpContext::determine(&bootstrapped());
    assert!(context.is_frontoffice());

    context.force(Context::Login);

    assert!(context.is_core());
    assert!(context.is_login());
    assert!(!context.is_frontoffice());
    assert!(!context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
}

#[test]
fn test_force_clears_pending_checkpoints() {
    let mut context = WpContext::determine(&bootstrapped());
    context.force(Context::Login);
    assert!(context.pending_hooks().is_empty());

    // A delayed REST checkpoint must not disturb the override.
    context.fire(HookEvent::RestApiInit);
    assert!(context.is_login());
    assert!(!context.is_rest());
}

#[test]
fn test_force_installing_does_not_imply_core() {
    let mut context = WpContext::determine(&bootstrapped());
    context.force(Context::Installing);

    assert!(context.is_installing());
    assert!(!context.is_core());
}

#[test]
fn test_force_cli_does_not_imply_core() {
    let mut context = WpContext::new();
    context.force(Context::Cli);

    assert!(context.is_cli());
    assert!(!context.is_core());
}

#[test]
fn test_force_str_accepts_canonical_tags() {
    let mut context = WpContext::new();
    context.force_str("xml-rpc").unwrap();
    assert!(context.is_xml_rpc());
    assert!(context.is_core());

    context.force_str("wpcli").unwrap();
    assert!(context.is_cli());
    assert!(!context.is_xml_rpc());
}

#[test]
fn test_force_str_rejects_unknown_tag() {
    let mut context = WpContext::determine(&bootstrapped());

    for bad in ["", "meh", "Login", "front office"] {
        let err = context.force_str(bad).unwrap_err();
        assert!(matches!(err, ContextError::InvalidContext(_)), "{:?}", bad);
    }

    // Failure happens before any mutation.
    assert!(context.is_frontoffice());
    assert!(!context.pending_hooks().is_empty());
}

#[test]
fn test_with_cli_keeps_checkpoints_registered() {
    let context = WpContext::determine(&bootstrapped()).with_cli();

    assert!(context.is_cli());
    assert!(context.is_frontoffice());
    assert!(!context.pending_hooks().is_empty());
}
