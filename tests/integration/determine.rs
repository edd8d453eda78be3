//! Determination cascade scenarios, one per request kind.

use super::bootstrapped;
use wp_context::context::{Context, WpContext};
use wp_context::testing::FakeEnv;

#[test]
fn test_not_core() {
    let context = WpContext::determine(&FakeEnv::new());

    assert!(!context.is_core());
    assert!(!context.is_login());
    assert!(!context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cli());
    assert!(!context.is(Context::Core));
}

#[test]
fn test_is_login() {
    let env = bootstrapped().with_path("/wp-login.php");
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_login());
    assert!(!context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cli());

    assert!(context.is_any([Context::Login]));
    assert!(context.is_any([Context::Login, Context::Rest]));
    assert!(!context.is_any([Context::Frontoffice, Context::Rest]));
    assert!(context.is_any([Context::Frontoffice, Context::Rest, Context::Core]));
}

#[test]
fn test_is_login_via_interim_marker() {
    let env = bootstrapped().with_interim_login();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_login());
    assert!(!context.is_frontoffice());
}

#[test]
fn test_is_rest() {
    let env = bootstrapped().with_path("/wp-json/wp/v2/posts");
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(!context.is_login());
    assert!(context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cli());

    assert!(context.is_any([Context::Rest, Context::Login]));
    assert!(!context.is_any([Context::Frontoffice, Context::Login]));
}

#[test]
fn test_rest_beats_login_when_both_match() {
    // REST is checked before login in the cascade.
    let env = bootstrapped()
        .with_path("/wp-json/login")
        .with_login_url("https://example.com/wp-json/login");
    let context = WpContext::determine(&env);

    assert!(context.is_rest());
    assert!(!context.is_login());
}

#[test]
fn test_is_cron() {
    let env = bootstrapped().with_cron();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_cron());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_rest());
    assert!(!context.is_login());
    assert!(!context.is_ajax());
}

#[test]
fn test_is_frontoffice_by_default() {
    let context = WpContext::determine(&bootstrapped());

    assert!(context.is_core());
    assert!(context.is_frontoffice());
    assert!(!context.is_login());
    assert!(!context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cli());
}

#[test]
fn test_is_backoffice() {
    let env = bootstrapped().with_admin();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_backoffice());
    assert!(!context.is_frontoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cron());
    assert!(!context.is_rest());
    assert!(!context.is_login());
}

#[test]
fn test_ajax_takes_precedence_over_backoffice() {
    // AJAX requests report is_admin() true as well; AJAX wins.
    let env = bootstrapped().with_ajax().with_admin();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_ajax());
    assert!(!context.is_backoffice());
    assert!(!context.is_frontoffice());

    assert!(context.is_any([Context::Ajax, Context::Backoffice]));
    assert!(!context.is_any([Context::Cron, Context::Backoffice]));
}

#[test]
fn test_is_installing() {
    let env = bootstrapped().with_installing();
    let context = WpContext::determine(&env);

    assert!(!context.is_core());
    assert!(!context.is_wp_activate());
    assert!(context.is_installing());
    assert!(!context.is_login());
    assert!(!context.is_rest());
    assert!(!context.is_cron());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_ajax());
    assert!(!context.is_cli());
    assert!(!context.is_xml_rpc());
}

#[test]
fn test_installing_suppresses_request_signals() {
    let env = bootstrapped().with_installing().with_ajax().with_admin();
    let context = WpContext::determine(&env);

    assert!(context.is_installing());
    assert!(!context.is_ajax());
    assert!(!context.is_backoffice());
    assert!(!context.is_core());
}

#[test]
fn test_is_wp_activate() {
    let env = bootstrapped()
        .with_installing()
        .with_multisite()
        .with_path("/wp-activate.php");
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_wp_activate());
    assert!(!context.is_installing());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
}

#[test]
fn test_activate_page_needs_multisite() {
    let env = bootstrapped().with_installing().with_path("/wp-activate.php");
    let context = WpContext::determine(&env);

    assert!(context.is_installing());
    assert!(!context.is_wp_activate());
    assert!(!context.is_core());
}

#[test]
fn test_is_cli() {
    let env = bootstrapped().with_cli();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_cli());
    assert!(!context.is_frontoffice());
    assert!(!context.is_backoffice());
    assert!(!context.is_cron());

    assert!(context.is_any([Context::Frontoffice, Context::Cli]));
    assert!(!context.is_any([Context::Frontoffice, Context::Cron]));
}

#[test]
fn test_is_xml_rpc() {
    let env = bootstrapped().with_xml_rpc();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_xml_rpc());
    assert!(!context.is_frontoffice());
}

#[test]
fn test_xml_rpc_implies_core_without_bootstrap() {
    let env = FakeEnv::new().with_xml_rpc();
    let context = WpContext::determine(&env);

    assert!(context.is_core());
    assert!(context.is_xml_rpc());
}

#[test]
fn test_installing_suppresses_xml_rpc() {
    let env = bootstrapped().with_installing().with_xml_rpc();
    let context = WpContext::determine(&env);

    assert!(context.is_installing());
    assert!(!context.is_xml_rpc());
    assert!(!context.is_core());
}
