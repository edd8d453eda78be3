//! The classification cascade.
//!
//! Evaluates the environment probes once, in strict priority order, and
//! produces a fully-populated flag set. Undetermined requests resolve to
//! the front-office default rather than failing.

use crate::context::{Context, ContextFlags};
use crate::env::WpEnvironment;
use url::Url;

/// Classify the current request from environment signals.
pub(crate) fn classify(env: &impl WpEnvironment) -> ContextFlags {
    let installing = env.installing();
    let xml_rpc = env.xml_rpc_request();
    let is_core = env.core_loaded();
    let is_cli = env.cli();
    let not_installing = is_core && !installing;
    let is_ajax = not_installing && env.doing_ajax();
    let is_admin = not_installing && env.is_admin() && !is_ajax;
    let is_cron = not_installing && env.doing_cron();
    let is_wp_activate = installing && env.multisite() && is_activate_request(env);

    let undetermined =
        not_installing && !is_admin && !is_cron && !is_cli && !xml_rpc && !is_ajax;

    let is_rest = undetermined && is_rest_request(env);
    let is_login = undetermined && !is_rest && is_login_request(env);

    // When nothing else matches, we assume it is a front-office request.
    let is_front = undetermined && !is_rest && !is_login;

    // During installation only `installing` is set, not even `core`: most
    // of WordPress does not act as expected at that point, so the
    // classification does as little as possible. The multisite activation
    // page is the one exception, where core is considered loaded.
    let mut flags = ContextFlags::default();
    flags.set(Context::Ajax, is_ajax);
    flags.set(Context::Backoffice, is_admin);
    flags.set(Context::Cli, is_cli);
    flags.set(Context::Core, (is_core || xml_rpc) && (!installing || is_wp_activate));
    flags.set(Context::Cron, is_cron);
    flags.set(Context::Frontoffice, is_front);
    flags.set(Context::Installing, installing && !is_wp_activate);
    flags.set(Context::Login, is_login);
    flags.set(Context::Rest, is_rest);
    flags.set(Context::XmlRpc, xml_rpc && !installing);
    flags.set(Context::WpActivate, is_wp_activate);
    flags
}

/// Whether the request targets the REST API.
///
/// Trusts an explicit REST marker first; otherwise prefix-matches the
/// request path against the REST root path. With an empty permalink
/// structure no pretty REST URL exists, so path matching is skipped.
pub fn is_rest_request(env: &impl WpEnvironment) -> bool {
    if env.rest_request_flag() {
        return true;
    }

    match env.permalink_structure() {
        Some(structure) if !structure.is_empty() => {}
        _ => return false,
    }

    let current = normalize_prefix(&url_path(&env.current_path()));
    let rest_base = normalize_prefix(&url_path(&env.rest_url()));

    current.starts_with(&rest_base)
}

/// Whether the request targets the login page.
pub fn is_login_request(env: &impl WpEnvironment) -> bool {
    if env.interim_login() {
        return true;
    }

    is_page_now(env, "wp-login.php", &env.login_url())
}

/// Whether the request targets the multisite activation page.
pub fn is_activate_request(env: &impl WpEnvironment) -> bool {
    is_page_now(env, "wp-activate.php", &env.activate_url())
}

/// Match the request against a known admin-ish page: the `$pagenow`
/// indicator first, then exact path equality against the configured URL.
fn is_page_now(env: &impl WpEnvironment, page: &str, url: &str) -> bool {
    if let Some(page_now) = env.page_now() {
        if !page_now.is_empty() && basename(&page_now) == page {
            return true;
        }
    }

    let current = url_path(&env.current_path());
    let target = url_path(url);

    current.trim_matches('/') == target.trim_matches('/')
}

/// Extract the path component. Accepts a full URL or a bare path; query
/// string and fragment are discarded either way.
fn url_path(value: &str) -> String {
    if let Ok(url) = Url::parse(value) {
        return url.path().to_string();
    }

    let path = value
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    path.to_string()
}

/// Trim surrounding slashes and re-append a trailing one, so that prefix
/// comparison matches sub-resources of a base path without false negatives.
fn normalize_prefix(path: &str) -> String {
    format!("{}/", path.trim_matches('/'))
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
