//! Host environment boundary.
//!
//! Every fact the classifier needs is injected through [`WpEnvironment`]
//! instead of being read from ambient globals. A production adapter maps
//! each probe onto the corresponding WordPress constant, function, or
//! superglobal; tests substitute [`crate::testing::FakeEnv`].

/// Read-only probes over the host environment at determination time.
///
/// All probes are synchronous and side-effect free. The classifier calls
/// them at most once per determination, in cascade order, so cheap
/// short-circuiting hosts need not cache results.
pub trait WpEnvironment {
    /// Whether the WordPress core bootstrap ran at all (`ABSPATH` defined).
    fn core_loaded(&self) -> bool;

    /// Whether an installation is in progress (`WP_INSTALLING`).
    fn installing(&self) -> bool;

    /// Whether this request was flagged as XML-RPC (`XMLRPC_REQUEST`).
    fn xml_rpc_request(&self) -> bool;

    /// Whether this process is a WP-CLI invocation (`WP_CLI`).
    fn cli(&self) -> bool;

    /// Whether an AJAX action is being processed (`wp_doing_ajax()`).
    fn doing_ajax(&self) -> bool;

    /// Whether the request targets the admin area (`is_admin()`).
    fn is_admin(&self) -> bool;

    /// Whether a cron run is being processed (`wp_doing_cron()`).
    fn doing_cron(&self) -> bool;

    /// Whether the installation is a multisite network (`is_multisite()`).
    fn multisite(&self) -> bool;

    /// Whether the request carries an explicit REST marker
    /// (`REST_REQUEST` constant or a `rest_route` query var).
    fn rest_request_flag(&self) -> bool;

    /// Whether the request carries the interim-login marker.
    fn interim_login(&self) -> bool;

    /// The configured permalink structure, if any. An empty or missing
    /// structure means pretty REST URLs cannot be matched by path.
    fn permalink_structure(&self) -> Option<String>;

    /// Path of the request currently being served. A full URL is accepted;
    /// the classifier extracts the path component either way.
    fn current_path(&self) -> String;

    /// The configured REST API root URL (`get_rest_url()`).
    fn rest_url(&self) -> String;

    /// The configured login URL (`wp_login_url()`).
    fn login_url(&self) -> String;

    /// The network URL of the activation page
    /// (`network_site_url('wp-activate.php')`).
    fn activate_url(&self) -> String;

    /// The `$pagenow` indicator, when the host has set it.
    fn page_now(&self) -> Option<String>;
}
