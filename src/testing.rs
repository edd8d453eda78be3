//! Test doubles for the host environment.
//!
//! [`FakeEnv`] stands in for a bootstrapped (or not) WordPress process so
//! the classifier can be exercised without any host at all. Defaults model
//! "nothing signaled": core not loaded, no request markers, a `/` request
//! path, pretty permalinks configured, and the stock URLs of a
//! single-site install. Exported for downstream test harnesses as well.

use crate::env::WpEnvironment;

/// A substitutable [`WpEnvironment`] with builder-style setup.
#[derive(Debug, Clone)]
pub struct FakeEnv {
    pub core_loaded: bool,
    pub installing: bool,
    pub xml_rpc_request: bool,
    pub cli: bool,
    pub doing_ajax: bool,
    pub is_admin: bool,
    pub doing_cron: bool,
    pub multisite: bool,
    pub rest_request_flag: bool,
    pub interim_login: bool,
    pub permalink_structure: Option<String>,
    pub current_path: String,
    pub rest_url: String,
    pub login_url: String,
    pub activate_url: String,
    pub page_now: Option<String>,
}

impl Default for FakeEnv {
    fn default() -> Self {
        Self {
            core_loaded: false,
            installing: false,
            xml_rpc_request: false,
            cli: false,
            doing_ajax: false,
            is_admin: false,
            doing_cron: false,
            multisite: false,
            rest_request_flag: false,
            interim_login: false,
            permalink_structure: Some("/%postname%/".to_string()),
            current_path: "/".to_string(),
            rest_url: "https://example.com/wp-json".to_string(),
            login_url: "https://example.com/wp-login.php".to_string(),
            activate_url: "https://example.com/wp-activate.php".to_string(),
            page_now: None,
        }
    }
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the core bootstrap as done (`ABSPATH` defined).
    pub fn with_core_loaded(mut self) -> Self {
        self.core_loaded = true;
        self
    }

    pub fn with_installing(mut self) -> Self {
        self.installing = true;
        self
    }

    pub fn with_xml_rpc(mut self) -> Self {
        self.xml_rpc_request = true;
        self
    }

    pub fn with_cli(mut self) -> Self {
        self.cli = true;
        self
    }

    pub fn with_ajax(mut self) -> Self {
        self.doing_ajax = true;
        self
    }

    pub fn with_admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    pub fn with_cron(mut self) -> Self {
        self.doing_cron = true;
        self
    }

    pub fn with_multisite(mut self) -> Self {
        self.multisite = true;
        self
    }

    pub fn with_rest_flag(mut self) -> Self {
        self.rest_request_flag = true;
        self
    }

    pub fn with_interim_login(mut self) -> Self {
        self.interim_login = true;
        self
    }

    /// Clear the permalink structure (plain permalinks).
    pub fn without_permalinks(mut self) -> Self {
        self.permalink_structure = None;
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.current_path = path.to_string();
        self
    }

    pub fn with_rest_url(mut self, url: &str) -> Self {
        self.rest_url = url.to_string();
        self
    }

    pub fn with_login_url(mut self, url: &str) -> Self {
        self.login_url = url.to_string();
        self
    }

    pub fn with_activate_url(mut self, url: &str) -> Self {
        self.activate_url = url.to_string();
        self
    }

    pub fn with_page_now(mut self, page: &str) -> Self {
        self.page_now = Some(page.to_string());
        self
    }
}

impl WpEnvironment for FakeEnv {
    fn core_loaded(&self) -> bool {
        self.core_loaded
    }

    fn installing(&self) -> bool {
        self.installing
    }

    fn xml_rpc_request(&self) -> bool {
        self.xml_rpc_request
    }

    fn cli(&self) -> bool {
        self.cli
    }

    fn doing_ajax(&self) -> bool {
        self.doing_ajax
    }

    fn is_admin(&self) -> bool {
        self.is_admin
    }

    fn doing_cron(&self) -> bool {
        self.doing_cron
    }

    fn multisite(&self) -> bool {
        self.multisite
    }

    fn rest_request_flag(&self) -> bool {
        self.rest_request_flag
    }

    fn interim_login(&self) -> bool {
        self.interim_login
    }

    fn permalink_structure(&self) -> Option<String> {
        self.permalink_structure.clone()
    }

    fn current_path(&self) -> String {
        self.current_path.clone()
    }

    fn rest_url(&self) -> String {
        self.rest_url.clone()
    }

    fn login_url(&self) -> String {
        self.login_url.clone()
    }

    fn activate_url(&self) -> String {
        self.activate_url.clone()
    }

    fn page_now(&self) -> Option<String> {
        self.page_now.clone()
    }
}
