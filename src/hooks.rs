//! Lifecycle checkpoints for late classification correction.
//!
//! Some signals are only reliable after later points in the host's request
//! handling. The classifier registers the full checkpoint set at
//! determination time; the host fires checkpoints synchronously through
//! [`crate::context::WpContext::fire`], and an explicit override clears the
//! whole set so a delayed checkpoint cannot disturb it.

use crate::context::Context;
use std::collections::HashSet;

/// A lifecycle checkpoint the classifier can listen on.
///
/// Each checkpoint corresponds to a WordPress action hook and corrects the
/// classification to one specific context when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// `login_init`: the login page is definitely being served.
    LoginInit,
    /// `rest_api_init`: the REST server is definitely dispatching.
    RestApiInit,
    /// `activate_header`: the multisite activation page is rendering.
    ActivateHeader,
    /// `template_redirect`: a front-office template is about to render.
    TemplateRedirect,
    /// `current_screen`: an admin screen object has been resolved.
    CurrentScreen,
}

impl Hook {
    pub const ALL: [Hook; 5] = [
        Hook::LoginInit,
        Hook::RestApiInit,
        Hook::ActivateHeader,
        Hook::TemplateRedirect,
        Hook::CurrentScreen,
    ];

    /// The WordPress action name a host adapter binds this checkpoint to.
    pub fn action_name(&self) -> &'static str {
        match self {
            Hook::LoginInit => "login_init",
            Hook::RestApiInit => "rest_api_init",
            Hook::ActivateHeader => "activate_header",
            Hook::TemplateRedirect => "template_redirect",
            Hook::CurrentScreen => "current_screen",
        }
    }

    /// The context this checkpoint corrects to when it fires.
    pub fn target(&self) -> Context {
        match self {
            Hook::LoginInit => Context::Login,
            Hook::RestApiInit => Context::Rest,
            Hook::ActivateHeader => Context::WpActivate,
            Hook::TemplateRedirect => Context::Frontoffice,
            Hook::CurrentScreen => Context::Backoffice,
        }
    }
}

/// A checkpoint firing, with its payload where the hook carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    LoginInit,
    RestApiInit,
    ActivateHeader,
    TemplateRedirect,
    /// The screen resolved by `current_screen`; only an admin-area screen
    /// corrects the classification.
    CurrentScreen { in_admin: bool },
}

impl HookEvent {
    /// The checkpoint this event fires.
    pub fn hook(&self) -> Hook {
        match self {
            HookEvent::LoginInit => Hook::LoginInit,
            HookEvent::RestApiInit => Hook::RestApiInit,
            HookEvent::ActivateHeader => Hook::ActivateHeader,
            HookEvent::TemplateRedirect => Hook::TemplateRedirect,
            HookEvent::CurrentScreen { .. } => Hook::CurrentScreen,
        }
    }
}

/// The set of checkpoints still registered on a context instance.
///
/// Registration and removal are idempotent; removing a checkpoint that was
/// never added is a no-op.
#[derive(Debug, Clone, Default)]
pub struct PendingHooks {
    pending: HashSet<Hook>,
}

impl PendingHooks {
    /// No checkpoints registered (blank instances).
    pub fn none() -> Self {
        Self::default()
    }

    /// The full checkpoint set (instances created via determination).
    pub fn all() -> Self {
        Self {
            pending: Hook::ALL.into_iter().collect(),
        }
    }

    pub fn register(&mut self, hook: Hook) {
        self.pending.insert(hook);
    }

    pub fn unregister(&mut self, hook: Hook) {
        self.pending.remove(&hook);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn contains(&self, hook: Hook) -> bool {
        self.pending.contains(&hook)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
