//! Request context value object.
//!
//! [`WpContext`] answers "what kind of request is currently executing":
//! admin dashboard, REST call, cron run, CLI invocation, login page, AJAX
//! call, front-office render, multisite activation, installation, or
//! XML-RPC call. It is computed once per request from environment signals,
//! may be corrected by later lifecycle checkpoints, and is read many times.

use crate::detect;
use crate::env::WpEnvironment;
use crate::error::ContextError;
use crate::hooks::{HookEvent, PendingHooks};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One named classification bit for the current request.
///
/// `Core` is a meta-flag meaning "running inside WordPress at all" and
/// co-occurs with most others; `Cli` is an orthogonal overlay; the
/// remaining tags partition the request kind in steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Context {
    #[serde(rename = "ajax")]
    Ajax,
    #[serde(rename = "backoffice")]
    Backoffice,
    #[serde(rename = "wpcli")]
    Cli,
    #[serde(rename = "core")]
    Core,
    #[serde(rename = "cron")]
    Cron,
    #[serde(rename = "frontoffice")]
    Frontoffice,
    #[serde(rename = "installing")]
    Installing,
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "rest")]
    Rest,
    #[serde(rename = "xml-rpc")]
    XmlRpc,
    #[serde(rename = "wp-activate")]
    WpActivate,
}

impl Context {
    /// Every recognized context tag.
    pub const ALL: [Context; 11] = [
        Context::Ajax,
        Context::Backoffice,
        Context::Cli,
        Context::Core,
        Context::Cron,
        Context::Frontoffice,
        Context::Installing,
        Context::Login,
        Context::Rest,
        Context::XmlRpc,
        Context::WpActivate,
    ];

    /// Canonical string form, also used as the serialized map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Ajax => "ajax",
            Context::Backoffice => "backoffice",
            Context::Cli => "wpcli",
            Context::Core => "core",
            Context::Cron => "cron",
            Context::Frontoffice => "frontoffice",
            Context::Installing => "installing",
            Context::Login => "login",
            Context::Rest => "rest",
            Context::XmlRpc => "xml-rpc",
            Context::WpActivate => "wp-activate",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Context {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Context::ALL
            .into_iter()
            .find(|ctx| ctx.as_str() == s)
            .ok_or_else(|| ContextError::InvalidContext(s.to_string()))
    }
}

/// The full tag-to-bool mapping backing a [`WpContext`].
///
/// Always fully populated: every tag is present, default false. Serializes
/// as a string-keyed map carrying all eleven entries so downstream
/// consumers can assume presence of every key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFlags {
    bits: [bool; Context::ALL.len()],
}

impl ContextFlags {
    pub fn get(&self, context: Context) -> bool {
        self.bits[context as usize]
    }

    pub fn set(&mut self, context: Context, value: bool) {
        self.bits[context as usize] = value;
    }

    /// Reset every flag to false.
    pub fn reset(&mut self) {
        self.bits = [false; Context::ALL.len()];
    }

    /// Full projection as an ordered map, for diagnostic payloads.
    pub fn to_map(&self) -> BTreeMap<&'static str, bool> {
        Context::ALL
            .into_iter()
            .map(|ctx| (ctx.as_str(), self.get(ctx)))
            .collect()
    }
}

impl Serialize for ContextFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Context::ALL.len()))?;
        for ctx in Context::ALL {
            map.serialize_entry(ctx.as_str(), &self.get(ctx))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContextFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let mut flags = ContextFlags::default();
        for (key, value) in entries {
            let ctx = key.parse::<Context>().map_err(serde::de::Error::custom)?;
            flags.set(ctx, value);
        }
        Ok(flags)
    }
}

/// The request-context classification for the current request.
///
/// Created once via [`WpContext::determine`] (or blank via
/// [`WpContext::new`]), optionally corrected by lifecycle checkpoints or an
/// explicit override, then queried read-only by consumers. Serializes as
/// the full flag map.
#[derive(Debug, Clone)]
pub struct WpContext {
    flags: ContextFlags,
    hooks: PendingHooks,
}

impl Default for WpContext {
    fn default() -> Self {
        Self::new()
    }
}

impl WpContext {
    /// Blank instance: every flag false, no checkpoints registered.
    pub fn new() -> Self {
        Self {
            flags: ContextFlags::default(),
            hooks: PendingHooks::none(),
        }
    }

    /// Classify the current request from the given environment and register
    /// the late-correction checkpoints.
    pub fn determine(env: &impl WpEnvironment) -> Self {
        let flags = detect::classify(env);
        debug!("determined request context: {:?}", flags.to_map());
        Self {
            flags,
            hooks: PendingHooks::all(),
        }
    }

    /// Explicitly override the classification to `context`.
    ///
    /// Unregisters every pending checkpoint (the override is maximally
    /// confident and must not be disturbed by a delayed hook), resets all
    /// flags, and sets the target. Unless the target is `Installing`,
    /// `Cli`, or `Core`, forcing any real request kind implies WordPress is
    /// loaded, so `Core` is set as well.
    pub fn force(&mut self, context: Context) {
        self.hooks.clear();
        self.flags.reset();
        self.flags.set(context, true);
        if !matches!(context, Context::Installing | Context::Cli | Context::Core) {
            self.flags.set(Context::Core, true);
        }
        debug!("forced request context to '{}'", context);
    }

    /// [`force`](Self::force) from a tag string.
    ///
    /// Fails with [`ContextError::InvalidContext`] before any mutation when
    /// the tag is not one of the recognized categories.
    pub fn force_str(&mut self, context: &str) -> Result<(), ContextError> {
        let context = context.parse::<Context>()?;
        self.force(context);
        Ok(())
    }

    /// Overlay the CLI flag without touching any other flag or pending
    /// checkpoint. A WP-CLI invocation can itself run in an installation or
    /// core context.
    pub fn with_cli(mut self) -> Self {
        self.flags.set(Context::Cli, true);
        self
    }

    /// Fire a lifecycle checkpoint.
    ///
    /// A registered checkpoint performs a reset-and-force to its target
    /// context, trusting the most specific signal fired most recently: all
    /// flags are cleared, `Core` is re-asserted, the previous CLI flag is
    /// preserved, and exactly the triggered context is set. Firing an
    /// unregistered checkpoint (blank instance, or after an override) is a
    /// no-op, as is an admin-screen event outside the admin area.
    pub fn fire(&mut self, event: HookEvent) {
        let hook = event.hook();
        if !self.hooks.contains(hook) {
            return;
        }
        if matches!(event, HookEvent::CurrentScreen { in_admin: false }) {
            return;
        }
        debug!(
            "lifecycle checkpoint '{}' fired, correcting context",
            hook.action_name()
        );
        let cli = self.flags.get(Context::Cli);
        self.force(hook.target());
        if cli {
            self.flags.set(Context::Cli, true);
        }
    }

    /// True if any of the given tags is set.
    pub fn is_any<I>(&self, contexts: I) -> bool
    where
        I: IntoIterator<Item = Context>,
    {
        contexts.into_iter().any(|ctx| self.flags.get(ctx))
    }

    pub fn is(&self, context: Context) -> bool {
        self.flags.get(context)
    }

    pub fn is_core(&self) -> bool {
        self.is(Context::Core)
    }

    pub fn is_frontoffice(&self) -> bool {
        self.is(Context::Frontoffice)
    }

    pub fn is_backoffice(&self) -> bool {
        self.is(Context::Backoffice)
    }

    pub fn is_ajax(&self) -> bool {
        self.is(Context::Ajax)
    }

    pub fn is_login(&self) -> bool {
        self.is(Context::Login)
    }

    pub fn is_rest(&self) -> bool {
        self.is(Context::Rest)
    }

    pub fn is_cron(&self) -> bool {
        self.is(Context::Cron)
    }

    pub fn is_cli(&self) -> bool {
        self.is(Context::Cli)
    }

    pub fn is_xml_rpc(&self) -> bool {
        self.is(Context::XmlRpc)
    }

    pub fn is_installing(&self) -> bool {
        self.is(Context::Installing)
    }

    pub fn is_wp_activate(&self) -> bool {
        self.is(Context::WpActivate)
    }

    /// The full flag projection. Pure, no side effects.
    pub fn flags(&self) -> &ContextFlags {
        &self.flags
    }

    /// The checkpoints still registered on this instance.
    pub fn pending_hooks(&self) -> &PendingHooks {
        &self.hooks
    }
}

impl Serialize for WpContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.flags.serialize(serializer)
    }
}
