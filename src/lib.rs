//! wp-context: Request-Context Classification
//!
//! Determines what kind of request a WordPress-like host is currently
//! executing (front-office, back-office, AJAX, REST, cron, login, CLI,
//! XML-RPC, installation, multisite activation) and exposes it as an
//! environment-injected, late-correctable value object.
//!
//! ```
//! use wp_context::context::{Context, WpContext};
//! use wp_context::testing::FakeEnv;
//!
//! let env = FakeEnv::new().with_core_loaded().with_admin();
//! let context = WpContext::determine(&env);
//! assert!(context.is_core());
//! assert!(context.is_backoffice());
//! assert!(context.is_any([Context::Ajax, Context::Backoffice]));
//! ```

pub mod context;
pub mod detect;
pub mod env;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod testing;
