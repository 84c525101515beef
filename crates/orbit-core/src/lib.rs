//! ORBIT Core
//!
//! Shared data model for the ORBIT browser: the tab descriptor the grouping
//! engine consumes and the engine's configuration surface. Rust owns all
//! state; the WebView shell is stateless.

mod config;
mod tab;

pub use config::GroupingConfig;
pub use tab::{TabDescriptor, TabId};

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
