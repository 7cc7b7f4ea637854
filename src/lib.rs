//! # Rust Log Facade
//!
//! A process-wide logging facade. Callers emit severity-tagged messages with
//! call-site metadata; the facade filters them by severity threshold and tag
//! allow-list, then fans each surviving record out to a built-in console
//! observer and to every registered observer, in registration order.
//!
//! ## Features
//!
//! - **Filter pipeline**: severity threshold first, then the tag allow-list
//! - **Identity registry**: observers are matched by instance, never by value
//! - **Thread Safe**: one lock guards configuration and registry; observers
//!   run without it, so they may log themselves
//! - **Isolated fan-out**: a panicking observer never stops the others
//!
//! ## Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{error, info};
//! use std::sync::Arc;
//!
//! let facade = Facade::builder()
//!     .threshold(Severity::Info)
//!     .default_observer_enabled(false)
//!     .build();
//!
//! let (observer, records) = ChannelObserver::unbounded();
//! facade.register(Arc::new(observer));
//!
//! info!(facade, tag: "NET", "listening on {}", 8080);
//! error!(facade, payload: 42_u32, "request failed");
//!
//! let first = records.try_recv().unwrap();
//! assert_eq!(first.record.message(), "listening on 8080");
//! assert_eq!(first.tag, "NET");
//! ```

pub mod core;
pub mod macros;
pub mod observers;

use std::sync::OnceLock;

pub mod prelude {
    pub use crate::core::{
        Facade, FacadeBuilder, FacadeConfig, FacadeError, FacadeMetrics, LogRecord, Observer,
        Origin, Payload, Registration, Result, Severity, ThresholdGuard,
    };
    pub use crate::observers::{ChannelObserver, ConsoleObserver, ObservedRecord};
    pub use crate::{global, init_global};
}

pub use crate::core::{
    Facade, FacadeBuilder, FacadeConfig, FacadeError, FacadeMetrics, LogRecord, Observer,
    ObserverRegistry, Origin, Payload, Registration, Result, Severity, ThresholdGuard,
    UNKNOWN_FUNCTION,
};
pub use observers::{ChannelObserver, ConsoleObserver, ObservedRecord};

static GLOBAL: OnceLock<Facade> = OnceLock::new();

/// The process-wide facade, created with the default configuration on
/// first use
pub fn global() -> &'static Facade {
    GLOBAL.get_or_init(Facade::new)
}

/// Create the process-wide facade from `config`.
///
/// Fails with [`FacadeError::AlreadyInitialized`] once [`global`] or a
/// previous initialization has created it.
pub fn init_global(config: FacadeConfig) -> Result<&'static Facade> {
    config.validate()?;
    install_global(Facade::with_config(config))
}

/// Install a fully built facade, e.g. one with a custom default observer,
/// as the process-wide instance
pub fn install_global(facade: Facade) -> Result<&'static Facade> {
    match GLOBAL.set(facade) {
        Ok(()) => Ok(global()),
        Err(_) => Err(FacadeError::AlreadyInitialized),
    }
}
