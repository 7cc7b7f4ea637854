//! Core facade types and traits

pub mod config;
pub mod error;
pub mod facade;
pub mod guard;
pub mod log_record;
pub mod metrics;
pub mod observer;
pub mod origin;
pub mod payload;
pub mod registry;
pub mod severity;

pub use config::FacadeConfig;
pub use error::{FacadeError, Result};
pub use facade::{Facade, FacadeBuilder};
pub use guard::{Registration, ThresholdGuard};
pub use log_record::LogRecord;
pub use metrics::FacadeMetrics;
pub use observer::Observer;
pub use origin::{Origin, UNKNOWN_FUNCTION};
pub use payload::Payload;
pub use registry::ObserverRegistry;
pub use severity::Severity;
