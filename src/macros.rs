//! Logging macros that capture the call site.
//!
//! Each severity macro formats its message like `format!`, fills in the
//! [`Origin`](crate::Origin) of the invocation, and forwards to
//! [`Facade::emit`](crate::Facade::emit). A tag and a payload may be given
//! before the format string, in either order; omitted ones default to the
//! empty tag and [`Payload::None`](crate::Payload::None).
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{debug, error, info};
//!
//! let facade = Facade::builder()
//!     .threshold(Severity::Debug)
//!     .default_observer_enabled(false)
//!     .build();
//!
//! // Basic logging
//! info!(facade, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(facade, "Server listening on port {}", port);
//!
//! // Tagged, and with a payload
//! debug!(facade, tag: "NET", "Accepted connection from {}", "10.0.0.7");
//! error!(facade, tag: "DB", payload: 503_u16, "Query failed");
//! ```

/// Name of the enclosing function, as a `&'static str` path.
///
/// Closures are reported as the function that contains them.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let mut name = __type_name_of(__here);
        name = name.strip_suffix("::__here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

/// [`Origin`](crate::Origin) of the macro invocation.
///
/// # Examples
///
/// ```
/// use rust_log_facade::origin;
///
/// fn handler() -> rust_log_facade::Origin {
///     origin!()
/// }
///
/// let origin = handler();
/// assert!(origin.function.ends_with("handler"));
/// assert_eq!(origin.file, file!());
/// ```
#[macro_export]
macro_rules! origin {
    () => {
        $crate::Origin::new(
            ::std::file!(),
            $crate::function_name!(),
            ::std::line!(),
            ::std::column!(),
        )
    };
}

/// Log a message at an explicit severity.
///
/// Optional `tag:` and `payload:` prefixes go before the format string, in
/// either order.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let facade = Facade::builder().default_observer_enabled(false).build();
/// use rust_log_facade::log;
/// log!(facade, Severity::Info, "Simple message");
/// log!(facade, Severity::Error, tag: "HTTP", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($facade:expr, $severity:expr, tag: $tag:expr, payload: $payload:expr, $($arg:tt)+) => {
        $facade.emit(
            ::std::format!($($arg)+),
            $severity,
            ::core::convert::AsRef::<str>::as_ref(&$tag),
            $crate::Payload::new($payload),
            $crate::origin!(),
        )
    };
    ($facade:expr, $severity:expr, payload: $payload:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!($facade, $severity, tag: $tag, payload: $payload, $($arg)+)
    };
    ($facade:expr, $severity:expr, tag: $tag:expr, $($arg:tt)+) => {
        $facade.emit(
            ::std::format!($($arg)+),
            $severity,
            ::core::convert::AsRef::<str>::as_ref(&$tag),
            $crate::Payload::None,
            $crate::origin!(),
        )
    };
    ($facade:expr, $severity:expr, payload: $payload:expr, $($arg:tt)+) => {
        $facade.emit(
            ::std::format!($($arg)+),
            $severity,
            "",
            $crate::Payload::new($payload),
            $crate::origin!(),
        )
    };
    ($facade:expr, $severity:expr, $($arg:tt)+) => {
        $facade.emit(
            ::std::format!($($arg)+),
            $severity,
            "",
            $crate::Payload::None,
            $crate::origin!(),
        )
    };
}

/// Log a verbose-level message.
///
/// Accepts the same `tag:` / `payload:` prefixes as [`log!`](crate::log).
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let facade = Facade::builder().threshold(Severity::Verbose).default_observer_enabled(false).build();
/// use rust_log_facade::verbose;
/// verbose!(facade, "Entering function: calculate()");
/// verbose!(facade, tag: "MATH", "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! verbose {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// Accepts the same `tag:` / `payload:` prefixes as [`log!`](crate::log).
#[macro_export]
macro_rules! debug {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// Accepts the same `tag:` / `payload:` prefixes as [`log!`](crate::log).
#[macro_export]
macro_rules! info {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// Accepts the same `tag:` / `payload:` prefixes as [`log!`](crate::log).
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let facade = Facade::builder().default_observer_enabled(false).build();
/// use rust_log_facade::warning;
/// warning!(facade, "Low disk space");
/// warning!(facade, tag: "RETRY", "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// Accepts the same `tag:` / `payload:` prefixes as [`log!`](crate::log).
#[macro_export]
macro_rules! error {
    ($facade:expr, $($arg:tt)+) => {
        $crate::log!($facade, $crate::Severity::Error, $($arg)+)
    };
}
