//! Opaque payload carried alongside a log message

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Arbitrary value attached to a record by the caller.
///
/// `Payload::None` is the explicit "nothing attached" marker. Any attached
/// value, including an empty string or zero, is a `Payload::Value`, so
/// observers never confuse the two.
///
/// # Example
///
/// ```
/// use rust_log_facade::Payload;
///
/// let payload = Payload::new(123_i32);
/// assert_eq!(payload.downcast_ref::<i32>(), Some(&123));
/// assert!(payload.downcast_ref::<String>().is_none());
///
/// assert!(Payload::None.is_none());
/// assert!(Payload::new(String::new()).is_some());
/// ```
#[derive(Clone, Default)]
pub enum Payload {
    #[default]
    None,
    Value(Arc<dyn Any + Send + Sync>),
}

impl Payload {
    /// Wrap a value as a payload
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Payload::Value(Arc::new(value))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// True when a value of type `T` is attached
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrow the attached value as `T`, if that is its type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Payload::None => None,
            Payload::Value(value) => {
                let value: &(dyn Any + Send + Sync) = &**value;
                value.downcast_ref::<T>()
            }
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => f.write_str("Payload::None"),
            Payload::Value(_) => f.write_str("Payload::Value(..)"),
        }
    }
}
