//! Ordered observer registry with identity semantics
//!
//! Observers are compared by allocation, never by value: two `Arc`s refer to
//! the same observer only if they point at the same instance. Registering an
//! instance twice yields two entries; unregistering removes all of them.

use super::observer::Observer;
use std::fmt;
use std::sync::Arc;

/// True when both `Arc`s point at the same allocation.
///
/// Only the data pointer is compared; vtable pointers for the same type may
/// differ between codegen units.
#[inline]
pub(crate) fn same_instance<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

#[derive(Default, Clone)]
pub struct ObserverRegistry {
    entries: Vec<Arc<dyn Observer>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; duplicates are kept as separate entries
    pub fn register(&mut self, observer: Arc<dyn Observer>) {
        self.entries.push(observer);
    }

    /// Remove every entry that is `observer`, returning how many were removed
    pub fn unregister<O: Observer + ?Sized>(&mut self, observer: &Arc<O>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !same_instance(entry, observer));
        before - self.entries.len()
    }

    /// Remove only the most recent entry for `observer`
    pub(crate) fn unregister_last<O: Observer + ?Sized>(&mut self, observer: &Arc<O>) -> bool {
        match self
            .entries
            .iter()
            .rposition(|entry| same_instance(entry, observer))
        {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.entries.iter().any(|entry| same_instance(entry, observer))
    }

    /// Number of entries for `observer`
    pub fn count_of<O: Observer + ?Sized>(&self, observer: &Arc<O>) -> usize {
        self.entries
            .iter()
            .filter(|entry| same_instance(entry, observer))
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Registration-ordered copy of the entries, used for dispatch
    pub fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Observer>> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|o| o.name().to_string()).collect()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.names())
            .finish()
    }
}
