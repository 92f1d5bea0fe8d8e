//! Handle-keyed payload storage.
//!
//! [`HandleTable`] is a pure key-value store from [`Handle`] to
//! `(size, payload)`. It enforces no invariant of its own — exact
//! correspondence with the arena's live extents is the responsibility of
//! the component that owns both (the managed queue).

use std::fmt;

use indexmap::IndexMap;

use crate::handle::Handle;

/// Payload store for live allocations, keyed by [`Handle`].
///
/// One record exists per successful allocation: created when the
/// allocation succeeds, destroyed when the matching release completes.
pub struct HandleTable<V> {
    entries: IndexMap<Handle, (u32, V)>,
}

impl<V> HandleTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a record for `handle`.
    ///
    /// Returns the previous record if the handle was already present —
    /// which a correctly managed table never is.
    pub fn insert(&mut self, handle: Handle, size: u32, value: V) -> Option<(u32, V)> {
        self.entries.insert(handle, (size, value))
    }

    /// Look up the record for `handle`.
    pub fn get(&self, handle: Handle) -> Option<(u32, &V)> {
        self.entries.get(&handle).map(|(size, value)| (*size, value))
    }

    /// Remove and return the record for `handle`.
    pub fn remove(&mut self, handle: Handle) -> Option<(u32, V)> {
        self.entries.swap_remove(&handle)
    }

    /// Whether a record exists for `handle`.
    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(handle, size, payload)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, u32, &V)> {
        self.entries
            .iter()
            .map(|(&handle, (size, value))| (handle, *size, value))
    }
}

impl<V> Default for HandleTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display> fmt::Display for HandleTable<V> {
    /// Renders `[handle -> (size, value), ...]` ordered by handle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handles: Vec<Handle> = self.entries.keys().copied().collect();
        handles.sort_unstable();
        write!(f, "[")?;
        for (i, handle) in handles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let (size, value) = &self.entries[handle];
            write!(f, "{handle} -> ({size}, {value})")?;
        }
        write!(f, "]")
    }
}
