use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Arena-style table: id → record, with the id counter owned by the table.
/// Ids are assigned sequentially from 1 and never reused, so they are
/// strictly increasing in creation order.
///
/// One mutex guards both the counter and the map; every public method takes
/// it exactly once.
pub struct Table<T> {
    inner: Mutex<Inner<T>>,
}

struct Inner<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // A panic mid-call can't leave a row half-written (each call is one
        // map operation), so a poisoned lock is safe to recover.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a record built from the next id. The builder sees the id the
    /// record will be stored under.
    pub fn insert(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.lock().rows.get(&id).cloned()
    }

    /// All rows in id order (== creation order). Callers re-sort as needed.
    pub fn all(&self) -> Vec<T> {
        self.lock().rows.values().cloned().collect()
    }

    /// Apply a mutation to the row if it exists and return the merged
    /// result. `None` when the id is absent.
    pub fn update(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.lock();
        let row = inner.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Idempotent: removing an absent id is a no-op.
    pub fn remove(&self, id: i64) {
        self.lock().rows.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
