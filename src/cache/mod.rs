//! In-memory caches in front of the repositories.
//!
//! Every cache keeps its map behind a `parking_lot::RwLock<Arc<HashMap>>`.
//! Readers clone the `Arc` and release the lock immediately; writers build a new
//! map and swap it in, so a snapshot handed out earlier never changes under
//! its reader. Locks are never held across an `.await`.

pub mod character;
pub mod server_settings;
pub mod town;
pub mod translation;

use std::{borrow::Borrow, collections::HashMap, hash::Hash, sync::Arc};

use parking_lot::RwLock;

/// Copy-on-write map shared by the caches.
pub(crate) struct SnapshotMap<K, V> {
    inner: RwLock<Arc<HashMap<K, V>>>,
}

impl<K, V> Default for SnapshotMap<K, V> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Arc::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> SnapshotMap<K, V> {
    pub fn snapshot(&self) -> Arc<HashMap<K, V>> {
        self.inner.read().clone()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().get(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn replace(&self, map: HashMap<K, V>) {
        *self.inner.write() = Arc::new(map);
    }

    /// Applies `update` to a copy of the current map and swaps the copy in.
    pub fn update<R>(&self, update: impl FnOnce(&mut HashMap<K, V>) -> R) -> R {
        let mut guard = self.inner.write();
        let mut next = HashMap::clone(&guard);
        let result = update(&mut next);
        *guard = Arc::new(next);
        result
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.update(|map| map.insert(key, value))
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.update(|map| map.remove(key))
    }

    pub fn clear(&self) {
        self.replace(HashMap::new());
    }
}
