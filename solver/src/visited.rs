//! Per-direction visited map: node-key -> parent node, or the root
//! sentinel (`None`) for the direction's start/end node. Insertion is
//! single-writer-wins: the first writer for a key fixes its parent
//! forever, which is what makes the parent graph acyclic by construction
//! (invariant 2) and is why C6's "meeting-before-insert" ordering
//! is safe. Guarded by a plain mutex rather than an async one:
//! the critical section never awaits, so there is no reason to pay for
//! an async lock here.

use std::collections::HashMap;
use std::sync::Mutex;

use wikipath_base::Node;

pub struct VisitedMap {
    inner: Mutex<HashMap<String, Option<Node>>>,
}

impl VisitedMap {
    pub fn new() -> Self {
        VisitedMap { inner: Mutex::new(HashMap::new()) }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().unwrap().contains_key(key)
    }

    pub fn parent_of(&self, key: &str) -> Option<Option<Node>> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    /// Seeds the root of this direction: `key` maps to the sentinel
    /// (absent parent). Only meaningful once, at search setup.
    pub fn seed_root(&self, key: String) {
        self.inner.lock().unwrap().entry(key).or_insert(None);
    }

    /// Inserts `key -> Some(parent)` iff `key` is absent. Returns `true`
    /// when this call performed the insert (i.e. this call "won"); a
    /// `false` means some earlier insert already fixed the parent and
    /// this one was dropped, per the single-writer-wins rule.
    pub fn insert_if_absent(&self, key: String, parent: Node) -> bool {
        use std::collections::hash_map::Entry;
        let mut guard = self.inner.lock().unwrap();
        match guard.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Some(parent));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Unconditionally writes `key -> Some(parent)`, overwriting whatever
    /// was there. Reserved for the one-time meeting claim (C6): the
    /// global `found` CAS guarantees this runs at most once per search,
    /// so it cannot reintroduce the ordinary insert race `insert_if_absent`
    /// guards against.
    pub fn force_set(&self, key: String, parent: Node) {
        self.inner.lock().unwrap().insert(key, Some(parent));
    }
}

impl Default for VisitedMap {
    fn default() -> Self {
        Self::new()
    }
}
