//! The shared mutable state of one search ("Search state"): the two
//! visited maps, the single `found` slot, the meeting node, the request
//! counter, and the cancellation signal that C6 fires the moment a
//! meeting is claimed.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use wikipath_base::Node;

use crate::visited::VisitedMap;

pub struct SearchState {
    pub visited_f: VisitedMap,
    pub visited_b: VisitedMap,
    found: AtomicBool,
    meeting: Mutex<Option<Node>>,
    request_counter: AtomicU64,
    cancel: CancellationToken,
}

impl SearchState {
    pub fn new() -> Self {
        SearchState {
            visited_f: VisitedMap::new(),
            visited_b: VisitedMap::new(),
            found: AtomicBool::new(false),
            meeting: Mutex::new(None),
            request_counter: AtomicU64::new(0),
            cancel: CancellationToken::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }

    /// Attempts to claim the single "found" slot. Returns `true` exactly
    /// once across the whole search -- the winner (invariant 1).
    pub fn try_claim(&self) -> bool {
        self.found.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok()
    }

    pub fn set_meeting(&self, node: Node) {
        *self.meeting.lock().unwrap() = Some(node);
    }

    pub fn meeting_node(&self) -> Option<Node> {
        self.meeting.lock().unwrap().clone()
    }

    pub fn bump_requests(&self) {
        self.request_counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> u64 {
        self.request_counter.load(Ordering::SeqCst)
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
