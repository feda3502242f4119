//! C8: the search driver. Ties every other component together into
//! the one public entry point the rest of the workspace calls: resolve
//! both endpoints, seed the bidirectional search, run rounds under the
//! global deadline, and hand the winner to the path reconstructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, instrument};
use wikipath_base::{Node, Profile, SupportedLang, Transition};

use crate::frontier::Frontier;
use crate::prober;
use crate::reconstruct;
use crate::scheduler;
use crate::scorer::Targets;
use crate::state::SearchState;
use crate::transport::WikiTransport;

/// The result of a completed search. `path` is empty and `transitions` is
/// empty when no path was found within the deadline -- the caller tells
/// that apart from the trivial `from == to` case by checking `path.len()`.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Vec<Node>,
    pub transitions: Vec<Transition>,
    pub request_count: u64,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Runs one bidirectional search from `raw_from` to `raw_to`. `default_lang`
/// is the prober's fallback when neither candidate language resolves;
/// `profile` governs round size, batching, and every deadline.
#[instrument(skip(transport, profile), fields(from = raw_from, to = raw_to))]
pub async fn search(
    transport: Arc<dyn WikiTransport>,
    raw_from: &str,
    raw_to: &str,
    default_lang: SupportedLang,
    profile: Profile,
) -> SearchOutcome {
    let started = Instant::now();

    let ((start_lang, start_title), (end_lang, end_title)) = tokio::join!(
        prober::resolve(&transport, raw_from, default_lang, &profile),
        prober::resolve(&transport, raw_to, default_lang, &profile),
    );

    let start_node = Node::new(start_lang, start_title.clone());
    let end_node = Node::new(end_lang, end_title.clone());

    if start_node == end_node {
        info!("start and end resolved to the same node, trivial path");
        return SearchOutcome {
            path: vec![start_node],
            transitions: Vec::new(),
            request_count: 0,
            elapsed: started.elapsed(),
        };
    }

    let state = Arc::new(SearchState::new());
    state.visited_f.seed_root(start_node.key());
    state.visited_b.seed_root(end_node.key());

    let targets = Targets::new(start_lang, &start_title, end_lang, &end_title);

    let mut frontier_f = Frontier::new();
    frontier_f.push(Node::with_priority(start_lang, start_title, 0));
    let mut frontier_b = Frontier::new();
    frontier_b.push(Node::with_priority(end_lang, end_title, 0));

    let rounds = async {
        loop {
            if state.is_found() {
                break;
            }
            let did_work = scheduler::run_round(&state, &transport, &mut frontier_f, &mut frontier_b, &targets, &profile).await;
            if !did_work {
                break;
            }
        }
    };

    // The global deadline bounds the whole round loop, not any single
    // request; per-request timeouts are enforced inside the scheduler's
    // batches.
    if tokio::time::timeout(profile.global_deadline, rounds).await.is_err() {
        info!("search exceeded its global deadline");
    }

    let outcome = match reconstruct::reconstruct(&state) {
        Some(path) => {
            let transitions = path.windows(2).map(|w| Transition::classify(&w[0], &w[1])).collect();
            SearchOutcome { path, transitions, request_count: state.request_count(), elapsed: started.elapsed() }
        }
        None => SearchOutcome { path: Vec::new(), transitions: Vec::new(), request_count: state.request_count(), elapsed: started.elapsed() },
    };

    info!(requests = outcome.request_count, found = outcome.found(), "search complete");
    outcome
}
