//! C5 (round scheduler) + C6 (meeting detector). One round drains
//! both directions' frontiers, groups each into per-language batches,
//! dispatches them concurrently, and -- for every successor a batch comes
//! back with -- runs the meeting check *before* attempting the own-side
//! insert, which is what makes a meeting impossible to miss (design
//! note: "meeting-before-insert").

use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;
use wikipath_base::{Direction, HeuristicWeights, Node, Profile, SupportedLang};

use crate::client;
use crate::frontier::Frontier;
use crate::scorer::{self, Targets};
use crate::state::SearchState;
use crate::transport::WikiTransport;

/// One batched query and its answer, kept paired with the language it was
/// issued against (the response itself, `Page`, carries no language).
async fn run_batch(
    transport: Arc<dyn WikiTransport>,
    lang: SupportedLang,
    direction: Direction,
    titles: Vec<String>,
    timeout: std::time::Duration,
    cancel: tokio_util::sync::CancellationToken,
    state: Arc<SearchState>,
) -> (SupportedLang, Vec<wikipath_base::Page>) {
    tokio::select! {
        _ = cancel.cancelled() => (lang, Vec::new()),
        result = client::expand(&transport, &titles, lang, direction, timeout) => {
            match result {
                Ok(pages) => {
                    state.bump_requests();
                    (lang, pages)
                }
                Err(_) => (lang, Vec::new()),
            }
        }
    }
}

/// Runs one direction's half of a round: dispatches `drained`'s pages in
/// language batches of at most `batch_size`, then folds every returned
/// page's neighbours/lang-links into successors for the next round,
/// running the meeting check on each one first.
#[instrument(skip_all, fields(direction = ?direction, drained = drained.len()))]
async fn run_direction(
    state: &Arc<SearchState>,
    transport: &Arc<dyn WikiTransport>,
    direction: Direction,
    drained: Vec<Node>,
    targets: &Targets,
    weights: &HeuristicWeights,
    batch_size: usize,
    per_request_timeout: std::time::Duration,
) -> Vec<Node> {
    if drained.is_empty() {
        return Vec::new();
    }

    let mut by_lang: HashMap<SupportedLang, Vec<String>> = HashMap::new();
    for node in &drained {
        by_lang.entry(node.lang).or_default().push(node.title.clone());
    }

    let mut tasks = Vec::new();
    for (lang, titles) in by_lang {
        for chunk in titles.chunks(batch_size) {
            tasks.push(run_batch(
                transport.clone(),
                lang,
                direction,
                chunk.to_vec(),
                per_request_timeout,
                state.cancel_token(),
                state.clone(),
            ));
        }
    }

    let results = futures::future::join_all(tasks).await;

    let (own, opposite) = match direction {
        Direction::Forward => (&state.visited_f, &state.visited_b),
        Direction::Backward => (&state.visited_b, &state.visited_f),
    };

    let mut successors = Vec::new();
    for (lang, pages) in results {
        for page in pages {
            if state.is_found() {
                break;
            }
            let parent = Node::new(lang, page.canonical_title.clone());

            let mut candidates: Vec<Node> = Vec::with_capacity(page.neighbours.len() + page.lang_links.len());
            candidates.extend(page.neighbours.iter().map(|title| Node::new(lang, title.clone())));
            candidates.extend(page.lang_links.iter().map(|(llang, title)| Node::new(*llang, title.clone())));

            for candidate in candidates {
                if state.is_found() {
                    break;
                }
                let key = candidate.key();

                if opposite.contains(&key) {
                    // Meeting check first: claim before anyone attempts
                    // the ordinary own-side insert for this key.
                    if state.try_claim() {
                        own.force_set(key, parent.clone());
                        state.set_meeting(candidate);
                        state.cancel_token().cancel();
                    }
                    // A lost race or a late duplicate: the search is over
                    // either way, nothing left to enqueue.
                    continue;
                }

                let priority = scorer::score(&candidate.title, candidate.lang, direction, targets, weights);
                let scored = Node::with_priority(candidate.lang, candidate.title.clone(), priority);
                if own.insert_if_absent(key, parent.clone()) {
                    successors.push(scored);
                }
            }
        }
    }
    successors
}

/// Runs one full round (steps 1-5): drains up to `max_per_round`
/// nodes from each frontier, expands both directions concurrently, and
/// pushes the fresh successors back. Returns `true` iff the round did any
/// work at all (either side had something to drain) -- callers use this
/// together with `state.is_found()` to decide whether to keep looping.
pub async fn run_round(
    state: &Arc<SearchState>,
    transport: &Arc<dyn WikiTransport>,
    frontier_f: &mut Frontier,
    frontier_b: &mut Frontier,
    targets: &Targets,
    profile: &Profile,
) -> bool {
    let drained_f = frontier_f.drain_top(profile.max_per_round);
    let drained_b = frontier_b.drain_top(profile.max_per_round);
    let had_work = !drained_f.is_empty() || !drained_b.is_empty();
    if !had_work {
        return false;
    }

    let (succ_f, succ_b) = tokio::join!(
        run_direction(state, transport, Direction::Forward, drained_f, targets, &profile.weights, profile.batch_size, profile.per_request_timeout),
        run_direction(state, transport, Direction::Backward, drained_b, targets, &profile.weights, profile.batch_size, profile.per_request_timeout),
    );

    for node in succ_f {
        frontier_f.push(node);
    }
    for node in succ_b {
        frontier_b.push(node);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FixtureTransport;
    use wikipath_base::Profile as WpProfile;

    fn targets() -> Targets {
        Targets::new(SupportedLang::En, "Berlin", SupportedLang::En, "Paris")
    }

    #[tokio::test]
    async fn meeting_is_detected_when_frontiers_overlap() {
        // Forward expands "Berlin" -> "Paris"; backward already has
        // "Paris" seeded as its root. The forward successor "Paris"
        // should trigger a claim against the backward visited map.
        let state = Arc::new(SearchState::new());
        state.visited_f.seed_root("en:berlin".to_string());
        state.visited_b.seed_root("en:paris".to_string());

        let fixture = FixtureTransport::new().with_fixture(
            "https://en.wikipedia.org/w/api.php",
            crate::testutil::Tag::Forward,
            "Berlin",
            serde_json::json!({"query": {"pages": [{"title": "Berlin", "links": [{"title": "Paris"}]}]}}),
        );
        let transport: Arc<dyn WikiTransport> = Arc::new(fixture);

        let mut frontier_f = Frontier::new();
        frontier_f.push(Node::with_priority(SupportedLang::En, "Berlin", 0));
        let mut frontier_b = Frontier::new();

        let profile = WpProfile::aggressive();
        let targets = targets();
        let did_work = run_round(&state, &transport, &mut frontier_f, &mut frontier_b, &targets, &profile).await;

        assert!(did_work);
        assert!(state.is_found());
        let meeting = state.meeting_node().expect("meeting node must be set");
        assert_eq!(meeting.title, "Paris");
        assert_eq!(state.visited_f.parent_of("en:paris").unwrap().unwrap().title, "Berlin");
    }

    #[tokio::test]
    async fn no_overlap_yields_no_meeting_and_populates_both_frontiers() {
        let state = Arc::new(SearchState::new());
        state.visited_f.seed_root("en:berlin".to_string());
        state.visited_b.seed_root("en:paris".to_string());

        let fixture = FixtureTransport::new()
            .with_fixture(
                "https://en.wikipedia.org/w/api.php",
                crate::testutil::Tag::Forward,
                "Berlin",
                serde_json::json!({"query": {"pages": [{"title": "Berlin", "links": [{"title": "Germany"}]}]}}),
            )
            .with_fixture(
                "https://en.wikipedia.org/w/api.php",
                crate::testutil::Tag::Backward,
                "Paris",
                serde_json::json!({"query": {"pages": [{"title": "Paris", "linkshere": [{"title": "France"}]}]}}),
            );
        let transport: Arc<dyn WikiTransport> = Arc::new(fixture);

        let mut frontier_f = Frontier::new();
        frontier_f.push(Node::with_priority(SupportedLang::En, "Berlin", 0));
        let mut frontier_b = Frontier::new();
        frontier_b.push(Node::with_priority(SupportedLang::En, "Paris", 0));

        let profile = WpProfile::aggressive();
        let targets = targets();
        let did_work = run_round(&state, &transport, &mut frontier_f, &mut frontier_b, &targets, &profile).await;

        assert!(did_work);
        assert!(!state.is_found());
        assert_eq!(frontier_f.len(), 1);
        assert_eq!(frontier_b.len(), 1);
    }

    #[tokio::test]
    async fn empty_frontiers_do_no_work() {
        let state = Arc::new(SearchState::new());
        let transport: Arc<dyn WikiTransport> = Arc::new(FixtureTransport::new());
        let mut frontier_f = Frontier::new();
        let mut frontier_b = Frontier::new();
        let profile = WpProfile::aggressive();
        let targets = targets();
        let did_work = run_round(&state, &transport, &mut frontier_f, &mut frontier_b, &targets, &profile).await;
        assert!(!did_work);
    }
}
