//! C7: the path reconstructor. A meeting node sits in *both* visited
//! maps once C6 has claimed it: its forward parent (written by the claim
//! itself) and its backward parent (written when the backward side
//! originally discovered it). Walking each map's parent chain back to its
//! root sentinel and splicing the two walks together is the whole
//! algorithm; no graph beyond the two visited maps is ever consulted.

use wikipath_base::Node;

use crate::state::SearchState;

/// Walks `start`'s parent chain in `map` up to the root sentinel,
/// returning nodes in walk order (`start` first, root last).
fn walk_to_root(map: &crate::visited::VisitedMap, start: &Node) -> Vec<Node> {
    let mut chain = vec![start.clone()];
    let mut key = start.key();
    while let Some(Some(parent)) = map.parent_of(&key) {
        key = parent.key();
        chain.push(parent);
    }
    chain
}

/// Reconstructs the full start-to-end path, or `None` if no meeting has
/// been claimed yet (the search hasn't found a path, or hasn't finished).
pub fn reconstruct(state: &SearchState) -> Option<Vec<Node>> {
    let meeting = state.meeting_node()?;

    let mut forward_chain = walk_to_root(&state.visited_f, &meeting);
    forward_chain.reverse(); // start .. meeting

    let backward_chain = walk_to_root(&state.visited_b, &meeting); // meeting .. end

    forward_chain.extend(backward_chain.into_iter().skip(1));
    Some(forward_chain)
}
