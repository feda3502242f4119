//! wikipath_engine
//!
//! The bidirectional greedy best-first search engine (C1-C8): a
//! MediaWiki wire client behind a swappable transport, a language prober,
//! a heuristic scorer, per-direction frontiers and visited maps, the round
//! scheduler that doubles as the meeting detector, a path reconstructor,
//! and the [`driver::search`] entry point that wires them all together.

pub mod client;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod prober;
pub mod reconstruct;
pub mod scheduler;
pub mod scorer;
pub mod state;
pub mod transport;
pub mod visited;

#[cfg(test)]
pub(crate) mod testutil;

pub use driver::{search, SearchOutcome};
pub use error::ClientError;
pub use transport::{HttpTransport, WikiTransport};
