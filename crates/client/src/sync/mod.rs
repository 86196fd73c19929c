//! Client-side sync layer.
//!
//! [`QueryCache`] mirrors server data per [`QueryKey`](studytrack_core::cache::QueryKey),
//! deduplicating concurrent reads. [`MutationDispatcher`] performs writes and
//! tells the cache which keys went stale. Both are explicit instances created
//! by the caller and shared by cloning.

mod fetch;
mod mutation;
mod query_cache;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use mutation::{MutationDispatcher, MutationOutcome};
pub use query_cache::QueryCache;
pub use state::{QueryData, QueryState};
