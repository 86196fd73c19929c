//! Cache keys and the invalidation contract between writes and cached reads.

mod invalidation;
mod keys;

pub use invalidation::Mutation;
pub use keys::QueryKey;
