//! studytrack_core - types and pure logic for the studytrack learning tracker.
//!
//! Everything in this crate is free of I/O: entity types, request payloads,
//! query keys and their invalidation table, gateway contracts, and the derived
//! aggregators that turn cached collections into presentation data.

pub mod analytics;
pub mod cache;
pub mod gateway;
pub mod serde;
pub mod tracker;
