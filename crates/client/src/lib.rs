//! studytrack_client - sync layer and CLI client for the studytrack API.
//!
//! The [`sync`] module holds the query cache and mutation dispatcher that keep
//! views consistent with the server; [`client`] is the HTTP gateway they talk
//! through.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod sync;

pub use client::StudytrackClient;
pub use error::{ClientError, Result};
pub use session::{FileSession, MemorySession, SessionProvider};
pub use sync::{MutationDispatcher, MutationOutcome, QueryCache, QueryData, QueryState};
