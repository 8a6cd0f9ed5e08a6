//! Core type definitions for contentkit.
//!
//! This crate defines the value types shared between the service layer and
//! the host that embeds it:
//! - Content-type identifiers ([`TypeUid`]) and entry ids ([`EntryId`])
//! - Opaque entry records ([`Entry`])
//! - Listing and single-entry query options, complete and partial
//! - Batch pages and the tagged callback result ([`BatchOutput`])
//!
//! Nothing here knows about the shape of a content type or its entries.
//! Entries are carried as JSON and passed through untouched.

mod batch;
mod entry;
mod options;
mod uid;

pub use batch::{Batch, BatchOutput};
pub use entry::{Entry, EntryId};
pub use options::{
    CountOptions, EntryOptions, FindOneOptions, ListOptions, PublicationState, QueryOptions,
    DEFAULT_LIST_LIMIT, WILDCARD,
};
pub use uid::TypeUid;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid content-type uid: {0:?}")]
    InvalidUid(String),
}
