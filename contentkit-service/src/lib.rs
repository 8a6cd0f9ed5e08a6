//! Traversal and batch processing over a host's content types.
//!
//! The host supplies two collaborators:
//! - a [`ContentRegistry`] that enumerates content-type uids by partition,
//! - a [`QueryEngine`] that lists, fetches and counts entries.
//!
//! [`ContentTypeService`] builds on them:
//!
//! - **Directory**: list and validate uids against the live registry
//! - **Entries**: list and fetch entries with default query options
//! - **Counting**: per-type and aggregate counts
//! - **Batches**: run a callback over every entry of a type, page by page,
//!   and flatten what it returns
//!
//! Unknown uids never fail: they yield empty lists, empty records and zero
//! counts without reaching the query engine. Engine and callback errors are
//! returned unchanged.
//!
//! # Example
//!
//! ```
//! use contentkit_service::memory::InMemoryContentStore;
//! use contentkit_service::{ContentTypeService, ServiceError};
//! use contentkit_types::BatchOutput;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryContentStore::new().with_content_type(
//!     "api",
//!     "api::restaurant.restaurant",
//!     vec![json!({"id": 1}), json!({"id": 2})],
//! );
//! let service = ContentTypeService::from_store(Arc::new(store));
//!
//! let ids = service
//!     .run_in_batches("api::restaurant.restaurant", |batch| {
//!         Ok::<_, ServiceError>(batch.entries.iter().filter_map(|e| e.get_i64("/id")).collect::<BatchOutput<_>>())
//!     })
//!     .await?;
//! assert_eq!(ids, vec![1, 2]);
//! # Ok::<(), ServiceError>(())
//! # }).unwrap();
//! ```

mod batch;
mod config;
mod counting;
mod directory;
mod entries;
mod error;
pub mod memory;
mod query;
mod registry;
mod service;

pub use batch::BatchOptions;
pub use config::{ServiceConfig, DEFAULT_BATCH_PAGE_SIZE};
pub use error::{ServiceError, ServiceResult};
pub use query::QueryEngine;
pub use registry::{ContentRegistry, ContentTypeMap, RegistryPartitions};
pub use service::ContentTypeService;
