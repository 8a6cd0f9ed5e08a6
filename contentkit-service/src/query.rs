//! Query engine abstraction.
//!
//! Defines the read contract the host's storage must satisfy. The service
//! forwards to it and returns whatever it produces, errors included.

use crate::error::ServiceResult;
use async_trait::async_trait;
use contentkit_types::{CountOptions, Entry, EntryId, FindOneOptions, QueryOptions, TypeUid};

/// Paginated read access to the entries of each content type.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Lists entries of `uid` according to the complete `options`.
    async fn find_many(&self, uid: &TypeUid, options: &QueryOptions) -> ServiceResult<Vec<Entry>>;

    /// Fetches one entry of `uid` by id.
    async fn find_one(
        &self,
        uid: &TypeUid,
        id: &EntryId,
        options: &FindOneOptions,
    ) -> ServiceResult<Entry>;

    /// Counts the entries of `uid` that `find_many` would list with the same
    /// filters and publication state (`{}` filters match everything).
    async fn count(&self, uid: &TypeUid, options: &CountOptions) -> ServiceResult<u64>;
}
