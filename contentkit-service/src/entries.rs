//! Entry access with default option merging.

use crate::error::ServiceResult;
use crate::service::ContentTypeService;
use contentkit_types::{Entry, EntryId, EntryOptions, FindOneOptions, ListOptions, QueryOptions};
use tracing::debug;

impl ContentTypeService {
    /// Listing defaults: `fields="*"`, `start=0`, the configured limit,
    /// empty `filters` and `sort`, `populate="*"`, `live` entries.
    pub fn list_defaults(&self) -> QueryOptions {
        QueryOptions::with_limit(self.config.default_list_limit)
    }

    /// Lists entries of `uid`.
    ///
    /// Unknown uids return an empty list without touching the query engine.
    /// Otherwise exactly one `find_many` is issued with `options` merged over
    /// [`list_defaults`](Self::list_defaults), and its result is returned as is.
    pub async fn fetch_entries(&self, uid: &str, options: &ListOptions) -> ServiceResult<Vec<Entry>> {
        let Some(uid) = self.resolve_type_uid(uid) else {
            debug!(uid, "unknown content type, no entries fetched");
            return Ok(Vec::new());
        };
        let merged = options.merge_over(self.list_defaults());
        debug!(uid = %uid, start = merged.start, limit = merged.limit, "find_many");
        self.engine.find_many(&uid, &merged).await
    }

    /// Fetches one entry of `uid` by id.
    ///
    /// Unknown uids return [`Entry::empty`] without touching the query engine.
    pub async fn fetch_entry(
        &self,
        uid: &str,
        id: impl Into<EntryId>,
        options: &EntryOptions,
    ) -> ServiceResult<Entry> {
        let Some(uid) = self.resolve_type_uid(uid) else {
            debug!(uid, "unknown content type, no entry fetched");
            return Ok(Entry::empty());
        };
        let id = id.into();
        let merged = options.merge_over(FindOneOptions::default());
        debug!(uid = %uid, id = %id, "find_one");
        self.engine.find_one(&uid, &id, &merged).await
    }
}
