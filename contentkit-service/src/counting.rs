//! Per-type and aggregate entry counts.

use crate::error::ServiceResult;
use crate::service::ContentTypeService;
use contentkit_types::CountOptions;
use serde_json::{Map, Value};
use tracing::debug;

impl ContentTypeService {
    /// Number of entries of `uid`; `0` for unknown uids.
    pub async fn count_entries(&self, uid: &str) -> ServiceResult<u64> {
        self.count_entries_where(uid, &Value::Object(Map::new())).await
    }

    /// Number of entries of `uid` matching `filters`; `0` for unknown uids.
    pub async fn count_entries_where(&self, uid: &str, filters: &Value) -> ServiceResult<u64> {
        self.count_entries_with(uid, &CountOptions::new().with_filters(filters.clone()))
            .await
    }

    /// Number of entries of `uid` visible under `options`; `0` for unknown
    /// uids.
    pub async fn count_entries_with(&self, uid: &str, options: &CountOptions) -> ServiceResult<u64> {
        let Some(uid) = self.resolve_type_uid(uid) else {
            debug!(uid, "unknown content type, counted as zero");
            return Ok(0);
        };
        self.engine.count(&uid, options).await
    }

    /// Sum of the entry counts of `uids`.
    ///
    /// Each uid is checked on its own: unknown ones add nothing, duplicates
    /// are counted each time they appear.
    pub async fn count_total<I, S>(&self, uids: I) -> ServiceResult<u64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.count_total_where(uids, &Value::Object(Map::new())).await
    }

    /// Sum of the filtered entry counts of `uids`.
    pub async fn count_total_where<I, S>(&self, uids: I, filters: &Value) -> ServiceResult<u64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0u64;
        for uid in uids {
            total = total.saturating_add(self.count_entries_where(uid.as_ref(), filters).await?);
        }
        Ok(total)
    }
}
