//! Service configuration.

use crate::error::{ServiceError, ServiceResult};
use contentkit_types::DEFAULT_LIST_LIMIT;
use serde::{Deserialize, Serialize};

/// Page size of batch runs when the caller gives none.
pub const DEFAULT_BATCH_PAGE_SIZE: u64 = 1000;

/// Configuration for [`ContentTypeService`](crate::ContentTypeService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// `limit` applied by `fetch_entries` when the caller sets none.
    pub default_list_limit: u64,
    /// Entries per page in batch runs.
    pub batch_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_list_limit: DEFAULT_LIST_LIMIT,
            batch_page_size: DEFAULT_BATCH_PAGE_SIZE,
        }
    }
}

impl ServiceConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero-sized pages.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.default_list_limit == 0 {
            return Err(ServiceError::InvalidConfig(
                "default_list_limit must be greater than zero".into(),
            ));
        }
        if self.batch_page_size == 0 {
            return Err(ServiceError::InvalidConfig(
                "batch_page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
