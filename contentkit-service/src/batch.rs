//! Batch runs: stream every entry of a content type through a callback,
//! one page at a time.
//!
//! Pages are fetched strictly in sequence. Page N+1 is requested only after
//! the callback for page N has completed, so at most one page of entries is
//! held at once besides the accumulated output.
//!
//! A run stops at the first of:
//! - the offset reaching the count taken at the start of the run,
//! - an empty page,
//! - a page shorter than the page size.
//!
//! The last two also end runs over types that shrank after being counted.

use crate::error::ServiceError;
use crate::service::ContentTypeService;
use contentkit_types::{Batch, BatchOutput, CountOptions, ListOptions, TypeUid};
use std::future::{self, Future};
use tracing::{debug, info, warn};

/// Per-run overrides for batch runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOptions {
    /// Entries per page; the configured `batch_page_size` when unset.
    pub page_size: Option<u64>,
    /// Listing options for every page. `start` and `limit` are driven by the
    /// run and ignored here; `filters` and `publication_state` also apply to
    /// the initial count.
    pub query: ListOptions,
}

impl BatchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: ListOptions) -> Self {
        self.query = query;
        self
    }
}

impl ContentTypeService {
    /// Runs `callback` over every entry of `uid` in pages of the configured
    /// size and returns the concatenated callback outputs.
    ///
    /// The callback sees each page once, as a [`Batch`]. Its error is
    /// returned unchanged and discards whatever was accumulated.
    pub async fn run_in_batches<T, E, F>(&self, uid: &str, callback: F) -> Result<Vec<T>, E>
    where
        F: FnMut(Batch) -> Result<BatchOutput<T>, E>,
        E: From<ServiceError>,
    {
        self.run_in_batches_with(uid, BatchOptions::default(), callback)
            .await
    }

    /// [`run_in_batches`](Self::run_in_batches) with per-run options.
    pub async fn run_in_batches_with<T, E, F>(
        &self,
        uid: &str,
        options: BatchOptions,
        mut callback: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(Batch) -> Result<BatchOutput<T>, E>,
        E: From<ServiceError>,
    {
        self.run_in_batches_async_with(uid, options, |batch| future::ready(callback(batch)))
            .await
    }

    /// [`run_in_batches`](Self::run_in_batches) with an async callback.
    pub async fn run_in_batches_async<T, E, F, Fut>(
        &self,
        uid: &str,
        callback: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(Batch) -> Fut,
        Fut: Future<Output = Result<BatchOutput<T>, E>>,
        E: From<ServiceError>,
    {
        self.run_in_batches_async_with(uid, BatchOptions::default(), callback)
            .await
    }

    /// Async callback and per-run options.
    pub async fn run_in_batches_async_with<T, E, F, Fut>(
        &self,
        uid: &str,
        options: BatchOptions,
        mut callback: F,
    ) -> Result<Vec<T>, E>
    where
        F: FnMut(Batch) -> Fut,
        Fut: Future<Output = Result<BatchOutput<T>, E>>,
        E: From<ServiceError>,
    {
        let page_size = options.page_size.unwrap_or(self.config.batch_page_size);
        if page_size == 0 {
            return Err(ServiceError::InvalidPageSize.into());
        }

        let total = self
            .count_entries_with(uid, &CountOptions::from(&options.query))
            .await?;
        debug!(uid, total, page_size, "batch run started");

        let content_type = TypeUid::new(uid);
        let mut output = Vec::new();
        let mut offset = 0u64;
        let mut pages = 0u64;

        while offset < total {
            let page_options = ListOptions {
                start: Some(offset),
                limit: Some(page_size),
                ..options.query.clone()
            };
            let entries = self.fetch_entries(uid, &page_options).await?;
            let fetched = entries.len() as u64;
            if fetched == 0 {
                warn!(uid, offset, total, "empty page before counted total, stopping");
                break;
            }

            pages += 1;
            let produced = callback(Batch {
                entries,
                content_type: content_type.clone(),
            })
            .await?;
            debug!(uid, page = pages, fetched, produced = produced.len(), "batch processed");
            produced.append_to(&mut output);

            if fetched < page_size {
                if offset.saturating_add(fetched) < total {
                    warn!(uid, offset, fetched, total, "short page before counted total, stopping");
                }
                break;
            }
            offset = offset.saturating_add(page_size);
        }

        info!(uid, pages, items = output.len(), "batch run finished");
        Ok(output)
    }
}
