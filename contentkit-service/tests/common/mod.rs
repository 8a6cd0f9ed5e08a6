#![allow(dead_code)]

use contentkit_service::memory::InMemoryContentStore;
use contentkit_service::ContentTypeService;
use serde_json::{json, Value};
use std::sync::Arc;

pub const ABOUT: &str = "api::about.about";
pub const MOVIE: &str = "api::movie.movie";
pub const RESTAURANT: &str = "api::restaurant.restaurant";
pub const USER: &str = "plugin::users-permissions.user";

/// Three first-party types and one plugin type; restaurant and movie hold
/// one entry each.
pub fn fixture_store() -> Arc<InMemoryContentStore> {
    Arc::new(
        InMemoryContentStore::new()
            .with_content_type("api", ABOUT, Vec::new())
            .with_content_type("api", MOVIE, vec![json!({"id": 1, "title": "Heat"})])
            .with_content_type("api", RESTAURANT, vec![json!({"id": 1})])
            .with_content_type("plugin::users-permissions", USER, Vec::new()),
    )
}

pub fn service_for(store: &Arc<InMemoryContentStore>) -> ContentTypeService {
    ContentTypeService::from_store(store.clone())
}

/// `count` entries `{id: 1..=count}` under `uid`.
pub fn numbered_store(uid: &str, count: u64) -> Arc<InMemoryContentStore> {
    let entries: Vec<Value> = (1..=count).map(|id| json!({"id": id})).collect();
    Arc::new(InMemoryContentStore::new().with_content_type("api", uid, entries))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
