mod common;

use common::*;
use contentkit_service::memory::{InMemoryContentStore, QueryCall};
use contentkit_service::{ContentTypeService, ServiceConfig, ServiceError};
use contentkit_types::{
    Entry, EntryId, EntryOptions, FindOneOptions, ListOptions, PublicationState, QueryOptions,
    TypeUid,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use echo::EchoEngine;
use std::sync::Arc;

/// Engine that answers every call with a fixed payload, so results can be
/// checked for verbatim pass-through.
mod echo {
    use contentkit_service::{QueryEngine, ServiceResult};
    use contentkit_types::{CountOptions, Entry, EntryId, FindOneOptions, QueryOptions, TypeUid};
    use serde_json::json;

    pub struct EchoEngine;

    #[async_trait::async_trait]
    impl QueryEngine for EchoEngine {
        async fn find_many(&self, _: &TypeUid, _: &QueryOptions) -> ServiceResult<Vec<Entry>> {
            Ok(vec![Entry::new(json!({"id": 1}))])
        }

        async fn find_one(
            &self,
            _: &TypeUid,
            _: &EntryId,
            _: &FindOneOptions,
        ) -> ServiceResult<Entry> {
            Ok(Entry::new(json!([{"id": 1}])))
        }

        async fn count(&self, _: &TypeUid, _: &CountOptions) -> ServiceResult<u64> {
            Ok(1)
        }
    }
}

// ── fetch_entries ────────────────────────────────────────────────

#[tokio::test]
async fn fetch_entries_with_default_options() {
    let store = fixture_store();
    let service = service_for(&store);

    let entries = service
        .fetch_entries(RESTAURANT, &ListOptions::new())
        .await
        .unwrap();

    assert_eq!(entries, vec![Entry::new(json!({"id": 1}))]);
    let calls = store.find_many_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, TypeUid::new(RESTAURANT));
    assert_eq!(
        serde_json::to_value(&calls[0].1).unwrap(),
        json!({
            "fields": "*",
            "start": 0,
            "limit": 500,
            "filters": {},
            "sort": {},
            "populate": "*",
            "publicationState": "live",
        })
    );
}

#[tokio::test]
async fn fetch_entries_with_custom_options() {
    let store = fixture_store();
    let service = ContentTypeService::new(store.clone(), Arc::new(EchoEngine));

    let options = ListOptions::new()
        .with_fields("title")
        .with_start(1)
        .with_limit(2)
        .with_filters(json!({"where": {"title": "hello"}}))
        .with_sort("id")
        .with_populate(json!({}))
        .with_publication_state(PublicationState::Preview);
    let entries = service.fetch_entries(RESTAURANT, &options).await.unwrap();

    assert_eq!(entries, vec![Entry::new(json!({"id": 1}))]);
}

#[tokio::test]
async fn fetch_entries_forwards_exact_merged_options() {
    let store = fixture_store();
    let service = service_for(&store);

    let options = ListOptions::new()
        .with_fields("title")
        .with_start(1)
        .with_limit(2)
        .with_filters(json!({"title": "hello"}))
        .with_sort("id")
        .with_populate(json!({}))
        .with_publication_state(PublicationState::Preview);
    service.fetch_entries(MOVIE, &options).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![QueryCall::FindMany {
            uid: TypeUid::new(MOVIE),
            options: QueryOptions {
                fields: json!("title"),
                start: 1,
                limit: 2,
                filters: json!({"title": "hello"}),
                sort: json!("id"),
                populate: json!({}),
                publication_state: PublicationState::Preview,
            },
        }]
    );
}

#[tokio::test]
async fn fetch_entries_partial_options_keep_defaults() {
    let store = fixture_store();
    let service = service_for(&store);

    service
        .fetch_entries(MOVIE, &ListOptions::new().with_limit(10))
        .await
        .unwrap();

    let (_, options) = store.find_many_calls().remove(0);
    assert_eq!(options, QueryOptions::with_limit(10));
}

#[tokio::test]
async fn fetch_entries_uses_configured_limit() {
    let store = fixture_store();
    let config = ServiceConfig {
        default_list_limit: 50,
        ..ServiceConfig::default()
    };
    let service = ContentTypeService::with_config(store.clone(), store.clone(), config).unwrap();

    service.fetch_entries(MOVIE, &ListOptions::new()).await.unwrap();

    assert_eq!(store.find_many_calls()[0].1.limit, 50);
}

#[tokio::test]
async fn fetch_entries_on_unknown_type() {
    let store = fixture_store();
    let service = service_for(&store);

    let entries = service
        .fetch_entries("api::test.test", &ListOptions::new())
        .await
        .unwrap();

    assert!(entries.is_empty());
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn fetch_entries_engine_failure_propagates() {
    let store = fixture_store();
    store.fail_with("connection reset");
    let service = service_for(&store);

    let err = service
        .fetch_entries(MOVIE, &ListOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Query(ref msg) if msg == "connection reset"));
    assert_eq!(store.calls().len(), 1);
}

// ── fetch_entry ──────────────────────────────────────────────────

#[tokio::test]
async fn fetch_entry_with_default_options() {
    let store = fixture_store();
    let service = service_for(&store);

    let entry = service
        .fetch_entry(RESTAURANT, 1_i64, &EntryOptions::new())
        .await
        .unwrap();

    assert_eq!(entry, Entry::new(json!({"id": 1})));
    assert_eq!(
        store.find_one_calls(),
        vec![(
            TypeUid::new(RESTAURANT),
            EntryId::from(1_i64),
            FindOneOptions::default(),
        )]
    );
}

#[tokio::test]
async fn fetch_entry_with_custom_options() {
    let store = fixture_store();
    let service = service_for(&store);

    let options = EntryOptions::new()
        .with_fields(json!(["title"]))
        .with_populate(json!({"subClass": true}));
    service.fetch_entry(RESTAURANT, 200_i64, &options).await.unwrap();

    let (_, id, sent) = store.find_one_calls().remove(0);
    assert_eq!(id, EntryId::from(200_i64));
    assert_eq!(
        serde_json::to_value(sent).unwrap(),
        json!({"fields": ["title"], "populate": {"subClass": true}})
    );
}

#[tokio::test]
async fn fetch_entry_returns_engine_result_verbatim() {
    let service = ContentTypeService::new(fixture_store(), Arc::new(EchoEngine));
    let entry = service
        .fetch_entry(RESTAURANT, 200_i64, &EntryOptions::new())
        .await
        .unwrap();
    assert_eq!(entry, Entry::new(json!([{"id": 1}])));
}

#[tokio::test]
async fn fetch_entry_projects_fields() {
    let store = fixture_store();
    let service = service_for(&store);

    let entry = service
        .fetch_entry(MOVIE, 1_i64, &EntryOptions::new().with_fields("id"))
        .await
        .unwrap();

    assert_eq!(entry, Entry::new(json!({"id": 1})));
}

#[tokio::test]
async fn fetch_entry_on_unknown_type() {
    let store = fixture_store();
    let service = service_for(&store);

    let entry = service
        .fetch_entry("api::test.test", 1_i64, &EntryOptions::new())
        .await
        .unwrap();

    assert_eq!(entry, Entry::empty());
    assert!(store.find_one_calls().is_empty());
}

#[tokio::test]
async fn fetch_entry_missing_id_is_null() {
    let store = Arc::new(InMemoryContentStore::new().with_content_type("api", MOVIE, Vec::new()));
    let service = service_for(&store);

    let entry = service
        .fetch_entry(MOVIE, "nope", &EntryOptions::new())
        .await
        .unwrap();

    assert!(entry.is_empty());
    assert_eq!(store.find_one_calls().len(), 1);
}
