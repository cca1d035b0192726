#![allow(dead_code)]
use saam_sdk::{api::Document, saam_sdk_test::MockArtworkApi, SaamError};
use saam_store::ArtworkStore;
use serde_json::{json, Value};
use std::sync::{Arc, Once};

pub const LOCATION_ID: &str = "loc-1f-west";

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn store_with_mock() -> (ArtworkStore, Arc<MockArtworkApi>) {
    init_tracing();
    let api = Arc::new(MockArtworkApi::new());
    (ArtworkStore::new(api.clone()), api)
}

pub fn server_error() -> SaamError {
    SaamError::StatusCode(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        "upstream error".to_string(),
    )
}

fn artwork_json(id: &str) -> Value {
    json!({
        "id": id,
        "type": "artwork",
        "attributes": { "title": format!("Artwork {id}"), "object_number": format!("no-{id}") },
        "relationships": {
            "locations": { "data": [{ "type": "location", "id": LOCATION_ID }] },
            "audio": { "data": [{ "type": "audio", "id": "audio-1" }] }
        }
    })
}

fn location_json() -> Value {
    json!({ "id": LOCATION_ID, "type": "location", "attributes": { "title": "1st Floor, West" } })
}

fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn artwork_document(id: &str) -> Document {
    document(json!({ "data": [artwork_json(id)], "included": [location_json()] }))
}

pub fn artwork_without_location_document(id: &str) -> Document {
    document(json!({
        "data": [{ "id": id, "type": "artwork", "attributes": { "title": "Unplaced" } }]
    }))
}

pub fn empty_document() -> Document {
    document(json!({ "data": [] }))
}

pub fn nearby_document(ids: &[&str]) -> Document {
    let data: Vec<Value> = ids.iter().map(|id| artwork_json(id)).collect();
    document(json!({ "data": data, "included": [location_json()] }))
}

pub fn audio_document() -> Document {
    document(json!({
        "data": { "id": "audio-1", "type": "audio", "attributes": { "title": "Gallery guide" } },
        "included": [
            { "id": "f-1", "type": "file", "attributes": { "filemime": "audio/mpeg" } },
            { "id": "f-2", "type": "file", "attributes": { "filemime": "audio/mp4" } },
            { "id": "f-3", "type": "file", "attributes": { "filemime": "audio/ogg" } }
        ]
    }))
}
