#![allow(dead_code)]
use saam_sdk::api::{Document, Resource};
use serde_json::{json, Value};

pub const LOCATION_ID: &str = "loc-2f-east";

/// An artwork resource linked to one image, one artist, one location and one
/// audio resource.
pub fn artwork_json(id: &str, object_number: &str) -> Value {
    json!({
        "id": id,
        "type": "artwork",
        "attributes": {
            "title": format!("Artwork {id}"),
            "object_number": object_number,
            "date": "1872",
            "medium": "oil on canvas",
            "credit_line": { "value": "Gift of the artist", "processed": "<p>Gift of the artist</p>" }
        },
        "relationships": {
            "default_image": {
                "data": { "type": "file", "id": format!("img-{id}"), "meta": { "alt": "A river at dusk" } }
            },
            "artists": {
                "data": [{ "type": "artist", "id": "artist-1" }]
            },
            "institutions": { "data": [] },
            "locations": {
                "data": [{ "type": "location", "id": LOCATION_ID }]
            },
            "videos": { "data": null },
            "audio": {
                "data": [{ "type": "audio", "id": "audio-9" }]
            }
        }
    })
}

pub fn included_json(artwork_id: &str) -> Vec<Value> {
    vec![
        json!({
            "id": format!("img-{artwork_id}"),
            "type": "file",
            "attributes": { "uri": { "value": "public://river.jpg", "url": "/files/river.jpg" } }
        }),
        json!({
            "id": "artist-1",
            "type": "artist",
            "attributes": { "title": "Thomas Moran" }
        }),
        json!({
            "id": LOCATION_ID,
            "type": "location",
            "attributes": { "title": "2nd Floor, East Wing" }
        }),
    ]
}

pub fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn resource(value: Value) -> Resource {
    serde_json::from_value(value).expect("fixture should deserialize")
}

/// A search response with one artwork and its included resources.
pub fn single_artwork_document(id: &str, object_number: &str) -> Document {
    document(json!({
        "data": [artwork_json(id, object_number)],
        "included": included_json(id),
    }))
}

/// A location search response listing `ids` in order.
pub fn nearby_document(ids: &[&str]) -> Document {
    let data: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| artwork_json(id, &format!("1990.{index}")))
        .collect();
    let included: Vec<Value> = ids.iter().flat_map(|id| included_json(id)).collect();
    document(json!({ "data": data, "included": included }))
}

/// An audio resource response with two files and one non-file include.
pub fn audio_document(audio_id: &str) -> Document {
    document(json!({
        "data": {
            "id": audio_id,
            "type": "audio",
            "attributes": { "title": "Curator talk" },
            "relationships": {
                "file": { "data": [
                    { "type": "file", "id": "file-a" },
                    { "type": "file", "id": "file-b" }
                ] }
            }
        },
        "included": [
            {
                "id": "file-a",
                "type": "file",
                "attributes": {
                    "filemime": "audio/mpeg",
                    "filename": "talk-a.mp3",
                    "filesize": 20480,
                    "uri": { "url": "/files/talk-a.mp3" }
                }
            },
            {
                "id": "transcript",
                "type": "paragraph",
                "attributes": { "text": "Welcome to the gallery." }
            },
            {
                "id": "file-b",
                "type": "file",
                "attributes": {
                    "filemime": "audio/ogg",
                    "filename": "talk-b.ogg",
                    "filesize": "10240",
                    "url": "/files/talk-b.ogg"
                }
            }
        ]
    }))
}
