mod common;
use crate::common::*;
use saam_sdk::{
    fetch_artwork,
    saam_sdk_test::{MockArtworkApi, MockRequest},
    with_audio, with_nearby_artworks, Artwork, ArtworkLookup, ArtworkQuery, Location, SaamError,
};
use serde_json::json;

fn server_error() -> SaamError {
    SaamError::StatusCode(
        reqwest::StatusCode::BAD_GATEWAY,
        "relay unavailable".to_string(),
    )
}

fn located_artwork(id: &str) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: "Parent".to_string(),
        on_view_location: Some(Location {
            id: LOCATION_ID.to_string(),
            title: None,
        }),
        ..Artwork::default()
    }
}

#[tokio::test]
async fn fetch_with_empty_search_makes_no_request() {
    let api = MockArtworkApi::new();

    let lookup = fetch_artwork(&api, "").await.expect("empty search succeeds");
    assert_eq!(lookup, ArtworkLookup::EmptySearch);

    let lookup = fetch_artwork(&api, "   ").await.expect("blank search succeeds");
    assert_eq!(lookup, ArtworkLookup::EmptySearch);

    assert!(api.tracked_requests().is_empty());
}

#[tokio::test]
async fn fetch_normalizes_first_match() {
    let api = MockArtworkApi::new();
    api.enqueue_search(single_artwork_document("art-1", "1929.6.1"));

    let lookup = fetch_artwork(&api, " 1929.6.1 ")
        .await
        .expect("fetch succeeds");

    let artwork = lookup.into_artwork().expect("artwork found");
    assert_eq!(artwork.id, "art-1");
    assert_eq!(artwork.artists.len(), 1);
    assert_eq!(
        api.tracked_requests(),
        vec![MockRequest::SearchArtworks(ArtworkQuery::by_object_number(
            "1929.6.1"
        ))]
    );
}

#[tokio::test]
async fn fetch_without_match_reports_not_found() {
    let api = MockArtworkApi::new();
    api.enqueue_search(document(json!({ "data": [] })));

    let lookup = fetch_artwork(&api, "0000").await.expect("fetch succeeds");

    assert_eq!(lookup, ArtworkLookup::NotFound);
    assert_eq!(lookup.into_artwork(), None);
}

#[tokio::test]
async fn fetch_propagates_failure() {
    let api = MockArtworkApi::new();
    api.enqueue_search(server_error());

    let err = fetch_artwork(&api, "1929.6.1")
        .await
        .expect_err("fetch should fail");

    match err {
        SaamError::StatusCode(status, body) => {
            assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
            assert_eq!(body, "relay unavailable");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn nearby_excludes_parent_and_keeps_response_order() {
    let api = MockArtworkApi::new();
    api.enqueue_search(nearby_document(&["n-1", "parent", "n-2", "n-3", "n-4", "n-5"]));

    let artwork = with_nearby_artworks(&api, located_artwork("parent"))
        .await
        .expect("nearby succeeds");

    let nearby = artwork.nearby_artworks.expect("nearby attached");
    let ids: Vec<&str> = nearby.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["n-1", "n-2", "n-3", "n-4", "n-5"]);
    assert!(nearby.iter().all(|a| a.nearby_artworks.is_none()));
    assert_eq!(
        api.tracked_requests(),
        vec![MockRequest::SearchArtworks(ArtworkQuery::by_location(
            LOCATION_ID
        ))]
    );
}

#[tokio::test]
async fn nearby_caps_results_at_five() {
    let api = MockArtworkApi::new();
    api.enqueue_search(nearby_document(&["n-1", "n-2", "n-3", "n-4", "n-5", "n-6"]));

    let artwork = with_nearby_artworks(&api, located_artwork("parent"))
        .await
        .expect("nearby succeeds");

    assert_eq!(artwork.nearby_artworks.map(|n| n.len()), Some(5));
}

#[tokio::test]
async fn nearby_without_location_is_a_no_op() {
    let api = MockArtworkApi::new();
    let artwork = Artwork {
        id: "art-1".to_string(),
        ..Artwork::default()
    };

    let unchanged = with_nearby_artworks(&api, artwork.clone())
        .await
        .expect("no-op succeeds");
    assert_eq!(unchanged, artwork);

    let blank_location = Artwork {
        on_view_location: Some(Location::default()),
        ..artwork
    };
    let unchanged = with_nearby_artworks(&api, blank_location.clone())
        .await
        .expect("no-op succeeds");
    assert_eq!(unchanged, blank_location);

    assert!(api.tracked_requests().is_empty());
}

#[tokio::test]
async fn nearby_propagates_failure() {
    let api = MockArtworkApi::new();
    api.enqueue_search(server_error());

    let result = with_nearby_artworks(&api, located_artwork("parent")).await;

    assert!(matches!(result, Err(SaamError::StatusCode(..))));
}

#[tokio::test]
async fn audio_replaces_files_in_reverse_include_order() {
    let api = MockArtworkApi::new();
    api.enqueue_audio(audio_document("audio-9"));

    let artwork = Artwork {
        id: "art-1".to_string(),
        audio: Some(Vec::new()),
        ..Artwork::default()
    };
    let artwork = with_audio(&api, artwork, "audio-9")
        .await
        .expect("audio succeeds");

    let audio = artwork.audio.expect("audio attached");
    let ids: Vec<&str> = audio.iter().map(|file| file.id.as_str()).collect();
    assert_eq!(ids, vec!["file-b", "file-a"]);
    assert!(audio
        .iter()
        .all(|file| file.title.as_deref() == Some("Curator talk")));
    assert_eq!(
        api.tracked_requests(),
        vec![MockRequest::GetAudio("audio-9".to_string())]
    );
}

#[tokio::test]
async fn audio_propagates_failure() {
    let api = MockArtworkApi::new();
    api.enqueue_audio(server_error());

    let result = with_audio(&api, Artwork::default(), "audio-9").await;

    assert!(matches!(result, Err(SaamError::StatusCode(..))));
}
