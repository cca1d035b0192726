//! Requests against the real SAAM API. Run with
//! `SAAM_API_KEY=... cargo test -p saam-sdk --test live_test -- --ignored`.
use saam_sdk::{fetch_artwork, with_nearby_artworks, ArtworkLookup, SaamClient, SaamClientOptions};
use std::sync::Once;

fn load_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
    });
}

fn live_client() -> SaamClient {
    load_env();
    SaamClient::new(SaamClientOptions::from_env())
}

#[tokio::test]
#[ignore = "requires SAAM_API_KEY and network access"]
async fn live_fetch_and_nearby() {
    let client = live_client();

    let lookup = fetch_artwork(&client, "1929.6.1")
        .await
        .expect("live fetch should succeed");
    let artwork = match lookup {
        ArtworkLookup::Found(artwork) => artwork,
        other => panic!("expected an artwork, got {other:?}"),
    };
    assert!(!artwork.id.is_empty());

    let parent_id = artwork.id.clone();
    let artwork = with_nearby_artworks(&client, *artwork)
        .await
        .expect("live nearby should succeed");
    if let Some(nearby) = artwork.nearby_artworks {
        assert!(nearby.len() <= 5);
        assert!(nearby.iter().all(|a| a.id != parent_id));
    }
}
