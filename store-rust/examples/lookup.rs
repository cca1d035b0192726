//! Look up an artwork by object number, then attach nearby artworks and the
//! first audio guide. The state is snapshotted to `artwork-state.json`.
//!
//! ```sh
//! SAAM_API_KEY=... cargo run -p saam-store --example lookup -- 1929.6.1
//! ```
use dotenvy::dotenv;
use saam_sdk::{SaamClient, SaamClientOptions};
use saam_store::{ArtworkStore, JsonFilePersistence};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let search = std::env::args().nth(1);

    let client = Arc::new(SaamClient::new(SaamClientOptions::from_env()));
    let persistence = Arc::new(JsonFilePersistence::new("artwork-state.json"));
    let mut store = ArtworkStore::new(client).with_persistence(persistence);
    store.restore().await.unwrap();

    if let Some(previous) = store.artwork() {
        println!("Previously viewed: {} ({})", previous.title, previous.id);
    }

    store.fetch(search.as_deref()).await.unwrap();
    store.update_nearby_artworks().await.unwrap();

    let audio_id = store
        .artwork()
        .and_then(|artwork| artwork.audio_ids.first().cloned());
    if let Some(audio_id) = audio_id {
        store.update_audio(&audio_id).await.unwrap();
    }

    println!("{:#?}", store.artwork());
}
