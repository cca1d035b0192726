mod actions;
pub mod api;
mod artwork_api;
mod client;
mod client_utils;
mod errors;
pub mod normalize;
mod opentelemetry;
mod options;
pub mod query;
pub mod saam_sdk_test;
mod types;

pub use actions::{fetch_artwork, with_audio, with_nearby_artworks, ArtworkLookup};
pub use artwork_api::ArtworkApi;
pub use client::SaamClient;
pub use errors::*;
pub use normalize::{flatten_audio, normalize, IncludedTable};
pub use options::{
    ApiKey, Relay, SaamClientOptions, DEFAULT_API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_RELAY_URL,
};
pub use query::ArtworkQuery;
pub use types::*;
