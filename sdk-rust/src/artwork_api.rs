use crate::{api::Document, ArtworkQuery, SaamResult};

/// The read operations the actions need from the SAAM API.
#[async_trait::async_trait]
pub trait ArtworkApi: Send + Sync {
    fn provider(&self) -> &'static str;
    /// Query the artwork collection.
    async fn search_artworks(&self, query: &ArtworkQuery) -> SaamResult<Document>;
    /// Fetch one audio resource with its files included.
    async fn get_audio(&self, audio_id: &str) -> SaamResult<Document>;
}
