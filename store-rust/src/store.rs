use crate::{ArtworkState, StatePersistence, StoreResult};
use saam_sdk::{
    fetch_artwork, with_audio, with_nearby_artworks, Artwork, ArtworkApi, ArtworkLookup,
};
use std::sync::Arc;

/// Owns the current artwork and applies the result of each action to it.
///
/// Actions take `&mut self`; a caller sharing one store between tasks wraps
/// it in its own lock and so decides how concurrent actions are ordered.
pub struct ArtworkStore {
    api: Arc<dyn ArtworkApi>,
    state: ArtworkState,
    persistence: Option<Arc<dyn StatePersistence>>,
}

impl ArtworkStore {
    #[must_use]
    pub fn new(api: Arc<dyn ArtworkApi>) -> Self {
        Self {
            api,
            state: ArtworkState::default(),
            persistence: None,
        }
    }

    /// Snapshot the state after every commit.
    #[must_use]
    pub fn with_persistence(mut self, persistence: Arc<dyn StatePersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Replace the in-memory state with the last saved snapshot, if any.
    pub async fn restore(&mut self) -> StoreResult<()> {
        let Some(persistence) = &self.persistence else {
            return Ok(());
        };

        if let Some(state) = persistence.load().await? {
            tracing::debug!(
                artwork_id = state.artwork.as_ref().map(|a| a.id.as_str()),
                "artwork state restored"
            );
            self.state = state;
        }
        Ok(())
    }

    #[must_use]
    pub fn artwork(&self) -> Option<&Artwork> {
        self.state.artwork.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &ArtworkState {
        &self.state
    }

    /// Load the artwork whose object number matches `search` as the current
    /// artwork.
    ///
    /// An empty or absent search clears the current artwork without a
    /// request. A search without a match stores an empty artwork. On a
    /// request failure the current artwork is cleared and the error returned.
    /// If the snapshot cannot be saved the current artwork is left as it was.
    pub async fn fetch(&mut self, search: Option<&str>) -> StoreResult<Option<&Artwork>> {
        let search = search.unwrap_or_default();

        let lookup = fetch_artwork(self.api.as_ref(), search).await;
        match lookup {
            Ok(ArtworkLookup::EmptySearch) => {
                self.commit(None).await?;
            }
            Ok(ArtworkLookup::NotFound) => {
                tracing::warn!(search, "no artwork matches search, storing empty artwork");
                self.commit(Some(Artwork::default())).await?;
            }
            Ok(ArtworkLookup::Found(artwork)) => {
                self.commit(Some(*artwork)).await?;
            }
            Err(error) => {
                if let Err(persist_error) = self.commit(None).await {
                    tracing::warn!(error = %persist_error, "failed to persist cleared artwork");
                    self.state.artwork = None;
                }
                return Err(error.into());
            }
        }

        Ok(self.artwork())
    }

    /// Attach the artworks on view in the same location as the current
    /// artwork.
    ///
    /// Does nothing when there is no current artwork or it has no on-view
    /// location. On failure the current artwork is left as it was.
    pub async fn update_nearby_artworks(&mut self) -> StoreResult<Option<&Artwork>> {
        let Some(artwork) = self.state.artwork.clone() else {
            tracing::debug!("no current artwork, skipping nearby artworks");
            return Ok(None);
        };
        if artwork.on_view_location_id().is_none() {
            tracing::debug!(artwork_id = %artwork.id, "artwork has no on-view location");
            return Ok(self.artwork());
        }

        let updated = with_nearby_artworks(self.api.as_ref(), artwork).await?;
        self.commit(Some(updated)).await?;
        Ok(self.artwork())
    }

    /// Replace the audio files of the current artwork with those of the
    /// audio resource `audio_id`.
    ///
    /// Does nothing when there is no current artwork. On failure the current
    /// artwork is left as it was.
    pub async fn update_audio(&mut self, audio_id: &str) -> StoreResult<Option<&Artwork>> {
        let Some(artwork) = self.state.artwork.clone() else {
            tracing::debug!(audio_id, "no current artwork, skipping audio");
            return Ok(None);
        };

        let updated = with_audio(self.api.as_ref(), artwork, audio_id).await?;
        self.commit(Some(updated)).await?;
        Ok(self.artwork())
    }

    /// Replace the current artwork. With persistence configured, the new
    /// state is only applied once its snapshot is saved.
    async fn commit(&mut self, artwork: Option<Artwork>) -> StoreResult<()> {
        tracing::debug!(
            artwork_id = artwork.as_ref().map(|a| a.id.as_str()),
            "committing current artwork"
        );
        let state = ArtworkState { artwork };

        if let Some(persistence) = &self.persistence {
            persistence.save(&state).await?;
        }
        self.state = state;
        Ok(())
    }
}
