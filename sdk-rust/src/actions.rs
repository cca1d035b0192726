//! The three artwork operations as value-in, value-out functions.
//!
//! None of them hold state. Enrichment takes the artwork it augments by value
//! and hands back the updated copy, so a caller cannot enrich an artwork it
//! has not loaded.
use crate::{
    normalize::{flatten_audio, IncludedTable},
    query::NEARBY_ARTWORKS_LIMIT,
    Artwork, ArtworkApi, ArtworkQuery, SaamResult,
};

/// Outcome of an object number lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtworkLookup {
    /// The search string was empty. No request was made.
    EmptySearch,
    /// The API returned no matching artwork.
    NotFound,
    Found(Box<Artwork>),
}

impl ArtworkLookup {
    #[must_use]
    pub fn into_artwork(self) -> Option<Artwork> {
        match self {
            Self::Found(artwork) => Some(*artwork),
            Self::EmptySearch | Self::NotFound => None,
        }
    }
}

/// Look up the artwork whose object number matches `search`.
pub async fn fetch_artwork(api: &dyn ArtworkApi, search: &str) -> SaamResult<ArtworkLookup> {
    let search = search.trim();
    if search.is_empty() {
        return Ok(ArtworkLookup::EmptySearch);
    }

    let document = api
        .search_artworks(&ArtworkQuery::by_object_number(search))
        .await?;

    let Some(resource) = document.first_resource() else {
        tracing::debug!(search, "no artwork matches object number");
        return Ok(ArtworkLookup::NotFound);
    };

    let artwork = IncludedTable::new(&document.included).normalize(resource);
    tracing::debug!(search, artwork_id = %artwork.id, "artwork found");
    Ok(ArtworkLookup::Found(Box::new(artwork)))
}

/// Attach the artworks on view in the same location as `artwork`.
///
/// Returns `artwork` unchanged, without a request, when it has no on-view
/// location. The parent itself is never listed among its neighbours.
pub async fn with_nearby_artworks(
    api: &dyn ArtworkApi,
    mut artwork: Artwork,
) -> SaamResult<Artwork> {
    let Some(location_id) = artwork.on_view_location_id().map(ToString::to_string) else {
        tracing::debug!(artwork_id = %artwork.id, "artwork has no on-view location");
        return Ok(artwork);
    };

    let document = api
        .search_artworks(&ArtworkQuery::by_location(&location_id))
        .await?;

    let table = IncludedTable::new(&document.included);
    let nearby: Vec<Artwork> = document
        .resources()
        .into_iter()
        .filter(|resource| resource.id != artwork.id)
        .take(NEARBY_ARTWORKS_LIMIT as usize - 1)
        .map(|resource| table.normalize(resource))
        .collect();

    tracing::debug!(
        artwork_id = %artwork.id,
        %location_id,
        count = nearby.len(),
        "nearby artworks attached"
    );
    artwork.nearby_artworks = Some(nearby);
    Ok(artwork)
}

/// Replace the audio files of `artwork` with those of the audio resource
/// `audio_id`.
pub async fn with_audio(
    api: &dyn ArtworkApi,
    mut artwork: Artwork,
    audio_id: &str,
) -> SaamResult<Artwork> {
    let document = api.get_audio(audio_id).await?;
    let files = flatten_audio(&document, audio_id);

    tracing::debug!(
        artwork_id = %artwork.id,
        audio_id,
        count = files.len(),
        "audio files attached"
    );
    artwork.audio = Some(files);
    Ok(artwork)
}
