use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flattened artwork, assembled from one API resource and the related
/// resources embedded alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Artwork {
    /// The API object id. Empty for the placeholder stored when a search
    /// matches nothing.
    pub id: String,
    pub title: String,
    /// The museum accession number, e.g. "1929.6.1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The resolved `default_image` file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageFile>,
    #[serde(default)]
    pub artists: Vec<RelatedEntity>,
    #[serde(default)]
    pub institutions: Vec<RelatedEntity>,
    #[serde(default)]
    pub videos: Vec<RelatedEntity>,
    /// The gallery the artwork is on view in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_view_location: Option<Location>,
    /// Ids of the related audio resources. Each can be passed to the audio
    /// enrichment to fetch the playable files.
    #[serde(default)]
    pub audio_ids: Vec<String>,
    /// Other artworks on view in the same location. Never populated on the
    /// nested artworks themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "utoipa", schema(no_recursion))]
    pub nearby_artworks: Option<Vec<Artwork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<AudioFile>>,
}

impl Artwork {
    /// The id of the on-view location, if the artwork has a non-empty one.
    #[must_use]
    pub fn on_view_location_id(&self) -> Option<&str> {
        self.on_view_location
            .as_ref()
            .map(|location| location.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// An image file resolved from the `default_image` relationship.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ImageFile {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Alt text, taken from the relationship metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A related resource reduced to its display name, e.g. an artist or an
/// institution.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct RelatedEntity {
    pub id: String,
    /// The JSON:API resource type, e.g. "artist".
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Location {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A playable file attached to an audio resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct AudioFile {
    /// The file resource id.
    pub id: String,
    /// The id of the audio resource the file belongs to.
    pub audio_id: String,
    /// The title of the enclosing audio resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The MIME type of the file. E.g. "audio/mpeg".
    pub filemime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The size of the file in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    /// The raw file attributes as returned by the API.
    #[serde(default)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub attributes: Map<String, Value>,
}
