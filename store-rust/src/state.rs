use saam_sdk::Artwork;
use serde::{Deserialize, Serialize};

/// The persisted state slice. Holds at most one current artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkState {
    #[serde(default)]
    pub artwork: Option<Artwork>,
}
