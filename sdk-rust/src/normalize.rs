use crate::{
    api::{Document, RelationshipData, Resource, ResourceIdentifier},
    Artwork, AudioFile, ImageFile, Location, RelatedEntity,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const DEFAULT_IMAGE_RELATIONSHIP: &str = "default_image";
pub const ARTISTS_RELATIONSHIP: &str = "artists";
pub const INSTITUTIONS_RELATIONSHIP: &str = "institutions";
pub const LOCATIONS_RELATIONSHIP: &str = "locations";
pub const VIDEOS_RELATIONSHIP: &str = "videos";
pub const AUDIO_RELATIONSHIP: &str = "audio";

/// Related resources of one response, indexed by type, then id.
pub struct IncludedTable<'a> {
    resources: HashMap<&'a str, HashMap<&'a str, &'a Resource>>,
}

impl<'a> IncludedTable<'a> {
    pub fn new(included: &'a [Resource]) -> Self {
        let mut resources: HashMap<&'a str, HashMap<&'a str, &'a Resource>> = HashMap::new();
        for resource in included {
            resources
                .entry(resource.kind.as_str())
                .or_default()
                .insert(resource.id.as_str(), resource);
        }
        Self { resources }
    }

    /// Look up the included resource a linkage points at.
    #[must_use]
    pub fn resolve(&self, identifier: &ResourceIdentifier) -> Option<&'a Resource> {
        self.resources
            .get(identifier.kind.as_str())?
            .get(identifier.id.as_str())
            .copied()
    }

    /// Flatten `resource` into an [`Artwork`], resolving its relationships
    /// against this table. Unresolvable relationships are left empty.
    #[must_use]
    pub fn normalize(&self, resource: &Resource) -> Artwork {
        let attributes = &resource.attributes;

        let image = linkage(resource, DEFAULT_IMAGE_RELATIONSHIP)
            .first()
            .and_then(|identifier| {
                self.resolve(identifier).map(|file| ImageFile {
                    id: file.id.clone(),
                    url: file_url(&file.attributes),
                    alt: identifier
                        .meta
                        .as_ref()
                        .and_then(|meta| text_attribute(meta, "alt")),
                })
            });

        // Drupal omits inaccessible entities from `included`; fall back to
        // the linkage id.
        let locations = linkage(resource, LOCATIONS_RELATIONSHIP);
        let on_view_location = locations
            .iter()
            .find_map(|identifier| self.resolve(identifier))
            .map(|location| Location {
                id: location.id.clone(),
                title: display_name(&location.attributes),
            })
            .or_else(|| {
                locations
                    .iter()
                    .find(|identifier| !identifier.id.is_empty())
                    .map(|identifier| Location {
                        id: identifier.id.clone(),
                        title: None,
                    })
            });

        Artwork {
            id: resource.id.clone(),
            title: text_attribute(attributes, "title").unwrap_or_default(),
            object_number: text_attribute(attributes, "object_number"),
            date: text_attribute(attributes, "date"),
            medium: text_attribute(attributes, "medium"),
            dimensions: text_attribute(attributes, "dimensions"),
            credit_line: text_attribute(attributes, "credit_line"),
            description: text_attribute(attributes, "description")
                .or_else(|| text_attribute(attributes, "label_text")),
            image,
            artists: self.related_entities(resource, ARTISTS_RELATIONSHIP),
            institutions: self.related_entities(resource, INSTITUTIONS_RELATIONSHIP),
            videos: self.related_entities(resource, VIDEOS_RELATIONSHIP),
            on_view_location,
            audio_ids: linkage(resource, AUDIO_RELATIONSHIP)
                .into_iter()
                .map(|identifier| identifier.id.clone())
                .collect(),
            nearby_artworks: None,
            audio: None,
        }
    }

    fn related_entities(&self, resource: &Resource, relationship: &str) -> Vec<RelatedEntity> {
        linkage(resource, relationship)
            .into_iter()
            .filter_map(|identifier| self.resolve(identifier))
            .map(|related| RelatedEntity {
                id: related.id.clone(),
                kind: related.kind.clone(),
                name: display_name(&related.attributes),
            })
            .collect()
    }
}

/// Flatten one API resource into an [`Artwork`] using the `included` list
/// returned with it.
#[must_use]
pub fn normalize(resource: &Resource, included: &[Resource]) -> Artwork {
    IncludedTable::new(included).normalize(resource)
}

/// The identifiers a relationship links to, in declaration order.
fn linkage<'r>(resource: &'r Resource, relationship: &str) -> Vec<&'r ResourceIdentifier> {
    match resource
        .relationships
        .get(relationship)
        .and_then(|relationship| relationship.data.as_ref())
    {
        Some(RelationshipData::One(identifier)) => vec![identifier],
        Some(RelationshipData::Many(identifiers)) => identifiers.iter().collect(),
        None => Vec::new(),
    }
}

/// Read a text attribute. Drupal formatted text fields arrive as
/// `{ "value": ..., "processed": ... }`; the processed form wins.
fn text_attribute(attributes: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match attributes.get(key)? {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Object(object) => ["processed", "value"]
            .iter()
            .find_map(|field| object.get(*field).and_then(Value::as_str))?
            .to_string(),
        _ => return None,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn display_name(attributes: &Map<String, Value>) -> Option<String> {
    ["title", "name", "display_name"]
        .iter()
        .find_map(|key| text_attribute(attributes, key))
}

/// File URLs come either as `uri: { url }` (Drupal file entities) or as a
/// plain `url` string.
fn file_url(attributes: &Map<String, Value>) -> Option<String> {
    attributes
        .get("uri")
        .and_then(|uri| match uri {
            Value::Object(uri) => uri.get("url").and_then(Value::as_str),
            Value::String(uri) => Some(uri.as_str()),
            _ => None,
        })
        .or_else(|| attributes.get("url").and_then(Value::as_str))
        .map(ToString::to_string)
}

/// Flatten the files of an audio resource response into [`AudioFile`]s.
///
/// Every included resource with a `filemime` attribute becomes one record,
/// tagged with the enclosing audio resource's id and title. Records come out
/// in reverse include order.
#[must_use]
pub fn flatten_audio(document: &Document, audio_id: &str) -> Vec<AudioFile> {
    let audio = document.first_resource();
    let title = audio.and_then(|audio| text_attribute(&audio.attributes, "title"));
    let audio_id = audio
        .map(|audio| audio.id.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(audio_id);

    document
        .included
        .iter()
        .rev()
        .filter_map(|file| {
            let filemime = file.attributes.get("filemime")?.as_str()?.to_string();
            Some(AudioFile {
                id: file.id.clone(),
                audio_id: audio_id.to_string(),
                title: title.clone(),
                filemime,
                filename: text_attribute(&file.attributes, "filename"),
                url: file_url(&file.attributes),
                filesize: file.attributes.get("filesize").and_then(parse_size),
                attributes: file.attributes.clone(),
            })
        })
        .collect()
}

/// Drupal serializes integers as strings in some versions.
fn parse_size(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}
