#![allow(clippy::pedantic, clippy::style)]
//! JSON:API document shapes returned by the SAAM API.
//!
//! Every field is optional on the wire. Absent or `null` members deserialize
//! to empty defaults so that normalization can degrade instead of failing.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A top-level JSON:API response document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// The primary data. A collection endpoint returns a list, a single
    /// resource endpoint returns one object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrimaryData>,
    /// Related resources embedded through the `include` query parameter.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub included: Vec<Resource>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryData {
    Many(Vec<Resource>),
    One(Box<Resource>),
}

/// One JSON:API resource object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub relationships: HashMap<String, Relationship>,
}

/// A relationship member. `data` is `null` when the relationship is empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Resource linkage: to-one relationships carry a single identifier, to-many
/// relationships a list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RelationshipData {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceIdentifier {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Per-link metadata. Drupal puts image `alt` text here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl Document {
    /// The primary resources in response order.
    #[must_use]
    pub fn resources(&self) -> Vec<&Resource> {
        match &self.data {
            Some(PrimaryData::Many(resources)) => resources.iter().collect(),
            Some(PrimaryData::One(resource)) => vec![resource.as_ref()],
            None => Vec::new(),
        }
    }

    /// The first primary resource, if any.
    #[must_use]
    pub fn first_resource(&self) -> Option<&Resource> {
        match &self.data {
            Some(PrimaryData::Many(resources)) => resources.first(),
            Some(PrimaryData::One(resource)) => Some(resource.as_ref()),
            None => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
