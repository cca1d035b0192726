//! JSON:API query construction for the artwork collection.
//!
//! Filters use the Drupal JSON:API syntax:
//! `filter[<name>][condition][path]=...` for conditions and
//! `filter[<name>][group][conjunction]=AND` for groups.

/// Relationship paths embedded with every artwork query.
pub const ARTWORK_INCLUDES: &[&str] = &[
    "default_image",
    "artists",
    "institutions",
    "locations",
    "videos",
    "audio",
];

/// Page size for object number lookups.
pub const SINGLE_ARTWORK_LIMIT: u32 = 1;
/// Page size for the nearby lookup. One slot goes to the parent artwork,
/// which is filtered out afterwards.
pub const NEARBY_ARTWORKS_LIMIT: u32 = 6;

const OBJECT_NUMBER_GROUP: &str = "filter-group";
const OBJECT_NUMBER_FILTER: &str = "object-number-filter";
const LOCATION_FILTER: &str = "location-filter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
}

impl Conjunction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub name: String,
    pub conjunction: Conjunction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub name: String,
    /// The attribute or relationship path, e.g. "object_number" or
    /// "locations.id".
    pub path: String,
    pub operator: String,
    pub value: String,
    /// The group this condition belongs to, if any.
    pub member_of: Option<String>,
}

impl FilterCondition {
    /// An equality condition.
    pub fn equals(
        name: impl Into<String>,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            operator: "=".to_string(),
            value: value.into(),
            member_of: None,
        }
    }

    #[must_use]
    pub fn member_of(mut self, group: impl Into<String>) -> Self {
        self.member_of = Some(group.into());
        self
    }
}

/// A query against the artwork collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtworkQuery {
    pub include: Vec<String>,
    pub groups: Vec<FilterGroup>,
    pub conditions: Vec<FilterCondition>,
    pub page_limit: Option<u32>,
}

impl ArtworkQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the artwork whose object number equals `object_number`.
    #[must_use]
    pub fn by_object_number(object_number: &str) -> Self {
        Self::new()
            .with_include(ARTWORK_INCLUDES.iter().copied())
            .with_group(OBJECT_NUMBER_GROUP, Conjunction::And)
            .with_condition(
                FilterCondition::equals(OBJECT_NUMBER_FILTER, "object_number", object_number)
                    .member_of(OBJECT_NUMBER_GROUP),
            )
            .with_page_limit(SINGLE_ARTWORK_LIMIT)
    }

    /// Find artworks on view in the location `location_id`.
    #[must_use]
    pub fn by_location(location_id: &str) -> Self {
        Self::new()
            .with_include(ARTWORK_INCLUDES.iter().copied())
            .with_condition(FilterCondition::equals(
                LOCATION_FILTER,
                "locations.id",
                location_id,
            ))
            .with_page_limit(NEARBY_ARTWORKS_LIMIT)
    }

    #[must_use]
    pub fn with_include<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(paths.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, conjunction: Conjunction) -> Self {
        self.groups.push(FilterGroup {
            name: name.into(),
            conjunction,
        });
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// Query string pairs, unencoded. The HTTP client percent-encodes them.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if !self.include.is_empty() {
            params.push(("include".to_string(), self.include.join(",")));
        }

        for group in &self.groups {
            params.push((
                format!("filter[{}][group][conjunction]", group.name),
                group.conjunction.as_str().to_string(),
            ));
        }

        for condition in &self.conditions {
            let prefix = format!("filter[{}][condition]", condition.name);
            params.push((format!("{prefix}[path]"), condition.path.clone()));
            params.push((format!("{prefix}[operator]"), condition.operator.clone()));
            params.push((format!("{prefix}[value]"), condition.value.clone()));
            if let Some(group) = &condition.member_of {
                params.push((format!("{prefix}[memberOf]"), group.clone()));
            }
        }

        if let Some(limit) = self.page_limit {
            params.push(("page[limit]".to_string(), limit.to_string()));
        }

        params
    }
}

/// Query string pairs for an audio resource lookup.
#[must_use]
pub fn audio_params() -> Vec<(String, String)> {
    vec![
        ("include".to_string(), "file".to_string()),
        ("page[limit]".to_string(), SINGLE_ARTWORK_LIMIT.to_string()),
    ]
}
