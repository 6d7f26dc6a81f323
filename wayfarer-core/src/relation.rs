use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Sortable;

/// A travel partner organisation.
///
/// `country`, `languages` and `tags` hold identifiers that are resolved
/// against the catalogue when the relation is projected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Relation {
    /// Primary identifier.
    #[serde(default)]
    pub id: String,
    /// Secondary identifier used by some routes.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Opaque location data passed through verbatim.
    #[serde(default)]
    pub locations: Value,
    /// Location of a cover image.
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    /// Country code reference.
    #[serde(default)]
    pub country: Option<String>,
    /// Language references, in display order.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Tag references, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Sortable for Relation {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field {
            "id" => &self.id,
            "code" => &self.code,
            "name" => &self.name,
            "description" => &self.description,
            "imageURL" => &self.image_url,
            "country" => self.country.as_ref()?,
            "languages" => return Some(Cow::Owned(self.languages.join(","))),
            "tags" => return Some(Cow::Owned(self.tags.join(","))),
            "locations" => return self.locations.as_str().map(Cow::Borrowed),
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}
