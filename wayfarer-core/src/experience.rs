use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Sortable;

/// A travel or exchange programme run with one relation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Experience {
    /// Primary identifier.
    #[serde(default)]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub summary: String,
    /// Location of a cover image.
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    /// Departure date as supplied by the dataset.
    #[serde(default)]
    pub departure_date: String,
    /// Return date as supplied by the dataset.
    #[serde(default)]
    pub return_date: String,
    /// Identifier of the relation running the experience.
    #[serde(default)]
    pub relation: String,
    /// Tag references, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Courses taught during the experience.
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Opaque contact details passed through verbatim.
    #[serde(default)]
    pub contact: Value,
}

/// A course embedded in an [`Experience`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    #[serde(default)]
    pub name: String,
    /// Course description.
    #[serde(default)]
    pub description: String,
    /// Reference to the language the course is taught in.
    #[serde(default)]
    pub language: Option<String>,
}

impl Sortable for Experience {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field {
            "id" => &self.id,
            "title" => &self.title,
            "summary" => &self.summary,
            "imageURL" => &self.image_url,
            "departure_date" => &self.departure_date,
            "return_date" => &self.return_date,
            "relation" => &self.relation,
            "tags" => return Some(Cow::Owned(self.tags.join(","))),
            _ => return None,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn deserialises_courses_and_contact() {
        let experience: Experience = serde_json::from_value(json!({
            "id": "e1",
            "title": "Summer in Lyon",
            "relation": "r1",
            "courses": [{"name": "French", "description": "B1", "language": "fr"}],
            "contact": {"email": "lyon@example.org"}
        }))
        .expect("experience should deserialise");
        assert_eq!(experience.courses.len(), 1);
        assert_eq!(
            experience.courses.first().and_then(|c| c.language.as_deref()),
            Some("fr")
        );
        assert_eq!(experience.contact, json!({"email": "lyon@example.org"}));
    }

    #[rstest]
    #[case("departure_date", Some("2024-06-01"))]
    #[case("name", None)]
    #[case("courses", None)]
    fn exposes_sortable_fields(#[case] field: &str, #[case] expected: Option<&str>) {
        let experience = Experience {
            departure_date: "2024-06-01".into(),
            ..Experience::default()
        };
        assert_eq!(experience.field_value(field).as_deref(), expected);
    }
}
