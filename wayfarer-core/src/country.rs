use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Sortable;

/// A country that relations can be located in.
///
/// # Examples
/// ```
/// use wayfarer_core::Country;
///
/// let country = Country::new("FR", "France");
/// assert_eq!(country.code, "FR");
/// assert!(country.emoji.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Country {
    /// Identifier other records refer to.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Flag emoji.
    #[serde(default)]
    pub emoji: String,
    /// Location of a flag image.
    #[serde(rename = "flagSource", default)]
    pub flag_source: String,
}

impl Country {
    /// Construct a country with an empty emoji and flag source.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Sortable for Country {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field {
            "code" => &self.code,
            "name" => &self.name,
            "emoji" => &self.emoji,
            "flagSource" => &self.flag_source,
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
    fn deserialises_camel_case_flag_source() {
        let country: Country = serde_json::from_value(json!({
            "code": "JP",
            "name": "Japan",
            "emoji": "🇯🇵",
            "flagSource": "flags/jp.svg",
            "population": 125_000_000
        }))
        .expect("country should deserialise");
        assert_eq!(country.flag_source, "flags/jp.svg");
        assert_eq!(
            serde_json::to_value(&country).expect("serialise"),
            json!({"code": "JP", "name": "Japan", "emoji": "🇯🇵", "flagSource": "flags/jp.svg"})
        );
    }

    #[rstest]
    #[case("flagSource", Some("f.svg"))]
    #[case("code", Some("FR"))]
    #[case("capital", None)]
    fn exposes_sortable_fields(#[case] field: &str, #[case] expected: Option<&str>) {
        let country = Country {
            flag_source: "f.svg".into(),
            ..Country::new("FR", "France")
        };
        assert_eq!(country.field_value(field).as_deref(), expected);
    }
}
