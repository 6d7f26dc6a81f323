//! Opaque display records for languages and tags.
//!
//! Both kinds are identified only by the key they are stored under; their
//! fields are display data that the API passes through verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! descriptor {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            fields: Map<String, Value>,
        }

        impl $name {
            /// Wrap a set of display fields.
            #[must_use]
            pub const fn new(fields: Map<String, Value>) -> Self {
                Self { fields }
            }

            /// Return a display field by name.
            #[must_use]
            pub fn get(&self, field: &str) -> Option<&Value> {
                self.fields.get(field)
            }

            /// All display fields.
            #[must_use]
            pub const fn fields(&self) -> &Map<String, Value> {
                &self.fields
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self::new(fields)
            }
        }
    };
}

descriptor! {
    /// A language that relations use or courses are taught in.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use wayfarer_core::Language;
    ///
    /// let language: Language = serde_json::from_value(json!({"id": "en", "name": "English"}))?;
    /// assert_eq!(language.get("name"), Some(&json!("English")));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    Language
}

descriptor! {
    /// A free-form label attached to relations and experiences.
    Tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn passes_unknown_fields_through() {
        let raw = json!({"label": "Surfing", "colour": "#00f", "weight": 3});
        let tag: Tag = serde_json::from_value(raw.clone()).expect("tag should deserialise");
        assert_eq!(serde_json::to_value(&tag).expect("serialise"), raw);
    }

    #[rstest]
    fn rejects_non_object_payloads() {
        assert!(serde_json::from_value::<Language>(json!("English")).is_err());
    }
}
