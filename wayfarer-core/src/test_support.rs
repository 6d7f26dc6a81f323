//! Test-only sample dataset shared by unit and behaviour tests.
//!
//! The catalogue deliberately contains dangling references: relation `r3`
//! points at an unknown country and language, relation `r1` lists an unknown
//! tag, and experience `e3` points at a relation that does not exist.

use serde_json::{Map, Value, json};

use crate::{Catalogue, Country, Course, Experience, Language, Relation, Tag};

/// Build a [`Language`] with `id` and `name` display fields.
#[must_use]
pub fn language(id: &str, name: &str) -> Language {
    Language::new(fields(json!({"id": id, "name": name})))
}

/// Build a [`Tag`] with `id` and `label` display fields.
#[must_use]
pub fn tag(id: &str, label: &str) -> Tag {
    Tag::new(fields(json!({"id": id, "label": label})))
}

/// Build a [`Country`] with a flag emoji and flag source derived from `code`.
#[must_use]
pub fn country(code: &str, name: &str, emoji: &str) -> Country {
    Country {
        code: code.to_owned(),
        name: name.to_owned(),
        emoji: emoji.to_owned(),
        flag_source: format!("flags/{}.svg", code.to_lowercase()),
    }
}

/// Build a [`Relation`] with the given references.
#[must_use]
pub fn relation(
    id: &str,
    code: &str,
    name: &str,
    country: Option<&str>,
    languages: &[&str],
    tags: &[&str],
) -> Relation {
    Relation {
        id: id.to_owned(),
        code: code.to_owned(),
        name: name.to_owned(),
        description: format!("{name} description"),
        locations: json!([format!("{name} campus")]),
        image_url: format!("images/{id}.jpg"),
        country: country.map(str::to_owned),
        languages: owned(languages),
        tags: owned(tags),
    }
}

/// Build an [`Experience`] run by `relation`.
#[must_use]
pub fn experience(
    id: &str,
    title: &str,
    relation: &str,
    tags: &[&str],
    courses: Vec<Course>,
) -> Experience {
    Experience {
        id: id.to_owned(),
        title: title.to_owned(),
        summary: format!("{title} summary"),
        image_url: format!("images/{id}.jpg"),
        departure_date: "2025-06-01".to_owned(),
        return_date: "2025-08-31".to_owned(),
        relation: relation.to_owned(),
        tags: owned(tags),
        courses,
        contact: json!({"email": format!("{id}@example.org")}),
    }
}

/// Build a [`Course`] taught in `language`.
#[must_use]
pub fn course(name: &str, language: Option<&str>) -> Course {
    Course {
        name: name.to_owned(),
        description: format!("{name} course"),
        language: language.map(str::to_owned),
    }
}

/// A small dataset covering hits, misses and duplicates.
///
/// Relation names sort as `r2`, `r1`, `r3`.
#[must_use]
pub fn sample_catalogue() -> Catalogue {
    Catalogue::builder()
        .with(country("FR", "France", "🇫🇷"))
        .with(country("JP", "Japan", "🇯🇵"))
        .with(country("ES", "Spain", "🇪🇸"))
        .with_keyed("en", language("en", "English"))
        .with_keyed("fr", language("fr", "French"))
        .with_keyed("ja", language("ja", "Japanese"))
        .with_keyed("food", tag("food", "Food"))
        .with_keyed("art", tag("art", "Art"))
        .with_keyed("surf", tag("surf", "Surfing"))
        .with(relation(
            "r1",
            "BDX",
            "Bordeaux Partners",
            Some("FR"),
            &["en", "fr"],
            &["food", "bad-tag"],
        ))
        .with(relation(
            "r2",
            "AIC",
            "Aichi Institute",
            Some("JP"),
            &["ja", "en"],
            &["art"],
        ))
        .with(relation(
            "r3",
            "CAD",
            "Cadiz Centre",
            Some("XX"),
            &["es"],
            &["surf", "food"],
        ))
        .with(experience(
            "e1",
            "Wine harvest",
            "r1",
            &["food"],
            vec![course("French", Some("fr")), course("Oenology", Some("xx"))],
        ))
        .with(experience(
            "e2",
            "Ceramics",
            "r2",
            &["art", "surf"],
            vec![course("Japanese", Some("ja"))],
        ))
        .with(experience("e3", "Orphan", "gone", &["surf"], Vec::new()))
        .with(experience(
            "e4",
            "Cooking school",
            "r1",
            &["food", "art"],
            vec![course("Pastry", None)],
        ))
        .build()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
