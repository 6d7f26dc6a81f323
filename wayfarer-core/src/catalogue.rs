//! Immutable in-memory lookup tables for every entity kind.
//!
//! A [`Catalogue`] is assembled once through a [`CatalogueBuilder`] and never
//! mutated afterwards, so it can be shared freely between request handlers.
//! Each kind lives in its own [`Table`], which keeps records in load order
//! for collection routes and indexes them by identifier for O(1) lookups.
//! Relations are additionally indexed by their `code`.

use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::{Country, Experience, Language, Relation, Tag};

/// The five kinds of entity held by a [`Catalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// [`Country`] records keyed by ISO-style code.
    Country,
    /// [`Language`] records keyed by their implicit identifier.
    Language,
    /// [`Tag`] records keyed by their implicit identifier.
    Tag,
    /// [`Relation`] records keyed by `id`.
    Relation,
    /// [`Experience`] records keyed by `id`.
    Experience,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Country => "country",
            Self::Language => "language",
            Self::Tag => "tag",
            Self::Relation => "relation",
            Self::Experience => "experience",
        };
        f.write_str(label)
    }
}

mod sealed {
    use super::{Catalogue, Table};

    pub trait Stored: Sized {
        fn table(catalogue: &Catalogue) -> &Table<Self>;
        fn table_mut(catalogue: &mut Catalogue) -> &mut Table<Self>;
    }
}

/// A record type stored in a [`Catalogue`].
///
/// The trait is sealed: the set of kinds is closed and each implementation
/// is wired to its own table.
pub trait Entity: sealed::Stored {
    /// Kind reported in logs and diagnostics.
    const KIND: EntityKind;

    /// Identifier carried by the record itself, if the kind has one.
    ///
    /// Languages and tags return `None`; their identifier only exists as the
    /// key they were stored under.
    fn identifier(&self) -> Option<&str>;
}

macro_rules! stored_in {
    ($entity:ty, $field:ident) => {
        impl sealed::Stored for $entity {
            fn table(catalogue: &Catalogue) -> &Table<Self> {
                &catalogue.$field
            }

            fn table_mut(catalogue: &mut Catalogue) -> &mut Table<Self> {
                &mut catalogue.$field
            }
        }
    };
}

stored_in!(Country, countries);
stored_in!(Language, languages);
stored_in!(Tag, tags);
stored_in!(Relation, relations);
stored_in!(Experience, experiences);

impl Entity for Country {
    const KIND: EntityKind = EntityKind::Country;

    fn identifier(&self) -> Option<&str> {
        Some(self.code.as_str())
    }
}

impl Entity for Language {
    const KIND: EntityKind = EntityKind::Language;

    fn identifier(&self) -> Option<&str> {
        None
    }
}

impl Entity for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn identifier(&self) -> Option<&str> {
        None
    }
}

impl Entity for Relation {
    const KIND: EntityKind = EntityKind::Relation;

    fn identifier(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}

impl Entity for Experience {
    const KIND: EntityKind = EntityKind::Experience;

    fn identifier(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}

/// Records of one kind in load order, indexed by identifier.
#[derive(Debug, Clone)]
pub struct Table<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Table<T> {
    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index
            .get(id)
            .and_then(|&position| self.records.get(position))
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Iterate over `(identifier, record)` pairs in load order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        let mut keyed: Vec<(&str, usize)> = self
            .index
            .iter()
            .map(|(id, &position)| (id.as_str(), position))
            .collect();
        keyed.sort_unstable_by_key(|&(_, position)| position);
        keyed
            .into_iter()
            .filter_map(|(id, position)| self.records.get(position).map(|record| (id, record)))
    }

    /// Store a record, replacing any earlier record with the same identifier.
    ///
    /// A replacement keeps the position of the record it displaces.
    fn insert(&mut self, id: String, record: T) -> Option<T> {
        if let Some(slot) = self
            .index
            .get(&id)
            .copied()
            .and_then(|position| self.records.get_mut(position))
        {
            return Some(std::mem::replace(slot, record));
        }
        self.index.insert(id, self.records.len());
        self.records.push(record);
        None
    }
}

/// Immutable lookup store for the whole dataset.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{Catalogue, Country, Language};
///
/// let catalogue = Catalogue::builder()
///     .with(Country::new("FR", "France"))
///     .with_keyed("en", Language::default())
///     .build();
///
/// assert!(catalogue.get::<Country>("FR").is_some());
/// assert!(catalogue.get::<Language>("de").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    countries: Table<Country>,
    languages: Table<Language>,
    tags: Table<Tag>,
    relations: Table<Relation>,
    experiences: Table<Experience>,
    relation_codes: HashMap<String, usize>,
}

impl Catalogue {
    /// Start assembling a catalogue.
    #[must_use]
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::default()
    }

    /// Look up an entity of kind `E` by identifier.
    #[must_use]
    pub fn get<E: Entity>(&self, id: &str) -> Option<&E> {
        E::table(self).get(id)
    }

    /// The table holding every entity of kind `E`.
    #[must_use]
    pub fn table<E: Entity>(&self) -> &Table<E> {
        E::table(self)
    }

    /// All entities of kind `E` in load order.
    #[must_use]
    pub fn all<E: Entity>(&self) -> &[E] {
        E::table(self).records()
    }

    /// Look up a relation by `id`.
    #[must_use]
    pub fn relation(&self, id: &str) -> Option<&Relation> {
        self.relations.get(id)
    }

    /// Look up a relation by its secondary `code` identifier.
    #[must_use]
    pub fn relation_by_code(&self, code: &str) -> Option<&Relation> {
        self.relation_codes
            .get(code)
            .and_then(|&position| self.relations.records.get(position))
    }

    /// Look up an experience by `id`.
    #[must_use]
    pub fn experience(&self, id: &str) -> Option<&Experience> {
        self.experiences.get(id)
    }

    /// Experiences whose `relation` reference equals `relation_ref`, in load
    /// order.
    pub fn experiences_referencing<'a, 'r>(
        &'a self,
        relation_ref: &'r str,
    ) -> impl Iterator<Item = &'a Experience> + use<'a, 'r> {
        self.experiences
            .records()
            .iter()
            .filter(move |experience| experience.relation == relation_ref)
    }
}

/// Assembles a [`Catalogue`].
///
/// Duplicate identifiers follow "last write wins": the later record replaces
/// the earlier one in place and a warning is logged.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    catalogue: Catalogue,
}

impl CatalogueBuilder {
    /// Store `record` under `id`, returning the record it replaced, if any.
    pub fn insert<E: Entity>(&mut self, id: impl Into<String>, record: E) -> Option<E> {
        let key = id.into();
        let replaced = E::table_mut(&mut self.catalogue).insert(key.clone(), record);
        if replaced.is_some() {
            warn!("Replaced duplicate {} record with id {key:?}", E::KIND);
        }
        replaced
    }

    /// Store a record under its own identifier.
    ///
    /// Records without an intrinsic identifier ([`Language`], [`Tag`]) are
    /// stored under the empty string; use [`Self::with_keyed`] for them.
    #[must_use]
    pub fn with<E: Entity>(mut self, record: E) -> Self {
        let key = record.identifier().unwrap_or_default().to_owned();
        self.insert(key, record);
        self
    }

    /// Store a record under an explicit identifier.
    #[must_use]
    pub fn with_keyed<E: Entity>(mut self, id: impl Into<String>, record: E) -> Self {
        self.insert(id, record);
        self
    }

    /// Freeze the builder into an immutable [`Catalogue`].
    ///
    /// The relation `code` index is built here; when two relations share a
    /// code the later one in load order wins.
    #[must_use]
    pub fn build(self) -> Catalogue {
        let mut catalogue = self.catalogue;
        let mut codes = HashMap::with_capacity(catalogue.relations.records().len());
        for (position, relation) in catalogue.relations.records().iter().enumerate() {
            if relation.code.is_empty() {
                continue;
            }
            if codes.insert(relation.code.clone(), position).is_some() {
                warn!(
                    "Relation code {:?} is shared by several relations; keeping {:?}",
                    relation.code, relation.id
                );
            }
        }
        catalogue.relation_codes = codes;
        catalogue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn relation(id: &str, code: &str, name: &str) -> Relation {
        Relation {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            ..Relation::default()
        }
    }

    #[rstest]
    fn lookup_hits_and_misses() {
        let catalogue = Catalogue::builder()
            .with(Country::new("FR", "France"))
            .build();
        assert_eq!(
            catalogue.get::<Country>("FR").map(|c| c.name.as_str()),
            Some("France")
        );
        assert!(catalogue.get::<Country>("DE").is_none());
        assert!(catalogue.get::<Country>("").is_none());
    }

    #[rstest]
    fn duplicate_identifier_keeps_position_of_first_record() {
        let mut builder = Catalogue::builder();
        assert!(builder.insert("a", relation("a", "A", "first")).is_none());
        assert!(builder.insert("b", relation("b", "B", "second")).is_none());
        let replaced = builder.insert("a", relation("a", "A", "third"));
        assert_eq!(replaced.map(|r| r.name), Some("first".to_owned()));

        let catalogue = builder.build();
        let names: Vec<&str> = catalogue
            .all::<Relation>()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["third", "second"]);
    }

    #[rstest]
    fn relations_are_addressable_by_id_and_code_independently() {
        let catalogue = Catalogue::builder()
            .with(relation("r1", "ABC", "Alpha"))
            .with(relation("ABC", "XYZ", "Shadow"))
            .build();

        assert_eq!(catalogue.relation("r1").map(|r| r.name.as_str()), Some("Alpha"));
        assert_eq!(
            catalogue.relation_by_code("ABC").map(|r| r.name.as_str()),
            Some("Alpha")
        );
        assert_eq!(catalogue.relation("ABC").map(|r| r.name.as_str()), Some("Shadow"));
        assert!(catalogue.relation_by_code("r1").is_none());
    }

    #[rstest]
    fn shared_code_resolves_to_later_relation() {
        let catalogue = Catalogue::builder()
            .with(relation("r1", "ABC", "Alpha"))
            .with(relation("r2", "ABC", "Beta"))
            .build();
        assert_eq!(
            catalogue.relation_by_code("ABC").map(|r| r.id.as_str()),
            Some("r2")
        );
    }

    #[rstest]
    fn entries_follow_load_order() {
        let catalogue = Catalogue::builder()
            .with_keyed("fr", Language::default())
            .with_keyed("en", Language::default())
            .with_keyed("de", Language::default())
            .build();
        let ids: Vec<&str> = catalogue
            .table::<Language>()
            .entries()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["fr", "en", "de"]);
    }

    #[rstest]
    fn experiences_are_selected_by_relation_reference() {
        let experience = |id: &str, relation: &str| Experience {
            id: id.into(),
            relation: relation.into(),
            ..Experience::default()
        };
        let catalogue = Catalogue::builder()
            .with(experience("e1", "r1"))
            .with(experience("e2", "r2"))
            .with(experience("e3", "r1"))
            .build();
        let ids: Vec<&str> = catalogue
            .experiences_referencing("r1")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["e1", "e3"]);
        assert_eq!(catalogue.experiences_referencing("nope").count(), 0);
    }

    #[rstest]
    fn selected_experiences_outlive_the_reference_string() {
        let catalogue = Catalogue::builder()
            .with(Experience {
                id: "e1".into(),
                relation: "r1".into(),
                ..Experience::default()
            })
            .build();
        let selected: Vec<&Experience> = {
            let relation_ref = format!("r{}", 1);
            catalogue.experiences_referencing(&relation_ref).collect()
        };
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1"]);
    }

    #[rstest]
    #[case(EntityKind::Country, "country")]
    #[case(EntityKind::Experience, "experience")]
    fn kinds_render_lowercase(#[case] kind: EntityKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
