//! Audit a catalogue for references that do not resolve.
//!
//! The API tolerates dangling references by design of its projections, so
//! this report is purely diagnostic: it backs the `wayfarer check` command.

use std::fmt;

use log::warn;
use wayfarer_core::{Catalogue, Country, Entity, EntityKind, Experience, Language, Relation, Tag};

/// A stored reference that does not resolve to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Kind of the record holding the reference.
    pub owner: EntityKind,
    /// Identifier of the record holding the reference.
    pub owner_id: String,
    /// Kind the reference should resolve to.
    pub target: EntityKind,
    /// The unresolved identifier.
    pub reference: String,
}

impl DanglingReference {
    /// Report whether this is an experience whose relation is missing.
    #[must_use]
    pub fn is_orphaned_experience(&self) -> bool {
        self.owner == EntityKind::Experience && self.target == EntityKind::Relation
    }
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} references unknown {} {:?}",
            self.owner, self.owner_id, self.target, self.reference
        )
    }
}

/// Collect every dangling reference in `catalogue`, logging each one.
///
/// Absent or empty optional references (a relation without a country, a
/// course without a language) are not reported. An experience's relation
/// reference is mandatory, so an empty one is reported.
#[must_use]
pub fn dangling_references(catalogue: &Catalogue) -> Vec<DanglingReference> {
    let mut audit = Audit {
        catalogue,
        found: Vec::new(),
    };

    for relation in catalogue.all::<Relation>() {
        audit.optional::<Relation, Country>(&relation.id, relation.country.as_deref());
        audit.each::<Relation, Language>(&relation.id, &relation.languages);
        audit.each::<Relation, Tag>(&relation.id, &relation.tags);
    }

    for experience in catalogue.all::<Experience>() {
        audit.required::<Experience, Relation>(&experience.id, &experience.relation);
        audit.each::<Experience, Tag>(&experience.id, &experience.tags);
        for course in &experience.courses {
            audit.optional::<Experience, Language>(&experience.id, course.language.as_deref());
        }
    }

    for dangling in &audit.found {
        warn!("Dangling reference: {dangling}");
    }
    audit.found
}

struct Audit<'a> {
    catalogue: &'a Catalogue,
    found: Vec<DanglingReference>,
}

impl Audit<'_> {
    fn required<O: Entity, T: Entity>(&mut self, owner_id: &str, reference: &str) {
        if self.catalogue.get::<T>(reference).is_none() {
            self.found.push(DanglingReference {
                owner: O::KIND,
                owner_id: owner_id.to_owned(),
                target: T::KIND,
                reference: reference.to_owned(),
            });
        }
    }

    fn optional<O: Entity, T: Entity>(&mut self, owner_id: &str, reference: Option<&str>) {
        if let Some(id) = reference.filter(|id| !id.is_empty()) {
            self.required::<O, T>(owner_id, id);
        }
    }

    fn each<O: Entity, T: Entity>(&mut self, owner_id: &str, references: &[String]) {
        for reference in references {
            self.required::<O, T>(owner_id, reference);
        }
    }
}
