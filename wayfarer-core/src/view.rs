//! Denormalised, reference-expanded views of relations and experiences.
//!
//! Views borrow from the [`Catalogue`] they were projected from and
//! serialise to the JSON shapes returned by the API. Projection never fails:
//! unresolved references become `null` or are left out of lists.

use serde::Serialize;
use serde_json::Value;

use crate::{Catalogue, Country, Course, Experience, Language, Relation, Resolver, Tag};

/// Public shape of a [`Relation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationView<'a> {
    /// Primary identifier.
    pub id: &'a str,
    /// Secondary identifier.
    pub code: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Free-text description.
    pub description: &'a str,
    /// Opaque location data.
    pub locations: &'a Value,
    /// Cover image location.
    #[serde(rename = "imageURL")]
    pub image_url: &'a str,
    /// Resolved country, or `None` when the reference misses.
    pub country: Option<&'a Country>,
    /// Resolved languages.
    pub languages: Vec<&'a Language>,
    /// Resolved tags.
    pub tags: Vec<&'a Tag>,
}

/// Public shape of an [`Experience`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView<'a> {
    /// Primary identifier.
    pub id: &'a str,
    /// Display title.
    pub title: &'a str,
    /// Short summary.
    pub summary: &'a str,
    /// Cover image location.
    #[serde(rename = "imageURL")]
    pub image_url: &'a str,
    /// Departure date.
    pub departure_date: &'a str,
    /// Return date.
    pub return_date: &'a str,
    /// Projected relation, or `None` when the reference misses.
    pub relation: Option<RelationView<'a>>,
    /// Resolved tags.
    pub tags: Vec<&'a Tag>,
    /// Projected courses.
    pub courses: Vec<CourseView<'a>>,
    /// Opaque contact details.
    pub contact: &'a Value,
}

/// Public shape of a [`Course`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseView<'a> {
    /// Course name.
    pub name: &'a str,
    /// Course description.
    pub description: &'a str,
    /// Resolved language, or `None` when the reference misses.
    pub language: Option<&'a Language>,
}

/// Projects stored records into their public views.
///
/// # Examples
/// ```
/// use wayfarer_core::{Catalogue, Experience, Projector};
///
/// let catalogue = Catalogue::builder()
///     .with(Experience {
///         id: "e1".into(),
///         relation: "missing".into(),
///         ..Experience::default()
///     })
///     .build();
///
/// let experience = catalogue.experience("e1").expect("experience is stored");
/// let view = Projector::new(&catalogue).experience(experience);
/// assert!(view.relation.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    resolver: Resolver<'a>,
}

impl<'a> Projector<'a> {
    /// Build a projector resolving against `catalogue`.
    #[must_use]
    pub const fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            resolver: Resolver::new(catalogue),
        }
    }

    /// The resolver used for reference expansion.
    #[must_use]
    pub const fn resolver(&self) -> Resolver<'a> {
        self.resolver
    }

    /// Expand a relation's country, language and tag references.
    #[must_use]
    pub fn relation(&self, relation: &'a Relation) -> RelationView<'a> {
        RelationView {
            id: &relation.id,
            code: &relation.code,
            name: &relation.name,
            description: &relation.description,
            locations: &relation.locations,
            image_url: &relation.image_url,
            country: self.resolver.one(relation.country.as_deref()),
            languages: self.resolver.many(&relation.languages),
            tags: self.resolver.many(&relation.tags),
        }
    }

    /// Expand an experience, its relation, tags and courses.
    ///
    /// A relation reference that misses yields `relation: None`; every
    /// experience route shares this fallback.
    #[must_use]
    pub fn experience(&self, experience: &'a Experience) -> ExperienceView<'a> {
        let relation = self
            .resolver
            .one::<Relation>(Some(experience.relation.as_str()))
            .map(|relation| self.relation(relation));
        ExperienceView {
            id: &experience.id,
            title: &experience.title,
            summary: &experience.summary,
            image_url: &experience.image_url,
            departure_date: &experience.departure_date,
            return_date: &experience.return_date,
            relation,
            tags: self.resolver.many(&experience.tags),
            courses: experience
                .courses
                .iter()
                .map(|course| self.course(course))
                .collect(),
            contact: &experience.contact,
        }
    }

    /// Expand a course's language reference.
    #[must_use]
    pub fn course(&self, course: &'a Course) -> CourseView<'a> {
        CourseView {
            name: &course.name,
            description: &course.description,
            language: self.resolver.one(course.language.as_deref()),
        }
    }
}
