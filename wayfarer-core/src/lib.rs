//! Core domain types and join logic for the Wayfarer data API.
//!
//! The crate models the five entity kinds served by the API (countries,
//! languages, tags, relations and experiences), holds them in an immutable
//! [`Catalogue`], and turns stored identifier references into denormalised
//! views:
//!
//! - [`Resolver`] resolves single references and reference lists against the
//!   catalogue, degrading misses to `None` or omission.
//! - [`Projector`] builds [`RelationView`], [`ExperienceView`] and
//!   [`CourseView`] values that embed every resolved reference.
//! - [`Window`] sorts a collection by a named field and slices an
//!   offset/limit page out of it.
//! - [`aggregate`] deduplicates the countries and tags reachable from a
//!   windowed collection.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{Catalogue, Country, Projector, Relation};
//!
//! let catalogue = Catalogue::builder()
//!     .with(Country::new("FR", "France"))
//!     .with(Relation {
//!         id: "r1".into(),
//!         country: Some("FR".into()),
//!         ..Relation::default()
//!     })
//!     .build();
//!
//! let relation = catalogue.relation("r1").expect("relation is stored");
//! let view = Projector::new(&catalogue).relation(relation);
//! assert_eq!(view.country.map(|c| c.name.as_str()), Some("France"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
mod catalogue;
mod country;
mod descriptor;
mod experience;
pub mod query;
mod relation;
mod resolve;
mod view;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalogue::{Catalogue, CatalogueBuilder, Entity, EntityKind, Table};
pub use country::Country;
pub use descriptor::{Language, Tag};
pub use experience::{Course, Experience};
pub use query::{Sortable, Window};
pub use relation::Relation;
pub use resolve::Resolver;
pub use view::{CourseView, ExperienceView, Projector, RelationView};
