//! Facade crate for the Wayfarer data API.
//!
//! This crate re-exports the core domain types and exposes dataset loading
//! and the HTTP router behind feature flags.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Catalogue, CatalogueBuilder, Country, Course, CourseView, Entity, EntityKind, Experience,
    ExperienceView, Language, Projector, Relation, RelationView, Resolver, Sortable, Tag, Window,
    aggregate,
};

#[cfg(feature = "data")]
pub use wayfarer_data::{DanglingReference, DatasetError, dangling_references, load_dataset};

#[cfg(feature = "api")]
pub use wayfarer_api::{Api, ApiError, create_router};
