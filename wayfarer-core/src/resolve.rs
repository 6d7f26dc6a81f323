//! Resolve identifier references against a [`Catalogue`].
//!
//! A reference that does not resolve is never an error: single references
//! become `None` and misses inside reference lists are dropped.

use crate::{Catalogue, Entity};

/// Resolves references against a borrowed catalogue.
///
/// # Examples
/// ```
/// use wayfarer_core::{Catalogue, Country, Resolver};
///
/// let catalogue = Catalogue::builder().with(Country::new("FR", "France")).build();
/// let resolver = Resolver::new(&catalogue);
///
/// let hit: Option<&Country> = resolver.one(Some("FR"));
/// assert!(hit.is_some());
/// let misses: Vec<&Country> = resolver.many(&["XX", "FR", "YY"]);
/// assert_eq!(misses.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> Resolver<'a> {
    /// Build a resolver over `catalogue`.
    #[must_use]
    pub const fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Resolve a single reference.
    ///
    /// Returns `None` when `id` is absent, empty, or unknown.
    #[must_use]
    pub fn one<E: Entity>(&self, id: Option<&str>) -> Option<&'a E> {
        id.filter(|key| !key.is_empty())
            .and_then(|key| self.catalogue.get(key))
    }

    /// Resolve a list of references, dropping misses.
    ///
    /// Hits keep their relative order, duplicates included.
    #[must_use]
    pub fn many<E: Entity, S: AsRef<str>>(&self, ids: &[S]) -> Vec<&'a E> {
        ids.iter()
            .filter_map(|id| self.one(Some(id.as_ref())))
            .collect()
    }
}
