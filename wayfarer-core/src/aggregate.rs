//! Distinct related entities across a windowed collection.
//!
//! Deduplication compares rendered values structurally rather than by
//! identifier, keeps first-occurrence order, and keeps a single `None` when
//! any entity's reference failed to resolve.

use crate::{Country, Experience, Relation, Resolver, Tag};

/// Deduplicate `items` by structural equality, preserving first occurrences.
///
/// # Examples
/// ```
/// use wayfarer_core::aggregate::distinct_of;
///
/// let distinct = distinct_of([Some(2), None, Some(1), Some(2), None]);
/// assert_eq!(distinct, [Some(2), None, Some(1)]);
/// ```
#[must_use]
pub fn distinct_of<T, I>(items: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut distinct: Vec<T> = Vec::new();
    for item in items {
        if !distinct.contains(&item) {
            distinct.push(item);
        }
    }
    distinct
}

/// Distinct countries of `relations`, with `None` for unresolved references.
#[must_use]
pub fn relation_countries<'a, I>(resolver: Resolver<'a>, relations: I) -> Vec<Option<&'a Country>>
where
    I: IntoIterator<Item = &'a Relation>,
{
    distinct_of(
        relations
            .into_iter()
            .map(|relation| resolver.one(relation.country.as_deref())),
    )
}

/// Distinct resolved tags of `relations`.
#[must_use]
pub fn relation_tags<'a, I>(resolver: Resolver<'a>, relations: I) -> Vec<&'a Tag>
where
    I: IntoIterator<Item = &'a Relation>,
{
    distinct_of(
        relations
            .into_iter()
            .flat_map(|relation| resolver.many::<Tag, _>(&relation.tags)),
    )
}

/// Distinct countries reached through each experience's relation.
///
/// An experience whose relation or relation country does not resolve
/// contributes `None`.
#[must_use]
pub fn experience_countries<'a, I>(
    resolver: Resolver<'a>,
    experiences: I,
) -> Vec<Option<&'a Country>>
where
    I: IntoIterator<Item = &'a Experience>,
{
    distinct_of(experiences.into_iter().map(|experience| {
        resolver
            .one::<Relation>(Some(experience.relation.as_str()))
            .and_then(|relation| resolver.one(relation.country.as_deref()))
    }))
}

/// Distinct resolved tags of `experiences`.
#[must_use]
pub fn experience_tags<'a, I>(resolver: Resolver<'a>, experiences: I) -> Vec<&'a Tag>
where
    I: IntoIterator<Item = &'a Experience>,
{
    distinct_of(
        experiences
            .into_iter()
            .flat_map(|experience| resolver.many::<Tag, _>(&experience.tags)),
    )
}
