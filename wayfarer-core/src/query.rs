//! Sorting and offset/limit windowing over collections.
//!
//! Collections are sorted by a field named at runtime. Each sortable kind
//! exposes its fields through [`Sortable::field_value`]; values compare
//! ordinally (byte-wise), and entities lacking the field compare equal to
//! one another and sort after every entity that has it. The sort is stable,
//! so ties keep their input order and sorting by an unknown field returns
//! the collection unchanged.

use std::borrow::Cow;
use std::cmp::Ordering;

/// Offset applied when a request does not supply one.
pub const DEFAULT_OFFSET: usize = 0;
/// Page size applied when a request does not supply one.
pub const DEFAULT_LIMIT: usize = 10;
/// Sort field applied when a request does not supply one.
pub const DEFAULT_SORT: &str = "name";

/// Named-field access used for runtime sorting.
pub trait Sortable {
    /// Return the comparable value of `field`, or `None` when the entity has
    /// no such field or the field holds no comparable value.
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>>;
}

/// Sort key that orders absent values after present ones.
#[derive(Debug, PartialEq, Eq)]
struct SortKey<'a>(Option<Cow<'a, str>>);

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(left), Some(right)) => left.as_bytes().cmp(right.as_bytes()),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A sorted offset/limit page over a collection.
///
/// # Examples
/// ```
/// use wayfarer_core::{Country, Window};
///
/// let countries = vec![
///     Country::new("JP", "Japan"),
///     Country::new("FR", "France"),
///     Country::new("ES", "Spain"),
/// ];
/// let page = Window::new(1, 1, "name").select(&countries);
/// assert_eq!(page, [&countries[0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Number of sorted entities to skip.
    pub offset: usize,
    /// Maximum number of entities to return.
    pub limit: usize,
    /// Field to sort by.
    pub sort: String,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            sort: DEFAULT_SORT.to_owned(),
        }
    }
}

impl Window {
    /// Construct a window.
    pub fn new(offset: usize, limit: usize, sort: impl Into<String>) -> Self {
        Self {
            offset,
            limit,
            sort: sort.into(),
        }
    }

    /// Stable-sort `items` by the window's field, then take
    /// `[offset, offset + limit)` clamped to the collection bounds.
    #[must_use]
    pub fn select<'a, T: Sortable>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.limit == 0 || self.offset >= items.len() {
            return Vec::new();
        }
        let mut keyed: Vec<(SortKey<'a>, &'a T)> = items
            .iter()
            .map(|item| (SortKey(item.field_value(&self.sort)), item))
            .collect();
        keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
        keyed
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .map(|(_, item)| item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: Option<String>,
        position: usize,
    }

    impl Sortable for Item {
        fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
            match field {
                "name" => self.name.as_deref().map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    fn items(names: &[Option<&str>]) -> Vec<Item> {
        names
            .iter()
            .enumerate()
            .map(|(position, name)| Item {
                name: name.map(str::to_owned),
                position,
            })
            .collect()
    }

    fn positions(selected: &[&Item]) -> Vec<usize> {
        selected.iter().map(|item| item.position).collect()
    }

    #[rstest]
    fn sorts_then_windows() {
        let collection = items(&[Some("B"), Some("A"), Some("C")]);
        let page = Window::new(1, 1, "name").select(&collection);
        assert_eq!(positions(&page), [0]);
    }

    #[rstest]
    fn equal_keys_keep_input_order() {
        let collection = items(&[Some("b"), Some("a"), Some("b"), Some("a")]);
        let page = Window::new(0, 4, "name").select(&collection);
        assert_eq!(positions(&page), [1, 3, 0, 2]);
    }

    #[rstest]
    fn absent_values_sort_last_in_input_order() {
        let collection = items(&[None, Some("b"), None, Some("a")]);
        let page = Window::new(0, 10, "name").select(&collection);
        assert_eq!(positions(&page), [3, 1, 0, 2]);
    }

    #[rstest]
    fn unknown_field_keeps_input_order() {
        let collection = items(&[Some("c"), Some("a"), Some("b")]);
        let page = Window::new(0, 10, "colour").select(&collection);
        assert_eq!(positions(&page), [0, 1, 2]);
    }

    #[rstest]
    fn comparison_is_ordinal() {
        let collection = items(&[Some("a"), Some("B"), Some("é"), Some("Z")]);
        let page = Window::new(0, 10, "name").select(&collection);
        assert_eq!(positions(&page), [1, 3, 0, 2]);
    }

    #[rstest]
    #[case(0, 0, &[])]
    #[case(3, 10, &[])]
    #[case(7, 1, &[])]
    #[case(2, 10, &[2])]
    #[case(0, 2, &[1, 0])]
    #[case(1, usize::MAX, &[0, 2])]
    fn clamps_to_collection_bounds(
        #[case] offset: usize,
        #[case] limit: usize,
        #[case] expected: &[usize],
    ) {
        let collection = items(&[Some("B"), Some("A"), Some("C")]);
        let page = Window::new(offset, limit, "name").select(&collection);
        assert_eq!(positions(&page), expected);
    }

    #[rstest]
    fn defaults_match_documented_values() {
        assert_eq!(Window::default(), Window::new(0, 10, "name"));
    }

    proptest! {
        #[test]
        fn full_window_is_a_stable_sort(
            names in proptest::collection::vec(proptest::option::of("[a-c]"), 0..24)
        ) {
            let borrowed: Vec<Option<&str>> = names.iter().map(Option::as_deref).collect();
            let collection = items(&borrowed);
            let page = Window::new(0, collection.len(), "name").select(&collection);
            prop_assert_eq!(page.len(), collection.len());

            for pair in page.windows(2) {
                let [left, right] = pair else { continue };
                let ordering = SortKey(left.field_value("name"))
                    .cmp(&SortKey(right.field_value("name")));
                prop_assert!(ordering != Ordering::Greater);
                if ordering == Ordering::Equal {
                    prop_assert!(left.position < right.position);
                }
            }
        }

        #[test]
        fn window_is_a_slice_of_the_full_sort(
            names in proptest::collection::vec(proptest::option::of("[a-z]{1,3}"), 0..24),
            offset in 0_usize..30,
            limit in 0_usize..30,
        ) {
            let borrowed: Vec<Option<&str>> = names.iter().map(Option::as_deref).collect();
            let collection = items(&borrowed);
            let full = Window::new(0, collection.len(), "name").select(&collection);
            let page = Window::new(offset, limit, "name").select(&collection);
            let expected: Vec<&Item> = full.into_iter().skip(offset).take(limit).collect();
            prop_assert_eq!(page, expected);
        }
    }
}
