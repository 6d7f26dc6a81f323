//! Route semantics, independent of the HTTP transport.

use std::sync::Arc;

use wayfarer_core::{
    Catalogue, Country, Experience, ExperienceView, Projector, Relation, RelationView, Tag, Window,
    aggregate,
};

use crate::ApiError;

/// Read-only API over a shared catalogue.
///
/// Cloning is cheap; every clone shares the same catalogue.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use wayfarer_api::Api;
/// use wayfarer_core::{Catalogue, Relation, Window};
///
/// let catalogue = Catalogue::builder()
///     .with(Relation { id: "r1".into(), name: "Bordeaux".into(), ..Relation::default() })
///     .build();
/// let api = Api::new(Arc::new(catalogue));
/// assert_eq!(api.relations(&Window::default()).len(), 1);
/// assert!(api.relation("missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Api {
    catalogue: Arc<Catalogue>,
}

impl Api {
    /// Serve `catalogue`.
    #[must_use]
    pub const fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    /// The catalogue being served.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    fn projector(&self) -> Projector<'_> {
        Projector::new(&self.catalogue)
    }

    /// A window of projected relations.
    #[must_use]
    pub fn relations(&self, window: &Window) -> Vec<RelationView<'_>> {
        let projector = self.projector();
        window
            .select(self.catalogue.all::<Relation>())
            .into_iter()
            .map(|relation| projector.relation(relation))
            .collect()
    }

    /// The projected relation stored under `id`.
    ///
    /// # Errors
    /// Returns [`ApiError::RelationNotFound`] when no relation has that `id`.
    pub fn relation(&self, id: &str) -> Result<RelationView<'_>, ApiError> {
        self.catalogue
            .relation(id)
            .map(|relation| self.projector().relation(relation))
            .ok_or_else(|| ApiError::RelationNotFound { id: id.to_owned() })
    }

    /// Projected experiences whose relation reference equals `relation_ref`,
    /// in load order.
    #[must_use]
    pub fn relation_experiences(&self, relation_ref: &str) -> Vec<ExperienceView<'_>> {
        let projector = self.projector();
        self.catalogue
            .experiences_referencing(relation_ref)
            .map(|experience| projector.experience(experience))
            .collect()
    }

    /// A window of projected experiences.
    #[must_use]
    pub fn experiences(&self, window: &Window) -> Vec<ExperienceView<'_>> {
        let projector = self.projector();
        window
            .select(self.catalogue.all::<Experience>())
            .into_iter()
            .map(|experience| projector.experience(experience))
            .collect()
    }

    /// The projected experience stored under `id`.
    ///
    /// # Errors
    /// Returns [`ApiError::ExperienceNotFound`] when no experience has that
    /// `id`.
    pub fn experience(&self, id: &str) -> Result<ExperienceView<'_>, ApiError> {
        self.catalogue
            .experience(id)
            .map(|experience| self.projector().experience(experience))
            .ok_or_else(|| ApiError::ExperienceNotFound { id: id.to_owned() })
    }

    /// A window of countries.
    #[must_use]
    pub fn countries(&self, window: &Window) -> Vec<&Country> {
        window.select(self.catalogue.all::<Country>())
    }

    /// Distinct countries of a window of relations.
    #[must_use]
    pub fn relation_countries(&self, window: &Window) -> Vec<Option<&Country>> {
        aggregate::relation_countries(
            self.projector().resolver(),
            window.select(self.catalogue.all::<Relation>()),
        )
    }

    /// Distinct tags of a window of relations.
    #[must_use]
    pub fn relation_tags(&self, window: &Window) -> Vec<&Tag> {
        aggregate::relation_tags(
            self.projector().resolver(),
            window.select(self.catalogue.all::<Relation>()),
        )
    }

    /// Distinct countries, via their relations, of a window of experiences.
    #[must_use]
    pub fn experience_countries(&self, window: &Window) -> Vec<Option<&Country>> {
        aggregate::experience_countries(
            self.projector().resolver(),
            window.select(self.catalogue.all::<Experience>()),
        )
    }

    /// Distinct tags of a window of experiences.
    #[must_use]
    pub fn experience_tags(&self, window: &Window) -> Vec<&Tag> {
        aggregate::experience_tags(
            self.projector().resolver(),
            window.select(self.catalogue.all::<Experience>()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use wayfarer_core::test_support::sample_catalogue;

    #[fixture]
    fn api() -> Api {
        Api::new(Arc::new(sample_catalogue()))
    }

    fn window(offset: usize, limit: usize, sort: &str) -> Window {
        Window::new(offset, limit, sort)
    }

    #[rstest]
    fn relations_sort_by_name_by_default(api: Api) {
        let ids: Vec<&str> = api
            .relations(&Window::default())
            .iter()
            .map(|view| view.id)
            .collect();
        assert_eq!(ids, ["r2", "r1", "r3"]);
    }

    #[rstest]
    fn experiences_keep_load_order_by_default(api: Api) {
        let ids: Vec<&str> = api
            .experiences(&Window::default())
            .iter()
            .map(|view| view.id)
            .collect();
        assert_eq!(ids, ["e1", "e2", "e3", "e4"]);
    }

    #[rstest]
    #[case("r1", true)]
    #[case("BDX", false)]
    #[case("", false)]
    fn relation_lookup_uses_primary_identifier(api: Api, #[case] id: &str, #[case] found: bool) {
        assert_eq!(api.relation(id).is_ok(), found);
    }

    #[rstest]
    fn missing_experience_names_its_identifier(api: Api) {
        assert_eq!(
            api.experience("nope").err(),
            Some(ApiError::ExperienceNotFound { id: "nope".into() })
        );
    }

    #[rstest]
    fn orphaned_experience_projects_null_relation(api: Api) {
        let view = api.experience("e3").expect("e3 is stored");
        assert!(view.relation.is_none());
    }

    #[rstest]
    #[case("r1", &["e1", "e4"])]
    #[case("gone", &["e3"])]
    #[case("BDX", &[])]
    fn relation_experiences_match_reference_verbatim(
        api: Api,
        #[case] relation_ref: &str,
        #[case] expected: &[&str],
    ) {
        let ids: Vec<&str> = api
            .relation_experiences(relation_ref)
            .iter()
            .map(|view| view.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn countries_window_by_code(api: Api) {
        let codes: Vec<&str> = api
            .countries(&window(1, 5, "code"))
            .iter()
            .map(|country| country.code.as_str())
            .collect();
        assert_eq!(codes, ["FR", "JP"]);
    }

    #[rstest]
    fn relation_countries_keep_one_null(api: Api) {
        let codes: Vec<Option<&str>> = api
            .relation_countries(&Window::default())
            .iter()
            .map(|country| country.map(|c| c.code.as_str()))
            .collect();
        assert_eq!(codes, [Some("JP"), Some("FR"), None]);
    }

    #[rstest]
    fn relation_tags_follow_window_order(api: Api) {
        let count = api.relation_tags(&Window::default()).len();
        assert_eq!(count, 3);
        assert!(api.relation_tags(&window(0, 0, "name")).is_empty());
    }

    #[rstest]
    fn experience_countries_resolve_through_relations(api: Api) {
        let codes: Vec<Option<&str>> = api
            .experience_countries(&Window::default())
            .iter()
            .map(|country| country.map(|c| c.code.as_str()))
            .collect();
        assert_eq!(codes, [Some("FR"), Some("JP"), None]);
    }

    #[rstest]
    fn experience_tags_are_distinct(api: Api) {
        let tags = api.experience_tags(&Window::default());
        assert_eq!(tags.len(), 3);
    }
}
