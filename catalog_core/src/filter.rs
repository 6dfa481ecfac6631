use tracing::trace;

use crate::data::{EnrichedProduct, UserId};

/// What the user has chosen to filter the product table by.
///
/// The state is only changed through [`FilterState::apply`], which consumes
/// the current state and returns the next one.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FilterState {
    /// The user whose products are shown. None shows the products of every
    /// user, including products with no resolved user.
    pub selected_user: Option<UserId>,
    /// Text that product names must contain, ignoring case. Empty matches
    /// every product.
    pub search: String,
}

/// An interaction that changes the filter state.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FilterAction {
    /// Selects the user, or clears the user filter if the user is already
    /// selected.
    ToggleUser(UserId),
    /// Replaces the search text.
    EditSearch(String),
    /// Clears the search text and leaves the user filter alone.
    ClearSearch,
    /// Clears both the user filter and the search text.
    ResetAll,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::ToggleUser(id) => {
                let selected_user = if self.selected_user == Some(id) { None } else { Some(id) };
                Self { selected_user, ..self }
            }
            FilterAction::EditSearch(search) => Self { search, ..self },
            FilterAction::ClearSearch => Self { search: String::new(), ..self },
            FilterAction::ResetAll => Self::default(),
        }
    }

    pub fn is_user_selected(&self, id: UserId) -> bool {
        self.selected_user == Some(id)
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Whether the product passes both the user filter and the search.
    pub fn matches(&self, product: &EnrichedProduct<'_>) -> bool {
        self.matches_user(product) && name_contains(product.name(), &self.search.to_lowercase())
    }

    /// Returns the products that pass the filters, in their original order.
    pub fn filter<'a>(&self, products: &[EnrichedProduct<'a>]) -> Vec<EnrichedProduct<'a>> {
        // lowercase the needle once rather than per product
        let needle = self.search.to_lowercase();
        let visible: Vec<_> = products
            .iter()
            .filter(|product| self.matches_user(product) && name_contains(product.name(), &needle))
            .copied()
            .collect();

        trace!(
            selected_user = ?self.selected_user,
            search = %self.search,
            visible = visible.len(),
            total = products.len(),
            "filtered products"
        );
        visible
    }

    fn matches_user(&self, product: &EnrichedProduct<'_>) -> bool {
        match self.selected_user {
            None => true,
            // a product without a resolved user never matches a selected user
            Some(selected) => product.user_id() == Some(selected),
        }
    }
}

// `needle` must already be lowercase.
fn name_contains(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod test {
    use crate::data::{Category, CategoryId, Product, ProductId, Sex, User};

    use super::*;

    struct Fixture {
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    }

    impl Fixture {
        // Max owns Drinks, which holds Cola; Water's category does not exist.
        fn scenario() -> Self {
            Fixture {
                users: vec![User { id: UserId(1), name: "Max".to_string(), sex: Sex::Male }],
                categories: vec![Category {
                    id: CategoryId(1),
                    title: "Drinks".to_string(),
                    icon: "🍸".to_string(),
                    owner_id: UserId(1),
                }],
                products: vec![
                    Product { id: ProductId(1), name: "Cola".to_string(), category_id: CategoryId(1) },
                    Product {
                        id: ProductId(2),
                        name: "Water".to_string(),
                        category_id: CategoryId(99),
                    },
                ],
            }
        }

        fn enriched(&self) -> Vec<EnrichedProduct<'_>> {
            crate::data::denormalize(&self.products, &self.categories, &self.users)
        }
    }

    fn ids(products: &[EnrichedProduct<'_>]) -> Vec<u64> {
        products.iter().map(|p| p.id().0).collect()
    }

    #[test]
    fn default_state_shows_everything() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();
        assert_eq!(ids(&FilterState::new().filter(&enriched)), vec![1, 2]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new().apply(FilterAction::EditSearch("col".to_string()));
        assert_eq!(ids(&state.filter(&enriched)), vec![1]);

        let state = state.apply(FilterAction::EditSearch("WAT".to_string()));
        assert_eq!(ids(&state.filter(&enriched)), vec![2]);
    }

    #[test]
    fn search_matches_substring_anywhere() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new().apply(FilterAction::EditSearch("ATE".to_string()));
        assert_eq!(ids(&state.filter(&enriched)), vec![2]);

        let state = state.apply(FilterAction::EditSearch("nothing".to_string()));
        assert!(state.filter(&enriched).is_empty());
    }

    #[test]
    fn user_filter_excludes_products_without_user() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new().apply(FilterAction::ToggleUser(UserId(1)));
        assert_eq!(ids(&state.filter(&enriched)), vec![1]);
        assert!(!state.matches(&enriched[1]));
    }

    #[test]
    fn user_filter_for_unknown_user_matches_nothing() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new().apply(FilterAction::ToggleUser(UserId(7)));
        assert!(state.filter(&enriched).is_empty());
    }

    #[test]
    fn filters_combine() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(1)))
            .apply(FilterAction::EditSearch("water".to_string()));
        assert!(state.filter(&enriched).is_empty());
    }

    #[test]
    fn toggling_twice_clears_user() {
        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(1)))
            .apply(FilterAction::ToggleUser(UserId(1)));
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn toggling_another_user_switches() {
        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(1)))
            .apply(FilterAction::ToggleUser(UserId(2)));
        assert_eq!(state.selected_user, Some(UserId(2)));
        assert!(state.is_user_selected(UserId(2)));
        assert!(!state.is_user_selected(UserId(1)));
    }

    #[test]
    fn clear_search_keeps_user() {
        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(3)))
            .apply(FilterAction::EditSearch("milk".to_string()));
        assert!(state.has_search());

        let state = state.apply(FilterAction::ClearSearch);
        assert!(!state.has_search());
        assert_eq!(state.selected_user, Some(UserId(3)));
    }

    #[test]
    fn reset_all_restores_defaults() {
        let fixture = Fixture::scenario();
        let enriched = fixture.enriched();

        let state = FilterState::new()
            .apply(FilterAction::ToggleUser(UserId(1)))
            .apply(FilterAction::EditSearch("col".to_string()))
            .apply(FilterAction::ResetAll);
        assert_eq!(state, FilterState::default());
        assert_eq!(ids(&state.filter(&enriched)), vec![1, 2]);
    }
}
