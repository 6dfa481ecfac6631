use crate::data::{EnrichedProduct, ProductId, Sex};

/// Shown in place of the category icon when there is no category or the
/// category has no icon.
pub const DEFAULT_CATEGORY_ICON: &str = "🛒";
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNKNOWN_USER: &str = "Unknown User";
/// Shown instead of the table when no product passes the filters.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// How the user cell of a row is highlighted.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum UserHighlight {
    /// A male user.
    Link,
    /// A female user, or no resolved user at all.
    Danger,
}

impl UserHighlight {
    pub fn css_class(self) -> &'static str {
        match self {
            UserHighlight::Link => "has-text-link",
            UserHighlight::Danger => "has-text-danger",
        }
    }
}

/// The display labels of one row of the product table. Absent associations
/// have already been replaced with their fallback labels.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProductRow<'a> {
    pub id: ProductId,
    pub name: &'a str,
    pub category_icon: &'a str,
    pub category_title: &'a str,
    pub user_name: &'a str,
    pub highlight: UserHighlight,
}

impl<'a> ProductRow<'a> {
    /// The category cell, e.g. "🍺 - Drinks".
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category_icon, self.category_title)
    }
}

impl<'a> From<EnrichedProduct<'a>> for ProductRow<'a> {
    fn from(product: EnrichedProduct<'a>) -> Self {
        let EnrichedProduct { product, category, user } = product;

        let category_icon = category
            .map(|category| category.icon.as_str())
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_ICON);
        let category_title = category.map_or(UNKNOWN_CATEGORY, |category| category.title.as_str());
        let user_name = user.map_or(UNKNOWN_USER, |user| user.name.as_str());
        let highlight = match user {
            Some(user) if user.sex == Sex::Male => UserHighlight::Link,
            _ => UserHighlight::Danger,
        };

        ProductRow {
            id: product.id,
            name: &product.name,
            category_icon,
            category_title,
            user_name,
            highlight,
        }
    }
}

pub fn rows<'a>(products: &[EnrichedProduct<'a>]) -> Vec<ProductRow<'a>> {
    products.iter().copied().map(ProductRow::from).collect()
}
