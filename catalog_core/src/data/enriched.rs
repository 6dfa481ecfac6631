use std::{collections::HashMap, hash::Hash};

use tracing::debug;

use super::{
    category::Category,
    product::{Product, ProductId},
    user::{User, UserId},
};

/// A product together with the category and user it resolves to.
///
/// The associations borrow from the collections the product was joined
/// against. Either one is None when its foreign key does not resolve; the
/// user is always None when the category is.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EnrichedProduct<'a> {
    pub product: &'a Product,
    pub category: Option<&'a Category>,
    pub user: Option<&'a User>,
}

impl<'a> EnrichedProduct<'a> {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &'a str {
        &self.product.name
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.map(|user| user.id)
    }
}

/// Joins each product to its category, and through the category's owner to a
/// user. Returns one `EnrichedProduct` per product, in the order of
/// `products`. References that do not resolve become None.
pub fn denormalize<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    users: &'a [User],
) -> Vec<EnrichedProduct<'a>> {
    let categories_by_id = index_first(categories, |category| category.id);
    let users_by_id = index_first(users, |user| user.id);

    let enriched: Vec<_> = products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            let user =
                category.and_then(|category| users_by_id.get(&category.owner_id).copied());
            EnrichedProduct { product, category, user }
        })
        .collect();

    debug!(
        products = enriched.len(),
        without_category = enriched.iter().filter(|p| p.category.is_none()).count(),
        without_user = enriched.iter().filter(|p| p.user.is_none()).count(),
        "denormalized products"
    );
    enriched
}

// Indexes the records by key. If two records share a key, the one that comes
// first in the slice is kept.
fn index_first<T, K, F>(records: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(key(record)).or_insert(record);
    }
    index
}
