use std::{fmt, fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    category::{Category, CategoryId},
    enriched::{denormalize, EnrichedProduct},
    product::{Product, ProductId},
    user::{User, UserId},
};
use crate::error::{CatalogError, Result};

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

const BUILTIN_USERS: &str = include_str!("../../seed/users.json");
const BUILTIN_CATEGORIES: &str = include_str!("../../seed/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../../seed/products.json");

/// The seed data of the browser: users, the categories they own, and the
/// products in those categories. The order of each collection is the order
/// in which its records are displayed.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// A foreign key in the catalog that matches no record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnresolvedReference {
    /// The product's category ID matches no category.
    ProductCategory { product: ProductId, category: CategoryId },
    /// The category's owner ID matches no user.
    CategoryOwner { category: CategoryId, owner: UserId },
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self { users, categories, products }
    }

    /// The catalog compiled into this library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_USERS, BUILTIN_CATEGORIES, BUILTIN_PRODUCTS)
    }

    /// Parses a catalog from the contents of the three JSON files. Each must
    /// hold an array of records.
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
        Ok(Self {
            users: parse_records(USERS_FILE, users)?,
            categories: parse_records(CATEGORIES_FILE, categories)?,
            products: parse_records(PRODUCTS_FILE, products)?,
        })
    }

    /// Loads a catalog from a directory containing `users.json`,
    /// `categories.json` and `products.json`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        debug!(dir = %dir.display(), "loading catalog");
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| CatalogError::io(path, source))
        };
        Self::from_json(&read(USERS_FILE)?, &read(CATEGORIES_FILE)?, &read(PRODUCTS_FILE)?)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Every product joined with its category and owning user, in product
    /// order.
    pub fn enriched_products(&self) -> Vec<EnrichedProduct<'_>> {
        denormalize(&self.products, &self.categories, &self.users)
    }

    /// Lists the foreign keys that do not resolve: products first, then
    /// categories, each in collection order. A category that no product uses
    /// is still checked.
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let dangling_products = self
            .products
            .iter()
            .filter(|product| !self.categories.iter().any(|c| c.id == product.category_id))
            .map(|product| UnresolvedReference::ProductCategory {
                product: product.id,
                category: product.category_id,
            });
        let dangling_categories = self
            .categories
            .iter()
            .filter(|category| self.get_user(category.owner_id).is_none())
            .map(|category| UnresolvedReference::CategoryOwner {
                category: category.id,
                owner: category.owner_id,
            });

        dangling_products.chain(dangling_categories).collect()
    }
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReference::ProductCategory { product, category } => {
                write!(f, "product {product} refers to missing category {category}")
            }
            UnresolvedReference::CategoryOwner { category, owner } => {
                write!(f, "category {category} refers to missing owner {owner}")
            }
        }
    }
}

fn parse_records<T: DeserializeOwned>(context: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::json(context, source))
}
