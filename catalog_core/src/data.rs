mod catalog;
mod category;
mod enriched;
mod product;
mod user;

pub use catalog::{Catalog, UnresolvedReference, CATEGORIES_FILE, PRODUCTS_FILE, USERS_FILE};
pub use category::{Category, CategoryId};
pub use enriched::{denormalize, EnrichedProduct};
pub use product::{Product, ProductId};
pub use user::{Sex, User, UserId};
