pub mod data;
pub mod error;
pub mod filter;
pub mod view;

pub use data::{
    denormalize, Catalog, Category, CategoryId, EnrichedProduct, Product, ProductId, Sex,
    UnresolvedReference, User, UserId,
};
pub use error::{CatalogError, Result};
pub use filter::{FilterAction, FilterState};
