use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// A short description of the category, e.g. "Drinks"
    pub title: String,
    /// An emoji shown in front of the title. May be empty.
    pub icon: String,
    /// The user who owns this category. Products in the category are
    /// attributed to this user.
    pub owner_id: UserId,
}
