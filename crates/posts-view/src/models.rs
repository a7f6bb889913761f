//! Posts Models
//!
//! Data structures matching the remote endpoint.

use serde::{Deserialize, Serialize};

/// A single post as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Coarse owner partition used by the category buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    All,
    /// Owners up to and including 5
    LowOwner,
    /// Owners from 6 up
    HighOwner,
}

impl Category {
    /// Button order
    pub const ALL: [Category; 3] = [Category::All, Category::LowOwner, Category::HighOwner];

    /// Literal boundary check, no range validation on the owner id
    pub fn matches(&self, owner_id: i64) -> bool {
        match self {
            Category::All => true,
            Category::LowOwner => owner_id <= 5,
            Category::HighOwner => owner_id >= 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::LowOwner => "Volumes 1–5",
            Category::HighOwner => "Volumes 6–10",
        }
    }
}
