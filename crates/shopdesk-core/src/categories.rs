use serde::{Deserialize, Serialize};

/// A selectable product category as served by the category endpoint.
///
/// Document-store backends send the identifier as `_id`; both spellings
/// deserialize into [`Category::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}
