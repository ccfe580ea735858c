//! Response envelopes for the admin API.
//!
//! Both endpoints answer `{"success": bool, "message"?: string, ...}`.
//! `success: false` is a business-level rejection, carried as data.

use serde::Deserialize;
use shopdesk_core::Category;

/// Body of `GET /api/v1/category/get-category`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category: Option<Vec<Category>>,
}

/// Body of `POST /api/v1/product/create-product`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
