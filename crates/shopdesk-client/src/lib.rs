//! HTTP client for the storefront admin API: category listing and
//! multipart product creation.

pub mod client;
pub mod error;
pub mod form;
pub mod types;

pub use client::{CatalogClient, CATEGORY_PATH, CREATE_PRODUCT_PATH};
pub use error::ClientError;
pub use form::{product_form, PART_NAMES};
pub use types::{CategoryResponse, CreateProductResponse};
