mod app_config;
mod categories;
mod config;
mod products;

pub use app_config::{AppConfig, Environment};
pub use categories::Category;
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use products::{
    content_type_for, validate, FileHandle, MissingFieldError, ProductDraft, RequiredField,
    ShippingFlag, ValidDraft,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
