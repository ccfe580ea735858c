//! The category list backing the category selector.

use shopdesk_client::CatalogClient;
use shopdesk_core::Category;

use crate::notify::{NotificationKind, Notifier};

/// Shown when the category request fails before a usable reply arrives.
pub const CATEGORY_FETCH_FAILED: &str = "Something went wrong in getting category";

/// What a single [`CategorySource::load`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLoad {
    /// The list was replaced with this many categories.
    Loaded(usize),
    /// The server answered `success: false`; the message was shown.
    Rejected(String),
    /// The request failed; the fixed fallback message was shown.
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct CategorySource {
    categories: Vec<Category>,
}

impl CategorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues one category request and applies the result.
    ///
    /// On success the list is replaced wholesale. On rejection or failure the
    /// current list is kept and exactly one error notification is emitted.
    /// There is no retry.
    pub async fn load(&mut self, client: &CatalogClient, notifier: &impl Notifier) -> CategoryLoad {
        match client.get_categories().await {
            Ok(response) if response.success => {
                self.categories = response.category.unwrap_or_default();
                tracing::info!(count = self.categories.len(), "categories loaded");
                CategoryLoad::Loaded(self.categories.len())
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| CATEGORY_FETCH_FAILED.to_owned());
                tracing::warn!(%message, "category request rejected by server");
                notifier.notify(NotificationKind::Error, &message);
                CategoryLoad::Rejected(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "category request failed");
                notifier.notify(NotificationKind::Error, CATEGORY_FETCH_FAILED);
                CategoryLoad::Failed
            }
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }
}
