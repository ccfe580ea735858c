//! Submit handling: validate, dispatch, and report.

use shopdesk_client::CatalogClient;
use shopdesk_core::{validate, MissingFieldError, ProductDraft};

use crate::notify::{Navigator, NotificationKind, Notifier};

pub const VALIDATION_FAILED: &str = "Please check all fields including photo";
pub const PRODUCT_CREATED: &str = "Product Created Successfully";
pub const SUBMIT_FAILED: &str = "Something went wrong";
/// Where a successful submit navigates to.
pub const ADMIN_PRODUCTS_PATH: &str = "/dashboard/admin/products";

/// Where the controller is in the submit cycle.
///
/// `Blocked`, `Rejected`, and `Failed` all leave the form editable; a new
/// submit starts over from validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Blocked,
    Submitting,
    Succeeded,
    Rejected,
    Failed,
}

/// Result of a submit attempt that reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    RejectedByServer { message: String },
    TransportFailure,
}

pub struct SubmissionController<N, V> {
    client: CatalogClient,
    notifier: N,
    navigator: V,
    state: SubmissionState,
}

impl<N: Notifier, V: Navigator> SubmissionController<N, V> {
    pub fn new(client: CatalogClient, notifier: N, navigator: V) -> Self {
        Self {
            client,
            notifier,
            navigator,
            state: SubmissionState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Runs one submit attempt against a snapshot of `draft`.
    ///
    /// Emits exactly one notification. Navigates to
    /// [`ADMIN_PRODUCTS_PATH`] only on success. `&mut self` keeps a single
    /// attempt in flight per controller.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] when validation blocks the attempt; no
    /// request is sent in that case.
    pub async fn submit(
        &mut self,
        draft: &ProductDraft,
    ) -> Result<SubmissionOutcome, MissingFieldError> {
        self.state = SubmissionState::Validating;
        let valid = match validate(draft) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::info!(missing = %e, "submit blocked by validation");
                self.notifier.notify(NotificationKind::Error, VALIDATION_FAILED);
                self.state = SubmissionState::Blocked;
                return Err(e);
            }
        };

        self.state = SubmissionState::Submitting;
        let outcome = match self.client.create_product(&valid).await {
            Ok(response) if response.success => SubmissionOutcome::Success,
            Ok(response) => SubmissionOutcome::RejectedByServer {
                message: response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| SUBMIT_FAILED.to_owned()),
            },
            Err(e) => {
                tracing::warn!(error = %e, "create-product request failed");
                SubmissionOutcome::TransportFailure
            }
        };

        match &outcome {
            SubmissionOutcome::Success => {
                tracing::info!(name = %valid.name, "product created");
                self.notifier.notify(NotificationKind::Success, PRODUCT_CREATED);
                self.navigator.navigate(ADMIN_PRODUCTS_PATH);
                self.state = SubmissionState::Succeeded;
            }
            SubmissionOutcome::RejectedByServer { message } => {
                tracing::warn!(%message, "create-product rejected by server");
                self.notifier.notify(NotificationKind::Error, message);
                self.state = SubmissionState::Rejected;
            }
            SubmissionOutcome::TransportFailure => {
                self.notifier.notify(NotificationKind::Error, SUBMIT_FAILED);
                self.state = SubmissionState::Failed;
            }
        }

        Ok(outcome)
    }
}
