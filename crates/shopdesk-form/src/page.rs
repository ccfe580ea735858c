//! The Create Product page: one form session from mount to navigation.

use shopdesk_client::CatalogClient;
use shopdesk_core::{Category, FileHandle, MissingFieldError, ShippingFlag};

use crate::categories::{CategoryLoad, CategorySource};
use crate::notify::{Navigator, Notifier};
use crate::preview::{PhotoPreview, PreviewRegistry};
use crate::state::{category_options, shipping_options, ProductFormState};
use crate::submit::{SubmissionController, SubmissionOutcome, SubmissionState};
use crate::view::{
    FormView, ImageView, InputView, SelectView, CATEGORY_PLACEHOLDER, HEADING, PHOTO_ALT,
    SHIPPING_PLACEHOLDER, SUBMIT_LABEL, UPLOAD_LABEL,
};

/// Composes the category list, the draft, the photo preview, and the submit
/// controller around a shared notifier.
///
/// The preview is re-derived from every photo change made through
/// [`CreateProductPage::set_photo`] and released when the page is dropped.
pub struct CreateProductPage<N, V> {
    client: CatalogClient,
    notifier: N,
    categories: CategorySource,
    form: ProductFormState,
    preview: PhotoPreview,
    controller: SubmissionController<N, V>,
}

impl<N, V> CreateProductPage<N, V>
where
    N: Notifier + Clone,
    V: Navigator,
{
    pub fn new(client: CatalogClient, notifier: N, navigator: V, registry: PreviewRegistry) -> Self {
        let controller = SubmissionController::new(client.clone(), notifier.clone(), navigator);
        Self {
            client,
            notifier,
            categories: CategorySource::new(),
            form: ProductFormState::new(),
            preview: PhotoPreview::new(registry),
            controller,
        }
    }

    /// Activates the page: fetches the category list once.
    pub async fn mount(&mut self) -> CategoryLoad {
        self.categories.load(&self.client, &self.notifier).await
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.categories.categories()
    }

    /// Looks up a fetched category by its exact id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.find_by_id(id)
    }

    #[must_use]
    pub fn form(&self) -> &ProductFormState {
        &self.form
    }

    #[must_use]
    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.url()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.set_name(name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.set_description(description);
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.form.set_price(price);
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.form.set_quantity(quantity);
    }

    pub fn select_category(&mut self, category_id: impl Into<String>) {
        self.form.select_category(category_id);
    }

    /// Selects the category whose label matches `name`, returning its id.
    pub fn select_category_by_name(&mut self, name: &str) -> Option<String> {
        let id = self.categories.find_by_name(name)?.id.clone();
        self.form.select_category(id.clone());
        Some(id)
    }

    pub fn select_shipping(&mut self, value: &str) -> Option<ShippingFlag> {
        self.form.select_shipping(value)
    }

    pub fn set_shipping(&mut self, shipping: ShippingFlag) {
        self.form.set_shipping(shipping);
    }

    pub fn set_photo(&mut self, photo: Option<FileHandle>) {
        self.preview.update(photo.as_ref());
        self.form.set_photo(photo);
    }

    /// Submits the current draft.
    ///
    /// A successful submit ends the session: the draft and preview are reset.
    /// Any other result leaves every field as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] when validation blocks the attempt.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, MissingFieldError> {
        let outcome = self.controller.submit(self.form.draft()).await?;
        if outcome == SubmissionOutcome::Success {
            self.form.reset();
            self.preview.clear();
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        let draft = self.form.draft();
        let input = |placeholder: &'static str, value: &str| InputView {
            placeholder,
            value: value.to_owned(),
        };
        FormView {
            heading: HEADING,
            category: SelectView {
                placeholder: CATEGORY_PLACEHOLDER,
                options: category_options(self.categories.categories()),
                selected: draft.category_id.clone(),
            },
            upload_label: draft
                .photo
                .as_ref()
                .map_or_else(|| UPLOAD_LABEL.to_owned(), |p| p.name().to_owned()),
            preview: self.preview.url().map(|src| ImageView {
                src: src.to_owned(),
                alt: PHOTO_ALT,
            }),
            name: input("write a name", &draft.name),
            description: input("write a description", &draft.description),
            price: input("write a price", &draft.price),
            quantity: input("write a quantity", &draft.quantity),
            shipping: SelectView {
                placeholder: SHIPPING_PLACEHOLDER,
                options: shipping_options(),
                selected: draft.shipping.map(|s| s.value().to_owned()),
            },
            submit_label: SUBMIT_LABEL,
        }
    }

    /// Tears the page down, releasing any live preview URL.
    pub fn unmount(mut self) {
        self.preview.clear();
    }
}
