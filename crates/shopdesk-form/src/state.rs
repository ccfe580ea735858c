//! Editable draft state and selector options.

use shopdesk_core::{Category, FileHandle, ProductDraft, ShippingFlag};

/// One entry in a dropdown: the stored `value` and the shown `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Category selector options, in the order the server listed them.
#[must_use]
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    categories
        .iter()
        .map(|c| SelectOption {
            value: c.id.clone(),
            label: c.name.clone(),
        })
        .collect()
}

/// The fixed shipping selector options: `No` → `"0"`, `Yes` → `"1"`.
#[must_use]
pub fn shipping_options() -> Vec<SelectOption> {
    ShippingFlag::ALL
        .iter()
        .map(|flag| SelectOption {
            value: flag.value().to_owned(),
            label: flag.label().to_owned(),
        })
        .collect()
}

/// Holds the draft. Each setter replaces exactly one field and nothing is
/// validated until submit.
#[derive(Debug, Clone, Default)]
pub struct ProductFormState {
    draft: ProductDraft,
}

impl ProductFormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.draft.price = price.into();
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.draft.quantity = quantity.into();
    }

    /// Stores the selected category option's value (its id).
    pub fn select_category(&mut self, category_id: impl Into<String>) {
        self.draft.category_id = Some(category_id.into());
    }

    pub fn set_shipping(&mut self, shipping: ShippingFlag) {
        self.draft.shipping = Some(shipping);
    }

    /// Applies a shipping option by its value (`"0"` or `"1"`).
    ///
    /// Returns the selected flag, or `None` (leaving the field untouched) if
    /// `value` is not one of the offered options.
    pub fn select_shipping(&mut self, value: &str) -> Option<ShippingFlag> {
        let flag = ShippingFlag::from_value(value)?;
        self.draft.shipping = Some(flag);
        Some(flag)
    }

    pub fn set_photo(&mut self, photo: Option<FileHandle>) {
        self.draft.photo = photo;
    }

    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
    }
}
