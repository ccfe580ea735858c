//! A renderer-agnostic snapshot of the Create Product screen.

use std::fmt;

use crate::state::SelectOption;

pub const HEADING: &str = "Create Product";
pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
pub const UPLOAD_LABEL: &str = "Upload Photo";
pub const PHOTO_ALT: &str = "product_photo";
pub const SHIPPING_PLACEHOLDER: &str = "Select Shipping";
pub const SUBMIT_LABEL: &str = "CREATE PRODUCT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub placeholder: &'static str,
    pub options: Vec<SelectOption>,
    /// Value of the chosen option, if any.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: &'static str,
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub category: SelectView,
    /// File name once a photo is chosen, otherwise [`UPLOAD_LABEL`].
    pub upload_label: String,
    pub preview: Option<ImageView>,
    pub name: InputView,
    pub description: InputView,
    pub price: InputView,
    pub quantity: InputView,
    pub shipping: SelectView,
    pub submit_label: &'static str,
}

impl FormView {
    #[must_use]
    pub fn inputs(&self) -> [&InputView; 4] {
        [&self.name, &self.description, &self.price, &self.quantity]
    }
}

fn write_select(f: &mut fmt::Formatter<'_>, select: &SelectView) -> fmt::Result {
    let current = select
        .selected
        .as_deref()
        .and_then(|v| select.options.iter().find(|o| o.value == v))
        .map_or(select.placeholder, |o| o.label.as_str());
    writeln!(f, "[{current}]")?;
    for option in &select.options {
        let mark = if select.selected.as_deref() == Some(option.value.as_str()) {
            '*'
        } else {
            ' '
        };
        writeln!(f, "  {mark} {} ({})", option.label, option.value)?;
    }
    Ok(())
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.heading)?;
        write_select(f, &self.category)?;
        writeln!(f, "<{}>", self.upload_label)?;
        if let Some(image) = &self.preview {
            writeln!(f, "  img alt={} src={}", image.alt, image.src)?;
        }
        for input in self.inputs() {
            if input.value.is_empty() {
                writeln!(f, "( {} )", input.placeholder)?;
            } else {
                writeln!(f, "( {} )", input.value)?;
            }
        }
        write_select(f, &self.shipping)?;
        write!(f, "[ {} ]", self.submit_label)
    }
}
