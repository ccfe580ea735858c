use std::fmt;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Whether the product ships physically. Sent on the wire as `"0"` / `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingFlag {
    No,
    Yes,
}

impl ShippingFlag {
    /// Both options, in the order the shipping selector lists them.
    pub const ALL: [ShippingFlag; 2] = [ShippingFlag::No, ShippingFlag::Yes];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            ShippingFlag::No => "0",
            ShippingFlag::Yes => "1",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShippingFlag::No => "No",
            ShippingFlag::Yes => "Yes",
        }
    }

    /// Parses the option value (`"0"` or `"1"`), not the label.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "0" => Some(ShippingFlag::No),
            "1" => Some(ShippingFlag::Yes),
            _ => None,
        }
    }
}

/// A locally selected file awaiting upload.
///
/// Cloning is cheap: the bytes are shared, so building a payload reads the
/// file without taking it away from the form.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    content_type: String,
    bytes: Arc<[u8]>,
}

impl FileHandle {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: Arc::from(bytes),
        }
    }

    /// Reads a file from disk, inferring the content type from its extension.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read, or
    /// `InvalidInput` if the path has no file name.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let bytes = tokio::fs::read(path).await?;
        let content_type = content_type_for(&name);
        Ok(Self::new(name, content_type, bytes))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Best-effort MIME type from a file name's extension.
#[must_use]
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// The in-progress product being edited. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    /// Kept as typed text; the backend owns numeric parsing.
    pub price: String,
    pub quantity: String,
    pub category_id: Option<String>,
    pub shipping: Option<ShippingFlag>,
    pub photo: Option<FileHandle>,
}

/// A field that must be filled before a draft may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Description,
    Price,
    Quantity,
    Category,
    Shipping,
    Photo,
}

impl RequiredField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Description => "description",
            RequiredField::Price => "price",
            RequiredField::Quantity => "quantity",
            RequiredField::Category => "category",
            RequiredField::Shipping => "shipping",
            RequiredField::Photo => "photo",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`validate`] when one or more required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct MissingFieldError {
    pub missing: Vec<RequiredField>,
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A draft that passed [`validate`]: every field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category_id: String,
    pub shipping: ShippingFlag,
    pub photo: FileHandle,
}

/// Checks that every required field of `draft` is filled.
///
/// Text fields consisting only of whitespace count as empty.
///
/// # Errors
///
/// Returns [`MissingFieldError`] listing every empty field, in form order.
pub fn validate(draft: &ProductDraft) -> Result<ValidDraft, MissingFieldError> {
    let mut missing = Vec::new();
    let filled = |s: &str| !s.trim().is_empty();

    if !filled(&draft.name) {
        missing.push(RequiredField::Name);
    }
    if !filled(&draft.description) {
        missing.push(RequiredField::Description);
    }
    if !filled(&draft.price) {
        missing.push(RequiredField::Price);
    }
    if !filled(&draft.quantity) {
        missing.push(RequiredField::Quantity);
    }
    let category_id = draft.category_id.as_deref().filter(|id| filled(id));
    if category_id.is_none() {
        missing.push(RequiredField::Category);
    }
    if draft.shipping.is_none() {
        missing.push(RequiredField::Shipping);
    }
    if draft.photo.is_none() {
        missing.push(RequiredField::Photo);
    }

    match (category_id, draft.shipping, &draft.photo) {
        (Some(category_id), Some(shipping), Some(photo)) if missing.is_empty() => Ok(ValidDraft {
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.clone(),
            quantity: draft.quantity.clone(),
            category_id: category_id.to_string(),
            shipping,
            photo: photo.clone(),
        }),
        _ => Err(MissingFieldError { missing }),
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
