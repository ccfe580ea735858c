//! Multipart payload assembly for product creation.

use reqwest::multipart::{Form, Part};
use shopdesk_core::ValidDraft;

use crate::error::ClientError;

/// Part names, in the order they are written to the payload.
pub const PART_NAMES: [&str; 7] = [
    "name",
    "description",
    "price",
    "quantity",
    "category",
    "shipping",
    "photo",
];

/// Builds the `create-product` multipart body from a validated draft.
///
/// The photo is sent as a file part carrying its original file name. The
/// draft is only read; its photo stays available for a later retry.
///
/// # Errors
///
/// Returns [`ClientError::Http`] if the photo's content type is not a valid
/// MIME string.
pub fn product_form(draft: &ValidDraft) -> Result<Form, ClientError> {
    let photo = Part::bytes(draft.photo.bytes().to_vec())
        .file_name(draft.photo.name().to_owned())
        .mime_str(draft.photo.content_type())?;

    let [name, description, price, quantity, category, shipping, photo_name] = PART_NAMES;
    Ok(Form::new()
        .text(name, draft.name.clone())
        .text(description, draft.description.clone())
        .text(price, draft.price.clone())
        .text(quantity, draft.quantity.clone())
        .text(category, draft.category_id.clone())
        .text(shipping, draft.shipping.value())
        .part(photo_name, photo))
}
