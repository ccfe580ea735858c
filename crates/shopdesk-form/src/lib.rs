//! The admin "Create Product" workflow.
//!
//! [`CreateProductPage`] wires together the category list, the editable
//! draft, the photo preview, and the [`SubmissionController`] that turns a
//! submit click into exactly one notification (and, on success, one
//! navigation). Rendering is left to the caller through [`FormView`].

pub mod categories;
pub mod notify;
pub mod page;
pub mod preview;
pub mod state;
pub mod submit;
pub mod view;

pub use categories::{CategoryLoad, CategorySource, CATEGORY_FETCH_FAILED};
pub use notify::{
    NavigationLog, Navigator, Notification, NotificationKind, NotificationLog, Notifier,
};
pub use page::CreateProductPage;
pub use preview::{PhotoPreview, PreviewHandle, PreviewRegistry};
pub use state::{category_options, shipping_options, ProductFormState, SelectOption};
pub use submit::{
    SubmissionController, SubmissionOutcome, SubmissionState, ADMIN_PRODUCTS_PATH,
    PRODUCT_CREATED, SUBMIT_FAILED, VALIDATION_FAILED,
};
pub use view::FormView;
