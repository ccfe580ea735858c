//! `create` subcommand: drive one form session from command-line input.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use shopdesk_core::{FileHandle, ShippingFlag};
use shopdesk_form::{CreateProductPage, Navigator, Notifier, SubmissionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ShippingArg {
    No,
    Yes,
}

impl From<ShippingArg> for ShippingFlag {
    fn from(arg: ShippingArg) -> Self {
        match arg {
            ShippingArg::No => ShippingFlag::No,
            ShippingArg::Yes => ShippingFlag::Yes,
        }
    }
}

/// Every field is optional here; missing ones are caught by form validation.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct CreateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub quantity: Option<String>,
    /// Category id
    #[arg(long, conflicts_with = "category_name")]
    pub category: Option<String>,
    /// Category display name, matched case-insensitively
    #[arg(long)]
    pub category_name: Option<String>,
    #[arg(long, value_enum)]
    pub shipping: Option<ShippingArg>,
    /// Image file to upload
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

/// Mounts the page, applies `args`, prints the form, and submits.
///
/// Returns `true` only when the product was created.
pub(crate) async fn run<N, V>(
    page: &mut CreateProductPage<N, V>,
    args: CreateArgs,
) -> anyhow::Result<bool>
where
    N: Notifier + Clone,
    V: Navigator,
{
    page.mount().await;
    fill(page, args).await?;
    println!("{}", page.view());

    match page.submit().await {
        Ok(SubmissionOutcome::Success) => Ok(true),
        Ok(_) | Err(_) => Ok(false),
    }
}

async fn fill<N, V>(page: &mut CreateProductPage<N, V>, args: CreateArgs) -> anyhow::Result<()>
where
    N: Notifier + Clone,
    V: Navigator,
{
    if let Some(name) = args.name {
        page.set_name(name);
    }
    if let Some(description) = args.description {
        page.set_description(description);
    }
    if let Some(price) = args.price {
        page.set_price(price);
    }
    if let Some(quantity) = args.quantity {
        page.set_quantity(quantity);
    }
    if let Some(id) = args.category {
        if page.category(&id).is_none() {
            tracing::warn!(category = %id, "no category with that id");
        }
        page.select_category(id);
    } else if let Some(label) = args.category_name {
        if page.select_category_by_name(&label).is_none() {
            tracing::warn!(category = %label, "no category with that name");
        }
    }
    if let Some(shipping) = args.shipping {
        page.set_shipping(shipping.into());
    }
    if let Some(path) = args.photo {
        let photo = FileHandle::from_path(&path)
            .await
            .with_context(|| format!("failed to read photo {}", path.display()))?;
        page.set_photo(Some(photo));
    }
    Ok(())
}
