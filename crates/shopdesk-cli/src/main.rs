mod create;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shopdesk_client::CatalogClient;
use shopdesk_form::{CategoryLoad, CreateProductPage, PreviewRegistry};
use tracing_subscriber::EnvFilter;

use crate::create::CreateArgs;
use crate::terminal::{TerminalNavigator, TerminalNotifier};

#[derive(Debug, Parser)]
#[command(name = "shopdesk-cli")]
#[command(about = "Storefront admin: create products from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the categories a product can be filed under
    Categories,
    /// Fill in the Create Product form and submit it
    Create(CreateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = shopdesk_core::load_app_config().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "configuration loaded");

    let client = CatalogClient::from_config(&config).context("failed to build HTTP client")?;
    let mut page = CreateProductPage::new(
        client,
        TerminalNotifier,
        TerminalNavigator,
        PreviewRegistry::new(),
    );

    match cli.command {
        None => println!("{}", page.view()),
        Some(Commands::Categories) => {
            if !matches!(page.mount().await, CategoryLoad::Loaded(_)) {
                anyhow::bail!("category list unavailable");
            }
            for category in page.categories() {
                println!("{}\t{}", category.id, category.name);
            }
        }
        Some(Commands::Create(args)) => {
            let created = create::run(&mut page, args).await?;
            page.unmount();
            return Ok(exit_code(created));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// The `create` command fails unless the product was created.
fn exit_code(created: bool) -> ExitCode {
    if created {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
