use clap::Parser;
use dotenvy::dotenv;
use std::{cell::RefCell, path::PathBuf, rc::Rc};
use storefront::{
    config,
    core::catalog,
    errors::Result,
    logging,
    shop::{
        Shop,
        commands::{HELP_TEXT, ShellCommand, describe_error},
        views::{CartBadge, CartPanel, render_cart_panel, render_product_grid},
    },
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Browse a product catalog and fill a shopping cart from the terminal"
)]
struct Cli {
    /// Settings file (defaults to ./storefront.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Catalog file path or http(s) URL, overriding settings and environment
    #[arg(long)]
    catalog: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load .env first so RUST_LOG and STOREFRONT_CATALOG can come from it
    dotenv().ok();

    // 2. Initialize tracing before anything else logs
    let log_filter = logging::init_tracing();

    // 3. Load configuration, then switch to its log level
    let app_config = config::load_app_configuration(cli.config.as_deref(), cli.catalog)
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    logging::apply_configured_level(&log_filter, &app_config.log_level)
        .inspect_err(|e| warn!("Keeping bootstrap log level: {}", e))
        .ok();
    info!("Configuration loaded.");

    let products = catalog::load_catalog(&app_config.catalog_source)
        .await
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;

    let mut shop = Shop::new(products);
    let badge = Rc::new(RefCell::new(CartBadge::new()));
    let panel = Rc::new(RefCell::new(CartPanel::new(
        app_config.currency_symbol.clone(),
        shop.cart(),
    )));
    shop.subscribe(Box::new(Rc::clone(&badge)));
    shop.subscribe(Box::new(Rc::clone(&panel)));

    let symbol = app_config.currency_symbol.as_str();
    let mut stdout = tokio::io::stdout();
    let grid = render_product_grid(&app_config.banner, symbol, shop.products(), shop.cart());
    stdout.write_all(format!("{grid}\n{HELP_TEXT}\n").as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Nothing) => continue,
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => HELP_TEXT.to_string(),
            Ok(ShellCommand::Products) => {
                render_product_grid(&app_config.banner, symbol, shop.products(), shop.cart())
            }
            Ok(ShellCommand::Cart) => render_cart_panel(symbol, shop.cart()),
            Ok(ShellCommand::Action(action)) => match shop.dispatch(action) {
                Ok(_) => format!(
                    "{}[cart: {}]",
                    panel.borrow().text(),
                    badge.borrow().text()
                ),
                Err(e) => describe_error(&e),
            },
            Err(e) => {
                warn!("{}", e);
                describe_error(&e)
            }
        };
        stdout.write_all(format!("{output}\n").as_bytes()).await?;
    }

    info!("Leaving the shop with {} items in the cart.", shop.cart().item_count());
    Ok(())
}
