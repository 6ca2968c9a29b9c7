//! Maison CLI - Drive the storefront cart and checkout from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog and browse it
//! maison catalog seed
//! maison catalog list
//!
//! # Fill the cart
//! maison cart add 3
//! maison cart set 3 2
//! maison cart show
//!
//! # Quote and place orders
//! maison checkout quote --cod
//! maison checkout coupon welcome10
//! maison checkout cod --name "Ayesha Khan" --phone "0300 1234567" \
//!     --street "House 12" --colony "Gulberg III" --city Lahore
//! maison orders list
//! ```
//!
//! State lives in `MAISON_DATA_DIR` (default `.maison`), one JSON file per
//! storage key. Set `MAISON_LOG_FORMAT=json` for structured log output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use maison_storefront::{FileStorage, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "maison")]
#[command(author, version, about = "Maison storefront cart and checkout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse and seed the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Quote and place orders
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Inspect the cash-on-delivery order log
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a catalog product
    Add {
        /// Catalog product id
        product_id: String,
    },
    /// Remove a line
    Remove {
        /// Catalog product id
        product_id: String,
    },
    /// Set a line's quantity (0 or less removes it)
    Set {
        /// Catalog product id
        product_id: String,
        /// Target quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove every line
    Clear,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List,
    /// Write the sample products if the catalog is empty
    Seed,
    /// List distinct brands
    Brands,
    /// List distinct categories
    Categories,
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show subtotal, shipping, tax, and total
    Quote {
        /// Quote the cash-on-delivery variant (no tax)
        #[arg(long)]
        cod: bool,
    },
    /// Check a coupon code
    Coupon {
        /// Coupon code (case-insensitive)
        code: String,
    },
    /// Place the order from the cart panel
    Place,
    /// Place a cash-on-delivery order
    Cod(commands::checkout::CodArgs),
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List recorded cash-on-delivery orders
    List,
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maison=info,maison_storefront=info".into());

    let json = std::env::var("MAISON_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().without_time());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let storage = FileStorage::new(&config.data_dir);

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(storage, &config),
            CartAction::Add { product_id } => commands::cart::add(storage, &product_id)?,
            CartAction::Remove { product_id } => commands::cart::remove(storage, &product_id),
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set(storage, &product_id, quantity),
            CartAction::Clear => commands::cart::clear(storage),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(storage),
            CatalogAction::Seed => commands::catalog::seed(storage)?,
            CatalogAction::Brands => commands::catalog::brands(storage),
            CatalogAction::Categories => commands::catalog::categories(storage),
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Quote { cod } => commands::checkout::quote(storage, &config, cod),
            CheckoutAction::Coupon { code } => commands::checkout::coupon(&config, &code),
            CheckoutAction::Place => commands::checkout::place(storage, &config)?,
            CheckoutAction::Cod(args) => commands::checkout::cod(storage, &config, args).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(storage)?,
        },
    }
    Ok(())
}
