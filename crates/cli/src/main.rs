//! Mango Stand CLI - terminal shell for the storefront engine.
//!
//! Each invocation opens the file-backed store, runs exactly one store
//! operation, re-renders the affected views, and exits. The engine itself
//! lives in `mango-stand-storefront`; this binary is only the shell.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! ms-cli shop list
//! ms-cli shop show 3
//!
//! # Cart
//! ms-cli cart add 3
//! ms-cli cart remove 3
//! ms-cli cart show
//!
//! # Catalog management
//! ms-cli admin list
//! ms-cli admin add --name "Mango Soap" --price 3.20 \
//!     --img https://example.com/soap.jpg --description "Cold-process bar."
//! ms-cli admin remove 1754650000000
//!
//! # Account
//! ms-cli account register --name Maya --email maya@example.com --pass hunter2
//! ms-cli account login --email maya@example.com --pass hunter2
//! ```
//!
//! State lives under `MANGO_STAND_DATA_DIR` (default `data/`), one JSON
//! file per record.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's whole job is writing to the terminal.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};

use mango_stand_storefront::Store;
use mango_stand_storefront::config::StorefrontConfig;
use mango_stand_storefront::services::auth::AccountService;
use mango_stand_storefront::storage::FileStore;

mod commands;
mod render;
mod shell;

#[derive(Parser)]
#[command(name = "ms-cli")]
#[command(author, version, about = "Mango Stand storefront demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the catalog
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Register or sign in
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// Show the product grid
    List,
    /// Show one product's detail view
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Show the cart with totals
    Show,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show the management list
    List,
    /// Add a product to the catalog
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 19.90
        #[arg(short, long)]
        price: String,

        /// Image URI
        #[arg(short, long)]
        img: String,

        /// Full description
        #[arg(short, long)]
        description: String,
    },
    /// Remove a product from the catalog
    Remove {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register (overwrites the stored account)
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        pass: String,
    },
    /// Sign in against the stored account
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        pass: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let storage = FileStore::open(&config.data_dir)?;
    let mut shell = shell::TerminalShell;

    match cli.command {
        Commands::Shop { action } => {
            let store = Store::open(storage);
            match action {
                ShopAction::List => commands::shop::list(&store),
                ShopAction::Show { id } => commands::shop::show(&store, &mut shell, &id),
            }
        }
        Commands::Cart { action } => {
            let mut store = Store::open(storage);
            match action {
                CartAction::Add { id } => commands::cart::add(&mut store, &mut shell, &id),
                CartAction::Remove { id } => commands::cart::remove(&mut store, &mut shell, &id),
                CartAction::Show => commands::cart::show(&store),
            }
        }
        Commands::Admin { action } => {
            let mut store = Store::open(storage);
            match action {
                AdminAction::List => commands::admin::list(&store),
                AdminAction::Add {
                    name,
                    price,
                    img,
                    description,
                } => commands::admin::add(&mut store, &mut shell, name, price, img, description),
                AdminAction::Remove { id } => commands::admin::remove(&mut store, &mut shell, &id),
            }
        }
        Commands::Account { action } => {
            let mut accounts = AccountService::new(storage);
            match action {
                AccountAction::Register { name, email, pass } => {
                    commands::account::register(&mut accounts, &mut shell, &name, &email, &pass);
                }
                AccountAction::Login { email, pass } => {
                    commands::account::login(&accounts, &mut shell, &email, &pass);
                }
            }
        }
    }
    Ok(())
}
