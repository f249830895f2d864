//! NO DISTRAXIONZ CLI - Inspect and edit the persisted stores.
//!
//! # Usage
//!
//! ```bash
//! # Add a line to the cart
//! ndx-cli cart add -i shirt-1 -n "Logo Tee" -p '$45.00' -s M -c Black
//!
//! # Show the cart with derived totals
//! ndx-cli cart list
//!
//! # Set a line's quantity (0 removes the line)
//! ndx-cli cart update shirt-1-M-Black 3
//!
//! # Toggle a wishlist entry
//! ndx-cli wishlist toggle -i hoodie-1 -n "Focus Hoodie" -p 89.99
//! ```
//!
//! The stores are read from and written to the data directory named by
//! `NDX_DATA_DIR` (default `.no-distraxionz`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use no_distraxionz_cart::StoreConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ndx-cli")]
#[command(author, version, about = "NO DISTRAXIONZ store tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit the persisted cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartCommand,
    },
    /// Inspect and edit the persisted wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistCommand,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    let result = match cli.command {
        Commands::Cart { action } => commands::cart::run(&config, action),
        Commands::Wishlist { action } => commands::wishlist::run(&config, action),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
