//! Wishlist subcommands.

use clap::Subcommand;
use tracing::info;

use no_distraxionz_cart::{StoreConfig, WishlistStore};
use no_distraxionz_core::{Product, ProductId, RawPrice};

/// Wishlist actions.
#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product ID
        #[arg(short = 'i', long)]
        id: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Price, numeric or with a currency symbol
        #[arg(short, long)]
        price: String,
    },
    /// Remove a product by ID
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Show the saved products
    List,
    /// Empty the wishlist
    Clear,
}

/// Run a wishlist subcommand against the file-backed store.
///
/// # Errors
///
/// Commands currently cannot fail after the store loads; the `Result`
/// keeps the command surface uniform with future fallible commands.
pub fn run(config: &StoreConfig, action: WishlistCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut wishlist = WishlistStore::new(config.wishlist_storage(), config.wishlist_key.clone());

    match action {
        WishlistCommand::Toggle { id, name, price } => {
            let product = Product::new(id.clone(), name, RawPrice::Text(price));
            let added = wishlist.toggle(product);
            if added {
                info!(product = %id, count = wishlist.count(), "Added to wishlist");
            } else {
                info!(product = %id, count = wishlist.count(), "Removed from wishlist");
            }
        }
        WishlistCommand::Remove { product_id } => {
            wishlist.remove(&ProductId::new(product_id));
            info!(count = wishlist.count(), "Removed product");
        }
        WishlistCommand::List => list(&wishlist),
        WishlistCommand::Clear => {
            wishlist.clear();
            info!("Wishlist cleared");
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn list<S: no_distraxionz_cart::Storage>(wishlist: &WishlistStore<S>) {
    if wishlist.is_empty() {
        println!("wishlist is empty");
        return;
    }

    for product in wishlist.items() {
        println!("{:<24} {}", product.id, product.name);
    }
    println!("{} saved", wishlist.count());
}
