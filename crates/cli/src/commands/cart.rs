//! Cart subcommands.

use clap::Subcommand;
use tracing::info;

use no_distraxionz_cart::{CartStore, StoreConfig};
use no_distraxionz_core::{LineKey, Product, RawPrice};

/// Cart actions.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product/variant to the cart
    Add {
        /// Product ID
        #[arg(short = 'i', long)]
        id: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Price, numeric or with a currency symbol (e.g. `$45.00`)
        #[arg(short, long)]
        price: String,

        /// Selected size
        #[arg(short, long)]
        size: Option<String>,

        /// Selected color
        #[arg(short, long)]
        color: Option<String>,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line by its key
    Remove {
        /// Line key, e.g. `shirt-1-M-Black`
        line_id: String,
    },
    /// Set a line's quantity (0 removes the line)
    Update {
        /// Line key, e.g. `shirt-1-M-Black`
        line_id: String,
        /// New quantity
        quantity: i64,
    },
    /// Show the cart lines and derived totals
    List,
    /// Empty the cart
    Clear,
}

/// Run a cart subcommand against the file-backed store.
///
/// # Errors
///
/// Commands currently cannot fail after the store loads; the `Result`
/// keeps the command surface uniform with future fallible commands.
pub fn run(config: &StoreConfig, action: CartCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = CartStore::new(config.cart_storage(), config.cart_key.clone());

    match action {
        CartCommand::Add {
            id,
            name,
            price,
            size,
            color,
            quantity,
        } => {
            let product = Product::new(id, name, RawPrice::Text(price));
            store.add_item(product, size.as_deref(), color.as_deref(), Some(quantity));
            info!(count = store.item_count(), total = %store.total(), "Added to cart");
        }
        CartCommand::Remove { line_id } => {
            store.remove_item(&LineKey::from(line_id));
            info!(count = store.item_count(), "Removed line");
        }
        CartCommand::Update { line_id, quantity } => {
            store.update_quantity(&LineKey::from(line_id), quantity);
            info!(count = store.item_count(), total = %store.total(), "Updated quantity");
        }
        CartCommand::List => list(&store),
        CartCommand::Clear => {
            store.clear();
            info!("Cart cleared");
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn list<S: no_distraxionz_cart::Storage>(store: &CartStore<S>) {
    if store.items().is_empty() {
        println!("cart is empty");
        return;
    }

    for line in store.items() {
        println!(
            "{:<40} x{:<3} {:>10}",
            line.id,
            line.quantity,
            line.line_total()
        );
    }
    println!("{} items, total {}", store.item_count(), store.total());
}
