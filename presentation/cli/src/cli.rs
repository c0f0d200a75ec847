use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Browse the catalog, manage a local cart, and place orders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally restricted to one category
    Browse {
        #[arg(long)]
        category: Option<String>,
    },
    /// Inspect or change the locally persisted cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Validate the cart and submit an order
    Checkout {
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        payment: String,
    },
    /// Sign in with email and password
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Send a password reset email
    ResetPassword {
        #[arg(long)]
        email: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and total
    Show,
    /// Add one unit of a product to the cart
    Add { product_id: String },
    /// Increase the quantity of a cart item by one
    Inc { product_id: String },
    /// Decrease the quantity of a cart item by one
    Dec { product_id: String },
}
