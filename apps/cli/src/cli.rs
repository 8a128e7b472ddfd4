//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "foodhub")]
#[command(author, version, about = "Browse meals, manage your cart and track orders")]
pub struct Cli {
    /// Print responses as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to foodhub.toml in the platform config dir)
    #[arg(long, global = true, env = "FOODHUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the menu
    Meals {
        #[command(subcommand)]
        action: MealsAction,
    },
    /// List meal categories
    Categories,
    /// Browse restaurants
    Providers {
        #[command(subcommand)]
        action: ProvidersAction,
    },
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart
    Checkout {
        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Notes for the kitchen
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Your orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Restaurant dashboard
    Provider {
        #[command(subcommand)]
        action: ProviderAction,
    },
    /// Marketplace administration
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Show the effective configuration
    Config,
}

#[derive(Debug, Subcommand)]
pub enum MealsAction {
    /// List meals
    List {
        /// Category slug
        #[arg(short, long)]
        category: Option<String>,

        /// Search text
        #[arg(short, long)]
        search: Option<String>,

        /// Only vegetarian meals
        #[arg(long)]
        vegetarian: bool,

        /// Only vegan meals
        #[arg(long)]
        vegan: bool,
    },
    /// Show one meal with its reviews
    Show { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ProvidersAction {
    /// List restaurants
    List,
    /// Show a restaurant and its menu
    Show { id: String },
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one of a meal
    Add { meal_id: String },
    /// Remove a meal
    Remove { meal_id: String },
    /// Set a meal's quantity (0 or less removes it)
    Set {
        meal_id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum OrdersAction {
    /// List your orders
    List,
    /// Show one order
    Show { id: String },
    /// Cancel an order that has not been started
    Cancel { id: String },
    /// Review a meal from a delivered order
    Review {
        order_id: String,
        meal_id: String,

        /// 1 to 5
        #[arg(short, long)]
        rating: i64,

        #[arg(short, long)]
        comment: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProviderAction {
    /// List your menu
    Meals,
    /// Add a meal to your menu
    AddMeal(MealArgs),
    /// Change a meal (only the given fields)
    UpdateMeal {
        id: String,

        #[command(flatten)]
        fields: MealArgs,
    },
    /// Remove a meal from your menu
    DeleteMeal { id: String },
    /// Incoming orders
    Orders {
        /// Only orders with this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Move an order to its next status
    Advance { order_id: String },
    /// Dashboard numbers
    Stats,
}

/// Menu editor fields.
#[derive(Debug, Clone, Default, Args)]
pub struct MealArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Price, e.g. 120.50
    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub category_id: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub available: Option<bool>,

    #[arg(long)]
    pub vegetarian: Option<bool>,

    #[arg(long)]
    pub vegan: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// Marketplace numbers
    Stats,
    /// List accounts
    Users,
    /// Suspend an account
    Suspend { user_id: String },
    /// Re-activate an account
    Activate { user_id: String },
    /// Every order on the marketplace
    Orders,
    /// Add a meal category
    AddCategory {
        #[arg(long)]
        name: String,

        #[arg(long)]
        slug: String,
    },
    /// Delete a meal category
    DeleteCategory { id: String },
}
