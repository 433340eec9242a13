use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stocka")]
#[command(version)]
#[command(about = "Command-line inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this directory as the store (overrides STOCKA_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Units on hand
        #[arg(short, long, default_value_t = 0)]
        qty: i64,

        /// Unit price (e.g. 12.99)
        #[arg(short, long, default_value = "0")]
        price: String,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Reorder level (item is low when qty drops under it)
        #[arg(short, long, default_value_t = 0)]
        reorder: i64,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Only items below their reorder level
        #[arg(long)]
        low: bool,
    },

    /// Show full details for one or more items
    #[command(alias = "s")]
    Show {
        /// Items by index, range, or name (e.g. 1 3-5 "usb cable")
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },

    /// Update fields on an item
    #[command(alias = "e")]
    Update {
        /// Item by index or name
        item: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long)]
        qty: Option<i64>,

        /// New unit price (e.g. 12.99)
        #[arg(short, long)]
        price: Option<String>,

        /// New category label
        #[arg(short, long)]
        category: Option<String>,

        /// New reorder level
        #[arg(short, long)]
        reorder: Option<i64>,
    },

    /// Adjust stock in or out by a signed amount
    Adjust {
        /// Item by index or name
        item: String,

        /// Signed quantity delta (e.g. 5 or -3)
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Remove one or more items permanently
    #[command(alias = "rm")]
    Remove {
        /// Items by index, range, or name
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search items by name or category
    Search { term: String },

    /// List items below their reorder level
    Low,

    /// Inventory totals (item count, units, stock value, low stock)
    #[command(alias = "st")]
    Status,

    /// Export the inventory as CSV
    Export {
        /// Output path (defaults to stocka-<date>.csv)
        path: Option<PathBuf>,
    },

    /// Write a .tar.gz backup of the store
    Backup,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    Init,
}
