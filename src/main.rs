use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use stocka::api::{CmdMessage, ConfigAction, MessageLevel, StockSummary, StockaApi};
use stocka::config::StockaConfig;
use stocka::error::Result;
use stocka::index::DisplayItem;
use stocka::model::{ItemDraft, ItemPatch};
use stocka::money::{format_cents, parse_amount};
use stocka::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockaApi<FileStore>,
    currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("stocka=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            qty,
            price,
            category,
            reorder,
        }) => handle_add(&mut ctx, name, qty, price, category, reorder),
        Some(Commands::List { search, low }) => handle_list(&mut ctx, search, low),
        Some(Commands::Show { items }) => handle_show(&ctx, items),
        Some(Commands::Update {
            item,
            name,
            qty,
            price,
            category,
            reorder,
        }) => handle_update(&mut ctx, item, name, qty, price, category, reorder),
        Some(Commands::Adjust { item, delta }) => handle_adjust(&mut ctx, item, delta),
        Some(Commands::Remove { items, yes }) => handle_remove(&mut ctx, items, yes),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Low) => handle_list(&mut ctx, None, true),
        Some(Commands::Status) => handle_status(&ctx),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Backup) => handle_backup(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&mut ctx, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.store {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("STOCKA_DATA") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "stocka", "stocka")
                .expect("Could not determine data dir")
                .data_dir()
                .to_path_buf(),
        },
    };

    let config = StockaConfig::load(&data_dir).unwrap_or_default();
    let currency = config.get_currency().to_string();

    let store = FileStore::new(data_dir.clone());
    let api = StockaApi::new(store, data_dir);

    Ok(AppContext { api, currency })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    qty: i64,
    price: String,
    category: Option<String>,
    reorder: i64,
) -> Result<()> {
    let draft = ItemDraft {
        name,
        category,
        quantity: qty,
        price_cents: parse_amount(&price)?,
        reorder_level: reorder,
    };
    let result = ctx.api.add_item(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, low: bool) -> Result<()> {
    let result = if let Some(term) = search {
        ctx.api.search_items(&term)?
    } else {
        ctx.api.list_items(low)?
    };
    print_items(&result.listed_items, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, items: Vec<String>) -> Result<()> {
    let result = ctx.api.show_items(&items)?;
    print_full_items(&result.listed_items, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_update(
    ctx: &mut AppContext,
    item: String,
    name: Option<String>,
    qty: Option<i64>,
    price: Option<String>,
    category: Option<String>,
    reorder: Option<i64>,
) -> Result<()> {
    let price_cents = match price {
        Some(p) => Some(parse_amount(&p)?),
        None => None,
    };
    let patch = ItemPatch {
        name,
        category,
        quantity: qty,
        price_cents,
        reorder_level: reorder,
    };
    let result = ctx.api.update_item(&item, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_adjust(ctx: &mut AppContext, item: String, delta: i64) -> Result<()> {
    let result = ctx.api.adjust_item(&item, delta)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, items: Vec<String>, yes: bool) -> Result<()> {
    let result = ctx.api.remove_items(&items, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_items(&term)?;
    print_items(&result.listed_items, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(summary) = &result.summary {
        print_summary(summary, &ctx.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_csv(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.backup()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("currency"), None) => ConfigAction::ShowKey("currency".to_string()),
        (Some("currency"), Some(v)) => ConfigAction::SetCurrency(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.get_currency());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_items(items: &[DisplayItem], currency: &str) {
    for (i, di) in items.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let item = &di.item;
        println!("{} {}", di.index.to_string().yellow(), item.name.bold());
        println!("--------------------------------");
        println!("{}", format!("id: {}", item.id).dimmed());
        if let Some(category) = &item.category {
            println!("Category:      {}", category);
        }
        let qty = item.quantity.to_string();
        println!(
            "Quantity:      {}",
            if item.is_low() { qty.red() } else { qty.normal() }
        );
        println!("Price:         {}", format_cents(item.price_cents, currency));
        println!("Reorder level: {}", item.reorder_level);
        println!(
            "Value:         {}",
            format_cents(item.value_cents(), currency)
        );
        println!("Added:         {}", item.created_at.format("%Y-%m-%d %H:%M"));
        println!("Updated:       {}", format_time_ago(item.updated_at).trim());
    }
}

fn print_summary(summary: &StockSummary, currency: &str) {
    println!("Items:       {}", summary.item_count);
    println!("Units:       {}", summary.total_units);
    println!(
        "Stock value: {}",
        format_cents(summary.total_value_cents, currency).green()
    );
    let low = format!("{}", summary.low_stock_count);
    println!(
        "Low stock:   {}",
        if summary.low_stock_count > 0 {
            low.red()
        } else {
            low.normal()
        }
    );
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const QTY_WIDTH: usize = 7;
const PRICE_WIDTH: usize = 12;

fn print_items(items: &[DisplayItem], currency: &str) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for di in items {
        let item = &di.item;
        let idx_str = format!("{:>3}. ", di.index);

        let label = match &item.category {
            Some(category) => format!("{} [{}]", item.name, category),
            None => item.name.clone(),
        };

        let qty_str = format!("{:>width$}", item.quantity, width = QTY_WIDTH);
        let price_str = format!(
            "{:>width$}",
            format_cents(item.price_cents, currency),
            width = PRICE_WIDTH
        );
        let time_str = format_time_ago(item.updated_at);

        let fixed_width = idx_str.width() + QTY_WIDTH + PRICE_WIDTH + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        let qty_colored = if item.is_low() {
            qty_str.red()
        } else {
            qty_str.normal()
        };

        println!(
            "{}{}{}{} {} {}",
            idx_str,
            label_display,
            " ".repeat(padding),
            qty_colored,
            price_str,
            time_str.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
