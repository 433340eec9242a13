use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Writes the full inventory as CSV, one row per item in listing order.
pub fn run<S: DataStore>(store: &S, path: Option<PathBuf>) -> Result<CmdResult> {
    let items = store.list_items()?;

    if items.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No items to export."));
        return Ok(res);
    }

    let path = path.unwrap_or_else(|| {
        PathBuf::from(format!("stocka-{}.csv", Utc::now().format("%Y-%m-%d")))
    });
    let file = File::create(&path)?;
    write_csv(file, &items)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} items to {}",
        items.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

fn write_csv<W: Write>(mut writer: W, items: &[Item]) -> Result<()> {
    writeln!(writer, "id,name,category,quantity,price,reorder_level")?;
    for item in items {
        writeln!(
            writer,
            "{},{},{},{},{}.{:02},{}",
            item.id,
            csv_field(&item.name),
            csv_field(item.category.as_deref().unwrap_or_default()),
            item.quantity,
            item.price_cents / 100,
            item.price_cents % 100,
            item.reorder_level
        )?;
    }
    Ok(())
}

/// RFC-4180-style quoting: fields containing commas, quotes, or newlines are
/// wrapped in quotes with inner quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
