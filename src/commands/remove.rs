use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemSelector;
use crate::store::DataStore;
use std::io::{self, Write};

use super::helpers::items_by_selectors;

/// Permanently removes items. There is no undo, hence the confirmation prompt.
pub fn run<S: DataStore>(
    store: &mut S,
    selectors: &[ItemSelector],
    skip_confirm: bool,
) -> Result<CmdResult> {
    let targets = items_by_selectors(store, selectors)?;

    if targets.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No items to remove."));
        return Ok(res);
    }

    if !skip_confirm {
        println!("This will permanently remove the following items:");
        for di in &targets {
            println!("  {} {}", di.index, di.item.name);
        }
        print!("[Y] To remove: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let mut result = CmdResult::default();
    for di in targets {
        store.delete_item(&di.item.id)?;
        result.add_message(CmdMessage::success(format!(
            "Removed: {} {}",
            di.index, di.item.name
        )));
        result.affected_items.push(di.item);
    }

    Ok(result)
}
