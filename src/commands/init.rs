use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    let items_file = data_dir.join("items.json");
    if !items_file.exists() {
        fs::write(&items_file, "[]")?;
        result.add_message(CmdMessage::success(format!(
            "Initialized store at {}",
            data_dir.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Store already initialized at {}",
            data_dir.display()
        )));
    }

    Ok(result)
}
