use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

/// Writes a .tar.gz archive holding a full JSON snapshot of the store.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;

    if items.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to back up."));
        return Ok(res);
    }

    let filename = format!("stocka-backup-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H%M%S"));
    let file = File::create(&filename)?;
    write_archive(file, &items)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Backed up to {}", filename)));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, items: &[Item]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let content = serde_json::to_string_pretty(items)?;

    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();

    tar.append_data(&mut header, "stocka/items.json", content.as_bytes())?;
    tar.finish()?;
    Ok(())
}
