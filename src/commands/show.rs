use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::ItemSelector;
use crate::store::DataStore;

use super::helpers::items_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[ItemSelector]) -> Result<CmdResult> {
    let items = items_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_items(items))
}
