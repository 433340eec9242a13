use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayItem;
use crate::store::DataStore;

use super::helpers::indexed_items;

pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let indexed = indexed_items(store)?;
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(DisplayItem, u8)> = indexed
        .into_iter()
        .filter_map(|di| {
            let name_lower = di.item.name.to_lowercase();
            let category_lower = di
                .item
                .category
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();

            let score = if name_lower == term_lower {
                1
            } else if name_lower.contains(&term_lower) {
                2
            } else if category_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((di, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| match score_a.cmp(score_b) {
        std::cmp::Ordering::Equal => a.index.cmp(&b.index),
        ord => ord,
    });

    let listed = matches.into_iter().map(|(di, _)| di).collect();
    Ok(CmdResult::default().with_listed_items(listed))
}
