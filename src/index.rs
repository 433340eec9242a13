//! Display indexes and item selectors.
//!
//! The store speaks UUIDs; people don't. Listings number items 1..n in
//! insertion order, and every command that takes a target accepts either such
//! an index or an item name. Resolution from selector to UUID happens here and
//! in `commands::helpers`, never in the store.

use crate::model::Item;
use std::str::FromStr;

/// An item paired with its 1-based position in the insertion-ordered listing.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub item: Item,
    pub index: usize,
}

/// Assigns display indexes to a list of items.
///
/// The input order is preserved: the store returns items in insertion order,
/// and that order is part of the listing contract, so position 1 is always the
/// oldest live item.
pub fn index_items(items: Vec<Item>) -> Vec<DisplayItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            item,
            index: i + 1,
        })
        .collect()
}

/// A user input selecting an item: a display index or a name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(usize),
    Name(String),
}

impl std::fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemSelector::Index(i) => write!(f, "{}", i),
            ItemSelector::Name(n) => write!(f, "\"{}\"", n),
        }
    }
}

impl FromStr for ItemSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("indexes start at 1".to_string());
            }
            return Ok(ItemSelector::Index(n));
        }
        Ok(ItemSelector::Name(s.to_string()))
    }
}

/// Parses a single input that may be an index, an index range, or a name.
///
/// Supported formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5; start must be <= end)
/// - Anything else: a name query
///
/// Whether the indexes actually exist is checked later during resolution.
pub fn parse_selector_or_range(s: &str) -> Result<Vec<ItemSelector>, String> {
    if let Some((start_str, end_str)) = s.split_once('-') {
        if let (Ok(start), Ok(end)) = (start_str.parse::<usize>(), end_str.parse::<usize>()) {
            if start == 0 {
                return Err("indexes start at 1".to_string());
            }
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            return Ok((start..=end).map(ItemSelector::Index).collect());
        }
    }

    ItemSelector::from_str(s).map(|sel| vec![sel])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDraft;

    fn make_item(name: &str) -> Item {
        Item::new(ItemDraft {
            name: name.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn indexes_follow_insertion_order() {
        let items = vec![make_item("First"), make_item("Second"), make_item("Third")];
        let indexed = index_items(items);

        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].item.name, "First");
        assert_eq!(indexed[2].index, 3);
        assert_eq!(indexed[2].item.name, "Third");
    }

    #[test]
    fn parses_indexes_and_names() {
        assert_eq!(ItemSelector::from_str("1"), Ok(ItemSelector::Index(1)));
        assert_eq!(ItemSelector::from_str("42"), Ok(ItemSelector::Index(42)));
        assert_eq!(
            ItemSelector::from_str("Widget"),
            Ok(ItemSelector::Name("Widget".to_string()))
        );

        assert!(ItemSelector::from_str("").is_err());
        assert!(ItemSelector::from_str("0").is_err());
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(
            parse_selector_or_range("3-5"),
            Ok(vec![
                ItemSelector::Index(3),
                ItemSelector::Index(4),
                ItemSelector::Index(5)
            ])
        );
        assert_eq!(
            parse_selector_or_range("3-3"),
            Ok(vec![ItemSelector::Index(3)])
        );
    }

    #[test]
    fn rejects_backwards_ranges() {
        let result = parse_selector_or_range("5-3");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must be <= end"));
    }

    #[test]
    fn dashed_names_are_not_ranges() {
        // "usb-c" contains a dash but neither side is numeric
        assert_eq!(
            parse_selector_or_range("usb-c"),
            Ok(vec![ItemSelector::Name("usb-c".to_string())])
        );
    }
}
