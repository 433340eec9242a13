use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::indexed_items;

pub fn run<S: DataStore>(store: &S, low_only: bool) -> Result<CmdResult> {
    let items = indexed_items(store)?;
    let listed: Vec<_> = if low_only {
        items.into_iter().filter(|di| di.item.is_low()).collect()
    } else {
        items
    };

    Ok(CmdResult::default().with_listed_items(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_item("First", 1, 100)
            .with_item("Second", 1, 100);

        let result = run(&fixture.store, false).unwrap();
        assert_eq!(result.listed_items.len(), 2);
        assert_eq!(result.listed_items[0].item.name, "First");
        assert_eq!(result.listed_items[0].index, 1);
        assert_eq!(result.listed_items[1].item.name, "Second");
        assert_eq!(result.listed_items[1].index, 2);
    }

    #[test]
    fn low_only_filters_by_reorder_level() {
        let fixture = StoreFixture::new()
            .with_low_item("Running out", 1, 5)
            .with_low_item("Plenty", 10, 5);

        let result = run(&fixture.store, true).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].item.name, "Running out");
    }

    #[test]
    fn low_filter_keeps_listing_indexes() {
        let fixture = StoreFixture::new()
            .with_low_item("Plenty", 10, 5)
            .with_low_item("Running out", 1, 5);

        let result = run(&fixture.store, true).unwrap();
        // "Running out" is second in the full listing, so it keeps index 2
        assert_eq!(result.listed_items[0].index, 2);
    }
}
