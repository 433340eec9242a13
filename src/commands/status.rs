use crate::commands::{CmdResult, StockSummary};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_items()?;

    let summary = StockSummary {
        item_count: items.len(),
        total_units: items.iter().map(|i| i.quantity).sum(),
        total_value_cents: items.iter().map(|i| i.value_cents()).sum(),
        low_stock_count: items.iter().filter(|i| i.is_low()).count(),
    };

    Ok(CmdResult::default().with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_summary_is_all_zero() {
        let store = InMemoryStore::new();
        let summary = run(&store).unwrap().summary.unwrap();
        assert_eq!(summary, StockSummary::default());
    }

    #[test]
    fn totals_cover_all_items() {
        let fixture = StoreFixture::new()
            .with_item("A", 2, 500)
            .with_item("B", 3, 100);

        let summary = run(&fixture.store).unwrap().summary.unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_units, 5);
        assert_eq!(summary.total_value_cents, 2 * 500 + 3 * 100);
        assert_eq!(summary.low_stock_count, 0);
    }

    #[test]
    fn counts_low_stock_items() {
        let fixture = StoreFixture::new()
            .with_low_item("Low", 1, 5)
            .with_low_item("Fine", 9, 5);

        let summary = run(&fixture.store).unwrap().summary.unwrap();
        assert_eq!(summary.low_stock_count, 1);
    }
}
