use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockaError};
use crate::index::ItemSelector;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::resolve_selectors;

/// Stock in/out: applies a signed delta to an item's quantity.
pub fn run<S: DataStore>(store: &mut S, selector: &ItemSelector, delta: i64) -> Result<CmdResult> {
    if delta == 0 {
        return Err(StockaError::Validation("delta cannot be zero".into()));
    }

    let resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    let (index, id) = resolved[0];

    let mut item = store.get_item(&id)?;
    let new_quantity = item.quantity + delta;
    if new_quantity < 0 {
        return Err(StockaError::Validation(format!(
            "stock cannot go negative ({} on hand, adjusting by {})",
            item.quantity, delta
        )));
    }

    item.quantity = new_quantity;
    item.updated_at = Utc::now();
    store.save_item(&item)?;

    let direction = if delta > 0 { "in" } else { "out" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stock {} ({}): {} now at {}",
        direction, index, item.name, item.quantity
    )));

    if item.is_low() {
        result.add_message(CmdMessage::warning(format!(
            "{} is below its reorder level ({} < {})",
            item.name, item.quantity, item.reorder_level
        )));
    }

    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::show;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn applies_positive_and_negative_deltas() {
        let fixture = StoreFixture::new().with_item("Widget", 5, 100);
        let mut store = fixture.store;

        run(&mut store, &ItemSelector::Index(1), 3).unwrap();
        run(&mut store, &ItemSelector::Index(1), -6).unwrap();

        let item = &show::run(&store, &[ItemSelector::Index(1)])
            .unwrap()
            .listed_items[0]
            .item;
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn refuses_to_go_below_zero() {
        let fixture = StoreFixture::new().with_item("Widget", 2, 100);
        let mut store = fixture.store;

        let result = run(&mut store, &ItemSelector::Index(1), -3);
        assert!(matches!(result, Err(StockaError::Validation(_))));

        let item = &show::run(&store, &[ItemSelector::Index(1)])
            .unwrap()
            .listed_items[0]
            .item;
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn zero_delta_is_rejected() {
        let fixture = StoreFixture::new().with_item("Widget", 2, 100);
        let mut store = fixture.store;
        assert!(run(&mut store, &ItemSelector::Index(1), 0).is_err());
    }

    #[test]
    fn warns_when_dropping_below_reorder_level() {
        let fixture = StoreFixture::new().with_low_item("Widget", 6, 5);
        let mut store = fixture.store;

        let result = run(&mut store, &ItemSelector::Index(1), -2).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("reorder level")));
    }
}
