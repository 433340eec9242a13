use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Item, ItemDraft};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: ItemDraft) -> Result<CmdResult> {
    draft.validate()?;

    let item = Item::new(draft);
    store.save_item(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item added: {}", item.name)));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::StockaError;
    use crate::store::memory::InMemoryStore;

    fn draft(name: &str, quantity: i64, price_cents: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            price_cents,
            ..Default::default()
        }
    }

    #[test]
    fn adds_a_valid_item() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("Widget", 3, 1299)).unwrap();

        assert_eq!(result.affected_items.len(), 1);
        let item = &result.affected_items[0];
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price_cents, 1299);
    }

    #[test]
    fn issues_distinct_ids() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, draft("A", 1, 100)).unwrap();
        let b = run(&mut store, draft("B", 1, 100)).unwrap();
        assert_ne!(a.affected_items[0].id, b.affected_items[0].id);
    }

    #[test]
    fn rejects_invalid_fields_and_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();

        for bad in [draft("", 1, 100), draft("X", -1, 100), draft("X", 1, -100)] {
            let result = run(&mut store, bad);
            assert!(matches!(result, Err(StockaError::Validation(_))));
        }

        let listed = list::run(&store, false).unwrap();
        assert!(listed.listed_items.is_empty());
    }
}
