use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockaError};
use crate::index::ItemSelector;
use crate::model::ItemPatch;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(
    store: &mut S,
    selector: &ItemSelector,
    patch: &ItemPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(StockaError::Api("Nothing to update".into()));
    }
    patch.validate()?;

    let resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    let (index, id) = resolved[0];

    let mut item = store.get_item(&id)?;
    patch.apply_to(&mut item);
    store.save_item(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        index, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::show;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_supplied_fields() {
        let fixture = StoreFixture::new().with_item("Widget", 3, 1299);
        let mut store = fixture.store;

        let patch = ItemPatch {
            price_cents: Some(999),
            ..Default::default()
        };
        run(&mut store, &ItemSelector::Index(1), &patch).unwrap();

        let item = &show::run(&store, &[ItemSelector::Index(1)])
            .unwrap()
            .listed_items[0]
            .item;
        assert_eq!(item.price_cents, 999);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn rejects_invalid_patch_values() {
        let fixture = StoreFixture::new().with_item("Widget", 3, 1299);
        let mut store = fixture.store;

        let patch = ItemPatch {
            quantity: Some(-2),
            ..Default::default()
        };
        let result = run(&mut store, &ItemSelector::Index(1), &patch);
        assert!(matches!(result, Err(StockaError::Validation(_))));

        // Store unchanged
        let item = &show::run(&store, &[ItemSelector::Index(1)])
            .unwrap()
            .listed_items[0]
            .item;
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn empty_patch_is_an_error() {
        let fixture = StoreFixture::new().with_item("Widget", 3, 1299);
        let mut store = fixture.store;

        let result = run(&mut store, &ItemSelector::Index(1), &ItemPatch::default());
        assert!(matches!(result, Err(StockaError::Api(_))));
    }

    #[test]
    fn renaming_keeps_listing_position() {
        let fixture = StoreFixture::new()
            .with_item("First", 1, 100)
            .with_item("Second", 1, 100);
        let mut store = fixture.store;

        let patch = ItemPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        run(&mut store, &ItemSelector::Index(1), &patch).unwrap();

        let listed = crate::commands::list::run(&store, false).unwrap().listed_items;
        assert_eq!(listed[0].item.name, "Renamed");
        assert_eq!(listed[1].item.name, "Second");
    }
}
