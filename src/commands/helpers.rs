use crate::error::{Result, StockaError};
use crate::index::{index_items, DisplayItem, ItemSelector};
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_items<S: DataStore>(store: &S) -> Result<Vec<DisplayItem>> {
    let items = store.list_items()?;
    Ok(index_items(items))
}

/// Resolves selectors to (display index, uuid) pairs against the current listing.
///
/// Name selectors match case-insensitively: an exact name wins, otherwise a
/// substring match must be unique.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[ItemSelector],
) -> Result<Vec<(usize, Uuid)>> {
    let indexed = indexed_items(store)?;

    selectors
        .iter()
        .map(|sel| resolve_one(&indexed, sel))
        .collect()
}

pub fn items_by_selectors<S: DataStore>(
    store: &S,
    selectors: &[ItemSelector],
) -> Result<Vec<DisplayItem>> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut items = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let item = store.get_item(&id)?;
        items.push(DisplayItem { item, index });
    }
    Ok(items)
}

fn resolve_one(indexed: &[DisplayItem], selector: &ItemSelector) -> Result<(usize, Uuid)> {
    match selector {
        ItemSelector::Index(idx) => indexed
            .iter()
            .find(|di| di.index == *idx)
            .map(|di| (di.index, di.item.id))
            .ok_or_else(|| StockaError::Api(format!("No item at index {}", idx))),
        ItemSelector::Name(query) => {
            let query_lower = query.to_lowercase();

            if let Some(di) = indexed
                .iter()
                .find(|di| di.item.name.to_lowercase() == query_lower)
            {
                return Ok((di.index, di.item.id));
            }

            let matches: Vec<_> = indexed
                .iter()
                .filter(|di| di.item.name.to_lowercase().contains(&query_lower))
                .collect();
            match matches.as_slice() {
                [] => Err(StockaError::Api(format!("No item matching '{}'", query))),
                [di] => Ok((di.index, di.item.id)),
                many => Err(StockaError::Api(format!(
                    "'{}' is ambiguous: matches {}",
                    query,
                    many.iter()
                        .map(|di| di.item.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_index_selectors() {
        let fixture = StoreFixture::new().with_items(3);
        let resolved =
            resolve_selectors(&fixture.store, &[ItemSelector::Index(2)]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, 2);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = StoreFixture::new().with_items(1);
        let result = resolve_selectors(&fixture.store, &[ItemSelector::Index(9)]);
        assert!(matches!(result, Err(StockaError::Api(_))));
    }

    #[test]
    fn exact_name_beats_substring() {
        let fixture = StoreFixture::new()
            .with_item("Bolt", 1, 100)
            .with_item("Bolt Cutter", 1, 100);
        let resolved =
            resolve_selectors(&fixture.store, &[ItemSelector::Name("bolt".into())]).unwrap();
        let item = fixture.store.get_item(&resolved[0].1).unwrap();
        assert_eq!(item.name, "Bolt");
    }

    #[test]
    fn ambiguous_name_is_an_error() {
        let fixture = StoreFixture::new()
            .with_item("Red Widget", 1, 100)
            .with_item("Blue Widget", 1, 100);
        let result =
            resolve_selectors(&fixture.store, &[ItemSelector::Name("widget".into())]);
        assert!(matches!(result, Err(StockaError::Api(_))));
    }

    #[test]
    fn unique_substring_resolves() {
        let fixture = StoreFixture::new()
            .with_item("Red Widget", 1, 100)
            .with_item("Bolt", 1, 100);
        let resolved =
            resolve_selectors(&fixture.store, &[ItemSelector::Name("widg".into())]).unwrap();
        let item = fixture.store.get_item(&resolved[0].1).unwrap();
        assert_eq!(item.name, "Red Widget");
    }
}
