use super::DataStore;
use crate::error::{Result, StockaError};
use crate::model::Item;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => self.items.push(item.clone()),
        }
        Ok(())
    }

    fn get_item(&self, id: &Uuid) -> Result<Item> {
        self.items
            .iter()
            .find(|i| i.id == *id)
            .cloned()
            .ok_or(StockaError::ItemNotFound(*id))
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn delete_item(&mut self, id: &Uuid) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != *id);
        if self.items.len() == before {
            return Err(StockaError::ItemNotFound(*id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ItemDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let item = Item::new(ItemDraft {
                    name: format!("Test Item {}", i + 1),
                    quantity: (i as i64 + 1) * 2,
                    price_cents: 100 * (i as i64 + 1),
                    ..Default::default()
                });
                self.store.save_item(&item).unwrap();
            }
            self
        }

        pub fn with_item(mut self, name: &str, quantity: i64, price_cents: i64) -> Self {
            let item = Item::new(ItemDraft {
                name: name.to_string(),
                quantity,
                price_cents,
                ..Default::default()
            });
            self.store.save_item(&item).unwrap();
            self
        }

        pub fn with_low_item(mut self, name: &str, quantity: i64, reorder_level: i64) -> Self {
            let item = Item::new(ItemDraft {
                name: name.to_string(),
                quantity,
                price_cents: 100,
                reorder_level,
                ..Default::default()
            });
            self.store.save_item(&item).unwrap();
            self
        }
    }
}
