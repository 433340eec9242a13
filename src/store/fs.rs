use super::DataStore;
use crate::error::{Result, StockaError};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const ITEMS_FILENAME: &str = "items.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn items_file(&self) -> PathBuf {
        self.root.join(ITEMS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_items(&self) -> Result<Vec<Item>> {
        let items_file = self.items_file();
        if !items_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&items_file)?;
        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| {
            StockaError::Store(format!("{} is not a valid item file: {}", items_file.display(), e))
        })?;
        debug!(count = items.len(), "loaded items from {}", items_file.display());
        Ok(items)
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items)?;
        fs::write(self.items_file(), content)?;
        debug!(count = items.len(), "wrote items file");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load_items()?;
        // Replace in place so updates don't change the listing order
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        self.save_items(&items)
    }

    fn get_item(&self, id: &Uuid) -> Result<Item> {
        self.load_items()?
            .into_iter()
            .find(|i| i.id == *id)
            .ok_or(StockaError::ItemNotFound(*id))
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        self.load_items()
    }

    fn delete_item(&mut self, id: &Uuid) -> Result<()> {
        let mut items = self.load_items()?;
        let before = items.len();
        items.retain(|i| i.id != *id);
        if items.len() == before {
            return Err(StockaError::ItemNotFound(*id));
        }
        debug!(%id, "deleted item");
        self.save_items(&items)
    }
}
