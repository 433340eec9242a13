//! # Storage Layer
//!
//! This module defines the storage abstraction for stocka. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All items stored in `items.json` as one ordered array
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Ordering Contract
//!
//! `list_items` returns items in **insertion order**, and every implementation
//! must preserve it: saving an existing item replaces it in place, it never
//! moves to the end. Listings number items by this order, so a stable order is
//! part of the user-facing contract, not a cosmetic detail.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── items.json          # All items (ordered JSON array)
//! └── config.json         # Currency configuration
//! ```

use crate::error::Result;
use crate::model::Item;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for item storage.
///
/// Implementations must handle persistence, retrieval, and the insertion-order
/// contract described in the module docs.
pub trait DataStore {
    /// Save an item (create or update). Updates keep the item's position.
    fn save_item(&mut self, item: &Item) -> Result<()>;

    /// Get an item by ID
    fn get_item(&self, id: &Uuid) -> Result<Item>;

    /// List all items in insertion order
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Delete an item permanently
    fn delete_item(&mut self, id: &Uuid) -> Result<()>;
}
