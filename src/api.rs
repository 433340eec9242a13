//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all stocka operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw selector strings to indexes/names, and on to UUIDs)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or output formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `StockaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StockaApi<FileStore>`
//! - Testing: `StockaApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::{Result, StockaError};
use crate::index::{parse_selector_or_range, ItemSelector};
use crate::model::{ItemDraft, ItemPatch};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for stocka operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct StockaApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> StockaApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_items(&self, low_only: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, low_only)
    }

    pub fn show_items<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::show::run(&self.store, &selectors)
    }

    pub fn update_item<I: AsRef<str>>(
        &mut self,
        selector: I,
        patch: &ItemPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_single_selector(selector.as_ref())?;
        commands::update::run(&mut self.store, &selector, patch)
    }

    pub fn adjust_item<I: AsRef<str>>(
        &mut self,
        selector: I,
        delta: i64,
    ) -> Result<commands::CmdResult> {
        let selector = parse_single_selector(selector.as_ref())?;
        commands::adjust::run(&mut self.store, &selector, delta)
    }

    pub fn remove_items<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::remove::run(&mut self.store, &selectors, skip_confirm)
    }

    pub fn search_items(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn export_csv(&self, path: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn backup(&self) -> Result<commands::CmdResult> {
        commands::backup::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>> {
    let mut selectors = Vec::new();
    for input in inputs {
        let expanded =
            parse_selector_or_range(input.as_ref()).map_err(StockaError::Api)?;
        selectors.extend(expanded);
    }
    Ok(selectors)
}

fn parse_single_selector(input: &str) -> Result<ItemSelector> {
    input
        .parse::<ItemSelector>()
        .map_err(StockaError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockSummary};
