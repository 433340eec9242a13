use crate::config::StockaConfig;
use crate::index::DisplayItem;
use crate::model::Item;
use std::path::PathBuf;

pub mod add;
pub mod adjust;
pub mod backup;
pub mod config;
pub mod export;
pub mod helpers;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod show;
pub mod status;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Summary figures for the `status` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub item_count: usize,
    pub total_units: i64,
    pub total_value_cents: i64,
    pub low_stock_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub summary: Option<StockSummary>,
    pub export_path: Option<PathBuf>,
    pub config: Option<StockaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_summary(mut self, summary: StockSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: StockaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
