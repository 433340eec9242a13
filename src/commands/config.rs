use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockaConfig;
use crate::error::{Result, StockaError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetCurrency(String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockaConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetCurrency(symbol) => {
            if symbol.trim().is_empty() {
                return Err(StockaError::Api("Currency symbol cannot be empty".into()));
            }
            config.set_currency(&symbol);
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "currency set to {}",
                config.get_currency()
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_returns_current_config() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().currency, "$");
    }

    #[test]
    fn set_currency_persists() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), ConfigAction::SetCurrency("€".into())).unwrap();

        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().currency, "€");
    }

    #[test]
    fn blank_currency_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::SetCurrency("  ".into()));
        assert!(result.is_err());
    }
}
