//! Application context for the Budget CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and owns the
//! one place where the ledger store is opened.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use budget_core::storage::FileStore;
use budget_core::store::LoadOrigin;
use budget_core::LedgerStore;

use crate::cli::Cli;
use crate::config::{load_config, BudgetConfig};
use crate::ui::UiContext;

use super::{resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<BudgetConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&BudgetConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Currency symbol used when printing amounts.
    pub fn currency(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.ui.currency.as_str())
    }

    /// Load the ledger store from the data directory.
    pub fn open_store(&self) -> anyhow::Result<LedgerStore<FileStore>> {
        let dir = self.data_dir()?;
        debug!(dir = %dir.display(), "opening ledger");
        let store = LedgerStore::load(FileStore::new(dir));
        if store.origin() == LoadOrigin::Recovered && !self.quiet() {
            eprintln!("Warning: stored ledger could not be read; showing sample data instead.");
        }
        Ok(store)
    }

    /// Create a UI context for rendering output.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
