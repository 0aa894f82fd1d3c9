//! Config as loaded from disk, plus the CLI-overridden view the demo runs on.

use std::path::Path;

use orrery_config::{CliArgs, Config, ConfigError};

/// Tracks the on-disk config separately from the effective one so reloads
/// compare file against file.
pub struct LiveConfig {
    file: Config,
    effective: Config,
}

impl LiveConfig {
    pub fn new(file: Config, args: &CliArgs) -> Self {
        let mut effective = file.clone();
        effective.apply_cli_overrides(args);
        Self { file, effective }
    }

    /// Settings with CLI overrides applied.
    pub fn effective(&self) -> &Config {
        &self.effective
    }

    /// Re-read `config.ron`. Returns the previous effective config when the
    /// file changed, `None` when it did not.
    pub fn poll(
        &mut self,
        config_dir: &Path,
        args: &CliArgs,
    ) -> Result<Option<Config>, ConfigError> {
        let Some(file) = self.file.reload(config_dir)? else {
            return Ok(None);
        };
        let mut effective = file.clone();
        effective.apply_cli_overrides(args);
        self.file = file;
        Ok(Some(std::mem::replace(&mut self.effective, effective)))
    }
}
