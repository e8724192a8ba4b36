// SPDX-License-Identifier: MPL-2.0
//! Where the portfolio reads its settings and drops the résumé.
//!
//! Each directory is resolved from the first source that provides it:
//!
//! 1. an explicit override passed to the `*_with_override` functions,
//! 2. the command line (`--config-dir`, `--download-dir`), recorded once by
//!    [`init_cli_overrides`],
//! 3. the `ICED_PORTFOLIO_CONFIG_DIR` / `ICED_PORTFOLIO_DOWNLOAD_DIR`
//!    environment variables (empty values are ignored),
//! 4. the platform default from the `dirs` crate.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Subdirectory created under the platform config directory.
const APP_NAME: &str = "IcedPortfolio";

pub const ENV_CONFIG_DIR: &str = "ICED_PORTFOLIO_CONFIG_DIR";
pub const ENV_DOWNLOAD_DIR: &str = "ICED_PORTFOLIO_DOWNLOAD_DIR";

#[derive(Debug, Default)]
struct CliOverrides {
    config_dir: Option<PathBuf>,
    download_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum Dir {
    Config,
    Download,
}

impl Dir {
    fn env_var(self) -> &'static str {
        match self {
            Dir::Config => ENV_CONFIG_DIR,
            Dir::Download => ENV_DOWNLOAD_DIR,
        }
    }

    fn cli_value(self) -> Option<PathBuf> {
        let cli = CLI_OVERRIDES.get()?;
        match self {
            Dir::Config => cli.config_dir.clone(),
            Dir::Download => cli.download_dir.clone(),
        }
    }

    fn env_value(self) -> Option<PathBuf> {
        std::env::var_os(self.env_var())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Config gets its own folder; the résumé lands straight in the user's
    /// downloads, or their home when the platform has none.
    fn platform_default(self) -> Option<PathBuf> {
        match self {
            Dir::Config => dirs::config_dir().map(|dir| dir.join(APP_NAME)),
            Dir::Download => dirs::download_dir().or_else(dirs::home_dir),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path
            .or_else(|| self.cli_value())
            .or_else(|| self.env_value())
            .or_else(|| self.platform_default())
    }
}

/// Records the directories given on the command line.
///
/// Only the first call has an effect; later ones are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, download_dir: Option<String>) {
    let overrides = CliOverrides {
        config_dir: config_dir.map(PathBuf::from),
        download_dir: download_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::warn!("command-line directory overrides already set");
    }
}

/// Directory holding `settings.toml`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Config.resolve(override_path)
}

/// Directory the résumé is written to.
pub fn get_download_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Download.resolve(override_path)
}
