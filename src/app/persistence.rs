// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The theme flag is the only preference the page writes back. It is stored in
//! the same `settings.toml` the user edits, so the whole in-memory config is
//! saved to keep the other sections intact.

use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use std::path::Path;

/// Records `theme` in `config` and writes the config to disk.
///
/// The in-memory value is updated even when saving fails.
pub fn persist_theme(config: &mut Config, theme: ThemeMode, config_dir: Option<&Path>) -> Result<()> {
    config.general.theme = theme;
    config::save_with_override(config, config_dir.map(Path::to_path_buf))
}
