//! Settings file resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eta_settings::EtaSettings;

/// Looked up in the working directory when no `--config` is given.
pub(crate) const LOCAL_SETTINGS_FILE: &str = "eta.toml";

/// The settings file to load, if any.
///
/// An explicit path is always returned, even if it does not exist, so that
/// a typo surfaces as an error instead of silently falling back to defaults.
pub(crate) fn settings_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = cwd.join(LOCAL_SETTINGS_FILE);
    local.is_file().then_some(local)
}

pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<EtaSettings> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    match settings_path(explicit, &cwd) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading settings");
            EtaSettings::from_file(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
        None => Ok(EtaSettings::default()),
    }
}
