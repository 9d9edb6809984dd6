use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LibrarySection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Always fetch the decorative quote on `stats`
    #[serde(default)]
    pub flair: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_library_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("library.json"))
}

/// Read the config file, treating a missing file as defaults.
pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ShelfConfig::default())
        }
        Err(err) => {
            return Err(anyhow::anyhow!(
                "Failed to read config {}: {}",
                path.display(),
                err
            ))
        }
    };
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
