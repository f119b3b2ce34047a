//! CLI configuration: where the store layout comes from

use std::fmt;
use std::path::{Path, PathBuf};

use aislemap_core::StoreLayout;
use anyhow::Context;

/// Environment variable naming a layout file
pub const LAYOUT_ENV: &str = "AISLEMAP_LAYOUT";

/// Get default layout file path
pub fn default_layout_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aislemap").join("store.toml"))
}

/// Where the active layout was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// Given with `--layout` or the environment
    Explicit(PathBuf),
    /// Found at the default config path
    Default(PathBuf),
    /// No file; the built-in sample store
    BuiltIn,
}

impl fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Default(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "built-in sample store"),
        }
    }
}

impl LayoutSource {
    /// Resolve the layout source: explicit path, then default path, then built-in
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }
        match default_layout_path() {
            Some(path) if path.is_file() => Self::Default(path),
            _ => Self::BuiltIn,
        }
    }

    /// Load the layout this source points to
    pub fn load(&self) -> anyhow::Result<StoreLayout> {
        match self {
            Self::Explicit(path) | Self::Default(path) => load_layout_file(path),
            Self::BuiltIn => Ok(StoreLayout::sample()),
        }
    }
}

/// Read and parse a TOML layout file
pub fn load_layout_file(path: &Path) -> anyhow::Result<StoreLayout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let layout = StoreLayout::from_toml_str(&text)
        .with_context(|| format!("Invalid layout file {}", path.display()))?;
    Ok(layout)
}
