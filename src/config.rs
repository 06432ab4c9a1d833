//! Site configuration - defaults, optional TOML file, CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::VizResult;

/// Default location of the analysis dataset.
pub const DEFAULT_DATA_PATH: &str = "mlb_analysis_results.json";

/// Default output directory for generated documents.
pub const DEFAULT_OUT_DIR: &str = "site";

/// Default site title.
pub const DEFAULT_TITLE: &str = "Bowman Prospect Analysis";

/// Resolved configuration for one generator run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Path to the analysis dataset JSON.
    pub data: PathBuf,
    /// Output directory for generated documents.
    pub out: PathBuf,
    /// Site title shown on every generated page.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            out: PathBuf::from(DEFAULT_OUT_DIR),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    data: Option<PathBuf>,
    #[serde(default)]
    out: Option<PathBuf>,
    #[serde(default)]
    title: Option<String>,
}

/// Load a `SiteConfig` from a TOML file. Keys absent from the file keep
/// their defaults.
pub fn load_site_config(path: &Path) -> VizResult<SiteConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let parsed: RawConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    let mut cfg = SiteConfig::default();
    if let Some(data) = parsed.data {
        cfg.data = data;
    }
    if let Some(out) = parsed.out {
        cfg.out = out;
    }
    if let Some(title) = parsed.title {
        cfg.title = title;
    }
    Ok(cfg)
}
