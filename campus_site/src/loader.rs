//! Loader utilities for building a `Site` from the files under the data root.
//!
//! Content comes from the JSON content tree; presentation settings are
//! TOML-backed and optional.

pub mod content;
pub mod site_config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::assets::AssetMap;
use crate::data_paths::data_path;
use crate::loader::content::load_content_tree;
use crate::loader::site_config::load_site_config;
use crate::site::Site;

/// Where the site's files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub content: PathBuf,
    pub config: PathBuf,
    pub assets: PathBuf,
}

impl Default for SitePaths {
    fn default() -> Self {
        Self {
            content: data_path("content.json"),
            config: data_path("site.toml"),
            assets: data_path("assets"),
        }
    }
}

/// Load the content tree, settings and asset map.
///
/// Authoring problems found by validation are logged, not fatal.
///
/// # Errors
/// Errors bubble up from reading or parsing the content file.
pub fn load_site(paths: &SitePaths) -> Result<Site> {
    let tree = load_content_tree(&paths.content).context("while loading content tree")?;

    let findings = campus_data::validate_tree(&tree);
    for finding in &findings {
        warn!("content check: {finding}");
    }
    if !findings.is_empty() {
        warn!("{} content problems found; first match wins on slug collisions", findings.len());
    }

    let config = load_site_config(&paths.config);

    let assets = AssetMap::build(&tree, &paths.assets);
    info!("{} asset references indexed under '{}'", assets.len(), assets.root().display());
    let missing = assets.missing_files();
    if !missing.is_empty() {
        warn!("{} referenced assets are missing on disk", missing.len());
        for path in missing {
            debug!("missing asset: {}", path.display());
        }
    }

    Ok(Site::new(tree, assets, config))
}
