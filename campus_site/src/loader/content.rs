//! module `loader::content`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use campus_data::ContentTree;
use log::info;

/// Load the static content tree from its JSON file.
///
/// # Errors
/// - on file IO error or JSON parsing error
pub fn load_content_tree(json_path: &Path) -> Result<ContentTree> {
    let text = fs::read_to_string(json_path)
        .with_context(|| format!("reading content tree from '{}'", json_path.display()))?;
    let tree: ContentTree = serde_json::from_str(&text)
        .with_context(|| format!("parsing content tree JSON from '{}'", json_path.display()))?;

    info!("{} campuses loaded from '{}'", tree.len(), json_path.display());
    Ok(tree)
}
