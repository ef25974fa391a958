//! Site-wide presentation settings.
//!
//! Loaded from `site.toml`; any problem with the file falls back to built-in
//! defaults so the site always starts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Presentation settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Institution name shown on the campus selector and in the footer.
    pub title: String,
    pub tagline: String,
    /// Heading of the not-found page.
    pub not_found_message: String,
    /// Label of the link back to the campus selector.
    pub home_label: String,
    pub footer: Vec<String>,
    /// Fixed wrap width; the terminal width is used when unset.
    pub wrap_width: Option<usize>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Universidad Nacional del Oriente".to_string(),
            tagline: "Elige tu sede".to_string(),
            not_found_message: "Página no encontrada".to_string(),
            home_label: "Volver al inicio".to_string(),
            footer: vec![
                "informaciones@uno.edu.bo".to_string(),
                "© UNIVERSIDAD NACIONAL DEL ORIENTE. Todos los Derechos Reservados".to_string(),
            ],
            wrap_width: None,
        }
    }
}

/// Wrapper for the TOML file.
#[derive(Debug, Deserialize)]
struct SiteFile {
    #[serde(default)]
    site: SiteConfig,
}

/// Loads site settings from a TOML file, falling back to defaults on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if file cannot be read or parsed (with fallback to defaults)
pub fn load_site_config(toml_path: &Path) -> SiteConfig {
    match try_load_site_config(toml_path) {
        Ok(config) => {
            info!("site settings loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load site settings from '{}': {:#}. Using built-in defaults.",
                toml_path.display(),
                e
            );
            SiteConfig::default()
        },
    }
}

fn try_load_site_config(toml_path: &Path) -> Result<SiteConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading site settings from '{}'", toml_path.display()))?;
    let wrapper: SiteFile =
        toml::from_str(&text).with_context(|| format!("parsing site settings from '{}'", toml_path.display()))?;
    Ok(wrapper.site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\ntitle = \"UNO\"\nwrap_width = 72").unwrap();

        let config = load_site_config(file.path());
        assert_eq!(config.title, "UNO");
        assert_eq!(config.wrap_width, Some(72));
        assert_eq!(config.not_found_message, SiteConfig::default().not_found_message);
    }

    #[test]
    fn unreadable_or_malformed_files_fall_back_to_defaults() {
        assert_eq!(load_site_config(Path::new("no/such/site.toml")), SiteConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site\ntitle = ").unwrap();
        assert_eq!(load_site_config(file.path()), SiteConfig::default());
    }

    #[test]
    fn shipped_settings_file_parses() {
        let config = try_load_site_config(Path::new("data/site.toml")).expect("data/site.toml should parse");
        assert!(!config.title.is_empty());
        assert!(!config.not_found_message.is_empty());
    }
}
