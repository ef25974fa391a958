#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Campus Site **
//! Multi-campus university site browser

use std::path::PathBuf;

use campus_site::view::{View, show_page};
use campus_site::{SITE_VERSION, SitePaths, load_site, run_browser};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "campus_site", version, about = "Browse the campus site content from the terminal")]
struct Cli {
    /// Content tree JSON file
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,
    /// Site settings TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory holding images and documents
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
    /// Render this route once and exit instead of starting the browser
    route: Option<String>,
}

impl Cli {
    fn site_paths(&self) -> SitePaths {
        let defaults = SitePaths::default();
        SitePaths {
            content: self.data.clone().unwrap_or(defaults.content),
            config: self.config.clone().unwrap_or(defaults.config),
            assets: self.assets.clone().unwrap_or(defaults.assets),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("Start: campus_site {SITE_VERSION}");

    let paths = cli.site_paths();
    let site = load_site(&paths).with_context(|| format!("while loading site from '{}'", paths.content.display()))?;
    info!("Site loaded: {} campuses", site.tree.len());

    if let Some(route) = &cli.route {
        let page = site.page(route);
        info!("one-shot render of '{route}' (not found: {})", page.is_not_found());
        let mut view = View::for_config(&site.config);
        show_page(&mut view, &page, &site.config);
        view.flush();
        return Ok(());
    }

    run_browser(&site, "/")
}
