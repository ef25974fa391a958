#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SITE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod assets;
pub mod browser;
pub mod command;
pub mod data_paths;
pub mod layout;
pub mod loader;
pub mod media;
pub mod menu;
pub mod page;
pub mod resolver;
pub mod route;
pub mod site;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use browser::run_browser;
pub use loader::{SitePaths, load_site};
pub use page::Page;
pub use resolver::{CampusMatch, NotFound, SectionContent, SectionKind, resolve, resolve_campus, resolve_section};
pub use route::{Route, parse_route};
pub use site::Site;
pub use view::{View, ViewItem};
