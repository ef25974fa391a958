//! The loaded site: content tree, asset map and settings, immutable after load.

use campus_data::ContentTree;
use indexmap::IndexSet;

use crate::assets::AssetMap;
use crate::loader::site_config::SiteConfig;
use crate::menu::campus_menus;
use crate::page::{Page, build_page};
use crate::resolver::CampusMatch;
use crate::route::{Route, parse_route};

#[derive(Debug, Clone)]
pub struct Site {
    pub tree: ContentTree,
    pub assets: AssetMap,
    pub config: SiteConfig,
}

impl Site {
    pub fn new(tree: ContentTree, assets: AssetMap, config: SiteConfig) -> Self {
        Self { tree, assets, config }
    }

    /// Build the page for a request path.
    pub fn page(&self, path: &str) -> Page<'_> {
        self.page_for(&parse_route(path))
    }

    pub fn page_for(&self, route: &Route) -> Page<'_> {
        build_page(self, route)
    }

    /// Every path reachable from the site's menus, starting with `/`.
    pub fn known_paths(&self) -> Vec<String> {
        let mut paths = IndexSet::new();
        paths.insert("/".to_string());
        for (name, record) in self.tree.iter() {
            let campus = CampusMatch { name, record };
            for menu in campus_menus(&campus) {
                paths.extend(menu.entries.into_iter().map(|entry| entry.path));
            }
        }
        paths.into_iter().collect()
    }
}
