//! Interactive terminal browser.
//!
//! Reads commands at a prompt, keeps a back stack of visited paths and shows
//! each page through the [`View`].

mod input;

use anyhow::Result;
use log::{debug, info};

use crate::command::{Command, parse_command};
use crate::page::section_segments;
use crate::route::{campus_path, parse_route};
use crate::site::Site;
use crate::style::SiteStyle;
use crate::view::{View, ViewItem, show_links, show_page};

use input::{InputEvent, InputManager};

/// Control flow signal returned by command handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserControl {
    Continue,
    Quit,
}

/// Browser state: where we are, where we have been, and pending output.
pub struct Browser<'a> {
    site: &'a Site,
    current: String,
    history: Vec<String>,
    pub view: View,
    pub page_views: usize,
}

impl<'a> Browser<'a> {
    /// Create a browser positioned at `start` and queue that page.
    pub fn new(site: &'a Site, start: &str) -> Self {
        let mut browser = Self {
            site,
            current: parse_route(start).path(),
            history: Vec::new(),
            view: View::for_config(&site.config),
            page_views: 0,
        };
        browser.show_current();
        browser
    }

    /// Path of the page being shown.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Navigate to `path`, remembering the current page for `back`.
    pub fn open(&mut self, path: &str) {
        let next = parse_route(path).path();
        if next != self.current {
            let previous = std::mem::replace(&mut self.current, next);
            self.history.push(previous);
        }
        self.show_current();
    }

    fn show_current(&mut self) {
        let page = self.site.page(&self.current);
        debug!("showing '{}' (not found: {})", self.current, page.is_not_found());
        self.page_views += 1;
        show_page(&mut self.view, &page, &self.site.config);
    }

    /// Apply one command, queueing its output.
    pub fn handle(&mut self, command: Command) -> BrowserControl {
        match command {
            Command::Go(path) => self.open(&path),
            Command::Follow(number) => {
                let links = self.site.page(&self.current).links();
                match number.checked_sub(1).and_then(|idx| links.get(idx)) {
                    Some(link) => {
                        let path = link.path.clone();
                        self.open(&path);
                    },
                    None => self
                        .view
                        .push(ViewItem::Error(format!("There is no link numbered {number} on this page."))),
                }
            },
            Command::Back => match self.history.pop() {
                Some(previous) => {
                    self.current = previous;
                    self.show_current();
                },
                None => self.view.push(ViewItem::Error("Nothing to go back to.".into())),
            },
            Command::Home => {
                let home = self
                    .site
                    .page(&self.current)
                    .campus()
                    .map_or_else(|| "/".to_string(), |campus| campus_path(campus.name));
                self.open(&home);
            },
            Command::Campuses => self.open("/"),
            Command::Links => show_links(&mut self.view, &self.site.page(&self.current)),
            Command::Help => self.help(),
            Command::Quit => {
                self.view.push(ViewItem::Notice("Hasta pronto.".into()));
                return BrowserControl::Quit;
            },
            Command::Unknown(line) => self.view.push(ViewItem::Error(format!(
                "Unknown command '{line}'. Type 'help' for the list of commands."
            ))),
        }
        BrowserControl::Continue
    }

    fn help(&mut self) {
        self.view.push(ViewItem::Title("Commands".into()));
        for line in [
            "go <path> or /<path>: open a page, e.g. /santacruz/carrera/derecho",
            "<number>: follow a numbered link",
            "links: list the links of this page again",
            "back: return to the previous page",
            "home: go to the current campus home page",
            "campuses: go to the campus selector",
            "help: show this list",
            "quit or exit: leave the browser",
        ] {
            self.view.push(ViewItem::Bullet(line.to_string()));
        }
        self.view.push(ViewItem::Notice(format!(
            "Section paths look like /<campus>/<section>/<name>, with section one of: {}",
            section_segments().join(", ")
        )));
    }

    pub fn flush(&mut self) {
        self.view.flush();
    }
}

/// Run the interactive browser until the user quits or input ends.
///
/// # Errors
/// Returns an error if reading from the terminal fails.
pub fn run_browser(site: &Site, start: &str) -> Result<()> {
    let mut input = InputManager::new(site.known_paths());
    let mut browser = Browser::new(site, start);
    browser.flush();

    loop {
        let prompt = format!("\n{}> ", browser.current()).prompt_style().to_string();
        let line = match input.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                browser.view.push(ViewItem::Notice("Type 'quit' to leave.".into()));
                browser.flush();
                continue;
            },
        };

        let Some(command) = parse_command(&line) else {
            continue;
        };
        info!("command: {command:?}");
        let control = browser.handle(command);
        browser.flush();
        if control == BrowserControl::Quit {
            break;
        }
    }

    info!("browser closed after {} page views", browser.page_views);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetMap;
    use crate::loader::site_config::SiteConfig;
    use campus_data::{CampusRecord, Career, ContentTree, OfferCard};
    use std::path::Path;

    fn site() -> Site {
        let record = CampusRecord {
            careers: vec![Career {
                title: "Derecho".into(),
                ..Career::default()
            }],
            offer: vec![OfferCard {
                title: "Derecho".into(),
                imagen: None,
            }],
            ..CampusRecord::default()
        };
        let mut tree = ContentTree::default();
        tree.campuses.insert("Santa Cruz".into(), record);
        tree.campuses.insert("Cobija".into(), CampusRecord::default());
        let assets = AssetMap::build(&tree, Path::new("assets"));
        let config = SiteConfig {
            wrap_width: Some(80),
            ..SiteConfig::default()
        };
        Site::new(tree, assets, config)
    }

    fn errors(browser: &mut Browser<'_>) -> Vec<ViewItem> {
        let items = std::mem::take(&mut browser.view.items);
        items.into_iter().filter(ViewItem::is_error).collect()
    }

    #[test]
    fn following_links_and_going_back() {
        let site = site();
        let mut browser = Browser::new(&site, "/");
        browser.handle(Command::Follow(2));
        assert_eq!(browser.current(), "/cobija");

        browser.handle(Command::Go("/Santa Cruz".into()));
        assert_eq!(browser.current(), "/santacruz");
        assert_eq!(browser.history(), ["/".to_string(), "/cobija".to_string()]);

        browser.handle(Command::Back);
        browser.handle(Command::Back);
        assert_eq!(browser.current(), "/");
        browser.view.items.clear();
        browser.handle(Command::Back);
        assert_eq!(errors(&mut browser).len(), 1);
    }

    #[test]
    fn bad_link_numbers_report_an_error() {
        let site = site();
        let mut browser = Browser::new(&site, "/");
        browser.view.items.clear();
        browser.handle(Command::Follow(0));
        browser.handle(Command::Follow(99));
        assert_eq!(errors(&mut browser).len(), 2);
        assert_eq!(browser.current(), "/");
    }

    #[test]
    fn home_goes_to_the_current_campus() {
        let site = site();
        let mut browser = Browser::new(&site, "/santacruz/carrera/derecho");
        browser.handle(Command::Home);
        assert_eq!(browser.current(), "/santacruz");
        browser.handle(Command::Go("/nowhere/x".into()));
        browser.handle(Command::Home);
        assert_eq!(browser.current(), "/");
    }

    #[test]
    fn unknown_paths_still_show_a_page() {
        let site = site();
        let mut browser = Browser::new(&site, "/santacruz");
        browser.view.items.clear();
        browser.handle(Command::Go("/doesnotexist".into()));
        assert!(browser.view.items.iter().any(ViewItem::is_not_found));
        assert_eq!(browser.page_views, 2);
    }

    #[test]
    fn punctuation_paths_show_not_found_instead_of_the_index() {
        let site = site();
        let mut browser = Browser::new(&site, "/santacruz");
        browser.view.items.clear();
        browser.handle(Command::Go("/-".into()));
        assert_eq!(browser.current(), "/-");
        assert!(browser.view.items.iter().any(ViewItem::is_not_found));
        assert!(browser.view.items.contains(&ViewItem::Field {
            label: "Ruta".into(),
            value: "/-".into(),
        }));

        let start = Browser::new(&site, "/_");
        assert_eq!(start.current(), "/_");
        assert!(start.view.items.iter().any(ViewItem::is_not_found));
    }

    #[test]
    fn quit_stops_the_loop() {
        let site = site();
        let mut browser = Browser::new(&site, "/");
        assert_eq!(browser.handle(Command::Help), BrowserControl::Continue);
        assert_eq!(browser.handle(Command::Quit), BrowserControl::Quit);
    }
}
