//! Page building.
//!
//! Turns a [`Route`] into a [`Page`] by running the resolver and gathering what
//! the view needs (menus, grid rows, media links, assets). Every lookup miss
//! becomes [`Page::NotFound`] right here.

use std::path::Path;

use campus_data::{Career, InteractionProgram, OfferCard, ResearchContent};
use log::debug;

use crate::assets::AssetSlot;
use crate::layout::{AlumniTotals, split_rows};
use crate::media::{VideoLinks, inquiry_link};
use crate::menu::{Menu, MenuEntry, campus_menus, research_title};
use crate::resolver::{
    AlumniSection, CampusMatch, MoreSection, NotFound, SectionContent, SectionKind, resolve_campus, resolve_section,
};
use crate::route::{Route, campus_path};
use crate::site::Site;

/// Everything a view needs to present one route.
#[derive(Debug, Clone, PartialEq)]
pub enum Page<'a> {
    CampusIndex {
        campuses: Vec<MenuEntry>,
    },
    CampusHome(CampusHome<'a>),
    Career(CareerPage<'a>),
    More {
        campus: CampusMatch<'a>,
        section: MoreSection<'a>,
    },
    AlumniNetwork {
        campus: CampusMatch<'a>,
        section: AlumniSection<'a>,
        /// Network-wide figures, shown on the general page.
        totals: Option<AlumniTotals>,
    },
    Research {
        campus: CampusMatch<'a>,
        title: String,
        content: &'a ResearchContent,
    },
    Interaction {
        campus: CampusMatch<'a>,
        program: &'a InteractionProgram,
    },
    NotFound(NotFoundPage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampusHome<'a> {
    pub campus: CampusMatch<'a>,
    pub offer_rows: Vec<Vec<OfferTile<'a>>>,
    pub totals: AlumniTotals,
    pub backgrounds: Backgrounds<'a>,
}

/// One card of the offer grid with its image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferTile<'a> {
    pub card: &'a OfferCard,
    pub image: Option<&'a Path>,
}

/// Background images of the campus home blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Backgrounds<'a> {
    pub main: Option<&'a Path>,
    pub offer: Option<&'a Path>,
    pub alumni: Option<&'a Path>,
    pub enrollment: Option<&'a Path>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CareerPage<'a> {
    pub campus: CampusMatch<'a>,
    pub career: &'a Career,
    pub video: Option<VideoLinks>,
    pub curriculum: Option<&'a Path>,
    pub inquiry: Option<String>,
}

/// Fallback page carrying what was asked for and why it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundPage {
    pub path: String,
    pub campus: Option<String>,
    pub requested: Option<String>,
    pub reason: String,
}

impl NotFoundPage {
    fn from_miss(route: &Route, miss: &NotFound) -> Self {
        Self {
            path: route.path(),
            campus: miss.campus().map(str::to_string),
            requested: Some(miss.requested().to_string()),
            reason: miss.to_string(),
        }
    }

    fn unknown_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            campus: None,
            requested: None,
            reason: format!("no page matches '{path}'"),
        }
    }
}

impl<'a> Page<'a> {
    /// Campus the page belongs to, if any.
    pub fn campus(&self) -> Option<CampusMatch<'a>> {
        match self {
            Page::CampusHome(home) => Some(home.campus),
            Page::Career(page) => Some(page.campus),
            Page::More { campus, .. }
            | Page::AlumniNetwork { campus, .. }
            | Page::Research { campus, .. }
            | Page::Interaction { campus, .. } => Some(*campus),
            Page::CampusIndex { .. } | Page::NotFound(_) => None,
        }
    }

    /// Navigation menus shown with the page.
    pub fn menus(&self) -> Vec<Menu> {
        match self {
            Page::CampusIndex { campuses } => vec![Menu {
                title: "Sedes",
                entries: campuses.clone(),
            }],
            Page::NotFound(_) => vec![Menu {
                title: "Inicio",
                entries: vec![MenuEntry::new("Inicio", "/")],
            }],
            _ => self.campus().map(|campus| campus_menus(&campus)).unwrap_or_default(),
        }
    }

    /// Menu entries flattened in display order; the browser numbers these.
    pub fn links(&self) -> Vec<MenuEntry> {
        self.menus().into_iter().flat_map(|menu| menu.entries).collect()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound(_))
    }
}

/// Build the page for `route`; lookup misses become `Page::NotFound`.
pub fn build_page<'a>(site: &'a Site, route: &Route) -> Page<'a> {
    let built = match route {
        Route::CampusIndex => Ok(campus_index(site)),
        Route::CampusHome { campus } => resolve_campus(&site.tree, campus).map(|campus| campus_home(site, campus)),
        Route::Section { campus, kind, section } => resolve_campus(&site.tree, campus).and_then(|campus| {
            resolve_section(&campus, section, *kind).map(|content| section_page(site, campus, content))
        }),
        Route::NotFound { path } => {
            debug!("no route for '{path}'");
            return Page::NotFound(NotFoundPage::unknown_path(path));
        },
    };

    built.unwrap_or_else(|miss| {
        debug!("lookup miss for '{}': {miss}", route.path());
        Page::NotFound(NotFoundPage::from_miss(route, &miss))
    })
}

fn campus_index(site: &Site) -> Page<'_> {
    Page::CampusIndex {
        campuses: site
            .tree
            .iter()
            .map(|(name, _)| MenuEntry::new(name, campus_path(name)))
            .collect(),
    }
}

fn campus_home<'a>(site: &'a Site, campus: CampusMatch<'a>) -> Page<'a> {
    let slot = |name: &str| site.assets.get(campus.name, &AssetSlot::campus(name));
    let tiles: Vec<OfferTile<'a>> = campus
        .record
        .offer
        .iter()
        .map(|card| OfferTile {
            card,
            image: site.assets.get(campus.name, &AssetSlot::career_card(&card.title)),
        })
        .collect();

    Page::CampusHome(CampusHome {
        campus,
        offer_rows: split_rows(&tiles).into_iter().map(<[OfferTile<'a>]>::to_vec).collect(),
        totals: AlumniTotals::for_campus(campus.record),
        backgrounds: Backgrounds {
            main: slot("fondoPrincipal"),
            offer: slot("fondoOferta"),
            alumni: slot("fondoAlumni"),
            enrollment: slot("fondoIncripcion"),
        },
    })
}

fn section_page<'a>(site: &'a Site, campus: CampusMatch<'a>, content: SectionContent<'a>) -> Page<'a> {
    match content {
        SectionContent::Career(career) => Page::Career(CareerPage {
            campus,
            career,
            video: career.video.as_deref().and_then(VideoLinks::from_url),
            curriculum: site.assets.get(campus.name, &AssetSlot::curriculum(&career.title)),
            inquiry: inquiry_link(&campus.record.whatsapp, &career.title, campus.name),
        }),
        SectionContent::More(section) => Page::More { campus, section },
        SectionContent::AlumniNetwork(section) => Page::AlumniNetwork {
            campus,
            section,
            totals: matches!(section, AlumniSection::General { .. }).then(|| AlumniTotals::for_network(&site.tree)),
        },
        SectionContent::Research { key, content } => Page::Research {
            campus,
            title: research_title(key),
            content,
        },
        SectionContent::Interaction(program) => Page::Interaction { campus, program },
    }
}

/// Section kinds reachable from a campus page, used by the help text.
pub fn section_segments() -> Vec<&'static str> {
    SectionKind::ALL.iter().map(|kind| kind.segment()).collect()
}
