//! Content Resolver
//!
//! Every page needs the same two lookups: find the campus named by the first URL
//! segment, then find the requested section inside it. Both compare slugs through
//! [`normalize`] on each side, return the first match in content-file order, and
//! never fail with anything but a [`NotFound`] describing what was asked for.
//!
//! Callers turn a `NotFound` into a not-found page on the spot; it is never
//! propagated further.

use std::fmt;

use campus_data::slug::normalize;
use campus_data::{
    AlumniCareer, Authority, CampusRecord, Career, ContentTree, InteractionProgram, RegulationDoc, ResearchContent,
    TitledText,
};
use thiserror::Error;

/// The sub-collection of a campus record a section slug is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Career,
    More,
    AlumniNetwork,
    Research,
    Interaction,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Career,
        SectionKind::More,
        SectionKind::AlumniNetwork,
        SectionKind::Research,
        SectionKind::Interaction,
    ];

    /// URL segment naming this kind (`/{campus}/{segment}/{section}`).
    pub fn segment(self) -> &'static str {
        match self {
            SectionKind::Career => "carrera",
            SectionKind::More => "mas",
            SectionKind::AlumniNetwork => "redalumni",
            SectionKind::Research => "investigacion",
            SectionKind::Interaction => "interaccion",
        }
    }

    /// Match a URL segment to a kind, ignoring case and accents (`Carrera`, `investigación`).
    pub fn from_segment(segment: &str) -> Option<Self> {
        let wanted = normalize(segment);
        Self::ALL.into_iter().find(|kind| kind.segment() == wanted)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SectionKind::Career => "career",
            SectionKind::More => "institutional section",
            SectionKind::AlumniNetwork => "alumni network section",
            SectionKind::Research => "research topic",
            SectionKind::Interaction => "interaction program",
        };
        f.write_str(label)
    }
}

/// The only failure a lookup can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("campus '{requested}' not found")]
    Campus { requested: String },
    #[error("{kind} '{requested}' not found in campus '{campus}'")]
    Section {
        campus: String,
        kind: SectionKind,
        requested: String,
    },
    #[error("campus '{campus}' has no {kind} content (requested '{requested}')")]
    NoContent {
        campus: String,
        kind: SectionKind,
        requested: String,
    },
}

impl NotFound {
    /// Display name of the campus the miss happened in, when the campus itself was found.
    pub fn campus(&self) -> Option<&str> {
        match self {
            NotFound::Campus { .. } => None,
            NotFound::Section { campus, .. } | NotFound::NoContent { campus, .. } => Some(campus),
        }
    }

    /// The slug exactly as it was requested.
    pub fn requested(&self) -> &str {
        match self {
            NotFound::Campus { requested }
            | NotFound::Section { requested, .. }
            | NotFound::NoContent { requested, .. } => requested,
        }
    }

    fn section(campus: &CampusMatch<'_>, kind: SectionKind, requested: &str) -> Self {
        NotFound::Section {
            campus: campus.name.to_string(),
            kind,
            requested: requested.to_string(),
        }
    }

    fn no_content(campus: &CampusMatch<'_>, kind: SectionKind, requested: &str) -> Self {
        NotFound::NoContent {
            campus: campus.name.to_string(),
            kind,
            requested: requested.to_string(),
        }
    }
}

/// A campus found in the tree, with its display name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampusMatch<'a> {
    pub name: &'a str,
    pub record: &'a CampusRecord,
}

impl CampusMatch<'_> {
    pub fn slug(&self) -> String {
        normalize(self.name)
    }
}

/// Content a section slug resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionContent<'a> {
    Career(&'a Career),
    More(MoreSection<'a>),
    AlumniNetwork(AlumniSection<'a>),
    Research { key: &'a str, content: &'a ResearchContent },
    Interaction(&'a InteractionProgram),
}

/// Institutional sections. `misionvision` and `filosofia` share one combined view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoreSection<'a> {
    Welcome(&'a TitledText),
    History(&'a TitledText),
    MissionVision {
        mission: &'a str,
        vision: &'a str,
        philosophy: &'a str,
    },
    Regulations(&'a [RegulationDoc]),
    Authorities(&'a [Authority]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlumniSection<'a> {
    General { description: &'a str },
    Career(&'a AlumniCareer),
}

/// Find the campus whose display name shares `campus_slug`'s lookup key.
///
/// # Errors
/// `NotFound::Campus` when no key matches (including a blank slug).
pub fn resolve_campus<'a>(tree: &'a ContentTree, campus_slug: &str) -> Result<CampusMatch<'a>, NotFound> {
    let wanted = normalize(campus_slug);
    if !wanted.is_empty()
        && let Some((name, record)) = tree.iter().find(|(name, _)| normalize(name) == wanted)
    {
        return Ok(CampusMatch { name, record });
    }
    Err(NotFound::Campus {
        requested: campus_slug.to_string(),
    })
}

/// Find the section of `kind` named by `section_slug` inside a campus.
///
/// # Errors
/// - `NotFound::NoContent` when the campus has no data at all for `kind`
/// - `NotFound::Section` when nothing in the collection matches, or the match is empty
pub fn resolve_section<'a>(
    campus: &CampusMatch<'a>,
    section_slug: &str,
    kind: SectionKind,
) -> Result<SectionContent<'a>, NotFound> {
    let wanted = normalize(section_slug);
    let record = campus.record;
    let found = match kind {
        SectionKind::Career => {
            first_by_slug(&record.careers, &wanted, |c| c.title.as_str()).map(SectionContent::Career)
        },
        SectionKind::Interaction => {
            first_by_slug(&record.interaction, &wanted, |p| p.titulo.as_str()).map(SectionContent::Interaction)
        },
        SectionKind::More => {
            let block = record
                .more
                .as_ref()
                .ok_or_else(|| NotFound::no_content(campus, kind, section_slug))?;
            more_section(block, &wanted).map(SectionContent::More)
        },
        SectionKind::AlumniNetwork => {
            let network = record
                .alumni_network
                .as_ref()
                .ok_or_else(|| NotFound::no_content(campus, kind, section_slug))?;
            if wanted == "general" {
                (!network.descripcion.trim().is_empty()).then_some(SectionContent::AlumniNetwork(
                    AlumniSection::General {
                        description: &network.descripcion,
                    },
                ))
            } else {
                first_by_slug(&network.carreras, &wanted, |c| c.nombre.as_str())
                    .map(|career| SectionContent::AlumniNetwork(AlumniSection::Career(career)))
            }
        },
        SectionKind::Research => {
            let block = record
                .research_block()
                .ok_or_else(|| NotFound::no_content(campus, kind, section_slug))?;
            block
                .topics
                .iter()
                .find(|(key, _)| !wanted.is_empty() && normalize(key) == wanted)
                .filter(|(_, content)| !content.is_empty())
                .map(|(key, content)| SectionContent::Research { key, content })
        },
    };
    found.ok_or_else(|| NotFound::section(campus, kind, section_slug))
}

/// Resolve a campus and one of its sections in one step.
///
/// # Errors
/// Whichever lookup misses first.
pub fn resolve<'a>(
    tree: &'a ContentTree,
    campus_slug: &str,
    section_slug: &str,
    kind: SectionKind,
) -> Result<(CampusMatch<'a>, SectionContent<'a>), NotFound> {
    let campus = resolve_campus(tree, campus_slug)?;
    let section = resolve_section(&campus, section_slug, kind)?;
    Ok((campus, section))
}

/// First item whose name normalizes to `wanted`; a blank `wanted` never matches.
fn first_by_slug<'a, T>(items: &'a [T], wanted: &str, name: impl Fn(&T) -> &str) -> Option<&'a T> {
    if wanted.is_empty() {
        return None;
    }
    items.iter().find(|item| normalize(name(item)) == wanted)
}

fn more_section<'a>(block: &'a campus_data::MoreBlock, wanted: &str) -> Option<MoreSection<'a>> {
    let present = |text: &&TitledText| !text.contenido.trim().is_empty();
    match wanted {
        "bienvenida" => block.bienvenida.as_ref().filter(present).map(MoreSection::Welcome),
        "historia" => block.historia.as_ref().filter(present).map(MoreSection::History),
        "misionvision" | "filosofia" => {
            let titled = |needle: &str| {
                block
                    .misionvision
                    .iter()
                    .find(|item| normalize(&item.titulo).contains(needle))
                    .map_or("", |item| item.contenido.as_str())
            };
            let mission = titled("mision");
            let vision = titled("vision");
            let philosophy = block.filosofia.as_ref().map_or("", |f| f.contenido.as_str());
            if mission.trim().is_empty() && vision.trim().is_empty() && philosophy.trim().is_empty() {
                None
            } else {
                Some(MoreSection::MissionVision {
                    mission,
                    vision,
                    philosophy,
                })
            }
        },
        "reglamento" => (!block.reglamento.is_empty()).then_some(MoreSection::Regulations(&block.reglamento)),
        "autoridades" => (!block.autoridades.is_empty()).then_some(MoreSection::Authorities(&block.autoridades)),
        _ => None,
    }
}
