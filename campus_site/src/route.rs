//! Route surface.
//!
//! Maps URL paths to [`Route`] values and builds outgoing links. Links are built
//! from display names through the same normalizer the resolver uses, so every
//! generated path resolves back to the record it was built from.

use std::borrow::Cow;
use std::fmt::Write;

use campus_data::slug::normalize;
use variantly::Variantly;

use crate::resolver::SectionKind;

/// A parsed request path. Slugs are kept as requested; resolution normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Route {
    /// `/`
    CampusIndex,
    /// `/{campus}`
    CampusHome { campus: String },
    /// `/{campus}/{kind}/{section}`
    Section {
        campus: String,
        kind: SectionKind,
        section: String,
    },
    /// Anything else.
    NotFound { path: String },
}

impl Route {
    /// Canonical path for this route (normalized slugs).
    pub fn path(&self) -> String {
        match self {
            Route::CampusIndex => "/".to_string(),
            Route::CampusHome { campus } => campus_path(campus),
            Route::Section { campus, kind, section } => section_path(campus, *kind, section),
            Route::NotFound { path } => path.clone(),
        }
    }
}

/// Parse a request path. Never fails: unrecognized shapes become `Route::NotFound`.
///
/// Query strings and fragments are dropped, empty segments ignored, and each
/// segment is percent-decoded.
pub fn parse_route(path: &str) -> Route {
    let trimmed = path.trim();
    let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<String> = without_query
        .split('/')
        .filter(|segment| !segment.trim().is_empty())
        .map(decode_segment)
        .collect();

    match segments.as_slice() {
        [] => Route::CampusIndex,
        [campus] => Route::CampusHome {
            campus: campus.clone(),
        },
        [campus, kind, section] => match SectionKind::from_segment(kind) {
            Some(kind) => Route::Section {
                campus: campus.clone(),
                kind,
                section: section.clone(),
            },
            None => Route::NotFound {
                path: trimmed.to_string(),
            },
        },
        _ => Route::NotFound {
            path: trimmed.to_string(),
        },
    }
}

/// Link to a campus home page from its display name.
pub fn campus_path(campus: &str) -> String {
    format!("/{}", encode_slug(campus))
}

/// Link to a section page from display names (`Santa Cruz`, `Ingeniería de Sistemas`).
pub fn section_path(campus: &str, kind: SectionKind, section: &str) -> String {
    let mut path = campus_path(campus);
    let _ = write!(path, "/{}/{}", kind.segment(), encode_slug(section));
    path
}

/// Names that normalize to nothing keep their raw text so the link still points somewhere.
fn encode_slug(name: &str) -> String {
    let slug = normalize(name);
    let slug = if slug.is_empty() { name.trim() } else { slug.as_str() };
    urlencoding::encode(slug).into_owned()
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}
