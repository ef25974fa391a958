//! Navigation menus for a campus.
//!
//! Every target is built with the route helpers and checked against the resolver,
//! so menu links always resolve.

use campus_data::slug::normalize;

use crate::resolver::{CampusMatch, SectionKind, resolve_section};
use crate::route::{campus_path, section_path};

/// Institutional sections offered in the "more" menu: (label, section name).
pub const MORE_SECTIONS: &[(&str, &str)] = &[
    ("Bienvenida", "bienvenida"),
    ("Historia", "historia"),
    ("Filosofía", "filosofia"),
    ("Reglamento", "reglamento"),
    ("Misión y Visión", "misionvision"),
    ("Autoridades", "autoridades"),
];

const RESEARCH_TITLES: &[(&str, &str)] = &[
    ("bienvenida", "Bienvenida"),
    ("boletines", "Boletines"),
    ("revistasalud", "Salud UNO"),
    ("lineadeinvestigacion", "Línea de Investigación"),
    ("investigaciones", "Investigaciones"),
    ("docentesinvestigadores", "Docentes Investigadores"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// Friendly tab title for a research topic key.
pub fn research_title(key: &str) -> String {
    let slug = normalize(key);
    RESEARCH_TITLES
        .iter()
        .find(|(known, _)| *known == slug)
        .map_or_else(|| capitalize(key), |(_, title)| (*title).to_string())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// All menus for a campus, in header order.
///
/// Entries whose section does not resolve are left out, and menus left empty are omitted.
pub fn campus_menus(campus: &CampusMatch<'_>) -> Vec<Menu> {
    let name = campus.name;
    let record = campus.record;
    let entry = |label: &str, kind: SectionKind, section: &str| {
        resolve_section(campus, section, kind)
            .is_ok()
            .then(|| MenuEntry::new(label, section_path(name, kind, section)))
    };

    let mut menus = vec![Menu {
        title: "Inicio",
        entries: vec![MenuEntry::new(name, campus_path(name))],
    }];
    let mut push = |title: &'static str, entries: Vec<MenuEntry>| {
        if !entries.is_empty() {
            menus.push(Menu { title, entries });
        }
    };

    push(
        "Más",
        MORE_SECTIONS
            .iter()
            .filter_map(|&(label, section)| entry(label, SectionKind::More, section))
            .collect(),
    );
    push(
        "Oferta Académica",
        record
            .offer
            .iter()
            .filter_map(|card| entry(card.title.as_str(), SectionKind::Career, card.title.as_str()))
            .collect(),
    );
    if let Some(block) = record.research_block() {
        push(
            "Investigación",
            block
                .topics
                .keys()
                .filter_map(|key| entry(research_title(key).as_str(), SectionKind::Research, key.as_str()))
                .collect(),
        );
    }
    push(
        "Interacción Social",
        record
            .interaction
            .iter()
            .filter_map(|p| entry(p.titulo.as_str(), SectionKind::Interaction, p.titulo.as_str()))
            .collect(),
    );
    if let Some(network) = &record.alumni_network {
        let general = entry("General", SectionKind::AlumniNetwork, "general");
        let careers = network
            .carreras
            .iter()
            .filter_map(|c| entry(c.nombre.as_str(), SectionKind::AlumniNetwork, c.nombre.as_str()));
        push("Red Alumni", general.into_iter().chain(careers).collect());
    }

    menus
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_data::{
        AlumniCareer, AlumniNetwork, CampusRecord, Career, MoreBlock, OfferCard, ResearchBlock, ResearchContent,
        TitledText,
    };

    fn titled(titulo: &str, contenido: &str) -> TitledText {
        TitledText {
            titulo: titulo.into(),
            contenido: contenido.into(),
        }
    }

    #[test]
    fn research_titles_use_friendly_names() {
        assert_eq!(research_title("revistaSalud"), "Salud UNO");
        assert_eq!(research_title("lineadeinvestigacion"), "Línea de Investigación");
        assert_eq!(research_title("congresos"), "Congresos");
        assert_eq!(research_title(""), "");
    }

    #[test]
    fn menus_skip_missing_blocks() {
        let record = CampusRecord::default();
        let campus = CampusMatch {
            name: "Cobija",
            record: &record,
        };
        let menus = campus_menus(&campus);
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].entries, vec![MenuEntry::new("Cobija", "/cobija")]);
    }

    #[test]
    fn menus_link_to_normalized_paths() {
        let mut research = ResearchBlock::default();
        research
            .topics
            .insert("revistaSalud".into(), ResearchContent::Text("https://revista.example".into()));
        let record = CampusRecord {
            careers: vec![Career {
                title: "Ingeniería de Sistemas".into(),
                ..Career::default()
            }],
            more: Some(MoreBlock {
                misionvision: vec![titled("Misión", "Formar profesionales")],
                ..MoreBlock::default()
            }),
            offer: vec![OfferCard {
                title: "Ingeniería de Sistemas".into(),
                imagen: None,
            }],
            research: vec![research],
            ..CampusRecord::default()
        };
        let campus = CampusMatch {
            name: "Santa Cruz",
            record: &record,
        };
        let menus = campus_menus(&campus);
        let titles: Vec<&str> = menus.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Inicio", "Más", "Oferta Académica", "Investigación"]);

        assert!(menus[1]
            .entries
            .contains(&MenuEntry::new("Misión y Visión", "/santacruz/mas/misionvision")));
        assert_eq!(
            menus[2].entries,
            vec![MenuEntry::new(
                "Ingeniería de Sistemas",
                "/santacruz/carrera/ingenieriadesistemas"
            )]
        );
        assert_eq!(
            menus[3].entries,
            vec![MenuEntry::new("Salud UNO", "/santacruz/investigacion/revistasalud")]
        );
    }

    #[test]
    fn entries_without_content_are_left_out() {
        let mut research = ResearchBlock::default();
        research.topics.insert("boletines".into(), ResearchContent::Entries(Vec::new()));
        research
            .topics
            .insert("bienvenida".into(), ResearchContent::Text("Bienvenidos".into()));
        let record = CampusRecord {
            more: Some(MoreBlock {
                bienvenida: Some(titled("Bienvenida", "Hola")),
                historia: Some(titled("Historia", "  ")),
                ..MoreBlock::default()
            }),
            offer: vec![OfferCard {
                title: "Medicina".into(),
                imagen: None,
            }],
            research: vec![research],
            alumni_network: Some(AlumniNetwork {
                descripcion: String::new(),
                carreras: vec![AlumniCareer {
                    nombre: "Derecho".into(),
                    ..AlumniCareer::default()
                }],
            }),
            ..CampusRecord::default()
        };
        let campus = CampusMatch {
            name: "Cobija",
            record: &record,
        };
        let menus = campus_menus(&campus);
        let titles: Vec<&str> = menus.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Inicio", "Más", "Investigación", "Red Alumni"]);
        assert_eq!(menus[1].entries, vec![MenuEntry::new("Bienvenida", "/cobija/mas/bienvenida")]);
        assert_eq!(
            menus[2].entries,
            vec![MenuEntry::new("Bienvenida", "/cobija/investigacion/bienvenida")]
        );
        assert_eq!(menus[3].entries, vec![MenuEntry::new("Derecho", "/cobija/redalumni/derecho")]);
    }
}
