use std::collections::HashMap;
use std::fmt;

use crate::slug::{normalize, same_slug};
use crate::*;

/// Authoring problem found in a `ContentTree`.
///
/// None of these stop the site from serving: lookups stay deterministic
/// (first match in file order wins), but some content becomes unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateSlug {
        kind: &'static str,
        slug: String,
        first: String,
        shadowed: String,
        context: String,
    },
    BlankName { kind: &'static str, context: String },
    MissingReference { kind: &'static str, id: String, context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSlug {
                kind,
                slug,
                first,
                shadowed,
                context,
            } => {
                write!(
                    f,
                    "duplicate {kind} slug '{slug}' ({context}): '{shadowed}' is shadowed by '{first}'"
                )
            },
            ValidationError::BlankName { kind, context } => {
                write!(f, "blank {kind} name ({context})")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check slug uniqueness and cross-references in a `ContentTree`.
///
/// ```
/// use campus_data::{CampusRecord, ContentTree, validate_tree};
///
/// let mut tree = ContentTree::default();
/// tree.campuses.insert("Santa Cruz".into(), CampusRecord::default());
/// tree.campuses.insert("SantaCruz".into(), CampusRecord::default());
/// let errors = validate_tree(&tree);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_tree(tree: &ContentTree) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    track_slugs("campus", tree.campuses.keys().map(String::as_str), "content tree", &mut errors);

    for (campus, record) in tree.iter() {
        let context = format!("campus '{campus}'");
        track_slugs(
            "career",
            record.careers.iter().map(|c| c.title.as_str()),
            &context,
            &mut errors,
        );
        track_slugs(
            "interaction program",
            record.interaction.iter().map(|p| p.titulo.as_str()),
            &context,
            &mut errors,
        );
        if let Some(network) = &record.alumni_network {
            track_slugs(
                "alumni career",
                network.carreras.iter().map(|c| c.nombre.as_str()),
                &context,
                &mut errors,
            );
        }
        if let Some(block) = record.research_block() {
            track_slugs(
                "research topic",
                block.topics.keys().map(String::as_str),
                &context,
                &mut errors,
            );
        }

        // every offer card links to a career page
        for card in &record.offer {
            if !record.careers.iter().any(|c| same_slug(&c.title, &card.title)) {
                errors.push(ValidationError::MissingReference {
                    kind: "career",
                    id: card.title.clone(),
                    context: format!("offer card in {context}"),
                });
            }
        }
    }

    errors
}

fn track_slugs<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
    context: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let slug = normalize(name);
        if slug.is_empty() {
            errors.push(ValidationError::BlankName {
                kind,
                context: context.to_string(),
            });
            continue;
        }
        if let Some(first) = seen.get(&slug) {
            errors.push(ValidationError::DuplicateSlug {
                kind,
                slug,
                first: (*first).to_string(),
                shadowed: name.to_string(),
                context: context.to_string(),
            });
        } else {
            seen.insert(slug, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(title: &str) -> Career {
        Career {
            title: title.to_string(),
            ..Career::default()
        }
    }

    fn tree_with(campus: &str, record: CampusRecord) -> ContentTree {
        let mut tree = ContentTree::default();
        tree.campuses.insert(campus.to_string(), record);
        tree
    }

    #[test]
    fn clean_tree_has_no_errors() {
        let record = CampusRecord {
            careers: vec![career("Ingeniería de Sistemas"), career("Derecho")],
            offer: vec![OfferCard {
                title: "Ingenieria de Sistemas".into(),
                imagen: None,
            }],
            ..CampusRecord::default()
        };
        assert!(validate_tree(&tree_with("Santa Cruz", record)).is_empty());
    }

    #[test]
    fn duplicate_campus_slugs_are_reported_with_the_winner() {
        let mut tree = tree_with("Santa Cruz", CampusRecord::default());
        tree.campuses.insert("santa-cruz".into(), CampusRecord::default());

        let errors = validate_tree(&tree);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateSlug {
                kind: "campus",
                slug: "santacruz".into(),
                first: "Santa Cruz".into(),
                shadowed: "santa-cruz".into(),
                context: "content tree".into(),
            }]
        );
    }

    #[test]
    fn duplicate_career_titles_differing_only_in_accents_are_reported() {
        let record = CampusRecord {
            careers: vec![career("Odontología"), career("ODONTOLOGIA")],
            ..CampusRecord::default()
        };
        let errors = validate_tree(&tree_with("Cobija", record));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("duplicate career slug 'odontologia'"));
    }

    #[test]
    fn blank_program_titles_are_reported() {
        let record = CampusRecord {
            interaction: vec![InteractionProgram {
                titulo: "  ".into(),
                ..InteractionProgram::default()
            }],
            ..CampusRecord::default()
        };
        let errors = validate_tree(&tree_with("Cobija", record));
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::BlankName {
                kind: "interaction program",
                ..
            }]
        ));
    }

    #[test]
    fn offer_cards_match_careers_by_slug() {
        let record = CampusRecord {
            careers: vec![career("Enfermería")],
            offer: ["ENFERMERIA", "enfermeria", "Enfer-mería"]
                .into_iter()
                .map(|title| OfferCard {
                    title: title.into(),
                    imagen: None,
                })
                .collect(),
            ..CampusRecord::default()
        };
        assert!(validate_tree(&tree_with("Trinidad", record)).is_empty());
    }

    #[test]
    fn offer_cards_without_career_page_are_missing_references() {
        let record = CampusRecord {
            offer: vec![OfferCard {
                title: "Medicina".into(),
                imagen: None,
            }],
            ..CampusRecord::default()
        };
        let errors = validate_tree(&tree_with("Cobija", record));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "missing career 'Medicina' (offer card in campus 'Cobija')"
        );
    }
}
