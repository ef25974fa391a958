//! Static asset map.
//!
//! Image references in the content file are plain file names. They are turned
//! into asset paths once, when the site is loaded, and looked up by slug
//! afterwards; page code never assembles asset paths itself.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use campus_data::ContentTree;
use campus_data::slug::normalize;

/// Built-in fallbacks for campus image slots: (slot, file under the asset root).
const DEFAULT_SLOTS: &[(&str, &str)] = &[
    ("fondoprincipal", "fondoPrincipal.png"),
    ("fondooferta", "fondoOferta.png"),
    ("fondoalumni", "fondoAlumni.png"),
    ("fondoincripcion", "fondoInscripcion.png"),
];

const CAREER_CARD_DIR: &str = "carreras";
const CURRICULUM_DIR: &str = "mallas";

/// What an asset is for, within one campus. Names are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// Campus image slot (`fondoPrincipal`, `graduados`, ...).
    Campus(String),
    /// Offer grid card for a career.
    CareerCard(String),
    /// Curriculum image for a career.
    Curriculum(String),
}

impl AssetSlot {
    pub fn campus(slot: &str) -> Self {
        AssetSlot::Campus(normalize(slot))
    }

    pub fn career_card(title: &str) -> Self {
        AssetSlot::CareerCard(normalize(title))
    }

    pub fn curriculum(title: &str) -> Self {
        AssetSlot::Curriculum(normalize(title))
    }
}

/// Asset paths keyed by (campus slug, slot).
#[derive(Debug, Clone, Default)]
pub struct AssetMap {
    root: PathBuf,
    entries: HashMap<(String, AssetSlot), PathBuf>,
    defaults: HashMap<String, PathBuf>,
}

impl AssetMap {
    /// Index every image reference in `tree` under `root`.
    ///
    /// When two records collide on a slug the first one wins, matching resolver order.
    pub fn build(tree: &ContentTree, root: &Path) -> Self {
        let mut entries = HashMap::new();
        for (campus, record) in tree.iter() {
            let campus = normalize(campus);
            for (slot, file) in &record.images {
                entries
                    .entry((campus.clone(), AssetSlot::campus(slot)))
                    .or_insert_with(|| root.join(file));
            }
            for card in &record.offer {
                if let Some(file) = &card.imagen {
                    entries
                        .entry((campus.clone(), AssetSlot::career_card(&card.title)))
                        .or_insert_with(|| root.join(CAREER_CARD_DIR).join(file));
                }
            }
            for career in &record.careers {
                if let Some(file) = &career.malla {
                    entries
                        .entry((campus.clone(), AssetSlot::curriculum(&career.title)))
                        .or_insert_with(|| root.join(CURRICULUM_DIR).join(file));
                }
            }
        }

        let defaults = DEFAULT_SLOTS
            .iter()
            .map(|(slot, file)| ((*slot).to_string(), root.join(file)))
            .collect();

        Self {
            root: root.to_path_buf(),
            entries,
            defaults,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset for `slot` at the campus with lookup key `campus_slug`.
    ///
    /// Campus slots without an override fall back to the site-wide default.
    pub fn get(&self, campus_slug: &str, slot: &AssetSlot) -> Option<&Path> {
        let key = (normalize(campus_slug), slot.clone());
        self.entries
            .get(&key)
            .or_else(|| match slot {
                AssetSlot::Campus(name) => self.defaults.get(name),
                AssetSlot::CareerCard(_) | AssetSlot::Curriculum(_) => None,
            })
            .map(PathBuf::as_path)
    }

    /// Indexed assets whose files are absent on disk, sorted for stable reporting.
    pub fn missing_files(&self) -> Vec<&Path> {
        let mut missing: Vec<&Path> = self
            .entries
            .values()
            .filter(|path| !path.is_file())
            .map(PathBuf::as_path)
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}
