use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The complete static dataset: campus display name -> campus record.
///
/// Iteration order is the order of the source file and is the tie-break order
/// for lookups whose slugs collide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTree {
    pub campuses: IndexMap<String, CampusRecord>,
}

impl ContentTree {
    /// Iterate `(display name, record)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CampusRecord)> {
        self.campuses.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.campuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campuses.is_empty()
    }
}

/// Everything the site knows about one campus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusRecord {
    /// Contact number used for inquiry links.
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default, rename = "carrera")]
    pub careers: Vec<Career>,
    /// Cards shown in the academic offer grid.
    #[serde(default, rename = "oferta")]
    pub offer: Vec<OfferCard>,
    #[serde(default, rename = "mas")]
    pub more: Option<MoreBlock>,
    #[serde(default)]
    pub alumni: Option<AlumniStats>,
    #[serde(default, rename = "redalumni")]
    pub alumni_network: Option<AlumniNetwork>,
    /// Only the first block is published.
    #[serde(default, rename = "investigacion")]
    pub research: Vec<ResearchBlock>,
    #[serde(default, rename = "interaccion")]
    pub interaction: Vec<InteractionProgram>,
    /// Image overrides keyed by slot name (`fondoPrincipal`, `fondoOferta`, ...).
    #[serde(default, rename = "imagenes")]
    pub images: IndexMap<String, String>,
    #[serde(default, rename = "requisitos")]
    pub requirements: Vec<Requirement>,
    #[serde(default, rename = "inscripcion")]
    pub enrollment: Option<Enrollment>,
    #[serde(default, rename = "servicios")]
    pub virtual_services: Vec<VirtualService>,
}

impl CampusRecord {
    /// The published research block, if any.
    pub fn research_block(&self) -> Option<&ResearchBlock> {
        self.research.first()
    }
}

/// Detail page content for one academic program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub vision: String,
    /// Career field / professional roles.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    /// Curriculum image file name.
    #[serde(default)]
    pub malla: Option<String>,
    /// YouTube URL.
    #[serde(default)]
    pub video: Option<String>,
    /// Ministerial resolution banner.
    #[serde(default)]
    pub rm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferCard {
    pub title: String,
    #[serde(default)]
    pub imagen: Option<String>,
}

/// A titled block of prose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitledText {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub contenido: String,
}

/// Institutional ("more") sections of a campus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoreBlock {
    #[serde(default)]
    pub bienvenida: Option<TitledText>,
    #[serde(default)]
    pub historia: Option<TitledText>,
    #[serde(default)]
    pub misionvision: Vec<TitledText>,
    #[serde(default)]
    pub filosofia: Option<TitledText>,
    #[serde(default)]
    pub reglamento: Vec<RegulationDoc>,
    #[serde(default)]
    pub autoridades: Vec<Authority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulationDoc {
    pub titulo: String,
    /// PDF file name served under `/assets/pdf/`.
    pub archivo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    pub nombre: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub correo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlumniStats {
    #[serde(default)]
    pub graduados: u32,
    #[serde(default)]
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlumniNetwork {
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub carreras: Vec<AlumniCareer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlumniCareer {
    pub nombre: String,
    #[serde(default)]
    pub graduados: Option<u32>,
    #[serde(default, rename = "lugaresTrabajo")]
    pub workplaces: Vec<String>,
    #[serde(default)]
    pub convenios: Vec<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Research topics keyed by the name used in tabs (`bienvenida`, `boletines`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearchBlock {
    pub topics: IndexMap<String, ResearchContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchContent {
    Text(String),
    Entries(Vec<ResearchEntry>),
}

impl ResearchContent {
    pub fn is_empty(&self) -> bool {
        match self {
            ResearchContent::Text(text) => text.trim().is_empty(),
            ResearchContent::Entries(entries) => entries.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchEntry {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub contenido: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub docente: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

/// Community-interaction program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionProgram {
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub objetivo: String,
    #[serde(default, rename = "Proyectos")]
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub texto: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub foto: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub botones: Vec<EnrollmentButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentButton {
    pub text: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualService {
    pub titulo: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub imagen: Option<String>,
}
