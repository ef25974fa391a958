//! View module.
//! Page builders never print. A page is turned into a list of [`ViewItem`]s, which the
//! [`View`] lays out and writes to the terminal in one pass.
use std::fmt::Write;
use std::path::Path;

use campus_data::{ResearchContent, ResearchEntry};
use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::loader::site_config::SiteConfig;
use crate::page::{CampusHome, CareerPage, NotFoundPage, Page};
use crate::resolver::{AlumniSection, MoreSection};
use crate::style::{SiteStyle, indented_block, normal_block};

const ICON_LINK: &str = "→";
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_VIDEO: &str = "▶";

/// Path prefix for regulation documents.
pub const REGULATION_PDF_DIR: &str = "/assets/pdf";

/// Collects the items of one screen and writes them out together.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// Fixed width; the terminal width is read at flush time when unset.
    pub wrap_width: Option<usize>,
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new(wrap_width: Option<usize>) -> Self {
        Self {
            wrap_width,
            items: Vec::new(),
        }
    }

    pub fn for_config(config: &SiteConfig) -> Self {
        Self::new(config.wrap_width)
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn width(&self) -> usize {
        self.wrap_width.unwrap_or_else(termwidth)
    }

    /// Lay out all pending items as one block of text.
    pub fn render(&self) -> String {
        let width = self.width();
        let mut out = String::new();
        for item in &self.items {
            render_item(&mut out, item, width);
        }
        out
    }

    /// Print and clear all pending items.
    pub fn flush(&mut self) {
        print!("{}", self.render());
        self.items.clear();
    }
}

/// One unit of screen output.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Full-width banner at the top of a page.
    Banner(String),
    Title(String),
    Heading(String),
    Paragraph(String),
    Bullet(String),
    Field {
        label: String,
        value: String,
    },
    /// Numbered navigation link; the number is what the browser accepts.
    Link {
        index: usize,
        label: String,
        path: String,
    },
    /// Divider naming the block that follows.
    Section(String),
    Notice(String),
    NotFound {
        message: String,
        reason: String,
    },
    Error(String),
    Footer(Vec<String>),
}

fn render_item(out: &mut String, item: &ViewItem, width: usize) {
    let _ = match item {
        ViewItem::Banner(text) => writeln!(out, "\n{:^width$}\n", text.banner_style()),
        ViewItem::Title(text) => writeln!(out, "{}\n", text.title_style()),
        ViewItem::Heading(text) => writeln!(out, "{}", text.heading_style()),
        ViewItem::Paragraph(text) => writeln!(out, "{}\n", fill(text, normal_block(width)).body_style()),
        ViewItem::Bullet(text) => writeln!(out, "{}", fill(text, indented_block(width))),
        ViewItem::Field { label, value } => writeln!(out, "{} {}", format!("{label}:").label_style(), value),
        ViewItem::Link { index, label, path } => writeln!(
            out,
            "  {:>2}. {} {} {}",
            index,
            label.link_style(),
            ICON_LINK.dimmed(),
            path.path_style()
        ),
        ViewItem::Section(name) => writeln!(out, "\n{:.>width$}", name.section_style()),
        ViewItem::Notice(text) => writeln!(out, "{}", fill(text, normal_block(width)).notice_style()),
        ViewItem::NotFound { message, reason } => {
            writeln!(out, "{}\n{}\n", message.not_found_style(), fill(reason, normal_block(width)))
        },
        ViewItem::Error(text) => writeln!(out, "{} {}", ICON_ERROR.bright_red(), text.not_found_style()),
        ViewItem::Footer(lines) => {
            let _ = writeln!(out);
            lines.iter().try_for_each(|line| writeln!(out, "{}", line.path_style()))
        },
    };
}

/// Queue everything needed to show `page`, including its footer.
pub fn show_page(view: &mut View, page: &Page<'_>, config: &SiteConfig) {
    match page {
        Page::CampusIndex { .. } => {
            view.push(ViewItem::Banner(config.title.clone()));
            view.push(ViewItem::Title(config.tagline.clone()));
        },
        Page::CampusHome(home) => campus_home(view, home),
        Page::Career(career) => career_page(view, career),
        Page::More { campus, section } => {
            view.push(ViewItem::Banner(campus.name.to_string()));
            more_section(view, section);
        },
        Page::AlumniNetwork {
            campus,
            section,
            totals,
        } => {
            view.push(ViewItem::Banner(campus.name.to_string()));
            view.push(ViewItem::Title("Red Alumni".to_string()));
            if let Some(totals) = totals {
                view.push(ViewItem::Field {
                    label: "Graduados".into(),
                    value: totals.graduates.to_string(),
                });
                view.push(ViewItem::Field {
                    label: "Carreras".into(),
                    value: totals.careers.to_string(),
                });
            }
            alumni_section(view, section);
        },
        Page::Research { campus, title, content } => {
            view.push(ViewItem::Banner(campus.name.to_string()));
            view.push(ViewItem::Title(title.clone()));
            research_content(view, content);
        },
        Page::Interaction { campus, program } => {
            view.push(ViewItem::Banner(campus.name.to_string()));
            view.push(ViewItem::Title(program.titulo.clone()));
            push_paragraph(view, &program.descripcion);
            if !program.objetivo.trim().is_empty() {
                view.push(ViewItem::Heading("Objetivo".into()));
                push_paragraph(view, &program.objetivo);
            }
            if !program.projects.is_empty() {
                view.push(ViewItem::Heading("Proyectos".into()));
                view.items.extend(program.projects.iter().cloned().map(ViewItem::Bullet));
            }
        },
        Page::NotFound(missing) => not_found(view, missing, config),
    }

    show_links(view, page);
    view.push(ViewItem::Footer(config.footer.clone()));
}

/// Queue the numbered links of `page`, grouped by menu.
pub fn show_links(view: &mut View, page: &Page<'_>) {
    let mut index = 0;
    for menu in page.menus() {
        view.push(ViewItem::Section(menu.title.to_string()));
        for entry in menu.entries {
            index += 1;
            view.push(ViewItem::Link {
                index,
                label: entry.label,
                path: entry.path,
            });
        }
    }
}

fn push_paragraph(view: &mut View, text: &str) {
    if !text.trim().is_empty() {
        view.push(ViewItem::Paragraph(text.trim().to_string()));
    }
}

fn push_background(view: &mut View, background: Option<&Path>) {
    if let Some(background) = background {
        view.push(ViewItem::Field {
            label: "Fondo".into(),
            value: background.display().to_string(),
        });
    }
}

fn campus_home(view: &mut View, home: &CampusHome<'_>) {
    let record = home.campus.record;
    view.push(ViewItem::Banner(home.campus.name.to_string()));
    push_background(view, home.backgrounds.main);

    if !record.offer.is_empty() {
        view.push(ViewItem::Heading("Oferta Académica".into()));
        push_background(view, home.backgrounds.offer);
        for row in &home.offer_rows {
            let tiles: Vec<String> = row
                .iter()
                .map(|tile| match tile.image {
                    Some(image) => format!("{} [{}]", tile.card.title, image.display()),
                    None => tile.card.title.clone(),
                })
                .collect();
            view.push(ViewItem::Bullet(tiles.join("  |  ")));
        }
    }

    view.push(ViewItem::Heading("Alumni".into()));
    push_background(view, home.backgrounds.alumni);
    view.push(ViewItem::Field {
        label: "Graduados".into(),
        value: home.totals.graduates.to_string(),
    });
    view.push(ViewItem::Field {
        label: "Carreras".into(),
        value: home.totals.careers.to_string(),
    });
    if let Some(alumni) = &record.alumni {
        push_paragraph(view, &alumni.descripcion);
    }

    if !record.requirements.is_empty() {
        view.push(ViewItem::Heading("Requisitos".into()));
        view.items
            .extend(record.requirements.iter().map(|req| ViewItem::Bullet(req.texto.clone())));
    }
    if let Some(enrollment) = &record.enrollment {
        view.push(ViewItem::Heading(enrollment.titulo.clone()));
        push_background(view, home.backgrounds.enrollment);
        for button in &enrollment.botones {
            view.push(ViewItem::Field {
                label: button.text.clone(),
                value: button.link.clone().unwrap_or_default(),
            });
        }
    }
    if !record.virtual_services.is_empty() {
        view.push(ViewItem::Heading("Servicios Virtuales".into()));
        for service in &record.virtual_services {
            view.push(ViewItem::Field {
                label: service.titulo.clone(),
                value: service.link.clone().unwrap_or_default(),
            });
        }
    }
}

fn career_page(view: &mut View, page: &CareerPage<'_>) {
    let career = page.career;
    view.push(ViewItem::Banner(page.campus.name.to_string()));
    view.push(ViewItem::Title(career.title.clone()));
    push_paragraph(view, &career.description);

    for (heading, text) in [("Misión", &career.mission), ("Visión", &career.vision)] {
        if !text.trim().is_empty() {
            view.push(ViewItem::Heading(heading.into()));
            push_paragraph(view, text);
        }
    }
    for (heading, list) in [("Perfil Profesional", &career.roles), ("Valores", &career.values)] {
        if !list.is_empty() {
            view.push(ViewItem::Heading(heading.into()));
            view.items.extend(list.iter().cloned().map(ViewItem::Bullet));
        }
    }

    if let Some(curriculum) = page.curriculum {
        view.push(ViewItem::Field {
            label: "Malla curricular".into(),
            value: curriculum.display().to_string(),
        });
    }
    if let Some(resolution) = &career.rm {
        view.push(ViewItem::Field {
            label: "Resolución ministerial".into(),
            value: resolution.clone(),
        });
    }
    if let Some(video) = &page.video {
        view.push(ViewItem::Field {
            label: format!("{ICON_VIDEO} Video"),
            value: video.embed.clone(),
        });
        view.push(ViewItem::Field {
            label: "Miniatura".into(),
            value: video.thumbnail.clone(),
        });
    }
    if let Some(inquiry) = &page.inquiry {
        view.push(ViewItem::Field {
            label: "Más información".into(),
            value: inquiry.clone(),
        });
    }
}

fn more_section(view: &mut View, section: &MoreSection<'_>) {
    match section {
        MoreSection::Welcome(text) | MoreSection::History(text) => {
            view.push(ViewItem::Title(text.titulo.clone()));
            push_paragraph(view, &text.contenido);
        },
        MoreSection::MissionVision {
            mission,
            vision,
            philosophy,
        } => {
            for (heading, text) in [("Misión", mission), ("Visión", vision), ("Filosofía", philosophy)] {
                if !text.trim().is_empty() {
                    view.push(ViewItem::Heading(heading.into()));
                    push_paragraph(view, text);
                }
            }
        },
        MoreSection::Regulations(docs) => {
            view.push(ViewItem::Title("Reglamento".into()));
            for doc in *docs {
                view.push(ViewItem::Field {
                    label: doc.titulo.clone(),
                    value: regulation_link(&doc.archivo),
                });
            }
        },
        MoreSection::Authorities(people) => {
            view.push(ViewItem::Title("Autoridades".into()));
            for person in *people {
                view.push(ViewItem::Heading(person.nombre.clone()));
                if !person.cargo.is_empty() {
                    view.push(ViewItem::Bullet(person.cargo.clone()));
                }
                if !person.correo.is_empty() {
                    view.push(ViewItem::Bullet(person.correo.clone()));
                }
            }
        },
    }
}

/// Public link to a regulation document.
pub fn regulation_link(file: &str) -> String {
    format!("{REGULATION_PDF_DIR}/{}", urlencoding::encode(file))
}

fn alumni_section(view: &mut View, section: &AlumniSection<'_>) {
    match section {
        AlumniSection::General { description } => push_paragraph(view, description),
        AlumniSection::Career(career) => {
            view.push(ViewItem::Heading(career.nombre.clone()));
            if let Some(graduates) = career.graduados {
                view.push(ViewItem::Field {
                    label: "Graduados".into(),
                    value: graduates.to_string(),
                });
            }
            if !career.workplaces.is_empty() {
                view.push(ViewItem::Heading("Lugares de trabajo".into()));
                view.items.extend(career.workplaces.iter().cloned().map(ViewItem::Bullet));
            }
            if !career.convenios.is_empty() {
                view.push(ViewItem::Heading("Convenios".into()));
                view.items.extend(career.convenios.iter().cloned().map(ViewItem::Bullet));
            }
            if let Some(number) = &career.whatsapp {
                view.push(ViewItem::Field {
                    label: "WhatsApp".into(),
                    value: number.clone(),
                });
            }
        },
    }
}

fn research_content(view: &mut View, content: &ResearchContent) {
    match content {
        ResearchContent::Text(text) if text.starts_with("http") => view.push(ViewItem::Field {
            label: "Enlace".into(),
            value: text.clone(),
        }),
        ResearchContent::Text(text) => push_paragraph(view, text),
        ResearchContent::Entries(entries) => entries.iter().for_each(|entry| research_entry(view, entry)),
    }
}

fn research_entry(view: &mut View, entry: &ResearchEntry) {
    if let Some(title) = entry.titulo.as_deref().or(entry.docente.as_deref()) {
        view.push(ViewItem::Heading(title.to_string()));
    }
    for text in [&entry.descripcion, &entry.contenido].into_iter().flatten() {
        push_paragraph(view, text);
    }
    if let Some(url) = &entry.url {
        view.push(ViewItem::Field {
            label: "Enlace".into(),
            value: url.clone(),
        });
    }
}

fn not_found(view: &mut View, missing: &NotFoundPage, config: &SiteConfig) {
    view.push(ViewItem::Banner(config.title.clone()));
    view.push(ViewItem::NotFound {
        message: config.not_found_message.clone(),
        reason: missing.reason.clone(),
    });
    view.push(ViewItem::Field {
        label: "Ruta".into(),
        value: missing.path.clone(),
    });
    if let Some(campus) = &missing.campus {
        view.push(ViewItem::Field {
            label: "Sede".into(),
            value: campus.clone(),
        });
    }
    view.push(ViewItem::Notice(config.home_label.clone()));
}
