use campus_data::slug::normalize;
use campus_site as cs;
use cs::loader::SitePaths;
use cs::resolver::{AlumniSection, MoreSection};
use cs::*;
use std::path::PathBuf;

fn fixture_paths() -> SitePaths {
    SitePaths {
        content: PathBuf::from("data/content.json"),
        config: PathBuf::from("data/site.toml"),
        assets: PathBuf::from("data/assets"),
    }
}

fn fixture_site() -> Site {
    load_site(&fixture_paths()).expect("fixture site should load")
}

#[test]
fn test_fixture_loads_in_file_order() {
    let site = fixture_site();
    let names: Vec<&str> = site.tree.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Santa Cruz", "Cobija", "Trinidad"]);
    assert!(campus_data::validate_tree(&site.tree).is_empty());
    assert_eq!(site.config.title, "Universidad Nacional del Oriente");
}

#[test]
fn test_normalize_is_idempotent_over_fixture_names() {
    let site = fixture_site();
    for (name, record) in site.tree.iter() {
        let titles = record.careers.iter().map(|c| c.title.as_str());
        let programs = record.interaction.iter().map(|p| p.titulo.as_str());
        for text in std::iter::once(name).chain(titles).chain(programs) {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {text}");
        }
    }
}

#[test]
fn test_campus_variants_resolve_to_the_same_record() {
    let site = fixture_site();
    let expected = resolve_campus(&site.tree, "santacruz").unwrap();
    for variant in ["Santa Cruz", "SANTA CRUZ", "santa-cruz", "SantaCruz", "  santa cruz "] {
        let found = resolve_campus(&site.tree, variant).unwrap();
        assert_eq!(found.name, "Santa Cruz");
        assert!(std::ptr::eq(found.record, expected.record), "variant {variant}");
    }
}

#[test]
fn test_unknown_campus_is_not_found() {
    let site = fixture_site();
    let miss = resolve_campus(&site.tree, "doesnotexist").unwrap_err();
    assert_eq!(miss.requested(), "doesnotexist");
    assert_eq!(miss.campus(), None);
    assert!(site.page("/doesnotexist").is_not_found());
}

#[test]
fn test_section_variants_are_stable() {
    let site = fixture_site();
    let campus = resolve_campus(&site.tree, "santacruz").unwrap();
    let expected = resolve_section(&campus, "ingenieriadesistemas", SectionKind::Career).unwrap();
    for variant in ["Ingeniería de Sistemas", "INGENIERIA DE SISTEMAS", "ingenieria-de-sistemas"] {
        assert_eq!(resolve_section(&campus, variant, SectionKind::Career).unwrap(), expected);
    }
}

#[test]
fn test_every_career_round_trips_through_its_slug() {
    let site = fixture_site();
    for (name, record) in site.tree.iter() {
        let campus = resolve_campus(&site.tree, &normalize(name)).unwrap();
        for career in &record.careers {
            match resolve_section(&campus, &normalize(&career.title), SectionKind::Career) {
                Ok(SectionContent::Career(found)) => assert!(std::ptr::eq(found, career)),
                other => panic!("{} in {name} did not round trip: {other:?}", career.title),
            }
        }
    }
}

#[test]
fn test_missing_career_names_campus_and_request() {
    let site = fixture_site();
    let miss = resolve(&site.tree, "santacruz", "leyderecho", SectionKind::Career).unwrap_err();
    assert_eq!(miss.campus(), Some("Santa Cruz"));
    assert_eq!(miss.requested(), "leyderecho");
    assert_eq!(miss.to_string(), "career 'leyderecho' not found in campus 'Santa Cruz'");
}

#[test]
fn test_mission_and_philosophy_share_one_view() {
    let site = fixture_site();
    let (_, section) = resolve(&site.tree, "santacruz", "filosofia", SectionKind::More).unwrap();
    let SectionContent::More(MoreSection::MissionVision {
        mission,
        vision,
        philosophy,
    }) = section
    else {
        panic!("expected combined mission view, got {section:?}");
    };
    assert!(mission.starts_with("Formar profesionales"));
    assert!(vision.contains("oriente boliviano"));
    assert!(philosophy.starts_with("Educación con valores"));

    let (_, again) = resolve(&site.tree, "Santa Cruz", "misionvision", SectionKind::More).unwrap();
    assert_eq!(again, section);
}

#[test]
fn test_alumni_general_and_career_pages() {
    let site = fixture_site();
    let (_, general) = resolve(&site.tree, "cobija", "general", SectionKind::AlumniNetwork).unwrap();
    assert!(matches!(
        general,
        SectionContent::AlumniNetwork(AlumniSection::General { description }) if description.contains("Cobija")
    ));

    let (_, career) = resolve(&site.tree, "santacruz", "Derecho", SectionKind::AlumniNetwork).unwrap();
    assert!(matches!(
        career,
        SectionContent::AlumniNetwork(AlumniSection::Career(c)) if c.graduados == Some(380)
    ));

    let miss = resolve(&site.tree, "trinidad", "general", SectionKind::AlumniNetwork).unwrap_err();
    assert!(matches!(miss, NotFound::NoContent { .. }));
}

#[test]
fn test_research_topics_resolve_case_insensitively() {
    let site = fixture_site();
    for slug in ["revistasalud", "RevistaSalud", "docentesinvestigadores"] {
        let (_, content) = resolve(&site.tree, "santacruz", slug, SectionKind::Research).unwrap();
        assert!(matches!(content, SectionContent::Research { .. }), "{slug}");
    }
    assert!(resolve(&site.tree, "santacruz", "investigaciones", SectionKind::Research).is_err());
    assert!(resolve(&site.tree, "cobija", "boletines", SectionKind::Research).is_err());
}

#[test]
fn test_missing_content_file_is_an_error() {
    let paths = SitePaths {
        content: PathBuf::from("data/no_such_content.json"),
        ..fixture_paths()
    };
    let err = load_site(&paths).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_content.json"));
}
