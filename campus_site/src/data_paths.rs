//! Locating the site's data directory.
//!
//! The directory holds `content.json`, `site.toml` and `assets/`. It is taken
//! from `CAMPUS_SITE_DATA` when set, otherwise from the first known location
//! that has a content file.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info};

/// Environment variable naming the data directory explicitly.
pub const DATA_DIR_ENV: &str = "CAMPUS_SITE_DATA";

/// Data directory relative to the workspace root.
const DEFAULT_ROOT: &str = "campus_site/data";

/// File that marks a directory as a data root.
const CONTENT_FILE: &str = "content.json";

/// Executable directory plus this many parents are searched (`target/debug` sits two below the workspace).
const EXE_SEARCH_DEPTH: usize = 3;

static DATA_ROOT: LazyLock<PathBuf> =
    LazyLock::new(|| find_data_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from), env::current_exe().ok()));

/// Path of `relative` inside the data directory.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the data directory: an explicit override, else the first search root with a content file.
pub fn find_data_root(override_dir: Option<PathBuf>, exe: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        info!("data directory from {DATA_DIR_ENV}: '{}'", dir.display());
        return dir;
    }
    let roots = search_roots(exe.as_deref());
    first_with_content(&roots).map_or_else(
        || {
            debug!("no {CONTENT_FILE} found in {} search roots", roots.len());
            PathBuf::from(DEFAULT_ROOT)
        },
        Path::to_path_buf,
    )
}

/// Candidate directories in search order: working directory first, then around the executable.
fn search_roots(exe: Option<&Path>) -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(DEFAULT_ROOT), PathBuf::from("data")];
    if let Some(exe_dir) = exe.and_then(Path::parent) {
        for dir in exe_dir.ancestors().take(EXE_SEARCH_DEPTH) {
            roots.push(dir.join(DEFAULT_ROOT));
            roots.push(dir.join("data"));
        }
    }
    roots
}

fn first_with_content(roots: &[PathBuf]) -> Option<&Path> {
    let found = roots.iter().find(|root| root.join(CONTENT_FILE).is_file())?;
    debug!("data directory found at '{}'", found.display());
    Some(found.as_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn override_wins_even_without_content() {
        let dir = tempfile::tempdir().unwrap();
        let root = find_data_root(Some(dir.path().to_path_buf()), None);
        assert_eq!(root, dir.path());
    }

    #[test]
    fn blank_override_is_ignored() {
        let root = find_data_root(Some(PathBuf::new()), None);
        assert_ne!(root, PathBuf::new());
    }

    #[test]
    fn search_walks_up_from_the_executable() {
        let roots = search_roots(Some(Path::new("/srv/site/target/debug/campus_site")));
        assert_eq!(&roots[..2], [PathBuf::from(DEFAULT_ROOT), PathBuf::from("data")]);
        assert!(roots.contains(&PathBuf::from("/srv/site/target/debug/data")));
        assert!(roots.contains(&PathBuf::from("/srv/site/campus_site/data")));
        assert!(!roots.contains(&PathBuf::from("/srv/data")));
        assert_eq!(search_roots(None).len(), 2);
    }

    #[test]
    fn first_root_with_a_content_file_is_chosen() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        let full = dir.path().join("full");
        let later = dir.path().join("later");
        for root in [&empty, &full, &later] {
            fs::create_dir_all(root).unwrap();
        }
        fs::write(full.join(CONTENT_FILE), "{}").unwrap();
        fs::write(later.join(CONTENT_FILE), "{}").unwrap();

        let roots = vec![empty.clone(), full.clone(), later];
        assert_eq!(first_with_content(&roots), Some(full.as_path()));
        assert_eq!(first_with_content(&[empty]), None);
    }
}
