//! Locating the XML documentation file that belongs to an assembly.
//!
//! The compiler writes `Acme.Widgets.xml` next to `Acme.Widgets.dll`.
//! Localized builds put it in a culture subdirectory instead:
//!
//! ```text
//! bin/Acme.Widgets.dll
//! bin/Acme.Widgets.xml        <- checked first
//! bin/en-US/Acme.Widgets.xml  <- then each culture in the fallback chain
//! bin/en/Acme.Widgets.xml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocError, DocResult};
use crate::locale::Culture;

/// Longest path the host accepts by default.
#[cfg(windows)]
pub const DEFAULT_MAX_PATH_LENGTH: usize = 260;
#[cfg(not(windows))]
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Characters that can never appear in a path on this host.
pub fn is_invalid_path_char(c: char) -> bool {
    if cfg!(windows) {
        matches!(c, '"' | '<' | '>' | '|') || (c as u32) < 32
    } else {
        c == '\0'
    }
}

/// Find the documentation file for the assembly at `assembly_location`.
///
/// Returns `None` when the location is blank, contains characters the host
/// rejects, produces a candidate longer than `max_path_length`, or when no
/// candidate exists.
pub fn find_documentation_file(
    assembly_location: &str,
    culture: &Culture,
    max_path_length: usize,
) -> Option<PathBuf> {
    match locate(assembly_location, culture, max_path_length) {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!(target: "xmldoc", "skipping documentation lookup: {e}");
            None
        }
    }
}

fn locate(
    assembly_location: &str,
    culture: &Culture,
    max_path_length: usize,
) -> DocResult<Option<PathBuf>> {
    if assembly_location.trim().is_empty() {
        return Ok(None);
    }
    if assembly_location.chars().any(is_invalid_path_char) {
        return Err(DocError::InvalidPath(assembly_location.to_string()));
    }

    let assembly_path = Path::new(assembly_location);
    let Some(file_name) = assembly_path.file_name() else {
        return Ok(None);
    };
    let directory = assembly_path.parent().unwrap_or_else(|| Path::new(""));
    let xml_name = Path::new(file_name).with_extension("xml");

    let sibling = directory.join(&xml_name);
    if is_existing_file(&sibling, max_path_length)? {
        return Ok(Some(sibling));
    }

    for fallback in culture.fallback_chain() {
        let candidate = directory.join(fallback.name()).join(&xml_name);
        if is_existing_file(&candidate, max_path_length)? {
            tracing::debug!(
                target: "xmldoc",
                "using {} documentation at {}",
                fallback,
                candidate.display()
            );
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

// Probe failures other than length count as "not there".
fn is_existing_file(path: &Path, max_path_length: usize) -> DocResult<bool> {
    if path.as_os_str().len() > max_path_length {
        return Err(DocError::PathTooLong {
            path: path.to_path_buf(),
            limit: max_path_length,
        });
    }
    Ok(fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<doc><members/></doc>").unwrap();
    }

    fn assembly_in(dir: &TempDir) -> String {
        dir.path()
            .join("Acme.Widgets.dll")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_sibling_file_preferred() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Acme.Widgets.xml"));
        touch(&dir.path().join("en-US").join("Acme.Widgets.xml"));

        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::new("en-US"),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, Some(dir.path().join("Acme.Widgets.xml")));
    }

    #[test]
    fn test_only_last_extension_replaced() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Acme.Widgets.xml"));
        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::invariant(),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert!(found.is_some());
    }

    #[test]
    fn test_specific_culture_before_parent() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("en").join("Acme.Widgets.xml"));
        touch(&dir.path().join("en-US").join("Acme.Widgets.xml"));

        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::new("en-US"),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, Some(dir.path().join("en-US").join("Acme.Widgets.xml")));
    }

    #[test]
    fn test_parent_culture_used_when_specific_missing() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("en").join("Acme.Widgets.xml"));

        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::new("en-US"),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, Some(dir.path().join("en").join("Acme.Widgets.xml")));
    }

    #[test]
    fn test_directory_named_like_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Acme.Widgets.xml")).unwrap();

        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::invariant(),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_missing_everywhere() {
        let dir = TempDir::new().unwrap();
        let found = find_documentation_file(
            &assembly_in(&dir),
            &Culture::new("fr-FR"),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_invalid_character_yields_none() {
        let found = find_documentation_file(
            "/app/bin/Acme\0Widgets.dll",
            &Culture::invariant(),
            DEFAULT_MAX_PATH_LENGTH,
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_blank_location_yields_none() {
        let found = find_documentation_file("   ", &Culture::invariant(), DEFAULT_MAX_PATH_LENGTH);
        assert_eq!(found, None);
    }

    #[test]
    fn test_overlong_path_yields_none() {
        let long_dir = "d".repeat(DEFAULT_MAX_PATH_LENGTH);
        let location = format!("/{long_dir}/Acme.Widgets.dll");
        let found = find_documentation_file(&location, &Culture::invariant(), DEFAULT_MAX_PATH_LENGTH);
        assert_eq!(found, None);
    }

    #[test]
    fn test_overlong_culture_candidate_aborts() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("en").join("Acme.Widgets.xml"));
        let location = assembly_in(&dir);
        // Sibling fits, the en-US candidate does not.
        let limit = dir.path().join("Acme.Widgets.xml").as_os_str().len() + 1;

        let found = find_documentation_file(&location, &Culture::new("en-US"), limit);
        assert_eq!(found, None);
    }
}
