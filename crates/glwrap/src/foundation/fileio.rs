//! File and path helpers
//!
//! Paths are written as templates using `|` in place of a directory
//! separator, e.g. `"resources|shaders|shader1"`, and resolved for the
//! platform the crate was built for.

use std::path::Path;
use thiserror::Error;

use super::platform::{Platform, PLATFORM};

/// Placeholder character replaced by the platform separator
pub const PATH_PLACEHOLDER: char = '|';

/// File reading errors
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened or read
    #[error("could not read file '{path}': {source}")]
    Io {
        /// Path that was requested
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Returns the text after the last `.`, or the whole input if there is none
pub fn extension_of(path: &str) -> &str {
    path.rfind('.').map_or(path, |idx| &path[idx + 1..])
}

/// Read a text file into memory
pub fn try_read_text_file<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read a text file, logging and returning an empty string on failure
pub fn read_text_file<P: AsRef<Path>>(path: P) -> String {
    match try_read_text_file(path) {
        Ok(contents) => {
            log::trace!("[FILEIO] Read {} bytes", contents.len());
            contents
        }
        Err(e) => {
            log::error!("[FILEIO] {}", e);
            String::new()
        }
    }
}

/// Directory separator for the given platform
pub const fn separator_for(platform: Platform) -> char {
    if platform.is_windows() {
        '\\'
    } else {
        '/'
    }
}

/// Directory separator for the build platform
pub const fn platform_separator() -> char {
    separator_for(PLATFORM)
}

/// Replace every placeholder in `template` with the separator of `platform`
pub fn to_path_for(template: &str, platform: Platform) -> String {
    let sep = separator_for(platform);
    template
        .chars()
        .map(|c| if c == PATH_PLACEHOLDER { sep } else { c })
        .collect()
}

/// Same as [`to_path_for`] with one trailing separator appended
pub fn to_dir_for(template: &str, platform: Platform) -> String {
    let mut dir = to_path_for(template, platform);
    dir.push(separator_for(platform));
    dir
}

/// Resolve a `|`-delimited file path for the build platform
pub fn to_platform_path(template: &str) -> String {
    to_path_for(template, PLATFORM)
}

/// Resolve a `|`-delimited directory for the build platform, with a trailing separator
///
/// `to_platform_dir("path1|path2|path3")` gives `"path1/path2/path3/"` on Unix.
pub fn to_platform_dir(template: &str) -> String {
    to_dir_for(template, PLATFORM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.b.shd"), "shd");
        assert_eq!(extension_of("vertex.shd"), "shd");
        assert_eq!(extension_of("noext"), "noext");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn test_unix_paths() {
        assert_eq!(to_path_for("a|b|c.shd", Platform::Linux), "a/b/c.shd");
        assert_eq!(to_dir_for("a|b|c", Platform::MacOs), "a/b/c/");
    }

    #[test]
    fn test_windows_paths() {
        assert_eq!(to_path_for("a|b|c.shd", Platform::Windows64), "a\\b\\c.shd");
        assert_eq!(to_dir_for("shaders|basic", Platform::Windows32), "shaders\\basic\\");
    }

    #[test]
    fn test_every_placeholder_replaced() {
        let template = "||x||y|";
        for platform in [Platform::Linux, Platform::Windows64] {
            let sep = separator_for(platform);
            let path = to_path_for(template, platform);
            assert!(!path.contains(PATH_PLACEHOLDER));
            assert_eq!(path.matches(sep).count(), template.matches(PATH_PLACEHOLDER).count());

            let dir = to_dir_for(template, platform);
            assert_eq!(dir.len(), path.len() + 1);
            assert!(dir.ends_with(sep));
        }
    }

    #[test]
    fn test_template_without_placeholder() {
        assert_eq!(to_platform_path("shader1"), "shader1");
        assert_eq!(to_platform_dir("shader1"), format!("shader1{}", platform_separator()));
    }

    #[test]
    fn test_read_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.shd");
        assert_eq!(read_text_file(&missing), "");
        assert!(try_read_text_file(&missing).is_err());
    }

    #[test]
    fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#version 330 core\nvoid main() {{}}\n").unwrap();
        let contents = read_text_file(file.path());
        assert!(contents.starts_with("#version 330 core"));
        assert_eq!(contents.lines().count(), 2);
    }
}
