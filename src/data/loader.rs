use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::QuizError;
use crate::models::Document;
use crate::parser::Parser;

pub const DEFAULT_INPUT_PATH: &str = "README.md";

pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, QuizError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| QuizError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read source document");
    Ok(text)
}

/// Reads and parses a markdown file. An empty result is logged, not rejected.
pub fn load_document<P: AsRef<Path>>(path: P, parser: &Parser) -> Result<Document, QuizError> {
    let path = path.as_ref();
    let document = parser.parse(&read_source(path)?);

    if document.is_empty() {
        warn!(path = %path.display(), "no questions found");
    }

    Ok(document)
}

/// Writes `contents` to `path`, creating missing parent directories.
pub fn write_artifact<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), QuizError> {
    let path = path.as_ref();
    let write_error = |source| QuizError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, contents).map_err(write_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = read_source(dir.path().join("absent.md")).unwrap_err();

        assert!(matches!(err, QuizError::Read { .. }));
        assert!(err.to_string().contains("absent.md"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("docs").join("quiz.json");

        write_artifact(&target, "[]").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "[]");
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("README.md");
        fs::write(&source, "# Quiz\n### Q\n- [x] a\n").unwrap();

        let document = load_document(&source, &Parser::default()).unwrap();
        assert_eq!(document.len(), 1);
    }
}
