//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Marker for reading standard input
pub const STDIN_MARKER: &str = "-";

/// One place to read text from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve `-i` arguments: either a lone `-` or file patterns
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.iter().any(|pattern| pattern == STDIN_MARKER) {
        if patterns.len() > 1 {
            return Err(CliError::InvalidInput(
                "'-' (stdin) cannot be combined with other inputs".to_string(),
            )
            .into());
        }
        return Ok(vec![InputSource::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_marker() {
        let inputs = resolve_inputs(&["-".to_string()]).unwrap();
        assert_eq!(inputs, vec![InputSource::Stdin]);
        assert_eq!(inputs[0].display_name(), "<stdin>");
    }

    #[test]
    fn test_stdin_mixed_with_files() {
        let error = resolve_inputs(&["-".to_string(), "a.txt".to_string()]).unwrap_err();
        assert!(error.to_string().contains("stdin"));
    }

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "б").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "а").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_matches() {
        let error = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(error.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(error.to_string().contains("Invalid file pattern"));
    }
}
