//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path = path_result.map_err(|e| CliError::FileNotFound(e.to_string()))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
