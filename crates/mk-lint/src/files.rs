use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::LintError;

/// Every `.lua` file below `folder`, in file-name order. Symlinks are not followed.
pub fn collect_lua_files(folder: &Path) -> Result<Vec<PathBuf>, LintError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| LintError::Walk {
            path: folder.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "lua") {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn is_excluded(path: &Path, patterns: &[String]) -> bool {
    let path = path.to_string_lossy();
    patterns
        .iter()
        .any(|pattern| path.contains(pattern.as_str()))
}
