use crate::error::{KochbuchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered recipe source file.
#[derive(Debug, Clone)]
pub struct RecipeSource {
    pub path: PathBuf,
    pub file_name: String,
}

const RECIPE_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Collects the recipe sources of a folder, sorted by file name so the
/// discovery order (and with it the artifact) is reproducible.
pub fn scan_folder(folder: &Path) -> Result<Vec<RecipeSource>> {
    if !folder.exists() {
        return Err(KochbuchError::FolderNotFound(folder.display().to_string()));
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // nur direkt im Ordner, keine Rekursion
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if RECIPE_EXTENSIONS.iter().any(|&e| ext_str.eq_ignore_ascii_case(e)) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                sources.push(RecipeSource {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        let result = scan_folder(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_folder_filters_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("eintopf.md")).unwrap();
        File::create(dir.path().join("salat.MD")).unwrap();
        File::create(dir.path().join("kuchen.markdown")).unwrap();
        File::create(dir.path().join("notizen.txt")).unwrap();
        File::create(dir.path().join("data.json")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_scan_folder_sorted_by_file_name() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("c.md")).unwrap();
        File::create(dir.path().join("a.md")).unwrap();
        File::create(dir.path().join("b.md")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = result.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_scan_folder_ignores_subfolders() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("unterordner")).unwrap();
        File::create(dir.path().join("unterordner").join("tief.md")).unwrap();
        File::create(dir.path().join("oben.md")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "oben.md");
    }
}
