//! Input discovery: expands configured inputs into the ordered file list the
//! compiler consumes.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CompileError, Result};

/// Include/ignore filters applied to every discovered path
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    ignore: Vec<Regex>,
    include: Vec<Regex>,
}

impl PathFilter {
    pub fn new(ignore: Vec<Regex>, include: Vec<Regex>) -> Self {
        Self { ignore, include }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.ignore_regexes()?, config.include_regexes()?))
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        if self.ignore.iter().any(|re| re.is_match(&text)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|re| re.is_match(&text))
    }
}

/// Collect the files of every configured input, in configuration order and
/// file-name order within each directory.
pub fn find_files(config: &Config) -> Result<Vec<PathBuf>> {
    let filter = PathFilter::from_config(config)?;
    let mut files = Vec::new();

    for input in &config.input {
        let meta = std::fs::metadata(&input.path)
            .map_err(|e| CompileError::unavailable(&input.path, e.to_string()))?;

        if meta.is_file() {
            if filter.accepts(&input.path) {
                files.push(input.path.clone());
            }
            continue;
        }

        let before = files.len();
        let walker = WalkDir::new(&input.path)
            .follow_links(true)
            .sort_by_file_name()
            .max_depth(if input.recursive { usize::MAX } else { 1 });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if !filter.accepts(entry.path()) {
                tracing::debug!("Ignoring {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }

        tracing::debug!(
            "Found {} files under {}",
            files.len() - before,
            input.path.display()
        );
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("img")).unwrap();
        fs::write(base.join("index.html"), "<html>").unwrap();
        fs::write(base.join("app.js"), "run()").unwrap();
        fs::write(base.join(".gitignore"), "target").unwrap();
        fs::write(base.join("img/a.png"), [0x89, b'P', b'N', b'G']).unwrap();
        dir
    }

    fn names(files: &[PathBuf], base: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let dir = tree();
        let config = Config::new("web").input(dir.path(), false);
        let files = find_files(&config).unwrap();
        assert_eq!(names(&files, dir.path()), vec![".gitignore", "app.js", "index.html"]);
    }

    #[test]
    fn test_recursive_sorted() {
        let dir = tree();
        let config = Config::new("web").input(dir.path(), true);
        let files = find_files(&config).unwrap();
        assert_eq!(
            names(&files, dir.path()),
            vec![".gitignore", "app.js", "img/a.png", "index.html"]
        );
    }

    #[test]
    fn test_ignore_and_include() {
        let dir = tree();
        let config = Config::new("web")
            .input(dir.path(), true)
            .ignore("\\.gitignore$")
            .include("\\.(html|png)$");
        let files = find_files(&config).unwrap();
        assert_eq!(names(&files, dir.path()), vec!["img/a.png", "index.html"]);
    }

    #[test]
    fn test_single_file_input() {
        let dir = tree();
        let file = dir.path().join("app.js");
        let config = Config::new("web").input(&file, false);
        assert_eq!(find_files(&config).unwrap(), vec![file]);
    }

    #[test]
    fn test_missing_input() {
        let config = Config::new("web").input("/no/such/dir", true);
        let err = find_files(&config).unwrap_err();
        assert!(matches!(err, CompileError::InputUnavailable { .. }));
    }
}
