//! Canonical asset names and generated identifiers
//!
//! A raw path becomes a lookup key by normalizing separators to `/` and
//! stripping the configured prefix pattern when it matches at the start.
//! The identifier is the key with every character outside `[A-Za-z0-9_]`
//! replaced by `_`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::asset::Asset;
use crate::error::{CompileError, Result};

/// Resolves raw file paths into named assets
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    prefix: Option<Regex>,
}

impl NameResolver {
    pub fn new(prefix: Option<Regex>) -> Self {
        Self { prefix }
    }

    /// Canonical lookup key for `path`.
    pub fn canonical_name(&self, path: &Path) -> Result<String> {
        let raw = path.to_str().ok_or_else(|| {
            CompileError::invalid_path(path.to_string_lossy(), "path is not valid UTF-8")
        })?;

        let normalized = normalize_separators(raw);
        let name = match &self.prefix {
            // Only a match anchored at the front is stripped; anything else is left alone
            Some(prefix) => match prefix.find(&normalized) {
                Some(m) if m.start() == 0 => normalized[m.end()..].to_string(),
                _ => normalized,
            },
            None => normalized,
        };

        if name.is_empty() {
            return Err(CompileError::invalid_path(
                raw,
                "name is empty after prefix stripping",
            ));
        }

        Ok(name)
    }

    /// Resolve every path into an asset, rejecting name and identifier collisions.
    ///
    /// The same path listed more than once is kept only at its first position.
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<Asset>> {
        let mut assets: Vec<Asset> = Vec::with_capacity(paths.len());
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_func: HashMap<String, usize> = HashMap::new();

        for path in paths {
            let name = self.canonical_name(path)?;
            let func = safe_function_name(&name);

            if let Some(&idx) = by_name.get(&name) {
                if assets[idx].path == *path {
                    tracing::debug!("Skipping duplicate input {}", path.display());
                    continue;
                }
                return Err(CompileError::NameCollision {
                    first: assets[idx].path.clone(),
                    second: path.clone(),
                    key: name,
                });
            }

            match by_func.entry(func.clone()) {
                Entry::Occupied(slot) => {
                    return Err(CompileError::NameCollision {
                        first: assets[*slot.get()].path.clone(),
                        second: path.clone(),
                        key: func,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(assets.len());
                }
            }

            by_name.insert(name.clone(), assets.len());
            assets.push(Asset {
                path: path.clone(),
                name,
                func,
            });
        }

        Ok(assets)
    }
}

/// Replace `\` and the platform separator with `/`.
pub fn normalize_separators(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    if std::path::MAIN_SEPARATOR == '/' {
        slashed
    } else {
        slashed.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Derive a generated-source identifier from an asset name.
pub fn safe_function_name(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if !ident.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        ident.insert(0, '_');
    }

    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(prefix: &str) -> NameResolver {
        NameResolver::new(Some(Regex::new(prefix).unwrap()))
    }

    #[test]
    fn test_prefix_stripped() {
        let name = resolver("/tmp/")
            .canonical_name(Path::new("/tmp/data/foo.txt"))
            .unwrap();
        assert_eq!(name, "data/foo.txt");
        assert_eq!(safe_function_name(&name), "data_foo_txt");
    }

    #[test]
    fn test_no_prefix_keeps_path() {
        let name = NameResolver::default()
            .canonical_name(Path::new("/tmp/data/foo.txt"))
            .unwrap();
        assert_eq!(name, "/tmp/data/foo.txt");
        assert_eq!(safe_function_name(&name), "_tmp_data_foo_txt");
    }

    #[test]
    fn test_prefix_regex() {
        let name = resolver("/.*/some/")
            .canonical_name(Path::new("/a/path/to/some/templates/foo.html"))
            .unwrap();
        assert_eq!(name, "templates/foo.html");
    }

    #[test]
    fn test_unanchored_prefix_match_is_ignored() {
        let name = resolver("data/")
            .canonical_name(Path::new("/tmp/data/foo.txt"))
            .unwrap();
        assert_eq!(name, "/tmp/data/foo.txt");
    }

    #[test]
    fn test_backslashes_normalized() {
        let name = resolver("^web/")
            .canonical_name(Path::new("web\\css\\site.css"))
            .unwrap();
        assert_eq!(name, "css/site.css");
    }

    #[test]
    fn test_identifier_rules() {
        assert_eq!(safe_function_name("index.html"), "index_html");
        assert_eq!(safe_function_name("1st.txt"), "_1st_txt");
        assert_eq!(safe_function_name("_private"), "_private");
        assert_eq!(safe_function_name("über-file"), "_ber_file");
        assert_eq!(safe_function_name("Upper/Case"), "Upper_Case");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = resolver("^.*$")
            .canonical_name(Path::new("/tmp/foo"))
            .unwrap_err();
        assert!(matches!(err, CompileError::InvalidAssetPath { .. }));
    }

    #[test]
    fn test_name_collision() {
        let paths = vec![
            PathBuf::from("/one/static/app.js"),
            PathBuf::from("/two/static/app.js"),
        ];
        let err = resolver("^/[a-z]+/").resolve(&paths).unwrap_err();
        match err {
            CompileError::NameCollision { key, first, second } => {
                assert_eq!(key, "static/app.js");
                assert_eq!(first, paths[0]);
                assert_eq!(second, paths[1]);
            }
            other => panic!("Expected NameCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_identifier_collision() {
        let paths = vec![PathBuf::from("a-b"), PathBuf::from("a.b")];
        let err = NameResolver::default().resolve(&paths).unwrap_err();
        match err {
            CompileError::NameCollision { key, .. } => assert_eq!(key, "a_b"),
            other => panic!("Expected NameCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_path_kept_once() {
        let paths = vec![
            PathBuf::from("/tmp/a.txt"),
            PathBuf::from("/tmp/b.txt"),
            PathBuf::from("/tmp/a.txt"),
        ];
        let assets = resolver("/tmp/").resolve(&paths).unwrap();
        let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let paths = vec![PathBuf::from("/srv/x/y.css"), PathBuf::from("/srv/z.js")];
        let first = resolver("/srv/").resolve(&paths).unwrap();
        let second = resolver("/srv/").resolve(&paths).unwrap();
        assert_eq!(first, second);
    }
}
