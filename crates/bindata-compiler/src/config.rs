//! Compilation options, loadable from a `bindata.toml` file.
//!
//! ```toml
//! package = "assets"
//! output = "src/assets.rs"
//! prefix = "^static/"
//! ignore = ["\\.gitignore$"]
//! md5_checksum = true
//!
//! [[input]]
//! path = "static"
//! recursive = true
//! ```

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{CompileError, Result};

/// Package name used when none is configured.
pub const DEFAULT_PACKAGE: &str = "assets";

/// File name of the generated module in single-file mode.
pub const DEFAULT_OUTPUT_NAME: &str = "bindata_gzip.rs";

/// A directory or file to embed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub path: PathBuf,
    /// Descend into subdirectories of `path`
    #[serde(default)]
    pub recursive: bool,
}

/// Options for one compilation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the generated module, used in its header and panic messages
    pub package: String,
    pub input: Vec<InputConfig>,
    /// Output file, or output directory in split mode
    pub output: Option<PathBuf>,
    /// Regex whose leading match is stripped from asset names
    pub prefix: Option<String>,
    /// Paths matching any of these regexes are skipped
    pub ignore: Vec<String>,
    /// When non-empty, only paths matching one of these regexes are kept
    pub include: Vec<String>,
    /// Fixed permission bits for every asset
    pub mode: Option<u32>,
    /// Fixed Unix timestamp for every asset
    pub mod_time: Option<i64>,
    pub md5_checksum: bool,
    /// One generated file per asset plus a common `mod.rs`
    pub split: bool,
    /// Read assets from their original location at run time
    pub debug: bool,
    /// Debug build resolving assets against `BINDATA_ROOT_DIR`
    pub dev: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

impl Config {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            input: Vec::new(),
            output: None,
            prefix: None,
            ignore: Vec::new(),
            include: Vec::new(),
            mode: None,
            mod_time: None,
            md5_checksum: false,
            split: false,
            debug: false,
            dev: false,
        }
    }

    /// Load a TOML config file. Relative paths are resolved against the
    /// file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CompileError::io_at(path, e))?;
        let mut config: Config = toml::from_str(&text)
            .map_err(|e| CompileError::config(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            for input in &mut config.input {
                if input.path.is_relative() {
                    input.path = base.join(&input.path);
                }
            }
            if let Some(output) = config.output.as_mut().filter(|o| o.is_relative()) {
                *output = base.join(&*output);
            }
        }

        Ok(config)
    }

    pub fn input(mut self, path: impl Into<PathBuf>, recursive: bool) -> Self {
        self.input.push(InputConfig {
            path: path.into(),
            recursive,
        });
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn prefix(mut self, pattern: impl Into<String>) -> Self {
        self.prefix = Some(pattern.into());
        self
    }

    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn mod_time(mut self, mod_time: i64) -> Self {
        self.mod_time = Some(mod_time);
        self
    }

    pub fn md5_checksum(mut self, enabled: bool) -> Self {
        self.md5_checksum = enabled;
        self
    }

    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Dev builds are debug builds with a different path root.
    pub fn is_debug(&self) -> bool {
        self.debug || self.dev
    }

    /// Check the options before any input is read.
    pub fn validate(&self) -> Result<()> {
        self.validate_package()?;

        for input in &self.input {
            std::fs::symlink_metadata(&input.path)
                .map_err(|e| CompileError::unavailable(&input.path, e.to_string()))?;
        }

        self.prefix_regex()?;
        self.ignore_regexes()?;
        self.include_regexes()?;
        self.output_location()?;

        Ok(())
    }

    /// The package name lands in generated identifiers and string literals.
    pub fn validate_package(&self) -> Result<()> {
        if self.package.is_empty() {
            return Err(CompileError::config("missing package name"));
        }
        if !is_identifier(&self.package) {
            return Err(CompileError::config(format!(
                "package name '{}' is not a valid identifier",
                self.package
            )));
        }
        Ok(())
    }

    pub fn prefix_regex(&self) -> Result<Option<Regex>> {
        self.prefix.as_deref().map(compile_pattern).transpose()
    }

    pub fn ignore_regexes(&self) -> Result<Vec<Regex>> {
        self.ignore.iter().map(|p| compile_pattern(p)).collect()
    }

    pub fn include_regexes(&self) -> Result<Vec<Regex>> {
        self.include.iter().map(|p| compile_pattern(p)).collect()
    }

    /// Resolve where generated units go: a file in single-file mode, a
    /// directory in split mode.
    pub fn output_location(&self) -> Result<PathBuf> {
        let output = match &self.output {
            Some(output) => output.clone(),
            None => {
                let cwd = std::env::current_dir().map_err(|e| {
                    CompileError::config(format!(
                        "unable to determine current working directory: {}",
                        e
                    ))
                })?;
                if self.split {
                    return Ok(cwd);
                }
                return Ok(cwd.join(DEFAULT_OUTPUT_NAME));
            }
        };

        if output.as_os_str().is_empty() {
            return Err(CompileError::config("empty output path"));
        }

        if self.split {
            if output.is_file() {
                return Err(CompileError::config(format!(
                    "split output {} is a file, expected a directory",
                    output.display()
                )));
            }
            return Ok(output);
        }

        // A trailing separator or an existing directory gets the default file name
        let text = output.to_string_lossy();
        if text.ends_with('/') || text.ends_with(std::path::MAIN_SEPARATOR) || output.is_dir() {
            return Ok(output.join(DEFAULT_OUTPUT_NAME));
        }

        if let Some(parent) = output.parent().filter(|p| p.is_file()) {
            return Err(CompileError::config(format!(
                "output directory {} is a file",
                parent.display()
            )));
        }

        Ok(output)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| CompileError::config(format!("invalid pattern '{}': {}", pattern, e)))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new("web")
            .input("static", true)
            .output("out/assets.rs")
            .prefix("^static/")
            .mode(0o644)
            .md5_checksum(true)
            .split(false)
            .dev(true);

        assert_eq!(config.package, "web");
        assert_eq!(config.input[0].path, PathBuf::from("static"));
        assert!(config.input[0].recursive);
        assert_eq!(config.output, Some(PathBuf::from("out/assets.rs")));
        assert_eq!(config.mode, Some(0o644));
        assert!(config.md5_checksum);
        assert!(config.is_debug());
    }

    #[test]
    fn test_missing_package_name() {
        let err = Config::new("").validate().unwrap_err();
        assert!(matches!(err, CompileError::ConfigInvalid(_)));
    }

    #[test]
    fn test_package_must_be_identifier() {
        assert!(Config::new("my-assets").validate().is_err());
        assert!(Config::new("1assets").validate().is_err());
        assert!(Config::new("my_assets").output("/tmp/x.rs").validate().is_ok());
    }

    #[test]
    fn test_missing_input() {
        let err = Config::new("assets")
            .input("/no/such/input/dir", false)
            .validate()
            .unwrap_err();
        assert!(matches!(err, CompileError::InputUnavailable { .. }));
    }

    #[test]
    fn test_bad_prefix_pattern() {
        let err = Config::new("assets").prefix("(").validate().unwrap_err();
        assert!(matches!(err, CompileError::ConfigInvalid(_)));
    }

    #[test]
    fn test_default_output_location() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            Config::new("assets").output_location().unwrap(),
            cwd.join(DEFAULT_OUTPUT_NAME)
        );
        assert_eq!(Config::new("assets").split(true).output_location().unwrap(), cwd);
    }

    #[test]
    fn test_directory_output_gets_default_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::new("assets").output(dir.path());
        assert_eq!(
            config.output_location().unwrap(),
            dir.path().join(DEFAULT_OUTPUT_NAME)
        );

        let config = Config::new("assets").output("gen/");
        assert_eq!(
            config.output_location().unwrap(),
            PathBuf::from("gen/").join(DEFAULT_OUTPUT_NAME)
        );
    }

    #[test]
    fn test_split_output_cannot_be_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Config::new("assets")
            .split(true)
            .output(file.path())
            .output_location()
            .unwrap_err();
        assert!(matches!(err, CompileError::ConfigInvalid(_)));
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bindata.toml");
        std::fs::write(
            &path,
            r#"
package = "web"
output = "gen/assets.rs"
prefix = "^static/"
ignore = ["\\.gitignore$"]
md5_checksum = true
mod_time = 1700000000

[[input]]
path = "static"
recursive = true
"#,
        )
        .unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.package, "web");
        assert_eq!(config.input[0].path, dir.path().join("static"));
        assert_eq!(config.output, Some(dir.path().join("gen/assets.rs")));
        assert_eq!(config.ignore, vec!["\\.gitignore$".to_string()]);
        assert_eq!(config.mod_time, Some(1_700_000_000));
        assert!(config.md5_checksum);
        assert!(!config.split);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bindata.toml");
        std::fs::write(&path, "packge = \"typo\"\n").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, CompileError::ConfigInvalid(_)));
    }
}
