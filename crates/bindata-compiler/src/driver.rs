//! Compiler driver that orchestrates the compilation pipeline

use std::path::PathBuf;

use crate::asset::Asset;
use crate::bintree::Bintree;
use crate::codegen::CodeGenerator;
use crate::config::Config;
use crate::discover;
use crate::error::Result;
use crate::naming::NameResolver;
use crate::output::{CompiledUnit, OutputStrategy};

/// Compilation output structure
#[derive(Debug)]
pub struct CompileOutput {
    /// Resolved assets, in input order
    pub assets: Vec<Asset>,
    /// Name index over `assets`
    pub tree: Bintree,
    /// Generated files, not yet written
    pub units: Vec<CompiledUnit>,
}

/// The bindata compiler
pub struct Compiler {
    config: Config,
}

impl Compiler {
    /// Create a new compiler with the given options
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover the configured inputs and generate every unit.
    pub fn compile(&self) -> Result<CompileOutput> {
        self.config.validate()?;
        let paths = discover::find_files(&self.config)?;
        self.compile_paths(&paths)
    }

    /// Generate units for an explicit, already filtered list of files.
    pub fn compile_paths(&self, paths: &[PathBuf]) -> Result<CompileOutput> {
        self.config.validate_package()?;

        let resolver = NameResolver::new(self.config.prefix_regex()?);
        let assets = resolver.resolve(paths)?;
        let tree = Bintree::build(&assets)?;

        let generator = CodeGenerator::new(&self.config);
        let strategy = OutputStrategy::from_config(&self.config)?;
        let units = strategy.assemble(&generator, &assets, &tree)?;

        tracing::debug!(
            "Generated {} unit(s) for {} asset(s) in {} mode",
            units.len(),
            assets.len(),
            generator.mode().as_str()
        );

        Ok(CompileOutput {
            assets,
            tree,
            units,
        })
    }

    /// Write a compilation result to the configured output.
    pub fn write(&self, output: &CompileOutput) -> Result<()> {
        let strategy = OutputStrategy::from_config(&self.config)?;
        strategy.write(&output.units)
    }

    /// Compile and write in one step. Nothing is written unless every
    /// asset compiled.
    pub fn run(&self) -> Result<CompileOutput> {
        let output = self.compile()?;
        self.write(&output)?;
        tracing::info!(
            "Compiled {} asset(s) into {}",
            output.assets.len(),
            self.config.output_location()?.display()
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_paths_scenario() {
        let dir = tempfile::TempDir::new().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        std::fs::write(data.join("foo.txt"), "hello").unwrap();

        let prefix = format!("^{}/", regex::escape(&dir.path().to_string_lossy().replace('\\', "/")));
        let config = Config::new("assets")
            .prefix(prefix)
            .output(dir.path().join("out.rs"));
        let output = Compiler::new(config)
            .compile_paths(&[data.join("foo.txt")])
            .unwrap();

        assert_eq!(output.assets[0].name, "data/foo.txt");
        assert_eq!(output.assets[0].func, "data_foo_txt");
        assert_eq!(output.tree.list("data").unwrap(), vec!["foo.txt"]);
        assert_eq!(output.units.len(), 1);
        assert!(!dir.path().join("out.rs").exists());
    }

    #[test]
    fn test_compile_paths_rejects_bad_package() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("hello.txt");
        std::fs::write(&file, "hello").unwrap();

        for package in ["", "a\"b", "my-assets"] {
            let config = Config::new(package).output(dir.path().join("out.rs"));
            let err = Compiler::new(config)
                .compile_paths(&[file.clone()])
                .unwrap_err();
            assert!(
                matches!(err, crate::error::CompileError::ConfigInvalid(_)),
                "{:?}",
                package
            );
        }
    }
}
