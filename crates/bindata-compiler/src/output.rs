//! Placement of generated code: one combined file, or one file per asset
//! plus a shared `mod.rs`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::asset::Asset;
use crate::bintree::Bintree;
use crate::codegen::{CodeGenerator, Layout};
use crate::config::Config;
use crate::error::{CompileError, Result};

/// File name of the shared unit in split output.
pub const COMMON_UNIT: &str = "mod.rs";

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    /// Destination of the file
    pub path: PathBuf,
    pub contents: String,
}

/// Output policy chosen by configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStrategy {
    SingleFile { path: PathBuf },
    Split { dir: PathBuf },
}

impl OutputStrategy {
    pub fn from_config(config: &Config) -> Result<Self> {
        let location = config.output_location()?;
        Ok(if config.split {
            OutputStrategy::Split { dir: location }
        } else {
            OutputStrategy::SingleFile { path: location }
        })
    }

    fn layout(&self) -> Layout {
        match self {
            OutputStrategy::SingleFile { .. } => Layout::Single,
            OutputStrategy::Split { .. } => Layout::Split,
        }
    }

    /// Generate every unit in memory. Assets are emitted in parallel and
    /// reassembled in input order.
    pub fn assemble(
        &self,
        generator: &CodeGenerator,
        assets: &[Asset],
        tree: &Bintree,
    ) -> Result<Vec<CompiledUnit>> {
        let layout = self.layout();
        let emitted = assets
            .par_iter()
            .map(|asset| generator.generate_asset(asset, layout))
            .collect::<Result<Vec<String>>>()?;

        match self {
            OutputStrategy::SingleFile { path } => {
                let names: Vec<&str> = assets.iter().map(|a| a.name.as_str()).collect();
                let mut contents = String::new();
                generator.write_header(&mut contents, &names)?;
                generator.write_runtime(&mut contents)?;
                for code in &emitted {
                    contents.push_str(code);
                }
                generator.write_table(&mut contents, assets, layout)?;
                generator.write_bintree(&mut contents, tree, layout)?;
                generator.write_api(&mut contents);

                Ok(vec![CompiledUnit {
                    path: path.clone(),
                    contents,
                }])
            }
            OutputStrategy::Split { dir } => {
                let mut units = Vec::with_capacity(assets.len() + 1);
                for (asset, code) in assets.iter().zip(&emitted) {
                    let mut contents = String::new();
                    generator.write_header(&mut contents, &[asset.name.as_str()])?;
                    contents.push_str("#[allow(unused_imports)]\nuse super::*;\n");
                    contents.push_str(code);
                    units.push(CompiledUnit {
                        path: dir.join(format!("{}.rs", asset.module())),
                        contents,
                    });
                }

                let mut common = String::new();
                generator.write_header(&mut common, &[])?;
                for asset in assets {
                    writeln!(common, "#[allow(non_snake_case)]\nmod {};", asset.module())?;
                }
                common.push('\n');
                generator.write_runtime(&mut common)?;
                generator.write_table(&mut common, assets, layout)?;
                generator.write_bintree(&mut common, tree, layout)?;
                generator.write_api(&mut common);

                units.push(CompiledUnit {
                    path: dir.join(COMMON_UNIT),
                    contents: common,
                });
                Ok(units)
            }
        }
    }

    /// Write generated units, creating the output directory when needed.
    pub fn write(&self, units: &[CompiledUnit]) -> Result<()> {
        match self {
            OutputStrategy::SingleFile { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    create_dir(parent)?;
                }
            }
            OutputStrategy::Split { dir } => create_dir(dir)?,
        }

        for unit in units {
            std::fs::write(&unit.path, &unit.contents)
                .map_err(|e| CompileError::io_at(&unit.path, e))?;
            tracing::debug!("Wrote {} ({} bytes)", unit.path.display(), unit.contents.len());
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| CompileError::io_at(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_config() {
        let single = OutputStrategy::from_config(&Config::new("web").output("gen/assets.rs")).unwrap();
        assert_eq!(
            single,
            OutputStrategy::SingleFile {
                path: PathBuf::from("gen/assets.rs")
            }
        );

        let split = OutputStrategy::from_config(&Config::new("web").split(true).output("gen")).unwrap();
        assert_eq!(
            split,
            OutputStrategy::Split {
                dir: PathBuf::from("gen")
            }
        );
    }

    #[test]
    fn test_write_creates_split_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let out_dir = dir.path().join("nested/generated");
        let strategy = OutputStrategy::Split {
            dir: out_dir.clone(),
        };
        let units = vec![CompiledUnit {
            path: out_dir.join(COMMON_UNIT),
            contents: "// common\n".into(),
        }];

        strategy.write(&units).unwrap();
        assert_eq!(
            std::fs::read_to_string(out_dir.join(COMMON_UNIT)).unwrap(),
            "// common\n"
        );
    }
}
