//! Code generation module
//!
//! Emits the Rust source of the generated asset module: per-asset units in
//! release or debug flavor, and the shared runtime (types, lookup table,
//! bintree and API) that both flavors expose identically.

mod debug;
mod release;

use std::fmt::Write as _;

use crate::asset::Asset;
use crate::bintree::Bintree;
use crate::config::Config;
use crate::error::Result;
use crate::templates::{API, ApiVars, DEBUG_LOADER, DebugVars, NoVars, TYPES};

/// How asset content reaches the program at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compressed content embedded in the generated source
    Release,
    /// Content read from the original files; `dev` resolves them against
    /// `BINDATA_ROOT_DIR` instead of absolute paths
    Debug { dev: bool },
}

impl Mode {
    pub fn from_config(config: &Config) -> Self {
        if config.is_debug() {
            Mode::Debug { dev: config.dev }
        } else {
            Mode::Release
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Release => "release",
            Mode::Debug { dev: false } => "debug",
            Mode::Debug { dev: true } => "dev",
        }
    }
}

/// Where an asset's code lands relative to the shared runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Same module as the runtime
    Single,
    /// Child module of the runtime module
    Split,
}

impl Layout {
    fn accessor_visibility(&self) -> &'static str {
        match self {
            Layout::Single => "",
            Layout::Split => "pub(super) ",
        }
    }
}

/// Rust code generator for one compilation run
pub struct CodeGenerator<'a> {
    config: &'a Config,
    mode: Mode,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            mode: Mode::from_config(config),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Generate the binding and accessor for one asset.
    pub fn generate_asset(&self, asset: &Asset, layout: Layout) -> Result<String> {
        let vis = layout.accessor_visibility();
        match self.mode {
            Mode::Release => release::generate_asset(self.config, asset, vis),
            Mode::Debug { dev } => debug::generate_asset(self.config, asset, vis, dev),
        }
    }

    /// Comment block opening every generated file.
    pub fn write_header(&self, out: &mut String, names: &[&str]) -> Result<()> {
        out.push_str("// Code generated by bindata. DO NOT EDIT.\n");
        writeln!(out, "// package: {}", self.config.package)?;
        writeln!(out, "// mode: {}", self.mode.as_str())?;
        if !names.is_empty() {
            out.push_str("// sources:\n");
            for name in names {
                writeln!(out, "//   {}", name.escape_debug())?;
            }
        }
        out.push('\n');
        Ok(())
    }

    /// Types and mode-specific helpers every accessor relies on.
    pub fn write_runtime(&self, out: &mut String) -> Result<()> {
        out.push_str(&TYPES.render(&NoVars));

        if let Mode::Debug { dev } = self.mode {
            out.push_str(&DEBUG_LOADER.render(&DebugVars));
            debug::write_checksum_helper(out, self.config.md5_checksum)?;
            if dev {
                debug::write_root_dir_helper(out)?;
            }
        }

        Ok(())
    }

    /// Name → accessor table, sorted by name for binary search.
    pub fn write_table(&self, out: &mut String, assets: &[Asset], layout: Layout) -> Result<()> {
        let mut entries: Vec<&Asset> = assets.iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        out.push_str("\nconst GZIP_TABLE: &[(&str, GzipAssetFn)] = &[\n");
        for asset in entries {
            writeln!(
                out,
                "    ({:?}, {} as GzipAssetFn),",
                asset.name,
                accessor_path(&asset.func, layout)
            )?;
        }
        out.push_str("];\n");
        Ok(())
    }

    pub fn write_bintree(&self, out: &mut String, tree: &Bintree, layout: Layout) -> Result<()> {
        out.push_str("\nconst GZIP_BINTREE: GzipBintree = ");
        tree.write_rust(out, &|func| accessor_path(func, layout), 0)?;
        out.push_str(";\n");
        Ok(())
    }

    pub fn write_api(&self, out: &mut String) {
        out.push_str(&API.render(&ApiVars {
            package: &self.config.package,
        }));
    }
}

/// Path of an accessor as seen from the runtime module.
fn accessor_path(func: &str, layout: Layout) -> String {
    match layout {
        Layout::Single => format!("{}_asset", func),
        Layout::Split => format!("asset_{}::{}_asset", func, func),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset(name: &str, func: &str) -> Asset {
        Asset {
            path: PathBuf::from(format!("/src/{}", name)),
            name: name.into(),
            func: func.into(),
        }
    }

    #[test]
    fn test_mode_from_config() {
        assert_eq!(Mode::from_config(&Config::new("a")), Mode::Release);
        assert_eq!(
            Mode::from_config(&Config::new("a").debug(true)),
            Mode::Debug { dev: false }
        );
        assert_eq!(
            Mode::from_config(&Config::new("a").dev(true)),
            Mode::Debug { dev: true }
        );
    }

    #[test]
    fn test_header_lists_names() {
        let config = Config::new("web");
        let mut out = String::new();
        CodeGenerator::new(&config)
            .write_header(&mut out, &["a.txt", "odd\nname"])
            .unwrap();

        assert!(out.starts_with("// Code generated by bindata. DO NOT EDIT.\n"));
        assert!(out.contains("// package: web\n"));
        assert!(out.contains("// mode: release\n"));
        assert!(out.contains("//   a.txt\n"));
        assert!(out.contains("//   odd\\nname\n"));
    }

    #[test]
    fn test_table_sorted_by_name() {
        let config = Config::new("web");
        let assets = vec![asset("z.txt", "z_txt"), asset("a/b.txt", "a_b_txt")];
        let mut out = String::new();
        CodeGenerator::new(&config)
            .write_table(&mut out, &assets, Layout::Single)
            .unwrap();

        let a = out.find("\"a/b.txt\"").unwrap();
        let z = out.find("\"z.txt\"").unwrap();
        assert!(a < z);
        assert!(out.contains("(\"a/b.txt\", a_b_txt_asset as GzipAssetFn),"));
    }

    #[test]
    fn test_split_table_uses_module_paths() {
        let config = Config::new("web").split(true);
        let mut out = String::new();
        CodeGenerator::new(&config)
            .write_table(&mut out, &[asset("a.txt", "a_txt")], Layout::Split)
            .unwrap();
        assert!(out.contains("(\"a.txt\", asset_a_txt::a_txt_asset as GzipAssetFn),"));
    }

    #[test]
    fn test_runtime_per_mode() {
        let release = Config::new("web");
        let mut out = String::new();
        CodeGenerator::new(&release).write_runtime(&mut out).unwrap();
        assert!(out.contains("pub struct GzipAsset"));
        assert!(!out.contains("fn gzip_from_disk"));

        let dev = Config::new("web").dev(true).md5_checksum(true);
        let mut out = String::new();
        CodeGenerator::new(&dev).write_runtime(&mut out).unwrap();
        assert!(out.contains("fn gzip_from_disk"));
        assert!(out.contains("md5::Md5::digest"));
        assert!(out.contains("super::BINDATA_ROOT_DIR"));
    }
}
