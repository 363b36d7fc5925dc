//! Debug accessors: read, compress and stat the original file on every call.

use std::fmt::Write as _;

use crate::asset::Asset;
use crate::config::Config;
use crate::error::{CompileError, Result};

pub(super) fn generate_asset(config: &Config, asset: &Asset, vis: &str, dev: bool) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "#[allow(non_snake_case)]")?;
    writeln!(out, "{}fn {}() -> io::Result<GzipAsset> {{", vis, asset.accessor())?;

    if dev {
        writeln!(
            out,
            "    let path = gzip_root_dir().join({:?});",
            asset.name.trim_start_matches('/')
        )?;
    } else {
        let absolute = std::path::absolute(&asset.path)
            .map_err(|e| CompileError::io_at(&asset.path, e))?;
        let absolute = absolute.to_str().ok_or_else(|| {
            CompileError::invalid_path(absolute.to_string_lossy(), "path is not valid UTF-8")
        })?;
        writeln!(out, "    let path = std::path::PathBuf::from({:?});", absolute)?;
    }

    writeln!(
        out,
        "    gzip_from_disk(&path, {:?}, 0o{:o}, {})",
        asset.name,
        config.mode.unwrap_or(0),
        config.mod_time.unwrap_or(0)
    )?;
    writeln!(out, "}}")?;

    tracing::debug!("Linked {} to {}", asset.name, asset.path.display());
    Ok(out)
}

/// Checksum used by the loader; MD5 via the `md-5` crate when enabled.
pub(super) fn write_checksum_helper(out: &mut String, enabled: bool) -> Result<()> {
    out.push('\n');
    if enabled {
        out.push_str(concat!(
            "fn gzip_checksum(content: &[u8]) -> String {\n",
            "    use md5::Digest as _;\n",
            "    md5::Md5::digest(content)\n",
            "        .iter()\n",
            "        .map(|b| format!(\"{:02x}\", b))\n",
            "        .collect()\n",
            "}\n",
        ));
    } else {
        out.push_str(concat!(
            "fn gzip_checksum(_content: &[u8]) -> String {\n",
            "    String::new()\n",
            "}\n",
        ));
    }
    Ok(())
}

/// Dev builds resolve names against a directory the embedding module provides.
pub(super) fn write_root_dir_helper(out: &mut String) -> Result<()> {
    out.push('\n');
    out.push_str(concat!(
        "fn gzip_root_dir() -> &'static std::path::Path {\n",
        "    std::path::Path::new(super::BINDATA_ROOT_DIR)\n",
        "}\n",
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset() -> Asset {
        Asset {
            path: PathBuf::from("/srv/static/data/foo.txt"),
            name: "data/foo.txt".into(),
            func: "data_foo_txt".into(),
        }
    }

    #[test]
    fn test_debug_reads_absolute_path() {
        let code = generate_asset(&Config::new("web").debug(true), &asset(), "", false).unwrap();

        assert!(code.contains("fn data_foo_txt_asset() -> io::Result<GzipAsset> {"));
        assert!(code.contains("std::path::PathBuf::from(\"/srv/static/data/foo.txt\")"));
        assert!(code.contains("gzip_from_disk(&path, \"data/foo.txt\", 0o0, 0)"));
    }

    #[test]
    fn test_dev_reads_relative_to_root() {
        let config = Config::new("web").dev(true).mode(0o644).mod_time(99);
        let code = generate_asset(&config, &asset(), "pub(super) ", true).unwrap();

        assert!(code.contains("pub(super) fn data_foo_txt_asset()"));
        assert!(code.contains("gzip_root_dir().join(\"data/foo.txt\")"));
        assert!(code.contains("gzip_from_disk(&path, \"data/foo.txt\", 0o644, 99)"));
        assert!(!code.contains("/srv/static"));
    }

    #[test]
    fn test_checksum_helper_variants() {
        let mut on = String::new();
        write_checksum_helper(&mut on, true).unwrap();
        assert!(on.contains("md5::Md5::digest(content)"));

        let mut off = String::new();
        write_checksum_helper(&mut off, false).unwrap();
        assert!(off.contains("String::new()"));
        assert!(!off.contains("md5"));
    }
}
