//! Release accessors: compressed content embedded as a byte-string literal.

use std::fs::File;
use std::io::{BufReader, Write};

use crate::asset::{Asset, FileStat};
use crate::compress;
use crate::config::Config;
use crate::error::{CompileError, Result};

pub(super) fn generate_asset(config: &Config, asset: &Asset, vis: &str) -> Result<String> {
    let stat = FileStat::read(&asset.path, config)?;
    let file = File::open(&asset.path).map_err(|e| CompileError::io_at(&asset.path, e))?;

    let mut out: Vec<u8> = Vec::new();
    writeln!(out)?;
    writeln!(out, "#[allow(non_upper_case_globals)]")?;
    write!(out, "static {}: &[u8] = ", asset.data_binding())?;
    let encoded = compress::write_compressed_literal(
        BufReader::new(file),
        &mut out,
        config.md5_checksum,
    )
    .map_err(|e| CompileError::io_at(&asset.path, e))?;
    writeln!(out, ";")?;

    tracing::debug!(
        "Embedded {} ({} bytes, {} compressed)",
        asset.name,
        encoded.size,
        encoded.compressed
    );

    let checksum = encoded.md5.unwrap_or_default();
    writeln!(out)?;
    writeln!(out, "#[allow(non_snake_case)]")?;
    writeln!(out, "{}fn {}() -> io::Result<GzipAsset> {{", vis, asset.accessor())?;
    writeln!(out, "    let info = GzipFileInfo {{")?;
    writeln!(out, "        name: {:?},", asset.name)?;
    writeln!(out, "        size: {},", encoded.size)?;
    writeln!(out, "        mode: 0o{:o},", stat.mode)?;
    writeln!(out, "        mod_time: gzip_unix_time({}),", stat.mod_time)?;
    writeln!(out, "        md5_checksum: Cow::Borrowed({:?}),", checksum)?;
    writeln!(out, "    }};")?;
    writeln!(out)?;
    writeln!(out, "    Ok(GzipAsset {{")?;
    writeln!(out, "        bytes: Cow::Borrowed({}),", asset.data_binding())?;
    writeln!(out, "        info,")?;
    writeln!(out, "    }})")?;
    writeln!(out, "}}")?;

    String::from_utf8(out).map_err(|e| {
        CompileError::io_at(
            &asset.path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn asset_at(path: &Path) -> Asset {
        Asset {
            path: path.to_path_buf(),
            name: "data/foo.txt".into(),
            func: "data_foo_txt".into(),
        }
    }

    #[test]
    fn test_release_asset_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("foo.txt");
        std::fs::write(&path, "hello").unwrap();

        let config = Config::new("web").mode(0o600).mod_time(1_700_000_000).md5_checksum(true);
        let code = generate_asset(&config, &asset_at(&path), "").unwrap();

        assert!(code.contains("static data_foo_txt_bytes: &[u8] = b\""));
        assert!(code.contains("fn data_foo_txt_asset() -> io::Result<GzipAsset> {"));
        assert!(code.contains("name: \"data/foo.txt\","));
        assert!(code.contains("size: 5,"));
        assert!(code.contains("mode: 0o600,"));
        assert!(code.contains("mod_time: gzip_unix_time(1700000000),"));
        assert!(code.contains("md5_checksum: Cow::Borrowed(\"5d41402abc4b2a76b9719d911017c592\"),"));
        assert!(!code.contains(&path.display().to_string()));
    }

    #[test]
    fn test_checksum_disabled() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("foo.txt");
        std::fs::write(&path, "hello").unwrap();

        let code = generate_asset(&Config::new("web"), &asset_at(&path), "pub(super) ").unwrap();
        assert!(code.contains("md5_checksum: Cow::Borrowed(\"\"),"));
        assert!(code.contains("pub(super) fn data_foo_txt_asset()"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = generate_asset(
            &Config::new("web"),
            &asset_at(Path::new("/no/such/file.txt")),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::IoAt { .. }));
    }
}
