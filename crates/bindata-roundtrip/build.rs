//! Generates the release, debug and dev modules from `fixtures/`, as single
//! files in `OUT_DIR` and as split modules under `src/`.

use std::path::{Path, PathBuf};

use bindata_compiler::{Compiler, Config};

const FIXTURE_MOD_TIME: i64 = 1_600_000_000;

fn fixture_config(fixtures: &Path, output: PathBuf) -> Config {
    let root = fixtures.to_string_lossy().replace('\\', "/");
    Config::new("fixtures")
        .input(fixtures, true)
        .prefix(format!("^{}/", regex::escape(&root)))
        .output(output)
        .mode(0o644)
        .mod_time(FIXTURE_MOD_TIME)
        .md5_checksum(true)
}

fn main() -> anyhow::Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let fixtures = manifest_dir.join("fixtures");

    println!("cargo:rerun-if-changed=fixtures");

    let variants = [
        ("release.rs", false, false),
        ("debug.rs", true, false),
        ("dev.rs", false, true),
    ];
    for (file, debug, dev) in variants {
        let config = fixture_config(&fixtures, out_dir.join(file))
            .debug(debug)
            .dev(dev);
        Compiler::new(config).run()?;
    }

    // Split units declare `mod asset_*;`, which only resolves next to the
    // crate sources, so these land in ignored directories under `src/`.
    let split_variants = [("split_release", false), ("split_dev", true)];
    for (dir, dev) in split_variants {
        let config = fixture_config(&fixtures, manifest_dir.join("src").join(dir))
            .split(true)
            .dev(dev);
        Compiler::new(config).run()?;
    }

    Ok(())
}
