//! Bindata compiler CLI

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use bindata_compiler::{Compiler, Config, logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bindata")]
#[command(about = "Embed files as gzip-compressed assets in a generated Rust module")]
#[command(version)]
struct Args {
    /// Files or directories to embed
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Read options from a TOML file; command-line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file, or output directory with --split
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Name of the generated module
    #[arg(short, long)]
    package: Option<String>,

    /// Regex whose leading match is stripped from asset names
    #[arg(long, value_name = "REGEX")]
    prefix: Option<String>,

    /// Skip paths matching this regex (repeatable)
    #[arg(short, long, value_name = "REGEX")]
    ignore: Vec<String>,

    /// Only keep paths matching this regex (repeatable)
    #[arg(long, value_name = "REGEX")]
    include: Vec<String>,

    /// Override permission bits of every asset, in octal
    #[arg(long, value_parser = parse_mode)]
    mode: Option<u32>,

    /// Override the modification time of every asset, in Unix seconds
    #[arg(long = "modtime", allow_negative_numbers = true)]
    mod_time: Option<i64>,

    /// Record the MD5 checksum of each asset
    #[arg(long = "md5checksum")]
    md5_checksum: bool,

    /// Write one file per asset plus a common mod.rs
    #[arg(long)]
    split: bool,

    /// Read assets from disk at run time instead of embedding them
    #[arg(long)]
    debug: bool,

    /// Like --debug, with paths relative to BINDATA_ROOT_DIR
    #[arg(long)]
    dev: bool,

    /// Descend into subdirectories of every input
    #[arg(short, long)]
    recursive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(text: &str) -> Result<u32, String> {
    let digits = text.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode '{}': {}", text, e))
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => Config::default(),
        };

        for input in self.inputs {
            config = config.input(input, self.recursive);
        }
        if let Some(output) = self.output {
            config = config.output(output);
        }
        if let Some(package) = self.package {
            config.package = package;
        }
        if let Some(prefix) = self.prefix {
            config = config.prefix(prefix);
        }
        config.ignore.extend(self.ignore);
        config.include.extend(self.include);
        if let Some(mode) = self.mode {
            config = config.mode(mode);
        }
        if let Some(mod_time) = self.mod_time {
            config = config.mod_time(mod_time);
        }

        config.md5_checksum |= self.md5_checksum;
        config.split |= self.split;
        config.debug |= self.debug;
        config.dev |= self.dev;

        if config.input.is_empty() {
            anyhow::bail!("no input files or directories given");
        }
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = args.into_config().and_then(|config| {
        Compiler::new(config)
            .run()
            .map_err(anyhow::Error::from)
    });

    if let Err(e) = result {
        tracing::error!("Compilation failed: {:#}", e);
        process::exit(1);
    }
}
