//! Asset records and the filesystem metadata embedded alongside them.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::config::Config;
use crate::error::{CompileError, Result};

/// One embeddable input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Location of the source file (never embedded in release output)
    pub path: PathBuf,
    /// Canonical lookup key exposed by the generated API
    pub name: String,
    /// Identifier used to bind the embedded data and its accessor
    pub func: String,
}

impl Asset {
    /// Name of the generated accessor function.
    pub fn accessor(&self) -> String {
        format!("{}_asset", self.func)
    }

    /// Name of the generated static holding the compressed literal.
    pub fn data_binding(&self) -> String {
        format!("{}_bytes", self.func)
    }

    /// Module name of this asset's unit in split output.
    pub fn module(&self) -> String {
        format!("asset_{}", self.func)
    }
}

/// Metadata snapshot written into the generated asset info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Size of the uncompressed file in bytes
    pub size: u64,
    /// Permission bits
    pub mode: u32,
    /// Whole seconds since the Unix epoch
    pub mod_time: i64,
}

impl FileStat {
    /// Stat `path`, then apply the configured mode/modtime overrides.
    pub fn read(path: &Path, config: &Config) -> Result<Self> {
        let meta = std::fs::metadata(path).map_err(|e| CompileError::io_at(path, e))?;
        let stat = Self::from_metadata(&meta).map_err(|e| CompileError::io_at(path, e))?;
        Ok(stat.with_overrides(config.mode, config.mod_time))
    }

    pub fn from_metadata(meta: &Metadata) -> std::io::Result<Self> {
        let mod_time = match meta.modified()?.duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        };

        Ok(Self {
            size: meta.len(),
            mode: permission_bits(meta),
            mod_time,
        })
    }

    /// Overrides replace the stat values for every asset; zero means unset.
    pub fn with_overrides(mut self, mode: Option<u32>, mod_time: Option<i64>) -> Self {
        if let Some(mode) = mode.filter(|m| *m > 0) {
            self.mode = mode & 0o777;
        }
        if let Some(mod_time) = mod_time.filter(|t| *t != 0) {
            self.mod_time = mod_time;
        }
        self
    }
}

#[cfg(unix)]
fn permission_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o666 }
}
