//! Bindata compiler
//!
//! Turns a set of files into a generated Rust module that serves their
//! gzip-compressed content and metadata by name. Release builds embed the
//! compressed bytes; debug builds read the original files on every call.

pub mod asset;
pub mod bintree;
pub mod codegen;
pub mod compress;
pub mod config;
pub mod discover;
pub mod driver;
pub mod error;
pub mod logging;
pub mod naming;
pub mod output;
pub mod templates;

pub use asset::{Asset, FileStat};
pub use bintree::Bintree;
pub use codegen::{CodeGenerator, Layout, Mode};
pub use config::{Config, InputConfig};
pub use driver::{CompileOutput, Compiler};
pub use error::{CompileError, Result};
pub use naming::NameResolver;
pub use output::{CompiledUnit, OutputStrategy};

/// Compile and write the module described by `config`.
pub fn translate(config: Config) -> Result<CompileOutput> {
    Compiler::new(config).run()
}
