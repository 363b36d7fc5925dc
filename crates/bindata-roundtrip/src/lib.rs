//! The fixture tree compiled in every mode.

/// Root that dev-mode accessors resolve asset names against.
pub const BINDATA_ROOT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

pub mod release {
    include!(concat!(env!("OUT_DIR"), "/release.rs"));
}

pub mod debug {
    include!(concat!(env!("OUT_DIR"), "/debug.rs"));
}

pub mod dev {
    include!(concat!(env!("OUT_DIR"), "/dev.rs"));
}

// Split output: one unit per asset under `src/split_*/`, written by `build.rs`
pub mod split_dev;
pub mod split_release;
