// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: dev

#[allow(non_snake_case)]
mod asset_data_foo_txt;
#[allow(non_snake_case)]
mod asset_data_img_pixel_bin;
#[allow(non_snake_case)]
mod asset_hello_txt;
#[allow(non_snake_case)]
mod asset_index_html;

#[allow(unused_imports)]
use std::borrow::Cow;
#[allow(unused_imports)]
use std::io;
#[allow(unused_imports)]
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Accessor bound to one asset name in the lookup table.
pub type GzipAssetFn = fn() -> io::Result<GzipAsset>;

/// A loaded asset: gzip-compressed content plus file metadata.
#[derive(Debug, Clone)]
pub struct GzipAsset {
    bytes: Cow<'static, [u8]>,
    info: GzipFileInfo,
}

impl GzipAsset {
    /// Gzip-compressed content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn info(&self) -> &GzipFileInfo {
        &self.info
    }

    pub fn into_parts(self) -> (Cow<'static, [u8]>, GzipFileInfo) {
        (self.bytes, self.info)
    }
}

/// Standard file metadata.
pub trait FileInfo {
    fn name(&self) -> &str;
    /// Size of the uncompressed content in bytes.
    fn size(&self) -> u64;
    /// Permission bits.
    fn mode(&self) -> u32;
    fn mod_time(&self) -> SystemTime;
    fn is_dir(&self) -> bool;
    fn sys(&self) -> Option<&dyn std::any::Any>;
}

/// File metadata with the content checksum.
pub trait FileInfoEx: FileInfo {
    /// Hex MD5 of the uncompressed content; empty when checksums were not generated.
    fn md5_checksum(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GzipFileInfo {
    name: &'static str,
    size: u64,
    mode: u32,
    mod_time: SystemTime,
    md5_checksum: Cow<'static, str>,
}

impl FileInfo for GzipFileInfo {
    fn name(&self) -> &str {
        self.name
    }
    fn size(&self) -> u64 {
        self.size
    }
    fn mode(&self) -> u32 {
        self.mode
    }
    fn mod_time(&self) -> SystemTime {
        self.mod_time
    }
    fn is_dir(&self) -> bool {
        false
    }
    fn sys(&self) -> Option<&dyn std::any::Any> {
        None
    }
}

impl FileInfoEx for GzipFileInfo {
    fn md5_checksum(&self) -> &str {
        &self.md5_checksum
    }
}

#[allow(dead_code)]
fn gzip_unix_time(secs: i64) -> SystemTime {
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
    }
}

#[allow(dead_code)]
fn gzip_from_disk(
    path: &std::path::Path,
    name: &'static str,
    mode: u32,
    mod_time: i64,
) -> io::Result<GzipAsset> {
    use std::io::Write as _;

    let content = std::fs::read(path)?;
    let meta = std::fs::metadata(path)?;

    let mut encoder = flate2::write::GzEncoder::new(
        Vec::new(),
        flate2::Compression::new(6),
    );
    encoder.write_all(&content)?;
    let bytes = encoder.finish()?;

    let mode = if mode > 0 { mode & 0o777 } else { gzip_file_mode(&meta) };
    let mod_time = if mod_time != 0 {
        gzip_unix_time(mod_time)
    } else {
        let secs = match meta.modified()?.duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            Err(before) => -(before.duration().as_secs() as i64),
        };
        gzip_unix_time(secs)
    };

    let info = GzipFileInfo {
        name,
        size: content.len() as u64,
        mode,
        mod_time,
        md5_checksum: Cow::Owned(gzip_checksum(&content)),
    };

    Ok(GzipAsset {
        bytes: Cow::Owned(bytes),
        info,
    })
}

#[cfg(unix)]
fn gzip_file_mode(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt as _;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn gzip_file_mode(meta: &std::fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o666 }
}

fn gzip_checksum(content: &[u8]) -> String {
    use md5::Digest as _;
    md5::Md5::digest(content)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn gzip_root_dir() -> &'static std::path::Path {
    std::path::Path::new(super::BINDATA_ROOT_DIR)
}

const GZIP_TABLE: &[(&str, GzipAssetFn)] = &[
    ("data/foo.txt", asset_data_foo_txt::data_foo_txt_asset as GzipAssetFn),
    ("data/img/pixel.bin", asset_data_img_pixel_bin::data_img_pixel_bin_asset as GzipAssetFn),
    ("hello.txt", asset_hello_txt::hello_txt_asset as GzipAssetFn),
    ("index.html", asset_index_html::index_html_asset as GzipAssetFn),
];

const GZIP_BINTREE: GzipBintree = GzipBintree::Dir(&[
    ("data", GzipBintree::Dir(&[
        ("foo.txt", GzipBintree::Leaf(asset_data_foo_txt::data_foo_txt_asset as GzipAssetFn)),
        ("img", GzipBintree::Dir(&[
            ("pixel.bin", GzipBintree::Leaf(asset_data_img_pixel_bin::data_img_pixel_bin_asset as GzipAssetFn)),
        ])),
    ])),
    ("hello.txt", GzipBintree::Leaf(asset_hello_txt::hello_txt_asset as GzipAssetFn)),
    ("index.html", GzipBintree::Leaf(asset_index_html::index_html_asset as GzipAssetFn)),
]);

/// One node of the asset namespace.
#[derive(Debug)]
pub enum GzipBintree {
    Leaf(GzipAssetFn),
    /// Children sorted by segment name.
    Dir(&'static [(&'static str, GzipBintree)]),
}

/// Immutable lookup structure over every embedded asset.
#[derive(Debug)]
pub struct GzipBindata {
    /// Sorted by name.
    table: &'static [(&'static str, GzipAssetFn)],
    tree: &'static GzipBintree,
}

pub static GZIP_BINDATA: GzipBindata = GzipBindata {
    table: GZIP_TABLE,
    tree: &GZIP_BINTREE,
};

/// The shared lookup structure of this module.
pub fn bindata() -> &'static GzipBindata {
    &GZIP_BINDATA
}

impl GzipBindata {
    /// Loads the gzip-compressed content of the named asset.
    pub fn get(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        self.get_asset(name).map(|asset| asset.bytes)
    }

    /// Like [`GzipBindata::get`] but panics when the asset is missing or unreadable.
    pub fn must_get(&self, name: &str) -> Cow<'static, [u8]> {
        match self.get(name) {
            Ok(bytes) => bytes,
            Err(err) => panic!("fixtures: get({}): {}", name, err),
        }
    }

    /// Loads the content and metadata of the named asset.
    pub fn get_asset(&self, name: &str) -> io::Result<GzipAsset> {
        let canonical = name.replace('\\', "/");
        match self
            .table
            .binary_search_by(|(key, _)| (*key).cmp(canonical.as_str()))
        {
            Ok(idx) => (self.table[idx].1)().map_err(|err| {
                io::Error::new(err.kind(), format!("asset {} can't be read: {}", name, err))
            }),
            Err(_) => Err(gzip_not_exist(name)),
        }
    }

    /// Loads the metadata of the named asset.
    pub fn get_info(&self, name: &str) -> io::Result<GzipFileInfo> {
        self.get_asset(name).map(|asset| asset.info)
    }

    /// Names of every embedded asset.
    pub fn list_names(&self) -> Vec<&'static str> {
        self.table.iter().map(|(name, _)| *name).collect()
    }

    /// Names directly below the directory `name`; `""` lists the top level.
    ///
    /// Fails with `NotFound` when `name` is an asset or does not exist.
    pub fn list_dir(&self, name: &str) -> io::Result<Vec<&'static str>> {
        let mut node = self.tree;
        if !name.is_empty() {
            let canonical = name.replace('\\', "/");
            for segment in canonical.split('/') {
                node = match node {
                    GzipBintree::Dir(children) => {
                        match children.binary_search_by(|(key, _)| (*key).cmp(segment)) {
                            Ok(idx) => &children[idx].1,
                            Err(_) => return Err(gzip_not_exist(name)),
                        }
                    }
                    GzipBintree::Leaf(_) => return Err(gzip_not_exist(name)),
                };
            }
        }

        match node {
            GzipBintree::Dir(children) => Ok(children.iter().map(|(key, _)| *key).collect()),
            GzipBintree::Leaf(_) => Err(gzip_not_exist(name)),
        }
    }
}

fn gzip_not_exist(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("open {}: file does not exist", name),
    )
}
