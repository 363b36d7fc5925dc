// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: dev
// sources:
//   index.html

#[allow(unused_imports)]
use super::*;

#[allow(non_snake_case)]
pub(super) fn index_html_asset() -> io::Result<GzipAsset> {
    let path = gzip_root_dir().join("index.html");
    gzip_from_disk(&path, "index.html", 0o644, 1600000000)
}
