// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: dev
// sources:
//   data/foo.txt

#[allow(unused_imports)]
use super::*;

#[allow(non_snake_case)]
pub(super) fn data_foo_txt_asset() -> io::Result<GzipAsset> {
    let path = gzip_root_dir().join("data/foo.txt");
    gzip_from_disk(&path, "data/foo.txt", 0o644, 1600000000)
}
