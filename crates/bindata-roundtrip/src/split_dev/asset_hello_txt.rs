// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: dev
// sources:
//   hello.txt

#[allow(unused_imports)]
use super::*;

#[allow(non_snake_case)]
pub(super) fn hello_txt_asset() -> io::Result<GzipAsset> {
    let path = gzip_root_dir().join("hello.txt");
    gzip_from_disk(&path, "hello.txt", 0o644, 1600000000)
}
