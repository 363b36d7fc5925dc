// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: release
// sources:
//   hello.txt

#[allow(unused_imports)]
use super::*;

#[allow(non_upper_case_globals)]
static hello_txt_bytes: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\xff\xcbH\xcd\xc9\xc9\x07\x00\x86\xa6\x106\x05\x00\x00\x00";

#[allow(non_snake_case)]
pub(super) fn hello_txt_asset() -> io::Result<GzipAsset> {
    let info = GzipFileInfo {
        name: "hello.txt",
        size: 5,
        mode: 0o644,
        mod_time: gzip_unix_time(1600000000),
        md5_checksum: Cow::Borrowed("5d41402abc4b2a76b9719d911017c592"),
    };

    Ok(GzipAsset {
        bytes: Cow::Borrowed(hello_txt_bytes),
        info,
    })
}
