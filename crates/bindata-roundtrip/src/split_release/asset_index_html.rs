// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: release
// sources:
//   index.html

#[allow(unused_imports)]
use super::*;

#[allow(non_upper_case_globals)]
static index_html_bytes: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\xff\xb3QL\xc9O.\xa9,HU\xc8(\xc9\xcd\xb1\xe3\xb2)\xc9,\xc9I\xb5K\xca\xccKI,I\xb4\xd1\x87p\xb9\x0039\x12Z'\x00\x00\x00";

#[allow(non_snake_case)]
pub(super) fn index_html_asset() -> io::Result<GzipAsset> {
    let info = GzipFileInfo {
        name: "index.html",
        size: 39,
        mode: 0o644,
        mod_time: gzip_unix_time(1600000000),
        md5_checksum: Cow::Borrowed("b3b88187cc549a18eb9afe4e60512970"),
    };

    Ok(GzipAsset {
        bytes: Cow::Borrowed(index_html_bytes),
        info,
    })
}
