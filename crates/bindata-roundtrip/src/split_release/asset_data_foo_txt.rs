// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: release
// sources:
//   data/foo.txt

#[allow(unused_imports)]
use super::*;

#[allow(non_upper_case_globals)]
static data_foo_txt_bytes: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\xffK\xcb\xcf\xe7\x02\x00\xa8e2~\x04\x00\x00\x00";

#[allow(non_snake_case)]
pub(super) fn data_foo_txt_asset() -> io::Result<GzipAsset> {
    let info = GzipFileInfo {
        name: "data/foo.txt",
        size: 4,
        mode: 0o644,
        mod_time: gzip_unix_time(1600000000),
        md5_checksum: Cow::Borrowed("d3b07384d113edec49eaa6238ad5ff00"),
    };

    Ok(GzipAsset {
        bytes: Cow::Borrowed(data_foo_txt_bytes),
        info,
    })
}
