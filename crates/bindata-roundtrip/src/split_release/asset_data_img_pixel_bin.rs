// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: release
// sources:
//   data/img/pixel.bin

#[allow(unused_imports)]
use super::*;

#[allow(non_upper_case_globals)]
static data_img_pixel_bin_bytes: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\xff{\xbf{\xbfRai~Ij\x8a\x92B\x8cBRbr6CqNbq\xc6\x7f.\x00\xfa\x0d\x0eb\x1a\x00\x00\x00";

#[allow(non_snake_case)]
pub(super) fn data_img_pixel_bin_asset() -> io::Result<GzipAsset> {
    let info = GzipFileInfo {
        name: "data/img/pixel.bin",
        size: 26,
        mode: 0o644,
        mod_time: gzip_unix_time(1600000000),
        md5_checksum: Cow::Borrowed("f284c8ebaf64b5ea9659c1cd0eeecff4"),
    };

    Ok(GzipAsset {
        bytes: Cow::Borrowed(data_img_pixel_bin_bytes),
        info,
    })
}
