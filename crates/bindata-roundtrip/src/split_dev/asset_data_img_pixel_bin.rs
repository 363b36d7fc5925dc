// Code generated by bindata. DO NOT EDIT.
// package: fixtures
// mode: dev
// sources:
//   data/img/pixel.bin

#[allow(unused_imports)]
use super::*;

#[allow(non_snake_case)]
pub(super) fn data_img_pixel_bin_asset() -> io::Result<GzipAsset> {
    let path = gzip_root_dir().join("data/img/pixel.bin");
    gzip_from_disk(&path, "data/img/pixel.bin", 0o644, 1600000000)
}
