//! Gzip compression into Rust byte-string literals
//!
//! The compressed stream is written as `b"..."`. Printable ASCII goes through
//! unchanged, the delimiter and the escape character are backslash-escaped,
//! and every other byte becomes a `\xNN` escape. Raw non-ASCII bytes (a
//! byte-order mark in particular) never reach the generated source.

use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::write::GzEncoder;
use md5::{Digest, Md5};

/// Gzip level used for every asset, in release output and in debug accessors.
pub const COMPRESSION_LEVEL: u32 = 6;

/// Writer that escapes everything it receives as the body of a byte-string literal.
pub struct LiteralWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    written: u64,
}

impl<W: Write> LiteralWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(4096),
            written: 0,
        }
    }

    /// Raw bytes received so far, before escaping.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LiteralWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.clear();
        for &byte in data {
            escape_byte(byte, &mut self.buf);
        }
        self.inner.write_all(&self.buf)?;
        self.written += data.len() as u64;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn escape_byte(byte: u8, out: &mut Vec<u8>) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    match byte {
        b'"' => out.extend_from_slice(b"\\\""),
        b'\\' => out.extend_from_slice(b"\\\\"),
        0x20..=0x7e => out.push(byte),
        _ => {
            out.extend_from_slice(b"\\x");
            out.push(HEX[(byte >> 4) as usize]);
            out.push(HEX[(byte & 0x0f) as usize]);
        }
    }
}

/// Reader adapter that counts and optionally hashes what passes through it.
struct TeeReader<R> {
    inner: R,
    read: u64,
    hasher: Option<Md5>,
}

impl<R: Read> Read for TeeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.read += n as u64;
        if let Some(hasher) = self.hasher.as_mut() {
            hasher.update(&buf[..n]);
        }
        Ok(n)
    }
}

/// Sizes and digest observed while encoding one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Uncompressed bytes consumed
    pub size: u64,
    /// Gzip stream length
    pub compressed: u64,
    /// Hex MD5 of the uncompressed bytes, when requested
    pub md5: Option<String>,
}

/// Stream `reader` through gzip and write the result to `out` as a complete
/// `b"..."` literal.
pub fn write_compressed_literal<R: Read, W: Write>(
    reader: R,
    out: &mut W,
    checksum: bool,
) -> io::Result<Encoded> {
    let mut tee = TeeReader {
        inner: reader,
        read: 0,
        hasher: checksum.then(Md5::new),
    };

    out.write_all(b"b\"")?;
    let mut gz = GzEncoder::new(LiteralWriter::new(&mut *out), Compression::new(COMPRESSION_LEVEL));
    io::copy(&mut tee, &mut gz)?;
    let literal = gz.finish()?;
    let compressed = literal.written();
    out.write_all(b"\"")?;

    Ok(Encoded {
        size: tee.read,
        compressed,
        md5: tee.hasher.map(|h| hex::encode(h.finalize())),
    })
}

/// Hex MD5 digest of `content`.
pub fn md5_hex(content: &[u8]) -> String {
    hex::encode(Md5::digest(content))
}
