//! The flat binary artifact format.
//!
//! An artifact is a plain sequence of 8-byte little-endian unsigned
//! integers in source order, with no header, footer, padding, or length
//! prefix. The consumer side reads the file back as a `u64` slice, so both
//! directions live here.

use std::fs;
use std::path::Path;

/// Encode codes as flat little-endian bytes.
pub fn encode_codes(codes: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 8);
    for &code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
    out
}

/// Decode failure.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// Artifact length is not a whole number of 8-byte codes.
    #[error("artifact length {len} is not a multiple of 8")]
    TruncatedCodes { len: usize },
}

/// Decode a flat little-endian artifact back into codes.
pub fn decode_codes(bytes: &[u8]) -> Result<Vec<u64>, DecodeError> {
    if bytes.len() % 8 != 0 {
        return Err(DecodeError::TruncatedCodes { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(8)
        .map(|chunk| u64::from_le_bytes(chunk.try_into().expect("8-byte chunk")))
        .collect())
}

/// Encode `codes` and write them to `path`, returning the byte count.
///
/// Overwrites any existing artifact; an empty code list produces a 0-byte
/// file.
pub fn write_bin(path: &Path, codes: &[u64]) -> std::io::Result<usize> {
    let bytes = encode_codes(codes);
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}
