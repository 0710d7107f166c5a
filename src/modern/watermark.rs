//! Least-significant-bit watermark over a flattened RGB pixel buffer
//!
//! The mark is the first `MARK_LEN` hex characters of SHA-256(key || secret),
//! written MSB first, one bit per channel byte, from the start of the buffer.

use alloc::string::String;
use alloc::vec::Vec;

use super::hash::sha256_hex;

/// Number of hex characters embedded
pub const MARK_LEN: usize = 16;

const BITS_PER_BYTE: usize = 8;

#[derive(Debug)]
pub enum Error {
    Sha256(isha2::Error),
    /// Buffer holds fewer channel bytes than bits to embed or extract
    Capacity { needed: usize, capacity: usize },
    /// Extracted bytes are not UTF-8
    Encoding,
}

/// Watermark for the secret text under the key
pub fn mark(secret: &str, key: &str) -> Result<String, Error> {
    let mut input = String::with_capacity(key.len() + secret.len());
    input.push_str(key);
    input.push_str(secret);

    let mut digest = sha256_hex(&input).map_err(|e| Error::Sha256(e))?;
    digest.truncate(MARK_LEN);
    Ok(digest)
}

/// Embed the keyed watermark for the secret into the pixel buffer
///
/// Returns the embedded mark
pub fn embed(pixels: &mut [u8], secret: &str, key: &str) -> Result<String, Error> {
    let wm = mark(secret, key)?;
    embed_bytes(pixels, wm.as_bytes())?;

    log::debug!("embedded watermark {}", wm);
    Ok(wm)
}

/// Write each bit of the data into the low bit of successive channel bytes
pub fn embed_bytes(pixels: &mut [u8], data: &[u8]) -> Result<(), Error> {
    let needed = data.len() * BITS_PER_BYTE;
    if pixels.len() < needed {
        return Err(Error::Capacity {
            needed,
            capacity: pixels.len(),
        });
    }

    for (i, px) in pixels[..needed].iter_mut().enumerate() {
        let bit = (data[i / BITS_PER_BYTE] >> (7 - i % BITS_PER_BYTE)) & 1;
        *px = (*px & 0xfe) | bit;
    }

    Ok(())
}

/// Read `len` bytes back out of the low bits of the pixel buffer
pub fn extract_bytes(pixels: &[u8], len: usize) -> Result<Vec<u8>, Error> {
    let needed = len * BITS_PER_BYTE;
    if pixels.len() < needed {
        return Err(Error::Capacity {
            needed,
            capacity: pixels.len(),
        });
    }

    Ok(pixels[..needed]
        .chunks_exact(BITS_PER_BYTE)
        .map(|bits| bits.iter().fold(0_u8, |acc, px| (acc << 1) | (px & 1)))
        .collect())
}

/// Extract a `len` character watermark from the pixel buffer
///
/// Leading NUL bytes are dropped
pub fn extract(pixels: &[u8], len: usize) -> Result<String, Error> {
    let bytes = extract_bytes(pixels, len)?;
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());

    String::from_utf8(bytes[start..].to_vec()).map_err(|_| Error::Encoding)
}
