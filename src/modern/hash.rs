use alloc::string::String;

use isha2::Sha2;

pub const DIGEST_LEN: usize = isha2::sha256::DIGEST_LEN;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// SHA-256 digest of the given bytes
pub fn sha256(bytes: &[u8]) -> Result<[u8; DIGEST_LEN], isha2::Error> {
    isha2::sha256::Sha256::digest(bytes)
}

/// Lowercase hex encoding of a byte slice
pub fn to_hex(bytes: &[u8]) -> String {
    let mut res = String::with_capacity(bytes.len() * 2);
    for &b in bytes.iter() {
        res.push(HEX_DIGITS[(b >> 4) as usize] as char);
        res.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    res
}

/// Lowercase hex SHA-256 digest of the UTF-8 text
pub fn sha256_hex(text: &str) -> Result<String, isha2::Error> {
    let digest = sha256(text.as_bytes())?;
    Ok(to_hex(digest.as_ref()))
}
