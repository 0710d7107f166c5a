use alloc::vec::Vec;

use rand::{thread_rng, RngCore};

use craes::{aes, cbc, pkcs7};

pub const KEY_LEN: usize = aes::KEY_LEN_128;
pub const IV_LEN: usize = cbc::IV_LEN;

#[derive(Debug)]
pub enum Error {
    Cbc(cbc::Error),
    InvalidPadding,
}

/// Derive an AES-128 key from text
///
/// Zero-pads short keys, truncates long ones
pub fn derive_key(key: &str) -> [u8; KEY_LEN] {
    let mut res = [0_u8; KEY_LEN];
    let key = key.as_bytes();
    let len = core::cmp::min(key.len(), KEY_LEN);
    res[..len].copy_from_slice(&key[..len]);
    res
}

/// Generate a random CBC IV
pub fn gen_rand_iv() -> [u8; IV_LEN] {
    let mut iv = [0_u8; IV_LEN];
    thread_rng().fill_bytes(&mut iv);
    iv
}

/// PKCS#7 pad and encrypt the plaintext with AES-128-CBC under a fresh random IV
///
/// Returns the IV along with the ciphertext
pub fn encrypt_cbc(plaintext: &[u8], key: &str) -> Result<([u8; IV_LEN], Vec<u8>), Error> {
    let key = derive_key(key);
    let iv = gen_rand_iv();

    let ciphertext = cbc::encrypt(&pkcs7::pad(plaintext), &key, &iv).map_err(|e| Error::Cbc(e))?;

    Ok((iv, ciphertext))
}

/// Decrypt AES-128-CBC ciphertext, and strip the PKCS#7 padding
///
/// errors: returns Error::InvalidPadding when the key or IV is wrong, or the ciphertext was altered
pub fn decrypt_cbc(iv: &[u8; IV_LEN], ciphertext: &[u8], key: &str) -> Result<Vec<u8>, Error> {
    let key = derive_key(key);

    let padded = cbc::decrypt(ciphertext, &key, iv).map_err(|e| Error::Cbc(e))?;

    pkcs7::unpad(&padded)
        .map(|msg| msg.to_vec())
        .map_err(|_| Error::InvalidPadding)
}
