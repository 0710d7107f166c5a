use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::{letter, letter_index, normalize, ALPHABET_LEN};
use crate::error::ErrorKind;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
    /// Key character that is not a letter (whitespace included)
    InvalidKey(char),
    /// Text character that is not a letter after normalizing
    InvalidLetter(char),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyKey | Error::InvalidKey(_) => ErrorKind::InvalidKey,
            Error::InvalidLetter(_) => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyKey => f.write_str("Vigenere key is empty"),
            Error::InvalidKey(c) => write!(f, "{:?} is not a valid Vigenere key letter", c),
            Error::InvalidLetter(c) => write!(f, "{:?} is not a letter", c),
        }
    }
}

/// Repeat the key to cover exactly `len` letters, as alphabet positions
///
/// The key is uppercased, but its whitespace is not stripped
///
/// Example:
///
/// ("LEMON", 12) -> "LEMONLEMONLE"
///
/// errors: returns Error on empty keys, and keys with non-letters
pub fn key_stream(key: &str, len: usize) -> Result<Vec<u8>, Error> {
    let key = key
        .chars()
        .flat_map(|c| c.to_uppercase())
        .map(|c| letter_index(c).ok_or(Error::InvalidKey(c)))
        .collect::<Result<Vec<u8>, Error>>()?;

    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    Ok(key.iter().cycle().take(len).copied().collect())
}

/// Encrypt text by adding the repeating key, modulo 26
pub fn encode(text: &str, key: &str) -> Result<String, Error> {
    shift(text, key, |t, k| t + k)
}

/// Decrypt text by subtracting the repeating key, modulo 26
pub fn decode(cipher: &str, key: &str) -> Result<String, Error> {
    shift(cipher, key, |c, k| c + ALPHABET_LEN - k)
}

fn shift<F: Fn(u8, u8) -> u8>(text: &str, key: &str, op: F) -> Result<String, Error> {
    let text = normalize(text);
    let stream = key_stream(key, text.len())?;

    let mut res = String::with_capacity(text.len());
    for (&c, &k) in text.iter().zip(stream.iter()) {
        let t = letter_index(c).ok_or(Error::InvalidLetter(c))?;
        res.push(letter(op(t, k)));
    }

    Ok(res)
}
