//! Columnar transposition keyed by the sorted order of the key's characters
//!
//! Known limitations, kept for compatibility with existing ciphertexts:
//!
//! - a repeated key character always resolves to its first column, so that column is
//!   read twice and the later duplicate column is never read (its cells are lost on decode)
//! - decoding strips every `_`, including any that were part of the plaintext

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::strip_spaces;
use crate::error::ErrorKind;

/// Right-padding used to fill the last row of the grid
pub const FILLER: char = '_';

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyKey,
    /// Ciphertext length does not fill a whole number of key-width rows
    Length { len: usize, cols: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyKey => ErrorKind::InvalidKey,
            Error::Length { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyKey => f.write_str("columnar key is empty"),
            Error::Length { len, cols } => write!(
                f,
                "ciphertext length {} is not a multiple of the key length {}",
                len, cols
            ),
        }
    }
}

/// Column read at each turn, in sorted key order
///
/// Duplicate key characters resolve to the first column holding that character
///
/// Example:
///
/// "DOG" -> [0, 2, 1]
/// "ABA" -> [0, 0, 1]
pub fn column_order(key: &[char]) -> Vec<usize> {
    let mut sorted = key.to_vec();
    sorted.sort_unstable();

    let order: Vec<usize> = sorted
        .iter()
        .map(|k| key.iter().position(|c| c == k).unwrap_or(0))
        .collect();

    log::trace!("columnar order: {:?}", order);
    order
}

/// Encrypt text with a columnar transposition
///
/// Whitespace is stripped, case is left as is
///
/// errors: returns Error::EmptyKey on an empty key
pub fn encode(text: &str, key: &str) -> Result<String, Error> {
    let key: Vec<char> = key.chars().collect();
    let cols = key.len();
    if cols == 0 {
        return Err(Error::EmptyKey);
    }

    let mut grid = strip_spaces(text);
    let rows = (grid.len() + cols - 1) / cols;
    grid.resize(rows * cols, FILLER);

    let mut res = String::with_capacity(grid.len());
    for col in column_order(&key) {
        for row in 0..rows {
            res.push(grid[row * cols + col]);
        }
    }

    Ok(res)
}

/// Decrypt a columnar transposition, dropping the filler from the result
///
/// errors: returns Error on an empty key, or ciphertext that does not fill the grid
pub fn decode(cipher: &str, key: &str) -> Result<String, Error> {
    let key: Vec<char> = key.chars().collect();
    let cols = key.len();
    if cols == 0 {
        return Err(Error::EmptyKey);
    }

    let cipher: Vec<char> = cipher.chars().collect();
    let cipher_len = cipher.len();
    if cipher_len % cols != 0 {
        log::debug!("rejecting columnar ciphertext of length {}", cipher_len);
        return Err(Error::Length {
            len: cipher_len,
            cols,
        });
    }

    let rows = cipher_len / cols;
    let mut grid: Vec<Option<char>> = vec![None; cipher_len];

    // each turn takes the next `rows` characters, top to bottom
    for (col, chunk) in column_order(&key)
        .into_iter()
        .zip(cipher.chunks(rows.max(1)))
    {
        for (row, &c) in chunk.iter().enumerate() {
            grid[row * cols + col] = Some(c);
        }
    }

    Ok(grid
        .into_iter()
        .flatten()
        .filter(|&c| c != FILLER)
        .collect())
}
