//! Playfair digraph substitution
//!
//! Known limitation: decoding does not remove the X fillers inserted between
//! repeated letters and at the end of odd-length text, so a round trip only
//! reproduces the digraph-padded plaintext.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::{merge_j, normalize};
use crate::error::ErrorKind;

mod matrix;

pub use matrix::*;

/// Filler splitting repeated letters, and padding a trailing single letter
pub const FILLER: char = 'X';

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Character has no cell in the key square
    Lookup(char),
    /// Ciphertext does not split into whole digraphs
    OddLength(usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lookup(_) => ErrorKind::Lookup,
            Error::OddLength(_) => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lookup(c) => write!(f, "{:?} is not in the Playfair square", c),
            Error::OddLength(len) => write!(f, "ciphertext length {} is not even", len),
        }
    }
}

/// Split text into Playfair digraphs
///
/// A pair of equal letters becomes (letter, X), and the second letter starts the next pair.
/// A trailing single letter is padded with X.
///
/// Example:
///
/// "TREESTUMP" -> TR EX ES TU MP
pub fn digraphs(text: &[char]) -> Vec<(char, char)> {
    let text_len = text.len();
    let mut res = Vec::with_capacity(text_len / 2 + 1);

    let mut i = 0;
    while i < text_len {
        let a = text[i];
        let b = if i + 1 < text_len { text[i + 1] } else { FILLER };

        if a == b {
            // re-read the repeated letter as the start of the next pair
            res.push((a, FILLER));
            i += 1;
        } else {
            res.push((a, b));
            i += 2;
        }
    }

    res
}

/// Encrypt text under the Playfair key
///
/// Text is uppercased, stripped of whitespace, and J is read as I
///
/// errors: returns Error::Lookup for characters that are not letters
pub fn encode(text: &str, key: &str) -> Result<String, Error> {
    let matrix = KeyMatrix::build(key);
    let text: Vec<char> = normalize(text).into_iter().map(merge_j).collect();

    let pairs = digraphs(&text);
    let mut res = String::with_capacity(pairs.len() * 2);

    for (a, b) in pairs {
        let (c, d) = shift_pair(&matrix, a, b, 1)?;
        res.push(c);
        res.push(d);
    }

    Ok(res)
}

/// Decrypt Playfair ciphertext under the key
///
/// Fillers inserted by `encode` are left in place
///
/// errors: returns Error::OddLength when the text does not split into digraphs,
/// Error::Lookup for characters outside the key square
pub fn decode(cipher: &str, key: &str) -> Result<String, Error> {
    let matrix = KeyMatrix::build(key);
    let cipher = normalize(cipher);

    if cipher.len() % 2 != 0 {
        log::debug!("rejecting odd-length Playfair ciphertext ({})", cipher.len());
        return Err(Error::OddLength(cipher.len()));
    }

    let mut res = String::with_capacity(cipher.len());

    for pair in cipher.chunks_exact(2) {
        // shifting forward by SIZE - 1 is a shift back by one
        let (c, d) = shift_pair(&matrix, pair[0], pair[1], SIZE - 1)?;
        res.push(c);
        res.push(d);
    }

    Ok(res)
}

// Apply the Playfair rules to one digraph, moving `step` cells along a shared row or column
fn shift_pair(matrix: &KeyMatrix, a: char, b: char, step: usize) -> Result<(char, char), Error> {
    let (r1, c1) = matrix.locate(a)?;
    let (r2, c2) = matrix.locate(b)?;

    Ok(if r1 == r2 {
        (matrix.at(r1, c1 + step), matrix.at(r2, c2 + step))
    } else if c1 == c2 {
        (matrix.at(r1 + step, c1), matrix.at(r2 + step, c2))
    } else {
        // rectangle: swap columns, the swap is its own inverse
        (matrix.at(r1, c2), matrix.at(r2, c1))
    })
}
