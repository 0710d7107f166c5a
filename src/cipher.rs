use alloc::string::String;
use core::fmt;

use crate::error::ErrorKind;
use crate::{columnar, playfair, rail_fence, vigenere};

/// Classical cipher selected together with its key
#[derive(Clone, Debug, PartialEq)]
pub enum Cipher {
    Playfair { key: String },
    Vigenere { key: String },
    Columnar { key: String },
    RailFence { rails: usize },
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Playfair(playfair::Error),
    Vigenere(vigenere::Error),
    Columnar(columnar::Error),
    RailFence(rail_fence::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Playfair(e) => e.kind(),
            Error::Vigenere(e) => e.kind(),
            Error::Columnar(e) => e.kind(),
            Error::RailFence(e) => e.kind(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Playfair(e) => write!(f, "playfair: {}", e),
            Error::Vigenere(e) => write!(f, "vigenere: {}", e),
            Error::Columnar(e) => write!(f, "columnar: {}", e),
            Error::RailFence(e) => write!(f, "rail fence: {}", e),
        }
    }
}

impl From<playfair::Error> for Error {
    fn from(e: playfair::Error) -> Self {
        Error::Playfair(e)
    }
}

impl From<vigenere::Error> for Error {
    fn from(e: vigenere::Error) -> Self {
        Error::Vigenere(e)
    }
}

impl From<columnar::Error> for Error {
    fn from(e: columnar::Error) -> Self {
        Error::Columnar(e)
    }
}

impl From<rail_fence::Error> for Error {
    fn from(e: rail_fence::Error) -> Self {
        Error::RailFence(e)
    }
}

impl Cipher {
    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Playfair { .. } => "Playfair",
            Cipher::Vigenere { .. } => "Vigenere",
            Cipher::Columnar { .. } => "Columnar",
            Cipher::RailFence { .. } => "Rail Fence",
        }
    }

    pub fn encode(&self, text: &str) -> Result<String, Error> {
        Ok(match self {
            Cipher::Playfair { key } => playfair::encode(text, key)?,
            Cipher::Vigenere { key } => vigenere::encode(text, key)?,
            Cipher::Columnar { key } => columnar::encode(text, key)?,
            Cipher::RailFence { rails } => rail_fence::encode(text, *rails)?,
        })
    }

    pub fn decode(&self, cipher: &str) -> Result<String, Error> {
        Ok(match self {
            Cipher::Playfair { key } => playfair::decode(cipher, key)?,
            Cipher::Vigenere { key } => vigenere::decode(cipher, key)?,
            Cipher::Columnar { key } => columnar::decode(cipher, key)?,
            Cipher::RailFence { rails } => rail_fence::decode(cipher, *rails)?,
        })
    }
}
