#![no_std]

extern crate alloc;

pub mod alphabet;
pub mod cipher;
pub mod columnar;
pub mod error;
pub mod modern;
pub mod playfair;
pub mod rail_fence;
pub mod vigenere;

pub use cipher::Cipher;
pub use error::ErrorKind;
