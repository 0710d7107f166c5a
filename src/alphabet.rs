use alloc::vec::Vec;

/// Size of the Latin alphabet used for modular shifts
pub const ALPHABET_LEN: u8 = 26;

/// Full uppercase alphabet, A=0
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet with J folded into I, laid out in the Playfair square
pub const PLAYFAIR_ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Uppercase the text, and drop all whitespace
///
/// Letters outside A-Z are kept, validating them is left to each cipher
pub fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Drop all whitespace, leaving case untouched
pub fn strip_spaces(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Fold J into I, the Playfair square has no cell for J
pub fn merge_j(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}

/// Zero-indexed alphabet position of an uppercase letter (A=0)
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter at the alphabet position, taken modulo 26
pub fn letter(idx: u8) -> char {
    ALPHABET[(idx % ALPHABET_LEN) as usize] as char
}
