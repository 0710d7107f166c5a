use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};

use crate::alphabet::{merge_j, PLAYFAIR_ALPHABET};

use super::Error;

/// Side length of the Playfair square
pub const SIZE: usize = 5;

/// 5x5 Playfair key square
///
/// Holds each of the 25 letters (I/J merged) exactly once,
/// along with a reverse table from letter to (row, col)
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMatrix {
    cells: [[char; SIZE]; SIZE],
    positions: HashMap<char, (usize, usize)>,
}

impl KeyMatrix {
    /// Build the key square
    ///
    /// Key letters go first in first-occurrence order, then the rest of the alphabet.
    /// Characters outside A-Z are ignored, lowercase letters are folded up first.
    pub fn build(key: &str) -> Self {
        let mut used: Vec<char> = Vec::with_capacity(SIZE * SIZE);
        let mut seen: HashSet<char> = HashSet::with_capacity(SIZE * SIZE);

        let key_letters = key
            .chars()
            .map(|c| merge_j(c.to_ascii_uppercase()))
            .filter(|c| c.is_ascii_uppercase());

        let rest = PLAYFAIR_ALPHABET.iter().map(|&b| b as char);

        for c in key_letters.chain(rest) {
            if seen.insert(c) {
                used.push(c);
            }
        }

        let mut cells = [[' '; SIZE]; SIZE];
        let mut positions = HashMap::with_capacity(SIZE * SIZE);

        // the fixed 25-letter universe always fills the square exactly
        for (i, &c) in used.iter().enumerate() {
            let (row, col) = (i / SIZE, i % SIZE);
            cells[row][col] = c;
            positions.insert(c, (row, col));
        }

        let res = Self { cells, positions };
        log::trace!("playfair key square:\n{}", res);
        res
    }

    /// Find the (row, col) cell holding the letter
    ///
    /// errors: returns Error::Lookup for letters outside the square (J, lowercase, non-letters)
    pub fn locate(&self, letter: char) -> Result<(usize, usize), Error> {
        self.positions
            .get(&letter)
            .copied()
            .ok_or(Error::Lookup(letter))
    }

    /// Letter at the given cell, coordinates wrap modulo the square size
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    /// Rows of the square, top to bottom
    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            for (j, c) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
