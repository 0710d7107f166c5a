use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::strip_spaces;
use crate::error::ErrorKind;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Rail count outside 1..=len+1 for the given text length
    Rails { rails: usize, len: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Rails { rails, len } => {
                write!(f, "{} rails is out of range for text of length {}", rails, len)
            }
        }
    }
}

/// Rail occupied by each column of the zigzag
///
/// The cursor starts on rail 0, moves down, and turns around whenever it touches
/// the top or bottom rail. A single rail keeps every column on rail 0.
///
/// Example:
///
/// (3, 7) -> [0, 1, 2, 1, 0, 1, 2]
pub fn rail_path(rails: usize, len: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(len);
    let mut row = 0_usize;
    let mut down = false;

    for _ in 0..len {
        path.push(row);

        if rails < 2 {
            continue;
        }
        if row == 0 || row == rails - 1 {
            down = !down;
        }
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }

    log::trace!("rail path ({} rails): {:?}", rails, path);
    path
}

fn check_rails(rails: usize, len: usize) -> Result<(), Error> {
    if rails == 0 || rails > len + 1 {
        log::debug!("rejecting {} rails for text of length {}", rails, len);
        return Err(Error::Rails { rails, len });
    }
    Ok(())
}

/// Encrypt text by writing it along the zigzag, then reading rail by rail
///
/// Whitespace is stripped, case is left as is
///
/// errors: returns Error when `rails` is zero, or more than one past the text length
pub fn encode(text: &str, rails: usize) -> Result<String, Error> {
    let text = strip_spaces(text);
    let len = text.len();
    check_rails(rails, len)?;

    let mut fence: Vec<Vec<Option<char>>> = vec![vec![None; len]; rails];
    for (col, (&row, &c)) in rail_path(rails, len).iter().zip(text.iter()).enumerate() {
        fence[row][col] = Some(c);
    }

    Ok(fence.into_iter().flatten().flatten().collect())
}

/// Decrypt a rail fence ciphertext
///
/// errors: returns Error when `rails` is zero, or more than one past the text length
pub fn decode(cipher: &str, rails: usize) -> Result<String, Error> {
    let cipher = strip_spaces(cipher);
    let len = cipher.len();
    check_rails(rails, len)?;

    let path = rail_path(rails, len);

    // mark the cells the zigzag occupies
    let mut marked = vec![vec![false; len]; rails];
    for (col, &row) in path.iter().enumerate() {
        marked[row][col] = true;
    }

    // fill the marked cells rail by rail, left to right
    let mut fence: Vec<Vec<Option<char>>> = vec![vec![None; len]; rails];
    let mut chars = cipher.iter();
    for (row, cells) in marked.iter().enumerate() {
        for col in (0..len).filter(|&col| cells[col]) {
            fence[row][col] = chars.next().copied();
        }
    }

    // read back along the zigzag
    Ok(path
        .iter()
        .enumerate()
        .filter_map(|(col, &row)| fence[row][col])
        .collect())
}
