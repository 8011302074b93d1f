use crate::constants::{LOWER_RANGE, UPPER_RANGE};
use crate::error::{CipherError, Result};

/// Returns true when every character of `text` lies in the cipher alphabet.
pub fn is_in_bounds(text: &str) -> bool {
    check_bounds(text).is_ok()
}

/// Like [`is_in_bounds`], but reports the first offending character.
pub(crate) fn check_bounds(text: &str) -> Result<()> {
    match text.chars().enumerate().find(|(_, c)| !in_alphabet(*c)) {
        Some((position, character)) => Err(CipherError::OutOfBounds {
            character,
            position,
        }),
        None => Ok(()),
    }
}

pub(crate) fn in_alphabet(c: char) -> bool {
    (u32::from(LOWER_RANGE)..=u32::from(UPPER_RANGE)).contains(&u32::from(c))
}

/// Key as UTF-16 code units; a char above U+FFFF takes two key positions.
pub(crate) fn key_codes(key: &str) -> Vec<u16> {
    key.encode_utf16().collect()
}

/// Repeats `key` until it covers `len` positions, then cuts it to `len`.
/// A key at least as long as the text is only cut. `key` must not be empty
/// unless `len` is zero.
pub(crate) fn expand_key(key: &[u16], len: usize) -> Vec<u16> {
    if key.len() < len {
        let mut full = key.repeat(len.div_ceil(key.len()));
        full.truncate(len);
        full
    } else {
        key[..len].to_vec()
    }
}

/// In-bounds input never shifts into the surrogate block, so the
/// replacement character is unreachable from the cipher operations.
pub(crate) fn code_to_char(code: u16) -> char {
    char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER)
}
