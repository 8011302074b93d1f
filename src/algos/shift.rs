use crate::constants::{LOWER_RANGE, RANGE, UPPER_RANGE};
use crate::error::{CipherError, Result};
use crate::utils::{code_to_char, in_alphabet};

/// How a shifted character is brought back into the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Truncating `key % RANGE`, then a single subtraction of `RANGE` when the
    /// result passes `'_'`. Nothing is added back when a negative key drops
    /// the result below `' '`.
    #[default]
    Legacy,
    /// Euclidean modulo over the alphabet; any key lands inside it.
    Symmetric,
}

impl WrapMode {
    pub(crate) fn shift_code(self, code: u16, key: i32) -> u16 {
        let range = i32::from(RANGE);

        match self {
            WrapMode::Legacy => {
                // 16-bit wrap, same as a char cast
                let shifted = (i32::from(code) + key % range) as u16;
                if shifted > UPPER_RANGE {
                    shifted - RANGE
                } else {
                    shifted
                }
            }
            WrapMode::Symmetric => {
                let offset = (i32::from(code) - i32::from(LOWER_RANGE) + key.rem_euclid(range))
                    .rem_euclid(range);
                LOWER_RANGE + offset as u16
            }
        }
    }

    /// Key code that undoes a shift by `code`.
    pub(crate) fn invert_key_code(self, code: u16) -> u16 {
        match self {
            WrapMode::Legacy => RANGE.wrapping_sub(code),
            WrapMode::Symmetric => (RANGE - code % RANGE) % RANGE,
        }
    }
}

/// Shifts `ch` by `key` using [`WrapMode::Legacy`].
///
/// `ch` has to be in the alphabet. With a negative key the result may fall
/// below `' '`; use [`shift_character_with`] and [`WrapMode::Symmetric`] to
/// always stay inside.
pub fn shift_character(ch: char, key: i32) -> Result<char> {
    shift_character_with(WrapMode::Legacy, ch, key)
}

/// [`shift_character`] with an explicit [`WrapMode`].
pub fn shift_character_with(mode: WrapMode, ch: char, key: i32) -> Result<char> {
    if !in_alphabet(ch) {
        return Err(CipherError::OutOfBounds {
            character: ch,
            position: 0,
        });
    }

    Ok(code_to_char(mode.shift_code(ch as u16, key)))
}
