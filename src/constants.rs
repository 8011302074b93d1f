/// Lowest character code of the cipher alphabet.
pub const LOWER_RANGE: u16 = b' ' as u16;
/// Highest character code of the cipher alphabet.
pub const UPPER_RANGE: u16 = b'_' as u16;
/// Number of characters in the alphabet.
pub const RANGE: u16 = UPPER_RANGE - LOWER_RANGE + 1;
