use log::{debug, trace};

use crate::algos::shift::WrapMode;
use crate::error::{CipherError, Result};
use crate::structs::Bellaso;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{check_bounds, code_to_char, expand_key, key_codes};

/// Encrypts `plain_text`, shifting each character by the code of the key
/// character at the same position. The key repeats as often as needed.
pub fn bellaso_encrypt(plain_text: &str, key: &str) -> Result<String> {
    bellaso_encrypt_with(WrapMode::Legacy, plain_text, key)
}

/// [`bellaso_encrypt`] with an explicit [`WrapMode`].
pub fn bellaso_encrypt_with(mode: WrapMode, plain_text: &str, key: &str) -> Result<String> {
    encrypt_codes(mode, plain_text, &key_codes(key))
}

/// Inverse of [`bellaso_encrypt`] for the same key. A different key yields
/// garbage, not an error.
pub fn bellaso_decrypt(encrypted_text: &str, key: &str) -> Result<String> {
    bellaso_decrypt_with(WrapMode::Legacy, encrypted_text, key)
}

/// [`bellaso_decrypt`] with an explicit [`WrapMode`]; key codes are inverted
/// the way `mode` prescribes.
pub fn bellaso_decrypt_with(mode: WrapMode, encrypted_text: &str, key: &str) -> Result<String> {
    let inverted: Vec<u16> = key_codes(key)
        .into_iter()
        .map(|code| mode.invert_key_code(code))
        .collect();

    encrypt_codes(mode, encrypted_text, &inverted)
}

/// Core of every operation: bounds gate, key expansion, per-position shift.
pub(crate) fn encrypt_codes(mode: WrapMode, text: &str, key: &[u16]) -> Result<String> {
    if let Err(e) = check_bounds(text) {
        debug!("rejecting input: {e}");
        return Err(e);
    }

    if key.is_empty() {
        debug!("rejecting empty key");
        return Err(CipherError::EmptyKey);
    }

    // in-bounds text is ASCII, so bytes and chars line up
    let full_key = expand_key(key, text.len());
    let output: String = text
        .bytes()
        .zip(full_key)
        .map(|(b, k)| code_to_char(mode.shift_code(u16::from(b), i32::from(k))))
        .collect();

    trace!(
        "shifted {} chars with a {}-char key ({mode:?})",
        output.len(),
        key.len()
    );

    Ok(output)
}

impl Encryptor for Bellaso {
    fn encrypt(&self, message: &str) -> Result<String> {
        bellaso_encrypt_with(self.mode, message, &self.key)
    }
}

impl Decryptor for Bellaso {
    fn decrypt(&self, message: &str) -> Result<String> {
        bellaso_decrypt_with(self.mode, message, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_cycles_over_text() {
        // 'A' shifts by 1, 'B' by 2
        assert_eq!(bellaso_encrypt("HELLO", "AB"), Ok("IGMNP".to_string()));
        assert_eq!(bellaso_decrypt("IGMNP", "AB"), Ok("HELLO".to_string()));
    }

    #[test]
    fn longer_key_is_truncated() {
        assert_eq!(bellaso_encrypt("HI", "ABCDEF"), bellaso_encrypt("HI", "AB"));
    }

    #[test]
    fn wraps_past_underscore() {
        // '_' (95) + ('A' % 64 = 1) wraps to ' '
        assert_eq!(bellaso_encrypt("__", "AB"), Ok(" !".to_string()));
        assert_eq!(bellaso_decrypt(" !", "AB"), Ok("__".to_string()));
    }

    #[test]
    fn round_trip_with_punctuation() {
        let plain = "MEET ME AT [10:30] _NOW_!";
        let key = "CMSC203";
        let encrypted = bellaso_encrypt(plain, key).unwrap();
        assert_eq!(encrypted.len(), plain.len());
        assert_ne!(encrypted, plain);
        assert_eq!(bellaso_decrypt(&encrypted, key).unwrap(), plain);
    }

    #[test]
    fn lowercase_is_out_of_bounds() {
        assert_eq!(
            bellaso_encrypt("abc", "KEY"),
            Err(CipherError::OutOfBounds {
                character: 'a',
                position: 0
            })
        );
        assert!(matches!(
            bellaso_decrypt("ABc", "KEY"),
            Err(CipherError::OutOfBounds { position: 2, .. })
        ));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(bellaso_encrypt("HELLO", ""), Err(CipherError::EmptyKey));
        assert_eq!(bellaso_encrypt("", ""), Err(CipherError::EmptyKey));
        assert_eq!(bellaso_decrypt("HELLO", ""), Err(CipherError::EmptyKey));
    }

    #[test]
    fn bounds_are_checked_before_key() {
        assert!(matches!(
            bellaso_encrypt("abc", ""),
            Err(CipherError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_text_with_key() {
        assert_eq!(bellaso_encrypt("", "KEY"), Ok(String::new()));
    }

    #[test]
    fn wrong_key_does_not_recover() {
        let encrypted = bellaso_encrypt("HELLO", "AB").unwrap();
        assert_ne!(bellaso_decrypt(&encrypted, "AC").unwrap(), "HELLO");
    }

    #[test]
    fn non_ascii_key_chars_are_allowed() {
        let encrypted = bellaso_encrypt("SECRET", "ключ").unwrap();
        assert_eq!(bellaso_decrypt(&encrypted, "ключ").unwrap(), "SECRET");
    }

    #[test]
    fn astral_key_char_counts_as_two_positions() {
        // U+1F600 is the pair 0xD83D (shift 61), 0xDE00 (shift 0)
        assert_eq!(bellaso_encrypt("AA", "\u{1F600}"), Ok(">A".to_string()));
        assert_eq!(bellaso_decrypt(">A", "\u{1F600}"), Ok("AA".to_string()));
    }

    #[test]
    fn symmetric_mode_matches_legacy_for_string_keys() {
        let legacy = bellaso_encrypt("THE QUICK BROWN FOX", "LEMON").unwrap();
        let symmetric =
            bellaso_encrypt_with(WrapMode::Symmetric, "THE QUICK BROWN FOX", "LEMON").unwrap();
        assert_eq!(legacy, symmetric);
        assert_eq!(
            bellaso_decrypt_with(WrapMode::Symmetric, &symmetric, "LEMON").unwrap(),
            "THE QUICK BROWN FOX"
        );
    }

    #[test]
    fn trait_objects_round_trip() {
        let cipher = Bellaso::new("KEY");
        let encrypted = cipher.encrypt("ATTACK AT DAWN").unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ATTACK AT DAWN");
    }
}
