use crate::algos::bellaso::encrypt_codes;
use crate::algos::shift::WrapMode;
use crate::error::Result;
use crate::structs::Caesar;
use crate::traits::{Decryptor, Encryptor};

/// Caesar encryption: Bellaso with the one-character key whose code is `key`.
///
/// The key is cast to a 16-bit character code, so values outside
/// `0..=65535` are truncated. Only `key mod 64` affects the output.
pub fn caesar_encrypt(plain_text: &str, key: i32) -> Result<String> {
    caesar_encrypt_with(WrapMode::Legacy, plain_text, key)
}

/// [`caesar_encrypt`] with an explicit [`WrapMode`].
pub fn caesar_encrypt_with(mode: WrapMode, plain_text: &str, key: i32) -> Result<String> {
    encrypt_codes(mode, plain_text, &[key as u16])
}

/// Shifts back by `key`. Negation wraps, so `i32::MIN` is its own inverse.
pub fn caesar_decrypt(encrypted_text: &str, key: i32) -> Result<String> {
    caesar_decrypt_with(WrapMode::Legacy, encrypted_text, key)
}

/// [`caesar_decrypt`] with an explicit [`WrapMode`].
pub fn caesar_decrypt_with(mode: WrapMode, encrypted_text: &str, key: i32) -> Result<String> {
    caesar_encrypt_with(mode, encrypted_text, key.wrapping_neg())
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> Result<String> {
        caesar_encrypt_with(self.mode, message, self.key)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> Result<String> {
        caesar_decrypt_with(self.mode, message, self.key)
    }
}
