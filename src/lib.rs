//! Caesar and Bellaso substitution ciphers over the printable range
//! `' '..='_'`.
//!
//! A teaching utility, not a security primitive. Every operation is a pure
//! function that rejects text outside the alphabet with
//! [`CipherError::OutOfBounds`] before transforming anything.
//!
//! ```
//! use crypto_manager::{bellaso_decrypt, bellaso_encrypt};
//!
//! let secret = bellaso_encrypt("HELLO", "AB").unwrap();
//! assert_eq!(secret, "IGMNP");
//! assert_eq!(bellaso_decrypt(&secret, "AB").unwrap(), "HELLO");
//! ```

pub mod algos;
pub mod constants;
pub mod error;
pub mod structs;
pub mod traits;
mod utils;

pub use algos::bellaso::{
    bellaso_decrypt, bellaso_decrypt_with, bellaso_encrypt, bellaso_encrypt_with,
};
pub use algos::caesar::{caesar_decrypt, caesar_decrypt_with, caesar_encrypt, caesar_encrypt_with};
pub use algos::shift::{shift_character, shift_character_with, WrapMode};
pub use error::{CipherError, Result};
pub use structs::{Bellaso, Caesar};
pub use traits::{Decryptor, Encryptor};
pub use utils::is_in_bounds;
