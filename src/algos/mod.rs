//! The cipher engine: character shifting plus the Caesar and Bellaso ciphers
//! built on it.

pub mod bellaso;
pub mod caesar;
pub mod shift;
