use crate::algos::shift::WrapMode;

/// Caesar cipher with a fixed integer shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    /// Shift amount; only its value modulo 64 matters.
    pub key: i32,
    /// How shifted characters wrap back into the alphabet.
    pub mode: WrapMode,
}

/// Bellaso cipher with a repeating key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bellaso {
    /// Each UTF-16 unit shifts by its raw code. Must not be empty.
    pub key: String,
    /// How shifted characters wrap back into the alphabet.
    pub mode: WrapMode,
}

impl Caesar {
    /// Caesar cipher using [`WrapMode::Legacy`].
    pub fn new(key: i32) -> Self {
        Caesar {
            key,
            mode: WrapMode::default(),
        }
    }

    /// Replaces the wrap mode.
    pub fn with_mode(self, mode: WrapMode) -> Self {
        Caesar { mode, ..self }
    }
}

impl Bellaso {
    /// Bellaso cipher using [`WrapMode::Legacy`].
    pub fn new(key: impl Into<String>) -> Self {
        Bellaso {
            key: key.into(),
            mode: WrapMode::default(),
        }
    }

    /// Replaces the wrap mode.
    pub fn with_mode(self, mode: WrapMode) -> Self {
        Bellaso { mode, ..self }
    }
}
