//! Closed symbol alphabets and the fixed-size tables indexed by them.
//!
//! Frequency vectors and rank tables assume a closed alphabet: every symbol
//! maps to a dense index `0..size`. Two alphabets are supported:
//!
//! - [`Alphabet::Lowercase`]: `'a'..='z'`, 26 symbols.
//! - [`Alphabet::Byte`]: `U+0000..=U+00FF`, 256 symbols.
//!
//! Tables are `ArrayVec<u32, MAX_SYMBOLS>` truncated to the alphabet size, so
//! they live on the stack regardless of which alphabet is configured.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::{KataError, Result};

/// Largest alphabet size any table has to hold.
pub const MAX_SYMBOLS: usize = 256;

/// One `u32` slot per alphabet symbol.
pub type SymbolTable = ArrayVec<u32, MAX_SYMBOLS>;

/// A closed alphabet with a dense symbol index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// `'a'..='z'`
    #[default]
    Lowercase,
    /// Every code point below 256
    Byte,
}

impl Alphabet {
    /// Number of symbols in the alphabet.
    #[inline(always)]
    pub const fn size(self) -> usize {
        match self {
            Alphabet::Lowercase => 26,
            Alphabet::Byte => 256,
        }
    }

    /// Dense index of `symbol`, or `OutOfAlphabet`.
    #[inline]
    pub fn index_of(self, symbol: char) -> Result<usize> {
        let code = symbol as u32;
        let idx = match self {
            Alphabet::Lowercase if symbol.is_ascii_lowercase() => Some((code - 'a' as u32) as usize),
            Alphabet::Byte if code < 256 => Some(code as usize),
            _ => None,
        };
        idx.ok_or(KataError::OutOfAlphabet {
            symbol,
            alphabet: self,
        })
    }

    /// Symbol at dense index `idx`.
    ///
    /// Panics in debug builds when `idx >= self.size()`.
    #[inline]
    pub fn symbol_at(self, idx: usize) -> char {
        debug_assert!(idx < self.size());
        let base = match self {
            Alphabet::Lowercase => b'a',
            Alphabet::Byte => 0,
        };
        char::from(base + idx as u8)
    }

    /// A zeroed table with one slot per symbol.
    #[inline]
    pub fn table(self) -> SymbolTable {
        let mut table = SymbolTable::new();
        table.extend(std::iter::repeat(0).take(self.size()));
        table
    }

    /// Count every symbol of `text` into a fresh table.
    pub fn count(self, text: &str) -> Result<SymbolTable> {
        let mut counts = self.table();
        for symbol in text.chars() {
            counts[self.index_of(symbol)?] += 1;
        }
        Ok(counts)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Lowercase => f.write_str("lowercase"),
            Alphabet::Byte => f.write_str("byte"),
        }
    }
}
