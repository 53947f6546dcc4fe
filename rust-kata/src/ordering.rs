//! Lexicographic order under a custom alphabet permutation.

use std::cmp::Ordering;

use crate::alphabet::{Alphabet, SymbolTable};
use crate::error::{KataError, Result};

/// Symbol -> 1-based rank in a custom ordering. Rank 0 means "not ranked".
#[derive(Debug, Clone)]
pub struct RankTable {
    alphabet: Alphabet,
    ranks: SymbolTable,
}

impl RankTable {
    /// Build the table from `ordering`, lowest symbol first.
    ///
    /// The ordering may rank only part of the alphabet. A repeated symbol is
    /// an `InvalidArgument`; a symbol outside `alphabet` is `OutOfAlphabet`.
    pub fn new(ordering: &[char], alphabet: Alphabet) -> Result<Self> {
        let mut ranks = alphabet.table();
        for (pos, &symbol) in ordering.iter().enumerate() {
            let slot = &mut ranks[alphabet.index_of(symbol)?];
            if *slot != 0 {
                return Err(KataError::invalid_argument(format!(
                    "symbol {symbol:?} appears twice in the ordering"
                )));
            }
            *slot = pos as u32 + 1;
        }
        Ok(Self { alphabet, ranks })
    }

    /// Rank of `symbol`, or `Unranked` when the ordering does not mention it.
    #[inline]
    pub fn rank(&self, symbol: char) -> Result<u32> {
        match self.ranks[self.alphabet.index_of(symbol)?] {
            0 => Err(KataError::Unranked { symbol }),
            rank => Ok(rank),
        }
    }

    /// Compare two words symbol by symbol; a proper prefix sorts first.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let mut a_chars = a.chars();
        let mut b_chars = b.chars();
        loop {
            match (a_chars.next(), b_chars.next()) {
                (Some(x), Some(y)) => match self.rank(x)?.cmp(&self.rank(y)?) {
                    Ordering::Equal => continue,
                    decided => return Ok(decided),
                },
                (Some(_), None) => return Ok(Ordering::Greater),
                (None, Some(_)) => return Ok(Ordering::Less),
                (None, None) => return Ok(Ordering::Equal),
            }
        }
    }
}

/// True iff every adjacent pair of `words` is non-decreasing under `table`.
///
/// Stops at the first out-of-order pair; words after it are never inspected.
pub fn are_words_sorted<S: AsRef<str>>(words: &[S], table: &RankTable) -> Result<bool> {
    for pair in words.windows(2) {
        if table.compare(pair[0].as_ref(), pair[1].as_ref())? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Build a [`RankTable`] from `ordering` and check `words` against it.
pub fn are_words_sorted_by<S: AsRef<str>>(
    words: &[S],
    ordering: &[char],
    alphabet: Alphabet,
) -> Result<bool> {
    let table = RankTable::new(ordering, alphabet)?;
    are_words_sorted(words, &table)
}
