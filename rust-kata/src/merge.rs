//! Palindrome merge
//! ================
//!
//! Build a palindrome out of the symbols of two strings.
//!
//! Approach
//! --------
//! 1) Count both strings over the alphabet.
//! 2) Split every count into its even part (usable on both sides) and a
//!    leftover unit (0 or 1). The even parts of both strings add up into the
//!    pair-count of that symbol.
//! 3) The lowest symbol with a leftover in *both* strings turns the two
//!    leftovers into one more pair. The result is then even-length and no
//!    other leftover is used.
//! 4) Otherwise the lowest symbol with a leftover in *either* string is the
//!    centre of an odd-length result.
//! 5) Half of each pair-count is written in alphabet order, then mirrored.

use crate::alphabet::{Alphabet, SymbolTable};
use crate::error::Result;

/// Where the leftover units went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leftover {
    /// Both strings had a leftover of this symbol; it became an extra pair.
    Paired(usize),
    /// A single leftover of this symbol sits in the centre.
    Centre(usize),
    None,
}

/// Merge `s1` and `s2` into one palindrome.
///
/// ```
/// use kata::{merge_palindromes, Alphabet};
///
/// let p = merge_palindromes("aabb", "bcdc", Alphabet::Lowercase).unwrap();
/// assert_eq!(p, "abcbcba");
/// ```
pub fn merge_palindromes(s1: &str, s2: &str, alphabet: Alphabet) -> Result<String> {
    let mut odd1 = alphabet.count(s1)?;
    let mut odd2 = alphabet.count(s2)?;
    let mut pairs = alphabet.table();

    for ((pair, c1), c2) in pairs.iter_mut().zip(odd1.iter_mut()).zip(odd2.iter_mut()) {
        *pair = (*c1 - *c1 % 2) + (*c2 - *c2 % 2);
        *c1 %= 2;
        *c2 %= 2;
    }

    let leftover = place_leftover(&odd1, &odd2);
    if let Leftover::Paired(idx) = leftover {
        pairs[idx] += 2;
    }
    log::trace!("merge leftover: {:?}", leftover);

    let half: String = pairs
        .iter()
        .enumerate()
        .flat_map(|(idx, &n)| std::iter::repeat(alphabet.symbol_at(idx)).take((n / 2) as usize))
        .collect();

    let mut out = String::with_capacity(half.len() * 2 + 1);
    out.push_str(&half);
    if let Leftover::Centre(idx) = leftover {
        out.push(alphabet.symbol_at(idx));
    }
    out.extend(half.chars().rev());
    Ok(out)
}

fn place_leftover(odd1: &SymbolTable, odd2: &SymbolTable) -> Leftover {
    if let Some(idx) = odd1
        .iter()
        .zip(odd2.iter())
        .position(|(&a, &b)| a > 0 && b > 0)
    {
        return Leftover::Paired(idx);
    }
    match odd1
        .iter()
        .zip(odd2.iter())
        .position(|(&a, &b)| a > 0 || b > 0)
    {
        Some(idx) => Leftover::Centre(idx),
        None => Leftover::None,
    }
}
