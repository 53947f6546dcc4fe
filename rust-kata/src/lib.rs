//! Interview Katas
//! =========================================
//!
//! Problems
//! --------
//! Independent routines that share a crate but not state:
//!   1) palindrome merge: build a palindrome from the symbols of two strings
//!   2) custom-order check: are words sorted under a permuted alphabet?
//!   3) range palindrome count: palindromic substrings per length window
//!   4) bounded BST sum: sum of tree values inside `[low, high]`
//!   5) n-gram frequency: top-k unigrams and bigrams of a line
//!   6) JSON flattening: nested object to `a_b_c = value` records
//!
//! Approach
//! --------
//! 1) Symbol tables (merge, ordering):
//!    - A configured [`Alphabet`] gives every symbol a dense index; counts and
//!      ranks live in a stack `ArrayVec<u32, 256>` truncated to the alphabet
//!      size. Symbols outside the alphabet are errors, never silently skipped.
//!
//! 2) Palindrome counting:
//!    - The enumerating strategy tests every slice in the length window.
//!    - The centre strategy expands around all `2n - 1` centres once, tallies
//!      palindromes by length and answers each window from a prefix sum.
//!      Both produce identical counts.
//!
//! 3) BST sum:
//!    - Recursive descent that returns its partial sum. The left subtree is
//!      only visited when `value >= low`, the right only when `value <= high`.
//!
//! Correctness notes
//! -----------------
//! - Every routine is a pure function: same input, same output.
//! - Errors are reported through [`KataError`]; nothing in the library panics
//!   on bad input.
//! - [`server::serve`] drives all routines over a one-line-per-command
//!   protocol, which the benchmark harness and the binaries use.

pub mod alphabet;
pub mod bst;
pub mod config;
pub mod counting;
pub mod error;
pub mod flatten;
pub mod merge;
pub mod ngrams;
pub mod ordering;
pub mod server;

pub use alphabet::Alphabet;
pub use bst::{range_sum, Bst, Node};
pub use config::Config;
pub use counting::{count_palindromes, count_palindromes_with, is_pal, CountStrategy, PalindromeSpans};
pub use error::{KataError, Result};
pub use flatten::{flatten_json, flatten_json_str, FlatRecord};
pub use merge::merge_palindromes;
pub use ngrams::{top_ngrams, NgramSummary};
pub use ordering::{are_words_sorted, are_words_sorted_by, RankTable};
pub use server::{run_server, serve, Command};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
