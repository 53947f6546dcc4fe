//! Most common unigrams and bigrams of a line of text.

use std::collections::HashMap;
use std::hash::Hash;

/// Top-k unigrams and bigrams of one line, most common first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NgramSummary {
    pub unigrams: Vec<(String, usize)>,
    pub bigrams: Vec<((String, String), usize)>,
}

/// Count whitespace-separated tokens of `line` and their adjacent pairs and
/// keep the `k` most common of each. Ties keep first-seen order.
pub fn top_ngrams(line: &str, k: usize) -> NgramSummary {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let unigrams = most_common(tokens.iter().copied(), k)
        .into_iter()
        .map(|(w, n)| (w.to_owned(), n))
        .collect();
    let bigrams = most_common(tokens.windows(2).map(|w| (w[0], w[1])), k)
        .into_iter()
        .map(|((a, b), n)| ((a.to_owned(), b.to_owned()), n))
        .collect();
    NgramSummary { unigrams, bigrams }
}

/// The `k` most frequent items, ties broken by first occurrence.
pub fn most_common<K, I>(items: I, k: usize) -> Vec<(K, usize)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    // (count, first-seen position) per key
    let mut seen: HashMap<K, (usize, usize)> = HashMap::new();
    for item in items {
        let next = seen.len();
        seen.entry(item).or_insert((0, next)).0 += 1;
    }
    let mut ranked: Vec<(K, (usize, usize))> = seen.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(k);
    ranked.into_iter().map(|(key, (n, _))| (key, n)).collect()
}

impl std::fmt::Display for NgramSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unigrams: Vec<String> = self.unigrams.iter().map(|(w, n)| format!("{w}:{n}")).collect();
        let bigrams: Vec<String> = self
            .bigrams
            .iter()
            .map(|((a, b), n)| format!("{a} {b}:{n}"))
            .collect();
        write!(f, "{} | {}", unigrams.join(" "), bigrams.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_orders_unigrams() {
        let s = top_ngrams("the cat saw the dog and the cat", 2);
        assert_eq!(
            s.unigrams,
            vec![("the".to_owned(), 3), ("cat".to_owned(), 2)]
        );
    }

    #[test]
    fn counts_bigrams() {
        let s = top_ngrams("a b a b c", 1);
        assert_eq!(s.bigrams, vec![(("a".to_owned(), "b".to_owned()), 2)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let s = top_ngrams("z y x", 3);
        let words: Vec<&str> = s.unigrams.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["z", "y", "x"]);
    }

    #[test]
    fn empty_line_and_single_token() {
        assert_eq!(top_ngrams("", 5), NgramSummary::default());
        let s = top_ngrams("solo", 5);
        assert_eq!(s.unigrams.len(), 1);
        assert!(s.bigrams.is_empty());
    }

    #[test]
    fn zero_k_keeps_nothing() {
        assert_eq!(top_ngrams("a a b", 0), NgramSummary::default());
    }

    #[test]
    fn display_format() {
        let s = top_ngrams("a b a", 2);
        assert_eq!(s.to_string(), "a:2 b:1 | a b:1 b a:1");
    }
}
