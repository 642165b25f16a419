//! Set and map based word puzzles

use std::collections::{HashMap, HashSet};

use tracing::debug;

/// Find all symmetric pairs in a list of two-character words
///
/// Words are assumed lowercase with no duplicates. Each pair is reported
/// once, as `"<word> & <mirror>"` at the moment the second word of the pair
/// shows up. A word whose two letters are equal cannot pair with anything.
pub fn find_symmetric_pairs(words: &[&str]) -> Vec<String> {
    debug!(count = words.len(), "find_symmetric_pairs: called");
    let mut pairs = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for &word in words {
        let reversed: String = word.chars().rev().collect();

        if seen.contains(reversed.as_str()) {
            pairs.push(format!("{} & {}", word, reversed));
        } else {
            seen.insert(word);
        }
    }

    pairs
}

/// Determine whether two words are anagrams
///
/// Spaces are ignored and the comparison is case-insensitive, so `"Ab"` and
/// `"Ba"` are anagrams. A letter-frequency map keeps the check O(n).
pub fn is_anagram(word1: &str, word2: &str) -> bool {
    debug!(%word1, %word2, "is_anagram: called");
    let mut counts: HashMap<char, i64> = HashMap::new();

    for ch in normalize(word1) {
        *counts.entry(ch).or_insert(0) += 1;
    }

    for ch in normalize(word2) {
        match counts.get_mut(&ch) {
            Some(count) => {
                *count -= 1;
                if *count < 0 {
                    return false;
                }
            }
            None => return false,
        }
    }

    counts.values().all(|&count| count == 0)
}

fn normalize(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars()
        .filter(|ch| *ch != ' ')
        .flat_map(char::to_lowercase)
}
