// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::Rng;

pub const LOWERCASE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Byte index of the `n`th (0 based) occurrence of `query` in `haystack`. Occurrences
/// may overlap, eg: `"aa"` occurs twice in `"aaa"`.
#[must_use]
pub fn nth_index_of(haystack: &str, query: &str, n: usize) -> Option<usize> {
    let mut index = haystack.find(query)?;
    for _ in 0..n {
        // Step forward one char so the next search can find an overlapping match.
        let step = haystack[index..].chars().next().map_or(1, char::len_utf8);
        let start = index + step;
        index = start + haystack.get(start..)?.find(query)?;
    }
    Some(index)
}

/// `len` characters drawn uniformly from `alphabet`. Empty if `alphabet` is empty.
#[must_use]
pub fn random_string(len: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let mut rng = rand::rng();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

#[must_use]
pub fn random_lowercase_string(len: usize) -> String {
    random_string(len, LOWERCASE_ALPHABET)
}
