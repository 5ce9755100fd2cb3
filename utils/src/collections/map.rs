// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, hash::Hash};

/// All entries of `left` and `right`. A key present in both keeps the value from `right`.
pub fn merge_maps<K: Eq + Hash, V>(
    left: impl IntoIterator<Item = (K, V)>,
    right: impl IntoIterator<Item = (K, V)>,
) -> HashMap<K, V> {
    left.into_iter().chain(right).collect()
}

/// Swaps keys and values. When several entries share a value, the one that comes last
/// in `entries` provides the key.
pub fn invert_map<K, V: Eq + Hash>(entries: impl IntoIterator<Item = (K, V)>) -> HashMap<V, K> {
    entries.into_iter().map(|(key, value)| (value, key)).collect()
}
