// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// `myCamelCaseString` to `MY_CAMEL_CASE_STRING`. A `_` goes in front of every
/// uppercase ASCII letter that is not the first character.
#[must_use]
pub fn camel_to_const(input: &str) -> String {
    let mut acc = String::with_capacity(input.len() + input.len() / 4);
    for (index, it) in input.chars().enumerate() {
        if index > 0 && it.is_ascii_uppercase() {
            acc.push('_');
        }
        acc.extend(it.to_uppercase());
    }
    acc
}

/// Uppercases the first character, leaves the rest alone.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
