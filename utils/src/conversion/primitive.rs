// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// A loosely typed scalar, as found in query strings and text based settings.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Reads a [`Primitive`] back from its [`Display`] form.
///
/// - `"undefined"`, `"null"`, `"true"` and `"false"` are keywords.
/// - Anything that parses as a number (surrounding whitespace allowed, blank counts as
///   `0`) is a [`Primitive::Number`], this includes `"NaN"` and `"Infinity"`.
/// - Everything else is [`Primitive::Text`].
#[must_use]
pub fn parse_primitive(input: &str) -> Primitive {
    match input {
        "undefined" => Primitive::Undefined,
        "null" => Primitive::Null,
        "true" => Primitive::Bool(true),
        "false" => Primitive::Bool(false),
        _ => match parse_number(input.trim()) {
            Some(number) => Primitive::Number(number),
            None => Primitive::Text(input.to_string()),
        },
    }
}

fn parse_number(input: &str) -> Option<f64> {
    match input {
        "" => Some(0.0),
        "NaN" => Some(f64::NAN),
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        // Rust also accepts `inf` and `nan` in any case, those stay text here.
        _ if input.chars().any(|it| it.is_ascii_alphabetic() && it != 'e' && it != 'E') => {
            None
        }
        _ => input.parse().ok(),
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::Undefined => write!(f, "undefined"),
            Primitive::Null => write!(f, "null"),
            Primitive::Bool(it) => write!(f, "{it}"),
            Primitive::Number(it) if it.is_nan() => write!(f, "NaN"),
            Primitive::Number(it) if it.is_infinite() => {
                write!(f, "{}Infinity", if *it < 0.0 { "-" } else { "" })
            }
            Primitive::Number(it) => write!(f, "{it}"),
            Primitive::Text(it) => write!(f, "{it}"),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self { Primitive::Text(value.to_string()) }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self { Primitive::Number(value) }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self { Primitive::Bool(value) }
}

impl<T: Into<Primitive>> From<Option<T>> for Primitive {
    fn from(value: Option<T>) -> Self { value.map_or(Primitive::Null, Into::into) }
}
