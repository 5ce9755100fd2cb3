// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for color strings:
//! - hex colors, `#rrggbb` or the short `#rgb` form (the `#` is optional), into a
//!   [`RgbValue`].
//! - the numbers in CSS like `rgb(..)` / `rgba(..)` strings.
//! - CSS like color functions, eg: `rgb(1, 2, 3)`, into their argument tokens.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, tag_no_case, take_till, take_while_m_n, take_while1},
          character::complete::{char, multispace0},
          combinator::{all_consuming, map, map_res, opt},
          multi::{many1, separated_list1},
          sequence::{delimited, preceded}};

use crate::RgbValue;

/// Parses a whole hex color string. Trailing input is an error.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    all_consuming(preceded(
        opt(tag("#")),
        alt((parse_long_form, parse_short_form)),
    ))
    .parse(input)
}

/// `rrggbb`.
fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    map((hex_segment(2), hex_segment(2), hex_segment(2)), |(red, green, blue)| {
        RgbValue { red, green, blue }
    })
    .parse(input)
}

/// `rgb`, where each digit is doubled: `f80` is the same as `ff8800`.
fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    map((hex_segment(1), hex_segment(1), hex_segment(1)), |(red, green, blue)| {
        RgbValue {
            red: red * 17,
            green: green * 17,
            blue: blue * 17,
        }
    })
    .parse(input)
}

fn hex_segment<'a>(
    digits: usize,
) -> impl Parser<&'a str, Output = u8, Error = nom::error::Error<&'a str>> {
    map_res(
        take_while_m_n(digits, digits, |it: char| it.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
}

fn is_number_char(it: char) -> bool { it.is_ascii_digit() || it == '.' }

/// Parses every number out of a string like `rgba(255, 136, 0, 0.5)`, ignoring
/// everything in between. Fails if there is no number at all.
pub fn parse_numbers(input: &str) -> IResult<&str, Vec<f64>> {
    many1(preceded(
        take_till(is_number_char),
        map_res(take_while1(is_number_char), str::parse::<f64>),
    ))
    .parse(input)
}

/// Parses a color function call like `rgba( 1, 2.5 ,3, 0.5)`, where `name` (matched
/// ignoring case) is the function name, into its arguments. Every argument is a run of
/// digits and dots. Trailing input is left alone.
pub fn parse_color_function<'a>(input: &'a str, name: &str) -> IResult<&'a str, Vec<&'a str>> {
    delimited(
        (tag_no_case(name), char('(')),
        separated_list1(
            (multispace0, char(','), multispace0),
            preceded(multispace0, take_while1(is_number_char)),
        ),
        (multispace0, char(')')),
    )
    .parse(input)
}
