// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbTriplet`]
//! struct. The hex color string can be in any of the following formats:
//!
//! | format    | example   | decoded as          |
//! | --------- | --------- | ------------------- |
//! | `#RRGGBB` | `#1a2b3c` | `(26, 43, 60)`      |
//! | `RRGGBB`  | `1a2b3c`  | `(26, 43, 60)`      |
//! | `#RGB`    | `#1AF`    | `(17, 170, 255)`    |
//! | `RGB`     | `1AF`     | `(17, 170, 255)`    |
//!
//! In the shorthand form each digit is doubled (`c` -> `cc`), so each channel is
//! `17 * digit`.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

use crate::RgbTriplet;

const HASH: &str = "#";

/// Parse function that generates an [`RgbTriplet`] struct from a hex color string. A
/// single optional leading `#` is consumed. Trailing input is left in the remainder.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with 6 or 3 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbTriplet> {
    let (input, _) = opt(tag(HASH)).parse(input)?;
    // Long form first, otherwise `#1a2b3c` would be read as `#1a2` w/ a remainder.
    alt((helper_fns::parse_long_hex, helper_fns::parse_short_hex)).parse(input)
}

/// Returns [`Some`] only if the whole input (after trimming surrounding whitespace) is a
/// hex color. Wrong length or a non hex digit is [`None`], which just means "this format
/// does not apply".
#[must_use]
pub fn try_parse_hex_color(input: &str) -> Option<RgbTriplet> {
    all_consuming(parse_hex_color)
        .parse(input.trim())
        .ok()
        .map(|(_, color)| color)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, RgbTriplet, map_res, take_while_m_n};

    /// This function is used by [`take_while_m_n`] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// `RRGGBB` parsed as a single 24-bit number, then split into channels.
    pub fn parse_long_hex(input: &str) -> IResult<&str, RgbTriplet> {
        map_res(take_while_m_n(6, 6, match_is_hex_digit), |it: &str| {
            u32::from_str_radix(it, 16).map(RgbTriplet::from)
        })
        .parse(input)
    }

    /// `RGB`, each digit is a doubled nibble.
    pub fn parse_short_hex(input: &str) -> IResult<&str, RgbTriplet> {
        let (input, (red, green, blue)) =
            (parse_nibble, parse_nibble, parse_nibble).parse(input)?;
        Ok((input, RgbTriplet::from_u8(red, green, blue)))
    }

    /// 1 hex digit, expanded to a byte: `0xc` -> `0xcc`, which is `17 * 0xc`.
    pub fn parse_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16).map(|digit| digit * 17)
        })
        .parse(input)
    }
}
