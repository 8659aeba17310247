// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for functional RGB notation, eg: `rgb(26, 43, 60)`.
//!
//! - The `rgb` literal is case insensitive (`RGB(1, 2, 3)` is fine).
//! - Whitespace is optional around every token.
//! - Each channel is a run of decimal digits whose value must be in `[0, 255]`. If any
//!   channel is out of range the whole match fails, nothing is clamped.

use nom::{IResult, Parser,
          bytes::complete::{tag, tag_no_case, take_while},
          character::complete::digit1,
          combinator::{all_consuming, map_opt},
          sequence::delimited};

use crate::RgbTriplet;

const RGB: &str = "rgb";
const LEFT_PAREN: &str = "(";
const RIGHT_PAREN: &str = ")";
const COMMA: &str = ",";

/// - Sample parse input: `rgb(1, 2, 3)`, `RGB( 1,2 ,3 )`, `rgb (255, 0, 0)`.
/// - Leading and trailing whitespace is consumed.
///
/// # Errors
///
/// Returns a nom parsing error if the input is not functional RGB notation, or if any
/// channel is out of range.
#[rustfmt::skip]
pub fn parse_rgb_fn(input: &str) -> IResult<&str, RgbTriplet> {
    map_opt(
        delimited(
            /* start */ (whitespace0, tag_no_case(RGB), whitespace0, tag(LEFT_PAREN)),
            /* output */ (
                delimited(whitespace0, digit1, whitespace0),
                tag(COMMA),
                delimited(whitespace0, digit1, whitespace0),
                tag(COMMA),
                delimited(whitespace0, digit1, whitespace0),
            ),
            /* end */ (tag(RIGHT_PAREN), whitespace0),
        ),
        |(red, _, green, _, blue)| RgbTriplet::try_from_channel_strs(red, green, blue),
    )
    .parse(input)
}

/// Returns [`Some`] only if the whole input is functional RGB notation w/ all three
/// channels in range.
#[must_use]
pub fn try_parse_rgb_fn(input: &str) -> Option<RgbTriplet> {
    all_consuming(parse_rgb_fn)
        .parse(input)
        .ok()
        .map(|(_, color)| color)
}

/// Zero or more Unicode whitespace chars. [`nom::character::complete::multispace0`] only
/// knows about ASCII space, tab, and newlines.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}
