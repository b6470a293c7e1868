//! # Mask patterns
//!
//! ## Overview
//!
//! Masks can be written down as compact pattern strings, which is convenient when they come
//! from configuration files. Each character of the pattern produces a slot:
//!
//! | Pattern | Slot                                         |
//! | ------- | -------------------------------------------- |
//! | `#`     | [digit](crate::slot::Slot::digit)            |
//! | `?`     | [letter](crate::slot::Slot::letter)          |
//! | `U`     | [upper_letter](crate::slot::Slot::upper_letter) |
//! | `L`     | [lower_letter](crate::slot::Slot::lower_letter) |
//! | `A`     | [letter_or_digit](crate::slot::Slot::letter_or_digit) |
//! | `H`     | [hex](crate::slot::Slot::hex)                |
//! | `*`     | [any](crate::slot::Slot::any)                |
//! | `\x`    | the literal character `x`                    |
//!
//! Every other character is a literal, except for `{` and `}`, which must be escaped. Any slot
//! can be followed by `{n}` to repeat it `n` times, for `n` from 1 to [MAX_REPEAT].
//!
//! ## Example
//!
//! ```
//! use inputmask::pattern::parse_pattern;
//! use inputmask::slot::Slot;
//!
//! let slots = parse_pattern("#{2}/\\U").unwrap();
//!
//! assert_eq!(slots, vec![Slot::digit(), Slot::digit(), Slot::literal('/'), Slot::literal('U')]);
//! ```
use nom::{
    branch::alt,
    character::complete::{anychar, char, none_of, one_of, u32 as num},
    combinator::{cut, eof, opt},
    multi::many0,
    IResult,
};

use crate::errors::{MaskError, MaskResult};
use crate::slot::Slot;

const RULES: &str = "#?ULAH*";
const RESERVED: &str = "#?ULAH*\\{}";

/// Largest count accepted by a `{n}` repeat.
pub const MAX_REPEAT: u32 = 1024;

fn rule_slot(c: char) -> Slot {
    match c {
        '#' => Slot::digit(),
        '?' => Slot::letter(),
        'U' => Slot::upper_letter(),
        'L' => Slot::lower_letter(),
        'A' => Slot::letter_or_digit(),
        'H' => Slot::hex(),
        _ => Slot::any(),
    }
}

fn parse_escape(input: &str) -> IResult<&str, Slot> {
    let (input, _) = char('\\')(input)?;
    let (input, c) = cut(anychar)(input)?;
    Ok((input, Slot::literal(c)))
}

fn parse_rule(input: &str) -> IResult<&str, Slot> {
    let (input, c) = one_of(RULES)(input)?;
    Ok((input, rule_slot(c)))
}

fn parse_literal(input: &str) -> IResult<&str, Slot> {
    let (input, c) = none_of(RESERVED)(input)?;
    Ok((input, Slot::literal(c)))
}

fn parse_repeat(input: &str) -> IResult<&str, u32> {
    let (input, _) = char('{')(input)?;
    let (input, n) = cut(num)(input)?;
    let (input, _) = cut(char('}'))(input)?;
    Ok((input, n))
}

fn parse_token(input: &str) -> IResult<&str, (Slot, Option<u32>)> {
    let (input, slot) = alt((parse_escape, parse_rule, parse_literal))(input)?;
    let (input, repeat) = opt(parse_repeat)(input)?;
    Ok((input, (slot, repeat)))
}

fn parse_tokens(input: &str) -> IResult<&str, Vec<(Slot, Option<u32>)>> {
    let (input, tokens) = many0(parse_token)(input)?;
    let (input, _) = eof(input)?;
    Ok((input, tokens))
}

/// Parse a pattern string into the slots it describes.
pub fn parse_pattern(pattern: &str) -> MaskResult<Vec<Slot>> {
    let (_, tokens) = parse_tokens(pattern).map_err(|e| {
        tracing::debug!(pattern, error = %e, "invalid mask pattern");
        MaskError::InvalidPattern(pattern.to_string())
    })?;

    let mut slots = Vec::with_capacity(tokens.len());

    for (slot, repeat) in tokens {
        match repeat {
            None => slots.push(slot),
            Some(n @ 1..=MAX_REPEAT) => {
                slots.extend(std::iter::repeat(slot).take(n as usize));
            },
            Some(n) => {
                tracing::debug!(pattern, repeat = n, "invalid repeat count");
                return Err(MaskError::InvalidRepeat(pattern.to_string()));
            },
        }
    }

    Ok(slots)
}
