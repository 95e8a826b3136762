use crate::types::{Length, SizeUnit, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a length unit suffix (e.g., px, rem, %, fr).
pub fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(tag("ch"), |_| Unit::Ch),
        map(tag("vw"), |_| Unit::ViewWidth),
        map(tag("vh"), |_| Unit::ViewHeight),
        map(tag("fr"), |_| Unit::Fraction),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse one of the scale output units (px, rem, em).
pub fn parse_size_unit(input: &str) -> IResult<&str, SizeUnit> {
    alt((
        map(tag("px"), |_| SizeUnit::Px),
        map(tag("rem"), |_| SizeUnit::Rem),
        map(tag("em"), |_| SizeUnit::Em),
    ))(input)
}

/// Parse a single length (e.g., "16px", "1.25rem", "50%").
///
/// A bare number is only accepted when it is zero.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();
    let (remaining, value) = parse_number(input)?;
    let (remaining, unit) = opt(parse_unit)(remaining)?;

    match unit {
        Some(unit) => Ok((remaining, Length { value, unit })),
        None if value == 0.0 => Ok((remaining, Length::ZERO)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}
