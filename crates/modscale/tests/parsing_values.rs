//! Integration tests for length and unit parsing.

use modscale::parser::units::{parse_length, parse_number, parse_size_unit};
use modscale::{Length, ScaleError, SizeUnit, Unit};

// ============================================================================
// NUMBERS
// ============================================================================

#[test]
fn test_number_integer() {
    let (remaining, value) = parse_number("16px").unwrap();
    assert_eq!(value, 16.0);
    assert_eq!(remaining, "px");
}

#[test]
fn test_number_negative_float() {
    let (_, value) = parse_number("-1.25rem").unwrap();
    assert_eq!(value, -1.25);
}

// ============================================================================
// LENGTHS
// ============================================================================

#[test]
fn test_length_px() {
    let (remaining, length) = parse_length("10.24px").unwrap();
    assert!(remaining.is_empty());
    assert_eq!(length, Length::px(10.24));
}

#[test]
fn test_length_rem_and_em_are_distinct() {
    let (_, rem) = parse_length("1.5rem").unwrap();
    let (_, em) = parse_length("1.5em").unwrap();
    assert_eq!(rem.unit, Unit::Rem);
    assert_eq!(em.unit, Unit::Em);
}

#[test]
fn test_length_relative_units() {
    assert_eq!(parse_length("50%").unwrap().1, Length::percent(50.0));
    assert_eq!(parse_length("60ch").unwrap().1, Length::ch(60.0));
    assert_eq!(parse_length("100vh").unwrap().1, Length::vh(100.0));
    assert_eq!(parse_length("1fr").unwrap().1, Length::fr(1.0));
    assert_eq!(parse_length("100vw").unwrap().1.unit, Unit::ViewWidth);
}

#[test]
fn test_length_skips_leading_whitespace() {
    let (remaining, length) = parse_length("  2rem;").unwrap();
    assert_eq!(length, Length::rem(2.0));
    assert_eq!(remaining, ";");
}

#[test]
fn test_length_unitless_zero() {
    let (_, length) = parse_length("0").unwrap();
    assert_eq!(length, Length::ZERO);
}

#[test]
fn test_length_unitless_nonzero_is_rejected() {
    assert!(parse_length("12").is_err());
}

#[test]
fn test_length_from_str_requires_full_input() {
    assert_eq!("1.25rem".parse::<Length>(), Ok(Length::rem(1.25)));
    assert!(matches!(
        "1.25rem solid".parse::<Length>(),
        Err(ScaleError::InvalidSyntax(_))
    ));
}

#[test]
fn test_length_display_round_trip() {
    for source in ["16px", "1.5rem", "0.75em", "50%", "30ch", "1fr"] {
        let length: Length = source.parse().unwrap();
        assert_eq!(length.to_string(), source);
    }
}

// ============================================================================
// SIZE UNITS
// ============================================================================

#[test]
fn test_size_unit_suffixes() {
    assert_eq!(parse_size_unit("px").unwrap().1, SizeUnit::Px);
    assert_eq!(parse_size_unit("rem").unwrap().1, SizeUnit::Rem);
    assert_eq!(parse_size_unit("em").unwrap().1, SizeUnit::Em);
    assert!(parse_size_unit("vh").is_err());
}
