use crate::{Color, Error};

/// The textual form a color was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `0xRRGGBB`
    Prefixed,
    /// `#RRGGBB`
    Hash,
    /// `R,G,B` in decimal
    Triplet,
    /// Anything else, read as a decimal integer.
    Decimal,
}

impl Notation {
    pub fn sniff(s: &str) -> Notation {
        if s.starts_with("0x") {
            Notation::Prefixed
        } else if s.starts_with('#') {
            Notation::Hash
        } else if s.contains(',') {
            Notation::Triplet
        } else {
            Notation::Decimal
        }
    }
}

/// Integer parsing with `strtol` conventions: leading whitespace and a sign
/// are allowed, base 16 takes an optional `0x`/`0X`, and the whole string
/// must be consumed.
pub fn parse_int(s: &str, radix: u32) -> Result<i64, Error> {
    let invalid = || Error::InvalidInteger {
        input: s.to_owned(),
        radix,
    };

    let digits = s.trim_start();
    let (negative, digits) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };
    let digits = if radix == 16 {
        digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits)
    } else {
        digits
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let magnitude = i64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn fit_u24(input: &str, value: i64) -> Result<Color, Error> {
    if (0..=Color::MAX as i64).contains(&value) {
        Ok(Color::from_u24(value as u32))
    } else {
        Err(Error::OutOfRange {
            input: input.to_owned(),
            value,
        })
    }
}

fn parse_component(input: &str, field: &str) -> Result<u8, Error> {
    let value = parse_int(field, 10)?;
    u8::try_from(value).map_err(|_| Error::ComponentOutOfRange {
        input: input.to_owned(),
        value,
    })
}

fn parse_triplet(s: &str) -> Result<Color, Error> {
    let fields: Vec<&str> = s.split(',').collect();
    match fields[..] {
        [r, g, b] => Ok(Color::from_rgb(
            parse_component(s, r)?,
            parse_component(s, g)?,
            parse_component(s, b)?,
        )),
        _ => Err(Error::MalformedTriplet(s.to_owned())),
    }
}

/// Parse any of the accepted color notations into a packed color.
pub fn parse_color(s: &str) -> Result<Color, Error> {
    let notation = Notation::sniff(s);
    log::trace!("parsing color {:?} as {:?}", s, notation);

    match notation {
        Notation::Prefixed => fit_u24(s, parse_int(s, 16)?),
        Notation::Hash => fit_u24(s, parse_int(&s[1..], 16)?),
        Notation::Triplet => parse_triplet(s),
        Notation::Decimal => fit_u24(s, parse_int(s, 10)?),
    }
}

/// Parse a base-16 mask or filter (`0x` optional), 32 bits wide.
pub fn parse_bits(s: &str) -> Result<u32, Error> {
    let value = parse_int(s, 16)?;
    u32::try_from(value).map_err(|_| Error::OutOfRange {
        input: s.to_owned(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(Notation::sniff("0xff0000"), Notation::Prefixed);
        assert_eq!(Notation::sniff("#ff0000"), Notation::Hash);
        assert_eq!(Notation::sniff("255,0,0"), Notation::Triplet);
        assert_eq!(Notation::sniff("16711680"), Notation::Decimal);
        // prefix checks win over the comma check
        assert_eq!(Notation::sniff("#1,2,3"), Notation::Hash);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42", 10), Ok(42));
        assert_eq!(parse_int("  -7", 10), Ok(-7));
        assert_eq!(parse_int("+ff", 16), Ok(255));
        assert_eq!(parse_int("0XfF", 16), Ok(255));
        assert!(parse_int("", 10).is_err());
        assert!(parse_int("0x", 16).is_err());
        assert!(parse_int("12 ", 10).is_err());
        assert!(parse_int("1f", 10).is_err());
        assert!(parse_int("0x10", 10).is_err());
        assert!(parse_int("99999999999999999999", 10).is_err());
    }

    #[test]
    fn test_parse_each_notation() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(parse_color("0xff0000"), Ok(red));
        assert_eq!(parse_color("0xFF0000"), Ok(red));
        assert_eq!(parse_color("#ff0000"), Ok(red));
        assert_eq!(parse_color("255,0,0"), Ok(red));
        assert_eq!(parse_color("255, 0, 0"), Ok(red));
        assert_eq!(parse_color("16711680"), Ok(red));
        assert_eq!("#0a0b0c".parse::<Color>(), Ok(Color::from_rgb(10, 11, 12)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_color("1,2"),
            Err(Error::MalformedTriplet("1,2".to_owned()))
        );
        assert_eq!(
            parse_color("1,2,3,4"),
            Err(Error::MalformedTriplet("1,2,3,4".to_owned()))
        );
        assert_eq!(
            parse_color("1,256,3"),
            Err(Error::ComponentOutOfRange {
                input: "1,256,3".to_owned(),
                value: 256
            })
        );
        assert_eq!(
            parse_color("#1000000"),
            Err(Error::OutOfRange {
                input: "#1000000".to_owned(),
                value: 0x1000000
            })
        );
        assert!(parse_color("-1").is_err());
        assert!(parse_color("red").is_err());
        assert!(parse_color("#").is_err());
        assert!(parse_color("1,,3").is_err());
    }

    #[test]
    fn test_parse_bits() {
        assert_eq!(parse_bits("0xFFFFFFFF"), Ok(0xFFFF_FFFF));
        assert_eq!(parse_bits("00000000"), Ok(0));
        assert_eq!(parse_bits("ff00"), Ok(0xFF00));
        assert!(parse_bits("0x100000000").is_err());
        assert!(parse_bits("-1").is_err());
        assert!(parse_bits("zz").is_err());
    }
}
