//! Parsing of sexagesimal replies (`HH:MM:SS`, `sDD*MM:SS`, ...)

/// Errors that can occur while parsing a sexagesimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No digits found
    Empty,
    /// A field was not a number
    InvalidNumber,
    /// Minutes or seconds out of 0..60
    OutOfRange,
    /// More than three fields
    TooManyFields,
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | '*' | '\'' | '"')
}

/// Parse `[sign]A[sep]B[sep]C` into `A + B/60 + C/3600`, sign applied last
///
/// Minutes and seconds may carry a decimal fraction (`HH:MM.T`,
/// `HH:MM:SS.SSSS`).
fn parse_fields(text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut value = 0.0f64;
    let mut scale = 1.0f64;
    let mut count = 0;
    for field in body.split(is_separator).filter(|f| !f.is_empty()) {
        if count == 3 {
            return Err(ParseError::TooManyFields);
        }
        let number: f64 = field.parse().map_err(|_| ParseError::InvalidNumber)?;
        if number < 0.0 || (count > 0 && number >= 60.0) {
            return Err(ParseError::OutOfRange);
        }
        value += number / scale;
        scale *= 60.0;
        count += 1;
    }
    if count == 0 {
        return Err(ParseError::Empty);
    }

    Ok(if negative { -value } else { value })
}

/// Parse a right ascension reply into hours
pub fn parse_hours(text: &str) -> Result<f64, ParseError> {
    parse_fields(text)
}

/// Parse a declination reply into degrees
pub fn parse_degrees(text: &str) -> Result<f64, ParseError> {
    parse_fields(text)
}

/// Parse an `HH:MM:SS` time of day into seconds since midnight
pub fn parse_time_of_day(text: &str) -> Result<u32, ParseError> {
    let hours = parse_fields(text)?;
    if !(0.0..24.0).contains(&hours) {
        return Err(ParseError::OutOfRange);
    }
    // Half-second bias so 12:00:00 parsed as 11.99999.. still lands on the second
    Ok((hours * 3600.0 + 0.5) as u32 % 86_400)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hours() {
        assert!(close(parse_hours("12:30:00").unwrap(), 12.5));
        assert!(close(parse_hours("00:00:36").unwrap(), 0.01));
        assert!(close(parse_hours("23:59:59.5").unwrap(), 23.0 + 59.0 / 60.0 + 59.5 / 3600.0));
    }

    #[test]
    fn test_low_precision_hours() {
        assert!(close(parse_hours("05:30.6").unwrap(), 5.0 + 30.6 / 60.0));
    }

    #[test]
    fn test_degrees() {
        assert!(close(parse_degrees("+45*30:00").unwrap(), 45.5));
        assert!(close(parse_degrees("-10*15'00").unwrap(), -10.25));
        assert!(close(parse_degrees("+89*59").unwrap(), 89.0 + 59.0 / 60.0));
        assert!(close(parse_degrees("-00*30:00").unwrap(), -0.5));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_hours(""), Err(ParseError::Empty));
        assert_eq!(parse_hours("+"), Err(ParseError::Empty));
        assert_eq!(parse_hours("::"), Err(ParseError::Empty));
        assert_eq!(parse_hours("ab:cd"), Err(ParseError::InvalidNumber));
        assert_eq!(parse_hours("12:75:00"), Err(ParseError::OutOfRange));
        assert_eq!(parse_hours("1:2:3:4"), Err(ParseError::TooManyFields));
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(parse_time_of_day("00:00:00").unwrap(), 0);
        assert_eq!(parse_time_of_day("01:02:03").unwrap(), 3723);
        assert_eq!(parse_time_of_day("23:59:59").unwrap(), 86_399);
        assert_eq!(parse_time_of_day("24:00:00"), Err(ParseError::OutOfRange));
        assert_eq!(parse_time_of_day("-01:00:00"), Err(ParseError::OutOfRange));
    }

    proptest! {
        #[test]
        fn prop_time_of_day_matches_fields(h in 0u32..24, m in 0u32..60, sec in 0u32..60) {
            let text = format!("{:02}:{:02}:{:02}", h, m, sec);
            prop_assert_eq!(parse_time_of_day(&text).unwrap(), h * 3600 + m * 60 + sec);
        }

        #[test]
        fn prop_declination_sign(d in 0u32..90, m in 0u32..60) {
            let north = parse_degrees(&format!("+{:02}*{:02}:00", d, m)).unwrap();
            let south = parse_degrees(&format!("-{:02}*{:02}:00", d, m)).unwrap();
            prop_assert!(north >= 0.0);
            prop_assert!((north + south).abs() < 1e-9);
        }
    }
}
