use std::num::IntErrorKind;

/// Reasons a command line sequence is rejected before anything gets sorted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no values given")]
    Empty,
    #[error("invalid argument \"{0}\"")]
    NotANumber(String),
    #[error("\"{0}\" is not a positive integer")]
    NotPositive(String),
    #[error("\"{0}\" is too large, the maximum is {max}", max = u32::MAX)]
    OutOfRange(String),
}

/// Parses a single token as a positive integer.
pub fn parse_value(token: &str) -> Result<u32, InputError> {
    let value = token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange(token.to_owned()),
        IntErrorKind::NegOverflow => InputError::NotPositive(token.to_owned()),
        _ => InputError::NotANumber(token.to_owned()),
    })?;

    if value <= 0 {
        return Err(InputError::NotPositive(token.to_owned()));
    }

    u32::try_from(value).map_err(|_| InputError::OutOfRange(token.to_owned()))
}

/// Parses every whitespace separated token of every argument, so both `pmerge 3 5 9` and
/// `pmerge "3 5 9"` are accepted. Fails on the first bad token.
pub fn parse_values<I, A>(args: I) -> Result<Vec<u32>, InputError>
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut values = Vec::new();
    for arg in args {
        for token in arg.as_ref().split_whitespace() {
            values.push(parse_value(token)?);
        }
    }

    if values.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert_eq!(parse_value("1"), Ok(1));
        assert_eq!(parse_value("+42"), Ok(42));
        assert_eq!(parse_value("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_values(["3 5", "9", " 7 4 "]), Ok(vec![3, 5, 9, 7, 4]));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(parse_value("0"), Err(InputError::NotPositive("0".into())));
        assert_eq!(parse_value("-3"), Err(InputError::NotPositive("-3".into())));
        assert_eq!(
            parse_value("-99999999999999999999"),
            Err(InputError::NotPositive("-99999999999999999999".into()))
        );
        assert_eq!(parse_value("12a"), Err(InputError::NotANumber("12a".into())));
        assert_eq!(parse_value("1.5"), Err(InputError::NotANumber("1.5".into())));
        assert_eq!(
            parse_value("4294967296"),
            Err(InputError::OutOfRange("4294967296".into()))
        );
        assert_eq!(
            parse_value("99999999999999999999"),
            Err(InputError::OutOfRange("99999999999999999999".into()))
        );
    }

    #[test]
    fn whole_sequence_fails() {
        assert_eq!(
            parse_values(["1", "2", "x", "-1"]),
            Err(InputError::NotANumber("x".into()))
        );
        assert_eq!(parse_values(Vec::<String>::new()), Err(InputError::Empty));
        assert_eq!(parse_values(["  "]), Err(InputError::Empty));
    }

    #[test]
    fn messages() {
        assert_eq!(
            InputError::NotANumber("abc".into()).to_string(),
            "invalid argument \"abc\""
        );
        assert_eq!(
            InputError::OutOfRange("5000000000".into()).to_string(),
            "\"5000000000\" is too large, the maximum is 4294967295"
        );
    }
}
