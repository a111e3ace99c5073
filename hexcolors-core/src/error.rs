use thiserror::Error as ThisError;

/// Kind of a hex color error, without the offending literal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub enum ErrorType {
    IntegerLiteralMustBeHexadecimal,
    StringLiteralMustStartWithHashtag,
    InvalidLength,
    FailedToScanHex,
    InvalidCharacters,
}

/// Error produced while turning a literal into a color.
///
/// Every variant carries the literal as it was seen by the failing check.
/// For integer literals that passed the `0x` check this is the rewritten
/// `#`-prefixed text.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("\"{0}\" did not start with 0x")]
    IntegerLiteralMustBeHexadecimal(String),
    #[error("\"{0}\" did not start with #")]
    StringLiteralMustStartWithHashtag(String),
    #[error("\"{0}\" is not the expected length of a hex color")]
    InvalidLength(String),
    #[error("Failed to convert hex str \"{0}\" to a number")]
    FailedToScanHex(String),
    #[error("\"{0}\" contains invalid characters for a hex color")]
    InvalidCharacters(String),
}

impl Error {
    pub fn error_type(&self) -> ErrorType {
        match self {
            Error::IntegerLiteralMustBeHexadecimal(_) => ErrorType::IntegerLiteralMustBeHexadecimal,
            Error::StringLiteralMustStartWithHashtag(_) => {
                ErrorType::StringLiteralMustStartWithHashtag
            }
            Error::InvalidLength(_) => ErrorType::InvalidLength,
            Error::FailedToScanHex(_) => ErrorType::FailedToScanHex,
            Error::InvalidCharacters(_) => ErrorType::InvalidCharacters,
        }
    }

    /// The offending literal.
    pub fn literal(&self) -> &str {
        match self {
            Error::IntegerLiteralMustBeHexadecimal(s)
            | Error::StringLiteralMustStartWithHashtag(s)
            | Error::InvalidLength(s)
            | Error::FailedToScanHex(s)
            | Error::InvalidCharacters(s) => s,
        }
    }

    pub fn integer_literal_must_be_hexadecimal(text: &str) -> Self {
        Error::IntegerLiteralMustBeHexadecimal(text.to_owned())
    }
    pub fn string_literal_must_start_with_hashtag(text: &str) -> Self {
        Error::StringLiteralMustStartWithHashtag(text.to_owned())
    }
    pub fn invalid_length(text: &str) -> Self {
        Error::InvalidLength(text.to_owned())
    }
    pub fn failed_to_scan_hex(text: &str) -> Self {
        Error::FailedToScanHex(text.to_owned())
    }
    pub fn invalid_characters(text: &str) -> Self {
        Error::InvalidCharacters(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::integer_literal_must_be_hexadecimal("123").to_string(),
            "\"123\" did not start with 0x"
        );
        assert_eq!(
            Error::string_literal_must_start_with_hashtag("FF5733").to_string(),
            "\"FF5733\" did not start with #"
        );
        assert_eq!(
            Error::invalid_length("#FF").to_string(),
            "\"#FF\" is not the expected length of a hex color"
        );
        assert_eq!(
            Error::failed_to_scan_hex("#FFF").to_string(),
            "Failed to convert hex str \"#FFF\" to a number"
        );
        assert_eq!(
            Error::invalid_characters("#FFG733").to_string(),
            "\"#FFG733\" contains invalid characters for a hex color"
        );
    }

    #[test]
    fn error_type_and_literal() {
        let e = Error::invalid_length("#12345");
        assert_eq!(e.error_type(), ErrorType::InvalidLength);
        assert_eq!(e.literal(), "#12345");
        let e = Error::invalid_characters("#xyz");
        assert_eq!(e.error_type(), ErrorType::InvalidCharacters);
        assert_eq!(e.literal(), "#xyz");
    }
}
