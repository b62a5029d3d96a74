use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Returns `true` if `token` is a non-empty run of ASCII digits.
///
/// Signs are not part of a literal; `-3` is two tokens.
///
/// ## Example
/// ```
/// use exprheap::util::num::is_number;
///
/// assert!(is_number("042"));
/// assert!(!is_number(""));
/// assert!(!is_number("-3"));
/// assert!(!is_number("4.5"));
/// ```
#[must_use]
pub fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Converts an integer literal token to `i64`.
///
/// ## Errors
/// - `UnexpectedToken` if `token` is not a run of digits.
/// - `LiteralTooLarge` if the value does not fit in an `i64`.
///
/// ## Parameters
/// - `token`: The literal as written.
/// - `position`: Index of the token, for error reporting.
///
/// ## Example
/// ```
/// use exprheap::{error::ParseError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("42", 0).unwrap(), 42);
///
/// let err = parse_literal("99999999999999999999", 3).unwrap_err();
/// assert!(matches!(err, ParseError::LiteralTooLarge { position: 3, .. }));
/// ```
pub fn parse_literal(token: &str, position: usize) -> ParseResult<i64> {
    if !is_number(token) {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 position });
    }

    token.parse()
         .map_err(|_| ParseError::LiteralTooLarge { literal: token.to_string(),
                                                    position })
}
