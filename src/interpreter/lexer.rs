use logos::Logos;

use crate::{ast::Operator, util::num::parse_literal};

/// Represents a classified token of an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text: a non-negative integer
/// literal, one of the four operators, or a parenthesis.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
        }
    }
}

/// Maps a token to its corresponding operator.
///
/// Returns `None` for literals and parentheses.
///
/// # Example
/// ```
/// use exprheap::{
///     ast::Operator,
///     interpreter::lexer::{Token, token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Star), Some(Operator::Times));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Plus),
        Token::Minus => Some(Operator::Minus),
        Token::Star => Some(Operator::Times),
        Token::Slash => Some(Operator::Divide),
        Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}

/// Splits an expression into string tokens.
///
/// The input is split on whitespace first. A field that contains a `(` or `)`
/// is split around every bracket it contains, so components may be written
/// with or without separating whitespace around parentheses. Empty pieces are dropped. Nothing is
/// rejected here: a field such as `5+3` is passed through unchanged and left
/// for [`to_postfix`](crate::interpreter::parser::postfix::to_postfix) to
/// report.
///
/// # Example
/// ```
/// use exprheap::interpreter::lexer::tokenise;
///
/// assert_eq!(tokenise("(5 + 3) * 2"), ["(", "5", "+", "3", ")", "*", "2"]);
/// assert_eq!(tokenise("((1 - 2))"), ["(", "(", "1", "-", "2", ")", ")"]);
/// assert_eq!(tokenise("   "), Vec::<String>::new());
/// ```
#[must_use]
pub fn tokenise(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for field in expression.split_whitespace() {
        split_brackets(field, &mut tokens);
    }

    log::trace!("tokenised {expression:?} into {tokens:?}");
    tokens
}

fn split_brackets(field: &str, tokens: &mut Vec<String>) {
    let mut rest = field;

    while let Some(pos) = rest.find(['(', ')']) {
        let (before, bracket_and_after) = rest.split_at(pos);
        let (bracket, after) = bracket_and_after.split_at(1);
        if !before.is_empty() {
            tokens.push(before.to_string());
        }
        tokens.push(bracket.to_string());
        rest = after;
    }

    if !rest.is_empty() {
        tokens.push(rest.to_string());
    }
}

/// Classifies a single token string.
///
/// Returns the token if `token` consists of exactly one recognized token,
/// and `None` otherwise. Integer literals too large for an `i64` are not
/// recognized.
///
/// # Example
/// ```
/// use exprheap::interpreter::lexer::{Token, classify};
///
/// assert_eq!(classify("17"), Some(Token::Integer(17)));
/// assert_eq!(classify("/"), Some(Token::Slash));
/// assert_eq!(classify("5+3"), None);
/// assert_eq!(classify("%"), None);
/// ```
#[must_use]
pub fn classify(token: &str) -> Option<Token> {
    let mut lexer = Token::lexer(token);
    let first = lexer.next()?.ok()?;

    if lexer.next().is_some() {
        return None;
    }

    Some(first)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal is too large.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    parse_literal(lex.slice(), 0).ok()
}
