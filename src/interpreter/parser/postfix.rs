use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, classify, token_to_operator},
        parser::core::ParseResult,
    },
    util::num::parse_literal,
};

/// Converts infix string tokens to postfix order.
///
/// Literals are emitted as they are read. `(` is pushed onto an operator
/// stack and `)` pops operators to the output until the matching `(`, which is
/// discarded. An operator first pops every stacked operator of equal or higher
/// precedence (stopping at `(`), which makes operators left-associative, and
/// then pushes itself. Whatever remains on the stack is emitted in pop order.
///
/// The input must alternate between operands and operators: a literal or `(`
/// may only start the expression or follow an operator or `(`, and an operator
/// or `)` may only follow a literal or `)`. Postfix or prefix token orders such
/// as `1 2 +` are therefore rejected.
///
/// Each output token is paired with its index in `tokens`.
///
/// # Errors
/// - `UnexpectedToken` for anything that is not a literal, operator or
///   parenthesis, and for a token in a place where it cannot appear.
/// - `LiteralTooLarge` for digit runs that do not fit in an `i64`.
/// - `MissingOperand` for an operator followed by `)` or by the end of input.
/// - `UnmatchedParen` for a `)` without a matching `(`.
/// - `UnclosedParen` for a `(` that is never closed.
///
/// # Example
/// ```
/// use exprheap::{
///     error::ParseError,
///     interpreter::{lexer::tokenise, parser::postfix::to_postfix},
/// };
///
/// let postfix = to_postfix(&tokenise("3 + 4 * 2")).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(|(tok, _)| tok.to_string()).collect();
/// assert_eq!(rendered, ["3", "4", "2", "*", "+"]);
///
/// let err = to_postfix(&tokenise("1 2 +")).unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedToken { token: "2".to_string(), position: 1 });
/// ```
pub fn to_postfix(tokens: &[String]) -> ParseResult<Vec<(Token, usize)>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Token, usize)> = Vec::new();
    let mut expect_operand = true;
    let mut previous = None;

    for (position, raw) in tokens.iter().enumerate() {
        let token = classify(raw).ok_or_else(|| unrecognized(raw, position))?;
        let misplaced = || ParseError::UnexpectedToken { token: raw.clone(),
                                                         position };

        match token {
            Token::Integer(_) => {
                if !expect_operand {
                    return Err(misplaced());
                }
                output.push((token, position));
                expect_operand = false;
            },
            Token::LParen => {
                if !expect_operand {
                    return Err(misplaced());
                }
                stack.push((token, position));
            },
            Token::RParen => {
                if expect_operand {
                    return Err(missing_operand(previous).unwrap_or_else(misplaced));
                }
                loop {
                    match stack.pop() {
                        Some((Token::LParen, _)) => break,
                        Some(entry) => output.push(entry),
                        None => return Err(ParseError::UnmatchedParen { position }),
                    }
                }
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                if expect_operand {
                    return Err(misplaced());
                }
                let priority = precedence(&token);
                while let Some(entry) =
                    stack.pop_if(|(top, _)| *top != Token::LParen && priority <= precedence(top))
                {
                    output.push(entry);
                }
                stack.push((token, position));
                expect_operand = true;
            },
        }

        previous = Some((token, position));
    }

    if expect_operand && let Some(error) = missing_operand(previous) {
        return Err(error);
    }

    while let Some((token, position)) = stack.pop() {
        if token == Token::LParen {
            return Err(ParseError::UnclosedParen { position });
        }
        output.push((token, position));
    }

    log::debug!("postfix: {}",
                output.iter().map(|(tok, _)| tok.to_string()).collect::<Vec<_>>().join(" "));
    Ok(output)
}

/// Builds the error for an operand that never arrived, if the token before
/// the gap was an operator.
fn missing_operand(previous: Option<(Token, usize)>) -> Option<ParseError> {
    let (token, position) = previous?;
    token_to_operator(&token).map(|operator| ParseError::MissingOperand { operator, position })
}

/// Returns the stack priority of a token: `*` and `/` bind tighter than `+`
/// and `-`; parentheses and literals have none.
fn precedence(token: &Token) -> u8 {
    token_to_operator(token).map_or(0, |op| op.precedence())
}

/// Builds the error for a token that could not be classified.
fn unrecognized(raw: &str, position: usize) -> ParseError {
    parse_literal(raw, position).err()
                                .unwrap_or_else(|| ParseError::UnexpectedToken { token: raw.to_string(),
                                                                                 position })
}
