use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        context::Context,
        lexer::{Token, TokenStream},
    },
};

/// Result type used by the parser/evaluator.
///
/// Parsing and evaluation happen in one pass, so a statement can fail with
/// either error class; both arrive here as [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// Parses and evaluates one statement.
///
/// A statement is any number of leading `;` separators followed by either
/// the quit command or a full expression. This is the entry point shared by
/// the interactive driver and script evaluation.
///
/// # Parameters
/// - `tokens`: The session's token stream.
/// - `context`: The variable environment; assignments write into it.
///
/// # Returns
/// - `Ok(Some(value))`: The statement's value.
/// - `Ok(None)`: The quit command was read, or the input is exhausted.
///
/// # Errors
/// Any parse or runtime error raised while reading the statement.
pub fn parse_statement<I>(tokens: &mut TokenStream<I>,
                          context: &mut Context)
                          -> EvalResult<Option<f64>>
    where I: Iterator<Item = char>
{
    let mut token = match tokens.get()? {
        Some(t) => t,
        None => return Ok(None),
    };

    while token == Token::Semicolon {
        token = match tokens.get()? {
            Some(t) => t,
            None => return Ok(None),
        };
    }

    if token == Token::Quit {
        return Ok(None);
    }

    tokens.putback(token)?;
    parse_expression(tokens, context).map(Some)
}

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression evaluation. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy. The token that ends the expression is pushed back
/// for the caller to reinspect.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: The session's token stream.
/// - `context`: The variable environment.
///
/// # Returns
/// The expression's value.
///
/// # Errors
/// Any parse or runtime error raised by a sub-expression.
pub fn parse_expression<I>(tokens: &mut TokenStream<I>,
                           context: &mut Context)
                           -> EvalResult<f64>
    where I: Iterator<Item = char>
{
    parse_additive(tokens, context)
}

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative chains of `+` and `-`, folding each right-hand
/// operand into the running value as soon as it is parsed.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<I>(tokens: &mut TokenStream<I>, context: &mut Context) -> EvalResult<f64>
    where I: Iterator<Item = char>
{
    let mut left = parse_multiplicative(tokens, context)?;

    loop {
        match tokens.get()? {
            Some(Token::Plus) => left += parse_multiplicative(tokens, context)?,
            Some(Token::Minus) => left -= parse_multiplicative(tokens, context)?,
            Some(token) => {
                tokens.putback(token)?;
                break;
            },
            None => break,
        }
    }

    Ok(left)
}

/// Parses and evaluates multiplication-level operations.
///
/// Handles left-associative chains of `*`, `/` and `%`. Division and
/// remainder check the freshly evaluated right-hand operand and fail with
/// [`RuntimeError::DivisionByZero`] when it is exactly zero. The remainder
/// follows `f64`'s fmod semantics: the result's sign is the dividend's.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
fn parse_multiplicative<I>(tokens: &mut TokenStream<I>, context: &mut Context) -> EvalResult<f64>
    where I: Iterator<Item = char>
{
    let mut left = parse_primary(tokens, context)?;

    loop {
        match tokens.get()? {
            Some(Token::Star) => left *= parse_primary(tokens, context)?,
            Some(Token::Slash) => {
                let divisor = parse_primary(tokens, context)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line: tokens.line() }.into());
                }
                left /= divisor;
            },
            Some(Token::Percent) => {
                let divisor = parse_primary(tokens, context)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line: tokens.line() }.into());
                }
                left %= divisor;
            },
            Some(token) => {
                tokens.putback(token)?;
                break;
            },
            None => break,
        }
    }

    Ok(left)
}

/// Parses and evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals;
/// - parenthesized expressions, which require their closing `)`;
/// - identifiers — with one token of lookahead: `name = expression` assigns
///   into the context and yields the assigned value (assignment is itself a
///   valid sub-expression, so `x = y = 3` and `2 * (x = 4)` work), anything
///   else pushes the lookahead back and reads the name's current value;
/// - unary minus, which recurses into `parse_primary` itself and therefore
///   binds tighter than any binary operator.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
///              | IDENTIFIER "=" expression
///              | IDENTIFIER
///              | "-" primary
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] when input ends where a value was
///   required.
/// - [`ParseError::ExpectedClosingParen`] when a `(` group is not closed.
/// - [`ParseError::PrimaryExpected`] for any token that cannot begin a
///   primary.
fn parse_primary<I>(tokens: &mut TokenStream<I>, context: &mut Context) -> EvalResult<f64>
    where I: Iterator<Item = char>
{
    match tokens.get()? {
        Some(Token::Number(value)) => Ok(value),

        Some(Token::LParen) => {
            let value = parse_expression(tokens, context)?;
            match tokens.get()? {
                Some(Token::RParen) => Ok(value),
                _ => Err(ParseError::ExpectedClosingParen { line: tokens.line() }.into()),
            }
        },

        Some(Token::Identifier(name)) => match tokens.get()? {
            Some(Token::Equals) => {
                let value = parse_expression(tokens, context)?;
                context.assign(&name, value);
                Ok(value)
            },
            Some(token) => {
                tokens.putback(token)?;
                Ok(context.value_of(&name))
            },
            None => Ok(context.value_of(&name)),
        },

        Some(Token::Minus) => Ok(-parse_primary(tokens, context)?),

        Some(token) => Err(ParseError::PrimaryExpected { token: format!("{token:?}"),
                                                         line:  tokens.line(), }.into()),

        None => Err(ParseError::UnexpectedEndOfInput { line: tokens.line() }.into()),
    }
}
