use crate::error::ParseError;

/// Result type used by the token stream.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2e10`.
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `rate`.
    Identifier(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
    /// `;` — ends a statement and asks for its result to be printed.
    Semicolon,
    /// `q` on its own — leaves the interactive loop.
    Quit,
}

impl Token {
    /// Maps a single marker character to its token.
    ///
    /// Covers the fixed operator and punctuation set; numbers, identifiers
    /// and the quit word are scanned separately.
    #[must_use]
    pub const fn from_marker(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '%' => Some(Self::Percent),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '=' => Some(Self::Equals),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

/// A stream of [`Token`]s read on demand from a character source.
///
/// The stream owns two small buffers on top of the raw source: a one
/// character pushback used while scanning literals and identifiers, and a one
/// token pushback slot that gives the parser its single token of lookahead.
/// At most one unread token is ever visible to callers; pushing a second one
/// back is a [`ParseError::PushbackOverflow`].
///
/// One `TokenStream` lives for an entire session. It is never reconstructed;
/// after an error the driver resynchronizes it with [`TokenStream::skip_until`].
///
/// # Example
/// ```
/// use deskcalc::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("1 + x;".chars());
///
/// assert_eq!(tokens.get().unwrap(), Some(Token::Number(1.0)));
/// assert_eq!(tokens.get().unwrap(), Some(Token::Plus));
/// assert_eq!(tokens.get().unwrap(), Some(Token::Identifier("x".to_string())));
/// assert_eq!(tokens.get().unwrap(), Some(Token::Semicolon));
/// assert_eq!(tokens.get().unwrap(), None);
/// ```
pub struct TokenStream<I>
    where I: Iterator<Item = char>
{
    source:  I,
    pending: Option<char>,
    buffer:  Option<Token>,
    line:    usize,
}

impl<I> TokenStream<I> where I: Iterator<Item = char>
{
    /// Creates a token stream over a character source, starting at line 1.
    pub fn new(source: I) -> Self {
        Self { source,
               pending: None,
               buffer: None,
               line: 1, }
    }

    /// The current source line, for error reporting.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Reads the next token.
    ///
    /// If the pushback slot is occupied it is drained and returned without
    /// touching the source. Otherwise the next non-whitespace character is
    /// classified: a fixed marker character becomes its token, a digit or
    /// `.` starts a numeric literal, an ASCII letter starts an identifier
    /// (the word `q` alone becomes [`Token::Quit`]; everything else,
    /// including `let`, is an ordinary [`Token::Identifier`]).
    ///
    /// # Returns
    /// - `Ok(Some(token))`: The next token.
    /// - `Ok(None)`: The source is exhausted at a token boundary.
    ///
    /// # Errors
    /// [`ParseError::BadToken`] for an unclassifiable character or a
    /// malformed numeric literal.
    pub fn get(&mut self) -> ParseResult<Option<Token>> {
        if let Some(token) = self.buffer.take() {
            return Ok(Some(token));
        }

        let Some(ch) = self.next_nonspace_char() else {
            return Ok(None);
        };

        if let Some(token) = Token::from_marker(ch) {
            return Ok(Some(token));
        }
        if ch.is_ascii_digit() || ch == '.' {
            return self.scan_number(ch).map(Some);
        }
        if ch.is_ascii_alphabetic() {
            return Ok(Some(self.scan_identifier(ch)));
        }

        Err(ParseError::BadToken { found: ch.to_string(),
                                   line:  self.line, })
    }

    /// Pushes one token back onto the stream so the next [`TokenStream::get`]
    /// returns it again.
    ///
    /// # Errors
    /// [`ParseError::PushbackOverflow`] if the slot is already occupied.
    /// Callers must drain the slot via `get` before pushing back again.
    pub fn putback(&mut self, token: Token) -> ParseResult<()> {
        if self.buffer.is_some() {
            return Err(ParseError::PushbackOverflow { line: self.line });
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Discards input up to and including the marker character.
    ///
    /// If the pushback slot already holds the marker's token, it is drained
    /// and the scan ends there. Otherwise the slot is cleared unconditionally
    /// and raw characters are discarded until the marker is found. Running
    /// out of input is not an error; the scan just ends.
    ///
    /// The driver uses this to resynchronize on the statement separator
    /// after reporting an error.
    pub fn skip_until(&mut self, marker: char) {
        if let Some(token) = self.buffer.take() {
            if Token::from_marker(marker).is_some_and(|m| m == token) {
                return;
            }
        }

        while let Some(ch) = self.next_char() {
            if ch == marker {
                return;
            }
        }
    }

    /// Draws one raw character, favoring the pushed-back one.
    ///
    /// Newlines are counted only when first drawn from the source, so a
    /// pushed-back character cannot advance the line twice.
    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.pending.take() {
            return Some(ch);
        }
        let ch = self.source.next()?;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn next_nonspace_char(&mut self) -> Option<char> {
        loop {
            let ch = self.next_char()?;
            if !ch.is_whitespace() {
                return Some(ch);
            }
        }
    }

    /// Scans a numeric literal starting from its first character.
    ///
    /// Accumulates digits and `.`, plus at most one exponent part, then lets
    /// `str::parse::<f64>` validate the whole literal. The first character
    /// that cannot extend the literal is pushed back onto the raw source.
    fn scan_number(&mut self, first: char) -> ParseResult<Token> {
        let mut literal = String::from(first);

        loop {
            match self.next_char() {
                Some(ch) if ch.is_ascii_digit() || ch == '.' => literal.push(ch),
                Some(ch @ ('e' | 'E'))
                    if literal.chars().any(|c| c.is_ascii_digit())
                       && !literal.contains(['e', 'E']) =>
                {
                    self.scan_exponent(&mut literal, ch)?;
                },
                Some(ch) => {
                    self.pending = Some(ch);
                    break;
                },
                None => break,
            }
        }

        literal.parse()
               .map(Token::Number)
               .map_err(|_| ParseError::BadToken { found: literal,
                                                   line:  self.line, })
    }

    /// Scans the exponent part of a numeric literal: `e`/`E`, an optional
    /// sign, and at least one digit. An exponent marker not followed by a
    /// digit is a malformed literal.
    fn scan_exponent(&mut self, literal: &mut String, marker: char) -> ParseResult<()> {
        literal.push(marker);

        match self.next_char() {
            Some(sign @ ('+' | '-')) => {
                literal.push(sign);
                match self.next_char() {
                    Some(digit) if digit.is_ascii_digit() => {
                        literal.push(digit);
                        Ok(())
                    },
                    _ => Err(ParseError::BadToken { found: literal.clone(),
                                                    line:  self.line, }),
                }
            },
            Some(digit) if digit.is_ascii_digit() => {
                literal.push(digit);
                Ok(())
            },
            _ => Err(ParseError::BadToken { found: literal.clone(),
                                            line:  self.line, }),
        }
    }

    /// Scans an identifier starting from its first letter.
    ///
    /// There is no keyword table: `let` comes back as a plain identifier.
    /// The single word `q` is the quit command.
    fn scan_identifier(&mut self, first: char) -> Token {
        let mut name = String::from(first);

        while let Some(ch) = self.next_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
            } else {
                self.pending = Some(ch);
                break;
            }
        }

        if name == "q" {
            Token::Quit
        } else {
            Token::Identifier(name)
        }
    }
}
