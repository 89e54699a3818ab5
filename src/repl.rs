use std::io::{Read, Write};

use crate::{
    error::Error,
    interpreter::{context::Context, lexer::TokenStream, parser::parse_statement},
};

/// Written to the output stream before each statement is read.
pub const PROMPT: &str = "> ";
/// Written to the output stream before each result.
pub const RESULT: &str = "= ";

/// Runs the interactive loop until the quit command or the end of input.
///
/// Each cycle prompts, reads one statement, evaluates it, and prints its
/// value prefixed with [`RESULT`]. A statement that fails is reported on the
/// diagnostic stream and the rest of it is discarded by skipping to the next
/// `;`; the loop then resumes. The streams are generic so tests can drive
/// the loop with in-memory buffers.
///
/// # Parameters
/// - `input`: Character source for the whole session; a read error ends it.
/// - `output`: Receives prompts and results.
/// - `diagnostics`: Receives one line per recovered error.
///
/// # Errors
/// Only fatal failures escape the loop: a full-buffer pushback, which
/// signals a parser bug, or an unwritable output stream.
pub fn run<R, W, E>(input: R, mut output: W, mut diagnostics: E) -> Result<(), Error>
    where R: Read,
          W: Write,
          E: Write
{
    let mut context = Context::new();
    let source = input.bytes().map_while(Result::ok).map(char::from);
    let mut tokens = TokenStream::new(source);

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        match parse_statement(&mut tokens, &mut context) {
            Ok(Some(value)) => writeln!(output, "{RESULT}{value}")?,
            Ok(None) => return Ok(()),
            Err(error) => {
                if error.is_fatal() {
                    return Err(error);
                }
                writeln!(diagnostics, "{error}")?;
                diagnostics.flush()?;
                tokens.skip_until(';');
            },
        }
    }
}
