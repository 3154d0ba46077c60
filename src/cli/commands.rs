//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use pytok_core::lang::keywords;
use thiserror::Error;

use crate::diagnostics::LexError;
use crate::lexer::{Token, TokenKind, TokenStream, Tokenizer};

use super::{CliError, CliResult, ExitCode};

/// Where tokenization runs relative to printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// Producer thread with a one-token handoff.
    Stream,
    /// Tokenize on the calling thread.
    Pull,
}

// ============================================================================
// Lexing
// ============================================================================

/// Tokenize a file and print `Received <token>` for every token.
pub fn lex_file(path: &Path, mode: LexMode, quiet: bool) -> CliResult<ExitCode> {
    let file =
        File::open(path).map_err(|e| CliError::failure(format!("Cannot open file '{}': {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    tracing::debug!(path = %path.display(), ?mode, "tokenizing file");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = match mode {
        LexMode::Stream => {
            let stream = TokenStream::from_reader(reader)
                .map_err(|e| CliError::failure(format!("Cannot start tokenizer thread: {}", e)))?;
            write_tokens(stream, &mut out, quiet)
        }
        LexMode::Pull => write_tokens(Tokenizer::from_reader(reader), &mut out, quiet),
    };

    let count = count.map_err(|e| match e {
        WriteError::Lex(err) => CliError::failure(render_lex_error(path, err)),
        io_err @ WriteError::Io(_) => CliError::failure(io_err.to_string()),
    })?;

    if quiet {
        writeln!(out, "{} tokens", count).map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Failure while copying tokens to the output.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("Error writing output: {0}")]
    Io(#[from] io::Error),
}

/// Print tokens until `EOF` (inclusive) and return how many were received.
///
/// Stops at the first lexical error; tokens received before it have already been written.
pub fn write_tokens<W: Write>(
    tokens: impl IntoIterator<Item = Result<Token, LexError>>,
    out: &mut W,
    quiet: bool,
) -> Result<usize, WriteError> {
    let mut count = 0;
    for item in tokens {
        let token = item?;
        count += 1;
        if !quiet {
            writeln!(out, "Received {}", token)?;
        }
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    Ok(count)
}

/// Render a lexical error through miette's report handler.
fn render_lex_error(path: &Path, err: LexError) -> String {
    let report = miette::Report::new(err).wrap_err(format!("failed to tokenize {}", path.display()));
    format!("{:?}", report)
}

// ============================================================================
// Registry listing
// ============================================================================

/// Print the reserved keyword registry.
pub fn print_keywords() -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_keywords(&mut out).map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

fn write_keywords<W: Write>(out: &mut W) -> io::Result<()> {
    for info in keywords::KEYWORDS {
        writeln!(out, "{:<10} {:<12} {}", info.canonical, format!("{:?}", info.category), info.since)?;
    }
    Ok(())
}
