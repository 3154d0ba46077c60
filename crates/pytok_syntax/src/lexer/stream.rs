//! Worker-thread token stream
//!
//! [`TokenStream`] runs a [`Tokenizer`] on a dedicated producer thread and hands tokens to the consumer through a
//! single-slot channel, so the producer never runs more than one token ahead. The stream ends after the `EOF`
//! token or after the first error, whichever comes first.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use super::Tokenizer;
use super::tokens::{Token, TokenKind};
use crate::diagnostics::LexError;

/// Tokens produced concurrently with their consumption.
///
/// Dropping the stream early disconnects the channel; the producer notices on its next send, stops reading, and is
/// joined before `drop` returns.
#[derive(Debug)]
pub struct TokenStream {
    receiver: Option<Receiver<Result<Token, LexError>>>,
    worker: Option<JoinHandle<()>>,
    done: bool,
}

impl TokenStream {
    /// Start a producer thread over newline-stripped physical lines.
    ///
    /// ## Errors
    /// Returns the OS error if the producer thread cannot be spawned.
    #[tracing::instrument(skip_all)]
    pub fn spawn<I>(lines: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = io::Result<String>>,
        I::IntoIter: Send + 'static,
    {
        let lines = lines.into_iter();
        let (tx, rx) = mpsc::sync_channel(1);

        let worker = thread::Builder::new().name("pytok-producer".into()).spawn(move || {
            for item in Tokenizer::new(lines) {
                if tx.send(item).is_err() {
                    tracing::debug!("token consumer went away; stopping producer");
                    break;
                }
            }
        })?;

        Ok(Self {
            receiver: Some(rx),
            worker: Some(worker),
            done: false,
        })
    }

    /// Start a producer thread reading lines from a buffered reader.
    ///
    /// ## Errors
    /// Returns the OS error if the producer thread cannot be spawned.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        Self::spawn(reader.lines())
    }

    fn close(&mut self) {
        self.done = true;
        self.receiver = None;
        let Some(worker) = self.worker.take() else {
            return;
        };
        if worker.join().is_err() {
            tracing::warn!("token producer thread panicked");
        }
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let received = self.receiver.as_ref()?.recv();
        match received {
            Ok(item) => {
                if matches!(&item, Ok(token) if token.kind == TokenKind::Eof) || item.is_err() {
                    self.close();
                }
                Some(item)
            }
            // The producer finished or panicked without sending a terminal item.
            Err(_) => {
                self.close();
                None
            }
        }
    }
}

impl std::iter::FusedIterator for TokenStream {}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn stream(source: &'static str) -> TokenStream {
        TokenStream::from_reader(source.as_bytes()).unwrap()
    }

    #[test]
    fn test_stream_matches_pull() {
        let source = "def f(a):\n    return 'x'\n\nclass C:\n    pass\n";
        let streamed: Vec<_> = stream(source).collect::<Result<_, _>>().unwrap();
        assert_eq!(streamed, lex(source).unwrap());
    }

    #[test]
    fn test_stream_ends_after_eof() {
        let mut tokens = stream("x");
        let kinds: Vec<_> = tokens.by_ref().map(|t| t.unwrap().kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Newline, TokenKind::Eof]);
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_stream_ends_after_error() {
        let mut tokens = stream("a\n'open\nb\n");
        assert_eq!(tokens.next(), Some(Ok(Token::new(TokenKind::Identifier, "a"))));
        assert_eq!(tokens.next(), Some(Ok(Token::marker(TokenKind::Newline))));
        assert_eq!(
            tokens.next(),
            Some(Err(LexError::UnterminatedShortLiteral {
                line: 2,
                kind: TokenKind::String
            }))
        );
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_early_drop_stops_producer() {
        let source: String = "x = 1\n".repeat(10_000);
        let mut tokens = TokenStream::from_reader(io::Cursor::new(source)).unwrap();
        assert!(tokens.next().is_some());
        // Dropping joins the producer; a hang here would mean it never observed the disconnect.
        drop(tokens);
    }

    #[test]
    fn test_spawn_over_line_vector() {
        let lines: Vec<io::Result<String>> = vec![Ok("if x:".to_string()), Ok("    y".to_string())];
        let count = TokenStream::spawn(lines).unwrap().count();
        // IF IDENT ILLEGAL NEWLINE INDENT IDENT NEWLINE EOF
        assert_eq!(count, 8);
    }
}
