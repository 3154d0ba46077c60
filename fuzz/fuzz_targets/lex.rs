#![no_main]

use libfuzzer_sys::fuzz_target;
use pytok::lexer::{self, TokenKind, TokenStream};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let pulled = lexer::lex(s);
        if let Ok(tokens) = &pulled {
            assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        }

        // The producer thread must agree with the pull tokenizer
        if let Ok(stream) = TokenStream::from_reader(std::io::Cursor::new(s.to_owned())) {
            let streamed: Result<Vec<_>, _> = stream.collect();
            assert_eq!(streamed, pulled);
        }
    }
});
