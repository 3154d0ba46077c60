//! Snapshot tests for whole-program token dumps.
//!
//! Each dump prints one token per line in the same `NAME "literal"` form the CLI uses.

use pytok_syntax::lexer::lex;

fn dump(source: &str) -> String {
    let tokens = lex(source).expect("source should tokenize");
    tokens.iter().map(|t| format!("{t}\n")).collect()
}

#[test]
fn snapshot_nested_blocks() {
    let source = "\
class Greeter:
    def greet(self, name):
        if name is None:
            return
        print(f'hi {name}')

    async def wait(self):
        await self.done
";
    insta::assert_snapshot!(dump(source), @r#"
    CLASS
    IDENTIFIER "Greeter"
    ILLEGAL ":"
    NEWLINE
    INDENT
    DEF
    IDENTIFIER "greet"
    PAREN_LEFT
    IDENTIFIER "self"
    ILLEGAL ","
    IDENTIFIER "name"
    PAREN_RIGHT
    ILLEGAL ":"
    NEWLINE
    INDENT
    IF
    IDENTIFIER "name"
    IS
    NONE
    ILLEGAL ":"
    NEWLINE
    INDENT
    RETURN
    NEWLINE
    DEINDENT
    IDENTIFIER "print"
    PAREN_LEFT
    FSTRING "hi {name}"
    PAREN_RIGHT
    NEWLINE
    DEINDENT
    ASYNC
    DEF
    IDENTIFIER "wait"
    PAREN_LEFT
    IDENTIFIER "self"
    PAREN_RIGHT
    ILLEGAL ":"
    NEWLINE
    INDENT
    AWAIT
    IDENTIFIER "self"
    ILLEGAL "."
    IDENTIFIER "done"
    NEWLINE
    EOF
    "#);
}

#[test]
fn snapshot_bracket_continuation_with_literals() {
    let source = "\
data = [
    b'\\x00', Rb'\\d+',
    '''multi
line''',
]
";
    insta::assert_snapshot!(dump(source), @r#"
    IDENTIFIER "data"
    ILLEGAL "="
    BRACKET_LEFT
    BYTES "\\x00"
    ILLEGAL ","
    RAWBYTES "\\d+"
    ILLEGAL ","
    LONGSTRING "multi\nline"
    ILLEGAL ","
    BRACKET_RIGHT
    NEWLINE
    EOF
    "#);
}

#[test]
fn snapshot_tabs_and_dedent_to_outer_level() {
    let source = "if a:\n\tb\n\tif c:\n\t    d\ne\n";
    insta::assert_snapshot!(dump(source), @r#"
    IF
    IDENTIFIER "a"
    ILLEGAL ":"
    NEWLINE
    INDENT
    IDENTIFIER "b"
    NEWLINE
    IF
    IDENTIFIER "c"
    ILLEGAL ":"
    NEWLINE
    INDENT
    IDENTIFIER "d"
    NEWLINE
    DEINDENT
    DEINDENT
    IDENTIFIER "e"
    NEWLINE
    EOF
    "#);
}
