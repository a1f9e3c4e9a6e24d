use logos::{Lexer, Logos, Skip};

/// Skips to the end of a `/* ... */` comment. An unterminated comment runs
/// to the end of the input.
fn block_comment(lex: &mut Lexer<Token>) -> Skip {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
    Skip
}

/// Tokens of a C header, as far as keycode extraction cares about them.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments, string literals, whitespace and line continuations (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", block_comment)]
    #[regex(r#""([^"\\\n]|\\.)*""#, logos::skip)]
    #[regex(r"[ \t\r]+", logos::skip)]
    #[regex(r"\\\r?\n", logos::skip)]
    // Directives other than #define carry nothing we need
    #[regex(r"#[ \t]*(include|if|ifdef|ifndef|elif|else|endif|pragma|undef|error|warning)[^\n]*", logos::skip)]
    Comment,

    // Ends a #define body
    #[token("\n")]
    Newline,

    #[regex(r"#[ \t]*define")]
    Define,

    #[token("enum")]
    Enum,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("|")]
    Pipe,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[regex(r"0[xX][0-9a-fA-F]+[uUlL]*", priority = 3, callback = |lex| {
        let digits = lex.slice()[2..].trim_end_matches(['u', 'U', 'l', 'L']);
        u32::from_str_radix(digits, 16).ok()
    })]
    #[regex(r"[0-9]+[uUlL]*", priority = 3, callback = |lex| {
        lex.slice().trim_end_matches(['u', 'U', 'l', 'L']).parse::<u32>().ok()
    })]
    Number(Option<u32>),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 3, callback = |lex| lex.slice().to_string())]
    Identifier(String),

    // Any other punctuation: casts, comparisons, struct syntax
    #[regex(r"[^ \t\r\n]", priority = 1, callback = |lex| lex.slice().chars().next())]
    Other(Option<char>),
}
