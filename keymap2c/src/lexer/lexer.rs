use super::Token;
use keymap_core::KeymapError;
use logos::{Lexer as LogosLexer, Logos};

/// Logos lexer that also knows which line each token starts on.
pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    line: usize,
    /// Input position up to which newlines have been counted.
    scanned: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            line: 1,
            scanned: 0,
        }
    }

    /// Advances the line count to the start of the current token. Newlines
    /// in skipped comments count too.
    fn sync_line(&mut self) -> usize {
        let start = self.inner.span().start;
        let source = self.inner.source();
        self.line += source[self.scanned..start].matches('\n').count();
        self.scanned = start;
        self.line
    }

    /// All tokens, each paired with the line it starts on.
    pub fn collect_all(self) -> Result<Vec<(Token, usize)>, KeymapError> {
        self.collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), KeymapError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let line = self.sync_line();
        Some(match result {
            Ok(token) => Ok((token, line)),
            Err(()) => Err(KeymapError::Parse {
                line,
                message: format!("Unexpected token: '{}'", self.inner.slice()),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_through_comments() {
        let input = "KC_A\n/* two\nlines */ KC_B";
        let tokens = Lexer::new(input).collect_all().unwrap();

        assert_eq!(
            tokens,
            vec![
                (Token::Identifier("KC_A".to_string()), 1),
                (Token::Newline, 1),
                (Token::Identifier("KC_B".to_string()), 3),
            ]
        );
    }

    #[test]
    fn test_collect_all_lines() {
        let tokens = Lexer::new("enum\n{\n}").collect_all().unwrap();
        let lines: Vec<_> = tokens
            .iter()
            .filter(|(token, _)| *token != Token::Newline)
            .map(|(_, line)| *line)
            .collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_continuation_counts_line() {
        let tokens = Lexer::new("#define A \\\n  4\nB").collect_all().unwrap();
        assert_eq!(tokens.last(), Some(&(Token::Identifier("B".to_string()), 3)));
    }
}
