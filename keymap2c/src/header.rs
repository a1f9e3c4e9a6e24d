//! Reads key code values out of a firmware C header.
//!
//! Only two constructs matter: `enum` bodies (explicit values and implicit
//! increments) and object-like `#define NAME value` lines. Values may be
//! simple constant expressions over numbers and other names. Macros expand
//! lazily as in C, so an alias may precede the enum it points into.
//! Anything that can't be evaluated is left out of the table.

use crate::lexer::{Lexer, Token};
use keymap_core::{KeyCodeTable, KeymapError};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Nested macro expansions give up past this depth.
const MAX_EXPANSION_DEPTH: usize = 16;

pub struct HeaderParser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    table: KeyCodeTable,
    /// `#define` bodies in declaration order
    macros: Vec<(String, Vec<Token>)>,
}

impl HeaderParser {
    pub fn new(input: &str) -> Result<Self, KeymapError> {
        Ok(Self {
            tokens: Lexer::new(input).collect_all()?,
            pos: 0,
            table: KeyCodeTable::new(),
            macros: Vec::new(),
        })
    }

    pub fn parse(mut self) -> Result<KeyCodeTable, KeymapError> {
        while let Some(token) = self.bump() {
            match token {
                Token::Define => self.parse_define(),
                Token::Enum => self.parse_enum()?,
                _ => {}
            }
        }

        let scope = Scope::new(&self.table, &self.macros);
        let defined: Vec<(String, u32)> = self
            .macros
            .iter()
            .filter_map(|(name, body)| match scope.evaluate(body) {
                Some(value) => Some((name.clone(), value)),
                None => {
                    debug!("skipping #define {}: not a constant", name);
                    None
                }
            })
            .collect();
        self.table.extend(defined);
        Ok(self.table)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_newlines(&mut self) {
        while self.peek() == Some(&Token::Newline) {
            self.pos += 1;
        }
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, line)| *line)
            .unwrap_or(1)
    }

    fn error(&self, message: impl Into<String>) -> KeymapError {
        KeymapError::Parse {
            line: self.line(),
            message: message.into(),
        }
    }

    fn parse_define(&mut self) {
        let name = match self.peek() {
            Some(Token::Identifier(name)) => name.clone(),
            _ => return,
        };
        self.pos += 1;

        let mut body = Vec::new();
        while let Some(token) = self.peek() {
            if *token == Token::Newline {
                break;
            }
            body.push(token.clone());
            self.pos += 1;
        }

        // Include guards have no value
        if !body.is_empty() {
            self.macros.push((name, body));
        }
    }

    fn parse_enum(&mut self) -> Result<(), KeymapError> {
        self.skip_newlines();
        if let Some(Token::Identifier(_)) = self.peek() {
            self.pos += 1;
            self.skip_newlines();
        }
        // A declaration such as `enum usage x;`, not a body
        if self.peek() != Some(&Token::LBrace) {
            return Ok(());
        }
        self.pos += 1;

        let mut next_value = Some(0u32);
        loop {
            self.skip_newlines();
            let name = match self.bump() {
                Some(Token::RBrace) => return Ok(()),
                Some(Token::Identifier(name)) => name,
                Some(token) => {
                    self.pos -= 1;
                    return Err(self.error(format!("Expected enumerator name, found {:?}", token)));
                }
                None => return Err(self.error("Unterminated enum")),
            };

            self.skip_newlines();
            let value = if self.peek() == Some(&Token::Equals) {
                self.pos += 1;
                let expr = self.enum_expression()?;
                Scope::new(&self.table, &self.macros).evaluate(&expr)
            } else {
                next_value
            };

            match value {
                Some(value) => {
                    self.table.insert(name, value);
                }
                None => debug!("skipping enumerator {}: value unknown", name),
            }
            next_value = value.and_then(|value| value.checked_add(1));

            self.skip_newlines();
            match self.bump() {
                Some(Token::Comma) => {}
                Some(Token::RBrace) => return Ok(()),
                Some(token) => {
                    self.pos -= 1;
                    return Err(self.error(format!("Expected ',' or '}}', found {:?}", token)));
                }
                None => return Err(self.error("Unterminated enum")),
            }
        }
    }

    /// Collects the tokens of an enumerator value up to the next `,` or `}`
    /// outside parentheses.
    fn enum_expression(&mut self) -> Result<Vec<Token>, KeymapError> {
        let mut depth = 0usize;
        let mut expr = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("Unterminated enum")),
                Some(Token::Comma) | Some(Token::RBrace) if depth == 0 => return Ok(expr),
                Some(Token::Newline) => {}
                Some(token) => {
                    match token {
                        Token::LParen => depth += 1,
                        Token::RParen => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                    expr.push(token.clone());
                }
            }
            self.pos += 1;
        }
    }
}

/// Names visible to an expression: values read so far plus macro bodies.
struct Scope<'a> {
    table: &'a KeyCodeTable,
    macros: HashMap<&'a str, &'a [Token]>,
}

impl<'a> Scope<'a> {
    fn new(table: &'a KeyCodeTable, macros: &'a [(String, Vec<Token>)]) -> Self {
        Self {
            table,
            macros: macros
                .iter()
                .map(|(name, body)| (name.as_str(), body.as_slice()))
                .collect(),
        }
    }

    /// Evaluates a constant expression of numbers, names, parentheses and
    /// `+ - << >> |`. Returns `None` for anything else.
    fn evaluate(&self, tokens: &[Token]) -> Option<u32> {
        self.evaluate_at(tokens, 0)
    }

    fn evaluate_at(&self, tokens: &[Token], depth: usize) -> Option<u32> {
        let mut eval = Evaluator {
            scope: self,
            tokens,
            pos: 0,
            depth,
        };
        let value = eval.or()?;
        (eval.pos == tokens.len()).then_some(value)
    }

    fn lookup(&self, name: &str, depth: usize) -> Option<u32> {
        if let Some(value) = self.table.get(name) {
            return Some(value);
        }
        if depth >= MAX_EXPANSION_DEPTH {
            return None;
        }
        let body = self.macros.get(name)?;
        self.evaluate_at(body, depth + 1)
    }
}

struct Evaluator<'s, 'a> {
    scope: &'s Scope<'a>,
    tokens: &'s [Token],
    pos: usize,
    depth: usize,
}

impl Evaluator<'_, '_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn or(&mut self) -> Option<u32> {
        let mut value = self.shift()?;
        while self.peek() == Some(&Token::Pipe) {
            self.pos += 1;
            value |= self.shift()?;
        }
        Some(value)
    }

    fn shift(&mut self) -> Option<u32> {
        let mut value = self.additive()?;
        loop {
            match self.peek() {
                Some(Token::Shl) => {
                    self.pos += 1;
                    value = value.checked_shl(self.additive()?)?;
                }
                Some(Token::Shr) => {
                    self.pos += 1;
                    value = value.checked_shr(self.additive()?)?;
                }
                _ => return Some(value),
            }
        }
    }

    fn additive(&mut self) -> Option<u32> {
        let mut value = self.primary()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value = value.checked_add(self.primary()?)?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value = value.checked_sub(self.primary()?)?;
                }
                _ => return Some(value),
            }
        }
    }

    fn primary(&mut self) -> Option<u32> {
        let token = self.peek()?.clone();
        self.pos += 1;
        match token {
            Token::Number(value) => value,
            Token::Identifier(name) => self.scope.lookup(&name, self.depth),
            Token::LParen => {
                let value = self.or()?;
                if self.peek() != Some(&Token::RParen) {
                    return None;
                }
                self.pos += 1;
                Some(value)
            }
            _ => None,
        }
    }
}

/// Parses header text into a key code table.
pub fn parse_keycode_header(input: &str) -> Result<KeyCodeTable, KeymapError> {
    HeaderParser::new(input)?.parse()
}

/// Reads a header file into a key code table.
pub fn load_keycode_header(path: &Path) -> Result<KeyCodeTable, KeymapError> {
    let content = fs::read_to_string(path)?;
    let table = parse_keycode_header(&content)?;
    debug!("read {} key codes from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_implicit_increment() {
        let table = parse_keycode_header("enum { KC_NO, KC_ROLL_OVER, KC_A = 4, KC_B };").unwrap();
        assert_eq!(table.get("KC_NO"), Some(0));
        assert_eq!(table.get("KC_ROLL_OVER"), Some(1));
        assert_eq!(table.get("KC_A"), Some(4));
        assert_eq!(table.get("KC_B"), Some(5));
    }

    #[test]
    fn test_expression_values() {
        let input = "\
#define QK_MODS 0x0100
enum quantum {
    QK_LCTL = QK_MODS,
    QK_LSFT = (QK_MODS << 1),
    QK_RALT = 0x1000 | QK_MODS,
    QK_NEXT,
};
";
        let table = parse_keycode_header(input).unwrap();
        assert_eq!(table.get("QK_LCTL"), Some(0x0100));
        assert_eq!(table.get("QK_LSFT"), Some(0x0200));
        assert_eq!(table.get("QK_RALT"), Some(0x1100));
        assert_eq!(table.get("QK_NEXT"), Some(0x1101));
    }

    #[test]
    fn test_unknown_value_breaks_increment() {
        let table = parse_keycode_header("enum { A = MISSING, B, C = 7, D };").unwrap();
        assert_eq!(table.get("A"), None);
        assert_eq!(table.get("B"), None);
        assert_eq!(table.get("C"), Some(7));
        assert_eq!(table.get("D"), Some(8));
    }

    #[test]
    fn test_function_like_define_skipped() {
        let input = "#define LCTL(kc) (QK_LCTL | (kc))\n#define KC_TRNS KC_TRANSPARENT\n";
        let table = parse_keycode_header(input).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_alias_before_enum() {
        let input = "#define KC_LCTL KC_LCTRL\nenum { KC_LCTRL = 0xE0, KC_LSHIFT };\n";
        let table = parse_keycode_header(input).unwrap();
        assert_eq!(table.get("KC_LCTL"), Some(0xE0));
        assert_eq!(table.get("KC_LSHIFT"), Some(0xE1));
    }

    #[test]
    fn test_enum_value_from_macro() {
        let input = "#define SAFE_RANGE (BASE + 2)\n#define BASE 0x10\nenum { XZ_PASS = SAFE_RANGE, XZ_CLMK };";
        let table = parse_keycode_header(input).unwrap();
        assert_eq!(table.get("XZ_PASS"), Some(0x12));
        assert_eq!(table.get("XZ_CLMK"), Some(0x13));
        assert_eq!(table.get("SAFE_RANGE"), Some(0x12));
    }

    #[test]
    fn test_recursive_macros_give_up() {
        let table = parse_keycode_header("#define A B\n#define B A\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_commented_enum() {
        let input = "/* Keyboard/Keypad Page (0x07) */\nenum hid_keyboard_keypad_usage {\n    KC_NO = 0x00, /* 0x00 */\n    KC_A = 0x04,\n};\n";
        let table = parse_keycode_header(input).unwrap();
        assert_eq!(table.get("KC_NO"), Some(0x00));
        assert_eq!(table.get("KC_A"), Some(0x04));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unterminated_enum() {
        let result = parse_keycode_header("enum keys {\n  KC_A = 4,\n  KC_B");
        match result {
            Err(KeymapError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("Unterminated enum"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_enumerator() {
        let result = parse_keycode_header("enum {\n  4 = KC_A\n};");
        assert!(matches!(result, Err(KeymapError::Parse { line: 2, .. })));
    }
}
