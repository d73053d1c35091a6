//! The `az` scanner: a single left-to-right pass over a UTF-8 source
//! string producing positioned tokens.

use tracing::instrument;

use super::error::LexicalError;
use super::index::{ByteIndex, Utf8Index};
use super::position::{CharacterPosition, SubstringPosition};
use super::token::{NumericLiteralValueKind, Token, TokenContent, TokenKind};

/// Tokenizes an entire source string.
///
/// # Errors
///
/// Returns the first [`LexicalError`] encountered. There is no error
/// recovery: a lexical error aborts tokenization entirely.
#[instrument(level = "trace", skip(source))]
pub fn tokenize_string(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Unicode `Zs` (space separator) codepoints.
///
/// `char::is_whitespace` would also catch `\n`, `\t`, etc., which the
/// grammar treats separately (or not at all), so the set is enumerated
/// explicitly instead.
fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
    byte_in_line: usize,
    utf8_in_line: usize,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 0,
            byte_in_line: 0,
            utf8_in_line: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn char_at_offset(&self, skip: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(skip)
    }

    /// Any character that would begin another valid token (including
    /// EOF via the caller checking `current_char` first).
    ///
    /// Used to decide where an identifier, a numeric literal's value,
    /// or its type suffix is allowed to end: anything in this set is a
    /// legitimate terminator, anything else is unclassifiable and is
    /// reported as an `UnexpectedCharacter`-shaped error.
    fn starts_new_token(c: char) -> bool {
        matches!(
            c,
            '(' | ')'
                | '{'
                | '}'
                | ','
                | ';'
                | '.'
                | '+'
                | '*'
                | '-'
                | '/'
                | ':'
                | '='
                | '!'
                | '<'
                | '>'
                | '\n'
        ) || is_space_separator(c)
            || c.is_ascii_alphabetic()
            || c == '_'
            || c.is_ascii_digit()
    }

    fn character_position(&self) -> CharacterPosition {
        CharacterPosition::new(
            ByteIndex::new(self.byte_in_line),
            Utf8Index::new(self.utf8_in_line),
        )
    }

    fn position_from(&self, start_line: usize, start_character: CharacterPosition) -> SubstringPosition {
        SubstringPosition::new(start_line, start_character, self.line, self.character_position())
    }

    /// Consumes and returns the current character, advancing line/column
    /// bookkeeping. Panics at EOF: callers must check `current_char` first.
    fn bump(&mut self) -> char {
        let c = self.current_char().expect("bump called at end of input");
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.byte_in_line = 0;
            self.utf8_in_line = 0;
        } else {
            self.byte_in_line += c.len_utf8();
            self.utf8_in_line += 1;
        }
        c
    }

    fn consume_digits(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexicalError> {
        let Some(first) = self.current_char() else {
            return Ok(None);
        };

        let start_byte = self.pos;
        let start_line = self.line;
        let start_character = self.character_position();
        self.bump();

        macro_rules! simple {
            ($kind:expr) => {{
                let position = self.position_from(start_line, start_character);
                Ok(Some(Token::new(
                    TokenContent::new($kind, &self.source[start_byte..self.pos]),
                    position,
                )))
            }};
        }

        match first {
            '(' => simple!(TokenKind::OpenParenthesis),
            ')' => simple!(TokenKind::CloseParenthesis),
            '{' => simple!(TokenKind::OpenBrace),
            '}' => simple!(TokenKind::CloseBrace),
            ',' => simple!(TokenKind::Comma),
            ';' => simple!(TokenKind::Semicolon),
            '+' => simple!(TokenKind::Plus),
            '*' => simple!(TokenKind::Asterisk),
            ':' => simple!(TokenKind::Colon),
            '.' if matches!(self.current_char(), Some(c) if c.is_ascii_digit()) => self
                .scan_numeric_literal(start_byte, start_line, start_character, '.')
                .map(Some),
            '.' => simple!(TokenKind::Dot),
            '-' if self.current_char() == Some('>') => {
                self.bump();
                simple!(TokenKind::Arrow)
            }
            '-' => simple!(TokenKind::Minus),
            '/' if self.current_char() == Some('/') => {
                self.bump();
                self.scan_line_comment(start_byte, start_line, start_character)
                    .map(Some)
            }
            '/' if self.current_char() == Some('*') => {
                self.bump();
                self.scan_block_comment(start_byte, start_line, start_character)
                    .map(Some)
            }
            '/' => simple!(TokenKind::Slash),
            '=' if self.current_char() == Some('=') => {
                self.bump();
                simple!(TokenKind::EqualTo)
            }
            '=' => simple!(TokenKind::Assignment),
            '!' if self.current_char() == Some('=') => {
                self.bump();
                simple!(TokenKind::NotEqualTo)
            }
            '!' => Err(LexicalError::UnexpectedCharacter {
                character: '!',
                position: self.position_from(start_line, start_character),
                string: self.source[start_byte..self.pos].to_string(),
            }),
            '<' if self.current_char() == Some('=') => {
                self.bump();
                simple!(TokenKind::LowerThanOrEqualTo)
            }
            '<' => simple!(TokenKind::LowerThan),
            '>' if self.current_char() == Some('=') => {
                self.bump();
                simple!(TokenKind::GreaterThanOrEqualTo)
            }
            '>' => simple!(TokenKind::GreaterThan),
            '\n' => simple!(TokenKind::Newline),
            c if is_space_separator(c) => {
                self.scan_whitespace(start_byte, start_line, start_character)
                    .map(Some)
            }
            c if c.is_ascii_alphabetic() || c == '_' => self
                .scan_identifier(start_byte, start_line, start_character)
                .map(Some),
            c if c.is_ascii_digit() => self
                .scan_numeric_literal(start_byte, start_line, start_character, c)
                .map(Some),
            c => Err(LexicalError::UnexpectedCharacter {
                character: c,
                position: self.position_from(start_line, start_character),
                string: self.source[start_byte..self.pos].to_string(),
            }),
        }
    }

    fn scan_whitespace(
        &mut self,
        start_byte: usize,
        start_line: usize,
        start_character: CharacterPosition,
    ) -> Result<Token, LexicalError> {
        while matches!(self.current_char(), Some(c) if is_space_separator(c)) {
            self.bump();
        }
        let position = self.position_from(start_line, start_character);
        Ok(Token::new(
            TokenContent::new(TokenKind::Whitespace, &self.source[start_byte..self.pos]),
            position,
        ))
    }

    fn scan_line_comment(
        &mut self,
        start_byte: usize,
        start_line: usize,
        start_character: CharacterPosition,
    ) -> Result<Token, LexicalError> {
        while !matches!(self.current_char(), Some('\n') | None) {
            self.bump();
        }
        let position = self.position_from(start_line, start_character);
        Ok(Token::new(
            TokenContent::new(TokenKind::CommentLine, &self.source[start_byte..self.pos]),
            position,
        ))
    }

    fn scan_block_comment(
        &mut self,
        start_byte: usize,
        start_line: usize,
        start_character: CharacterPosition,
    ) -> Result<Token, LexicalError> {
        loop {
            match self.current_char() {
                None => {
                    let position = self.position_from(start_line, start_character);
                    return Err(LexicalError::CommentBlockIncomplete {
                        position,
                        strings: vec![self.source[start_byte..self.pos].to_string()],
                    });
                }
                Some('*') if self.char_at_offset(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    break;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        let position = self.position_from(start_line, start_character);
        Ok(Token::new(
            TokenContent::new(TokenKind::CommentBlock, &self.source[start_byte..self.pos]),
            position,
        ))
    }

    fn scan_identifier(
        &mut self,
        start_byte: usize,
        start_line: usize,
        start_character: CharacterPosition,
    ) -> Result<Token, LexicalError> {
        loop {
            match self.current_char() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                    self.bump();
                }
                Some(c) if Self::starts_new_token(c) => break,
                None => break,
                Some(c) => {
                    self.bump();
                    return Err(LexicalError::IdentifierUnexpectedCharacter {
                        character: c,
                        expected: "an ASCII alphanumeric character, '_', or a token terminator",
                        position: self.position_from(start_line, start_character),
                        string: self.source[start_byte..self.pos].to_string(),
                    });
                }
            }
        }
        let position = self.position_from(start_line, start_character);
        Ok(Token::new(
            TokenContent::new(TokenKind::Identifier, &self.source[start_byte..self.pos]),
            position,
        ))
    }

    fn scan_numeric_literal(
        &mut self,
        start_byte: usize,
        start_line: usize,
        start_character: CharacterPosition,
        first_char: char,
    ) -> Result<Token, LexicalError> {
        let mut value_kind = NumericLiteralValueKind::Integer;

        if first_char == '.' {
            // The caller only enters this branch after confirming a digit follows.
            value_kind = NumericLiteralValueKind::FloatingPoint;
            self.consume_digits();
        } else {
            self.consume_digits();
            if self.current_char() == Some('.')
                && matches!(self.char_at_offset(1), Some(c) if c.is_ascii_digit())
            {
                self.bump();
                self.consume_digits();
                value_kind = NumericLiteralValueKind::FloatingPoint;
            }
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            let sign_offset = usize::from(matches!(self.char_at_offset(1), Some('+' | '-')));
            if matches!(self.char_at_offset(1 + sign_offset), Some(c) if c.is_ascii_digit()) {
                self.bump();
                if matches!(self.current_char(), Some('+' | '-')) {
                    self.bump();
                }
                self.consume_digits();
                value_kind = NumericLiteralValueKind::FloatingPoint;
            }
        }

        let value = self.source[start_byte..self.pos].to_string();

        match self.current_char() {
            Some('_') => {}
            Some(c) if Self::starts_new_token(c) => {
                return Err(LexicalError::NumericLiteralValueIncomplete {
                    kind: value_kind,
                    position: self.position_from(start_line, start_character),
                    string: value,
                });
            }
            None => {
                return Err(LexicalError::NumericLiteralValueIncomplete {
                    kind: value_kind,
                    position: self.position_from(start_line, start_character),
                    string: value,
                });
            }
            Some(c) => {
                self.bump();
                return Err(LexicalError::NumericLiteralValueUnexpectedCharacter {
                    character: c,
                    expected: "a digit, '_', or a token terminator",
                    kind: value_kind,
                    position: self.position_from(start_line, start_character),
                    string: self.source[start_byte..self.pos].to_string(),
                });
            }
        }

        self.bump(); // mandatory '_'
        let suffix_start = self.pos;
        loop {
            match self.current_char() {
                Some(c) if c.is_ascii_alphanumeric() => {
                    self.bump();
                }
                _ => break,
            }
        }
        let type_suffix = self.source[suffix_start..self.pos].to_string();

        if type_suffix.is_empty() {
            return match self.current_char() {
                None => Err(LexicalError::NumericLiteralTypeSuffixIncomplete {
                    position: self.position_from(start_line, start_character),
                    string: self.source[start_byte..self.pos].to_string(),
                    value,
                    value_kind,
                }),
                Some(c) => {
                    self.bump();
                    Err(LexicalError::NumericLiteralTypeSuffixUnexpectedCharacter {
                        character: c,
                        expected: "an identifier-shaped type suffix",
                        position: self.position_from(start_line, start_character),
                        string: self.source[start_byte..self.pos].to_string(),
                        value,
                        value_kind,
                    })
                }
            };
        }

        if let Some(c) = self.current_char() {
            if !Self::starts_new_token(c) {
                self.bump();
                return Err(LexicalError::NumericLiteralTypeSuffixUnexpectedCharacter {
                    character: c,
                    expected: "a token terminator",
                    position: self.position_from(start_line, start_character),
                    string: self.source[start_byte..self.pos].to_string(),
                    value,
                    value_kind,
                });
            }
        }

        let position = self.position_from(start_line, start_character);
        let string = self.source[start_byte..self.pos].to_string();

        let Some(token_kind) = TokenKind::from_numeric_suffix(&type_suffix) else {
            return Err(LexicalError::NumericLiteralTypeSuffixUnknown {
                position,
                string,
                type_suffix,
                value,
                value_kind,
            });
        };

        let suffix_is_integer = matches!(
            token_kind,
            TokenKind::I8
                | TokenKind::I16
                | TokenKind::I32
                | TokenKind::I64
                | TokenKind::U8
                | TokenKind::U16
                | TokenKind::U32
                | TokenKind::U64
        );
        let value_is_integer = matches!(value_kind, NumericLiteralValueKind::Integer);

        if suffix_is_integer != value_is_integer {
            return Err(LexicalError::NumericLiteralValueTypeSuffixConflict {
                position,
                string,
                type_suffix,
                value,
                value_kind,
            });
        }

        Ok(Token::new(TokenContent::new(token_kind, string), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize_string(source)
            .unwrap()
            .into_iter()
            .map(|t| t.content.kind)
            .collect()
    }

    #[test]
    fn lexer_round_trip_concatenates_to_source() {
        let source = "x_I32 ;\nfoo + 1_I32 * (bar.baz);";
        let tokens = tokenize_string(source).unwrap();
        let reconstructed: String = tokens.iter().map(|t| t.content.string.as_str()).collect();
        assert_eq!(reconstructed, source);
    }

    #[test]
    fn identifier_starting_with_letter_is_not_a_numeric_literal() {
        assert_eq!(
            kinds("x_I32;"),
            vec![TokenKind::Identifier, TokenKind::Semicolon]
        );
    }

    #[test]
    fn integer_literal_with_suffix() {
        let tokens = tokenize_string("1_I32;").unwrap();
        assert_eq!(tokens[0].content.kind, TokenKind::I32);
        assert_eq!(tokens[0].content.string, "1_I32");
    }

    #[test]
    fn float_literal_with_leading_dot() {
        let tokens = tokenize_string(".5_F64;").unwrap();
        assert_eq!(tokens[0].content.kind, TokenKind::F64);
        assert_eq!(tokens[0].content.string, ".5_F64");
    }

    #[test]
    fn arrow_combines_minus_and_greater_than() {
        assert_eq!(kinds("->"), vec![TokenKind::Arrow]);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let err = tokenize_string("/* open").unwrap_err();
        assert!(matches!(err, LexicalError::CommentBlockIncomplete { .. }));
    }

    #[test]
    fn float_value_with_integer_suffix_conflicts() {
        let err = tokenize_string("1.5_I64;").unwrap_err();
        assert!(matches!(
            err,
            LexicalError::NumericLiteralValueTypeSuffixConflict { .. }
        ));
    }

    #[test]
    fn bang_without_equals_is_unexpected() {
        let err = tokenize_string("!a;").unwrap_err();
        assert!(matches!(err, LexicalError::UnexpectedCharacter { .. }));
    }

    #[test]
    fn positions_are_line_relative_across_newlines() {
        let tokens = tokenize_string("a\nb;").unwrap();
        // a, \n, b, ;
        assert_eq!(tokens[1].position.start_line, 0);
        assert_eq!(tokens[1].position.end_line, 1);
        assert_eq!(tokens[2].position.start_line, 1);
        assert_eq!(tokens[2].position.start_character.utf_8.get(), 0);
    }

    #[test]
    fn multibyte_whitespace_is_a_single_token() {
        let tokens = tokenize_string("a\u{00A0}\u{00A0}b;").unwrap();
        assert_eq!(tokens[1].content.kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].content.string.chars().count(), 2);
    }
}
