//! Logos-based lexer for DKF documents
//!
//! Braces are always their own tokens; every other maximal run of
//! non-whitespace characters is a single word. Whitespace (including `\r`)
//! separates tokens and is dropped, so `a{b` and `a { b` lex identically.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LBrace,
    RBrace,
    Word,
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        // Every non-whitespace input matches one of the patterns below
        let kind = match logos_token {
            Ok(LogosToken::LBrace) => TokenKind::LBrace,
            Ok(LogosToken::RBrace) => TokenKind::RBrace,
            Ok(LogosToken::Word) | Err(()) => TokenKind::Word,
        };

        Some(Token { kind, text, range })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum LogosToken {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"[^\s{}]+")]
    Word,
}
