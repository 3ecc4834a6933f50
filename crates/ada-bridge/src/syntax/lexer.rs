use logos::Logos;

use crate::syntax::kind::{SyntaxKind, TokenKind, is_keyword};

/// A lexer that wraps `logos::Lexer` to produce `SyntaxKind` tokens.
///
/// An apostrophe directly after a name, a `)` or `all` is an attribute or
/// qualification tick, so `T'('a')` is a tick followed by a parenthesised
/// character literal rather than the literal `'('`.
pub struct Lexer<'a> {
    input: &'a str,
    base: usize,
    inner: logos::Lexer<'a, TokenKind>,
    previous: Option<SyntaxKind>,
    previous_is_all: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            base: 0,
            inner: TokenKind::lexer(input),
            previous: None,
            previous_is_all: false,
        }
    }

    fn tick_expected(&self) -> bool {
        matches!(self.previous, Some(SyntaxKind::Ident | SyntaxKind::RParen)) || self.previous_is_all
    }

    /// Emit the leading `'` of the current token alone and lex on from the
    /// character after it.
    fn split_tick(&mut self) -> &'a str {
        let start = self.base + self.inner.span().start;
        self.base = start + 1;
        self.inner = TokenKind::lexer(&self.input[self.base..]);
        &self.input[start..self.base]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (SyntaxKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let token_result = self.inner.next()?;
        let mut text = self.inner.slice();

        let kind = match token_result {
            Ok(TokenKind::Char) if self.tick_expected() => {
                text = self.split_tick();
                SyntaxKind::Tick
            },
            Ok(TokenKind::Ident) if is_keyword(text) => SyntaxKind::Keyword,
            Ok(token) => token.into(),
            Err(()) => SyntaxKind::Error,
        };

        if !kind.is_trivia() {
            self.previous = Some(kind);
            self.previous_is_all = kind == SyntaxKind::Keyword && text.eq_ignore_ascii_case("all");
        }
        Some((kind, text))
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/lexer_tests.rs"]
mod tests;
