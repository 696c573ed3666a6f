//! Classified tokens with position metadata

/// Kind of a lexed PHP token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<?php` or `<?=`
    OpenTag,
    /// A run of spaces, tabs and newlines
    Whitespace,
    /// `//`, `#` or `/* ... */` comment
    Comment,
    /// The `function` keyword
    Function,
    /// The `new` keyword
    New,
    /// Any other bare word, including control-flow keywords
    Identifier,
    /// `$name`
    Variable,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `,`
    Comma,
    /// A bare `=` (never part of `==`, `=>`, `>=`, ...)
    Equals,
    /// Quoted string literal, quotes included
    StringLiteral,
    /// Integer or float literal
    Number,
    /// Any other operator or punctuation
    Operator,
}

/// A single token: kind, textual content and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            line,
        }
    }

    /// Whitespace and comments are invisible to the name-resolution scans.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(Token::new(TokenKind::Whitespace, " ", 1).is_blank());
        assert!(Token::new(TokenKind::Comment, "// hi", 1).is_blank());
        assert!(!Token::new(TokenKind::Identifier, "foo", 1).is_blank());
    }
}
