//! PHP lexer - tokenizes PHP source into the flat stream the sniffer walks
//!
//! This is not a full PHP tokenizer. It classifies exactly what the arity
//! scans need: grouping symbols, commas, a bare `=` (never a fragment of
//! `==`, `=>`, `<=`, ...), the `function` and `new` keywords, names,
//! variables, and the literals/comments whose content must stay opaque.
//! Whitespace and comments are kept as tokens because the backward name
//! scans use them as boundaries.

use rusniff_core::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch == Some('\n') {
            self.line += 1;
        }
        ch
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn read_whitespace(&mut self, first: char) -> String {
        let mut content = String::new();
        content.push(first);
        while let Some(&ch) = self.peek() {
            if ch.is_whitespace() {
                content.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        content
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut content = String::new();
        content.push(first);
        while let Some(&ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '\\' {
                content.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        content
    }

    fn read_number(&mut self, first: char) -> String {
        let mut content = String::new();
        content.push(first);
        while let Some(&ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' {
                content.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        content
    }

    /// Quoted string, quotes and escapes kept verbatim in the content.
    fn read_string(&mut self, quote: char) -> String {
        let mut content = String::new();
        content.push(quote);
        while let Some(ch) = self.advance() {
            content.push(ch);
            if ch == '\\' {
                if let Some(escaped) = self.advance() {
                    content.push(escaped);
                }
            } else if ch == quote {
                break;
            }
        }
        content
    }

    fn read_line_comment(&mut self, opener: &str) -> String {
        let mut content = String::from(opener);
        while let Some(&ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            content.push(ch);
            self.advance();
        }
        content
    }

    fn read_block_comment(&mut self) -> String {
        let mut content = String::from("/*");
        while let Some(ch) = self.advance() {
            content.push(ch);
            if ch == '*' && self.peek() == Some(&'/') {
                content.push('/');
                self.advance();
                break;
            }
        }
        content
    }

    /// Greedy multi-character operator reading. Only a solitary `=` comes
    /// out as `TokenKind::Equals`; everything longer stays one opaque
    /// operator token so the argument counter never mistakes it for an
    /// assignment or a comma boundary.
    fn read_operator(&mut self, first: char) -> (TokenKind, String) {
        let mut content = String::new();
        content.push(first);

        match first {
            '=' => match self.peek() {
                Some(&'=') => {
                    content.push('=');
                    self.advance();
                    if self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
                Some(&'>') => {
                    content.push('>');
                    self.advance();
                }
                _ => return (TokenKind::Equals, content),
            },
            '!' | '^' | '%' => {
                if self.peek() == Some(&'=') {
                    content.push('=');
                    self.advance();
                    if first == '!' && self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
            }
            '<' => match self.peek() {
                Some(&'=') => {
                    content.push('=');
                    self.advance();
                    if self.peek() == Some(&'>') {
                        content.push('>');
                        self.advance();
                    }
                }
                Some(&ch) if ch == '<' || ch == '>' => {
                    content.push(ch);
                    self.advance();
                    if ch == '<' && self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
                _ => {}
            },
            '>' => match self.peek() {
                Some(&'=') => {
                    content.push('=');
                    self.advance();
                }
                Some(&'>') => {
                    content.push('>');
                    self.advance();
                    if self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
                _ => {}
            },
            '-' => match self.peek() {
                Some(&ch) if ch == '>' || ch == '-' || ch == '=' => {
                    content.push(ch);
                    self.advance();
                }
                _ => {}
            },
            '+' => match self.peek() {
                Some(&ch) if ch == '+' || ch == '=' => {
                    content.push(ch);
                    self.advance();
                }
                _ => {}
            },
            '*' => match self.peek() {
                Some(&'*') => {
                    content.push('*');
                    self.advance();
                    if self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
                Some(&'=') => {
                    content.push('=');
                    self.advance();
                }
                _ => {}
            },
            '/' | '.' => {
                if self.peek() == Some(&'=') {
                    content.push('=');
                    self.advance();
                }
            }
            '&' => match self.peek() {
                Some(&ch) if ch == '&' || ch == '=' => {
                    content.push(ch);
                    self.advance();
                }
                _ => {}
            },
            '|' => match self.peek() {
                Some(&ch) if ch == '|' || ch == '=' => {
                    content.push(ch);
                    self.advance();
                }
                _ => {}
            },
            '?' => match self.peek() {
                Some(&'?') => {
                    content.push('?');
                    self.advance();
                    if self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    }
                }
                Some(&'>') => {
                    content.push('>');
                    self.advance();
                }
                Some(&'-') => {
                    content.push('-');
                    self.advance();
                    if self.peek() == Some(&'>') {
                        content.push('>');
                        self.advance();
                    }
                }
                _ => {}
            },
            ':' => {
                if self.peek() == Some(&':') {
                    content.push(':');
                    self.advance();
                }
            }
            _ => {}
        }

        (TokenKind::Operator, content)
    }

    fn next_token(&mut self) -> Option<Token> {
        let line = self.line;
        let ch = self.advance()?;

        let (kind, content) = match ch {
            c if c.is_whitespace() => (TokenKind::Whitespace, self.read_whitespace(c)),
            '(' => (TokenKind::OpenParen, "(".to_string()),
            ')' => (TokenKind::CloseParen, ")".to_string()),
            '[' => (TokenKind::OpenBracket, "[".to_string()),
            ']' => (TokenKind::CloseBracket, "]".to_string()),
            '{' => (TokenKind::OpenBrace, "{".to_string()),
            '}' => (TokenKind::CloseBrace, "}".to_string()),
            ',' => (TokenKind::Comma, ",".to_string()),
            '\'' | '"' => (TokenKind::StringLiteral, self.read_string(ch)),
            '#' => (TokenKind::Comment, self.read_line_comment("#")),
            '/' => match self.peek() {
                Some(&'/') => {
                    self.advance();
                    (TokenKind::Comment, self.read_line_comment("//"))
                }
                Some(&'*') => {
                    self.advance();
                    (TokenKind::Comment, self.read_block_comment())
                }
                _ => self.read_operator('/'),
            },
            '$' => {
                let name = self.read_identifier('$');
                (TokenKind::Variable, name)
            }
            '<' => {
                if self.peek() == Some(&'?') {
                    self.advance();
                    let mut content = String::from("<?");
                    if self.peek() == Some(&'=') {
                        content.push('=');
                        self.advance();
                    } else {
                        while let Some(&c) = self.peek() {
                            if c.is_ascii_alphabetic() {
                                content.push(c);
                                self.advance();
                            } else {
                                break;
                            }
                        }
                    }
                    (TokenKind::OpenTag, content)
                } else {
                    self.read_operator('<')
                }
            }
            c if c.is_ascii_digit() => (TokenKind::Number, self.read_number(c)),
            c if c.is_alphabetic() || c == '_' || c == '\\' => {
                let word = self.read_identifier(c);
                let kind = match word.as_str() {
                    "function" => TokenKind::Function,
                    "new" => TokenKind::New,
                    _ => TokenKind::Identifier,
                };
                (kind, word)
            }
            other => self.read_operator(other),
        };

        Some(Token::new(kind, content, line))
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// Tokenize a whole source file.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
