//! Skip-while scan primitives over a token slice
//!
//! Both functions are pure reads. The backward variant stops cleanly at
//! index 0 instead of underflowing, which the callers rely on when a call
//! sits at the very start of a file.

use crate::token::Token;

/// Scan forward from `index + 1`, skipping tokens matched by `skip`.
///
/// Returns the index and token of the first non-matching token, or `None`
/// if the slice ends first.
pub fn next_skipping<'a>(
    tokens: &'a [Token],
    index: usize,
    skip: impl Fn(&Token) -> bool,
) -> Option<(usize, &'a Token)> {
    let mut index = index;
    loop {
        index = index.checked_add(1)?;
        let token = tokens.get(index)?;
        if !skip(token) {
            return Some((index, token));
        }
    }
}

/// Scan backward from `index - 1` toward 0, skipping tokens matched by `skip`.
///
/// Returns the index and token of the first non-matching token, or `None`
/// if index 0 is reached without finding one.
pub fn prev_skipping<'a>(
    tokens: &'a [Token],
    index: usize,
    skip: impl Fn(&Token) -> bool,
) -> Option<(usize, &'a Token)> {
    let mut index = index;
    while index > 0 {
        index -= 1;
        let token = tokens.get(index)?;
        if !skip(token) {
            return Some((index, token));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Identifier, "foo", 1),
            Token::new(TokenKind::Whitespace, " ", 1),
            Token::new(TokenKind::Whitespace, " ", 1),
            Token::new(TokenKind::Identifier, "bar", 1),
            Token::new(TokenKind::OpenParen, "(", 1),
        ]
    }

    #[test]
    fn test_next_skipping_blanks() {
        let tokens = tokens();
        let (index, token) = next_skipping(&tokens, 0, Token::is_blank).unwrap();
        assert_eq!(index, 3);
        assert_eq!(token.content, "bar");
    }

    #[test]
    fn test_next_skipping_past_end() {
        let tokens = tokens();
        assert!(next_skipping(&tokens, 4, Token::is_blank).is_none());
        assert!(next_skipping(&tokens, 100, Token::is_blank).is_none());
    }

    #[test]
    fn test_prev_skipping_blanks() {
        let tokens = tokens();
        let (index, token) = prev_skipping(&tokens, 3, Token::is_blank).unwrap();
        assert_eq!(index, 0);
        assert_eq!(token.content, "foo");
    }

    #[test]
    fn test_prev_skipping_stops_at_zero() {
        let tokens = vec![
            Token::new(TokenKind::Whitespace, " ", 1),
            Token::new(TokenKind::OpenParen, "(", 1),
        ];
        // Everything before the paren is blank; clean stop, not a panic.
        assert!(prev_skipping(&tokens, 1, Token::is_blank).is_none());
        assert!(prev_skipping(&tokens, 0, Token::is_blank).is_none());
    }
}
