//! Argument-list counting and name resolution over a flat token stream
//!
//! These scans reconstruct just enough structure from the token sequence to
//! answer two questions: how many top-level arguments does this grouping
//! hold, and what name sits next to it. There is no AST; the answers are
//! heuristic and the callers treat them as such.

use crate::cursor;
use crate::token::{Token, TokenKind};
use thiserror::Error;

/// Stands in for an entire nested group in the depth-0 buffer, so that
/// splitting on comma never merges two top-level arguments across it.
/// Anything that is not a comma works here.
const NESTED_GROUP_PLACEHOLDER: char = '#';

/// Recoverable scan failures. The sniffer skips the offending
/// call/definition and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("grouping opened on line {line} is never closed")]
    UnterminatedGroup { line: usize },
}

/// Count the top-level arguments of the grouping opened at `open_index`.
///
/// Walks forward from the `(` maintaining a nesting counter across
/// parenthesis and bracket pairs. Depth-0 token content accumulates into a
/// buffer; each nested group contributes a single placeholder. A depth-0
/// `)` terminates the scan; a depth-0 `=` terminates it early and marks the
/// count for a subtract-one adjustment (a default-valued parameter in a
/// definition, or a call swallowed into a larger assignment expression).
///
/// The count is the number of comma-separated segments in the buffer.
/// Splitting an empty buffer yields one segment, so an empty argument list
/// counts as 1, never 0. That imprecision is part of the contract; callers
/// and tests depend on it staying put.
pub fn count_arguments(tokens: &[Token], open_index: usize) -> Result<usize, ScanError> {
    let open_line = tokens.get(open_index).map(|t| t.line).unwrap_or(0);
    let mut buffer = String::new();
    let mut nesting: usize = 0;
    let mut subtract_one = false;
    let mut index = open_index;

    loop {
        index += 1;
        let Some(token) = tokens.get(index) else {
            return Err(ScanError::UnterminatedGroup { line: open_line });
        };

        match token.kind {
            TokenKind::OpenParen | TokenKind::OpenBracket => {
                if nesting == 0 {
                    buffer.push(NESTED_GROUP_PLACEHOLDER);
                }
                nesting += 1;
                continue;
            }
            TokenKind::CloseParen | TokenKind::CloseBracket if nesting > 0 => {
                nesting -= 1;
                continue;
            }
            TokenKind::CloseParen if nesting == 0 => break,
            TokenKind::Equals if nesting == 0 => {
                subtract_one = true;
                break;
            }
            _ => {}
        }

        if nesting == 0 {
            buffer.push_str(&token.content);
        }
    }

    let mut count = buffer.split(',').count();
    if subtract_one {
        count = count.saturating_sub(1);
    }
    Ok(count)
}

/// A call target recovered by scanning backward from its `(`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalledName<'a> {
    pub name: &'a str,
    /// `new Name(...)` is a constructor invocation, not a function call.
    pub is_constructor: bool,
}

/// Resolve the name being defined, scanning forward from a `function`
/// keyword past whitespace, comments and the by-reference `&` marker.
pub fn resolve_defined_name(tokens: &[Token], function_index: usize) -> Option<&str> {
    cursor::next_skipping(tokens, function_index, |t| t.is_blank() || t.content == "&")
        .map(|(_, token)| token.content.as_str())
}

/// Resolve the name being called, scanning backward from its `(`.
///
/// The adjacent non-blank token is the candidate name. The scan then
/// continues backward to the token just before the name's preceding
/// whitespace boundary; if that token is the `new` keyword, the call is a
/// constructor invocation. Reaching index 0 at any point is a clean stop.
pub fn resolve_called_name(tokens: &[Token], open_index: usize) -> Option<CalledName<'_>> {
    let (name_index, name_token) = cursor::prev_skipping(tokens, open_index, Token::is_blank)?;

    let mut index = name_index;
    while index > 0 {
        index -= 1;
        if tokens[index].is_blank() {
            break;
        }
    }

    let mut is_constructor = false;
    if index != 0 {
        index -= 1;
        is_constructor = tokens[index].kind == TokenKind::New;
    }

    Some(CalledName {
        name: &name_token.content,
        is_constructor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(content: &str) -> Token {
        Token::new(TokenKind::Identifier, content, 1)
    }

    fn var(content: &str) -> Token {
        Token::new(TokenKind::Variable, content, 1)
    }

    fn ws() -> Token {
        Token::new(TokenKind::Whitespace, " ", 1)
    }

    fn sym(kind: TokenKind, content: &str) -> Token {
        Token::new(kind, content, 1)
    }

    fn open() -> Token {
        sym(TokenKind::OpenParen, "(")
    }

    fn close() -> Token {
        sym(TokenKind::CloseParen, ")")
    }

    fn comma() -> Token {
        sym(TokenKind::Comma, ",")
    }

    #[test]
    fn test_count_two_plain_arguments() {
        // foo($a, $b)
        let tokens = vec![
            ident("foo"),
            open(),
            var("$a"),
            comma(),
            ws(),
            var("$b"),
            close(),
        ];
        assert_eq!(count_arguments(&tokens, 1), Ok(2));
    }

    #[test]
    fn test_count_empty_list_is_one() {
        // foo() — the empty buffer still splits into one segment
        let tokens = vec![ident("foo"), open(), close()];
        assert_eq!(count_arguments(&tokens, 1), Ok(1));
    }

    #[test]
    fn test_nested_call_counts_as_one_argument() {
        // foo(bar(1, 2), 3)
        let tokens = vec![
            ident("foo"),
            open(),
            ident("bar"),
            open(),
            sym(TokenKind::Number, "1"),
            comma(),
            ws(),
            sym(TokenKind::Number, "2"),
            close(),
            comma(),
            ws(),
            sym(TokenKind::Number, "3"),
            close(),
        ];
        assert_eq!(count_arguments(&tokens, 1), Ok(2));
    }

    #[test]
    fn test_nested_array_index_is_transparent() {
        // foo($a[1], $b)
        let tokens = vec![
            ident("foo"),
            open(),
            var("$a"),
            sym(TokenKind::OpenBracket, "["),
            sym(TokenKind::Number, "1"),
            sym(TokenKind::CloseBracket, "]"),
            comma(),
            ws(),
            var("$b"),
            close(),
        ];
        assert_eq!(count_arguments(&tokens, 1), Ok(2));
    }

    #[test]
    fn test_default_value_subtracts_one() {
        // function f($a, $b = 1)
        let tokens = vec![
            sym(TokenKind::Function, "function"),
            ws(),
            ident("f"),
            open(),
            var("$a"),
            comma(),
            ws(),
            var("$b"),
            ws(),
            sym(TokenKind::Equals, "="),
            ws(),
            sym(TokenKind::Number, "1"),
            close(),
        ];
        assert_eq!(count_arguments(&tokens, 3), Ok(1));
    }

    #[test]
    fn test_adjacent_nested_groups_do_not_merge() {
        // foo((1), (2)) — placeholders keep the comma split honest
        let tokens = vec![
            ident("foo"),
            open(),
            open(),
            sym(TokenKind::Number, "1"),
            close(),
            comma(),
            ws(),
            open(),
            sym(TokenKind::Number, "2"),
            close(),
            close(),
        ];
        assert_eq!(count_arguments(&tokens, 1), Ok(2));
    }

    #[test]
    fn test_unterminated_group_is_an_error() {
        let tokens = vec![ident("foo"), open(), var("$a"), comma()];
        assert_eq!(
            count_arguments(&tokens, 1),
            Err(ScanError::UnterminatedGroup { line: 1 })
        );
    }

    #[test]
    fn test_resolve_defined_name_skips_reference_marker() {
        // function &foo(
        let tokens = vec![
            sym(TokenKind::Function, "function"),
            ws(),
            sym(TokenKind::Operator, "&"),
            ident("foo"),
            open(),
        ];
        assert_eq!(resolve_defined_name(&tokens, 0), Some("foo"));
    }

    #[test]
    fn test_resolve_called_name_plain() {
        // $x = foo (1)
        let tokens = vec![
            var("$x"),
            ws(),
            sym(TokenKind::Equals, "="),
            ws(),
            ident("foo"),
            ws(),
            open(),
        ];
        let called = resolve_called_name(&tokens, 6).unwrap();
        assert_eq!(called.name, "foo");
        assert!(!called.is_constructor);
    }

    #[test]
    fn test_resolve_called_name_constructor() {
        // new Widget(
        let tokens = vec![
            sym(TokenKind::Operator, ";"),
            ws(),
            sym(TokenKind::New, "new"),
            ws(),
            ident("Widget"),
            open(),
        ];
        let called = resolve_called_name(&tokens, 5).unwrap();
        assert_eq!(called.name, "Widget");
        assert!(called.is_constructor);
    }

    #[test]
    fn test_resolve_called_name_at_stream_start() {
        let tokens = vec![ident("foo"), open()];
        let called = resolve_called_name(&tokens, 1).unwrap();
        assert_eq!(called.name, "foo");
        assert!(!called.is_constructor);
    }

    #[test]
    fn test_resolve_called_name_nothing_before_paren() {
        let tokens = vec![ws(), open()];
        assert!(resolve_called_name(&tokens, 1).is_none());
    }
}
