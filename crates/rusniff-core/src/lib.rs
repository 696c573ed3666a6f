//! rusniff-core: Token model and scan primitives for PHP arity sniffing
//!
//! This crate provides:
//! - `Token` / `TokenKind`: the classified token stream the sniffer walks
//! - `cursor`: forward/backward skip-while primitives over a token slice
//! - `scan`: argument-list counting and call/definition name resolution
//!
//! Everything here operates on an immutable `&[Token]` with no grammar or
//! parse tree behind it. The scans are deliberately heuristic: they mirror
//! how a flat token stream reads, not how PHP parses.

pub mod cursor;
mod scan;
mod token;

pub use scan::{count_arguments, resolve_called_name, resolve_defined_name, CalledName, ScanError};
pub use token::{Token, TokenKind};
