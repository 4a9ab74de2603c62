//! Fail-fast helpers for programs that treat a malformed command line as a programming error.
//!
//! Everything here wraps a fallible operation and panics with a descriptive message when it
//! fails. The fallible operations stay available and are the way to report errors nicely.

use alloc::vec::Vec;
use core::fmt::Display;

use crate::lexer::{Lexer, RawArgs, Token};

/// Unwrap the result, or panic with the error message.
#[track_caller]
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("optlex: {err}"),
    }
}

/// Fail-fast variants of the [`Lexer`] value operations.
pub trait MustLexer {
    /// Like [`Lexer::value`], but panics if there is no value.
    fn must_value(&mut self) -> Token;

    /// Like [`Lexer::values`], but panics if there is no value.
    fn must_values(&mut self) -> Vec<Token>;

    /// Like [`Lexer::raw_args`], but panics if a value is left unconsumed.
    fn must_raw_args(&mut self) -> RawArgs<'_>;
}

impl MustLexer for Lexer {
    #[track_caller]
    fn must_value(&mut self) -> Token {
        must(self.value())
    }

    #[track_caller]
    fn must_values(&mut self) -> Vec<Token> {
        must(self.values())
    }

    #[track_caller]
    fn must_raw_args(&mut self) -> RawArgs<'_> {
        must(self.raw_args())
    }
}
