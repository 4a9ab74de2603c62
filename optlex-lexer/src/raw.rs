//! A raw view over the arguments that are left, bypassing any classification.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::lexer::Lexer;
use crate::token::Token;

/// An iterator over the raw arguments of a [`Lexer`], as returned by [`Lexer::raw_args`].
///
/// Every argument comes out as [`Token::Positional`], whatever it looks like. The view borrows
/// the lexer cursor, so once it is dropped the lexer resumes right after the last argument taken.
#[derive(Debug)]
pub struct RawArgs<'a> {
    lexer: &'a mut Lexer,
    current: Token,
}

impl<'a> RawArgs<'a> {
    pub(crate) fn new(lexer: &'a mut Lexer) -> Self {
        RawArgs {
            lexer,
            current: Token::Unmatched,
        }
    }

    /// Get the last argument taken by this view.
    #[inline(always)]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Look at the next argument without taking it.
    #[inline(always)]
    pub fn peek(&self) -> Option<&str> {
        self.lexer.peek_arg()
    }

    /// Take the next argument only if it satisfies the predicate.
    pub fn next_if(&mut self, predicate: impl FnOnce(&str) -> bool) -> Option<Token> {
        if predicate(self.peek()?) {
            self.next()
        } else {
            None
        }
    }

    /// Take all the remaining arguments as tokens.
    pub fn collect_tokens(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Take all the remaining arguments as strings.
    pub fn collect_strings(&mut self) -> Vec<String> {
        self.by_ref().map(Token::into_text).collect()
    }
}

impl Iterator for RawArgs<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.lexer.next_arg()?;
        trace!("raw argument taken at {}", self.lexer.cursor() - 1);

        self.current = Token::Positional(arg);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lexer.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RawArgs<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use googletest::prelude::*;

    use crate::lexer::Error;

    use super::*;

    fn lex(line: &str) -> Lexer {
        Lexer::from_args(line.split_whitespace())
    }

    fn pos(text: &str) -> Token {
        Token::Positional(text.to_string())
    }

    #[test]
    fn it_should_share_cursor_with_lexer() {
        let mut lexer = lex("--foo bar baz quux");
        assert_that!(lexer.advance(), eq(true));

        {
            let mut args = lexer.raw_args().unwrap();
            assert_that!(args.next(), eq(&Some(pos("bar"))));
            assert_that!(args.current(), eq(&pos("bar")));
            assert_that!(args.peek(), eq(Some("baz")));
            assert_that!(args.next(), eq(&Some(pos("baz"))));
        }

        assert_that!(lexer.advance(), eq(true));
        assert_that!(lexer.current(), eq(&pos("quux")));

        let args = lexer.raw_args().unwrap();
        assert_that!(args.peek(), eq(None));
    }

    #[test]
    fn it_should_collect_remaining_arguments() {
        let mut lexer = lex("--foo bar baz quux");
        assert_that!(lexer.advance(), eq(true));

        let mut args = lexer.raw_args().unwrap();
        assert_that!(args.len(), eq(3));
        assert_that!(
            args.collect_tokens(),
            eq(&vec![pos("bar"), pos("baz"), pos("quux")])
        );
        assert_that!(args.next(), eq(&None));

        let mut lexer = lex("--foo bar baz quux");
        assert_that!(lexer.advance(), eq(true));

        let mut args = lexer.raw_args().unwrap();
        assert_that!(
            args.collect_strings(),
            eq(&vec!["bar".to_string(), "baz".to_string(), "quux".to_string()])
        );
    }

    #[test]
    fn it_should_refuse_raw_args_with_pending_value() {
        let mut lexer = lex("--foo=bar baz quux");
        assert_that!(lexer.advance(), eq(true));
        assert_that!(lexer.raw_args().err(), eq(Some(Error::UnexpectedValue)));

        // Eating the value unlocks the view.
        assert_that!(lexer.value(), eq(&Ok(Token::Value("bar".to_string()))));
        {
            let mut args = lexer.raw_args().unwrap();
            assert_that!(args.next(), eq(&Some(pos("baz"))));
        }
        assert_that!(lexer.advance(), eq(true));
        assert_that!(lexer.current(), eq(&pos("quux")));
        assert_that!(lexer.advance(), eq(false));
    }

    #[test]
    fn it_should_refuse_raw_args_inside_cluster() {
        let mut lexer = lex("-ab c d");
        assert_that!(lexer.advance(), eq(true));
        assert_that!(lexer.raw_args().err(), eq(Some(Error::UnexpectedValue)));
        assert_that!(lexer.value(), eq(&Ok(Token::Value("b".to_string()))));

        let strings = lexer.raw_args().unwrap().collect_strings();
        assert_that!(strings, eq(&vec!["c".to_string(), "d".to_string()]));
        assert_that!(lexer.advance(), eq(false));
        assert_that!(lexer.raw_args().unwrap().next(), eq(&None));
    }

    #[test]
    fn it_should_not_classify_raw_arguments() {
        let mut lexer = lex("-a b c d");
        assert_that!(
            lexer.raw_args().unwrap().collect_tokens(),
            eq(&vec![pos("-a"), pos("b"), pos("c"), pos("d")])
        );
        assert_that!(lexer.raw_args().is_ok(), eq(true));
        assert_that!(lexer.advance(), eq(false));

        let mut lexer = lex("-a b c d");
        {
            let mut args = lexer.raw_args().unwrap();
            assert_that!(args.next(), eq(&Some(pos("-a"))));
            assert_that!(args.next(), eq(&Some(pos("b"))));
            assert_that!(args.next(), eq(&Some(pos("c"))));
        }
        assert_that!(lexer.advance(), eq(true));
        assert_that!(lexer.current(), eq(&pos("d")));
        assert_that!(lexer.advance(), eq(false));
    }

    #[test]
    fn it_should_take_next_only_if_predicate_holds() {
        let mut lexer = lex("a");
        let mut args = lexer.raw_args().unwrap();

        assert_that!(args.peek(), eq(Some("a")));
        assert_that!(args.next_if(|_| false), eq(&None));
        assert_that!(args.next_if(|arg| arg == "a"), eq(&Some(pos("a"))));
        assert_that!(args.next_if(|arg| arg == "a"), eq(&None));
        drop(args);

        assert_that!(lexer.advance(), eq(false));
    }
}
