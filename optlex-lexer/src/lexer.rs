//! A lexer for streaming tokens and option values from a command line.
//!
//! The caller drives the loop: each call to [`Lexer::advance`] classifies one more piece of the
//! command line, and the caller decides whether the option it just saw takes a value by calling
//! one of [`Lexer::value`], [`Lexer::optional_value`] or [`Lexer::values`].

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use log::{debug, trace};

use crate::raw::RawArgs;
use crate::token::Token;

/// Defines the possible errors that may occur while lexing a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An option got a value attached (e.g. `--file=x` or `-f=x`) that was never consumed.
    #[error("unexpected value")]
    UnexpectedValue,

    /// A value was requested but there is none left.
    #[error("no value found")]
    NoValue,
}

/// Internal state kept between two steps of the lexer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum State {
    /// Ready to classify the next argument.
    #[default]
    Empty,

    /// Inside a cluster of short options. `cluster[pos..]` is never empty.
    Short { cluster: String, pos: usize },

    /// A `--long=value` was read and the value is still waiting.
    PendingValue(String),

    /// A bare `--` was read, everything else is positional.
    Finished,
}

impl State {
    fn tag(&self) -> &'static str {
        match self {
            State::Empty => "empty",
            State::Short { .. } => "short",
            State::PendingValue(_) => "pending-value",
            State::Finished => "finished",
        }
    }
}

/// Defines a `Lexer` that is responsible for streaming tokens from the command line input.
///
/// A lexer acts like a forward iterator over a fixed list of arguments. It never goes back, and
/// it refuses to step over an option value that was attached but not consumed.
#[derive(Clone, Debug)]
pub struct Lexer {
    current: Token,
    bin_name: Option<String>,
    argv: Vec<String>,
    cursor: usize,
    state: State,
    error: Option<Error>,
}

impl Lexer {
    /// Create a new lexer from a full command line, where the first element is the program name.
    /// The program name is kept aside and never tokenized.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = argv.into_iter().map(Into::into);
        let bin_name = iter.next();

        Self::with_bin_name(bin_name, iter.collect())
    }

    /// Create a new lexer from the arguments only, without any program name.
    pub fn from_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_bin_name(None, argv.into_iter().map(Into::into).collect())
    }

    /// Create a new lexer from the arguments of the running process. Arguments that are not
    /// valid UTF-8 are converted lossily.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    fn with_bin_name(bin_name: Option<String>, argv: Vec<String>) -> Self {
        trace!("lexer created over {} arguments", argv.len());

        Lexer {
            current: Token::Unmatched,
            bin_name,
            argv,
            cursor: 0,
            state: State::Empty,
            error: None,
        }
    }

    /// Get the program name, if the lexer was created with one.
    #[inline(always)]
    pub fn bin_name(&self) -> Option<&str> {
        self.bin_name.as_deref()
    }

    /// Get the last token produced by [`Lexer::advance`].
    #[inline(always)]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Get the last error met by [`Lexer::advance`], if any.
    #[inline(always)]
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// Get the index of the next raw argument to be read.
    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the count of raw arguments not read yet.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.argv.len() - self.cursor
    }

    /// Move to the next token and store it as the current one. Return `false` when no token was
    /// produced, either because the command line is exhausted or because of an error, which is
    /// then available from [`Lexer::error`].
    pub fn advance(&mut self) -> bool {
        matches!(self.next_token(), Ok(Some(_)))
    }

    /// Move to the next token and return it.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        match self.step() {
            Ok(Some(token)) => {
                self.current = token.clone();
                Ok(Some(token))
            }

            Ok(None) => Ok(None),

            Err(err) => {
                debug!("lexer stopped at argument {}: {}", self.cursor, err);
                self.error = Some(err);
                Err(err)
            }
        }
    }

    fn step(&mut self) -> Result<Option<Token>, Error> {
        loop {
            match &self.state {
                State::PendingValue(_) => return Err(Error::UnexpectedValue),

                State::Short { cluster, pos } => {
                    // An equals sign followed by text is a value attached to the last option. A
                    // trailing equals sign alone is peeled like any other option.
                    let rest = &cluster[*pos..];
                    if rest.len() > 1 && rest.starts_with('=') {
                        return Err(Error::UnexpectedValue);
                    }

                    return Ok(self.take_short());
                }

                State::Finished => return Ok(self.next_arg().map(Token::Positional)),

                State::Empty => {}
            }

            let arg = match self.next_arg() {
                Some(arg) => arg,
                None => return Ok(None),
            };

            // End of options.
            if arg == "--" {
                trace!("end of options at argument {}", self.cursor - 1);
                self.state = State::Finished;
                continue;
            }

            // Long option, with an optional value.
            if let Some(rest) = arg.strip_prefix("--") {
                let token = match rest.split_once('=') {
                    Some((name, value)) => {
                        self.state = State::PendingValue(value.into());
                        Token::Long(name.into())
                    }

                    None => Token::Long(rest.into()),
                };

                return Ok(Some(token));
            }

            // Stdin/stdout placeholder, never an option.
            if arg == "-" {
                return Ok(Some(Token::Positional(arg)));
            }

            // Short option or cluster of short options.
            if let Some(rest) = arg.strip_prefix('-') {
                self.state = State::Short {
                    cluster: rest.into(),
                    pos: 0,
                };

                return Ok(self.take_short());
            }

            return Ok(Some(Token::Positional(arg)));
        }
    }

    /// Get the value of the current option. The value is either the one attached to the option
    /// or the next argument, taken as is even if it looks like an option.
    pub fn value(&mut self) -> Result<Token, Error> {
        self.value_with_equals().map(|(value, _)| value)
    }

    /// Same as [`Lexer::value`], and also tell if the value was attached with an equals sign.
    pub fn value_with_equals(&mut self) -> Result<(Token, bool), Error> {
        match mem::take(&mut self.state) {
            State::PendingValue(value) => Ok((Token::Value(value), true)),

            State::Empty => self
                .next_arg()
                .map(|arg| (Token::Value(arg), false))
                .ok_or(Error::NoValue),

            State::Short { cluster, pos } => {
                let rest = &cluster[pos..];

                match rest.strip_prefix('=') {
                    Some(value) => Ok((Token::Value(value.into()), true)),
                    None => Ok((Token::Value(rest.into()), false)),
                }
            }

            State::Finished => {
                self.state = State::Finished;
                Err(Error::NoValue)
            }
        }
    }

    /// Get the value of the current option only if it was attached to it, as in `-ovalue`,
    /// `-o=value` or `--option=value`. The next argument is never consumed.
    pub fn optional_value(&mut self) -> Option<Token> {
        if !self.has_pending() {
            return None;
        }

        self.value().ok()
    }

    /// Get one or more values for the current option. Arguments are gathered until one looks
    /// like an option or the command line is exhausted. A value attached with an equals sign
    /// limits the result to that single value.
    pub fn values(&mut self) -> Result<Vec<Token>, Error> {
        let first_is_available = match self.state {
            State::Finished => false,
            _ => self.has_pending() || self.next_is_plain(),
        };

        if !first_is_available {
            return Err(Error::NoValue);
        }

        let (first, equals) = self.value_with_equals()?;
        let mut values = vec![first];

        while !equals && self.next_is_plain() {
            match self.next_arg() {
                Some(arg) => values.push(Token::Value(arg)),
                None => break,
            }
        }

        Ok(values)
    }

    /// Take raw arguments from the command line, bypassing any classification. The view shares
    /// the lexer cursor so that lexing resumes right after the last raw argument taken.
    pub fn raw_args(&mut self) -> Result<RawArgs<'_>, Error> {
        if self.has_pending() {
            return Err(Error::UnexpectedValue);
        }

        Ok(RawArgs::new(self))
    }

    /// Write the internal state of the lexer to the given output.
    pub fn dump_state(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let (pending, short) = match &self.state {
            State::PendingValue(value) => (Some(value.as_str()), None),
            State::Short { cluster, pos } => (None, Some(&cluster[*pos..])),
            _ => (None, None),
        };

        writeln!(out, "--- lexer state ---")?;
        writeln!(out, "current:  {:?}", self.current)?;
        writeln!(out, "bin name: {:?}", self.bin_name)?;
        writeln!(out, "argv:     {:?}", self.argv)?;
        writeln!(out, "cursor:   {}", self.cursor)?;
        writeln!(out, "state:    {}", self.state.tag())?;
        writeln!(out, "pending:  {:?}", pending)?;
        writeln!(out, "short:    {:?}", short)?;
        writeln!(out, "error:    {:?}", self.error)?;
        writeln!(out, "---")
    }

    /// Take the next raw argument.
    pub(crate) fn next_arg(&mut self) -> Option<String> {
        let arg = self.argv.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(arg)
    }

    /// Look at the next raw argument without taking it.
    #[inline(always)]
    pub(crate) fn peek_arg(&self) -> Option<&str> {
        self.argv.get(self.cursor).map(String::as_str)
    }

    fn take_short(&mut self) -> Option<Token> {
        let State::Short { cluster, pos } = &mut self.state else {
            return None;
        };

        let c = cluster[*pos..].chars().next()?;
        *pos += c.len_utf8();

        if *pos >= cluster.len() {
            self.state = State::Empty;
        }

        Some(Token::Short(c))
    }

    fn has_pending(&self) -> bool {
        match &self.state {
            State::PendingValue(_) => true,
            State::Short { cluster, pos } => *pos < cluster.len(),
            State::Empty | State::Finished => false,
        }
    }

    fn next_is_plain(&self) -> bool {
        self.peek_arg()
            .is_some_and(|arg| !Token::looks_like_option(arg))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }

        self.next_token().transpose()
    }
}
