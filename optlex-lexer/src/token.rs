//! Tokens produced by the lexer.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Defines a `Token` that has been read from the command line. Option tokens only store the
/// identifier, not the hyphens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token {
    /// A short option (e.g. -v), possibly taken out of a cluster like -xvf.
    Short(char),

    /// A long option (e.g. --verbose), without any attached value.
    Long(String),

    /// A positional argument, i.e. everything that is not an option.
    Positional(String),

    /// A value explicitly requested for the previous option.
    Value(String),

    /// No token has been read yet.
    #[default]
    Unmatched,
}

impl Token {
    /// Get the raw text of the token, without the hyphens of options.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Token::Short(c) => Cow::Owned(String::from(*c)),
            Token::Long(s) | Token::Positional(s) | Token::Value(s) => Cow::Borrowed(s),
            Token::Unmatched => Cow::Borrowed(""),
        }
    }

    /// Consume the token and get its raw text.
    pub fn into_text(self) -> String {
        match self {
            Token::Short(c) => String::from(c),
            Token::Long(s) | Token::Positional(s) | Token::Value(s) => s,
            Token::Unmatched => String::new(),
        }
    }

    /// Render the token the way it was written: -s for short options, --name for long options
    /// and the raw text otherwise.
    pub fn dashed(&self) -> String {
        alloc::format!("{self}")
    }

    /// Evaluate if the token is a short or long option.
    #[inline(always)]
    pub fn is_option(&self) -> bool {
        matches!(self, Token::Short(_) | Token::Long(_))
    }

    /// Evaluate if the raw argument would be read as an option. The lone `-` is a plain argument.
    #[inline(always)]
    pub fn looks_like_option(input: &str) -> bool {
        input.starts_with('-') && input != "-"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Short(c) => write!(f, "-{c}"),
            Token::Long(name) => write!(f, "--{name}"),
            Token::Positional(s) | Token::Value(s) => f.write_str(s),
            Token::Unmatched => Ok(()),
        }
    }
}
