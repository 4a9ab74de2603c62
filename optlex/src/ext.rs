use core::time::Duration;

use crate::convert::{self, FromArg};
use crate::lexer::Token;
use crate::must::must;

/// Conversions of a token's raw text to typed values.
///
/// Every conversion comes in two flavors: a fallible one returning the conversion error, and a
/// `must_` one that panics with a descriptive message instead.
pub trait TokenExt {
    /// Convert the raw text to any type implementing [`FromArg`].
    fn parse<T: FromArg>(&self) -> Result<T, convert::Error>;

    /// Convert to a boolean.
    fn to_bool(&self) -> Result<bool, convert::Error> {
        self.parse()
    }

    /// Convert to a signed integer.
    fn to_int(&self) -> Result<isize, convert::Error> {
        self.parse()
    }

    /// Convert to a 64-bit signed integer.
    fn to_i64(&self) -> Result<i64, convert::Error> {
        self.parse()
    }

    /// Convert to an unsigned integer.
    fn to_uint(&self) -> Result<usize, convert::Error> {
        self.parse()
    }

    /// Convert to a 64-bit unsigned integer.
    fn to_u64(&self) -> Result<u64, convert::Error> {
        self.parse()
    }

    /// Convert to a floating point number.
    fn to_f64(&self) -> Result<f64, convert::Error> {
        self.parse()
    }

    /// Convert to a duration, e.g. `1h30m`.
    fn to_duration(&self) -> Result<Duration, convert::Error> {
        self.parse()
    }

    /// Like [`TokenExt::parse`], but panics if the conversion fails.
    fn must_parse<T: FromArg>(&self) -> T {
        must(self.parse())
    }

    /// Like [`TokenExt::to_bool`], but panics if the conversion fails.
    fn must_bool(&self) -> bool {
        must(self.to_bool())
    }

    /// Like [`TokenExt::to_int`], but panics if the conversion fails.
    fn must_int(&self) -> isize {
        must(self.to_int())
    }

    /// Like [`TokenExt::to_i64`], but panics if the conversion fails.
    fn must_i64(&self) -> i64 {
        must(self.to_i64())
    }

    /// Like [`TokenExt::to_uint`], but panics if the conversion fails.
    fn must_uint(&self) -> usize {
        must(self.to_uint())
    }

    /// Like [`TokenExt::to_u64`], but panics if the conversion fails.
    fn must_u64(&self) -> u64 {
        must(self.to_u64())
    }

    /// Like [`TokenExt::to_f64`], but panics if the conversion fails.
    fn must_f64(&self) -> f64 {
        must(self.to_f64())
    }

    /// Like [`TokenExt::to_duration`], but panics if the conversion fails.
    fn must_duration(&self) -> Duration {
        must(self.to_duration())
    }
}

impl TokenExt for Token {
    fn parse<T: FromArg>(&self) -> Result<T, convert::Error> {
        T::from_arg(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use googletest::prelude::*;

    use super::*;

    fn val(text: &str) -> Token {
        Token::Value(text.to_string())
    }

    #[test]
    fn it_should_convert_numbers() {
        let arg = val("-42");
        assert_that!(arg.to_int(), eq(Ok(-42)));
        assert_that!(arg.must_int(), eq(-42));
        assert_that!(arg.to_i64(), eq(Ok(-42)));
        assert_that!(arg.must_i64(), eq(-42));
        assert_that!(arg.to_uint().is_err(), eq(true));
        assert_that!(arg.to_u64().is_err(), eq(true));

        let arg = val("99");
        assert_that!(arg.must_uint(), eq(99));
        assert_that!(arg.must_u64(), eq(99));
        assert_that!(arg.must_parse::<u8>(), eq(99));

        let arg = val("2.75");
        assert_that!(arg.to_f64(), eq(Ok(2.75)));
        assert_that!(arg.must_f64(), eq(2.75));
    }

    #[test]
    fn it_should_convert_bools_and_durations() {
        assert_that!(val("true").to_bool(), eq(Ok(true)));
        assert_that!(val("true").must_bool(), eq(true));
        assert_that!(
            val("5m").to_duration(),
            eq(Ok(Duration::from_secs(300)))
        );
        assert_that!(val("5m").must_duration(), eq(Duration::from_secs(300)));
    }

    #[test]
    fn it_should_convert_from_option_text() {
        // Options convert through their name, without hyphens.
        assert_that!(Token::Short('7').to_uint(), eq(Ok(7)));
        assert_that!(Token::Long("false".to_string()).to_bool(), eq(Ok(false)));
    }

    #[test]
    fn it_should_fail_every_conversion_on_garbage() {
        let arg = val("hello");
        assert_that!(arg.to_int().is_err(), eq(true));
        assert_that!(arg.to_i64().is_err(), eq(true));
        assert_that!(arg.to_uint().is_err(), eq(true));
        assert_that!(arg.to_u64().is_err(), eq(true));
        assert_that!(arg.to_f64(), eq(Err(convert::Error::InvalidFloat)));
        assert_that!(arg.to_bool(), eq(Err(convert::Error::InvalidBool)));
        assert_that!(arg.to_duration().is_err(), eq(true));
    }

    #[test]
    #[should_panic(expected = "optlex: invalid integer: invalid digit")]
    fn it_should_panic_on_bad_int() {
        val("hello").must_int();
    }

    #[test]
    #[should_panic(expected = "optlex: invalid integer")]
    fn it_should_panic_on_bad_uint() {
        val("-42").must_uint();
    }

    #[test]
    #[should_panic(expected = "optlex: invalid float")]
    fn it_should_panic_on_bad_float() {
        val("hello").must_f64();
    }

    #[test]
    #[should_panic(expected = "optlex: invalid boolean")]
    fn it_should_panic_on_bad_bool() {
        val("hello").must_bool();
    }

    #[test]
    #[should_panic(expected = "optlex: invalid duration")]
    fn it_should_panic_on_bad_duration() {
        val("hello").must_duration();
    }
}
