//! Conversions from the raw text of a command line argument to typed values.
#![no_std]

extern crate alloc;

pub mod duration;

use alloc::string::String;
use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;
use core::time::Duration;

pub use duration::parse_duration;

/// Defines the possible errors that may occur when converting an argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The argument is not one of the accepted boolean spellings.
    #[error("invalid boolean")]
    InvalidBool,

    /// The argument is not an integer of the destination type.
    #[error("invalid integer: {0}")]
    InvalidInt(&'static str),

    /// The argument is not a floating point number.
    #[error("invalid float")]
    InvalidFloat,

    /// The argument is not a duration.
    #[error("invalid duration: {0}")]
    InvalidDuration(&'static str),
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        let reason = match err.kind() {
            IntErrorKind::Empty => "empty",
            IntErrorKind::PosOverflow => "too large",
            IntErrorKind::NegOverflow => "too small",
            _ => "invalid digit",
        };

        Error::InvalidInt(reason)
    }
}

/// Parse a boolean. Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(input: &str) -> Result<bool, Error> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::InvalidBool),
    }
}

/// Parse a decimal integer with an optional sign.
pub fn parse_int<T>(input: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseIntError>,
{
    input.parse::<T>().map_err(Error::from)
}

/// Parse a floating point number.
pub fn parse_float(input: &str) -> Result<f64, Error> {
    input.parse::<f64>().map_err(|_| Error::InvalidFloat)
}

/// Defines a type that can be built from the raw text of an argument.
pub trait FromArg: Sized {
    /// Convert the raw text.
    fn from_arg(input: &str) -> Result<Self, Error>;
}

macro_rules! make_from_arg_int_impl {
    ($($target:ty),*) => {
        $(
            impl FromArg for $target {
                fn from_arg(input: &str) -> Result<Self, Error> {
                    parse_int::<$target>(input)
                }
            }
        )*
    };
}

make_from_arg_int_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromArg for f32 {
    fn from_arg(input: &str) -> Result<Self, Error> {
        input.parse::<f32>().map_err(|_| Error::InvalidFloat)
    }
}

impl FromArg for f64 {
    fn from_arg(input: &str) -> Result<Self, Error> {
        parse_float(input)
    }
}

impl FromArg for bool {
    fn from_arg(input: &str) -> Result<Self, Error> {
        parse_bool(input)
    }
}

impl FromArg for Duration {
    fn from_arg(input: &str) -> Result<Self, Error> {
        parse_duration(input)
    }
}

impl FromArg for String {
    fn from_arg(input: &str) -> Result<Self, Error> {
        Ok(String::from(input))
    }
}
