#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod lexer;
pub mod raw;
pub mod token;

pub use lexer::{Error, Lexer};
pub use raw::RawArgs;
pub use token::Token;
