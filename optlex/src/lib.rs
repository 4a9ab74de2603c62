//! optlex, a `no_std` command line lexer that hands you tokens instead of a flag schema.
//!
//! ```
//! use optlex::{Lexer, Token, TokenExt};
//!
//! let mut lexer = Lexer::from_args(["-n", "3", "--name=world", "file"]);
//! let mut files = Vec::new();
//!
//! while lexer.advance() {
//!     match lexer.current().clone() {
//!         Token::Short('n') => {
//!             let count: u32 = lexer.value()?.parse()?;
//!             assert_eq!(count, 3);
//!         }
//!         Token::Long(name) if name == "name" => {
//!             assert_eq!(lexer.value()?.text(), "world");
//!         }
//!         Token::Positional(file) => files.push(file),
//!         other => panic!("unexpected argument {other}"),
//!     }
//! }
//!
//! assert_eq!(lexer.error(), None);
//! assert_eq!(files, ["file"]);
//! # Ok::<(), optlex::Error>(())
//! ```
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub use optlex_convert as convert;
pub use optlex_lexer as lexer;

pub use convert::FromArg;
pub use lexer::{Lexer, RawArgs, Token};

mod ext;
pub mod must;

pub use ext::TokenExt;
pub use must::{MustLexer, must};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the lexing of arguments.
    #[error(transparent)]
    Lexer(#[from] lexer::Error),

    /// An error comes from the conversion of a value.
    #[error(transparent)]
    Convert(#[from] convert::Error),
}
