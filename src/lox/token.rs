//! Core token types shared by the scanner, the parser and the output formats.
//!
//!     The scanner produces one [Token] per lexeme, in source order, and always finishes the
//!     sequence with a single [TokenKind::Eof]. Tokens are immutable once created; the parser
//!     only ever reads them.
//!
//! Token Kinds
//!
//!     [TokenKind] is closed: single-character punctuation, the one/two-character operators
//!     (`=`/`==`, `!`/`!=`, `<`/`<=`, `>`/`>=`), the literal kinds (STRING, NUMBER,
//!     IDENTIFIER), one kind per reserved word, and EOF. Kind names are a pure function of the
//!     enum ([TokenKind::name]); reserved words resolve through a table built once per process
//!     ([keyword]).
//!
//! Literals
//!
//!     Only STRING and NUMBER tokens carry a [LiteralValue]. Strings keep their raw content
//!     with the quotes stripped; numbers keep the parsed `f64`. Every other kind carries none.

pub mod core;
pub mod kind;

pub use self::core::{format_number, LiteralValue, Token};
pub use self::kind::{keyword, TokenKind};
