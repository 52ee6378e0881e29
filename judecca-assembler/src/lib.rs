//! Judecca Assembler
//!
//! Turn instruction symbols into raw program pages, for driving the machine
//! with a hand-written instruction stream instead of a hashed one.
//!
//! ## Example
//!
//! ```rust
//! use judecca_assembler::assemble;
//!
//! let text = r#"
//!     +++   # three
//!     [-]   # clear
//! "#;
//!
//! let pages = assemble(text).unwrap();
//! assert_eq!(pages.len(), 1);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::parse;
pub use encoder::{encode_opcodes, PADDING};
