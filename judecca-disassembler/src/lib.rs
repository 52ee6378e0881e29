//! # Judecca Disassembler
//!
//! Render program pages as symbol text.
//!
//! ## Styles
//!
//! - **Raw**: one symbol per opcode, 64 per page
//! - **Stripped**: only opcodes with an effect; `_`, `%` and `$` are dropped
//!
//! ## Example
//!
//! ```rust
//! use judecca_disassembler::{decode, format_page, Style};
//!
//! let dump = "6D45EBAB781D6037F09DD80FF55958388B118810B506FC1D2E4F5CA058446E4F";
//! let page = decode(dump).unwrap();
//! assert_eq!(format_page(&page, Style::Stripped), ".[],-.+>,+|+]]|]>---+]+.-<[]+][[.[");
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble, disassemble_pages};
pub use decoder::{decode, decode_hex};
pub use formatter::{format_opcodes, format_page, symbol, Style};
