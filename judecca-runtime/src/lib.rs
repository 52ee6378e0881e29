//! # Judecca Runtime
//!
//! Execute Judecca programs: a Brainfuck-like tape machine whose instructions
//! are generated on demand from the hashed source.
//!
//! ## Features
//!
//! - **Lazy program memory**: pages are derived when first needed and kept in
//!   a single-slot cache
//! - **Monotone jump table**: bracket matching that extends page by page over
//!   an instruction stream with no known end
//! - **Two-sided tape**: grows in either direction, bounded only by [`Limits`]
//! - **Pluggable I/O**: [`StdIo`], [`NullIo`] and [`BufferIo`] devices
//!
//! ## Example
//!
//! ```rust,no_run
//! use judecca_runtime::{Machine, MachineConfig, NullIo};
//! use judecca_spec::derive_seed;
//!
//! let source = b"Hello, world!";
//! let seed = derive_seed(source);
//! let config = MachineConfig { max_steps: Some(10_000), ..MachineConfig::default() };
//! let mut machine = Machine::new(source, seed, config, NullIo::default()).unwrap();
//! let summary = machine.run().unwrap();
//! println!("Steps: {}", summary.steps);
//! ```

pub mod error;
pub mod io;
pub mod tape;
pub mod generator;
pub mod page_cache;
pub mod jump_table;
pub mod state;
pub mod machine;

pub use error::{RuntimeError, Result, EXIT_INTERNAL, EXIT_IO, EXIT_LIMIT, EXIT_USAGE};
pub use io::{BufferIo, IoDevice, NullIo, StdIo};
pub use tape::Tape;
pub use generator::{FixedPages, HashPages, PageGenerator};
pub use page_cache::PageCache;
pub use jump_table::{JumpTable, JumpTarget};
pub use state::MachineState;
pub use machine::{ExecutionSummary, Machine, MachineConfig};
pub use judecca_spec::Limits;
