//! Loads TinyOS assembly listings and encodes them into the memory image a process is
//! created from.
//!
//! ```no_run
//! use tiny_loader::{load_program, AssemblyParser};
//!
//! let program = load_program("programs/counter.tos", &AssemblyParser)?;
//! let image = program.memory_image()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod bytecode;
pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod program;

pub use bytecode::{AssemblyParser, ByteOrder, ImageEncoder, Instruction, InstructionParser,
                   Operation, ENGINE_BYTE_ORDER};
pub use config::Config;
pub use error::{ConfigError, EncodingError, LoadError, ParseError};
pub use listing::memory_map;
pub use loader::{load_from_reader, load_program};
pub use program::Program;
