//! Error types for loading, parsing, encoding and configuration. Nothing is recovered
//! locally: every failure aborts the operation it occurred in.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::bytecode::{Opcode, Operation};

/// A line of assembly could not be turned into an instruction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
  #[error("line holds no instruction")]
  EmptyLine,
  #[error("`{0}` is not an operation")]
  UnknownOperation(String),
  #[error("{operation} requires {expected} operands but was given {found}")]
  WrongArity {
    operation: Operation,
    expected: usize,
    found: usize
  },
  #[error("invalid operand `{0}`")]
  InvalidOperand(String),
  #[error("unexpected input `{0}`")]
  Syntax(String),
}

/// Failure to produce a `Program` from a source.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("cannot read program {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error
  },
  #[error("{}:{line}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    line: usize,
    #[source]
    source: ParseError
  },
}

/// An instruction violates the width assumptions of the memory image.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EncodingError {
  #[error("instruction {index}: opcode {opcode} does not fit in one byte")]
  OpcodeOutOfRange {
    index: usize,
    opcode: Opcode
  },
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot read configuration {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error
  },
  #[error("malformed configuration {}: {source}", .path.display())]
  Malformed {
    path: PathBuf,
    #[source]
    source: toml::de::Error
  },
}
