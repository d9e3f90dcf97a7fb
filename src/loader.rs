//! Reads a program listing into a `Program`, one instruction per line. A load either
//! yields the whole program or an error; there are no partial programs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::bytecode::InstructionParser;
use crate::error::LoadError;
use crate::program::Program;

/**
  Loads a program from a file on disk. Every line is handed to `parser`, including blank
  ones, and the resulting instructions make up the program in file order. The file is
  closed before this returns, whatever the outcome.
*/
pub fn load_program<P, T>(path: P, parser: &T) -> Result<Program, LoadError>
  where P: AsRef<Path>,
        T: InstructionParser + ?Sized
{
  let path = path.as_ref();
  debug!(path = %path.display(), "loading program");

  let file = File::open(path).map_err(|source| LoadError::Io {
    path: path.to_path_buf(),
    source
  })?;

  let program = read_program(BufReader::new(file), path, parser)?;
  info!(path = %path.display(), instructions = program.len(), "loaded program");
  Ok(program)
}

/// Like `load_program`, for listings that do not live in a file. `name` stands in for the
/// path in errors.
pub fn load_from_reader<R, T>(reader: R, name: &str, parser: &T) -> Result<Program, LoadError>
  where R: BufRead,
        T: InstructionParser + ?Sized
{
  read_program(reader, Path::new(name), parser)
}

fn read_program<R, T>(reader: R, path: &Path, parser: &T) -> Result<Program, LoadError>
  where R: BufRead,
        T: InstructionParser + ?Sized
{
  let mut instructions = vec![];

  for (index, line) in reader.lines().enumerate() {
    let line = line.map_err(|source| LoadError::Io {
      path: path.to_path_buf(),
      source
    })?;

    let instruction = parser.parse(&line).map_err(|source| LoadError::Parse {
      path: path.to_path_buf(),
      line: index + 1,
      source
    })?;
    instructions.push(instruction);
  }

  Ok(Program::new(instructions))
}
