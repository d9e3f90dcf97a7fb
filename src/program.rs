//! A `Program` is the ordered list of instructions read from one listing. It is not a
//! process: it knows nothing about where its image will be placed.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::iter::FromIterator;
use std::slice::Iter;

use crate::bytecode::{ImageEncoder, Instruction};
use crate::error::EncodingError;

/// Program order is execution order is memory order. There is no way to change the
/// instructions of a program once it has been built.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
  instructions: Vec<Instruction>
}

impl Program {
  pub fn new<I>(instructions: I) -> Program
    where I: IntoIterator<Item = Instruction>
  {
    Program { instructions: instructions.into_iter().collect() }
  }

  pub fn instructions(&self) -> &[Instruction] {
    &self.instructions
  }

  pub fn iter(&self) -> Iter<'_, Instruction> {
    self.instructions.iter()
  }

  pub fn len(&self) -> usize {
    self.instructions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }

  /// The bytes the process creator copies into memory, in the engine's byte order.
  /// Recomputed on every call.
  pub fn memory_image(&self) -> Result<Vec<u8>, EncodingError> {
    self.memory_image_with(&ImageEncoder::default())
  }

  pub fn memory_image_with(&self, encoder: &ImageEncoder) -> Result<Vec<u8>, EncodingError> {
    encoder.encode(self)
  }

  /**
    For debugging, pretty prints the instructions that make up this program, one per line,
    followed by an empty line. Does nothing unless `enabled`.
  */
  pub fn dump<W: Write>(&self, out: &mut W, enabled: bool) -> io::Result<()> {
    if !enabled {
      return Ok(());
    }

    for instruction in &self.instructions {
      writeln!(out, "{}", instruction)?;
    }
    writeln!(out)
  }
}

impl FromIterator<Instruction> for Program {
  fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Program {
    Program::new(iter)
  }
}

impl<'a> IntoIterator for &'a Program {
  type Item = &'a Instruction;
  type IntoIter = Iter<'a, Instruction>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl Display for Program {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for instruction in &self.instructions {
      writeln!(f, "{}", instruction)?;
    }
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::bytecode::{instruction_size, Operation};

  fn sample() -> Program {
    Program::new(vec![
      Instruction::unary(Operation::Pushi, 5),
      Instruction::nullary(Operation::Ret),
      Instruction::binary(Operation::Movi, 5, 10),
    ])
  }

  #[test]
  fn scenario_layout(){
    let image = sample().memory_image().unwrap();
    assert_eq!(image.len(), 15);
    assert_eq!(image[0], Operation::Pushi.code());
    assert_eq!(image[5], Operation::Ret.code());
    assert_eq!(image[6], Operation::Movi.code());
    assert_eq!(&image[1..5], &[5, 0, 0, 0]);
    assert_eq!(&image[7..], &[5, 0, 0, 0, 10, 0, 0, 0]);
  }

  #[test]
  fn encoding_is_deterministic(){
    let program = sample();
    assert_eq!(program.memory_image().unwrap(), program.memory_image().unwrap());
  }

  #[test]
  fn encoding_concatenates(){
    let first = sample();
    let second = Program::new(vec![
      Instruction::new(9, None, Some(3)),
      Instruction::nullary(Operation::Exit),
    ]);
    let both: Program = first.iter().chain(second.iter()).cloned().collect();

    let mut expected = first.memory_image().unwrap();
    expected.extend(second.memory_image().unwrap());
    assert_eq!(both.memory_image().unwrap(), expected);
  }

  #[test]
  fn image_length_is_sum_of_sizes(){
    let program = sample();
    let total: usize = program.iter().map(instruction_size).sum();
    assert_eq!(program.memory_image().unwrap().len(), total);
  }

  #[test]
  fn empty_program_has_empty_image(){
    let program = Program::default();
    assert!(program.is_empty());
    assert_eq!(program.memory_image().unwrap(), Vec::<u8>::new());
  }

  #[test]
  fn encoding_error_names_the_instruction(){
    let program = Program::new(vec![
      Instruction::nullary(Operation::Ret),
      Instruction::new(1000, Some(1), None),
    ]);
    assert_eq!(
      program.memory_image(),
      Err(EncodingError::OpcodeOutOfRange { index: 1, opcode: 1000 })
    );
  }

  #[test]
  fn dump_when_enabled(){
    let mut out = vec![];
    sample().dump(&mut out, true).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "pushi 5\nret\nmovi 5, 10\n\n");
  }

  #[test]
  fn dump_when_disabled(){
    let mut out = vec![];
    sample().dump(&mut out, false).unwrap();
    assert!(out.is_empty());
  }

  #[test]
  fn dump_does_not_change_the_image(){
    let program = sample();
    let before = program.memory_image().unwrap();
    program.dump(&mut io::sink(), true).unwrap();
    assert_eq!(program.memory_image().unwrap(), before);
    assert_eq!(program.to_string(), "pushi 5\nret\nmovi 5, 10\n");
  }
}
