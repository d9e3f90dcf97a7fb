/*!
  This module is responsible for encoding instructions into the memory image.

  Each instruction is laid out as its opcode byte followed by one 4 byte block per
  present operand. Nothing separates consecutive instructions, and the image carries
  neither a length nor a terminator.
*/
use std::convert::TryFrom;

use tracing::{debug, trace};

use super::Instruction;
use crate::error::EncodingError;
use crate::program::Program;

// If you change this you must also change `OPERAND_SIZE`.
pub type Word = u32;

pub const OPCODE_SIZE: usize = 1;
pub const OPERAND_SIZE: usize = 4;

/// Byte order of operand blocks. Both sides of the image must agree on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ByteOrder {
  Little,
  Big
}

/// The order the execution engine reads operands in.
pub const ENGINE_BYTE_ORDER: ByteOrder = ByteOrder::Little;

impl ByteOrder {
  pub fn word_bytes(&self, word: Word) -> [u8; OPERAND_SIZE] {
    match self {
      ByteOrder::Little => word.to_le_bytes(),
      ByteOrder::Big    => word.to_be_bytes()
    }
  }
}

impl Default for ByteOrder {
  fn default() -> ByteOrder {
    ENGINE_BYTE_ORDER
  }
}

/// Returns the size in BYTES of the encoded instruction.
pub fn instruction_size(instruction: &Instruction) -> usize {
  OPCODE_SIZE + OPERAND_SIZE * instruction.operand_count()
}

/// Turns programs into memory images. Holds nothing but the operand byte order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImageEncoder {
  byte_order: ByteOrder
}

impl ImageEncoder {
  pub fn new(byte_order: ByteOrder) -> ImageEncoder {
    ImageEncoder { byte_order }
  }

  pub fn byte_order(&self) -> ByteOrder {
    self.byte_order
  }

  /**
    Appends the encoding of `instruction` to `out`. On error `out` is left untouched.
    `index` is the position of the instruction within its program and is only used to
    report errors.
  */
  pub fn encode_instruction(&self, index: usize, instruction: &Instruction, out: &mut Vec<u8>)
    -> Result<(), EncodingError>
  {
    let opcode = u8::try_from(instruction.opcode).map_err(|_| {
      EncodingError::OpcodeOutOfRange { index, opcode: instruction.opcode }
    })?;

    out.push(opcode);
    for operand in [instruction.operand_1, instruction.operand_2].iter().flatten() {
      out.extend_from_slice(&self.byte_order.word_bytes(*operand));
    }

    trace!(index, %instruction, size = instruction_size(instruction), "encoded instruction");
    Ok(())
  }

  /// Encodes the whole program. Either every instruction is encoded or none is.
  pub fn encode(&self, program: &Program) -> Result<Vec<u8>, EncodingError> {
    let size: usize = program.iter().map(instruction_size).sum();
    let mut image = Vec::with_capacity(size);

    for (index, instruction) in program.iter().enumerate() {
      self.encode_instruction(index, instruction, &mut image)?;
    }

    debug!(instructions = program.len(), bytes = image.len(), byte_order = ?self.byte_order,
      "encoded memory image");
    Ok(image)
  }
}
