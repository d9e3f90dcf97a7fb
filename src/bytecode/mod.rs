/*!

  The engine addresses memory bytewise. A loaded program occupies a contiguous run of
  bytes starting at the process's code base, one instruction after another:

    ```text
    Opcode:    8 bits, always present
    Operand 1: 32 bits, only if the instruction uses its first operand slot
    Operand 2: 32 bits, only if the instruction uses its second operand slot
    ```

  Operands are written in `ENGINE_BYTE_ORDER` unless an encoder is built with another
  order. There is no alignment, padding, length prefix or terminator, so an image can
  only be walked by something that knows how many operands each opcode takes.

  Operand slots are `Option`s rather than words with a reserved "unused" value. Older
  collaborators that still exchange the reserved value (`SENTINEL`) go through
  `Instruction::from_raw` and `Instruction::raw_operands`.

*/

mod binary;
mod instruction;
mod assembly;

pub use binary::{instruction_size, ByteOrder, ImageEncoder, Word, ENGINE_BYTE_ORDER,
                 OPCODE_SIZE, OPERAND_SIZE};
pub use instruction::{Instruction, Opcode, Operand, Operation, SENTINEL};
pub use assembly::{parse_instruction, AssemblyParser, InstructionParser};
