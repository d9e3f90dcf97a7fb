use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};
use num_enum::{TryFromPrimitive, IntoPrimitive};

use crate::bytecode::Word;

/// The raw operation code carried by an instruction. It is wider than the single byte
/// it occupies in memory so that an out-of-range value survives until encoding, where
/// it is rejected instead of being truncated.
pub type Opcode = u32;

/// An operand slot. `None` means the slot is not used by the instruction.
pub type Operand = Option<Word>;

/// The in-band "no operand" value used by collaborators that predate `Operand`.
pub const SENTINEL: Word = Word::MAX;

/**
  Opcodes understood by the execution engine. The discriminants are the byte values the
  engine decodes, so the order the operations are listed below is significant and must
  not be changed without changing the engine.
*/
#[derive(
StrumDisplay, IntoStaticStr, EnumString, EnumIter, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq, PartialEq,  Debug,            Hash
)]
#[repr(u8)]
pub enum Operation {
  #[strum(serialize = "noop")]             Noop,             // noop
  #[strum(serialize = "incr")]             Incr,             // incr r1
  #[strum(serialize = "addi")]             Addi,             // addi r1, $1
  #[strum(serialize = "addr")]             Addr,             // addr r1, r2
  #[strum(serialize = "pushr")]            Pushr,            // pushr r1
  #[strum(serialize = "pushi")]            Pushi,            // pushi $1
  #[strum(serialize = "movi")]             Movi,             // movi r1, $1
  #[strum(serialize = "movr")]             Movr,             // movr r1, r2
  #[strum(serialize = "movmr")]            Movmr,            // movmr r1, r2
  #[strum(serialize = "movrm")]            Movrm,            // movrm r1, r2
  #[strum(serialize = "movmm")]            Movmm,            // movmm r1, r2
  #[strum(serialize = "printr")]           Printr,           // printr r1
  #[strum(serialize = "printm")]           Printm,           // printm r1
  #[strum(serialize = "jmp")]              Jmp,              // jmp r1
  #[strum(serialize = "cmpi")]             Cmpi,             // cmpi r1, $1
  #[strum(serialize = "cmpr")]             Cmpr,             // cmpr r1, r2
  #[strum(serialize = "jlt")]              Jlt,              // jlt r1
  #[strum(serialize = "jgt")]              Jgt,              // jgt r1
  #[strum(serialize = "je")]               Je,               // je r1
  #[strum(serialize = "call")]             Call,             // call r1
  #[strum(serialize = "callm")]            Callm,            // callm r1
  #[strum(serialize = "ret")]              Ret,              // ret
  #[strum(serialize = "alloc")]            Alloc,            // alloc r1, r2
  #[strum(serialize = "acquirelock")]      AcquireLock,      // acquirelock r1
  #[strum(serialize = "releaselock")]      ReleaseLock,      // releaselock r1
  #[strum(serialize = "sleep")]            Sleep,            // sleep r1
  #[strum(serialize = "setpriority")]      SetPriority,      // setpriority r1
  #[strum(serialize = "exit")]             Exit,             // exit
  #[strum(serialize = "freememory")]       FreeMemory,       // freememory r1
  #[strum(serialize = "mapsharedmem")]     MapSharedMem,     // mapsharedmem r1, r2
  #[strum(serialize = "signalevent")]      SignalEvent,      // signalevent r1
  #[strum(serialize = "waitevent")]        WaitEvent,        // waitevent r1
  #[strum(serialize = "input")]            Input,            // input r1
  #[strum(serialize = "memoryclear")]      MemoryClear,      // memoryclear r1, r2
  #[strum(serialize = "terminateprocess")] TerminateProcess, // terminateprocess r1
  #[strum(serialize = "popr")]             Popr,             // popr r1
  #[strum(serialize = "popm")]             Popm,             // popm r1
}

impl Operation {
  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// Looks up the operation for a raw opcode, if the engine defines one.
  pub fn from_opcode(opcode: Opcode) -> Option<Operation> {
    let byte = u8::try_from(opcode).ok()?;
    Operation::try_from(byte).ok()
  }

  /// The number of operands the engine reads after this opcode.
  pub fn arity(&self) -> usize {
    use Operation::*;
    match self {
      | Noop
      | Ret
      | Exit => 0,

      | Addi
      | Addr
      | Movi
      | Movr
      | Movmr
      | Movrm
      | Movmm
      | Cmpi
      | Cmpr
      | Alloc
      | MapSharedMem
      | MemoryClear => 2,

      _ => 1
    }
  }
}

/**
  One unencoded instruction: an opcode and two optional operand slots. The slots are
  independent, so nothing here prevents the second operand being present while the
  first is absent; whether that makes sense is up to the instruction set.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Instruction {
  pub opcode    : Opcode,
  pub operand_1 : Operand,
  pub operand_2 : Operand,
}

impl Instruction {
  pub fn new(opcode: Opcode, operand_1: Operand, operand_2: Operand) -> Instruction {
    Instruction { opcode, operand_1, operand_2 }
  }

  pub fn nullary(operation: Operation) -> Instruction {
    Instruction::new(operation.code() as Opcode, None, None)
  }

  pub fn unary(operation: Operation, operand: Word) -> Instruction {
    Instruction::new(operation.code() as Opcode, Some(operand), None)
  }

  pub fn binary(operation: Operation, operand_1: Word, operand_2: Word) -> Instruction {
    Instruction::new(operation.code() as Opcode, Some(operand_1), Some(operand_2))
  }

  /// Builds an instruction from the sentinel form, where `SENTINEL` marks an unused slot.
  pub fn from_raw(opcode: Opcode, param_1: Word, param_2: Word) -> Instruction {
    let slot = |param: Word| if param == SENTINEL { None } else { Some(param) };
    Instruction::new(opcode, slot(param_1), slot(param_2))
  }

  /// The operands in sentinel form, the inverse of `from_raw`.
  pub fn raw_operands(&self) -> (Word, Word) {
    (
      self.operand_1.unwrap_or(SENTINEL),
      self.operand_2.unwrap_or(SENTINEL)
    )
  }

  pub fn operation(&self) -> Option<Operation> {
    Operation::from_opcode(self.opcode)
  }

  /// Number of operand slots in use.
  pub fn operand_count(&self) -> usize {
    self.operand_1.iter().chain(self.operand_2.iter()).count()
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.operation() {
      Some(operation) => write!(f, "{}", operation)?,
      None            => write!(f, "op#{}", self.opcode)?
    }

    let operands: Vec<String> =
      [self.operand_1, self.operand_2]
        .iter()
        .map(|operand| match operand {
          Some(value) => value.to_string(),
          None        => "_".to_string()
        })
        .collect();

    match (self.operand_1, self.operand_2) {
      (None, None) => Ok(()),
      (_, None)    => write!(f, " {}", operands[0]),
      _            => write!(f, " {}, {}", operands[0], operands[1])
    }
  }
}
