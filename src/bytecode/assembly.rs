/*!
  The human readable textual form of a program is called assembly. A program listing has
  one instruction per line:

    ```text
    6     r1, $10    ; movi, given by number
    incr  r1         ; or by mnemonic
    ```

  The operation is either a decimal opcode or a mnemonic (case-insensitive). Operands are
  registers (`r1`), constants (`$10`) or bare numbers, separated by a comma or whitespace.
  A register operand is stored as its register number. Anything after `;` or `#` is a
  comment. This module leverages the `strum` derives of `Operation` to look up mnemonics.
*/

use std::str::FromStr;

use nom::{
  IResult,
  branch::alt,
  character::complete::{
    alphanumeric1,
    char as one_char,
    digit1,
    one_of,
    space0,
    space1
  },
  combinator::{map, opt, recognize, rest},
  multi::separated_list,
  sequence::{delimited, pair, preceded, terminated}
};

use super::{Instruction, Opcode, Operation, Word};
use crate::error::ParseError;

/// Turns one line of program text into an instruction. The loader only ever talks to this.
pub trait InstructionParser {
  fn parse(&self, line: &str) -> Result<Instruction, ParseError>;
}

impl<F> InstructionParser for F
  where F: Fn(&str) -> Result<Instruction, ParseError>
{
  fn parse(&self, line: &str) -> Result<Instruction, ParseError> {
    self(line)
  }
}

/// The parser for the assembly syntax described in the module documentation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssemblyParser;

impl InstructionParser for AssemblyParser {
  fn parse(&self, line: &str) -> Result<Instruction, ParseError> {
    parse_instruction(line)
  }
}

/// The unresolved pieces of an instruction, exactly as written.
struct Statement<'a> {
  operation : &'a str,
  operands  : Vec<&'a str>
}

fn comment(input: &str) -> IResult<&str, &str> {
  preceded(one_of(";#"), rest)(input)
}

fn operand(input: &str) -> IResult<&str, &str> {
  recognize(
    alt((
      preceded(one_of("rR$"), digit1),
      digit1
    ))
  )(input)
}

fn operand_separator(input: &str) -> IResult<&str, &str> {
  alt((
    recognize(delimited(space0, one_char(','), space0)),
    space1
  ))(input)
}

fn statement(input: &str) -> IResult<&str, Statement> {
  map(
    pair(
      alphanumeric1,
      opt(preceded(space1, separated_list(operand_separator, operand)))
    ),
    |(operation, operands)| Statement {
      operation,
      operands: operands.unwrap_or_default()
    }
  )(input)
}

fn line(input: &str) -> IResult<&str, Option<Statement>> {
  terminated(
    preceded(space0, opt(statement)),
    pair(space0, opt(comment))
  )(input)
}

fn resolve_operation(text: &str) -> Result<(Opcode, Option<Operation>), ParseError> {
  if text.bytes().all(|b| b.is_ascii_digit()) {
    let opcode = text.parse::<Opcode>()
                     .map_err(|_| ParseError::UnknownOperation(text.to_string()))?;
    return Ok((opcode, Operation::from_opcode(opcode)));
  }

  match Operation::from_str(&text.to_ascii_lowercase()) {
    Ok(operation) => Ok((operation.code() as Opcode, Some(operation))),
    Err(_e)       => Err(ParseError::UnknownOperation(text.to_string()))
  }
}

fn resolve_operand(text: &str) -> Result<Word, ParseError> {
  let digits = text.trim_start_matches(|c| c == 'r' || c == 'R' || c == '$');
  digits.parse::<Word>()
        .map_err(|_| ParseError::InvalidOperand(text.to_string()))
}

/**
  Parses a single line of assembly. Blank and comment-only lines are rejected with
  `ParseError::EmptyLine`. Operations the engine defines are checked for the right number
  of operands; numeric opcodes it does not define are passed through as written.
*/
pub fn parse_instruction(text: &str) -> Result<Instruction, ParseError> {
  let (remainder, statement) = match line(text) {
    Ok(parsed) => parsed,
    Err(_e)    => return Err(ParseError::Syntax(text.trim().to_string()))
  };

  if !remainder.is_empty() {
    return Err(ParseError::Syntax(remainder.trim().to_string()));
  }
  let statement = statement.ok_or(ParseError::EmptyLine)?;

  let (opcode, operation) = resolve_operation(statement.operation)?;
  let found = statement.operands.len();

  if let Some(operation) = operation {
    if operation.arity() != found {
      return Err(ParseError::WrongArity { operation, expected: operation.arity(), found });
    }
  }
  if found > 2 {
    return Err(ParseError::Syntax(statement.operands[2..].join(" ")));
  }

  let mut operands = statement.operands
                              .iter()
                              .map(|text| resolve_operand(text));
  let operand_1 = operands.next().transpose()?;
  let operand_2 = operands.next().transpose()?;

  Ok(Instruction::new(opcode, operand_1, operand_2))
}
