//! Tabular memory map of a program: where each instruction lands in the image and which
//! bytes it occupies.

use prettytable::{format as TableFormat, Table};

use crate::bytecode::ImageEncoder;
use crate::error::EncodingError;
use crate::program::Program;

fn hex_bytes(bytes: &[u8]) -> String {
  bytes
    .iter()
    .map(|b| format!("{:02x}", b))
    .collect::<Vec<String>>()
    .join(" ")
}

/// One row per instruction: its byte offset from the start of the image, its encoding, and
/// its assembly form.
pub fn memory_map(program: &Program, encoder: &ImageEncoder) -> Result<Table, EncodingError> {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubr->"Offset", ubl->"Bytes", ubl->"Instruction"]);

  let mut offset = 0usize;
  let mut encoded = Vec::new();
  for (index, instruction) in program.iter().enumerate() {
    encoded.clear();
    encoder.encode_instruction(index, instruction, &mut encoded)?;

    table.add_row(
      row![r->format!("{:#06x}", offset), hex_bytes(&encoded), instruction.to_string()]
    );
    offset += encoded.len();
  } // end for

  Ok(table)
}

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}
