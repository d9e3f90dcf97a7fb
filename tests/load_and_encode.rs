use std::io::Write;

use tempfile::NamedTempFile;

use tiny_loader::{load_program, AssemblyParser, Config, ConfigError, LoadError, Operation,
                  ParseError, Program};

fn listing(text: &str) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(text.as_bytes()).unwrap();
  file.flush().unwrap();
  file
}

fn load(text: &str) -> Result<Program, LoadError> {
  let file = listing(text);
  load_program(file.path(), &AssemblyParser)
}

#[test]
fn one_operand_none_then_two(){
  let program = load("pushi $5\nret\nmovi r5, $10\n").unwrap();
  let image = program.memory_image().unwrap();

  assert_eq!(image.len(), 15);
  assert_eq!(image[0], Operation::Pushi.code());
  assert_eq!(image[5], Operation::Ret.code());
  assert_eq!(image[6], Operation::Movi.code());
}

#[test]
fn numeric_listing(){
  // Counts to ten.
  let text = "\
6\tr1, $0\t\t; r1 = 0
6\tr2, $10\t\t; r2 = 10
1\tr1\t\t; r1++
11\tr1\t\t; print r1
15\tr1, r2
27
";
  let program = load(text).unwrap();
  assert_eq!(program.len(), 6);

  let image = program.memory_image().unwrap();
  assert_eq!(image.len(), 9 + 9 + 5 + 5 + 9 + 1);
  assert_eq!(&image[..9], &[6, 1, 0, 0, 0, 0, 0, 0, 0]);
  assert_eq!(image[image.len() - 1], 27);
}

#[test]
fn empty_file(){
  let program = load("").unwrap();
  assert!(program.is_empty());
  assert!(program.memory_image().unwrap().is_empty());
}

#[test]
fn line_count_matches_instruction_count(){
  let lines: Vec<String> = (0..50).map(|i| format!("pushi ${}", i)).collect();
  let program = load(&lines.join("\n")).unwrap();
  assert_eq!(program.len(), 50);
  assert_eq!(program.memory_image().unwrap().len(), 50 * 5);
}

#[test]
fn bad_line_fails_the_whole_load(){
  match load("ret\nmovi r1\nexit\n") {
    Err(LoadError::Parse { line, source, .. }) => {
      assert_eq!(line, 2);
      assert_eq!(source, ParseError::WrongArity { operation: Operation::Movi, expected: 2, found: 1 });
    }
    other => panic!("expected a parse error, got {:?}", other)
  }
}

#[test]
fn missing_file(){
  let dir = tempfile::tempdir().unwrap();
  let error = load_program(dir.path().join("nothing.tos"), &AssemblyParser).unwrap_err();
  assert!(matches!(error, LoadError::Io { .. }));
  assert!(error.to_string().contains("nothing.tos"));
}

#[test]
fn config_controls_dump_but_not_image(){
  let program = load("incr r1\naddr r1, r2\nexit\n").unwrap();

  let on = listing("dump_program = true\n");
  let off = listing("dump_program = false\n");
  let on = Config::load(on.path()).unwrap();
  let off = Config::load(off.path()).unwrap();

  let mut dumped = vec![];
  program.dump(&mut dumped, on.dump_program).unwrap();
  assert_eq!(String::from_utf8(dumped).unwrap(), "incr 1\naddr 1, 2\nexit\n\n");

  let mut silent = vec![];
  program.dump(&mut silent, off.dump_program).unwrap();
  assert!(silent.is_empty());

  assert_eq!(
    program.memory_image_with(&on.encoder()).unwrap(),
    program.memory_image_with(&off.encoder()).unwrap()
  );
}

#[test]
fn configured_byte_order(){
  let program = load("pushi $1\n").unwrap();
  let config = listing("dump_program = false\n[image]\nbyte_order = \"big\"\n");
  let config = Config::load(config.path()).unwrap();
  assert_eq!(program.memory_image_with(&config.encoder()).unwrap(), vec![5, 0, 0, 0, 1]);
  assert_eq!(program.memory_image().unwrap(), vec![5, 1, 0, 0, 0]);
}

#[test]
fn malformed_config(){
  let config = listing("dump_program = maybe\n");
  let error = Config::load(config.path()).unwrap_err();
  assert!(matches!(error, ConfigError::Malformed { .. }));
}
