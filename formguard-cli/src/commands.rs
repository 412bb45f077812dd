//! Parsing of interactive commands.

use formguard_lib::prelude::*;

use crate::error::CliError;

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an event to the form.
    Event(FormEvent),
    /// Print the current view.
    Show,
    /// Print the current view as JSON.
    Json,
    /// Print the raw field values as JSON.
    Values,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <value...>   type a value into a field (clears its error)
  clear <field>            empty a text field
  blur <field>             leave a field (validates it)
  check | uncheck          toggle the terms checkbox
  submit                   submit the form
  show                     print the form
  json                     print the form as JSON
  values                   print the field values as JSON
  help                     show this help
  quit                     exit

Fields: fullName email password confirmPassword age phone terms";

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse(line: &str) -> Result<Option<Command>, CliError> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match word {
        "" => return Ok(None),
        "set" => {
            let rest = rest.trim_start();
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let name = field_arg("set", field)?;
            Command::Event(FormEvent::Input(name, value.into()))
        }
        "clear" => Command::Event(FormEvent::Input(field_arg("clear", rest)?, "".into())),
        "blur" => Command::Event(FormEvent::Blur(field_arg("blur", rest)?)),
        "check" => Command::Event(FormEvent::Change(FieldName::Terms, true.into())),
        "uncheck" => Command::Event(FormEvent::Change(FieldName::Terms, false.into())),
        "submit" => Command::Event(FormEvent::Submit),
        "show" => Command::Show,
        "json" => Command::Json,
        "values" => Command::Values,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn field_arg(command: &'static str, arg: &str) -> Result<FieldName, CliError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(CliError::MissingArgument {
            command,
            expected: "a field name",
        });
    }
    Ok(arg.parse()?)
}
