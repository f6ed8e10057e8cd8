use catalogue_core::Msg;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  go <path>          navigate (e.g. `go /health`, `go /`)
  sector [value]     choose a sector, or clear it
  year [value]       choose a year, or clear it
  title [value]      choose a title, or clear it
  next | prev        move the carousel
  visitor <id>       switch to another visitor's session
  reload             re-read the catalogue source
  show               print the current page
  help               this text
  quit";

/// One line typed by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    SwitchVisitor(String),
    Reload,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// Parses a line; `Ok(None)` for blank input.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let value = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word {
        "go" => Command::Dispatch(Msg::Navigated(value.unwrap_or_else(|| "/".into()))),
        "sector" => Command::Dispatch(Msg::SectorSelected(value)),
        "year" => Command::Dispatch(Msg::YearSelected(value)),
        "title" => Command::Dispatch(Msg::TitleSelected(value)),
        "next" => Command::Dispatch(Msg::CarouselNext),
        "prev" => Command::Dispatch(Msg::CarouselPrev),
        "visitor" => Command::SwitchVisitor(value.ok_or(CommandError::MissingArgument("visitor"))?),
        "reload" => Command::Reload,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
