//! Prompt commands.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  search [text]   search cached items by id, name or description (no text clears)
  add             open the add form
  edit <id>       open the edit form for an item
  name <text>     set the name in the open form
  desc <text>     set the description in the open form
  save            submit the open form
  cancel          close the open form
  delete <id>     delete an item
  show <id>       fetch one item from the server
  refresh         reload the item list
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add,
    Edit(String),
    Name(String),
    Describe(String),
    Save,
    Cancel,
    Delete(String),
    Show(String),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an item id")]
    MissingId(&'static str),
    #[error("no form is open, use `add` or `edit <id>` first")]
    NoOpenForm,
    #[error("no item with id `{0}` in the list")]
    UnknownItem(String),
}

impl FromStr for Command {
    type Err = CommandError;

    /// Splits at the first whitespace character. Text arguments keep the
    /// rest of the line verbatim; ids are trimmed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let id = |name: &'static str| {
            let id = rest.trim();
            if id.is_empty() {
                Err(CommandError::MissingId(name))
            } else {
                Ok(id.to_string())
            }
        };

        match word.trim_end() {
            "" => Err(CommandError::Empty),
            "search" => Ok(Command::Search(rest.to_string())),
            "add" => Ok(Command::Add),
            "edit" => id("edit").map(Command::Edit),
            "name" => Ok(Command::Name(rest.to_string())),
            "desc" => Ok(Command::Describe(rest.to_string())),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" => id("delete").map(Command::Delete),
            "show" => id("show").map(Command::Show),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!("add".parse::<Command>(), Ok(Command::Add));
        assert_eq!("save".parse::<Command>(), Ok(Command::Save));
        assert_eq!("  quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn text_arguments_keep_inner_spaces() {
        assert_eq!("name Red pen".parse::<Command>(), Ok(Command::Name("Red pen".into())));
        assert_eq!("desc ".parse::<Command>(), Ok(Command::Describe(String::new())));
        assert_eq!("search  pen".parse::<Command>(), Ok(Command::Search(" pen".into())));
    }

    #[test]
    fn search_without_text_clears() {
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn id_commands_require_an_id() {
        assert_eq!("edit 65a1 ".parse::<Command>(), Ok(Command::Edit("65a1".into())));
        assert_eq!("delete".parse::<Command>(), Err(CommandError::MissingId("delete")));
        assert_eq!("show   ".parse::<Command>(), Err(CommandError::MissingId("show")));
    }

    #[test]
    fn tab_separates_command_from_argument() {
        assert_eq!("edit\t65a1".parse::<Command>(), Ok(Command::Edit("65a1".into())));
        assert_eq!("name\tRed pen".parse::<Command>(), Ok(Command::Name("Red pen".into())));
    }

    #[test]
    fn empty_and_unknown_lines() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("frobnicate x".parse::<Command>(), Err(CommandError::Unknown("frobnicate".into())));
    }
}
