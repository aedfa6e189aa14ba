//! Text commands typed at the prompt.

use crate::creature::types::Trick;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Feed(String),
    Play(Option<String>),
    Sleep,
    Wake(Option<String>),
    Clean,
    Medicine,
    Scold,
    Train(Option<Trick>),
    Perform(Trick),
    Pet,
    Tick,
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type a command, or 'help' for a list.")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    Unknown(String),

    #[error("'{command}' needs {argument}.")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unknown trick '{0}'.")]
    UnknownTrick(String),
}

/// Shown by `help`.
pub const HELP_TEXT: &str = "feed <food> | play [game] | sleep | wake [reason] | clean | medicine | \
scold | train [trick] | trick <trick> | pet | tick | status | quit";

fn parse_trick(text: &str) -> Result<Trick, CommandError> {
    text.parse::<Trick>()
        .map_err(|e| CommandError::UnknownTrick(e.0))
}

impl Command {
    /// Parses one line of input. Verbs are case-insensitive.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if verb.is_empty() {
            return Err(CommandError::Empty);
        }
        let arg = (!rest.is_empty()).then_some(rest);

        match verb.to_lowercase().as_str() {
            "feed" | "eat" => arg
                .map(|food| Command::Feed(food.to_string()))
                .ok_or(CommandError::MissingArgument {
                    command: "feed",
                    argument: "a food",
                }),
            "play" => Ok(Command::Play(arg.map(str::to_string))),
            "sleep" => Ok(Command::Sleep),
            "wake" => Ok(Command::Wake(arg.map(str::to_string))),
            "clean" => Ok(Command::Clean),
            "medicine" | "med" => Ok(Command::Medicine),
            "scold" => Ok(Command::Scold),
            "train" => match arg {
                Some(trick) => Ok(Command::Train(Some(parse_trick(trick)?))),
                None => Ok(Command::Train(None)),
            },
            "trick" | "perform" => match arg {
                Some(trick) => Ok(Command::Perform(parse_trick(trick)?)),
                None => Err(CommandError::MissingArgument {
                    command: "trick",
                    argument: "a trick name",
                }),
            },
            "pet" => Ok(Command::Pet),
            "tick" => Ok(Command::Tick),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
