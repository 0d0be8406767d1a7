//! Chat command parsing
//!
//! A submission whose raw text starts with [`COMMAND_PREFIX`] is a command.
//! The remainder is sanitized, split on the first space into a case-folded
//! command name and an optional argument string, and turned into a
//! [`ChatCommand`]. Anything else is a plain message.

use std::fmt;

use crate::sanitize::sanitize;
use crate::value_objects::{ChannelId, IdParseError};

/// Sentinel character marking a command
pub const COMMAND_PREFIX: char = '$';

/// Static help text returned by `$help`
pub const HELP_TEXT: &str = "Available commands:\n\
    $help - shows this help message\n\
    $swapchannel <id> - swap to the channel with the provided id\n\
    $whisper <user> <message> - send a whisper to another user\n\
    $account - go to your account page\n\
    $silent <message> - send a silent message\n\
    $setslowmode <duration> - set the current channel's slowmode";

/// A classified chat submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Sanitized message text (may be empty)
    Plain(String),
    /// A recognized command with parsed arguments
    Command(ChatCommand),
}

/// Recognized chat commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Show the help text
    Help,

    /// Switch the caller's active channel
    SwapChannel(ChannelId),

    /// Private message to another user
    Whisper { target: String, message: String },

    /// Go to the account page
    Account,

    /// Post to the active channel without showing it to others
    Silent(String),

    /// Set the active channel's slowmode in seconds
    SetSlowmode(u32),
}

impl ChatCommand {
    /// Command name without the prefix
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::SwapChannel(_) => "swapchannel",
            Self::Whisper { .. } => "whisper",
            Self::Account => "account",
            Self::Silent(_) => "silent",
            Self::SetSlowmode(_) => "setslowmode",
        }
    }
}

impl fmt::Display for ChatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_PREFIX}{}", self.name())
    }
}

/// Errors produced while parsing a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command or missing arguments.")]
    Unknown { name: String },

    #[error("Unknown command or missing arguments.")]
    MissingArguments { command: &'static str },

    #[error("Invalid channel id for ${command}: {source}")]
    InvalidChannelId {
        command: &'static str,
        #[source]
        source: IdParseError,
    },

    #[error("Invalid duration for ${command}: expected whole seconds, got {value:?}")]
    InvalidDuration { command: &'static str, value: String },
}

/// Classify a raw submission as a plain message or a command.
///
/// The prefix is checked on the raw text because the sanitizer strips it.
pub fn parse_input(raw: &str) -> Result<ChatInput, CommandError> {
    match raw.strip_prefix(COMMAND_PREFIX) {
        Some(body) => parse_command(&sanitize(body)).map(ChatInput::Command),
        None => Ok(ChatInput::Plain(sanitize(raw))),
    }
}

fn parse_command(body: &str) -> Result<ChatCommand, CommandError> {
    let (name, rest) = match body.split_once(' ') {
        Some((name, rest)) => (name.to_lowercase(), Some(rest)),
        None => (body.to_lowercase(), None),
    };
    let rest = rest.map(str::trim_start).filter(|r| !r.is_empty());

    match name.as_str() {
        "help" => Ok(ChatCommand::Help),
        "account" => Ok(ChatCommand::Account),
        "swapchannel" => {
            let arg = required(rest, "swapchannel")?;
            ChannelId::parse(arg)
                .map(ChatCommand::SwapChannel)
                .map_err(|source| CommandError::InvalidChannelId {
                    command: "swapchannel",
                    source,
                })
        }
        "whisper" => parse_whisper(required(rest, "whisper")?),
        "silent" => Ok(ChatCommand::Silent(required(rest, "silent")?.to_owned())),
        "setslowmode" => {
            let arg = required(rest, "setslowmode")?.trim();
            arg.parse::<u32>()
                .map(ChatCommand::SetSlowmode)
                .map_err(|_| CommandError::InvalidDuration {
                    command: "setslowmode",
                    value: arg.to_owned(),
                })
        }
        _ => Err(CommandError::Unknown { name }),
    }
}

fn required<'a>(rest: Option<&'a str>, command: &'static str) -> Result<&'a str, CommandError> {
    rest.ok_or(CommandError::MissingArguments { command })
}

/// `<user> <message>`: the target is everything up to the first space
fn parse_whisper(args: &str) -> Result<ChatCommand, CommandError> {
    let missing = CommandError::MissingArguments { command: "whisper" };
    let (target, message) = args.split_once(' ').ok_or_else(|| missing.clone())?;
    let message = message.trim_start();
    if target.is_empty() || message.is_empty() {
        return Err(missing);
    }
    Ok(ChatCommand::Whisper {
        target: target.to_owned(),
        message: message.to_owned(),
    })
}
