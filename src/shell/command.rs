//! Shell Commands
//!
//! Parses input lines into store commands.

use thiserror::Error;

// == Command Error ==
/// Reasons a line could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("wrong number of arguments for '{0}'")]
    WrongArity(&'static str),

    #[error("invalid TTL '{0}': expected an integer number of seconds")]
    InvalidTtl(String),
}

// == Command ==
/// A single shell instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    SetEx { key: String, ttl_seconds: i64, value: String },
    Get { key: String },
    Exists { key: String },
    Del { key: String },
    Ttl { key: String },
    Clear,
    Count,
    Active,
    Stats,
    Help,
    Quit,
}

/// Parses one input line.
///
/// The verb is case-insensitive. For `SET` and `SETEX` the value is the rest
/// of the line, with runs of whitespace collapsed to single spaces.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or(CommandError::Empty)?;
    let args: Vec<&str> = parts.collect();

    let command = match verb.to_ascii_uppercase().as_str() {
        "SET" => match args.as_slice() {
            [key, value @ ..] if !value.is_empty() => Command::Set {
                key: key.to_string(),
                value: value.join(" "),
            },
            _ => return Err(CommandError::WrongArity("SET")),
        },
        "SETEX" => match args.as_slice() {
            [key, ttl, value @ ..] if !value.is_empty() => Command::SetEx {
                key: key.to_string(),
                ttl_seconds: ttl
                    .parse()
                    .map_err(|_| CommandError::InvalidTtl(ttl.to_string()))?,
                value: value.join(" "),
            },
            _ => return Err(CommandError::WrongArity("SETEX")),
        },
        "GET" => Command::Get {
            key: single_key(&args, "GET")?,
        },
        "EXISTS" => Command::Exists {
            key: single_key(&args, "EXISTS")?,
        },
        "DEL" => Command::Del {
            key: single_key(&args, "DEL")?,
        },
        "TTL" => Command::Ttl {
            key: single_key(&args, "TTL")?,
        },
        "CLEAR" => no_args(&args, "CLEAR", Command::Clear)?,
        "COUNT" => no_args(&args, "COUNT", Command::Count)?,
        "ACTIVE" => no_args(&args, "ACTIVE", Command::Active)?,
        "STATS" => no_args(&args, "STATS", Command::Stats)?,
        "HELP" => Command::Help,
        "QUIT" | "EXIT" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    Ok(command)
}

fn single_key(args: &[&str], name: &'static str) -> Result<String, CommandError> {
    match args {
        [key] => Ok(key.to_string()),
        _ => Err(CommandError::WrongArity(name)),
    }
}

fn no_args(args: &[&str], name: &'static str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::WrongArity(name))
    }
}
