//! Slash-command parsing and suggestions
//!
//! The command surface is a fixed dispatch table: each verb carries its own
//! arity validation, and parsing never touches the network - a malformed line
//! is rejected locally before any request is built.

use thiserror::Error;

/// The recognized command verbs, in help-card order.
pub const COMMANDS: &[&str] = &["/get-pokemon-data", "/compare", "/strategy", "/team"];

/// Message shown for any unrecognized verb or wrong arity.
pub const INVALID_COMMAND_MSG: &str = "Invalid command or arguments.";

/// A validated slash-command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/get-pokemon-data <name>` - one Pokémon's description
    GetPokemonData { name: String },
    /// `/compare <name1> <name2>` - side-by-side comparison
    Compare { first: String, second: String },
    /// `/strategy <query...>` - free-form strategy question
    Strategy { query: String },
    /// `/team <query...>` - free-form team-building question
    Team { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", INVALID_COMMAND_MSG)]
    Invalid,
}

impl Command {
    /// Parse a raw input line into a command.
    ///
    /// Tokens are split on runs of whitespace; free-form queries are re-joined
    /// with single spaces. Empty input, unknown verbs, and wrong arities all
    /// come back as [`CommandError::Invalid`].
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut tokens = input.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::Invalid)?;
        let args: Vec<&str> = tokens.collect();

        match verb {
            "/get-pokemon-data" if args.len() == 1 => Ok(Command::GetPokemonData {
                name: args[0].to_string(),
            }),
            "/compare" if args.len() == 2 => Ok(Command::Compare {
                first: args[0].to_string(),
                second: args[1].to_string(),
            }),
            "/strategy" if !args.is_empty() => Ok(Command::Strategy {
                query: args.join(" "),
            }),
            "/team" if !args.is_empty() => Ok(Command::Team {
                query: args.join(" "),
            }),
            _ => Err(CommandError::Invalid),
        }
    }

    /// The verb this command was parsed from.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::GetPokemonData { .. } => COMMANDS[0],
            Command::Compare { .. } => COMMANDS[1],
            Command::Strategy { .. } => COMMANDS[2],
            Command::Team { .. } => COMMANDS[3],
        }
    }
}

/// Verbs the partial input is a prefix of.
///
/// Suggestions only appear while the verb itself is being typed: the input
/// must start with `/`, be longer than the bare slash, and contain no space.
pub fn suggestions(input: &str) -> Vec<&'static str> {
    if !input.starts_with('/') || input.len() <= 1 || input.contains(' ') {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .copied()
        .filter(|c| c.starts_with(input))
        .collect()
}
