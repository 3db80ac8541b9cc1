//! Command line options for the `draughts` binary.

use std::fmt;
use std::str::FromStr;

use crate::board::search::DEFAULT_DEPTH;

/// Default ply limit after which a game is called unfinished
pub const DEFAULT_MAX_PLIES: usize = 200;

pub const USAGE: &str = "\
Usage: draughts [options]

Options:
  --white <engine|random>   player for White (default: engine)
  --black <engine|random>   player for Black (default: random)
  --depth <n>               engine search depth in plies (default: 4)
  --max-plies <n>           stop the game after n plies (default: 200)
  --seed <n>                seed for the random player
  --position <notation>     start from a comma separated position
  --quiet                   only print the result
  --verbose                 print a search summary for every engine move
  --help                    show this message";

/// Kind of player to seat on one side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Engine,
    Random,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engine" => Ok(PlayerKind::Engine),
            "random" => Ok(PlayerKind::Random),
            other => Err(ConfigError::UnknownPlayer(other.to_string())),
        }
    }
}

/// Error type for command line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownOption(String),
    MissingValue(String),
    InvalidNumber { option: String, value: String },
    UnknownPlayer(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(opt) => write!(f, "Unknown option '{opt}'"),
            ConfigError::MissingValue(opt) => write!(f, "Option '{opt}' needs a value"),
            ConfigError::InvalidNumber { option, value } => {
                write!(f, "Invalid number '{value}' for option '{option}'")
            }
            ConfigError::UnknownPlayer(name) => {
                write!(f, "Unknown player '{name}', expected 'engine' or 'random'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub depth: u32,
    pub max_plies: usize,
    /// `None` seeds the random player from the OS
    pub seed: Option<u64>,
    /// Start position in board notation, `None` for the standard layout
    pub position: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub show_help: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white: PlayerKind::Engine,
            black: PlayerKind::Random,
            depth: DEFAULT_DEPTH,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
            position: None,
            quiet: false,
            verbose: false,
            show_help: false,
        }
    }
}

fn parse_number<T: FromStr>(option: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        option: option.to_string(),
        value: value.to_string(),
    })
}

impl GameConfig {
    /// Parse options, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let option = arg.as_ref();
            match option {
                "--quiet" | "-q" => config.quiet = true,
                "--verbose" | "-v" => config.verbose = true,
                "--help" | "-h" => config.show_help = true,
                "--white" | "--black" | "--depth" | "--max-plies" | "--seed" | "--position" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(option.to_string()))?;
                    let value = value.as_ref();
                    match option {
                        "--white" => config.white = value.parse()?,
                        "--black" => config.black = value.parse()?,
                        "--depth" => config.depth = parse_number(option, value)?,
                        "--max-plies" => config.max_plies = parse_number(option, value)?,
                        "--seed" => config.seed = Some(parse_number(option, value)?),
                        _ => config.position = Some(value.to_string()),
                    }
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(config)
    }
}
