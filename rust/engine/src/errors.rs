use thiserror::Error;

use crate::grammar::Room;

/// Fatal failures while resolving a single hand.
///
/// Every variant aborts resolution of the hand being parsed. Optional
/// sections that are simply absent (ante, streets, board, showdown, winners)
/// never produce one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed {room} header: {detail}")]
    MalformedHeader { room: Room, detail: String },
    #[error("Unknown {kind} value: {value:?}")]
    UnknownEnumValue { kind: &'static str, value: String },
    #[error("Missing required section: {section}")]
    MissingRequiredSection { section: &'static str },
    #[error("Seat {seat} is out of range for a {max_seats}-max table")]
    SeatOutOfRange { seat: usize, max_seats: usize },
    #[error("No hero marker found")]
    HeroNotFound,
    #[error("Hero {hero:?} has no seat declaration")]
    HeroSeatUnresolved { hero: String },
    #[error("Invalid amount for {field}: {value:?}")]
    InvalidAmount { field: &'static str, value: String },
    #[error("Invalid card token in {section}: {value:?}")]
    InvalidCard { section: &'static str, value: String },
    #[error("No known room matches this hand history")]
    UnknownRoom,
}

/// Failures while loading [`crate::config::ParserConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
