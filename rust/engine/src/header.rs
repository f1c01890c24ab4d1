//! Header resolution: the first logical line (or block) of a transcript,
//! coerced into typed scalars.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ParseError;
use crate::extract::{CaptureSet, extract};
use crate::grammar::{Grammar, Room, lookup};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "TOUR")]
    Tournament,
}

/// Supported game variants. Only two-hole-card games fit the preflop
/// grammar, so anything else is rejected while resolving the header.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Game {
    #[serde(rename = "HOLDEM")]
    Holdem,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Limit {
    #[serde(rename = "NL")]
    NoLimit,
    #[serde(rename = "PL")]
    PotLimit,
    #[serde(rename = "FL")]
    FixedLimit,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoneyType {
    /// Real money
    #[serde(rename = "R")]
    Real,
    /// Play money
    #[serde(rename = "P")]
    Play,
}

/// Typed header of one hand.
///
/// The tournament fields (`tournament_ident`, `tournament_level`, `buyin`,
/// `fee`) are `Some` exactly when `game_type` is [`GameType::Tournament`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub room: Room,
    pub hand_number: String,
    pub game_type: GameType,
    pub tournament_ident: Option<String>,
    pub tournament_level: Option<String>,
    pub buyin: Option<Decimal>,
    /// Tournament entry fee (the room's rake on the buy-in)
    pub fee: Option<Decimal>,
    pub currency: Currency,
    pub money_type: MoneyType,
    pub game: Game,
    pub limit: Limit,
    pub small_blind: Decimal,
    pub big_blind: Decimal,
    /// Start of the hand, normalized to UTC
    pub timestamp: DateTime<Utc>,
    /// Number of the previous hand at the same table, when the room prints it
    pub last_hand_number: Option<String>,
}

/// Resolves the header of `text` with `grammar`.
///
/// # Errors
///
/// - [`ParseError::MalformedHeader`] when the anchored header pattern does not
///   match, or its date is not a valid local time
/// - [`ParseError::UnknownEnumValue`] for a game, limit, room, currency or
///   money token missing from the grammar's lookup tables
/// - [`ParseError::InvalidAmount`] for a blind or buy-in that is not an exact
///   decimal
pub fn resolve_header(text: &str, grammar: &Grammar) -> Result<Header, ParseError> {
    let caps = extract(text, &grammar.header).ok_or_else(|| ParseError::MalformedHeader {
        room: grammar.room,
        detail: format!("first line does not match: {:?}", text.lines().next().unwrap_or("")),
    })?;

    let room = match caps.get("room") {
        Some(token) => lookup(grammar.rooms, "room", token)?,
        None => grammar.room,
    };
    let game_type = match caps.get("game_type") {
        Some(token) => lookup(grammar.game_types, "game type", token)?,
        None => GameType::Cash,
    };
    let money_type = match caps.get("money_type") {
        Some(token) => lookup(grammar.money_types, "money type", token.trim())?,
        None => MoneyType::Real,
    };
    let currency_token = caps
        .get("currency")
        .or_else(|| caps.get("tournament_currency"))
        .ok_or_else(|| ParseError::MalformedHeader {
            room: grammar.room,
            detail: "no currency".to_string(),
        })?;

    let (tournament_ident, tournament_level, buyin, fee) = match game_type {
        GameType::Cash => (None, None, None, None),
        GameType::Tournament => {
            let ident = caps.get("tournament_ident").ok_or_else(|| ParseError::MalformedHeader {
                room: grammar.room,
                detail: "tournament without an identifier".to_string(),
            })?;
            (
                Some(ident.to_string()),
                caps.get("tournament_level").map(str::to_string),
                optional_amount(&caps, "buyin")?,
                optional_amount(&caps, "fee")?,
            )
        }
    };

    let header = Header {
        room,
        hand_number: caps.require("number")?.to_string(),
        game_type,
        tournament_ident,
        tournament_level,
        buyin,
        fee,
        currency: lookup(grammar.currencies, "currency", currency_token)?,
        money_type,
        game: lookup(grammar.games, "game", caps.require("game")?.trim())?,
        limit: lookup(grammar.limits, "limit", caps.require("limit")?)?,
        small_blind: amount("small_blind", caps.require("sb")?)?,
        big_blind: amount("big_blind", caps.require("bb")?)?,
        timestamp: parse_timestamp(caps.require("date")?, grammar)?,
        last_hand_number: caps.get("last_number").map(str::to_string),
    };
    debug!(
        room = %header.room,
        hand_number = %header.hand_number,
        game_type = ?header.game_type,
        "header resolved"
    );
    Ok(header)
}

/// Exact decimal from a captured amount; never goes through floating point.
pub fn amount(field: &'static str, raw: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(raw).map_err(|_| ParseError::InvalidAmount {
        field,
        value: raw.to_string(),
    })
}

fn optional_amount(
    caps: &CaptureSet<'_>,
    label: &'static str,
) -> Result<Option<Decimal>, ParseError> {
    caps.get(label).map(|raw| amount(label, raw)).transpose()
}

/// Reads `raw` as a wall-clock time in the grammar's zone and converts it to
/// UTC. An ambiguous local time (DST fall-back) takes the earlier instant.
pub fn parse_timestamp(raw: &str, grammar: &Grammar) -> Result<DateTime<Utc>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(raw, grammar.date_format).map_err(|e| {
        ParseError::MalformedHeader {
            room: grammar.room,
            detail: format!("bad date {raw:?}: {e}"),
        }
    })?;
    grammar
        .timezone
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ParseError::MalformedHeader {
            room: grammar.room,
            detail: format!("{raw} does not exist in {}", grammar.timezone),
        })
}
