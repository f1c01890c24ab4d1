//! Body resolution.
//!
//! [`resolve_body`] runs the stages in a fixed order because later stages
//! read what earlier ones produced: the hero's seat is looked up in the
//! player layout, and the button name in the seat list. Each stage is also
//! exposed on its own.
//!
//! Table, seats, preflop and pot are required. Ante, streets, showdown,
//! board and winners are allowed to be absent, and absence is a value
//! ([`Ante::None`], [`StreetActions::NotReached`], an empty [`Board`]),
//! never an error.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cards::{Card, CardTokenError, split_cards};
use crate::errors::ParseError;
use crate::extract::{CaptureSet, extract, extract_all, present, require};
use crate::grammar::{Grammar, GrammarEntry};
use crate::header::amount;

/// Largest table any supported room deals; bigger sizes are corrupt input.
pub const MAX_TABLE_SEATS: usize = 10;

/// A betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

/// Table declaration as written, before the seat list is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDeclaration {
    pub name: String,
    /// `None` when the room does not print the table size.
    pub max_seats: Option<usize>,
    pub button_seat: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub table_name: String,
    pub max_seats: usize,
    /// 1-indexed
    pub button_seat: usize,
}

/// One seat of the table. Unoccupied seats are kept as placeholders so the
/// layout always has `max_seats` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: usize,
    pub name: String,
    pub stack: Decimal,
    pub occupied: bool,
}

impl Player {
    pub fn empty_seat(seat: usize) -> Self {
        Self {
            seat,
            name: format!("Empty Seat {seat}"),
            stack: Decimal::ZERO,
            occupied: false,
        }
    }
}

/// Layout produced by the seats stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    pub table: TableLayout,
    pub players: Vec<Player>,
    /// Name of the player (or placeholder) on the button seat
    pub button: String,
}

/// Ante of the hand. `None` means no ante line at all, which is not the same
/// as an ante of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ante {
    None,
    Posted(Decimal),
}

/// Action lines of one street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetActions {
    /// The street's marker never appears.
    NotReached,
    /// The marker appears but no action line follows it (e.g. all-in runouts).
    NoActions,
    Actions(Vec<String>),
}

impl StreetActions {
    fn from_block(block: &str) -> Self {
        let lines: Vec<String> = block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            StreetActions::NoActions
        } else {
            StreetActions::Actions(lines)
        }
    }

    pub fn reached(&self) -> bool {
        !matches!(self, StreetActions::NotReached)
    }

    pub fn lines(&self) -> &[String] {
        match self {
            StreetActions::Actions(lines) => lines,
            _ => &[],
        }
    }
}

/// Hero identity, hole cards and preflop action block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflop {
    pub hero: String,
    pub hero_seat: usize,
    pub hole_cards: [Card; 2],
    pub actions: StreetActions,
}

/// Community cards in dealing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board(pub Vec<Card>);

impl Board {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn flop(&self) -> Option<[Card; 3]> {
        match self.0.as_slice() {
            [a, b, c, ..] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    pub fn turn(&self) -> Option<Card> {
        self.0.get(3).copied()
    }

    pub fn river(&self) -> Option<Card> {
        self.0.get(4).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub total: Decimal,
    pub rake: Decimal,
}

/// Everything below the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub table: TableLayout,
    pub players: Vec<Player>,
    pub button: String,
    pub ante: Ante,
    pub preflop: Preflop,
    pub flop_actions: StreetActions,
    pub turn_actions: StreetActions,
    pub river_actions: StreetActions,
    pub show_down: bool,
    pub board: Board,
    pub pot: Pot,
    pub winners: BTreeSet<String>,
}

/// Runs every body stage in dependency order.
///
/// The first fatal stage error stops resolution and is returned as is.
pub fn resolve_body(text: &str, grammar: &Grammar) -> Result<Body, ParseError> {
    run_stages(text, grammar)
        .inspect_err(|e| warn!(room = %grammar.room, error = %e, "body resolution failed"))
}

fn run_stages(text: &str, grammar: &Grammar) -> Result<Body, ParseError> {
    let declaration = resolve_table(text, grammar)?;
    debug!(
        stage = "table",
        table = %declaration.name,
        button_seat = declaration.button_seat,
        "stage resolved"
    );

    let seating = resolve_seats(text, grammar, &declaration)?;
    debug!(
        stage = "seats",
        max_seats = seating.table.max_seats,
        button = %seating.button,
        "stage resolved"
    );

    let ante = resolve_ante(text, grammar)?;
    debug!(stage = "ante", ante = ?ante, "stage resolved");

    let preflop = resolve_preflop(text, grammar, &seating.players)?;
    debug!(
        stage = "preflop",
        hero = %preflop.hero,
        hero_seat = preflop.hero_seat,
        "stage resolved"
    );

    let flop_actions = resolve_street(text, grammar, Street::Flop);
    let turn_actions = resolve_street(text, grammar, Street::Turn);
    let river_actions = resolve_street(text, grammar, Street::River);
    debug!(
        stage = "streets",
        flop = flop_actions.reached(),
        turn = turn_actions.reached(),
        river = river_actions.reached(),
        "stage resolved"
    );

    let show_down = resolve_showdown(text, grammar);
    let board = resolve_board(text, grammar)?;
    debug!(stage = "board", show_down, cards = board.cards().len(), "stage resolved");

    let pot = resolve_pot(text, grammar)?;
    let winners = resolve_winners(text, grammar);
    debug!(
        stage = "pot",
        total = %pot.total,
        rake = %pot.rake,
        winners = winners.len(),
        "stage resolved"
    );

    Ok(Body {
        table: seating.table,
        players: seating.players,
        button: seating.button,
        ante,
        preflop,
        flop_actions,
        turn_actions,
        river_actions,
        show_down,
        board,
        pot,
        winners,
    })
}

pub fn resolve_table(text: &str, grammar: &Grammar) -> Result<TableDeclaration, ParseError> {
    let caps = require(text, &grammar.table)?;
    Ok(TableDeclaration {
        name: caps.require("name")?.to_string(),
        max_seats: caps.get("max_seats").map(seat_number).transpose()?,
        button_seat: seat_number(caps.require("button")?)?,
    })
}

/// Builds the dense `1..=max_seats` layout, filling undeclared seats with
/// placeholders, and names the button.
///
/// # Errors
///
/// - [`ParseError::MissingRequiredSection`] when no seat line matches
/// - [`ParseError::SeatOutOfRange`] for a declared seat or a button seat
///   outside `1..=max_seats`, or a table larger than [`MAX_TABLE_SEATS`]
pub fn resolve_seats(
    text: &str,
    grammar: &Grammar,
    declaration: &TableDeclaration,
) -> Result<Seating, ParseError> {
    let declared = extract_all(text, &grammar.seat)
        .iter()
        .map(|caps| {
            Ok(Player {
                seat: seat_number(caps.require("seat")?)?,
                name: caps.require("name")?.to_string(),
                stack: amount("stack", caps.require("stack")?)?,
                occupied: true,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    if declared.is_empty() {
        return Err(ParseError::MissingRequiredSection {
            section: grammar.seat.name(),
        });
    }

    // Rooms that do not print the table size get the smallest table that
    // holds every declared seat and the button.
    let max_seats = declaration.max_seats.unwrap_or_else(|| {
        declared
            .iter()
            .map(|p| p.seat)
            .chain([declaration.button_seat])
            .max()
            .unwrap_or(declaration.button_seat)
    });

    if max_seats > MAX_TABLE_SEATS {
        return Err(ParseError::SeatOutOfRange {
            seat: max_seats,
            max_seats: MAX_TABLE_SEATS,
        });
    }

    let mut players: Vec<Player> = (1..=max_seats).map(Player::empty_seat).collect();
    for player in declared {
        if player.seat == 0 || player.seat > max_seats {
            return Err(ParseError::SeatOutOfRange {
                seat: player.seat,
                max_seats,
            });
        }
        let index = player.seat - 1;
        players[index] = player;
    }

    let button = declaration
        .button_seat
        .checked_sub(1)
        .and_then(|index| players.get(index))
        .map(|p| p.name.clone())
        .ok_or(ParseError::SeatOutOfRange {
            seat: declaration.button_seat,
            max_seats,
        })?;

    Ok(Seating {
        table: TableLayout {
            table_name: declaration.name.clone(),
            max_seats,
            button_seat: declaration.button_seat,
        },
        players,
        button,
    })
}

pub fn resolve_ante(text: &str, grammar: &Grammar) -> Result<Ante, ParseError> {
    match extract(text, &grammar.ante) {
        Some(caps) => Ok(Ante::Posted(amount("ante", caps.require("ante")?)?)),
        None => {
            trace!(section = "ante", "absent");
            Ok(Ante::None)
        }
    }
}

/// Finds the hero through the "dealt to" marker and looks the hero up in the
/// already resolved `players`.
///
/// # Errors
///
/// - [`ParseError::HeroNotFound`] when the marker is missing
/// - [`ParseError::HeroSeatUnresolved`] when no declared seat carries the
///   hero's name
pub fn resolve_preflop(
    text: &str,
    grammar: &Grammar,
    players: &[Player],
) -> Result<Preflop, ParseError> {
    let caps = extract(text, &grammar.preflop).ok_or(ParseError::HeroNotFound)?;
    let hero = caps.require("hero")?.to_string();
    let hole_cards = [hole_card(&caps, "card1")?, hole_card(&caps, "card2")?];
    let hero_seat = players
        .iter()
        .find(|p| p.occupied && p.name == hero)
        .map(|p| p.seat)
        .ok_or_else(|| ParseError::HeroSeatUnresolved { hero: hero.clone() })?;
    Ok(Preflop {
        hero,
        hero_seat,
        hole_cards,
        actions: StreetActions::from_block(caps.get("actions").unwrap_or("")),
    })
}

fn hole_card(caps: &CaptureSet<'_>, label: &str) -> Result<Card, ParseError> {
    caps.require(label)?
        .parse()
        .map_err(|e: CardTokenError| ParseError::InvalidCard {
            section: caps.section(),
            value: e.0,
        })
}

/// Action block of a post-flop street. Preflop goes through
/// [`resolve_preflop`] because it also identifies the hero.
pub fn resolve_street(text: &str, grammar: &Grammar, street: Street) -> StreetActions {
    let entry: &GrammarEntry = match street {
        Street::Preflop => &grammar.preflop,
        Street::Flop => &grammar.flop,
        Street::Turn => &grammar.turn,
        Street::River => &grammar.river,
    };
    match extract(text, entry) {
        Some(caps) => StreetActions::from_block(caps.get("actions").unwrap_or("")),
        None => StreetActions::NotReached,
    }
}

pub fn resolve_showdown(text: &str, grammar: &Grammar) -> bool {
    present(text, &grammar.showdown)
}

/// Community cards from whichever board captures the grammar defines
/// (`cards` for a single board line, `flop`/`turn`/`river` for per-street
/// dealing lines), concatenated in that order.
///
/// # Errors
///
/// [`ParseError::InvalidCard`] when a board token is not a two-character card.
/// A malformed board is never shortened.
pub fn resolve_board(text: &str, grammar: &Grammar) -> Result<Board, ParseError> {
    let Some(caps) = extract(text, &grammar.board) else {
        trace!(section = "board", "absent");
        return Ok(Board::default());
    };
    let mut cards = Vec::new();
    for list in ["cards", "flop", "turn", "river"]
        .into_iter()
        .filter_map(|label| caps.get(label))
    {
        cards.extend(split_cards(list).map_err(|e| ParseError::InvalidCard {
            section: caps.section(),
            value: e.0,
        })?);
    }
    Ok(Board(cards))
}

pub fn resolve_pot(text: &str, grammar: &Grammar) -> Result<Pot, ParseError> {
    let caps = require(text, &grammar.pot)?;
    Ok(Pot {
        total: amount("total_pot", caps.require("total")?)?,
        rake: amount("rake", caps.require("rake")?)?,
    })
}

/// Union of every winner pattern's matches. A player reported by more than
/// one pattern appears once.
pub fn resolve_winners(text: &str, grammar: &Grammar) -> BTreeSet<String> {
    grammar
        .winners
        .iter()
        .flat_map(|entry| extract_all(text, entry))
        .filter_map(|caps| caps.get("name").map(|n| n.trim().to_string()))
        .collect()
}

fn seat_number(raw: &str) -> Result<usize, ParseError> {
    raw.parse().map_err(|_| ParseError::InvalidAmount {
        field: "seat",
        value: raw.to_string(),
    })
}
