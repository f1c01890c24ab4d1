//! # handparse-engine: Poker Hand History Parser
//!
//! Turns the text transcript of a single poker hand, as exported by a poker
//! room's client, into a typed record: header metadata, table and seat
//! layout, per-street actions, community cards, pot and winners.
//!
//! ## Core Modules
//!
//! - [`grammar`] - Per-room pattern sets (PokerStars, PKR) and token lookup tables
//! - [`extract`] - Applies one grammar entry to the text and returns its captures
//! - [`header`] - Header resolution into typed scalars (amounts, enums, UTC timestamp)
//! - [`body`] - Staged body resolution (table, seats, ante, streets, board, pot, winners)
//! - [`fields`] - Name-keyed view over resolved fields
//! - [`record`] - [`record::HandRecord`], the resolved hand with its resolution state
//! - [`cards`] - Two-character card tokens
//! - [`config`] - Parser settings from TOML and environment
//! - [`logging`] - `tracing` subscriber setup
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use handparse_engine::grammar::{Grammar, Room};
//! use handparse_engine::record::HandRecord;
//!
//! let text = "PokerStars Hand #7: Hold'em No Limit ($0.01/$0.02 USD) - 2013/10/04 17:24:39 ET
//! Table 'Aase II' 6-max Seat #2 is the button
//! Seat 2: alice ($2 in chips)
//! Seat 4: bob ($2.50 in chips)
//! *** HOLE CARDS ***
//! Dealt to alice [Ah Kd]
//! bob: folds
//! alice collected $0.02 from pot
//! *** SUMMARY ***
//! Total pot $0.02 | Rake $0
//! ";
//!
//! let hand = HandRecord::new(text, Grammar::for_room(Room::Stars)).unwrap();
//! let fields = hand.fields();
//! assert_eq!(fields.players.as_ref().map(Vec::len), Some(6));
//! assert_eq!(fields.button.as_deref(), Some("alice"));
//! assert_eq!(fields.hero_seat, Some(2));
//! ```
//!
//! ## Resolution Order
//!
//! The header must resolve before the body. Body stages run in a fixed
//! order because later stages read earlier results; see [`body`].

pub mod body;
pub mod cards;
pub mod config;
pub mod errors;
pub mod extract;
pub mod fields;
pub mod grammar;
pub mod header;
pub mod logging;
pub mod record;

pub use errors::{ConfigError, ParseError};
pub use record::{HandRecord, ResolutionState};
