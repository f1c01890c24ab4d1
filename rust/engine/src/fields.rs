//! Name-keyed view over a resolved hand.
//!
//! [`HandFields`] holds one `Option` per field: `None` means "not populated
//! by a resolution", which is different from a populated field whose value
//! is itself an absence sentinel (`ante: Some(Ante::None)`,
//! `flop: Some(None)`). The name enum, owned-value enum and borrowed-value
//! enum are generated from the same list so they cannot drift apart.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::body::{Ante, Body, Player, StreetActions};
use crate::cards::Card;
use crate::grammar::Room;
use crate::header::{Currency, Game, GameType, Header, Limit, MoneyType};

macro_rules! hand_fields {
    ($( $field:ident => $variant:ident : $ty:ty ),* $(,)?) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct HandFields {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FieldName {
            $( $variant, )*
        }

        /// An owned field value, used to overwrite one field.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Field {
            $( $variant($ty), )*
        }

        /// A borrowed field value, as returned by lookups.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum FieldRef<'a> {
            $( $variant(&'a $ty), )*
        }

        impl FieldName {
            pub const ALL: &'static [FieldName] = &[ $( FieldName::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( FieldName::$variant => stringify!($field), )*
                }
            }
        }

        impl FromStr for FieldName {
            type Err = UnknownField;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($field) => Ok(FieldName::$variant), )*
                    _ => Err(UnknownField(s.to_string())),
                }
            }
        }

        impl Field {
            pub fn name(&self) -> FieldName {
                match self {
                    $( Field::$variant(_) => FieldName::$variant, )*
                }
            }
        }

        impl HandFields {
            pub fn get(&self, name: FieldName) -> Option<FieldRef<'_>> {
                match name {
                    $( FieldName::$variant => self.$field.as_ref().map(FieldRef::$variant), )*
                }
            }

            pub fn set(&mut self, field: Field) {
                match field {
                    $( Field::$variant(value) => self.$field = Some(value), )*
                }
            }

            /// Clears the field and hands back what it held.
            pub fn remove(&mut self, name: FieldName) -> Option<Field> {
                match name {
                    $( FieldName::$variant => self.$field.take().map(Field::$variant), )*
                }
            }
        }
    };
}

hand_fields! {
    room => Room: Room,
    hand_number => HandNumber: String,
    game_type => GameType: GameType,
    tournament_ident => TournamentIdent: Option<String>,
    tournament_level => TournamentLevel: Option<String>,
    buyin => Buyin: Option<Decimal>,
    fee => Fee: Option<Decimal>,
    currency => Currency: Currency,
    money_type => MoneyType: MoneyType,
    game => Game: Game,
    limit => Limit: Limit,
    small_blind => SmallBlind: Decimal,
    big_blind => BigBlind: Decimal,
    timestamp => Timestamp: DateTime<Utc>,
    last_hand_number => LastHandNumber: Option<String>,
    table_name => TableName: String,
    max_seats => MaxSeats: usize,
    button_seat => ButtonSeat: usize,
    players => Players: Vec<Player>,
    button => Button: String,
    ante => Ante: Ante,
    hero => Hero: String,
    hero_seat => HeroSeat: usize,
    hero_hole_cards => HeroHoleCards: [Card; 2],
    preflop_actions => PreflopActions: StreetActions,
    flop_actions => FlopActions: StreetActions,
    turn_actions => TurnActions: StreetActions,
    river_actions => RiverActions: StreetActions,
    show_down => ShowDown: bool,
    board => Board: Vec<Card>,
    flop => Flop: Option<[Card; 3]>,
    turn => Turn: Option<Card>,
    river => River: Option<Card>,
    total_pot => TotalPot: Decimal,
    rake => Rake: Decimal,
    winners => Winners: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand field {0:?}")]
pub struct UnknownField(pub String);

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HandFields {
    /// Names of populated fields, in declaration order.
    pub fn keys(&self) -> Vec<FieldName> {
        FieldName::ALL
            .iter()
            .copied()
            .filter(|name| self.get(*name).is_some())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldRef<'_>)> {
        FieldName::ALL
            .iter()
            .filter_map(|name| self.get(*name).map(|value| (*name, value)))
    }

    pub(crate) fn apply_header(&mut self, header: Header) {
        self.room = Some(header.room);
        self.hand_number = Some(header.hand_number);
        self.game_type = Some(header.game_type);
        self.tournament_ident = Some(header.tournament_ident);
        self.tournament_level = Some(header.tournament_level);
        self.buyin = Some(header.buyin);
        self.fee = Some(header.fee);
        self.currency = Some(header.currency);
        self.money_type = Some(header.money_type);
        self.game = Some(header.game);
        self.limit = Some(header.limit);
        self.small_blind = Some(header.small_blind);
        self.big_blind = Some(header.big_blind);
        self.timestamp = Some(header.timestamp);
        self.last_hand_number = Some(header.last_hand_number);
    }

    pub(crate) fn apply_body(&mut self, body: Body) {
        self.flop = Some(body.board.flop());
        self.turn = Some(body.board.turn());
        self.river = Some(body.board.river());
        self.board = Some(body.board.0);
        self.table_name = Some(body.table.table_name);
        self.max_seats = Some(body.table.max_seats);
        self.button_seat = Some(body.table.button_seat);
        self.players = Some(body.players);
        self.button = Some(body.button);
        self.ante = Some(body.ante);
        self.hero = Some(body.preflop.hero);
        self.hero_seat = Some(body.preflop.hero_seat);
        self.hero_hole_cards = Some(body.preflop.hole_cards);
        self.preflop_actions = Some(body.preflop.actions);
        self.flop_actions = Some(body.flop_actions);
        self.turn_actions = Some(body.turn_actions);
        self.river_actions = Some(body.river_actions);
        self.show_down = Some(body.show_down);
        self.total_pot = Some(body.pot.total);
        self.rake = Some(body.pot.rake);
        self.winners = Some(body.winners);
    }
}
