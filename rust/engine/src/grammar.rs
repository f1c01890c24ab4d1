//! Per-room pattern definitions.
//!
//! A [`Grammar`] is a fixed set of named pattern slots plus the lookup tables
//! that turn header tokens into closed enumerations. The resolvers in
//! [`crate::header`] and [`crate::body`] only ever read a grammar, so a new
//! dialect is a new `Grammar` value and never new control flow.
//!
//! Patterns are line-oriented (`(?m)`). Section bodies that span several lines
//! additionally use `(?s)` and stop at the next section marker.

use std::fmt;
use std::sync::LazyLock;

use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::header::{Currency, Game, GameType, Limit, MoneyType};

/// Poker rooms with a built-in grammar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "STARS")]
    Stars,
    #[serde(rename = "PKR")]
    Pkr,
}

impl Room {
    pub fn all() -> [Room; 2] {
        [Room::Stars, Room::Pkr]
    }

    /// Accepts the short codes used in configuration (`stars`, `pkr`).
    pub fn from_code(code: &str) -> Option<Room> {
        match code.to_ascii_lowercase().as_str() {
            "stars" | "pokerstars" => Some(Room::Stars),
            "pkr" => Some(Room::Pkr),
            _ => None,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Room::Stars => write!(f, "PokerStars"),
            Room::Pkr => write!(f, "PKR"),
        }
    }
}

/// One named, labeled-capture pattern for a section of the transcript.
#[derive(Debug, Clone)]
pub struct GrammarEntry {
    name: &'static str,
    pattern: Regex,
    required: bool,
}

impl GrammarEntry {
    pub fn new(name: &'static str, pattern: &str, required: bool) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            required,
        })
    }

    fn fixed(name: &'static str, pattern: &str, required: bool) -> Self {
        Self::new(name, pattern, required).expect("built-in grammar pattern must compile")
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Capture labels declared by the pattern, in pattern order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pattern.capture_names().flatten()
    }
}

/// Token-to-enum table for one header field.
pub type Lookup<T> = &'static [(&'static str, T)];

/// Maps a raw header token through `table`; unknown tokens are a hard failure.
pub fn lookup<T: Copy>(table: Lookup<T>, kind: &'static str, token: &str) -> Result<T, ParseError> {
    table
        .iter()
        .find(|(raw, _)| *raw == token)
        .map(|(_, value)| *value)
        .ok_or_else(|| ParseError::UnknownEnumValue {
            kind,
            value: token.to_string(),
        })
}

/// Complete pattern set for one room dialect.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub room: Room,
    /// Cheap first-line test used by [`Grammar::detect`].
    pub signature: GrammarEntry,
    pub header: GrammarEntry,
    /// `chrono` format of the `date` header capture.
    pub date_format: &'static str,
    /// Zone the room writes its timestamps in.
    pub timezone: Tz,
    pub table: GrammarEntry,
    pub seat: GrammarEntry,
    pub ante: GrammarEntry,
    pub preflop: GrammarEntry,
    pub flop: GrammarEntry,
    pub turn: GrammarEntry,
    pub river: GrammarEntry,
    pub showdown: GrammarEntry,
    pub board: GrammarEntry,
    pub pot: GrammarEntry,
    /// Every entry contributes to the winner set.
    pub winners: Vec<GrammarEntry>,
    pub rooms: Lookup<Room>,
    pub game_types: Lookup<GameType>,
    pub games: Lookup<Game>,
    pub limits: Lookup<Limit>,
    pub currencies: Lookup<Currency>,
    pub money_types: Lookup<MoneyType>,
}

impl Grammar {
    pub fn for_room(room: Room) -> &'static Grammar {
        match room {
            Room::Stars => &STARS,
            Room::Pkr => &PKR,
        }
    }

    /// Picks the built-in grammar whose signature matches the first line.
    pub fn detect(text: &str) -> Result<&'static Grammar, ParseError> {
        let text = text.trim_start();
        Room::all()
            .into_iter()
            .map(Grammar::for_room)
            .find(|g| g.signature.pattern().is_match(text))
            .ok_or(ParseError::UnknownRoom)
    }
}

const STARS_HEADER: &str = r"(?mx)
    \A(?P<room>PokerStars)\ (?:Zoom\ )?Hand\ \#(?P<number>\d+):\ +
    (?:
        (?P<game_type>Tournament)\ \#(?P<tournament_ident>\d+),\x20
        [$€£]?(?P<buyin>[\d.]+)\+[$€£]?(?P<fee>[\d.]+)\ (?P<tournament_currency>[A-Z]{3})\x20
    )?
    (?P<game>[^\n(]+?)\ (?P<limit>No\ Limit|Pot\ Limit|Limit)\x20
    (?:-\ Level\ (?P<tournament_level>[IVXLCDM]+)\ )?
    \([$€£]?(?P<sb>[\d.]+)/[$€£]?(?P<bb>[\d.]+)(?:\ (?P<currency>[A-Z]{3}))?\)\x20
    -\ (?:[^\[\n]*\[)?(?P<date>\d{4}/\d{1,2}/\d{1,2}\ \d{1,2}:\d{2}:\d{2})\ ET\]?$
";

static STARS: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    room: Room::Stars,
    signature: GrammarEntry::fixed("signature", r"\APokerStars (?:Zoom )?Hand #", true),
    header: GrammarEntry::fixed("header", STARS_HEADER, true),
    date_format: "%Y/%m/%d %H:%M:%S",
    timezone: chrono_tz::America::New_York,
    table: GrammarEntry::fixed(
        "table",
        r"(?m)^Table '(?P<name>.+)' (?P<max_seats>\d+)-max Seat #(?P<button>\d+) is the button",
        true,
    ),
    seat: GrammarEntry::fixed(
        "seats",
        r"(?m)^Seat (?P<seat>\d+): (?P<name>.+?) \([$€£]?(?P<stack>[\d.]+) in chips\)",
        true,
    ),
    ante: GrammarEntry::fixed(
        "ante",
        r"(?m)^(?P<name>.+?): posts the ante [$€£]?(?P<ante>[\d.]+)",
        false,
    ),
    preflop: GrammarEntry::fixed(
        "preflop",
        r"(?ms)^Dealt to (?P<hero>[^\n]+?) \[(?P<card1>\S{2}) (?P<card2>\S{2})\]\n(?P<actions>.*?)^\*\*\*",
        true,
    ),
    flop: GrammarEntry::fixed(
        "flop",
        r"(?ms)^\*\*\* FLOP \*\*\* \[[^\]\n]*\]\n(?P<actions>.*?)(?:^\*\*\*|\z)",
        false,
    ),
    turn: GrammarEntry::fixed(
        "turn",
        r"(?ms)^\*\*\* TURN \*\*\* \[[^\]\n]*\] \[[^\]\n]*\]\n(?P<actions>.*?)(?:^\*\*\*|\z)",
        false,
    ),
    river: GrammarEntry::fixed(
        "river",
        r"(?ms)^\*\*\* RIVER \*\*\* \[[^\]\n]*\] \[[^\]\n]*\]\n(?P<actions>.*?)(?:^\*\*\*|\z)",
        false,
    ),
    showdown: GrammarEntry::fixed("showdown", r"(?m)^\*\*\* SHOW DOWN \*\*\*", false),
    board: GrammarEntry::fixed("board", r"(?m)^Board \[(?P<cards>[^\]\n]*)\]", false),
    pot: GrammarEntry::fixed(
        "pot",
        r"(?m)^Total pot [$€£]?(?P<total>[\d.]+).*\| Rake [$€£]?(?P<rake>[\d.]+)",
        true,
    ),
    winners: vec![
        GrammarEntry::fixed(
            "collected",
            r"(?m)^(?P<name>[^\n]+?) collected [$€£]?[\d.]+ from ",
            false,
        ),
        GrammarEntry::fixed(
            "showed_and_won",
            r"(?m)^Seat \d+: (?P<name>.+?)(?: \((?:button|small blind|big blind)\))* showed \[[^\]\n]*\] and won",
            false,
        ),
    ],
    rooms: &[("PokerStars", Room::Stars)],
    game_types: &[("Tournament", GameType::Tournament)],
    games: &[("Hold'em", Game::Holdem)],
    limits: &[
        ("No Limit", Limit::NoLimit),
        ("Pot Limit", Limit::PotLimit),
        ("Limit", Limit::FixedLimit),
    ],
    currencies: &[
        ("USD", Currency::Usd),
        ("EUR", Currency::Eur),
        ("GBP", Currency::Gbp),
    ],
    money_types: &[],
});

const PKR_HEADER: &str = r"(?mx)
    \AStarting\ Hand\ \#(?P<number>\d+)\n
    Start\ time\ of\ hand:\ (?P<date>\d{1,2}\ [A-Za-z]{3}\ \d{4}\ \d{1,2}:\d{2}:\d{2})\n
    Last\ Hand\ \#(?P<last_number>\d+)\n
    Table:\ [^\n]*\n
    Type:\ (?P<limit>NO\ LIMIT|POT\ LIMIT|LIMIT)\ (?P<game>[^\n]+)\n
    Money\ Type:\ (?P<money_type>[^\n]+)\n
    Blinds\ are\ now\ (?P<currency>[$€£])(?P<sb>[\d.]+)/[$€£]?(?P<bb>[\d.]+)$
";

/// Street and summary markers that close a PKR action block.
const PKR_SECTION_END: &str = r"(?:^(?:Dealing (?:flop|turn|river)|Showdown$|Summary:)|\z)";

static PKR: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    room: Room::Pkr,
    signature: GrammarEntry::fixed("signature", r"\AStarting Hand #", true),
    header: GrammarEntry::fixed("header", PKR_HEADER, true),
    date_format: "%d %b %Y %H:%M:%S",
    timezone: chrono_tz::UTC,
    table: GrammarEntry::fixed(
        "table",
        r"(?ms)^Table: (?P<name>[^\n]+?)(?: \[\d+\])?$.*?^Button is at seat (?P<button>\d+)$",
        true,
    ),
    seat: GrammarEntry::fixed(
        "seats",
        r"(?m)^(?P<name>[^\n]+?) - [$€£]?(?P<stack>[\d.]+) - seat (?P<seat>\d+)$",
        true,
    ),
    ante: GrammarEntry::fixed(
        "ante",
        r"(?m)^(?P<name>[^\n]+?) posts ante \([$€£]?(?P<ante>[\d.]+)\)",
        false,
    ),
    preflop: GrammarEntry::fixed(
        "preflop",
        &format!(
            r"(?ms)^Dealing to (?P<hero>[^\n]+?): \[(?P<card1>\S{{2}}), (?P<card2>\S{{2}})\]\n(?P<actions>.*?){PKR_SECTION_END}"
        ),
        true,
    ),
    flop: GrammarEntry::fixed(
        "flop",
        &format!(r"(?ms)^Dealing flop: \[[^\]\n]*\]\n(?P<actions>.*?){PKR_SECTION_END}"),
        false,
    ),
    turn: GrammarEntry::fixed(
        "turn",
        &format!(r"(?ms)^Dealing turn: \[[^\]\n]*\]\n(?P<actions>.*?){PKR_SECTION_END}"),
        false,
    ),
    river: GrammarEntry::fixed(
        "river",
        &format!(r"(?ms)^Dealing river: \[[^\]\n]*\]\n(?P<actions>.*?){PKR_SECTION_END}"),
        false,
    ),
    showdown: GrammarEntry::fixed("showdown", r"(?m)^Showdown$", false),
    board: GrammarEntry::fixed(
        "board",
        r"(?ms)^Dealing flop: \[(?P<flop>[^\]\n]+)\](?:.*?^Dealing turn: \[(?P<turn>[^\]\n]+)\])?(?:.*?^Dealing river: \[(?P<river>[^\]\n]+)\])?",
        false,
    ),
    pot: GrammarEntry::fixed(
        "pot",
        r"(?m)^Pot: [$€£]?(?P<total>[\d.]+) \| Rake: [$€£]?(?P<rake>[\d.]+)$",
        true,
    ),
    winners: vec![GrammarEntry::fixed(
        "wins",
        r"(?m)^(?P<name>[^\n]+?) wins [$€£]?[\d.]+",
        false,
    )],
    rooms: &[],
    game_types: &[],
    games: &[("HOLD'EM", Game::Holdem)],
    limits: &[
        ("NO LIMIT", Limit::NoLimit),
        ("POT LIMIT", Limit::PotLimit),
        ("LIMIT", Limit::FixedLimit),
    ],
    currencies: &[
        ("$", Currency::Usd),
        ("€", Currency::Eur),
        ("£", Currency::Gbp),
    ],
    money_types: &[("REAL MONEY", MoneyType::Real), ("PLAY MONEY", MoneyType::Play)],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_pattern_compiles() {
        for room in Room::all() {
            let g = Grammar::for_room(room);
            assert_eq!(g.room, room);
            assert!(g.header.labels().any(|l| l == "date"));
            assert!(!g.winners.is_empty());
        }
    }

    #[test]
    fn detects_room_from_first_line() {
        let stars = "PokerStars Hand #1: Hold'em No Limit ($0.01/$0.02 USD) - 2013/10/04 1:00:00 ET\n";
        assert_eq!(Grammar::detect(stars).unwrap().room, Room::Stars);
        let pkr = "Starting Hand #2433297728\nStart time of hand: 5 Oct 2013 01:15:45\n";
        assert_eq!(Grammar::detect(pkr).unwrap().room, Room::Pkr);
        assert_eq!(
            Grammar::detect("Full Tilt Poker Game #1").unwrap_err(),
            ParseError::UnknownRoom
        );
    }

    #[test]
    fn lookup_rejects_unknown_tokens() {
        let g = Grammar::for_room(Room::Stars);
        assert_eq!(lookup(g.games, "game", "Hold'em").unwrap(), Game::Holdem);
        let err = lookup(g.games, "game", "Razz").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownEnumValue {
                kind: "game",
                value: "Razz".into()
            }
        );
    }

    #[test]
    fn room_codes() {
        assert_eq!(Room::from_code("PKR"), Some(Room::Pkr));
        assert_eq!(Room::from_code("pokerstars"), Some(Room::Stars));
        assert_eq!(Room::from_code("ftp"), None);
    }
}
