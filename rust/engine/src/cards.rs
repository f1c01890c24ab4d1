use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single playing card as written in a hand history: one rank character
/// followed by one suit character (`"Ac"`, `"Td"`, `"9s"`).
///
/// Rank and suit are kept as the raw characters from the transcript. This
/// layer does not check that they name a real card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    /// Rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A` in well-formed input)
    pub rank: char,
    /// Suit character (`c`, `d`, `h`, `s` in well-formed input)
    pub suit: char,
}

/// Returned when a token is not exactly two characters long.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("card token must be two characters, got {0:?}")]
pub struct CardTokenError(pub String);

impl FromStr for Card {
    type Err = CardTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Card { rank, suit }),
            _ => Err(CardTokenError(s.to_string())),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl TryFrom<String> for Card {
    type Error = CardTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Splits a bracketed card list body (`"7d 3c Jd"` or `"7d, 3c, Jd"`) into
/// cards, in order. The first token that is not a card fails the whole list.
pub fn split_cards(list: &str) -> Result<Vec<Card>, CardTokenError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>())
        .collect()
}
