use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::body::resolve_body;
use crate::config::ParserConfig;
use crate::errors::ParseError;
use crate::fields::{Field, FieldName, FieldRef, HandFields};
use crate::grammar::Grammar;
use crate::header::resolve_header;

/// The raw transcript of one hand: surrounding whitespace trimmed, line
/// endings normalized to `\n`, and exactly one trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandText(String);

impl HandText {
    pub fn new(raw: &str) -> Self {
        let mut text = raw.replace("\r\n", "\n").trim().to_string();
        text.push('\n');
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How far resolution has progressed for the current field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    Unresolved,
    HeaderResolved,
    FullyResolved,
}

/// One hand history and the fields resolved from it.
///
/// Resolution is all-or-nothing per part: fields from a stage are only
/// written once the header (or the whole body) resolved without error. Any
/// write through [`HandRecord::set`], [`HandRecord::remove`] or
/// [`HandRecord::fields_mut`] drops the record back to
/// [`ResolutionState::Unresolved`]; it is not re-resolved until
/// [`HandRecord::parse`] is called again.
///
/// # Examples
///
/// ```
/// use handparse_engine::fields::{Field, FieldName};
/// use handparse_engine::grammar::{Grammar, Room};
/// use handparse_engine::record::{HandRecord, ResolutionState};
///
/// let text = "PokerStars Hand #1: Hold'em No Limit ($0.25/$0.50 USD) - 2013/10/04 17:24:39 ET\n\
///     Table 'Aase II' 2-max Seat #1 is the button\n\
///     Seat 1: alice ($50 in chips)\n\
///     Seat 2: bob ($50 in chips)\n\
///     alice: posts small blind $0.25\n\
///     bob: posts big blind $0.50\n\
///     *** HOLE CARDS ***\n\
///     Dealt to bob [9s 6d]\n\
///     alice: folds\n\
///     Uncalled bet ($0.25) returned to bob\n\
///     bob collected $0.50 from pot\n\
///     *** SUMMARY ***\n\
///     Total pot $0.50 | Rake $0\n";
///
/// let mut hand = HandRecord::new(text, Grammar::for_room(Room::Stars)).unwrap();
/// assert!(hand.is_parsed());
/// assert_eq!(hand.fields().hero_seat, Some(2));
///
/// hand.set(Field::HeroSeat(1));
/// assert_eq!(hand.state(), ResolutionState::Unresolved);
///
/// hand.parse().unwrap();
/// assert_eq!(hand.fields().hero_seat, Some(2));
/// assert!(hand.keys().contains(&FieldName::Winners));
/// ```
#[derive(Debug, Clone)]
pub struct HandRecord<'g> {
    raw: HandText,
    grammar: &'g Grammar,
    state: ResolutionState,
    fields: HandFields,
}

impl<'g> HandRecord<'g> {
    /// Builds a record and resolves it immediately.
    pub fn new(text: &str, grammar: &'g Grammar) -> Result<Self, ParseError> {
        let mut record = Self::unparsed(text, grammar);
        record.parse()?;
        Ok(record)
    }

    /// Builds a record without running any resolution.
    pub fn unparsed(text: &str, grammar: &'g Grammar) -> Self {
        Self {
            raw: HandText::new(text),
            grammar,
            state: ResolutionState::Unresolved,
            fields: HandFields::default(),
        }
    }

    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    pub fn is_header_parsed(&self) -> bool {
        self.state != ResolutionState::Unresolved
    }

    pub fn is_parsed(&self) -> bool {
        self.state == ResolutionState::FullyResolved
    }

    /// Resolves the header fields only.
    pub fn parse_header(&mut self) -> Result<(), ParseError> {
        match resolve_header(self.raw.as_str(), self.grammar) {
            Ok(header) => {
                self.fields.apply_header(header);
                self.state = ResolutionState::HeaderResolved;
                Ok(())
            }
            Err(e) => {
                warn!(room = %self.grammar.room, error = %e, "header resolution failed");
                self.state = ResolutionState::Unresolved;
                Err(e)
            }
        }
    }

    /// Resolves the whole hand, resolving the header first if that has not
    /// happened yet. A fully resolved record is left as is.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        if self.state == ResolutionState::FullyResolved {
            return Ok(());
        }
        if self.state == ResolutionState::Unresolved {
            self.parse_header()?;
        }
        let body = resolve_body(self.raw.as_str(), self.grammar)?;
        self.fields.apply_body(body);
        self.state = ResolutionState::FullyResolved;
        debug!(
            room = %self.grammar.room,
            fields = self.fields.keys().len(),
            "hand resolved"
        );
        Ok(())
    }

    pub fn fields(&self) -> &HandFields {
        &self.fields
    }

    /// Mutable access to every field. Invalidates the resolution state up
    /// front, whether or not anything is written.
    pub fn fields_mut(&mut self) -> &mut HandFields {
        self.invalidate();
        &mut self.fields
    }

    pub fn get(&self, name: FieldName) -> Option<FieldRef<'_>> {
        self.fields.get(name)
    }

    /// Lookup by field name string; unknown names and the raw text are `None`.
    pub fn get_str(&self, name: &str) -> Option<FieldRef<'_>> {
        name.parse().ok().and_then(|name| self.fields.get(name))
    }

    pub fn set(&mut self, field: Field) {
        self.invalidate();
        self.fields.set(field);
    }

    pub fn remove(&mut self, name: FieldName) -> Option<Field> {
        self.invalidate();
        self.fields.remove(name)
    }

    pub fn keys(&self) -> Vec<FieldName> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldRef<'_>)> {
        self.fields.iter()
    }

    fn invalidate(&mut self) {
        if self.state != ResolutionState::Unresolved {
            debug!(from = ?self.state, "record mutated, resolution state reset");
        }
        self.state = ResolutionState::Unresolved;
    }
}

impl HandRecord<'static> {
    /// Builds a record with the grammar and auto-parse setting from `config`.
    /// Without a configured room the grammar is detected from the header.
    pub fn from_config(text: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let grammar = match config.room {
            Some(room) => Grammar::for_room(room),
            None => Grammar::detect(text)?,
        };
        let mut record = Self::unparsed(text, grammar);
        if config.auto_parse {
            record.parse()?;
        }
        Ok(record)
    }
}

/// Records are equal when their populated fields and resolution state are;
/// the raw text is not compared.
impl PartialEq for HandRecord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.fields == other.fields
    }
}

impl Serialize for HandRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_text_is_normalized() {
        let text = HandText::new("\r\n  line one\r\nline two  \n\n");
        assert_eq!(text.as_str(), "line one\nline two\n");
    }

    #[test]
    fn unparsed_record_has_no_keys() {
        let g = Grammar::for_room(crate::grammar::Room::Stars);
        let record = HandRecord::unparsed("anything", g);
        assert!(record.is_empty());
        assert_eq!(record.state(), ResolutionState::Unresolved);
        assert_eq!(record.raw(), "anything\n");
        assert!(record.get_str("raw").is_none());
    }
}
