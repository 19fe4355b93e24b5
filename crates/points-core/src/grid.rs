use serde::Serialize;
use tracing::debug;

use crate::config::grid::{DEFAULT_ROUNDS, MIN_ROUNDS};
use crate::error::{Error, Result};
use crate::model::ScoreModel;
use crate::round::{Round, Side};
use crate::storage::{decode_rounds, encode_rounds};

/// Ordered list of rounds, oldest first.
///
/// Never holds fewer than `MIN_ROUNDS` rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreGrid {
    rounds: Vec<Round>,
}

impl Default for ScoreGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)]
impl ScoreGrid {
    /// Fresh grid of `DEFAULT_ROUNDS` blank rounds
    pub fn new() -> Self {
        Self::with_rounds(DEFAULT_ROUNDS)
    }

    /// Blank grid of `len` rounds, raised to `MIN_ROUNDS` if shorter
    pub fn with_rounds(len: usize) -> Self {
        Self {
            rounds: vec![Round::default(); len.max(MIN_ROUNDS)],
        }
    }

    /// Wrap existing rounds, padding with blank rounds up to `MIN_ROUNDS`
    pub fn from_rounds(mut rounds: Vec<Round>) -> Self {
        if rounds.len() < MIN_ROUNDS {
            rounds.resize(MIN_ROUNDS, Round::default());
        }
        Self { rounds }
    }

    /// Restore a grid from its saved encoding
    pub fn from_encoding(data: &str) -> Result<Self> {
        decode_rounds(data).map(Self::from_rounds)
    }

    pub fn encode(&self) -> Result<String> {
        encode_rounds(&self.rounds)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn model(&self) -> ScoreModel<'_> {
        ScoreModel::new(self)
    }

    /// Enter a round score for `side`; the opponent gets the complement.
    ///
    /// Text that is not a number in `0..=ROUND_TARGET` zeroes both sides.
    pub fn set_point(&mut self, index: usize, side: Side, text: &str) -> Result<()> {
        let round = self.round_mut(index)?;
        if let Err(e) = round.enter_point(side, text) {
            debug!("Round {} {} points reset: {}", index, side, e);
        }
        Ok(())
    }

    /// Enter extra points for `side`. Non-numeric text sets zero.
    pub fn set_extra(&mut self, index: usize, side: Side, text: &str) -> Result<()> {
        let round = self.round_mut(index)?;
        if let Err(e) = round.enter_extra(side, text) {
            debug!("Round {} {} extra reset: {}", index, side, e);
        }
        Ok(())
    }

    pub fn add_round(&mut self) {
        self.rounds.push(Round::default());
    }

    pub fn can_remove_round(&self) -> bool {
        self.rounds.len() > MIN_ROUNDS
    }

    /// Drop the last round. Returns `false` (and does nothing) at `MIN_ROUNDS`.
    pub fn remove_last_round(&mut self) -> bool {
        if !self.can_remove_round() {
            return false;
        }
        self.rounds.pop();
        true
    }

    /// Zero every field, keeping the current length
    pub fn clear(&mut self) {
        self.rounds.fill(Round::default());
    }

    fn round_mut(&mut self, index: usize) -> Result<&mut Round> {
        let len = self.rounds.len();
        self.rounds
            .get_mut(index)
            .ok_or(Error::RoundOutOfRange { index, len })
    }
}

impl<'a> IntoIterator for &'a ScoreGrid {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
