use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::config::score::ROUND_TARGET;

/// One of the two teams on the score sheet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    #[strum(to_string = "team1", serialize = "1")]
    Team1,
    #[strum(to_string = "team2", serialize = "2")]
    Team2,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }

    /// Human-readable label ("Team 1")
    pub fn label(self) -> &'static str {
        match self {
            Self::Team1 => "Team 1",
            Self::Team2 => "Team 2",
        }
    }
}

/// Why a typed entry was normalized to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{0} is above the points available in a round")]
    OutOfRange(u32),
}

/// Parse a non-negative counter as typed by the user.
pub fn parse_count(text: &str) -> Result<u32, EntryError> {
    text.parse::<u32>()
        .map_err(|_| EntryError::NotANumber(text.to_string()))
}

/// Parse a round score; anything above the round target is rejected.
pub fn parse_point(text: &str) -> Result<u32, EntryError> {
    let value = parse_count(text)?;
    if value > ROUND_TARGET {
        return Err(EntryError::OutOfRange(value));
    }
    Ok(value)
}

/// One round of the score sheet.
///
/// Encodes positionally as `[team1_points, team1_extra, team2_points, team2_extra]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct Round {
    team1_points: u32,
    team1_extra: u32,
    team2_points: u32,
    team2_extra: u32,
}

impl Round {
    pub fn new(team1_points: u32, team1_extra: u32, team2_points: u32, team2_extra: u32) -> Self {
        Self {
            team1_points,
            team1_extra,
            team2_points,
            team2_extra,
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team1_points,
            Side::Team2 => self.team2_points,
        }
    }

    pub fn extra(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team1_extra,
            Side::Team2 => self.team2_extra,
        }
    }

    pub fn team1_points(&self) -> u32 {
        self.team1_points
    }

    pub fn team1_extra(&self) -> u32 {
        self.team1_extra
    }

    pub fn team2_points(&self) -> u32 {
        self.team2_points
    }

    pub fn team2_extra(&self) -> u32 {
        self.team2_extra
    }

    /// Points plus extra points for one side.
    pub fn total(&self, side: Side) -> u64 {
        u64::from(self.points(side)) + u64::from(self.extra(side))
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Apply a typed point entry for `side`.
    ///
    /// A valid value `v` sets the opponent to `ROUND_TARGET - v`. Invalid text
    /// zeroes both sides; the returned error only reports why.
    pub fn enter_point(&mut self, side: Side, text: &str) -> Result<u32, EntryError> {
        match parse_point(text) {
            Ok(value) => {
                self.set_point_pair(side, value, ROUND_TARGET - value);
                Ok(value)
            }
            Err(e) => {
                self.set_point_pair(side, 0, 0);
                Err(e)
            }
        }
    }

    /// Apply a typed extra-point entry for `side`. Invalid text sets zero.
    pub fn enter_extra(&mut self, side: Side, text: &str) -> Result<u32, EntryError> {
        let parsed = parse_count(text);
        *self.extra_mut(side) = parsed.as_ref().copied().unwrap_or(0);
        parsed
    }

    fn set_point_pair(&mut self, side: Side, own: u32, opponent: u32) {
        *self.points_mut(side) = own;
        *self.points_mut(side.opponent()) = opponent;
    }

    fn points_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Team1 => &mut self.team1_points,
            Side::Team2 => &mut self.team2_points,
        }
    }

    fn extra_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Team1 => &mut self.team1_extra,
            Side::Team2 => &mut self.team2_extra,
        }
    }
}

impl From<[u32; 4]> for Round {
    fn from(fields: [u32; 4]) -> Self {
        let [team1_points, team1_extra, team2_points, team2_extra] = fields;
        Self::new(team1_points, team1_extra, team2_points, team2_extra)
    }
}

impl From<Round> for [u32; 4] {
    fn from(round: Round) -> Self {
        [
            round.team1_points,
            round.team1_extra,
            round.team2_points,
            round.team2_extra,
        ]
    }
}

/// Cell text for an entry field: zero shows as blank.
pub fn display_value(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
