use std::cmp::Ordering;

use serde::Serialize;

use crate::grid::ScoreGrid;
use crate::round::{Round, Side};

/// Running totals for both teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub team1: u64,
    pub team2: u64,
}

impl Totals {
    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::Team1 => self.team1,
            Side::Team2 => self.team2,
        }
    }
}

/// Read-only view over a grid. Totals are recomputed on every call.
#[derive(Debug, Clone, Copy)]
pub struct ScoreModel<'a> {
    rounds: &'a [Round],
}

impl<'a> ScoreModel<'a> {
    pub fn new(grid: &'a ScoreGrid) -> Self {
        Self {
            rounds: grid.rounds(),
        }
    }

    /// Sum of points and extra points for `side` over all rounds
    pub fn total(&self, side: Side) -> u64 {
        self.rounds.iter().map(|round| round.total(side)).sum()
    }

    pub fn team1_total(&self) -> u64 {
        self.total(Side::Team1)
    }

    pub fn team2_total(&self) -> u64 {
        self.total(Side::Team2)
    }

    pub fn totals(&self) -> Totals {
        Totals {
            team1: self.team1_total(),
            team2: self.team2_total(),
        }
    }

    /// Side currently ahead, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.team1_total().cmp(&self.team2_total()) {
            Ordering::Greater => Some(Side::Team1),
            Ordering::Less => Some(Side::Team2),
            Ordering::Equal => None,
        }
    }
}
