//! Grid edits shared by the subcommands and interactive mode.

use anyhow::{Result, bail};
use points_core::config::grid::MIN_ROUNDS;
use points_core::{KeyValueStore, ScoreSession, Side};

use super::show::render_grid;

/// A single user edit. Round numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Point {
        round: usize,
        side: Side,
        value: String,
    },
    Extra {
        round: usize,
        side: Side,
        value: String,
    },
    AddRound,
    RemoveRound,
    Clear,
}

/// Apply `edit` and print the result followed by the updated sheet
pub fn run<S: KeyValueStore>(session: &mut ScoreSession<S>, edit: &Edit, color: bool) -> Result<()> {
    let message = apply(session, edit)?;
    println!("{}", message);
    print!("{}", render_grid(session.grid(), color));
    Ok(())
}

/// Apply `edit` and describe what happened.
pub fn apply<S: KeyValueStore>(session: &mut ScoreSession<S>, edit: &Edit) -> Result<String> {
    match edit {
        Edit::Point { round, side, value } => {
            let index = round_index(*round, session.grid().len())?;
            session.set_point(index, *side, value)?;
            Ok(describe_round(session, index))
        }
        Edit::Extra { round, side, value } => {
            let index = round_index(*round, session.grid().len())?;
            session.set_extra(index, *side, value)?;
            Ok(describe_round(session, index))
        }
        Edit::AddRound => {
            session.add_round();
            Ok(format!("Added round {}", session.grid().len()))
        }
        Edit::RemoveRound => {
            let last = session.grid().len();
            if session.remove_last_round() {
                Ok(format!("Removed round {}", last))
            } else {
                Ok(format!("Cannot remove a round: {} is the minimum", MIN_ROUNDS))
            }
        }
        Edit::Clear => {
            session.clear();
            Ok(format!("Cleared {} rounds", session.grid().len()))
        }
    }
}

/// Convert a 1-based round number into a grid index
pub fn round_index(round: usize, len: usize) -> Result<usize> {
    if round == 0 {
        bail!("Round numbers start at 1");
    }
    if round > len {
        bail!("Round {} does not exist (the sheet has {} rounds)", round, len);
    }
    Ok(round - 1)
}

fn describe_round<S: KeyValueStore>(session: &ScoreSession<S>, index: usize) -> String {
    match session.grid().round(index) {
        Some(round) => format!(
            "Round {}: team1 {} (+{})  team2 {} (+{})",
            index + 1,
            round.team1_points(),
            round.team1_extra(),
            round.team2_points(),
            round.team2_extra()
        ),
        None => format!("Round {}", index + 1),
    }
}
