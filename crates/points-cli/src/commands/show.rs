//! Score sheet rendering.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use points_core::round::display_value;
use points_core::{KeyValueStore, ScoreGrid, ScoreSession, Side, format_json};

/// Print the score sheet, or its JSON form
pub fn run<S: KeyValueStore>(session: &ScoreSession<S>, json: bool, color: bool) -> Result<()> {
    if json {
        println!("{}", format_json(session.grid())?);
    } else {
        print!("{}", render_grid(session.grid(), color));
    }
    Ok(())
}

/// Table of rounds with blank cells for zero, then totals and the leader.
pub fn render_grid(grid: &ScoreGrid, color: bool) -> String {
    let mut output = String::new();

    let header = format!(
        "{:>5}  {:>6} {:>5}  {:>6} {:>5}",
        "Round", "Team 1", "+", "Team 2", "+"
    );
    let border = "─".repeat(header.chars().count());
    let _ = writeln!(output, "{}", header);
    let _ = writeln!(output, "{}", paint_dim(&border, color));

    for (i, round) in grid.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:>5}  {:>6} {:>5}  {:>6} {:>5}",
            i + 1,
            display_value(round.team1_points()),
            display_value(round.team1_extra()),
            display_value(round.team2_points()),
            display_value(round.team2_extra())
        );
    }

    let model = grid.model();
    let leader = model.leader();
    let total = |side: Side| {
        let cell = format!("{:>12}", model.total(side));
        if color && leader == Some(side) {
            cell.green().bold().to_string()
        } else {
            cell
        }
    };

    let _ = writeln!(output, "{}", paint_dim(&border, color));
    let _ = writeln!(
        output,
        "{:>5} {} {}",
        "Total",
        total(Side::Team1),
        total(Side::Team2)
    );

    let totals = model.totals();
    let status = match leader {
        Some(side) => format!(
            "{} leads by {}",
            side.label(),
            totals.get(side) - totals.get(side.opponent())
        ),
        None => "Tied".to_string(),
    };
    let _ = writeln!(output, "{}", status);

    output
}

fn paint_dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
