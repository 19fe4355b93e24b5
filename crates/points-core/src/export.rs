//! Snapshot export of the score sheet.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde_json::json;

use crate::error::Result;
use crate::grid::ScoreGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }

    pub fn render(&self, grid: &ScoreGrid) -> Result<String> {
        match self {
            Self::Tsv => Ok(format_tsv(grid)),
            Self::Json => format_json(grid),
        }
    }
}

pub fn format_tsv_header() -> String {
    ["round", "team1", "team1_extra", "team2", "team2_extra"].join("\t")
}

/// One row per round (numbered from 1) followed by a `total` row.
pub fn format_tsv(grid: &ScoreGrid) -> String {
    let mut output = format_tsv_header();
    output.push('\n');

    for (i, round) in grid.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}",
            i + 1,
            round.team1_points(),
            round.team1_extra(),
            round.team2_points(),
            round.team2_extra()
        );
    }

    let totals = grid.model().totals();
    let _ = writeln!(output, "total\t{}\t\t{}\t", totals.team1, totals.team2);
    output
}

pub fn format_json(grid: &ScoreGrid) -> Result<String> {
    let value = json!({
        "rounds": grid,
        "totals": grid.model().totals(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write a timestamped snapshot into `dir` and return its path.
pub fn export_to_dir<P: AsRef<Path>>(
    grid: &ScoreGrid,
    dir: P,
    format: ExportFormat,
) -> Result<PathBuf> {
    let now: DateTime<Local> = Local::now();
    fs::create_dir_all(dir.as_ref())?;

    let path = dir.as_ref().join(format!(
        "Game_{}.{}",
        now.format("%Y_%m_%d_%H_%M_%S"),
        format.extension()
    ));
    fs::write(&path, format.render(grid)?)?;

    Ok(path)
}
