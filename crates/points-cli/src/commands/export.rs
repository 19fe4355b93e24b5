//! Export command for writing the score sheet as TSV or JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use points_core::{ExportFormat, ScoreGrid, export_to_dir};

pub fn run(
    grid: &ScoreGrid,
    format: ExportFormat,
    output: Option<&Path>,
    dir: Option<&Path>,
) -> Result<()> {
    if let Some(dir) = dir {
        let path = export_to_dir(grid, dir, format)
            .with_context(|| format!("Failed to export into {}", dir.display()))?;
        eprintln!("Exported to: {}", path.display());
        return Ok(());
    }

    let content = format.render(grid)?;
    if let Some(output_path) = output {
        fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.json");
        run(&ScoreGrid::new(), ExportFormat::Json, Some(&path), None).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["rounds"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_export_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        run(&ScoreGrid::new(), ExportFormat::Tsv, None, Some(temp_dir.path())).unwrap();
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
