//! Interactive mode: one edit per line on stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use points_core::{KeyValueStore, ScoreSession, Side};

use super::edit::{self, Edit};
use super::show::render_grid;

const HELP: &str = "\
Commands:
  set <round> <team> [value]    enter points (team: 1, 2, team1, team2)
  extra <round> <team> [value]  enter extra points
  add                           append a round
  remove                        remove the last round
  clear                         start a new game
  show                          print the score sheet
  help                          show this help
  quit                          leave (the game is already saved)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Edit(Edit),
    Show,
    Help,
    Quit,
}

pub fn run<S: KeyValueStore>(session: &mut ScoreSession<S>, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(session, stdin.lock(), &mut stdout, color)
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_loop<S, R, W>(
    session: &mut ScoreSession<S>,
    input: R,
    output: &mut W,
    color: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_grid(session.grid(), color))?;
    writeln!(output, "Type \"help\" for commands.")?;
    prompt(output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(PlayCommand::Quit)) => break,
            Ok(Some(PlayCommand::Help)) => writeln!(output, "{}", HELP)?,
            Ok(Some(PlayCommand::Show)) => write!(output, "{}", render_grid(session.grid(), color))?,
            Ok(Some(PlayCommand::Edit(change))) => match edit::apply(session, &change) {
                Ok(message) => {
                    writeln!(output, "{}", message)?;
                    write!(output, "{}", render_grid(session.grid(), color))?;
                }
                Err(e) => writeln!(output, "error: {:#}", e)?,
            },
            Err(e) => writeln!(output, "error: {:#}", e)?,
        }

        prompt(output)?;
    }

    writeln!(output)?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<PlayCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" | "s" => {
            let (round, side, value) = parse_entry(&mut words)?;
            PlayCommand::Edit(Edit::Point { round, side, value })
        }
        "extra" | "e" => {
            let (round, side, value) = parse_entry(&mut words)?;
            PlayCommand::Edit(Edit::Extra { round, side, value })
        }
        "add" => PlayCommand::Edit(Edit::AddRound),
        "remove" | "rm" => PlayCommand::Edit(Edit::RemoveRound),
        "clear" | "new" => PlayCommand::Edit(Edit::Clear),
        "show" | "ls" => PlayCommand::Show,
        "help" | "?" => PlayCommand::Help,
        "quit" | "exit" | "q" => PlayCommand::Quit,
        other => bail!("Unknown command {:?} (try \"help\")", other),
    };

    Ok(Some(command))
}

fn parse_entry<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<(usize, Side, String)> {
    let round = words
        .next()
        .ok_or_else(|| anyhow!("Missing round number"))?;
    let round: usize = round
        .parse()
        .with_context(|| format!("Invalid round number {:?}", round))?;

    let side = words.next().ok_or_else(|| anyhow!("Missing team"))?;
    let side: Side = side
        .parse()
        .with_context(|| format!("Invalid team {:?}", side))?;

    let value = words.next().unwrap_or_default().to_string();
    if words.next().is_some() {
        bail!("Too many arguments");
    }

    Ok((round, side, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::{MemoryStore, Round};
    use std::io::Cursor;

    #[test]
    fn test_parse_set() {
        let command = parse_line("set 2 team2 5").unwrap();
        assert_eq!(
            command,
            Some(PlayCommand::Edit(Edit::Point {
                round: 2,
                side: Side::Team2,
                value: "5".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_set_without_value() {
        let command = parse_line("  s 1 1 ").unwrap();
        assert_eq!(
            command,
            Some(PlayCommand::Edit(Edit::Point {
                round: 1,
                side: Side::Team1,
                value: String::new(),
            }))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("ADD").unwrap(), Some(PlayCommand::Edit(Edit::AddRound)));
        assert_eq!(parse_line("rm").unwrap(), Some(PlayCommand::Edit(Edit::RemoveRound)));
        assert_eq!(parse_line("new").unwrap(), Some(PlayCommand::Edit(Edit::Clear)));
        assert_eq!(parse_line("show").unwrap(), Some(PlayCommand::Show));
        assert_eq!(parse_line("q").unwrap(), Some(PlayCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("jump").is_err());
        assert!(parse_line("set").is_err());
        assert!(parse_line("set x team1 4").is_err());
        assert!(parse_line("set 1 team9 4").is_err());
        assert!(parse_line("set 1 team1 4 5").is_err());
    }

    #[test]
    fn test_run_loop() {
        let mut session = ScoreSession::open(MemoryStore::new(), "gameState");
        let input = Cursor::new("set 1 1 7\nextra 1 2 3\nbogus\nadd\nset 20 1 4\nquit\nadd\n");
        let mut output = Vec::new();

        run_loop(&mut session, input, &mut output, false).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Round 1: team1 7 (+0)  team2 4 (+3)"));
        assert!(text.contains("error: Unknown command \"bogus\""));
        assert!(text.contains("error: Round 20 does not exist"));

        // input after quit is ignored
        assert_eq!(session.grid().len(), 9);
        assert_eq!(session.grid().round(0), Some(&Round::new(7, 0, 4, 3)));
    }
}
