mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use commands::edit::Edit;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default filter
    let default_filter = if args.verbose {
        "points_cli=info,points_core=info"
    } else {
        "points_cli=warn,points_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(&args);
    let color = config.display.color;
    let mut session = commands::open_session(&config)?;

    match args.command {
        Some(Command::Show { json }) => commands::show::run(&session, json, color),
        Some(Command::Set { round, team, value }) => {
            let edit = Edit::Point {
                round,
                side: team,
                value,
            };
            commands::edit::run(&mut session, &edit, color)
        }
        Some(Command::Extra { round, team, value }) => {
            let edit = Edit::Extra {
                round,
                side: team,
                value,
            };
            commands::edit::run(&mut session, &edit, color)
        }
        Some(Command::AddRound) => commands::edit::run(&mut session, &Edit::AddRound, color),
        Some(Command::RemoveRound) => commands::edit::run(&mut session, &Edit::RemoveRound, color),
        Some(Command::Clear) => commands::edit::run(&mut session, &Edit::Clear, color),
        Some(Command::Export {
            format,
            output,
            dir,
        }) => commands::export::run(
            session.grid(),
            format.into(),
            output.as_deref(),
            dir.as_deref(),
        ),
        Some(Command::Play) | None => commands::play::run(&mut session, color),
    }
}
