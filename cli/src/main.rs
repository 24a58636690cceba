use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use catalog_cli::{Command, CommandError, Flow, Session, UreqTransport, HELP};
use catalog_core::{render::render, CatalogClient, ViewController, DEFAULT_ORIGIN};
use clap::Parser;
use tracing::info;

/// Terminal front end for the item catalog REST API
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "Terminal front end for the item catalog REST API", long_about = None)]
struct Args {
    /// Server origin; every request goes to <origin>/api/...
    #[arg(long, env = "CATALOG_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    info!(origin = %args.origin, "starting");

    let controller = ViewController::new(CatalogClient::new(&args.origin));
    let mut session = Session::new(controller, UreqTransport::new());
    session.start();

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render(session.controller().state()))?;

    let mut lines = io::stdin().lock();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line).context("reading command")? == 0 {
            break;
        }
        let command = match line.trim_end_matches(['\r', '\n']).parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        match session.dispatch(command) {
            Ok(Flow::Render) => write!(stdout, "{}", render(session.controller().state()))?,
            Ok(Flow::Help) => writeln!(stdout, "{HELP}")?,
            Ok(Flow::Quit) => break,
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }
    Ok(())
}

/// Logs go to stderr so they never mix with the rendered page.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("catalog={level},catalog_cli={level},catalog_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
