mod cluster;
mod command;
mod config;
mod repl;

use std::io::{self, IsTerminal, Write};

use argh::FromArgs;

use crate::{config::Config, repl::Repl};

const VERSION: &str = "0.0.1";

#[derive(FromArgs)]
/// Type hex clusters, get raw bytes on standard error.
struct Arguments {
    #[argh(switch, short = 'v')]
    /// print the version and exit
    version: bool,
}

fn print_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", VERSION)
}

fn run() -> Result<(), anyhow::Error> {
    let args: Arguments = argh::from_env();
    if args.version {
        print_version(&mut io::stdout().lock())?;
        return Ok(());
    }

    let config = Config::load_or_default();
    let stdin = io::stdin();
    let mut repl = Repl::new(config.prompt, io::stdout(), io::stderr());
    if stdin.is_terminal() {
        repl.run_editor()?;
    } else {
        log::debug!("stdin is not a terminal, reading lines without an editor");
        repl.run(stdin.lock())?;
    }
    Ok(())
}

fn main() {
    // stderr is the byte sink, keep log lines off it
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(e) = run() {
        eprintln!("FATAL: {:#}", e);
        std::process::exit(1);
    }
}
