mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::GameConfig;
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "Usage: kingsnake [-h|--help] [-V|--version] <config-file>";

fn main() -> ExitCode {
    match Args::from_env() {
        Ok(Args::Run { config_file }) => run(&config_file),
        Ok(Args::Help) => {
            println!("{USAGE}");
            println!();
            println!("Play snake on a field of obstacles described by <config-file>.");
            ExitCode::SUCCESS
        }
        Ok(Args::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("kingsnake: {e}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_file: &Path) -> ExitCode {
    let config = match GameConfig::load(config_file).with_context(|| {
        format!(
            "failed to load game configuration from {}",
            config_file.display()
        )
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kingsnake: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(&config).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Args {
    Run { config_file: PathBuf },
    Help,
    Version,
}

impl Args {
    fn from_env() -> Result<Args, lexopt::Error> {
        Args::parse(lexopt::Parser::from_env())
    }

    fn parse(mut parser: lexopt::Parser) -> Result<Args, lexopt::Error> {
        use lexopt::prelude::*;
        let mut config_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Short('h') | Long("help") => return Ok(Args::Help),
                Short('V') | Long("version") => return Ok(Args::Version),
                Value(val) if config_file.is_none() => config_file = Some(PathBuf::from(val)),
                _ => return Err(arg.unexpected()),
            }
        }
        match config_file {
            Some(config_file) => Ok(Args::Run { config_file }),
            None => Err(lexopt::Error::from("no configuration file provided")),
        }
    }
}
