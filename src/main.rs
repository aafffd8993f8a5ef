mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use lexopt::Arg;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("trailsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("trailsnake: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(Game::new(config.tuning)).run(terminal);
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

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.  Returns `Ok(None)` if `--help` or
    /// `--version` was given and the program should exit.
    fn from_env() -> Result<Option<Cli>, lexopt::Error> {
        let mut cli = Cli::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    cli.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    print_help();
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(cli))
    }

    /// Load configuration from the file given on the command line or else
    /// from the default path, at which a missing file is not an error.
    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(ref path) = self.config {
            Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        } else {
            let path = Config::default_path()?;
            Ok(Config::load(&path, true)?)
        }
    }
}

fn print_help() {
    println!("Usage: trailsnake [-c <file>]");
    println!();
    println!("Steer with the arrow keys, WASD, or hjkl; press space to start.");
    println!();
    println!("Options:");
    println!("  -c <file>, --config <file>  Read configuration from <file>");
    println!("  -h, --help                  Show this help message and exit");
    println!("  -V, --version               Show the program version and exit");
}
