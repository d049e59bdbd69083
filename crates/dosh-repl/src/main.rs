//! dosh CLI entry point.
//!
//! Usage:
//!   dosh                          # Interactive REPL over the default volume
//!   dosh -c <command>             # Execute one command and exit
//!   dosh --no-seed                # Start from an empty volume
//!   dosh --snapshot <file.json>   # Load the volume from, and save it to, a file

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dosh_kernel::ShellConfig;
use dosh_repl::Repl;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    command: Option<String>,
    seed: bool,
    snapshot: Option<PathBuf>,
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Options {
        seed: true,
        ..Options::default()
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(ExitCode::SUCCESS);
            }
            "--version" | "-V" => {
                println!(
                    "dosh {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("DOSH_GIT_HASH"),
                    env!("DOSH_BUILD_DATE")
                );
                return Ok(ExitCode::SUCCESS);
            }
            "-c" => {
                let cmd = iter.next().context("-c requires a command argument")?;
                opts.command = Some(cmd.clone());
            }
            "--no-seed" => opts.seed = false,
            "--snapshot" => {
                let path = iter.next().context("--snapshot requires a file path")?;
                opts.snapshot = Some(PathBuf::from(path));
            }
            other if other.starts_with("--snapshot=") => {
                opts.snapshot = Some(PathBuf::from(&other["--snapshot=".len()..]));
            }
            other => bail!("Unknown option: {other}\nRun 'dosh --help' for usage."),
        }
    }

    let config = if opts.seed {
        ShellConfig::named("dosh")
    } else {
        ShellConfig::empty()
    };
    let mut repl = Repl::with_config(config)?;
    if let Some(path) = opts.snapshot {
        repl = repl.with_snapshot(path)?;
    }

    match opts.command {
        Some(cmd) => run_command(repl, &cmd),
        None => {
            dosh_repl::run(repl)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Execute a single command, print its output and exit.
fn run_command(mut repl: Repl, cmd: &str) -> Result<ExitCode> {
    if let Some(output) = repl.process_line(cmd)? {
        println!("{output}");
    }
    repl.finish()?;

    if repl.last_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"dosh {version} - DOS-style shell over a virtual volume

USAGE:
    dosh [OPTIONS]

OPTIONS:
    -c <COMMAND>            Execute a command and exit
    --no-seed               Start with an empty volume instead of the default files
    --snapshot <FILE>       Load the volume from FILE if present, save it on exit
    -h, --help              Print this help
    -V, --version           Print version

EXAMPLES:
    dosh                          Start the REPL
    dosh -c "dir C:\DOS"          List a directory and exit
    dosh --snapshot vol.json      Keep the volume between sessions

ENVIRONMENT:
    RUST_LOG                Log filter, e.g. RUST_LOG=dosh_kernel=debug
"#
    );
}
