use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

use frontend::{FrontendError, FrontendOptions};

/// Parses a Lox expression and prints its syntax tree.
#[derive(clap::Parser)]
struct Args {
    /// File holding a single expression. Starts a prompt when omitted.
    file: Option<PathBuf>,

    /// Print the scanned tokens before the tree.
    #[arg(long)]
    tokens: bool,
}

// EX_DATAERR from sysexits.h
const EXIT_DATA_ERROR: u8 = 65;

fn run_file(path: PathBuf, options: &FrontendOptions) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(&path)?;
    log::debug!("Read {} bytes from {}", source.len(), path.display());

    match run(&source, options) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_data_error() => {
            eprintln!("{e}");
            Ok(ExitCode::from(EXIT_DATA_ERROR))
        }
        Err(e) => Err(e.into()),
    }
}

fn run_prompt(options: &FrontendOptions) -> anyhow::Result<ExitCode> {
    let mut line = String::new();
    loop {
        print!("> ");
        stdout().flush()?;

        line.clear();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        if line.trim().is_empty() {
            continue;
        }

        match run(&line, options) {
            Ok(()) => (),
            Err(e) if e.is_data_error() => eprintln!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
}

fn run(source: &str, options: &FrontendOptions) -> Result<(), FrontendError> {
    frontend::run_source(source, options, &mut stdout())
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let options = FrontendOptions { dump_tokens: args.tokens };

    match args.file {
        Some(file) => run_file(file, &options),
        None => run_prompt(&options),
    }
}
