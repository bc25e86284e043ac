use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser as ClapParser, Subcommand};
use minipas::{format_error, lexer::lexer::tokenize, parser::parser::parse};

#[derive(ClapParser, Debug)]
#[command(
    version,
    about = "Lexer and parser for a small Pascal-like language",
    long_about = "Lexer and parser for a small Pascal-like language.\n\
                  Set RUST_LOG=trace to follow tokens and statement dispatch."
)]
struct Cli {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a source file and writes its canonical rendering
    Parse {
        /// Source file
        input: PathBuf,

        /// Output file, stdout when omitted. Nothing is written on errors.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Prints the token stream of a source file
    Tokens {
        /// Source file
        input: PathBuf,
    },
    /// Reads stdin line by line, echoing each line's tokens and parse
    Repl,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => run_parse(&input, output.as_deref()),
        Commands::Tokens { input } => run_tokens(&input),
        Commands::Repl => run_repl(),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Reads a source file, returning its contents and the name used in positions.
fn read_source(path: &Path) -> io::Result<(String, String)> {
    let contents = fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    Ok((contents, file_name))
}

fn run_parse(input: &Path, output: Option<&Path>) -> io::Result<ExitCode> {
    let (source, file_name) = read_source(input)?;

    let start = Instant::now();
    let (program, errors) = parse(source.clone(), Some(file_name));
    log::info!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", format_error(error, &source));
        }
        return Ok(ExitCode::FAILURE);
    }

    let rendered = format!("{}\n", program);
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(ExitCode::SUCCESS)
}

fn run_tokens(input: &Path) -> io::Result<ExitCode> {
    let (source, file_name) = read_source(input)?;

    let mut stdout = io::stdout().lock();
    for token in tokenize(source, Some(file_name)) {
        writeln!(stdout, "{}", token)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_repl() -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;

        let tokens: Vec<String> = tokenize(line.clone(), None)
            .iter()
            .map(|token| token.to_string())
            .collect();
        writeln!(stdout, "{}", tokens.join(" "))?;

        let (program, errors) = parse(line, None);
        if errors.is_empty() {
            writeln!(stdout, "{}", program)?;
        } else {
            writeln!(stdout, "parser errors:")?;
            for error in &errors {
                writeln!(stdout, "\t{}", error)?;
            }
        }
        stdout.flush()?;
    }

    Ok(ExitCode::SUCCESS)
}
