//! `bm`: find a pattern in a text with Boyer-Moore
//!
//! Pattern and text come from arguments, files, or interactive prompts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use boyer_moore::input::{read_input, InputLimits, InputSource, DEFAULT_MAX_LEN};
use boyer_moore::report::{render_json, render_text, Report};
use boyer_moore::{search, search_all};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "bm", about = "Find the first occurrence of a pattern in a text with Boyer-Moore")]
struct Cli {
    /// Pattern to search for (prompted when omitted)
    pattern: Option<String>,

    /// Text to search in (prompted when omitted)
    text: Option<String>,

    /// Read the pattern from a file
    #[arg(short = 'p', long)]
    pattern_file: Option<PathBuf>,

    /// Read the text from a file
    #[arg(short = 't', long)]
    text_file: Option<PathBuf>,

    /// Longest accepted pattern or text, in bytes
    #[arg(long, env = "BM_MAX_LEN", default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Report every occurrence instead of the first
    #[arg(long)]
    all: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// With `--pattern-file` the only positional argument is the text.
fn positionals(cli: &mut Cli) -> Result<(), clap::Error> {
    if cli.pattern_file.is_some() && cli.text.is_none() {
        cli.text = cli.pattern.take();
    }
    if cli.pattern_file.is_some() && cli.pattern.is_some() {
        return Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            "PATTERN given together with --pattern-file",
        ));
    }
    if cli.text_file.is_some() && cli.text.is_some() {
        return Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            "TEXT given together with --text-file",
        ));
    }
    Ok(())
}

fn source(literal: Option<String>, file: Option<PathBuf>) -> InputSource {
    match (literal, file) {
        (Some(literal), _) => InputSource::Literal(literal.into_bytes()),
        (None, Some(path)) => InputSource::File(path),
        (None, None) => InputSource::Prompt,
    }
}

/// Prompts go to `stderr` when `--json` keeps `stdout` for the report alone.
fn run<R: BufRead, W: Write, E: Write>(
    cli: Cli,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
) -> boyer_moore::Result<()> {
    let limits = InputLimits {
        max_len: cli.max_len,
    };
    let pattern = source(cli.pattern, cli.pattern_file);
    let text = source(cli.text, cli.text_file);

    let input = if cli.json {
        read_input(&pattern, &text, limits, stdin, stderr)?
    } else {
        read_input(&pattern, &text, limits, stdin, stdout)?
    };

    if !cli.json {
        writeln!(stdout, "Running Boyer-Moore").map_err(write_error)?;
    }

    let found = search(&input.text, &input.pattern);
    let mut report = Report::new(&input.pattern, &input.text, found);
    if cli.all {
        report = report.with_all(search_all(&input.text, &input.pattern));
    }
    log::info!("first match: {:?}", report.outcome.offset());

    let rendered = if cli.json {
        render_json(&report)?
    } else {
        render_text(&report, &input.text)
    };
    writeln!(stdout, "{}", rendered).map_err(write_error)?;
    Ok(())
}

fn write_error(source: io::Error) -> boyer_moore::Error {
    boyer_moore::Error::Io {
        what: "stdout",
        source,
    }
}

fn main() {
    env_logger::init();
    let mut cli = Cli::parse();
    if let Err(err) = positionals(&mut cli) {
        err.exit();
    }
    log::debug!("{:?}", cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = run(cli, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
