//! Acquisition of the pattern and text.
//!
//! Each side comes from a literal argument, a file, or an interactive prompt.
//! Lengths are bounded here; the search core does no validation of its own.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{Error, Result, What};

/// Size of the fixed input buffers of the interactive program.
pub const DEFAULT_MAX_LEN: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputLimits {
    /// Longest accepted pattern or text, in bytes.
    pub max_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Literal(Vec<u8>),
    /// Whole file contents. For a pattern file one trailing line ending is
    /// dropped.
    File(PathBuf),
    /// Prompt on stdout and read one whitespace-delimited token from stdin.
    Prompt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInput {
    pub pattern: Vec<u8>,
    pub text: Vec<u8>,
}

/// Resolve both sources, pattern first, the way the interactive program asks
/// for them.
pub fn read_input<R: BufRead, W: Write>(
    pattern: &InputSource,
    text: &InputSource,
    limits: InputLimits,
    stdin: &mut R,
    stdout: &mut W,
) -> Result<SearchInput> {
    let pattern = read_one(pattern, Side::Pattern, limits, stdin, stdout)?;
    let text = read_one(text, Side::Text, limits, stdin, stdout)?;
    Ok(SearchInput { pattern, text })
}

#[derive(Clone, Copy)]
enum Side {
    Pattern,
    Text,
}

impl Side {
    fn what(self) -> What {
        match self {
            Side::Pattern => "pattern",
            Side::Text => "text",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Side::Pattern => "Enter pattern P:",
            Side::Text => "Enter text T:",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Side::Pattern => "Pattern P",
            Side::Text => "Text T",
        }
    }
}

fn read_one<R: BufRead, W: Write>(
    source: &InputSource,
    side: Side,
    limits: InputLimits,
    stdin: &mut R,
    stdout: &mut W,
) -> Result<Vec<u8>> {
    let what = side.what();
    let bytes = match source {
        InputSource::Literal(bytes) => bytes.clone(),
        InputSource::File(path) => {
            log::debug!("reading {} from {}", what, path.display());
            let mut bytes = fs::read(path).map_err(Error::io(what))?;
            if let Side::Pattern = side {
                trim_line_ending(&mut bytes);
            }
            bytes
        }
        InputSource::Prompt => {
            writeln!(stdout, "{}", side.prompt()).map_err(Error::io(what))?;
            stdout.flush().map_err(Error::io(what))?;

            let token = read_token(stdin)
                .map_err(Error::io(what))?
                .ok_or(Error::MissingInput(what))?;
            writeln!(
                stdout,
                "{} (length {}) entered: {}",
                side.label(),
                token.len(),
                String::from_utf8_lossy(&token)
            )
            .map_err(Error::io(what))?;
            token
        }
    };

    check_len(what, &bytes, limits)?;
    log::debug!("{} is {} bytes", what, bytes.len());
    Ok(bytes)
}

fn check_len(what: What, bytes: &[u8], limits: InputLimits) -> Result<()> {
    if bytes.len() > limits.max_len {
        return Err(Error::TooLong {
            what,
            len: bytes.len(),
            max: limits.max_len,
        });
    }
    Ok(())
}

/// Next whitespace-delimited token, skipping blank lines. `None` at EOF.
fn read_token<R: BufRead>(stdin: &mut R) -> std::io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line
            .split(|b| b.is_ascii_whitespace())
            .find(|word| !word.is_empty())
        {
            return Ok(Some(token.to_vec()));
        }
    }
}

fn trim_line_ending(bytes: &mut Vec<u8>) {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
}
