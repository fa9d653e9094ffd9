use crate::error::{Error, Result};
use crate::util::parse_int;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Where upvotes are read from or scores are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stream {
    Std,
    File(PathBuf),
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::Std => write!(f, "<std>"),
            Stream::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upvotes {
    pub values: Vec<i64>,
    pub window: usize,
}

/// Parses `n k` followed by `n` values, all whitespace separated.
pub fn parse_upvotes(content: &str) -> Result<Upvotes> {
    let mut tokens = content.split_whitespace().enumerate();

    let mut header = [0i64; 2];
    for (slot, field) in header.iter_mut().enumerate() {
        let (position, token) = tokens.next().ok_or(Error::MissingValues {
            expected: 2,
            actual: slot,
        })?;
        *field = parse_int(token, position)?;
    }
    let [n, k] = header;

    if n < 0 {
        return Err(Error::InvalidLength(n));
    }
    let len = n as usize;
    if k < 1 || k > n {
        return Err(Error::InvalidWindow { window: k, len });
    }

    let mut values = Vec::new();
    for (position, token) in tokens.by_ref().take(len) {
        values.push(parse_int(token, position)?);
    }
    if values.len() < len {
        return Err(Error::MissingValues {
            expected: len,
            actual: values.len(),
        });
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!("Ignoring {} trailing tokens after {} values", extra, len);
    }

    debug!("Parsed {} values, window={}", len, k);
    Ok(Upvotes {
        values,
        window: k as usize,
    })
}

pub fn load_upvotes(source: &Stream) -> Result<Upvotes> {
    info!("Loading upvotes from {}", source);

    let mut content = String::new();
    match source {
        Stream::Std => {
            io::stdin().lock().read_to_string(&mut content)?;
        }
        Stream::File(path) => {
            File::open(path)?.read_to_string(&mut content)?;
        }
    }

    parse_upvotes(&content)
}

/// Writes one score per line. Returns the number of scores written.
pub fn write_scores<W, I>(writer: W, scores: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = i64>,
{
    let mut writer = BufWriter::new(writer);
    let mut written = 0;
    for score in scores {
        writeln!(writer, "{}", score)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

pub fn save_scores<I>(sink: &Stream, scores: I) -> Result<usize>
where
    I: IntoIterator<Item = i64>,
{
    info!("Saving scores to {}", sink);

    let written = match sink {
        Stream::Std => write_scores(io::stdout().lock(), scores)?,
        Stream::File(path) => write_scores(File::create(path)?, scores)?,
    };

    debug!("Wrote {} scores", written);
    Ok(written)
}
