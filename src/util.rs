use crate::error::{Error, Result};
use crate::input::Stream;

/// Number of frames in a run of `size` adjacent pairs: `1 + 2 + ... + size`.
pub fn frames(size: usize) -> i64 {
    let size = size as i64;
    size * (size + 1) / 2
}

pub fn stream_parser(s: &str) -> std::result::Result<Stream, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Path cannot be empty".to_string());
    }
    if s == "-" {
        return Ok(Stream::Std);
    }
    Ok(Stream::File(s.into()))
}

pub fn parse_int(token: &str, position: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::Parse {
        token: token.to_string(),
        position,
    })
}
