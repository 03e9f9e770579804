//! Escape-aware delimiter scanning
//!
//!     The noweb syntax has exactly one lexical subtlety: the chunk
//!     delimiters `<<` and `>>` appear as literal text when prefixed with
//!     the escape markers `@<<` and `@>>`. Every piece of chunk detection
//!     (definition lines, reference occurrences, name extraction) goes
//!     through [find_escaped] so the escape semantics are identical at every
//!     call site.
//!
//! Positions
//!
//!     All offsets are byte offsets into the line. The delimiters and escape
//!     markers are ASCII, so a successful match always starts and ends on a
//!     UTF-8 character boundary and name slices are valid `str` slices.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening chunk delimiter.
pub const CHUNK_OPEN: &str = "<<";
/// Closing chunk delimiter.
pub const CHUNK_CLOSE: &str = ">>";
/// Escape marker that turns an immediately following `<<` into literal text.
pub const CHUNK_OPEN_ESCAPE: &str = "@<<";
/// Escape marker that turns an immediately following `>>` into literal text.
pub const CHUNK_CLOSE_ESCAPE: &str = "@>>";

/// Chunk-boundary lines: the `@` sigil at column 0, rest of the line free.
static CHUNK_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@\s*.*$").unwrap());

/// Finds `target` in `haystack` starting at byte offset `from`, honoring the
/// escape marker.
///
/// The scan advances one byte at a time. Whenever `escape` matches exactly at
/// the cursor it is consumed whole and scanning resumes after it, so the
/// delimiter bytes it covers are never considered a match. Consecutive escape
/// markers are each consumed individually and keep suppressing the delimiter.
/// An empty `escape` disables escape handling; an empty `target` never
/// matches.
///
/// Returns the byte offset immediately *after* the matched target, or `None`
/// when the haystack is exhausted.
pub fn find_escaped(haystack: &str, target: &str, escape: &str, from: usize) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let target = target.as_bytes();
    let escape = escape.as_bytes();
    if target.is_empty() {
        return None;
    }

    let mut idx = from;
    while idx < bytes.len() {
        // Skip bytes that can open neither the escape marker nor the target.
        if bytes[idx] != target[0] && (escape.is_empty() || bytes[idx] != escape[0]) {
            idx += 1;
            continue;
        }
        if !escape.is_empty() && bytes[idx..].starts_with(escape) {
            idx += escape.len();
            continue;
        }
        if bytes[idx..].starts_with(target) {
            return Some(idx + target.len());
        }
        idx += 1;
    }
    None
}

/// Finds the next unescaped `<<`, returning the offset just past it.
pub fn chunk_open(line: &str, from: usize) -> Option<usize> {
    find_escaped(line, CHUNK_OPEN, CHUNK_OPEN_ESCAPE, from)
}

/// Finds the next unescaped `>>`, returning the offset just past it.
pub fn chunk_close(line: &str, from: usize) -> Option<usize> {
    find_escaped(line, CHUNK_CLOSE, CHUNK_CLOSE_ESCAPE, from)
}

/// A chunk name located between an unescaped `<<`/`>>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkName<'a> {
    /// Byte offset of the first name character (just past the `<<`).
    pub start: usize,
    /// The exact text between the delimiters, untrimmed. May be empty.
    pub name: &'a str,
}

impl ChunkName<'_> {
    /// Byte offset of the `<<` this name was extracted from.
    pub fn delimited_start(&self) -> usize {
        self.start - CHUNK_OPEN.len()
    }

    /// Total length of the delimited occurrence, delimiters included.
    pub fn delimited_len(&self) -> usize {
        self.name.len() + CHUNK_OPEN.len() + CHUNK_CLOSE.len()
    }

    /// Byte offset just past the closing `>>`.
    pub fn delimited_end(&self) -> usize {
        self.start + self.name.len() + CHUNK_CLOSE.len()
    }
}

/// Extracts the next `<<name>>` occurrence at or after `from`.
///
/// Both delimiters are located escape-aware; the closing delimiter is the
/// first unescaped `>>` after the opening one. A missing delimiter yields
/// `None` and the remainder of the line is left for the caller to classify
/// as plain text.
pub fn chunk_name(line: &str, from: usize) -> Option<ChunkName<'_>> {
    let name_start = chunk_open(line, from)?;
    let close_end = chunk_close(line, name_start)?;
    let name_end = close_end - CHUNK_CLOSE.len();
    if name_end < name_start {
        return None;
    }
    Some(ChunkName {
        start: name_start,
        name: &line[name_start..name_end],
    })
}

/// The name defined by a chunk-definition line, if the line is one.
///
/// A definition is `<<name>>=` anchored at column 0: an unescaped `<<` as
/// the very first characters, the first unescaped `>>` after the name,
/// immediately followed by `=` and nothing but whitespace to the end of the
/// line. Any leading character, including whitespace, demotes the line to
/// ordinary text.
pub fn definition_name(line: &str) -> Option<&str> {
    let name_start = chunk_open(line, 0)?;
    if name_start != CHUNK_OPEN.len() {
        return None;
    }
    let close_end = chunk_close(line, name_start)?;
    let rest = &line[close_end..];
    if !rest.starts_with('=') {
        return None;
    }
    if !rest[1..].trim().is_empty() {
        return None;
    }
    Some(&line[name_start..close_end - CHUNK_CLOSE.len()])
}

/// Whether the line is a chunk-definition line (`<<name>>=` at column 0).
pub fn is_definition_line(line: &str) -> bool {
    definition_name(line).is_some()
}

/// Whether the line is a chunk-boundary line (`@` at column 0).
///
/// Only column 0 counts; the sigil indented or preceded by any text is
/// ordinary content.
pub fn is_chunk_boundary(line: &str) -> bool {
    CHUNK_BOUNDARY.is_match(line)
}
