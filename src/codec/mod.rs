//! The persistence codec: CSV rows to typed collections and back.
//!
//! The garage file is row-oriented with a header and six fixed columns:
//!
//! ```text
//! id, name, type, details, mileage, kart_id
//! ```
//!
//! `type` discriminates the row kind: `util` (the id counter, exactly one
//! expected), `kart`, `part`, or `track`. Rows of unknown type are skipped
//! so future kinds can be added without breaking old binaries. The codec is
//! pure and stateless; the store decides when to read and write.
//!
//! Decode policy per kind:
//! - `kart` / `track`: first row wins for a given id, later duplicates drop
//! - `part`: an ordered sequence, every row appended, no deduplication
//! - `util`: sets the counter from the zero-padded `id` column
//!
//! Missing trailing fields default to empty strings. Malformed numeric
//! fields are fatal: silently coercing them would damage mileage accounting.

pub mod file;

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Kart, Part, Track};

/// Column header written at the top of every garage file.
pub const HEADER: &str = "id,name,type,details,mileage,kart_id";

/// A complete, order-stable copy of the persisted state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub karts: Vec<Kart>,
    pub parts: Vec<Part>,
    pub tracks: Vec<Track>,
    pub counter: u64,
}

// ── Decoding ──────────────────────────────────────────────────

/// Parse garage-file text into a [`Snapshot`].
///
/// # Errors
///
/// Returns [`Error::MalformedRow`] when a numeric field fails to parse;
/// the line number refers to the file (header is line 1).
pub fn decode(text: &str) -> Result<Snapshot> {
    let mut snapshot = Snapshot::default();

    // Line 1 is the header; rows start at line 2.
    for (index, line) in text.lines().enumerate().skip(1) {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_row(line);
        let field = |i: usize| fields.get(i).map_or("", String::as_str);

        match field(2) {
            "util" => {
                snapshot.counter = parse_num(field(0), line_no, "counter")?;
            }

            "kart" => {
                let id: u64 = parse_num(field(0), line_no, "kart id")?;
                let mileage: f64 = parse_num(field(4), line_no, "mileage")?;
                if !snapshot.karts.iter().any(|k| k.id == id) {
                    snapshot.karts.push(Kart {
                        id,
                        name: field(1).to_string(),
                        mileage,
                    });
                }
            }

            "part" => {
                let mileage: f64 = parse_num(field(4), line_no, "mileage")?;
                let kart_id = match field(5) {
                    "" | "0" => None,
                    raw => Some(parse_num(raw, line_no, "kart_id")?),
                };
                snapshot.parts.push(Part {
                    id: field(0).to_string(),
                    name: field(1).to_string(),
                    details: field(3).to_string(),
                    mileage,
                    kart_id,
                });
            }

            "track" => {
                let id: u64 = parse_num(field(0), line_no, "track id")?;
                let length: f64 = parse_num(field(4), line_no, "length")?;
                if !snapshot.tracks.iter().any(|t| t.id == id) {
                    snapshot.tracks.push(Track {
                        id,
                        name: field(1).to_string(),
                        details: field(3).to_string(),
                        length,
                    });
                }
            }

            // Forward-compatible allowance for future row kinds.
            _ => {}
        }
    }

    Ok(snapshot)
}

/// Parse a numeric field. An absent (empty) field defaults to zero; a
/// present but unparseable value is fatal.
fn parse_num<T>(raw: &str, line: usize, what: &str) -> Result<T>
where
    T: std::str::FromStr + Default,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(|_| Error::MalformedRow {
        line,
        message: format!("invalid {what}: '{raw}'"),
    })
}

// ── Encoding ──────────────────────────────────────────────────

/// Render a [`Snapshot`] as garage-file text.
///
/// Row order is stable: the util row first, then parts in sequence order,
/// then karts, then tracks.
#[must_use]
pub fn encode(snapshot: &Snapshot) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    push_row(
        &mut out,
        &[&format!("{:08}", snapshot.counter), "", "util", "", "0", ""],
    );

    for part in &snapshot.parts {
        let kart_id = part.kart_id.map_or_else(|| "0".to_string(), |id| id.to_string());
        push_row(
            &mut out,
            &[
                &part.id,
                &part.name,
                "part",
                &part.details,
                &part.mileage.to_string(),
                &kart_id,
            ],
        );
    }

    for kart in &snapshot.karts {
        let id = kart.id.to_string();
        push_row(
            &mut out,
            &[&id, &kart.name, "kart", "", &kart.mileage.to_string(), &id],
        );
    }

    for track in &snapshot.tracks {
        push_row(
            &mut out,
            &[
                &track.id.to_string(),
                &track.name,
                "track",
                &track.details,
                &track.length.to_string(),
                "",
            ],
        );
    }

    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Escape a field for CSV output (quote if it contains commas, quotes,
/// or newlines, doubling inner quotes).
#[must_use]
pub fn escape_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Split one row into fields, honoring quoted fields with doubled quotes.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}

// ── File-level load/save ──────────────────────────────────────

/// Load a snapshot from disk. A missing file is an empty database.
///
/// # Errors
///
/// Returns an error on unreadable files or malformed rows.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    match file::read_if_exists(path)? {
        Some(text) => {
            let snapshot = decode(&text)?;
            debug!(
                karts = snapshot.karts.len(),
                parts = snapshot.parts.len(),
                tracks = snapshot.tracks.len(),
                counter = snapshot.counter,
                "loaded garage file"
            );
            Ok(snapshot)
        }
        None => {
            debug!(path = %path.display(), "no garage file yet, starting empty");
            Ok(Snapshot::default())
        }
    }
}

/// Persist a snapshot as a whole-file atomic replace.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    file::atomic_write(path, &encode(snapshot))?;
    debug!(
        karts = snapshot.karts.len(),
        parts = snapshot.parts.len(),
        tracks = snapshot.tracks.len(),
        "persisted garage file"
    );
    Ok(())
}
