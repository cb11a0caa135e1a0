//! JSON board snapshot loading.
//!
//! A snapshot is the serialised form of a [`Board`]: a JSON object with a
//! `footprints` array, each entry carrying a `reference` and an optional
//! `selected` flag (defaults to `false`).
//!
//! ```json
//! {
//!   "footprints": [
//!     { "reference": "SW33" },
//!     { "reference": "R1", "selected": false }
//!   ]
//! }
//! ```
//!
//! Snapshots are read-only input: selection state produced by a pass is never
//! written back to disk.

use std::path::Path;

use crate::board::{Board, BoardError, BoardResult};

/// Loads a board from a JSON snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON does not describe
/// a board.
pub fn load(path: &Path) -> BoardResult<Board> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| BoardError::file_read(path, e))?;
    from_json(&contents).map_err(|e| BoardError::parse_error(path, e))
}

/// Parses a board from a JSON snapshot string.
///
/// # Errors
///
/// Returns the underlying JSON error if the string does not describe a board.
pub fn from_json(json: &str) -> Result<Board, serde_json::Error> {
    serde_json::from_str(json)
}
