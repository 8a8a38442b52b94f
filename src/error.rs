//! Error types shared across the editor.
//!
//! - [`GridError`] – rejected grid mutations (bad coordinates or tile index)
//! - [`LevelError`] – level file naming, I/O and parse failures
//! - [`TilesetError`] – fatal tileset loading/slicing failures
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A grid mutation that could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("tile index {index} is outside the catalog ({tile_count} tiles)")]
    TileOutOfRange { index: u32, tile_count: u32 },
}

/// Failure to resolve, read, write or parse a level file.
///
/// Line and column numbers are 1-based so they can be reported as-is.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid level name {0:?}")]
    InvalidName(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}, column {column}: {token:?} is not an integer")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line}: expected {expected} tiles, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("line {line}, column {column}: tile {value} is outside -1..{tile_count}")]
    TileOutOfRange {
        line: usize,
        column: usize,
        value: i64,
        tile_count: u32,
    },
}

impl LevelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LevelError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Fatal error while building the tileset catalog at startup.
#[derive(Debug, Error)]
pub enum TilesetError {
    #[error("failed to load tileset image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },
    #[error(
        "tileset image is {width}x{height}, which is not a multiple of the {tile_size}px tile size"
    )]
    NotTileAligned {
        width: u32,
        height: u32,
        tile_size: u32,
    },
    #[error(
        "tileset image is {width}x{height} but {rows}x{columns} tiles of {tile_size}px need {needed_width}x{needed_height}"
    )]
    TooSmall {
        width: u32,
        height: u32,
        rows: u32,
        columns: u32,
        tile_size: u32,
        needed_width: u32,
        needed_height: u32,
    },
    #[error("failed to create texture for tile ({row}, {column}): {reason}")]
    Texture {
        row: u32,
        column: u32,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_error_messages_are_one_based() {
        let err = LevelError::InvalidToken {
            line: 3,
            column: 7,
            token: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 3, column 7: \"abc\" is not an integer"
        );
    }

    #[test]
    fn test_grid_error_message() {
        let err = GridError::OutOfBounds {
            x: 15,
            y: 2,
            width: 15,
            height: 10,
        };
        assert_eq!(err.to_string(), "cell (15, 2) is outside the 15x10 grid");
    }
}
