//! Plain-text level files.
//!
//! A level is stored as one line per grid row, top to bottom. Each line holds
//! `width` whitespace-separated integers in left-to-right order: the tile
//! index of the cell, or `-1` for an empty cell. There is no header.
//!
//! ```text
//! -1 -1 45 -1
//! 3 3 3 3
//! ```
//!
//! Loading is all-or-nothing: the whole file is parsed and validated against
//! the grid dimensions and tileset size before the grid is touched. A file
//! with a non-integer token, a row of the wrong length, the wrong number of
//! rows or an index outside the tileset is rejected with a [`LevelError`]
//! describing the first problem found.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LevelError;
use crate::resources::selection::TileIndex;
use crate::resources::tilegrid::{EMPTY_CELL, TileGrid};

/// Extension used for level files.
pub const LEVEL_EXTENSION: &str = "txt";

/// Serialize `grid` into the level text format.
pub fn encode_level(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() * grid.height() * 3) as usize);
    for row in grid.rows() {
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            let value = cell.map_or(EMPTY_CELL, |index| index.get() as i32);
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out
}

/// Parse level text for a `width` x `height` grid over `tile_count` tiles.
///
/// Returns the cells row by row. Trailing blank lines are ignored; any other
/// deviation from the format is an error.
pub fn decode_level(
    text: &str,
    width: u32,
    height: u32,
    tile_count: u32,
) -> Result<Vec<Option<TileIndex>>, LevelError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let expected_rows = height as usize;
    let expected_columns = width as usize;
    let mut cells = Vec::with_capacity(expected_rows * expected_columns);

    for (y, line) in lines.iter().enumerate() {
        if y >= expected_rows {
            return Err(LevelError::RowCount {
                expected: expected_rows,
                found: lines.len(),
            });
        }
        let line_no = y + 1;
        let mut found = 0;
        for (x, token) in line.split_whitespace().enumerate() {
            let column = x + 1;
            let value: i64 = token.parse().map_err(|_| LevelError::InvalidToken {
                line: line_no,
                column,
                token: token.to_string(),
            })?;
            let cell = match value {
                -1 => None,
                v if (0..tile_count as i64).contains(&v) => Some(TileIndex(v as u32)),
                v => {
                    return Err(LevelError::TileOutOfRange {
                        line: line_no,
                        column,
                        value: v,
                        tile_count,
                    });
                }
            };
            if x < expected_columns {
                cells.push(cell);
            }
            found += 1;
        }
        if found != expected_columns {
            return Err(LevelError::RowLength {
                line: line_no,
                expected: expected_columns,
                found,
            });
        }
    }

    if lines.len() != expected_rows {
        return Err(LevelError::RowCount {
            expected: expected_rows,
            found: lines.len(),
        });
    }

    Ok(cells)
}

/// Write `grid` to `path`, creating the parent directory if needed.
pub fn save_level(path: &Path, grid: &TileGrid) -> Result<(), LevelError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LevelError::io(parent, e))?;
    }
    fs::write(path, encode_level(grid)).map_err(|e| LevelError::io(path, e))?;
    debug!("Wrote {} filled cells to {:?}", grid.filled(), path);
    Ok(())
}

/// Read `path` and parse it for the dimensions of `grid` without modifying it.
pub fn read_level(path: &Path, grid: &TileGrid) -> Result<Vec<Option<TileIndex>>, LevelError> {
    let text = fs::read_to_string(path).map_err(|e| LevelError::io(path, e))?;
    decode_level(&text, grid.width(), grid.height(), grid.tile_count())
}

/// Replace the contents of `grid` with the level at `path`.
///
/// On error `grid` is left untouched.
pub fn load_level(path: &Path, grid: &mut TileGrid) -> Result<(), LevelError> {
    let cells = read_level(path, grid)?;
    grid.replace_cells(cells);
    debug!("Read {} filled cells from {:?}", grid.filled(), path);
    Ok(())
}

/// Resolve a user-typed `name` to `<dir>/<name>.<extension>`.
///
/// Returns `None` for names that are empty, contain a path separator, or are
/// `.`/`..`. A name already ending in `.<extension>` is not extended twice.
pub fn resolve_name(dir: &Path, name: &str, extension: &str) -> Option<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return None;
    }
    let suffix = format!(".{}", extension);
    let file_name = if name.ends_with(&suffix) && name.len() > suffix.len() {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    };
    Some(dir.join(file_name))
}

/// Resolve a level name inside `levels_dir`.
pub fn level_path(levels_dir: &Path, name: &str) -> Result<PathBuf, LevelError> {
    resolve_name(levels_dir, name, LEVEL_EXTENSION)
        .ok_or_else(|| LevelError::InvalidName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> TileGrid {
        let mut grid = TileGrid::new(4, 2, 147);
        grid.paint(2, 0, TileIndex(45)).unwrap();
        grid.paint(0, 1, TileIndex(3)).unwrap();
        grid.paint(3, 1, TileIndex(146)).unwrap();
        grid
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(encode_level(&sample_grid()), "-1 -1 45 -1\n3 -1 -1 146\n");
    }

    #[test]
    fn test_encode_empty_default_grid() {
        let text = encode_level(&TileGrid::new(15, 10, 147));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        for line in lines {
            let tokens: Vec<_> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 15);
            assert!(tokens.iter().all(|t| *t == "-1"));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let grid = sample_grid();
        let cells = decode_level(&encode_level(&grid), 4, 2, 147).unwrap();
        let mut decoded = TileGrid::new(4, 2, 147);
        decoded.replace_cells(cells);
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_decode_accepts_trailing_spaces_and_blank_tail() {
        let text = "-1 -1 45 -1 \r\n3 -1 -1 146 \n\n\n";
        let cells = decode_level(text, 4, 2, 147).unwrap();
        assert_eq!(cells[2], Some(TileIndex(45)));
        assert_eq!(cells[7], Some(TileIndex(146)));
    }

    #[test]
    fn test_decode_rejects_non_integer() {
        let err = decode_level("-1 -1 x -1\n3 -1 -1 146\n", 4, 2, 147).unwrap_err();
        match err {
            LevelError::InvalidToken {
                line,
                column,
                token,
            } => {
                assert_eq!((line, column), (1, 3));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_short_and_long_rows() {
        let err = decode_level("-1 -1 -1\n-1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(
            err,
            LevelError::RowLength {
                line: 1,
                expected: 4,
                found: 3
            }
        ));
        let err = decode_level("-1 -1 -1 -1\n-1 -1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(
            err,
            LevelError::RowLength {
                line: 2,
                expected: 4,
                found: 5
            }
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_row_count() {
        let err = decode_level("-1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(
            err,
            LevelError::RowCount {
                expected: 2,
                found: 1
            }
        ));
        let err = decode_level("-1 -1 -1 -1\n-1 -1 -1 -1\n-1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(
            err,
            LevelError::RowCount {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_decode_rejects_blank_line_inside() {
        let err = decode_level("-1 -1 -1 -1\n\n-1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(err, LevelError::RowLength { line: 2, found: 0, .. }));
    }

    #[test]
    fn test_decode_rejects_out_of_range_index() {
        let err = decode_level("-1 147 -1 -1\n-1 -1 -1 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(
            err,
            LevelError::TileOutOfRange {
                line: 1,
                column: 2,
                value: 147,
                tile_count: 147
            }
        ));
        let err = decode_level("-1 -1 -1 -1\n-1 -1 -2 -1\n", 4, 2, 147).unwrap_err();
        assert!(matches!(err, LevelError::TileOutOfRange { value: -2, .. }));
    }

    #[test]
    fn test_resolve_name() {
        let dir = Path::new("Levels");
        assert_eq!(
            level_path(dir, "castle").unwrap(),
            PathBuf::from("Levels/castle.txt")
        );
        assert_eq!(
            level_path(dir, " castle.txt ").unwrap(),
            PathBuf::from("Levels/castle.txt")
        );
        assert!(matches!(
            level_path(dir, "../etc/passwd"),
            Err(LevelError::InvalidName(_))
        ));
        assert!(level_path(dir, "").is_err());
        assert!(level_path(dir, "..").is_err());
        assert!(level_path(dir, ".txt").is_ok());
    }
}
