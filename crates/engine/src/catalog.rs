//! Piece catalog - the built-in standard set and the text resource format
//!
//! Resource files hold pieces as coordinate lists:
//!
//! ```text
//! 0,0&0,0;1,0&0,0;1,0;2,0
//! ```
//!
//! `&` separates pieces, `;` separates cells and `,` separates x from y.
//! Whitespace around any token is ignored, so files may break lines freely.
//! Coordinates must already be normalized; connectivity is not checked.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Offset, Piece, ShapeError};

const PIECE_SEPARATOR: char = '&';
const CELL_SEPARATOR: char = ';';
const COORD_SEPARATOR: char = ',';

/// The 21 standard pieces: 1 monomino, 1 domino, 2 trominoes,
/// 5 tetrominoes and 12 pentominoes.
pub const STANDARD_SHAPES: [&[Offset]; 21] = [
    &[(0, 0)],
    &[(0, 0), (1, 0)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 1)],
    &[(0, 0), (0, 1), (1, 1), (1, 2), (1, 3)],
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
    &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
    &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
];

/// Why a catalog could not be loaded
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A cell token is not `x,y` with two integers
    Parse { piece: usize, token: String },
    /// The cells parsed but do not form a valid piece
    Shape { piece: usize, source: ShapeError },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            CatalogError::Parse { piece, token } => {
                write!(f, "piece #{}: bad cell {:?}", piece + 1, token)
            }
            CatalogError::Shape { piece, source } => write!(f, "piece #{}: {}", piece + 1, source),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Shape { source, .. } => Some(source),
            CatalogError::Parse { .. } => None,
        }
    }
}

/// Build the standard 21-piece catalog
pub fn standard_pieces() -> Result<Vec<Piece>, ShapeError> {
    STANDARD_SHAPES.iter().map(|cells| Piece::new(cells)).collect()
}

/// Parse pieces from resource text
pub fn parse_catalog(text: &str) -> Result<Vec<Piece>, CatalogError> {
    let mut pieces = Vec::new();
    for raw in text.split(PIECE_SEPARATOR) {
        if raw.trim().is_empty() {
            continue;
        }
        let piece = pieces.len();
        let mut cells = Vec::new();
        for token in raw.split(CELL_SEPARATOR) {
            if token.trim().is_empty() {
                continue;
            }
            cells.push(parse_cell(token).ok_or_else(|| CatalogError::Parse {
                piece,
                token: token.trim().to_string(),
            })?);
        }
        pieces.push(Piece::new(&cells).map_err(|source| CatalogError::Shape { piece, source })?);
    }
    Ok(pieces)
}

fn parse_cell(token: &str) -> Option<Offset> {
    let (x, y) = token.split_once(COORD_SEPARATOR)?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Load every `*.txt` file under `dir`, in file name order
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<Piece>, CatalogError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| CatalogError::Io { path, source }
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();

    let mut pieces = Vec::new();
    for path in &files {
        let text = fs::read_to_string(path).map_err(io_err(path))?;
        let mut parsed = parse_catalog(&text)?;
        tracing::debug!(path = %path.display(), count = parsed.len(), "loaded piece file");
        pieces.append(&mut parsed);
    }
    tracing::info!(dir = %dir.display(), files = files.len(), count = pieces.len(), "loaded piece catalog");
    Ok(pieces)
}
