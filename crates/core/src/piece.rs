//! Pieces module - polyomino shapes, orientation changes and corner sets
//!
//! A piece is a set of 1 to 5 cells given as offsets from the piece origin.
//! Offsets are always normalized so the bounding box starts at (0, 0), and are
//! stored in row-major order so two pieces with the same cell set compare equal.
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward, the
//! same orientation the board uses.

use arrayvec::ArrayVec;

use crate::error::ShapeError;
use crate::types::{Color, PIECE_MAX_CELLS};

/// Offset of a single cell relative to the piece origin
pub type Offset = (i32, i32);

/// Cell storage for one piece
pub type PieceCells = ArrayVec<Offset, PIECE_MAX_CELLS>;

/// The four corner classes of a piece cell.
///
/// A cell is a top-left corner when the piece has no cell directly left of it
/// and no cell directly above it, and so on for the other three. Each corner
/// class looks outward along one diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Direction of the diagonal neighbor this corner faces
    pub fn diagonal(self) -> Offset {
        match self {
            Corner::TopLeft => (-1, -1),
            Corner::TopRight => (1, -1),
            Corner::BottomLeft => (-1, 1),
            Corner::BottomRight => (1, 1),
        }
    }

    fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// A polyomino piece with its current orientation and owner color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    cells: PieceCells,
    /// Corner sets indexed by [`Corner::index`], rebuilt on every shape change
    corners: [PieceCells; 4],
    color: Option<Color>,
}

impl Piece {
    /// Create a piece from already-normalized cell offsets.
    ///
    /// Offsets are taken as given (no shifting toward the origin), only their
    /// order is canonicalized. Connectivity is not checked.
    pub fn new(cells: &[Offset]) -> Result<Self, ShapeError> {
        if cells.is_empty() {
            return Err(ShapeError::Empty);
        }
        if cells.len() > PIECE_MAX_CELLS {
            return Err(ShapeError::TooManyCells(cells.len()));
        }

        let mut stored = PieceCells::new();
        for &(x, y) in cells {
            if stored.contains(&(x, y)) {
                return Err(ShapeError::DuplicateCell(x, y));
            }
            stored.push((x, y));
        }
        stored.sort_unstable_by_key(|&(x, y)| (y, x));

        let corners = compute_corners(&stored);
        Ok(Self {
            cells: stored,
            corners,
            color: None,
        })
    }

    /// Iterate the cell offsets of the piece, each exactly once
    pub fn cells(&self) -> impl Iterator<Item = Offset> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a piece has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box width in cells
    pub fn width(&self) -> i32 {
        let (min_x, _, max_x, _) = self.bounds();
        max_x - min_x + 1
    }

    /// Bounding box height in cells
    pub fn height(&self) -> i32 {
        let (_, min_y, _, max_y) = self.bounds();
        max_y - min_y + 1
    }

    /// Cells belonging to one corner class
    pub fn corner_cells(&self, corner: Corner) -> &[Offset] {
        &self.corners[corner.index()]
    }

    pub fn top_left(&self) -> &[Offset] {
        self.corner_cells(Corner::TopLeft)
    }

    pub fn top_right(&self) -> &[Offset] {
        self.corner_cells(Corner::TopRight)
    }

    pub fn bottom_left(&self) -> &[Offset] {
        self.corner_cells(Corner::BottomLeft)
    }

    pub fn bottom_right(&self) -> &[Offset] {
        self.corner_cells(Corner::BottomRight)
    }

    /// Owner color, once assigned
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Assign the owner color.
    ///
    /// The first assignment sticks. Returns false (and changes nothing) if the
    /// piece already belongs to a different color.
    pub fn set_color(&mut self, color: Color) -> bool {
        match self.color {
            None => {
                self.color = Some(color);
                true
            }
            Some(current) => current == color,
        }
    }

    /// True when both pieces cover the same cells, regardless of color
    pub fn same_shape(&self, other: &Piece) -> bool {
        self.cells == other.cells
    }

    /// Quarter turn about the bounding-box center: clockwise with y pointing
    /// up, so counter-clockwise as drawn on screen.
    ///
    /// The center uses integer division, so the result is shifted back to a
    /// (0, 0)-based bounding box afterwards. Four rotations give back the
    /// original cell set.
    pub fn rotate(&mut self) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let cx = min_x + (max_x - min_x) / 2;
        let cy = min_y + (max_y - min_y) / 2;

        for cell in self.cells.iter_mut() {
            let (x, y) = *cell;
            *cell = (cx + (y - cy), cy - (x - cx));
        }
        self.normalize();
    }

    /// Reflect left-to-right (`horizontal`) and/or top-to-bottom (`vertical`)
    /// across the bounding-box midlines. With both flags false nothing changes.
    pub fn mirror(&mut self, horizontal: bool, vertical: bool) {
        if !horizontal && !vertical {
            return;
        }

        let (min_x, min_y, max_x, max_y) = self.bounds();
        let cx = (min_x + max_x).div_euclid(2);
        let cy = (min_y + max_y).div_euclid(2);

        for cell in self.cells.iter_mut() {
            if horizontal {
                cell.0 = cx - (cell.0 - cx);
            }
            if vertical {
                cell.1 = cy - (cell.1 - cy);
            }
        }
        self.normalize();
    }

    /// (min_x, min_y, max_x, max_y) over all cells
    fn bounds(&self) -> (i32, i32, i32, i32) {
        self.cells.iter().fold(
            (i32::MAX, i32::MAX, i32::MIN, i32::MIN),
            |(min_x, min_y, max_x, max_y), &(x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            },
        )
    }

    /// Shift to a (0, 0)-based bounding box, restore row-major order and
    /// rebuild the corner sets.
    fn normalize(&mut self) {
        let (min_x, min_y, _, _) = self.bounds();
        for cell in self.cells.iter_mut() {
            cell.0 -= min_x;
            cell.1 -= min_y;
        }
        self.cells.sort_unstable_by_key(|&(x, y)| (y, x));
        self.corners = compute_corners(&self.cells);
    }
}

fn compute_corners(cells: &[Offset]) -> [PieceCells; 4] {
    let mut corners: [PieceCells; 4] = Default::default();
    for &(x, y) in cells {
        for corner in Corner::ALL {
            let (dx, dy) = corner.diagonal();
            // Neither edge neighbor on the diagonal's side belongs to the piece.
            if !cells.contains(&(x + dx, y)) && !cells.contains(&(x, y + dy)) {
                corners[corner.index()].push((x, y));
            }
        }
    }
    corners
}
