use crate::types::Cell;

/// Copy of the board grid as raw cell ids, row-major.
///
/// This is what renderers consume: no rule logic, just ids that map through
/// [`Cell::from_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<u8>,
}

impl BoardSnapshot {
    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.get(x, y).and_then(Cell::from_id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of cells holding a player color
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&id| Cell::from_id(id).and_then(Cell::color).is_some())
            .count()
    }
}
