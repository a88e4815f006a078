/// Passability of a single cell in the maze.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// A carved cell that agents can occupy.
    Open,
    /// An uncarved cell.
    #[default]
    Wall,
}

impl GridCell {
    pub fn is_open(self) -> bool {
        matches!(self, GridCell::Open)
    }
}
