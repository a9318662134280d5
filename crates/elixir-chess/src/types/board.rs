//! Board cells and the 8x8 grid.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceType, Player};

/// Number of rows and columns.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the board, always in bounds.
///
/// Serialized as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[u8; 2]")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Create a cell from row and column (0-7).
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a cell from untrusted signed coordinates.
    #[must_use]
    pub fn from_coords(row: i64, col: i64) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The cell `(dr, dc)` away, if it is still on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Self::new(row, col)
    }

    /// Iterate over all 64 cells, row by row.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self { row, col }))
    }
}

impl From<Cell> for [u8; 2] {
    fn from(c: Cell) -> Self {
        [c.row, c.col]
    }
}

impl TryFrom<[u8; 2]> for Cell {
    type Error = &'static str;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or("cell out of bounds")
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Back rank order, column 0 to 7.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 grid. Each cell holds at most one piece.
///
/// Serialized as an array of 8 rows, each an array of 8 `piece | null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The starting layout: player 1 on rows 0-1, player 2 mirrored on rows 6-7.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (player, back, pawns) in [(Player::One, 0, 1), (Player::Two, 7, 6)] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(*kind, player));
                board.cells[pawns][col] = Some(Piece::new(PieceType::Pawn, player));
            }
        }
        board
    }

    /// The piece standing on `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Piece> {
        self.cells[usize::from(cell.row)][usize::from(cell.col)].as_ref()
    }

    /// Mutable access to the piece standing on `cell`.
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut Piece> {
        self.cells[usize::from(cell.row)][usize::from(cell.col)].as_mut()
    }

    /// Returns true if no piece stands on `cell`.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Put `piece` on `cell`, returning whatever stood there before.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Option<Piece> {
        self.cells[usize::from(cell.row)][usize::from(cell.col)].replace(piece)
    }

    /// Remove and return the piece on `cell`.
    pub fn take(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[usize::from(cell.row)][usize::from(cell.col)].take()
    }

    /// Iterate over occupied cells, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.get(cell).map(|piece| (cell, piece)))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn cell_bounds() {
        assert!(Cell::new(0, 0).is_some());
        assert!(Cell::new(7, 7).is_some());
        assert!(Cell::new(8, 0).is_none());
        assert!(Cell::from_coords(-1, 3).is_none());
        assert!(Cell::from_coords(3, 300).is_none());
        assert_eq!(Cell::from_coords(2, 5), Some(cell(2, 5)));
    }

    #[test]
    fn cell_offset_stays_on_board() {
        assert_eq!(cell(0, 0).offset(1, 1), Some(cell(1, 1)));
        assert!(cell(0, 0).offset(-1, 0).is_none());
        assert!(cell(7, 7).offset(0, 1).is_none());
        assert_eq!(Cell::all().count(), 64);
    }

    #[test]
    fn cell_serializes_as_pair() {
        assert_eq!(serde_json::to_string(&cell(1, 6)).unwrap(), "[1,6]");
        assert!(serde_json::from_str::<Cell>("[8,0]").is_err());
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);

        for col in 0..8 {
            let p1 = board.get(cell(1, col)).unwrap();
            assert_eq!(p1.kind(), PieceType::Pawn);
            assert_eq!(p1.owner(), Player::One);
            let p2 = board.get(cell(6, col)).unwrap();
            assert_eq!(p2.kind(), PieceType::Pawn);
            assert_eq!(p2.owner(), Player::Two);
        }

        assert_eq!(board.get(cell(0, 3)).unwrap().kind(), PieceType::Queen);
        assert_eq!(board.get(cell(0, 4)).unwrap().kind(), PieceType::King);
        assert_eq!(board.get(cell(7, 3)).unwrap().kind(), PieceType::Queen);
        assert_eq!(board.get(cell(7, 4)).unwrap().kind(), PieceType::King);
        assert_eq!(board.get(cell(7, 1)).unwrap().owner(), Player::Two);
        assert!(board.is_empty(cell(4, 4)));
    }

    #[test]
    fn place_and_take() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceType::Rook, Player::Two);
        assert!(board.place(cell(3, 3), rook).is_none());
        assert_eq!(board.get(cell(3, 3)), Some(&rook));
        assert_eq!(board.take(cell(3, 3)), Some(rook));
        assert!(board.is_empty(cell(3, 3)));
    }

    #[test]
    fn board_serializes_as_rows() {
        let json = serde_json::to_value(Board::starting()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert!(rows[3].as_array().unwrap().iter().all(|c| c.is_null()));
        assert_eq!(rows[0][4]["type"], "king");
        assert_eq!(rows[7][0]["owner"], 2);
    }
}
