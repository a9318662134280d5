//! Legal destination generation per piece archetype.
//!
//! Movement is ordinary chess movement without any of the special rules:
//! no double pawn step, en passant, promotion, castling or check. A piece may
//! target an empty cell or a cell held by the opponent, never its own side.

use crate::types::{Board, Cell, Piece, PieceType};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// All cells `piece`, standing on `from`, may target on `board`.
///
/// The result has no duplicates and a deterministic order. A target holding
/// an opponent piece means an attack, not a relocation; see
/// [`GameState::apply_move`](crate::engine::GameState::apply_move).
#[must_use]
pub fn legal_destinations(piece: &Piece, from: Cell, board: &Board) -> Vec<Cell> {
    match piece.kind() {
        PieceType::Pawn => pawn_destinations(piece, from, board),
        PieceType::Knight => step_destinations(piece, from, board, &KNIGHT_JUMPS),
        PieceType::King => step_destinations(piece, from, board, &ALL_DIRECTIONS),
        PieceType::Rook => ray_destinations(piece, from, board, &ORTHOGONAL),
        PieceType::Bishop => ray_destinations(piece, from, board, &DIAGONAL),
        PieceType::Queen => ray_destinations(piece, from, board, &ALL_DIRECTIONS),
    }
}

/// Returns true if `to` is among the legal destinations of `piece` on `from`.
#[must_use]
pub fn is_legal_destination(piece: &Piece, from: Cell, to: Cell, board: &Board) -> bool {
    legal_destinations(piece, from, board).contains(&to)
}

fn pawn_destinations(piece: &Piece, from: Cell, board: &Board) -> Vec<Cell> {
    let forward = piece.owner().forward();
    let mut out = Vec::with_capacity(3);

    if let Some(ahead) = from.offset(forward, 0) {
        if board.is_empty(ahead) {
            out.push(ahead);
        }
    }

    // Diagonals only ever capture.
    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if board.get(target).is_some_and(|other| piece.is_enemy_of(other)) {
            out.push(target);
        }
    }

    out
}

fn step_destinations(piece: &Piece, from: Cell, board: &Board, steps: &[(i8, i8)]) -> Vec<Cell> {
    steps
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&target| match board.get(target) {
            None => true,
            Some(other) => piece.is_enemy_of(other),
        })
        .collect()
}

fn ray_destinations(piece: &Piece, from: Cell, board: &Board, directions: &[(i8, i8)]) -> Vec<Cell> {
    let mut out = Vec::new();
    for &(dr, dc) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc) {
            match board.get(next) {
                None => out.push(next),
                Some(other) => {
                    if piece.is_enemy_of(other) {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
        cells.sort();
        cells
    }

    fn lone(kind: PieceType, owner: Player, at: Cell) -> (Board, Piece) {
        let mut board = Board::empty();
        let piece = Piece::new(kind, owner);
        board.place(at, piece);
        (board, piece)
    }

    #[test]
    fn pawn_steps_forward_per_player() {
        let board = Board::starting();
        let p1 = *board.get(cell(1, 0)).unwrap();
        assert_eq!(legal_destinations(&p1, cell(1, 0), &board), vec![cell(2, 0)]);

        let p2 = *board.get(cell(6, 4)).unwrap();
        assert_eq!(legal_destinations(&p2, cell(6, 4), &board), vec![cell(5, 4)]);
    }

    #[test]
    fn pawn_is_blocked_straight_ahead_by_either_side() {
        let (mut board, pawn) = lone(PieceType::Pawn, Player::One, cell(3, 3));
        board.place(cell(4, 3), Piece::new(PieceType::Pawn, Player::Two));
        assert!(legal_destinations(&pawn, cell(3, 3), &board).is_empty());

        board.place(cell(4, 3), Piece::new(PieceType::Pawn, Player::One));
        assert!(legal_destinations(&pawn, cell(3, 3), &board).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let (mut board, pawn) = lone(PieceType::Pawn, Player::One, cell(1, 0));
        board.place(cell(2, 1), Piece::new(PieceType::Knight, Player::Two));
        assert_eq!(
            sorted(legal_destinations(&pawn, cell(1, 0), &board)),
            vec![cell(2, 0), cell(2, 1)]
        );

        board.place(cell(2, 1), Piece::new(PieceType::Knight, Player::One));
        assert_eq!(legal_destinations(&pawn, cell(1, 0), &board), vec![cell(2, 0)]);
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let (board, pawn) = lone(PieceType::Pawn, Player::One, cell(7, 2));
        assert!(legal_destinations(&pawn, cell(7, 2), &board).is_empty());
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::starting();
        let knight = *board.get(cell(0, 1)).unwrap();
        assert_eq!(
            sorted(legal_destinations(&knight, cell(0, 1), &board)),
            vec![cell(2, 0), cell(2, 2)]
        );
    }

    #[test]
    fn knight_in_center_has_eight_targets() {
        let (board, knight) = lone(PieceType::Knight, Player::Two, cell(4, 4));
        assert_eq!(legal_destinations(&knight, cell(4, 4), &board).len(), 8);
    }

    #[test]
    fn king_steps_one_square() {
        let (mut board, king) = lone(PieceType::King, Player::One, cell(0, 0));
        assert_eq!(
            sorted(legal_destinations(&king, cell(0, 0), &board)),
            vec![cell(0, 1), cell(1, 0), cell(1, 1)]
        );

        board.place(cell(1, 1), Piece::new(PieceType::Pawn, Player::One));
        board.place(cell(0, 1), Piece::new(PieceType::Pawn, Player::Two));
        assert_eq!(
            sorted(legal_destinations(&king, cell(0, 0), &board)),
            vec![cell(0, 1), cell(1, 0)]
        );
    }

    #[test]
    fn rook_on_empty_board_sweeps_row_and_column() {
        let (board, rook) = lone(PieceType::Rook, Player::One, cell(3, 3));
        let moves = legal_destinations(&rook, cell(3, 3), &board);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|c| c.row() == 3 || c.col() == 3));
    }

    #[test]
    fn own_blocker_stops_ray_before_it() {
        let (mut board, rook) = lone(PieceType::Rook, Player::One, cell(0, 0));
        board.place(cell(3, 0), Piece::new(PieceType::Pawn, Player::One));
        let moves = legal_destinations(&rook, cell(0, 0), &board);
        let column: Vec<_> = sorted(moves.into_iter().filter(|c| c.col() == 0).collect());
        assert_eq!(column, vec![cell(1, 0), cell(2, 0)]);
    }

    #[test]
    fn enemy_blocker_is_the_last_cell_of_the_ray() {
        let (mut board, rook) = lone(PieceType::Rook, Player::One, cell(0, 0));
        board.place(cell(3, 0), Piece::new(PieceType::Pawn, Player::Two));
        let moves = legal_destinations(&rook, cell(0, 0), &board);
        let column: Vec<_> = sorted(moves.into_iter().filter(|c| c.col() == 0).collect());
        assert_eq!(column, vec![cell(1, 0), cell(2, 0), cell(3, 0)]);
    }

    #[test]
    fn bishop_only_moves_diagonally() {
        let (board, bishop) = lone(PieceType::Bishop, Player::Two, cell(0, 0));
        let moves = legal_destinations(&bishop, cell(0, 0), &board);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|c| c.row() == c.col()));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let (board, queen) = lone(PieceType::Queen, Player::One, cell(3, 3));
        assert_eq!(legal_destinations(&queen, cell(3, 3), &board).len(), 27);
    }

    #[test]
    fn starting_back_rank_sliders_are_boxed_in() {
        let board = Board::starting();
        for col in [0, 2, 3, 5, 7] {
            let piece = *board.get(cell(0, col)).unwrap();
            assert!(legal_destinations(&piece, cell(0, col), &board).is_empty());
        }
    }

    #[test]
    fn never_targets_own_pieces_or_repeats_cells() {
        let board = Board::starting();
        for (from, piece) in board.pieces() {
            let moves = legal_destinations(piece, from, &board);
            let mut unique = moves.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), moves.len(), "duplicate target for {from}");
            for to in moves {
                assert!(
                    board.get(to).map_or(true, |other| piece.is_enemy_of(other)),
                    "{} at {from} targets own piece at {to}",
                    piece.kind()
                );
            }
        }
    }

    #[test]
    fn is_legal_destination_matches_generation() {
        let board = Board::starting();
        let pawn = *board.get(cell(1, 3)).unwrap();
        assert!(is_legal_destination(&pawn, cell(1, 3), cell(2, 3), &board));
        assert!(!is_legal_destination(&pawn, cell(1, 3), cell(3, 3), &board));
    }
}
