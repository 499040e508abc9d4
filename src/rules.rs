// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move legality. Everything in this module is a pure function of a borrowed
//! `Board`; nothing here mutates state.
//!
//! There is no notion of check. A move is legal when the piece can make that
//! shape of move, nothing stands in the way of a slide, and the destination
//! does not hold a piece of the mover's own color.
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Piece, Square, TableIndex};

/// A per-kind legality rule. Rules are only consulted once the origin is
/// known to hold `piece` and the destination is known not to hold a piece of
/// the same color.
type Rule = fn(&Board, Piece, Square, Square) -> bool;

// Indexed by `PieceKind` discriminant.
static RULES: [Rule; 6] = [
    pawn_rule,
    knight_rule,
    bishop_rule,
    rook_rule,
    queen_rule,
    king_rule,
];

/// Returns whether the piece standing on `from` may move to `to`.
///
/// An empty origin is never a legal move, and neither is a move onto a piece
/// of the mover's own color. Since the mover itself stands on `from`, that
/// second rule also rejects a "move" with `from == to`.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => {
            trace!("{} -> {}: no piece at origin", from, to);
            return false;
        }
    };

    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            trace!("{} -> {}: {} would capture its own side", from, to, piece);
            return false;
        }
    }

    let legal = RULES[piece.kind.as_index()](board, piece, from, to);
    if !legal {
        trace!("{} -> {}: not a legal {} move", from, to, piece.kind);
    }

    legal
}

/// Returns whether every square strictly between `from` and `to` is empty.
/// Neither endpoint is examined.
///
/// Only straight and diagonal lines have a path; for any other pair of
/// squares this returns false.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (row_diff, col_diff) = deltas(from, to);
    let (row_dist, col_dist) = (row_diff.abs(), col_diff.abs());
    if row_dist != 0 && col_dist != 0 && row_dist != col_dist {
        return false;
    }

    let (row_step, col_step) = (row_diff.signum(), col_diff.signum());
    let distance = row_dist.max(col_dist);
    for step in 1..distance {
        // every intermediate square lies strictly inside the segment, so it
        // is always on the board.
        let between = Square::new(
            (from.row() as i32 + row_step * step) as usize,
            (from.col() as i32 + col_step * step) as usize,
        );
        if board.piece_at(between).is_some() {
            trace!("{} -> {}: blocked at {}", from, to, between);
            return false;
        }
    }

    true
}

/// Every square the piece standing on `from` may legally move to. The set is
/// empty if `from` is empty.
pub fn destinations(board: &Board, from: Square) -> Bitboard {
    let mut targets = Bitboard::none();
    if board.piece_at(from).is_none() {
        return targets;
    }

    for idx in 0..64 {
        let to = Square::from_index(idx);
        if is_valid_move(board, from, to) {
            targets.set(to);
        }
    }

    targets
}

//
// Per-kind rules
//

fn pawn_rule(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let direction = piece.color.pawn_direction();
    let (row_delta, col_delta) = deltas(from, to);
    let target = board.piece_at(to);

    match col_delta.abs() {
        0 => {
            if target.is_some() {
                // pawns never capture straight ahead.
                return false;
            }

            if row_delta == direction {
                return true;
            }

            if from.row() == piece.color.pawn_row() && row_delta == 2 * direction {
                let skipped = Square::new((from.row() as i32 + direction) as usize, from.col());
                return board.piece_at(skipped).is_none();
            }

            false
        }
        1 => {
            // No en-passant: a diagonal step needs an enemy on the
            // destination itself.
            row_delta == direction
                && target.map_or(false, |captured| captured.color != piece.color)
        }
        _ => false,
    }
}

fn knight_rule(_: &Board, _: Piece, from: Square, to: Square) -> bool {
    match abs_deltas(from, to) {
        (2, 1) | (1, 2) => true,
        _ => false,
    }
}

fn bishop_rule(board: &Board, _: Piece, from: Square, to: Square) -> bool {
    let (row_diff, col_diff) = abs_deltas(from, to);
    row_diff == col_diff && is_path_clear(board, from, to)
}

fn rook_rule(board: &Board, _: Piece, from: Square, to: Square) -> bool {
    let straight = from.row() == to.row() || from.col() == to.col();
    straight && is_path_clear(board, from, to)
}

fn queen_rule(board: &Board, _: Piece, from: Square, to: Square) -> bool {
    let (row_diff, col_diff) = abs_deltas(from, to);
    let diagonal = row_diff == col_diff;
    let straight = row_diff == 0 || col_diff == 0;
    (diagonal || straight) && is_path_clear(board, from, to)
}

fn king_rule(_: &Board, _: Piece, from: Square, to: Square) -> bool {
    let (row_diff, col_diff) = abs_deltas(from, to);
    row_diff <= 1 && col_diff <= 1
}

//
// Helper functions
//

fn deltas(from: Square, to: Square) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

fn abs_deltas(from: Square, to: Square) -> (i32, i32) {
    let (row_delta, col_delta) = deltas(from, to);
    (row_delta.abs(), col_delta.abs())
}

#[cfg(test)]
mod tests {
    use super::{destinations, is_valid_move};
    use crate::board::Board;
    use crate::types::{Color, Piece, PieceKind, Square, PIECE_KINDS};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    fn lone(kind: PieceKind, color: Color, at: Square) -> Board {
        let mut board = Board::empty();
        board.place(at, Piece::new(kind, color));
        board
    }

    #[test]
    fn empty_origin_is_illegal() {
        let board = Board::initial_setup();
        assert!(!is_valid_move(&board, sq(4, 4), sq(5, 4)));
    }

    #[test]
    fn self_capture_is_illegal_for_every_kind() {
        for &kind in PIECE_KINDS.iter() {
            for &color in &[Color::White, Color::Black] {
                let mut board = lone(kind, color, sq(4, 4));
                // a friendly piece on every neighbouring square and every
                // knight-jump square.
                for &(dr, dc) in &[
                    (-1, -1),
                    (-1, 0),
                    (-1, 1),
                    (0, -1),
                    (0, 1),
                    (1, -1),
                    (1, 0),
                    (1, 1),
                    (-2, -1),
                    (-2, 1),
                    (2, -1),
                    (2, 1),
                    (-1, -2),
                    (-1, 2),
                    (1, -2),
                    (1, 2),
                ] {
                    let target = sq(4, 4).offset(dr, dc).unwrap();
                    board.place(target, Piece::new(PieceKind::Pawn, color));
                }

                for target in board.pieces(color) {
                    assert!(
                        !is_valid_move(&board, sq(4, 4), target),
                        "{} {} captured its own piece on {}",
                        color,
                        kind,
                        target
                    );
                }
            }
        }
    }

    // The mover occupies its own origin, so the self-capture rule turns every
    // zero-displacement move away, even for sliders whose shape tests would
    // accept a zero delta.
    #[test]
    fn null_move_is_illegal_for_every_kind() {
        for &kind in PIECE_KINDS.iter() {
            let board = lone(kind, Color::White, sq(4, 4));
            assert!(!is_valid_move(&board, sq(4, 4), sq(4, 4)), "{}", kind);
        }
    }

    mod pawn {
        use super::{lone, sq};
        use crate::rules::is_valid_move;
        use crate::types::{Color, Piece, PieceKind};

        #[test]
        fn white_advances() {
            let board = lone(PieceKind::Pawn, Color::White, sq(6, 4));
            assert!(is_valid_move(&board, sq(6, 4), sq(5, 4)));
            assert!(is_valid_move(&board, sq(6, 4), sq(4, 4)));
            assert!(!is_valid_move(&board, sq(6, 4), sq(3, 4)));
        }

        #[test]
        fn white_never_moves_backwards() {
            let board = lone(PieceKind::Pawn, Color::White, sq(4, 4));
            assert!(!is_valid_move(&board, sq(4, 4), sq(5, 4)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(6, 4)));
        }

        #[test]
        fn black_advances_toward_higher_rows() {
            let board = lone(PieceKind::Pawn, Color::Black, sq(1, 3));
            assert!(is_valid_move(&board, sq(1, 3), sq(2, 3)));
            assert!(is_valid_move(&board, sq(1, 3), sq(3, 3)));
            assert!(!is_valid_move(&board, sq(1, 3), sq(0, 3)));
            assert!(!is_valid_move(&board, sq(1, 3), sq(4, 3)));
        }

        #[test]
        fn double_advance_only_from_start_row() {
            let board = lone(PieceKind::Pawn, Color::White, sq(5, 4));
            assert!(is_valid_move(&board, sq(5, 4), sq(4, 4)));
            assert!(!is_valid_move(&board, sq(5, 4), sq(3, 4)));
        }

        #[test]
        fn double_advance_blocked_by_skipped_square() {
            for &color in &[Color::White, Color::Black] {
                let mut board = lone(PieceKind::Pawn, Color::White, sq(6, 4));
                board.place(sq(5, 4), Piece::new(PieceKind::Knight, color));
                assert!(!is_valid_move(&board, sq(6, 4), sq(4, 4)));
            }
        }

        #[test]
        fn advances_blocked_by_occupied_destination() {
            let mut board = lone(PieceKind::Pawn, Color::White, sq(6, 4));
            board.place(sq(4, 4), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(!is_valid_move(&board, sq(6, 4), sq(4, 4)));

            board.place(sq(5, 4), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(!is_valid_move(&board, sq(6, 4), sq(5, 4)));
        }

        #[test]
        fn diagonal_capture() {
            let mut board = lone(PieceKind::Pawn, Color::White, sq(4, 4));
            board.place(sq(3, 3), Piece::new(PieceKind::Pawn, Color::Black));
            board.place(sq(3, 5), Piece::new(PieceKind::Rook, Color::Black));
            assert!(is_valid_move(&board, sq(4, 4), sq(3, 3)));
            assert!(is_valid_move(&board, sq(4, 4), sq(3, 5)));
        }

        #[test]
        fn no_diagonal_onto_empty_square() {
            let board = lone(PieceKind::Pawn, Color::White, sq(4, 4));
            assert!(!is_valid_move(&board, sq(4, 4), sq(3, 3)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(3, 5)));
        }

        #[test]
        fn no_backwards_capture() {
            let mut board = lone(PieceKind::Pawn, Color::White, sq(4, 4));
            board.place(sq(5, 3), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(!is_valid_move(&board, sq(4, 4), sq(5, 3)));
        }

        #[test]
        fn no_wide_diagonal() {
            let mut board = lone(PieceKind::Pawn, Color::Black, sq(1, 1));
            board.place(sq(3, 3), Piece::new(PieceKind::Pawn, Color::White));
            assert!(!is_valid_move(&board, sq(1, 1), sq(3, 3)));
            assert!(!is_valid_move(&board, sq(1, 1), sq(2, 3)));
        }
    }

    mod sliders {
        use super::{lone, sq};
        use crate::rules::{is_path_clear, is_valid_move};
        use crate::types::{Color, Piece, PieceKind};

        #[test]
        fn rook_blocked_by_own_piece() {
            let mut board = lone(PieceKind::Rook, Color::Black, sq(0, 0));
            board.place(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
            assert!(!is_valid_move(&board, sq(0, 0), sq(0, 7)));
            assert!(is_valid_move(&board, sq(0, 0), sq(0, 3)));
        }

        #[test]
        fn rook_captures_first_enemy_only() {
            let mut board = lone(PieceKind::Rook, Color::White, sq(7, 0));
            board.place(sq(3, 0), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(is_valid_move(&board, sq(7, 0), sq(3, 0)));
            assert!(!is_valid_move(&board, sq(7, 0), sq(2, 0)));
        }

        #[test]
        fn rook_does_not_move_diagonally() {
            let board = lone(PieceKind::Rook, Color::White, sq(4, 4));
            assert!(!is_valid_move(&board, sq(4, 4), sq(5, 5)));
            assert!(is_valid_move(&board, sq(4, 4), sq(4, 0)));
            assert!(is_valid_move(&board, sq(4, 4), sq(0, 4)));
        }

        #[test]
        fn bishop_requires_exact_diagonal() {
            let board = lone(PieceKind::Bishop, Color::White, sq(4, 4));
            assert!(is_valid_move(&board, sq(4, 4), sq(6, 6)));
            assert!(is_valid_move(&board, sq(4, 4), sq(1, 7)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(6, 7)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(4, 6)));
        }

        #[test]
        fn bishop_blocked() {
            let mut board = lone(PieceKind::Bishop, Color::White, sq(7, 2));
            board.place(sq(6, 3), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(is_valid_move(&board, sq(7, 2), sq(6, 3)));
            assert!(!is_valid_move(&board, sq(7, 2), sq(5, 4)));
        }

        #[test]
        fn queen_straight_and_diagonal() {
            let board = lone(PieceKind::Queen, Color::White, sq(4, 4));
            assert!(is_valid_move(&board, sq(4, 4), sq(4, 0)));
            assert!(is_valid_move(&board, sq(4, 4), sq(0, 4)));
            assert!(is_valid_move(&board, sq(4, 4), sq(0, 0)));
            assert!(is_valid_move(&board, sq(4, 4), sq(7, 1)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(6, 7)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(6, 5)));
        }

        #[test]
        fn queen_blocked() {
            let mut board = lone(PieceKind::Queen, Color::White, sq(4, 4));
            board.place(sq(3, 3), Piece::new(PieceKind::Pawn, Color::White));
            board.place(sq(4, 6), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(!is_valid_move(&board, sq(4, 4), sq(2, 2)));
            assert!(is_valid_move(&board, sq(4, 4), sq(4, 6)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(4, 7)));
        }

        #[test]
        fn path_excludes_endpoints() {
            let mut board = lone(PieceKind::Rook, Color::White, sq(0, 0));
            board.place(sq(0, 7), Piece::new(PieceKind::Rook, Color::White));
            assert!(is_path_clear(&board, sq(0, 0), sq(0, 7)));

            board.place(sq(0, 1), Piece::new(PieceKind::Pawn, Color::Black));
            assert!(!is_path_clear(&board, sq(0, 0), sq(0, 7)));
            assert!(is_path_clear(&board, sq(0, 0), sq(0, 1)));
        }

        #[test]
        fn path_over_no_squares() {
            let board = lone(PieceKind::Queen, Color::White, sq(3, 3));
            assert!(is_path_clear(&board, sq(3, 3), sq(3, 3)));
            assert!(is_path_clear(&board, sq(3, 3), sq(2, 2)));
        }

        #[test]
        fn path_walks_every_direction() {
            let mut board = lone(PieceKind::Queen, Color::White, sq(3, 3));
            for &(row, col) in &[(1, 1), (1, 3), (1, 5), (3, 5), (5, 5), (5, 3), (5, 1), (3, 1)] {
                assert!(is_path_clear(&board, sq(3, 3), sq(row, col)));
            }

            for &(row, col) in &[(2, 2), (2, 3), (2, 4), (3, 4), (4, 4), (4, 3), (4, 2), (3, 2)] {
                board.place(sq(row, col), Piece::new(PieceKind::Pawn, Color::Black));
            }

            for &(row, col) in &[(1, 1), (1, 3), (1, 5), (3, 5), (5, 5), (5, 3), (5, 1), (3, 1)] {
                assert!(!is_path_clear(&board, sq(3, 3), sq(row, col)));
            }
        }

        #[test]
        fn no_path_off_line() {
            let board = lone(PieceKind::Queen, Color::White, sq(3, 3));
            assert!(!is_path_clear(&board, sq(3, 3), sq(5, 4)));
        }
    }

    mod leapers {
        use super::{lone, sq};
        use crate::rules::is_valid_move;
        use crate::types::{Color, Piece, PieceKind};

        const KNIGHT_JUMPS: [(i32, i32); 8] = [
            (-2, -1),
            (-2, 1),
            (-1, -2),
            (-1, 2),
            (1, -2),
            (1, 2),
            (2, -1),
            (2, 1),
        ];

        #[test]
        fn knight_jumps() {
            let board = lone(PieceKind::Knight, Color::White, sq(4, 4));
            for &(dr, dc) in KNIGHT_JUMPS.iter() {
                let target = sq(4, 4).offset(dr, dc).unwrap();
                assert!(is_valid_move(&board, sq(4, 4), target), "{}", target);
            }

            assert!(!is_valid_move(&board, sq(4, 4), sq(6, 6)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(4, 6)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(5, 4)));
        }

        #[test]
        fn knight_ignores_surrounding_pieces() {
            let mut board = lone(PieceKind::Knight, Color::White, sq(4, 4));
            for row in 3..6 {
                for col in 3..6 {
                    if (row, col) != (4, 4) {
                        board.place(sq(row, col), Piece::new(PieceKind::Pawn, Color::White));
                    }
                }
            }

            for &(dr, dc) in KNIGHT_JUMPS.iter() {
                let target = sq(4, 4).offset(dr, dc).unwrap();
                assert!(is_valid_move(&board, sq(4, 4), target), "{}", target);
            }
        }

        #[test]
        fn king_steps_one_square() {
            let board = lone(PieceKind::King, Color::Black, sq(4, 4));
            for row in 3..6 {
                for col in 3..6 {
                    if (row, col) != (4, 4) {
                        assert!(is_valid_move(&board, sq(4, 4), sq(row, col)));
                    }
                }
            }

            assert!(!is_valid_move(&board, sq(4, 4), sq(4, 6)));
            assert!(!is_valid_move(&board, sq(4, 4), sq(2, 4)));
        }

        #[test]
        fn king_may_step_next_to_enemy_king() {
            // there is no check detection; kings go where they like.
            let mut board = lone(PieceKind::King, Color::White, sq(4, 4));
            board.place(sq(2, 4), Piece::new(PieceKind::King, Color::Black));
            assert!(is_valid_move(&board, sq(4, 4), sq(3, 4)));
        }
    }

    #[test]
    fn start_position_destinations() {
        let board = Board::initial_setup();
        let knight: Vec<_> = destinations(&board, sq(7, 1)).iter().collect();
        assert_eq!(vec![sq(5, 0), sq(5, 2)], knight);

        let pawn: Vec<_> = destinations(&board, sq(6, 4)).iter().collect();
        assert_eq!(vec![sq(4, 4), sq(5, 4)], pawn);

        assert!(destinations(&board, sq(7, 0)).empty());
        assert!(destinations(&board, sq(7, 3)).empty());
        assert!(destinations(&board, sq(4, 4)).empty());
    }

    #[test]
    fn queen_destinations_on_open_board() {
        let board = lone(PieceKind::Queen, Color::White, sq(4, 4));
        assert_eq!(27, destinations(&board, sq(4, 4)).count());
    }
}
