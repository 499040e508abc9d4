// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;

use crate::board::Board;
use crate::moves::Move;
use crate::rules;

/// A fixed-capacity buffer of moves, sized for any layout the board accepts.
/// A side with `k` pieces can move each of them to at most the `64 - k`
/// squares it does not occupy, and `k * (64 - k)` never exceeds 1024.
pub type MoveVec = ArrayVec<[Move; 1024]>;

#[derive(Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Generates every legal move for the side to move, ordered by origin
    /// square and then by destination square.
    pub fn generate_moves(&self, board: &Board, moves: &mut MoveVec) {
        let to_move = board.current_turn();
        for source in board.pieces(to_move) {
            for destination in rules::destinations(board, source) {
                moves.push(Move::new(source, destination));
            }
        }
    }
}
