// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A game session: the board plus the square a player has picked up, driven
//! one click at a time the way a board UI would drive it.
use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::Move;
use crate::rules;
use crate::types::{Color, Piece, Square};

/// The origin square a player has chosen, along with the piece that stood
/// there when it was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
}

/// What happened in response to a click on a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up. `destinations` is every
    /// square it may move to.
    Selected {
        square: Square,
        destinations: Bitboard,
    },

    /// The selected piece moved and the turn passed to the other side.
    Moved { mov: Move, captured: Option<Piece> },

    /// The click was not a legal destination for the selected piece. The
    /// selection is dropped and the turn does not change.
    Deselected,

    /// Nothing was selected and the click did not land on a piece of the
    /// side to move.
    Ignored,
}

/// Possible errors that can arise when playing a move directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    NoPieceAtSource,
    NotYourTurn,
    IllegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource => write!(f, "no piece on the origin square"),
            MoveError::NotYourTurn => write!(f, "that piece belongs to the side not on move"),
            MoveError::IllegalMove => write!(f, "illegal move"),
        }
    }
}

pub struct Game {
    board: Board,
    start: Board,
    selection: Option<Selection>,
}

impl Game {
    /// A new game from the standard starting position.
    pub fn new() -> Game {
        Game::from_board(Board::initial_setup())
    }

    /// A new game from an arbitrary position. `reset` returns to this
    /// position.
    pub fn from_board(board: Board) -> Game {
        Game {
            start: board.clone(),
            board,
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn turn(&self) -> Color {
        self.board.current_turn()
    }

    /// Puts the board back into the position this game started from.
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.selection = None;
        info!("game reset");
    }

    /// Handles a click on the given square.
    ///
    /// With a piece already selected, the click is a move attempt: it is
    /// played if legal, and either way the selection is cleared. Otherwise
    /// the click selects the piece on the square if it belongs to the side
    /// to move.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(selection) = self.selection.take() {
            if !rules::is_valid_move(&self.board, selection.square, square) {
                debug!("{} cannot move to {}", selection.piece, square);
                return ClickOutcome::Deselected;
            }

            let captured = self.commit(selection.square, square);
            return ClickOutcome::Moved {
                mov: Move::new(selection.square, square),
                captured,
            };
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.turn() => {
                self.selection = Some(Selection { square, piece });
                debug!("selected {} on {}", piece, square);
                ClickOutcome::Selected {
                    square,
                    destinations: rules::destinations(&self.board, square),
                }
            }
            _ => ClickOutcome::Ignored,
        }
    }

    /// Plays a move directly, without going through selection. Returns the
    /// captured piece, if any. Any pending selection is cleared whether or
    /// not the move succeeds.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        self.selection = None;
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.turn() {
            return Err(MoveError::NotYourTurn);
        }

        if !rules::is_valid_move(&self.board, from, to) {
            return Err(MoveError::IllegalMove);
        }

        Ok(self.commit(from, to))
    }

    fn commit(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.apply_move(from, to);
        self.board.advance_turn();
        match captured {
            Some(taken) => info!("{} -> {} takes {}", from, to, taken),
            None => info!("{} -> {}", from, to),
        }

        captured
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
