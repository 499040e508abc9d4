// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A rules engine for chess with basic piece movement only: no check, no
//! castling, no en-passant and no promotion.
//!
//! The engine is a `Board` plus the pure functions in `rules`. A host asks
//! `rules::is_valid_move` whether a move is legal, and if it is, applies it
//! with `Board::apply_move` and hands the turn over with
//! `Board::advance_turn`. `Game` packages that flow up for click-driven
//! hosts.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod bitboard;
mod board;
mod config;
mod console;
mod game;
mod move_generator;
mod moves;
mod perft;
pub mod rules;
mod types;

pub use bitboard::{Bitboard, BitboardIterator};
pub use board::{Board, BoardDisplay, LayoutParseError, SymbolStyle, START_LAYOUT};
pub use config::{Config, ConfigError};
pub use console::ConsoleServer;
pub use game::{ClickOutcome, Game, MoveError, Selection};
pub use move_generator::{MoveGenerator, MoveVec};
pub use moves::Move;
pub use perft::perft;
pub use types::{Color, Piece, PieceKind, Square, COLORS, PIECE_KINDS};
