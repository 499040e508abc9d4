// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::convert::TryFrom;
use std::fmt;

use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, PieceKind, Square, COLORS};

/// The layout string of the standard starting position.
pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Possible errors that can arise when parsing a layout string into a `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    InvalidDigit,
    RowDoesNotSumToEight,
    UnknownPiece,
    InvalidSideToMove,
}

impl fmt::Display for LayoutParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutParseError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            LayoutParseError::UnexpectedEnd => write!(f, "unexpected end of layout"),
            LayoutParseError::InvalidDigit => write!(f, "empty-run digit must be 1 through 8"),
            LayoutParseError::RowDoesNotSumToEight => write!(f, "row does not sum to eight"),
            LayoutParseError::UnknownPiece => write!(f, "unknown piece"),
            LayoutParseError::InvalidSideToMove => write!(f, "side to move must be 'w' or 'b'"),
        }
    }
}

/// How pieces are drawn when a board is rendered as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    Ascii,
    Unicode,
}

impl Default for SymbolStyle {
    fn default() -> Self {
        SymbolStyle::Ascii
    }
}

/// The canonical game state: what stands on each of the 64 cells, and whose
/// turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
    side_to_move: Color,
}

//
// Board state getters
//

impl Board {
    /// An empty board with White to move.
    pub const fn empty() -> Board {
        Board {
            cells: [None; 64],
            side_to_move: Color::White,
        }
    }

    /// The standard chess starting position, Black on row 0 and White on
    /// row 7, with White to move.
    pub fn initial_setup() -> Board {
        let mut board = Board::empty();
        for &color in COLORS.iter() {
            for (col, &kind) in BACK_ROW.iter().enumerate() {
                board.place(Square::new(color.back_row(), col), Piece::new(kind, color));
                board.place(
                    Square::new(color.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }

        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.as_index()]
    }

    pub fn current_turn(&self) -> Color {
        self.side_to_move
    }

    /// The set of squares occupied by pieces of the given color.
    pub fn pieces(&self, color: Color) -> Bitboard {
        let mut board = Bitboard::none();
        for (idx, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(piece) if piece.color == color => board.set(Square::from_index(idx)),
                _ => {}
            }
        }

        board
    }

    /// The set of all occupied squares.
    pub fn occupancy(&self) -> Bitboard {
        self.pieces(Color::White) | self.pieces(Color::Black)
    }
}

//
// Move application and board manipulation
//

impl Board {
    /// Puts a piece on the given square, returning whatever stood there
    /// before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.as_index()].replace(piece)
    }

    /// Clears the given square, returning whatever stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.as_index()].take()
    }

    /// Moves whatever occupies `from` onto `to`, discarding any piece already
    /// on `to`. No legality checking happens here and the turn is left
    /// alone; callers validate with `rules::is_valid_move` first and advance
    /// the turn afterwards. Returns the captured piece, if there was one.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving_piece = self.remove(from);
        let captured = match moving_piece {
            Some(piece) => self.place(to, piece),
            None => self.remove(to),
        };

        debug!(
            "applied {} -> {} ({:?}), captured {:?}",
            from, to, moving_piece, captured
        );
        captured
    }

    /// Hands the move to the other side.
    pub fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.toggle();
    }
}

//
// Layout parsing and generation.
//
// A layout lists the eight rows from row 0 to row 7, separated by slashes.
// Digits count runs of empty cells and letters name pieces, uppercase for
// White and lowercase for Black. An optional trailing 'w' or 'b' names the
// side to move.
//

impl Board {
    /// Constructs a new board from a layout string.
    pub fn from_layout<S: AsRef<str>>(layout: S) -> Result<Board, LayoutParseError> {
        use std::iter::Peekable;
        use std::str::Chars;

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat<'a>(iter: &mut Stream<'a>, expected: char) -> Result<(), LayoutParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(LayoutParseError::UnexpectedChar(c)),
                None => Err(LayoutParseError::UnexpectedEnd),
            }
        }

        fn peek<'a>(iter: &mut Stream<'a>) -> Result<char, LayoutParseError> {
            iter.peek().cloned().ok_or(LayoutParseError::UnexpectedEnd)
        }

        fn eat_side_to_move<'a>(iter: &mut Stream<'a>) -> Result<Color, LayoutParseError> {
            let side = match peek(iter)? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return Err(LayoutParseError::InvalidSideToMove),
            };

            iter.next();
            Ok(side)
        }

        let mut board = Board::empty();
        let iter = &mut layout.as_ref().trim().chars().peekable();
        for row in 0..8 {
            let mut col = 0;
            while col < 8 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_digit(10) {
                    if c < '1' || c > '8' {
                        return Err(LayoutParseError::InvalidDigit);
                    }

                    col += c as usize - '0' as usize;
                    if col > 8 {
                        return Err(LayoutParseError::RowDoesNotSumToEight);
                    }

                    iter.next();
                    continue;
                }

                if c == '/' {
                    return Err(LayoutParseError::RowDoesNotSumToEight);
                }

                // if it's not a digit, it represents a piece.
                let piece = Piece::try_from(c).map_err(|_| LayoutParseError::UnknownPiece)?;
                board.place(Square::new(row, col), piece);
                iter.next();
                col += 1;
            }

            if row != 7 {
                eat(iter, '/')?;
            }
        }

        if iter.peek().is_none() {
            return Ok(board);
        }

        eat(iter, ' ')?;
        board.side_to_move = eat_side_to_move(iter)?;
        if let Some(c) = iter.next() {
            return Err(LayoutParseError::UnexpectedChar(c));
        }

        Ok(board)
    }

    /// Produces the layout string describing this board.
    pub fn as_layout(&self) -> String {
        let mut buf = String::new();
        for row in 0..8 {
            let mut empty_run = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square::new(row, col)) {
                    if empty_run != 0 {
                        buf.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }

                    buf.push_str(&piece.to_string());
                } else {
                    empty_run += 1;
                }
            }

            if empty_run != 0 {
                buf.push_str(&empty_run.to_string());
            }

            if row != 7 {
                buf.push('/');
            }
        }

        match self.side_to_move {
            Color::White => buf.push_str(" w"),
            Color::Black => buf.push_str(" b"),
        }

        buf
    }

    /// A displayable view of this board drawing pieces in the given style.
    pub fn display(&self, style: SymbolStyle) -> BoardDisplay<'_> {
        BoardDisplay { board: self, style }
    }
}

pub struct BoardDisplay<'a> {
    board: &'a Board,
    style: SymbolStyle,
}

impl<'a> fmt::Display for BoardDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                match self.board.piece_at(Square::new(row, col)) {
                    Some(piece) if self.style == SymbolStyle::Unicode => {
                        write!(f, " {} ", piece.symbol())?
                    }
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => write!(f, " . ")?,
                }
            }

            writeln!(f, "| {}", row)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for col in 0..8 {
            write!(f, " {} ", col)?;
        }

        writeln!(f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(SymbolStyle::Ascii))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial_setup()
    }
}
