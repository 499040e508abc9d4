// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::io::{self, BufRead, Write};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::Config;
use crate::game::{ClickOutcome, Game};
use crate::perft::perft;
use crate::types::Square;

/// Deepest tree the `perft` command will count. The start position already
/// has close to five million leaves at this depth.
const MAX_PERFT_DEPTH: u32 = 5;

/// A line-oriented host for a `Game`. Each input line is one command; the
/// server answers on the writer and keeps going until `quit` or end of input.
pub struct ConsoleServer {
    game: Game,
    config: Config,
}

impl ConsoleServer {
    pub fn new(config: Config) -> ConsoleServer {
        let start = config.start_board().unwrap_or_else(|err| {
            warn!("ignoring start layout: {}", err);
            Board::initial_setup()
        });

        ConsoleServer {
            game: Game::from_board(start),
            config,
        }
    }

    pub fn run<R, W>(mut self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            debug!("command: {}", line);
            let components: Vec<_> = line.split_whitespace().collect();
            match components.split_first().unwrap_or((&"", &[])) {
                (&"", []) => {}
                (&"quit", []) => break,
                (&"new", []) => {
                    self.game.reset();
                    self.handle_show(&mut writer)?;
                }
                (&"show", []) => self.handle_show(&mut writer)?,
                (&"turn", []) => writeln!(&mut writer, "{}", self.game.turn())?,
                (&"layout", args) => self.handle_layout(&mut writer, args)?,
                (&"click", args) => self.handle_click(&mut writer, args)?,
                (&"moves", args) => self.handle_moves(&mut writer, args)?,
                (&"move", args) => self.handle_move(&mut writer, args)?,
                (&"perft", [depth]) => self.handle_perft(&mut writer, depth)?,
                _ => writeln!(&mut writer, "unrecognized command")?,
            }
        }

        Ok(())
    }

    fn handle_show<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self.game.board().display(self.config.symbols))?;
        writeln!(w, "{} to move", self.game.turn())
    }

    fn handle_layout<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        match Board::from_layout(args.join(" ")) {
            Ok(board) => {
                self.game = Game::from_board(board);
                self.handle_show(w)
            }
            Err(err) => writeln!(w, "invalid layout: {}", err),
        }
    }

    fn handle_click<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let square = match parse_squares(args) {
            Some(ref squares) if squares.len() == 1 => squares[0],
            _ => return writeln!(w, "usage: click <row> <col>"),
        };

        match self.game.click(square) {
            ClickOutcome::Selected {
                square,
                destinations,
            } => {
                writeln!(w, "selected {}", square)?;
                if self.config.show_destinations {
                    write_squares(w, destinations)?;
                }

                Ok(())
            }
            ClickOutcome::Moved { mov, captured } => {
                match captured {
                    Some(piece) => writeln!(w, "moved {} capturing {}", mov, piece)?,
                    None => writeln!(w, "moved {}", mov)?,
                }

                writeln!(w, "{} to move", self.game.turn())
            }
            ClickOutcome::Deselected => writeln!(w, "deselected"),
            ClickOutcome::Ignored => writeln!(w, "nothing to select"),
        }
    }

    fn handle_moves<W: Write>(&self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let square = match parse_squares(args) {
            Some(ref squares) if squares.len() == 1 => squares[0],
            _ => return writeln!(w, "usage: moves <row> <col>"),
        };

        write_squares(w, crate::rules::destinations(self.game.board(), square))
    }

    fn handle_move<W: Write>(&mut self, w: &mut W, args: &[&str]) -> io::Result<()> {
        let (from, to) = match parse_squares(args) {
            Some(ref squares) if squares.len() == 2 => (squares[0], squares[1]),
            _ => return writeln!(w, "usage: move <row> <col> <row> <col>"),
        };

        match self.game.play(from, to) {
            Ok(Some(piece)) => writeln!(w, "ok, captured {}", piece),
            Ok(None) => writeln!(w, "ok"),
            Err(err) => writeln!(w, "rejected: {}", err),
        }
    }

    fn handle_perft<W: Write>(&self, w: &mut W, depth: &str) -> io::Result<()> {
        match depth.parse::<u32>() {
            Ok(depth) if depth <= MAX_PERFT_DEPTH => {
                writeln!(w, "perft({}) = {}", depth, perft(self.game.board(), depth))
            }
            Ok(_) => writeln!(w, "perft depth is limited to {}", MAX_PERFT_DEPTH),
            Err(_) => writeln!(w, "usage: perft <depth>"),
        }
    }
}

/// Parses pairs of row/column coordinates. Anything that is not an even
/// number of integers in `0..8` is rejected.
fn parse_squares(args: &[&str]) -> Option<Vec<Square>> {
    if args.is_empty() || args.len() % 2 != 0 {
        return None;
    }

    args.chunks(2)
        .map(|pair| {
            let row = pair[0].parse::<i32>().ok()?;
            let col = pair[1].parse::<i32>().ok()?;
            Square::checked(row, col)
        })
        .collect()
}

fn write_squares<W: Write>(w: &mut W, squares: Bitboard) -> io::Result<()> {
    let listed: Vec<_> = squares.iter().map(|sq| sq.to_string()).collect();
    if listed.is_empty() {
        writeln!(w, "no moves")
    } else {
        writeln!(w, "{}", listed.join(" "))
    }
}
