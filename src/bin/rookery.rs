// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::io;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches, SubCommand};
use rookery::{perft, Board, Config, ConsoleServer, START_LAYOUT};

const DEFAULT_CONFIG: &str = "rookery.json";

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .help("JSON configuration file")
                .value_name("FILE")
                .short("-c")
                .long("--config")
                .takes_value(true)
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("Count the move tree of a position")
                .arg(
                    Arg::with_name("DEPTH")
                        .help("Depth of move tree to count")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("layout")
                        .help("Board layout, e.g. \"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w\"")
                        .value_name("LAYOUT")
                        .short("-l")
                        .long("--layout")
                        .takes_value(true),
                ),
        )
        .subcommand(SubCommand::with_name("play").about("Play on the console (default)"))
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("perft") {
        run_perft(matches);
    }

    let config = load_config(&matches);
    let stdin = io::stdin();
    let svr = ConsoleServer::new(config);
    if let Err(err) = svr.run(stdin.lock(), io::stdout()) {
        eprintln!("console error: {}", err);
        process::exit(1);
    }
}

// An explicitly named config file must exist; the default one may be absent.
fn load_config(matches: &ArgMatches) -> Config {
    let (path, result) = match matches.value_of("config") {
        Some(path) => (path, Config::load(path)),
        None => (DEFAULT_CONFIG, Config::load_or_default(DEFAULT_CONFIG)),
    };

    match result {
        Ok(config) => {
            debug!("configuration: {:?}", config);
            config
        }
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    }
}

fn run_perft(matches: &ArgMatches) -> ! {
    let depth = value_t_or_exit!(matches, "DEPTH", u32);
    let layout = matches.value_of("layout").unwrap_or(START_LAYOUT);
    let board = match Board::from_layout(layout) {
        Ok(board) => board,
        Err(err) => {
            println!("invalid layout: {}", err);
            process::exit(1);
        }
    };

    println!("layout: {}", layout);
    println!("depth:  {}", depth);
    println!();
    println!("{}", board);
    for i in 1..=depth {
        let start = Instant::now();
        let results = perft(&board, i);
        let ms = start.elapsed().as_millis();
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }

    process::exit(0);
}
