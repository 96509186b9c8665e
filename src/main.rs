// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedSymbolic::Examples::symbolic_examples::sym_examples;
use log::error;
use simplelog::*;

fn main() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    // run all examples or the one given as the first argument
    let examples: Vec<usize> = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(example)) => vec![example],
        Some(Err(_)) => {
            error!("example number must be a non-negative integer");
            return;
        }
        None => (0..4).collect(),
    };
    for example in examples {
        if let Err(e) = sym_examples(example) {
            error!("example {} failed: {}", example, e);
        }
    }
}
