#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use daily_puzzles::kenken::{self, GenerateOptions, KenKen};
use daily_puzzles::random::{Seed, SeedSource};
use daily_puzzles::set::{self, SetOptions, SetPuzzle};
use daily_puzzles::Generated;
use itertools::Itertools;
use serde::Serialize;

use crate::options::{Game, Options};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let seed = options.seed_strategy().seed(options.date());
    match options.game() {
        Game::KenKen { width } => {
            let mut generate_options = GenerateOptions::new(seed).width(width);
            if let Some(max_attempts) = options.max_attempts() {
                generate_options = generate_options.max_attempts(max_attempts);
            }
            let generated = kenken::generate(generate_options)?;
            if options.json() {
                print_json(&options, seed, &generated)?;
            } else {
                print_kenken(&generated);
            }
        }
        Game::Set => {
            let mut set_options = SetOptions::new(seed);
            if let Some(max_attempts) = options.max_attempts() {
                set_options = set_options.max_attempts(max_attempts);
            }
            let generated = set::generate(set_options)?;
            if options.json() {
                print_json(&options, seed, &generated)?;
            } else {
                print_set(&generated);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(options: &Options, seed: Seed, generated: &Generated<T>) -> Result<()> {
    let value = serde_json::json!({
        "date": options.seed_date().map(|date| date.to_string()),
        "seed": seed,
        "fallback": generated.is_fallback(),
        "puzzle": generated.get(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_fallback_notice<T>(generated: &Generated<T>, guarantee: &str) {
    if generated.is_fallback() {
        println!("(fallback: {})", guarantee);
    }
}

fn print_kenken(generated: &Generated<KenKen>) {
    let kenken = generated.get();
    println!(
        "KenKen {0}x{0}, seed {1}, {2} attempt(s)",
        kenken.puzzle().width(),
        kenken.seed(),
        kenken.attempts()
    );
    print_fallback_notice(generated, "the solution may not be unique");
    let cages = kenken
        .puzzle()
        .cages()
        .iter()
        .enumerate()
        .map(|(i, cage)| format!(" {:>2}: {}", i, cage.clue()))
        .join("\n");
    println!("{}{}", kenken.puzzle().cell_cage_indices(), cages);
    println!("Solution:\n{}", kenken.solution());
}

fn print_set(generated: &Generated<SetPuzzle>) {
    let puzzle = generated.get();
    println!(
        "SET, seed {}, {} attempt(s)",
        puzzle.seed(),
        puzzle.attempts()
    );
    print_fallback_notice(generated, "the hand does not have the intended number of sets");
    for (i, card) in puzzle.cards().iter().enumerate() {
        println!(" {:>2}: {}", i, card);
    }
    let sets = puzzle
        .sets()
        .iter()
        .map(|[i, j, k]| format!("{}-{}-{}", i, j, k))
        .join(", ");
    println!("Sets: {}", sets);
}
