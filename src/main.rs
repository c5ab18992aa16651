use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Stdin, Write};
use std::str::FromStr;
use std::thread;

use tictactoe4_ai::{
    arena::Arena,
    board::Symbol,
    evaluator::Heuristic,
    solver::{Difficulty, Solver},
};

mod game;
use game::*;

/// 4x4 tic-tac-toe against a game tree search agent
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Play against the computer (the default)
    Play {
        /// easy, medium or hard; asked for when missing
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// The symbol you play, X moves first; asked for when missing
        #[arg(long)]
        symbol: Option<Symbol>,
        /// The evaluator used by the computer
        #[arg(long, default_value = "open-line")]
        heuristic: Heuristic,
        /// Search depth, overriding the difficulty
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Play two evaluators against each other from every opening
    Arena {
        #[arg(long, default_value = "line-tally")]
        first: Heuristic,
        #[arg(long, default_value = "open-line")]
        second: Heuristic,
        #[arg(long, default_value_t = 2)]
        depth: u32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.cmd {
        Some(Cmd::Arena { first, second, depth }) => run_arena(first, second, depth),
        Some(Cmd::Play {
            difficulty,
            symbol,
            heuristic,
            depth,
        }) => play(difficulty, symbol, heuristic, depth),
        None => play(None, None, Heuristic::default(), None),
    }
}

fn run_arena(first: Heuristic, second: Heuristic, depth: u32) -> Result<()> {
    let arena = Arena::new(first, second, depth);

    let progress = ProgressBar::new(arena.num_games() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} games")
            .progress_chars("##-"),
    );
    let summary = arena.run(&progress)?;
    progress.finish_and_clear();

    println!("{}", summary);
    Ok(())
}

// keep asking until the answer parses
fn prompt<T: FromStr>(stdin: &Stdin, question: &str) -> Result<T> {
    loop {
        print!("{}", question);
        stdout().flush()?;

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed"));
        }
        match buffer.trim().parse::<T>() {
            Ok(answer) => return Ok(answer),
            Err(_) => println!("Unknown answer given: {}", buffer.trim()),
        }
    }
}

fn play(
    difficulty: Option<Difficulty>,
    symbol: Option<Symbol>,
    heuristic: Heuristic,
    depth: Option<u32>,
) -> Result<()> {
    let stdin = stdin();

    println!("Welcome to 4x4 Tic-Tac-Toe\n");

    let difficulty = match difficulty {
        Some(difficulty) => difficulty,
        None => prompt(&stdin, "Choose a difficulty, easy/medium/hard: ")?,
    };
    let human = match symbol {
        Some(symbol) => symbol,
        None => prompt(&stdin, "Play as X (moves first) or O? x/o: ")?,
    };
    let max_depth = depth.unwrap_or_else(|| difficulty.max_depth());

    // game loop
    let mut game = Game::new(human);
    loop {
        game.display()?;

        match game.state {
            GameState::Playing => {
                if game.human_to_move() {
                    let cell: usize = prompt(&stdin, "Move input (cell 1-16) > ")?;
                    if let Err(err) = game.play_checked(cell) {
                        println!("{}", err);
                    }
                    continue;
                }

                // AI player, searching on a worker thread while the spinner ticks
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                spinner.set_message(&format!(
                    "AI is thinking ({}, depth {})...",
                    heuristic, max_depth
                ));
                spinner.enable_steady_tick(100);

                let solver = Solver::with_heuristic(game.board(), heuristic);
                let ai = game.to_move;
                let handle = thread::spawn(move || solver.find_best_move(ai, max_depth));
                let (best_move, result) = handle
                    .join()
                    .map_err(|_| anyhow!("search thread panicked"))??;
                spinner.finish_and_clear();

                println!(
                    "AI plays cell {} (row {}, column {}). {}",
                    best_move.cell + 1,
                    best_move.row() + 1,
                    best_move.column() + 1,
                    result
                );
                game.play(best_move);
            }

            // end states
            GameState::Won(winner) => {
                if winner == game.human {
                    println!("You win!");
                } else {
                    println!("Player {} wins!", winner);
                }
                if !play_again(&stdin)? {
                    break;
                }
                game = Game::new(human);
            }
            GameState::Draw => {
                println!("Draw!");
                if !play_again(&stdin)? {
                    break;
                }
                game = Game::new(human);
            }
        }
    }
    Ok(())
}

fn play_again(stdin: &Stdin) -> Result<bool> {
    loop {
        print!("Play again? y/n: ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') | None => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
