//! Self-play between two heuristics, for tuning evaluators

use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::fmt;

use crate::{
    board::*,
    error::GameError,
    evaluator::Heuristic,
    solver::Solver,
    CELLS,
};

/// The result of one arena game
#[derive(Copy, Clone, Debug)]
pub struct MatchOutcome {
    /// The cell `X` opened on
    pub opening: usize,
    /// The heuristic playing `X`
    pub x: Heuristic,
    /// The heuristic playing `O`
    pub o: Heuristic,
    pub winner: Symbol,
    pub num_moves: usize,
    pub nodes_generated: u64,
}

impl MatchOutcome {
    /// The heuristic that won the game, `None` for a draw
    pub fn winning_heuristic(&self) -> Option<Heuristic> {
        match self.winner {
            Symbol::X => Some(self.x),
            Symbol::O => Some(self.o),
            Symbol::Empty => None,
        }
    }
}

/// Totals over every game of an arena run
#[derive(Clone, Debug)]
pub struct ArenaSummary {
    pub first: Heuristic,
    pub second: Heuristic,
    pub depth: u32,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub nodes_generated: u64,
    pub games: Vec<MatchOutcome>,
}

impl fmt::Display for ArenaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} games at depth {}", self.games.len(), self.depth)?;
        writeln!(f, "{} wins: {}", self.first, self.first_wins)?;
        writeln!(f, "{} wins: {}", self.second, self.second_wins)?;
        writeln!(f, "draws: {}", self.draws)?;
        write!(f, "generated nodes: {}", self.nodes_generated)
    }
}

/// Plays two heuristics against each other from every opening, in both seatings
#[derive(Copy, Clone, Debug)]
pub struct Arena {
    first: Heuristic,
    second: Heuristic,
    depth: u32,
}

impl Arena {
    pub fn new(first: Heuristic, second: Heuristic, depth: u32) -> Self {
        Self {
            first,
            second,
            depth,
        }
    }

    /// The number of games in a full run
    pub fn num_games(&self) -> usize {
        2 * CELLS
    }

    /// Plays a single game where `x` opens on `opening` and both sides then
    /// alternate their best moves until the game ends
    pub fn play_game(&self, opening: usize, x: Heuristic, o: Heuristic) -> Result<MatchOutcome, GameError> {
        let mut board = Board::new().play_checked(Move::new(Symbol::X, opening))?;
        let mut to_move = Symbol::O;
        let mut nodes_generated = 0;

        while !board.is_terminal() {
            let heuristic = if to_move == Symbol::X { x } else { o };
            let (best_move, result) = Solver::with_heuristic(board, heuristic).find_best_move(to_move, self.depth)?;
            nodes_generated += result.nodes_generated;
            board = board.apply(best_move);
            to_move = to_move.opponent();
        }

        Ok(MatchOutcome {
            opening,
            x,
            o,
            winner: board.winner(),
            num_moves: board.num_moves(),
            nodes_generated,
        })
    }

    /// Plays every game of the arena in parallel, reporting finished games to `progress`
    pub fn run(&self, progress: &ProgressBar) -> Result<ArenaSummary, GameError> {
        // each opening is played twice, once with the first heuristic as X
        let pairings = (0..CELLS)
            .flat_map(|cell| vec![(cell, Symbol::X), (cell, Symbol::O)])
            .collect::<Vec<_>>();

        let games = pairings
            .par_iter()
            .map(|&(opening, first_symbol)| {
                let outcome = if first_symbol == Symbol::X {
                    self.play_game(opening, self.first, self.second)
                } else {
                    self.play_game(opening, self.second, self.first)
                };
                progress.inc(1);
                outcome
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut summary = ArenaSummary {
            first: self.first,
            second: self.second,
            depth: self.depth,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            nodes_generated: 0,
            games,
        };
        for (game, &(_, first_symbol)) in summary.games.iter().zip(pairings.iter()) {
            summary.nodes_generated += game.nodes_generated;
            match game.winner {
                Symbol::Empty => summary.draws += 1,
                winner if winner == first_symbol => summary.first_wins += 1,
                _ => summary.second_wins += 1,
            }
        }

        info!(
            "arena {} vs {} finished: {} - {} ({} draws)",
            self.first, self.second, summary.first_wins, summary.second_wins, summary.draws
        );
        Ok(summary)
    }
}
