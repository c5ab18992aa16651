//! Heuristic evaluation of board positions
//!
//! An evaluator scores a board from the point of view of one symbol. Scores
//! lie in `[-SCORE_MAX, SCORE_MAX]`, where `SCORE_MAX` means `symbol` has
//! already won and `-SCORE_MAX` means its opponent has. Heuristic values stay
//! far inside that range, so a win or loss is never confused with a good
//! or bad position.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Line, Symbol};
use crate::error::GameError;
use crate::WIDTH;

/// The score of a won position
pub const SCORE_MAX: i32 = 1000;

/// The lowest possible score, a lost position
pub const SCORE_MIN: i32 = -SCORE_MAX;

/// Scores `board` for `symbol`
pub type Evaluator = fn(&Board, Symbol) -> i32;

// number of cells held by symbol and by its opponent
fn line_counts(line: &Line, symbol: Symbol) -> (usize, usize) {
    let opponent = symbol.opponent();
    line.iter().fold((0, 0), |(count, opponent_count), &cell| {
        if cell == symbol {
            (count + 1, opponent_count)
        } else if cell == opponent {
            (count, opponent_count + 1)
        } else {
            (count, opponent_count)
        }
    })
}

fn tally_weight(count: usize) -> i32 {
    match count {
        3 => 6,
        2 => 3,
        1 => 1,
        _ => 0,
    }
}

/// Weighs how far each side has progressed along every line
///
/// Each line adds `6`, `3` or `1` for three, two or one of `symbol`'s pieces
/// and subtracts the same weights for the opponent's pieces.
pub fn line_tally(board: &Board, symbol: Symbol) -> i32 {
    let mut score = 0;
    for line in board.lines().iter() {
        let (count, opponent_count) = line_counts(line, symbol);
        if count == WIDTH {
            return SCORE_MAX;
        } else if opponent_count == WIDTH {
            return SCORE_MIN;
        }
        score += tally_weight(count) - tally_weight(opponent_count);
    }
    score
}

/// Counts the lines each side could still complete
///
/// A line the opponent has not entered is worth `+1`, a line `symbol` has
/// not entered is worth `-1`, so an untouched line is worth nothing.
pub fn open_line(board: &Board, symbol: Symbol) -> i32 {
    let mut score = 0;
    for line in board.lines().iter() {
        let (count, opponent_count) = line_counts(line, symbol);
        if count == WIDTH {
            return SCORE_MAX;
        } else if opponent_count == WIDTH {
            return SCORE_MIN;
        }
        if opponent_count == 0 {
            score += 1;
        }
        if count == 0 {
            score -= 1;
        }
    }
    score
}

/// The evaluators available by name
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Heuristic {
    LineTally,
    OpenLine,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::LineTally, Heuristic::OpenLine];

    pub fn evaluator(self) -> Evaluator {
        match self {
            Heuristic::LineTally => line_tally,
            Heuristic::OpenLine => open_line,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::LineTally => "line-tally",
            Heuristic::OpenLine => "open-line",
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::OpenLine
    }
}

impl FromStr for Heuristic {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "line-tally" | "tally" | "default" => Ok(Heuristic::LineTally),
            "open-line" | "open" | "improved" => Ok(Heuristic::OpenLine),
            _ => Err(GameError::UnknownHeuristic(name.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
