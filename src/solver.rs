//! An agent to play 4x4 tic-tac-toe

use log::{debug, info, trace};

use std::fmt;
use std::str::FromStr;

use crate::{board::*, error::GameError, evaluator::*};

/// Diagnostics and score of one search
///
/// Every call to [`Solver::search`] returns a fresh record. Parents fold the
/// records of their children into their own, so no counters are shared
/// between calls.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SearchResult {
    /// The score of the searched position for the side to move
    pub score: i32,
    /// Whether the depth limit, rather than the end of the game, stopped any line of play
    pub cut_off: bool,
    /// The deepest ply generated below the searched position
    pub max_depth_reached: u32,
    /// The number of positions generated, not counting the searched position
    pub nodes_generated: u64,
    /// Subtrees skipped by the side to move
    pub pruned_by_maximizer: u64,
    /// Subtrees skipped by the opponent
    pub pruned_by_minimizer: u64,
}

impl SearchResult {
    fn leaf(score: i32, cut_off: bool) -> Self {
        Self {
            score,
            cut_off,
            ..Self::default()
        }
    }

    // fold the statistics of a child one ply down into this result;
    // maximizer and minimizer swap roles at each ply
    fn absorb(&mut self, child: &SearchResult) {
        self.cut_off |= child.cut_off;
        self.max_depth_reached = self.max_depth_reached.max(child.max_depth_reached + 1);
        self.nodes_generated += child.nodes_generated;
        self.pruned_by_maximizer += child.pruned_by_minimizer;
        self.pruned_by_minimizer += child.pruned_by_maximizer;
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score: {}, cut off: {}, maximum depth: {}, generated nodes: {}, pruned subtrees: {}, opponent's pruned subtrees: {}",
            self.score,
            self.cut_off,
            self.max_depth_reached,
            self.nodes_generated,
            self.pruned_by_maximizer,
            self.pruned_by_minimizer
        )
    }
}

/// How far ahead the computer player looks
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The depth passed to [`Solver::find_best_move`]
    pub fn max_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 6,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "easy" | "0" => Ok(Difficulty::Easy),
            "medium" | "1" => Ok(Difficulty::Medium),
            "hard" | "2" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(name.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// An agent to pick moves in 4x4 tic-tac-toe positions
///
/// # Notes
/// This agent runs a depth-limited negamax search with alpha-beta pruning.
/// Moves are explored in ascending cell order and positions at the depth
/// limit are scored by the evaluator the `Solver` was built with.
///
/// # Position Scoring
/// Scores are always from the point of view of the side to move. A position
/// where the side to move has a full line scores `SCORE_MAX`, one where the
/// opponent has a full line scores `-SCORE_MAX`, and anything in between is
/// a heuristic estimate.
#[derive(Copy, Clone)]
pub struct Solver {
    board: Board,
    evaluate: Evaluator,
}

impl Solver {
    /// Creates a new `Solver` for a position, scoring leaves with `evaluate`
    pub fn new(board: Board, evaluate: Evaluator) -> Self {
        Self { board, evaluate }
    }

    /// Creates a new `Solver` for a position with a named evaluator
    pub fn with_heuristic(board: Board, heuristic: Heuristic) -> Self {
        Self::new(board, heuristic.evaluator())
    }

    /// Performs game tree search for `symbol` to move
    ///
    /// Explores at most `depth` plies. A child whose score proves this
    /// position worth more than `beta` ends the search of its remaining
    /// siblings. `alpha` is passed down the tree but never tightens the
    /// search, and must not exceed `beta`.
    pub fn search(&self, symbol: Symbol, depth: u32, alpha: i32, beta: i32) -> SearchResult {
        debug_assert!(alpha <= beta);
        let moves = self.board.legal_moves(symbol);

        // only the depth limit, not the end of the game, counts as a cut off
        let game_over = moves.as_slice().is_empty() || self.board.is_terminal();
        if depth == 0 || game_over {
            return SearchResult::leaf((self.evaluate)(&self.board, symbol), !game_over);
        }

        let mut result = SearchResult::leaf(SCORE_MIN, false);
        for candidate in moves {
            let mut next = *self;
            next.board = self.board.apply(candidate);
            result.nodes_generated += 1;

            // the search window is flipped for the other player
            let child = next.search(symbol.opponent(), depth - 1, -beta, -result.score);
            result.score = result.score.max(-child.score);
            result.absorb(&child);

            // the opponent already has a better option elsewhere, so it will
            // never let the game reach this position
            if result.score > beta {
                result.pruned_by_maximizer += 1;
                break;
            }
        }
        result
    }

    /// Finds the best move for `symbol`, searching `max_depth` plies below each candidate
    ///
    /// Returns the move together with the statistics of the whole search.
    /// Ties between equally scored moves go to the lowest cell index.
    pub fn find_best_move(&self, symbol: Symbol, max_depth: u32) -> Result<(Move, SearchResult), GameError> {
        debug!("thinking for player {} (max depth = {})", symbol, max_depth);

        let moves = self.board.legal_moves(symbol);
        let mut best_move = match moves.as_slice().first() {
            Some(&first) => first,
            None => return Err(GameError::NoLegalMoves),
        };

        // start below any reachable score so the first candidate always replaces it
        let mut result = SearchResult::leaf(SCORE_MIN - 1, false);
        for candidate in moves {
            let mut next = *self;
            next.board = self.board.apply(candidate);
            result.nodes_generated += 1;

            // beta tightens as better candidates are found
            let child = next.search(symbol.opponent(), max_depth, SCORE_MIN, -result.score);
            let score = -child.score;
            trace!("candidate {} scored {}", candidate, score);
            result.absorb(&child);

            if score > result.score {
                result.score = score;
                best_move = candidate;
            }
        }

        info!("selecting {}. {}", best_move, result);
        Ok((best_move, result))
    }
}

impl std::ops::Deref for Solver {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
