/// Errors raised by the game engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no legal moves, the search was started on a full board")]
    NoLegalMoves,

    #[error("cell {0} out of range")]
    CellOutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("cannot place an empty symbol")]
    EmptySymbol,

    #[error("unknown symbol '{0}', expected 'X' or 'O'")]
    UnknownSymbol(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("unknown heuristic '{0}', expected 'line-tally' or 'open-line'")]
    UnknownHeuristic(String),

    #[error("unknown difficulty '{0}', expected 'easy', 'medium' or 'hard'")]
    UnknownDifficulty(String),
}
