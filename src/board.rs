//! The 4x4 board model: symbols, moves, lines and game termination

use std::fmt;
use std::str::FromStr;

use crate::{error::GameError, CELLS, HEIGHT, NUM_LINES, WIDTH};

/// The mark occupying a cell, or `Empty`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    Empty,
    X,
    O,
}

impl Symbol {
    /// Returns `O` for `X`, `X` for `O` and `Empty` for `Empty`
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
            Symbol::Empty => Symbol::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        match self {
            Symbol::Empty => true,
            _ => false,
        }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::Empty
    }
}

impl FromStr for Symbol {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            _ => Err(GameError::UnknownSymbol(name.to_string())),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Symbol::Empty => '?',
            Symbol::X => 'X',
            Symbol::O => 'O',
        };
        write!(f, "{}", c)
    }
}

/// Four cells that win the game when they all hold the same symbol
pub type Line = [Symbol; WIDTH];

/// Places `symbol` on the cell at index `cell`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub symbol: Symbol,
    pub cell: usize,
}

impl Move {
    pub fn new(symbol: Symbol, cell: usize) -> Self {
        Self { symbol, cell }
    }

    pub fn row(&self) -> usize {
        self.cell / WIDTH
    }

    pub fn column(&self) -> usize {
        self.cell % WIDTH
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[place {} on {}]", self.symbol, self.cell)
    }
}

/// The legal moves of a position, yielded in ascending cell order
#[derive(Clone)]
pub struct MoveList {
    size: usize,
    next: usize,
    moves: [Move; CELLS],
}

impl MoveList {
    fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            moves: [Move::new(Symbol::Empty, 0); CELLS],
        }
    }

    fn push(&mut self, new_move: Move) {
        self.moves[self.size] = new_move;
        self.size += 1;
    }

    /// The moves not yet yielded by the iterator
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[self.next..self.size]
    }
}

impl Iterator for MoveList {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            return None;
        }
        self.next += 1;
        Some(self.moves[self.next - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList {}

/// A 4x4 board position
///
/// # Notes
/// Boards are plain values: applying a move returns a new `Board` and leaves
/// the original untouched, so a search can hold on to every position along
/// its current path without any shared state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    // cells are stored left-to-right, top-to-bottom
    cells: [Symbol; CELLS],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Symbol::Empty; CELLS],
        }
    }

    pub fn from_cells(cells: [Symbol; CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Symbol; CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Symbol {
        self.cells[index]
    }

    /// The number of symbols placed so far
    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns one move per empty cell for `symbol`, in ascending cell order
    pub fn legal_moves(&self, symbol: Symbol) -> MoveList {
        let mut moves = MoveList::new();
        for (cell, _) in self.cells.iter().enumerate().filter(|(_, c)| c.is_empty()) {
            moves.push(Move::new(symbol, cell));
        }
        moves
    }

    /// Returns the position after playing `new_move`
    ///
    /// The target cell must be empty, which holds for every move produced by
    /// [`legal_moves`](Board::legal_moves). Use [`play_checked`](Board::play_checked)
    /// for moves from untrusted input.
    pub fn apply(&self, new_move: Move) -> Self {
        debug_assert!(self.cells[new_move.cell].is_empty());
        let mut next = *self;
        next.cells[new_move.cell] = new_move.symbol;
        next
    }

    /// Returns the position after playing `new_move`, rejecting moves outside
    /// the board, onto occupied cells or placing an empty symbol
    pub fn play_checked(&self, new_move: Move) -> Result<Self, GameError> {
        if new_move.cell >= CELLS {
            return Err(GameError::CellOutOfRange(new_move.cell));
        }
        if new_move.symbol.is_empty() {
            return Err(GameError::EmptySymbol);
        }
        if !self.cells[new_move.cell].is_empty() {
            return Err(GameError::CellOccupied(new_move.cell));
        }
        Ok(self.apply(new_move))
    }

    pub fn rows(&self) -> [Line; HEIGHT] {
        let mut rows = [[Symbol::Empty; WIDTH]; HEIGHT];
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                rows[row][column] = self.cells[row * WIDTH + column];
            }
        }
        rows
    }

    pub fn columns(&self) -> [Line; WIDTH] {
        let mut columns = [[Symbol::Empty; HEIGHT]; WIDTH];
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                columns[column][row] = self.cells[row * WIDTH + column];
            }
        }
        columns
    }

    pub fn diagonals(&self) -> [Line; 2] {
        // 0  1  2  3
        // 4  5  6  7
        // 8  9  10 11
        // 12 13 14 15
        let mut diagonals = [[Symbol::Empty; WIDTH]; 2];
        for i in 0..WIDTH {
            diagonals[0][i] = self.cells[i * (WIDTH + 1)];
            diagonals[1][i] = self.cells[(i + 1) * (WIDTH - 1)];
        }
        diagonals
    }

    /// Returns every row, then every column, then both diagonals
    pub fn lines(&self) -> [Line; NUM_LINES] {
        let mut lines = [[Symbol::Empty; WIDTH]; NUM_LINES];
        lines[..HEIGHT].copy_from_slice(&self.rows());
        lines[HEIGHT..HEIGHT + WIDTH].copy_from_slice(&self.columns());
        lines[HEIGHT + WIDTH..].copy_from_slice(&self.diagonals());
        lines
    }

    /// Returns the symbol filling a whole line, or `Empty` if nobody has won (yet)
    ///
    /// If more than one symbol has a full line the result is undefined.
    pub fn winner(&self) -> Symbol {
        self.lines()
            .iter()
            .map(line_winner)
            .find(|symbol| !symbol.is_empty())
            .unwrap_or(Symbol::Empty)
    }

    /// True if there is a winner or no empty cell is left
    pub fn is_terminal(&self) -> bool {
        !self.winner().is_empty() || self.is_full()
    }
}

// the symbol making up the whole line, or Empty
fn line_winner(line: &Line) -> Symbol {
    if line.iter().all(|&symbol| symbol == line[0]) {
        line[0]
    } else {
        Symbol::Empty
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses 16 cells left-to-right, top-to-bottom: `X`, `O`, and any of
    /// `.-_?` for an empty cell. Whitespace and `/` separators are ignored.
    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let mut cells = [Symbol::Empty; CELLS];
        let mut count = 0;

        for c in layout.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let symbol = match c {
                'X' | 'x' => Symbol::X,
                'O' | 'o' => Symbol::O,
                '.' | '-' | '_' | '?' => Symbol::Empty,
                _ => {
                    return Err(GameError::InvalidBoard(format!(
                        "could not parse '{}' as a cell",
                        c
                    )))
                }
            };
            if count == CELLS {
                return Err(GameError::InvalidBoard(format!(
                    "more than {} cells in '{}'",
                    CELLS, layout
                )));
            }
            cells[count] = symbol;
            count += 1;
        }

        if count != CELLS {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELLS, count
            )));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows().iter() {
            for symbol in row.iter() {
                match symbol {
                    Symbol::Empty => write!(f, ".")?,
                    _ => write!(f, "{}", symbol)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
