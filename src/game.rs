use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe4_ai::{board::*, CELLS, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Symbol),
    Draw,
}

/// A game between a human and the computer
#[derive(Clone)]
pub struct Game {
    board: Board,
    pub human: Symbol,
    pub to_move: Symbol,
    pub state: GameState,
}

impl Game {
    /// Starts a new game, X always moves first
    pub fn new(human: Symbol) -> Self {
        Self {
            board: Board::new(),
            human,
            to_move: Symbol::X,
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn human_to_move(&self) -> bool {
        self.to_move == self.human
    }

    /// Plays a cell given by the human, numbered from 1
    pub fn play_checked(&mut self, cell_one_indexed: usize) -> Result<GameState> {
        if cell_one_indexed < 1 || cell_one_indexed > CELLS {
            return Err(anyhow!(
                "Invalid move, cell {} out of range. Cells must be between 1 and {}",
                cell_one_indexed,
                CELLS
            ));
        }
        let new_move = Move::new(self.to_move, cell_one_indexed - 1);
        self.board
            .play_checked(new_move)
            .map_err(|err| anyhow!("Invalid move, {}", err))?;
        Ok(self.play(new_move))
    }

    /// Plays a move known to be legal, such as one picked by the solver
    pub fn play(&mut self, new_move: Move) -> GameState {
        self.board = self.board.apply(new_move);
        self.to_move = self.to_move.opponent();
        self.state = match self.board.winner() {
            Symbol::Empty if self.board.is_full() => GameState::Draw,
            Symbol::Empty => GameState::Playing,
            winner => GameState::Won(winner),
        };
        self.state
    }

    // grid colour once the game is over, from the human's point of view
    fn grid_color(&self) -> Color {
        match self.state {
            GameState::Playing => Color::White,
            GameState::Draw => Color::Yellow,
            GameState::Won(winner) if winner == self.human => Color::Green,
            GameState::Won(_) => Color::Red,
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();
        let grid = self.grid_color();
        let separator = format!("+{}\n", "----+".repeat(WIDTH));

        stdout.queue(PrintStyledContent(style("\n")))?;
        for row in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style(separator.as_str()).with(grid)))?;
            stdout.queue(PrintStyledContent(style("|").with(grid)))?;
            for column in 0..WIDTH {
                let cell = row * WIDTH + column;
                let content = match self.board.cell(cell) {
                    Symbol::Empty => style(format!(" {:>2} ", cell + 1)).with(Color::DarkGrey),
                    Symbol::X => style(" X  ".to_string())
                        .attribute(Attribute::Bold)
                        .with(Color::Red),
                    Symbol::O => style(" O  ".to_string())
                        .attribute(Attribute::Bold)
                        .with(Color::Cyan),
                };
                stdout
                    .queue(PrintStyledContent(content))?
                    .queue(PrintStyledContent(style("|").with(grid)))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.queue(PrintStyledContent(style(separator.as_str()).with(grid)))?;
        stdout.flush()?;
        Ok(())
    }
}
