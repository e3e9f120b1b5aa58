//! Text rendering of the board and game messages.

use crate::config::GameConfig;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use perfect_tictactoe::{Board, GameStatus, Player as Mark, Square};
use std::io::{self, Write};

/// Draws the board as rows of `" X | O |  "` separated by dashes.
pub fn render_board(board: &Board, config: &GameConfig) -> String {
    let mut result = String::from("\n");
    for row in board.squares().chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|square| match square {
                Square::Empty => ' '.to_string(),
                Square::Occupied(mark) => config.symbol(*mark).to_string(),
            })
            .collect();
        result.push_str(&cells.join(" | "));
        result.push('\n');
        result.push_str(&"-".repeat(9));
        result.push('\n');
    }
    result.push('\n');
    result
}

/// Terminal output for one game.
pub struct Console<W: Write> {
    out: W,
    config: GameConfig,
}

impl<W: Write> Console<W> {
    /// Creates a console writing to `out`.
    pub fn new(out: W, config: GameConfig) -> Self {
        Self { out, config }
    }

    /// Clears the screen (when configured) and draws the board.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        if *self.config.clear_screen() {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.out, "{}", render_board(board, &self.config))?;
        self.out.flush()
    }

    /// Tells the players whose turn it is.
    pub fn announce_turn(&mut self, mark: Mark) -> io::Result<()> {
        match mark {
            Mark::Human => writeln!(self.out, "Your turn ({}):", self.config.symbol(mark)),
            Mark::Computer => writeln!(self.out, "Computer is thinking..."),
        }
    }

    /// Prints the closing message for a finished game.
    pub fn announce_result(&mut self, status: GameStatus) -> io::Result<()> {
        match status {
            GameStatus::Won(Mark::Human) => writeln!(self.out, "You win!"),
            GameStatus::Won(Mark::Computer) => writeln!(self.out, "The computer wins!"),
            GameStatus::Draw => writeln!(self.out, "It's a draw!"),
            GameStatus::InProgress => Ok(()),
        }?;
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        let text = render_board(&board, &GameConfig::default());
        assert_eq!(
            text,
            "\nX | O |  \n---------\n  | X |  \n---------\nO |   |  \n---------\n\n"
        );
    }

    #[test]
    fn test_render_custom_symbols() {
        let config: GameConfig =
            toml::from_str("human_symbol = \"#\"\ncomputer_symbol = \"@\"").unwrap();
        let board: Board = "X...O....".parse().unwrap();
        let text = render_board(&board, &config);
        assert!(text.starts_with("\n# |   |  \n"));
        assert!(text.contains("  | @ |  "));
    }

    #[test]
    fn test_console_without_clearing() {
        let config = GameConfig::default().with_overrides(false, true);
        let mut console = Console::new(Vec::new(), config);
        console.show_board(&Board::new()).unwrap();
        console.announce_result(GameStatus::Draw).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.starts_with("\n  |   |  \n"));
        assert!(out.ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_turn_and_result_messages() {
        let config: GameConfig =
            toml::from_str("human_symbol = \"#\"\nclear_screen = false").unwrap();
        let mut console = Console::new(Vec::new(), config);
        console.announce_turn(Mark::Human).unwrap();
        console.announce_turn(Mark::Computer).unwrap();
        console.announce_result(GameStatus::Won(Mark::Human)).unwrap();
        console.announce_result(GameStatus::Won(Mark::Computer)).unwrap();
        console.announce_result(GameStatus::InProgress).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            out,
            "Your turn (#):\nComputer is thinking...\nYou win!\nThe computer wins!\n"
        );
    }
}
