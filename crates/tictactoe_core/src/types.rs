//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (always moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::SIZE],
        }
    }

    /// Clears every square. Turn state is owned by the caller.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; Self::SIZE];
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a position.
    pub fn at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of empty squares, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `player` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `index` is not 0-8 and
    /// [`MoveError::SquareOccupied`] if the square already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if self.at(position) != Square::Empty {
            return Err(MoveError::SquareOccupied(position));
        }
        self.place(index, player);
        Ok(())
    }

    /// Clears the square at `index`.
    ///
    /// Only valid for a square set by a matching [`Board::apply`]; the
    /// search pairs every speculative placement with an undo.
    pub fn undo(&mut self, index: usize) {
        debug_assert!(
            matches!(self.get(index), Some(Square::Occupied(_))),
            "undo of a square that was never applied"
        );
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
    }

    /// Derived outcome of the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Unchecked placement for callers that already hold a legal index.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.squares[index] = Square::Occupied(player);
    }

    /// One-line form, `X`/`O` for marks and `.` for empty squares.
    pub fn compact(&self) -> String {
        self.squares
            .iter()
            .map(|square| match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            })
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Input did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character was not a mark or an empty marker.
    #[display("Invalid square character {:?}", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_`, space and the digits
    /// `1`-`9` are empty. `|` and `/` are ignored as row separators.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '|' | '/')).collect();
        if cells.len() != Self::SIZE {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' | '1'..='9' => Square::Empty,
                other => return Err(BoardParseError::InvalidSymbol(other)),
            };
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_apply_sets_square() {
        let mut board = Board::new();
        board.apply(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let mut board = Board::new();
        board.apply(0, Player::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.apply(0, Player::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.apply(9, Player::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_undo_restores_only_that_square() {
        let mut board: Board = "XO.......".parse().unwrap();
        let before = board.clone();

        board.apply(5, Player::X).unwrap();
        board.undo(5);

        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board: Board = "XOXOXOOXO".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_count() {
        let board: Board = "XXO.O....".parse().unwrap();
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn test_parse_accepts_separators_and_digits() {
        let board: Board = "x2o/4X6/78o".parse().unwrap();
        assert_eq!(board.compact(), "X.O.X...O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol('Z'))
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parse_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
