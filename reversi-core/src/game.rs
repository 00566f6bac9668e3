//! Implements game-level Othello logic.
//!
//! [`Game`] tracks whose turn it is and checks every move it applies. For
//! performance, search code works on [`Board`] directly.

use crate::board::Board;
use crate::location::{MoveList, ParsePositionError, Position};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse "black"/"white", or their first letters, in any case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action in an Othello game: pass or place a disc.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Move {
    Piece(Position),
    Pass,
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::Piece(pos)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

impl From<ParsePositionError> for ParseMoveError {
    fn from(_: ParsePositionError) -> Self {
        ParseMoveError
    }
}

/// Parse a move as a position ("d3") or "pass".
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        Ok(Move::Piece(s.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(pos) => fmt::Display::fmt(pos, f),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// A move that the rules do not allow in the current position.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "{} is not a legal move for {}", mv, player)]
pub struct IllegalMoveError {
    pub mv: Move,
    pub player: Player,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
    pub just_passed: bool,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::initial_position(), Player::default())
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
            just_passed: false,
        }
    }

    /// Get the legal placements for the active player.
    #[inline]
    pub fn legal_moves(self) -> MoveList {
        self.board.possible_moves(self.active_player)
    }

    /// Returns whether the active player may make `mv`.
    /// A pass is only legal when no placement is.
    pub fn is_legal(self, mv: Move) -> bool {
        match mv {
            Move::Piece(pos) => self.board.is_legal(pos, self.active_player),
            Move::Pass => !self.board.has_any_move(self.active_player),
        }
    }

    /// Hand the turn to the other player without checking that the pass is forced.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board,
            active_player: !self.active_player,
            just_passed: true,
        }
    }

    /// Place a disc for the active player without checking legality.
    #[inline]
    pub fn make_move(self, pos: Position) -> Self {
        Self {
            board: self.board.apply(pos, self.active_player),
            active_player: !self.active_player,
            just_passed: false,
        }
    }

    /// Make a move as the active player, checking it against the rules first.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        if !self.is_legal(mv) {
            return Err(IllegalMoveError {
                mv,
                player: self.active_player,
            });
        }

        Ok(match mv {
            Move::Pass => self.pass(),
            Move::Piece(pos) => self.make_move(pos),
        })
    }

    /// The game ends when neither player can place a disc.
    pub fn is_finished(self) -> bool {
        !self.board.has_any_move(self.active_player)
            && !self.board.has_any_move(!self.active_player)
    }

    /// The player with more discs, or None for a draw.
    /// Only meaningful once the game [`is_finished`](Game::is_finished).
    pub fn winner(self) -> Option<Player> {
        let (white, black) = self.board.score();
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some(Player::White),
            std::cmp::Ordering::Less => Some(Player::Black),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.just_passed {
            writeln!(f, "(Last move was a pass)")?;
        }
        write!(f, "{} to move", self.active_player)
    }
}
