//! Core types module - shared vocabulary and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the rule engine, the input layer and the terminal view alike.
//!
//! # Board
//!
//! The board is a fixed 4x4 grid of tile values:
//!
//! - **0** is an empty cell
//! - any other value is a power of two, starting at 2
//! - reaching [`WIN_TILE`] (2048) wins the game
//!
//! # Spawn Odds
//!
//! | Tile | Probability |
//! |------|-------------|
//! | 2 | 0.9 |
//! | 4 | 0.1 ([`SPAWN_FOUR_PROBABILITY`]) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, BOARD_SIZE, WIN_TILE};
//!
//! // Direction tokens are case-insensitive and accept browser key names
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("ArrowUp"), Some(Direction::Up));
//! assert_eq!(Direction::from_str("diagonal"), None);
//!
//! // Actions wrap a direction or request a restart
//! assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//!
//! assert!(GameStatus::Playing.accepts_moves());
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Board side length in cells (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: usize = 2;

/// Value of the common spawned tile
pub const SPAWN_LOW_TILE: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_TILE: u32 = 4;

/// Probability that a spawned tile is [`SPAWN_HIGH_TILE`]
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// One row (or, after a transpose, one column) of the board
pub type Line = [u32; BOARD_SIZE];

/// The full grid in row-major order: `rows[row][col]`
pub type Rows = [Line; BOARD_SIZE];


/// The four directions tiles can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the engine probes them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction token (case-insensitive)
    ///
    /// Accepts plain names and browser key names with an `Arrow` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("ArrowDown"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let name = lower.strip_prefix("arrow").unwrap_or(&lower);
        match name {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase token
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game phase
///
/// - **Playing**: initial state, the only one that accepts moves
/// - **Won**: a [`WIN_TILE`] is on the board
/// - **Lost**: the board is full and nothing can merge
///
/// `Won` and `Lost` only leave through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether moves are applied in this status
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Actions that can be applied to the game
///
/// Used by both the keyboard mapping and scripted drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current game and deal a fresh board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
