//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the 2048 rules and state management.
//! It has **zero dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted source) produces identical games
//! - **Testable**: Every rule is reachable through the public API
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, the slide/merge primitive and the mirror/transpose transforms
//! - [`game_state`]: the engine owning board, score and status
//! - [`rng`]: injectable randomness for tile spawning
//! - [`snapshot`]: plain copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Slide**: all tiles move as far as possible in the chosen direction
//! - **Merge**: two equal neighbours in the direction of motion become one tile of
//!   double value; a merged tile does not merge again in the same move
//! - **Score**: every merge adds the merged tile's value
//! - **Spawn**: after a move that changed the board, a 2 (90%) or 4 (10%) appears
//!   on a random empty cell
//! - **Win**: a 2048 tile appears
//! - **Loss**: the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameStatus};
//!
//! // Create a seeded, already started game
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Play a few turns
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.handle_move(dir);
//! }
//!
//! // Read the state back
//! assert_eq!(game.state().len(), 4);
//! let _score = game.score();
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{compact_and_merge_left, Board, BoardError, MoveOutcome};
pub use game_state::GameState;
pub use rng::{spawn_value, RandSource, ScriptedSource, TileSource};
pub use snapshot::GameSnapshot;
