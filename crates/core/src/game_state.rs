//! Game state module - the 2048 rule engine
//!
//! [`GameState`] exclusively owns the board, the score and the status. Callers
//! drive it through [`GameState::handle_move`] / [`GameState::apply_action`] and
//! read it back through accessors or [`GameState::snapshot`]; nothing outside
//! this module mutates the board.

use log::{debug, info};

use crate::board::Board;
use crate::rng::{spawn_value, RandSource, TileSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameStatus, Rows, INITIAL_TILES, WIN_TILE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandSource> {
    board: Board,
    score: u32,
    status: GameStatus,
    /// Monotonic game counter (increments on restart).
    episode_id: u32,
    source: S,
}

impl GameState<RandSource> {
    /// Create a started game whose spawns are reproducible from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandSource::seeded(seed))
    }

    /// Create a started game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_source(RandSource::from_entropy())
    }
}

impl<S: TileSource> GameState<S> {
    /// Create a started game drawing spawns from `source`
    pub fn with_source(source: S) -> Self {
        let mut state = Self::unseeded(Board::new(), source);
        state.start();
        state
    }

    /// Create a game on top of an existing board.
    ///
    /// The two opening tiles are still spawned into the given board. Status
    /// starts as `Playing` and is only re-evaluated by the next handled move.
    pub fn with_initial_board(board: Board, source: S) -> Self {
        let mut state = Self::unseeded(board, source);
        state.spawn_opening_tiles();
        state
    }

    fn unseeded(board: Board, source: S) -> Self {
        Self {
            board,
            score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
            source,
        }
    }

    /// Reset to an empty board, zero score, `Playing`, then spawn two tiles
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.spawn_opening_tiles();
        debug!("game {} started:\n{}", self.episode_id, self.board);
    }

    /// Start a new game and bump the episode counter
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start();
    }

    fn spawn_opening_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.add_random_tile();
        }
    }

    /// Place a 2 (p = 0.9) or 4 (p = 0.1) on a uniformly chosen empty cell.
    ///
    /// No-op on a full board. Returns whether a tile was placed.
    fn add_random_tile(&mut self) -> bool {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return false;
        }

        let (row, col) = empty[self.source.pick(empty.len())];
        let value = spawn_value(&mut self.source);
        self.board.set(row, col, value);
        debug!("spawned {} at ({}, {})", value, row, col);
        true
    }

    /// Slide left without spawning or status checks. Returns whether the board changed.
    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    pub fn move_up(&mut self) -> bool {
        self.shift(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.shift(Direction::Down)
    }

    fn shift(&mut self, dir: Direction) -> bool {
        let outcome = self.board.shift(dir);
        self.score += outcome.gained;
        outcome.moved
    }

    /// Play one turn.
    ///
    /// Ignored unless the game is `Playing`. Otherwise slides the board,
    /// spawns a tile if anything moved, then checks for a win and, only if
    /// still playing, for a loss. Returns whether the board moved.
    pub fn handle_move(&mut self, dir: Direction) -> bool {
        if !self.status.accepts_moves() {
            return false;
        }

        let score_before = self.score;
        let moved = self.shift(dir);
        if moved {
            self.add_random_tile();
        }
        debug!(
            "move {}: moved={} gained={} score={}",
            dir.as_str(),
            moved,
            self.score - score_before,
            self.score
        );

        self.check_win_condition();
        if self.status == GameStatus::Playing && self.is_game_over() {
            self.status = GameStatus::Lost;
            info!(
                "game {} lost: score={} highest={}",
                self.episode_id,
                self.score,
                self.board.highest_tile()
            );
        }
        moved
    }

    /// Like [`handle_move`](Self::handle_move) but from a text token.
    ///
    /// Unrecognized tokens change nothing.
    pub fn handle_move_token(&mut self, token: &str) -> bool {
        match Direction::from_str(token) {
            Some(dir) => self.handle_move(dir),
            None => {
                debug!("ignoring unknown direction token {:?}", token);
                false
            }
        }
    }

    /// Apply a game action. Returns whether the visible state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => {
                let status = self.status;
                let moved = self.handle_move(dir);
                moved || status != self.status
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Mark the game `Won` if any tile equals 2048.
    ///
    /// Re-confirms `Won` every time it runs once the tile is present.
    pub fn check_win_condition(&mut self) {
        if self.board.contains(WIN_TILE) {
            if self.status != GameStatus::Won {
                info!("game {} won: score={}", self.episode_id, self.score);
            }
            self.status = GameStatus::Won;
        }
    }

    /// True iff the board is full and no two neighbouring tiles are equal
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_equal()
    }

    /// Current grid; empty cells are 0
    pub fn state(&self) -> &Rows {
        self.board.rows()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.score = self.score;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.highest_tile = self.board.highest_tile();
        out.empty_cells = self.board.count_empty() as u8;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
