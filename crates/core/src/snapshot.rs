use crate::types::{GameStatus, Rows, BOARD_SIZE};

/// Plain copy of everything a presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Rows,
    pub score: u32,
    pub status: GameStatus,
    pub episode_id: u32,
    pub highest_tile: u32,
    pub empty_cells: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.status = GameStatus::Playing;
        self.episode_id = 0;
        self.highest_tile = 0;
        self.empty_cells = (BOARD_SIZE * BOARD_SIZE) as u8;
    }

    pub fn playable(&self) -> bool {
        self.status.accepts_moves()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
            highest_tile: 0,
            empty_cells: 0,
        };
        s.clear();
        s
    }
}
