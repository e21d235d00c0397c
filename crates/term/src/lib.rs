//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is then flushed to a terminal backend, so the view
//! itself stays pure and testable.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Draw only what changed between frames
//! - Size tiles so four to six digit values stay readable

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_frame_into, TerminalRenderer};
