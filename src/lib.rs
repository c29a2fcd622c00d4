#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
mod targeting;

pub use bitboard::{BitBoard, BitBoardError, CellSet, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, DEFAULT_LEVEL};
pub use player::*;
pub use ship::*;
pub use targeting::*;
