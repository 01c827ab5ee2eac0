//! Board profile catalogs for the soclight SoC planner.
//!
//! A board profile names everything the planner selects by board identity:
//! the reference oscillator, the boot-flash chip, and the SDRAM module.
//! Built-in profiles cover the supported Colorlight boards; additional boards
//! can be defined as `.board.toml` files and validated against the catalogs.

pub mod board;
pub mod error;
pub mod flash;
pub mod parse;
pub mod sdram;

pub use board::{supported_boards, BoardProfile};
pub use error::{BoardError, Result};
pub use flash::FlashChipProfile;
pub use parse::{
    board_to_toml, discover_boards, generate_template, load_board_toml, parse_board_toml,
    validate_board, ValidationIssue,
};
pub use sdram::{SdramModuleProfile, SdramTimings};
