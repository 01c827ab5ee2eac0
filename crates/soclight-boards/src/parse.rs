//! TOML parsing, serialization, validation, and discovery for board profiles.
//!
//! Custom boards are defined as `<id>.board.toml` files in the `boards/`
//! directory of a project. This module loads, validates, serializes, and
//! discovers those files; built-in boards never pass through here.

use std::path::{Path, PathBuf};

use soclight_core::pll::{PLL_INPUT_MAX_HZ, PLL_INPUT_MIN_HZ};

use crate::board::BoardProfile;
use crate::error::{BoardError, Result};
use crate::flash::FlashChipProfile;
use crate::sdram::SdramModuleProfile;

/// A validation issue found in a board definition.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a board profile from a `.board.toml` file.
pub fn load_board_toml(path: &Path) -> Result<BoardProfile> {
    if !path.exists() {
        return Err(BoardError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_board_toml(&content)
}

/// Parse a board profile from a TOML string.
pub fn parse_board_toml(toml_str: &str) -> Result<BoardProfile> {
    let board: BoardProfile = toml::from_str(toml_str)?;
    Ok(board)
}

/// Serialize a board profile to pretty TOML.
pub fn board_to_toml(board: &BoardProfile) -> Result<String> {
    let toml_str = toml::to_string_pretty(board)?;
    Ok(toml_str)
}

/// Validate a board definition for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
pub fn validate_board(board: &BoardProfile) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. Identifier is present
    if board.id.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: "board has an empty identifier".into(),
        });
    } else if board.id.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "board identifier '{}' contains uppercase characters; lookups are \
                 case-insensitive but files are discovered by lowercase id",
                board.id
            ),
        });
    }

    // 2. At least one revision exists
    if board.revisions.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: "board lists no revisions".into(),
        });
    }

    // 3. Default revision is among the listed revisions
    if !board.revisions.iter().any(|r| r == &board.default_revision) {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "default revision '{}' is not among the listed revisions",
                board.default_revision
            ),
        });
    }

    // 4. Reference clock within the generator's input range
    if board.refclk_hz < PLL_INPUT_MIN_HZ || board.refclk_hz > PLL_INPUT_MAX_HZ {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "reference clock {:.3} MHz is outside the generator input range {:.0}-{:.0} MHz",
                board.refclk_hz / 1e6,
                PLL_INPUT_MIN_HZ / 1e6,
                PLL_INPUT_MAX_HZ / 1e6,
            ),
        });
    }

    // 5. Flash chip resolves in the catalog
    if let Err(e) = FlashChipProfile::lookup(&board.flash_chip) {
        issues.push(ValidationIssue {
            severity: "error",
            message: e.to_string(),
        });
    }

    // 6. SDRAM module resolves in the catalog
    if let Err(e) = SdramModuleProfile::lookup(&board.sdram_module) {
        issues.push(ValidationIssue {
            severity: "error",
            message: e.to_string(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template `.board.toml` for a new board.
///
/// Seeds from the Colorlight i5 profile with the given custom identifier.
pub fn generate_template(id: &str) -> Result<String> {
    let mut board = BoardProfile::colorlight_i5();
    board.id = id.into();
    board.name = id.to_uppercase();
    board_to_toml(&board)
}

/// Discover all `.board.toml` files in a project's `boards/` directory.
///
/// Returns a list of (board_id, file_path) pairs.
pub fn discover_boards(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let boards_dir = project_dir.join("boards");
    if !boards_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut boards = Vec::new();
    let entries = std::fs::read_dir(&boards_dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let id = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".board.toml"))
            .map(str::to_string);
        if let Some(id) = id {
            boards.push((id, path));
        }
    }
    boards.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(boards)
}
