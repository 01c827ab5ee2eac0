//! Board profiles and the board-identifier lookup table.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// A supported board: identity, reference clock, and part selection.
///
/// The profile is the single place where a board identifier turns into
/// concrete parts. Subsystem composition reads the flash chip and SDRAM
/// module through this table rather than comparing identifier strings
/// anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardProfile {
    /// Board identifier (e.g., "i5").
    pub id: String,
    /// Human-readable board name.
    pub name: String,
    /// Revisions this profile covers.
    pub revisions: Vec<String>,
    /// Revision assumed when none is given.
    pub default_revision: String,
    /// Board reference oscillator frequency in Hz.
    pub refclk_hz: f64,
    /// Reference oscillator net name.
    pub refclk_name: String,
    /// Boot flash chip profile name.
    pub flash_chip: String,
    /// SDRAM module profile name.
    pub sdram_module: String,
}

impl BoardProfile {
    /// The Colorlight i5 receiver card.
    pub fn colorlight_i5() -> Self {
        Self {
            id: "i5".into(),
            name: "Colorlight I5".into(),
            revisions: vec!["7.0".into()],
            default_revision: "7.0".into(),
            refclk_hz: 25e6,
            refclk_name: "clk25".into(),
            flash_chip: "GD25Q16".into(),
            sdram_module: "M12L64322A".into(),
        }
    }

    /// The Colorlight i9 receiver card.
    pub fn colorlight_i9() -> Self {
        Self {
            id: "i9".into(),
            name: "Colorlight I9".into(),
            revisions: vec!["7.2".into()],
            default_revision: "7.2".into(),
            refclk_hz: 25e6,
            refclk_name: "clk25".into(),
            flash_chip: "W25Q64".into(),
            sdram_module: "M12L64322A".into(),
        }
    }

    /// Resolve a board identifier against the built-in catalog.
    ///
    /// Identifiers are case-insensitive. Unknown identifiers fail with
    /// [`BoardError::UnknownBoard`] rather than falling through to any
    /// default.
    pub fn lookup(id: &str) -> Result<Self> {
        match id.to_lowercase().as_str() {
            "i5" => Ok(Self::colorlight_i5()),
            "i9" => Ok(Self::colorlight_i9()),
            _ => Err(BoardError::UnknownBoard { id: id.into() }),
        }
    }

    /// Check that `revision` is covered by this profile.
    pub fn validate_revision(&self, revision: &str) -> Result<()> {
        if self.revisions.iter().any(|r| r == revision) {
            Ok(())
        } else {
            Err(BoardError::UnknownRevision {
                board: self.id.clone(),
                revision: revision.into(),
            })
        }
    }

    /// Build identifier string for images produced from this board.
    pub fn ident(&self) -> String {
        format!("SoC on {}", self.name)
    }
}

/// All built-in board profiles.
pub fn supported_boards() -> Vec<BoardProfile> {
    vec![BoardProfile::colorlight_i5(), BoardProfile::colorlight_i9()]
}
