//! Boot-flash chip catalog.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// A SPI NOR flash chip the boot-flash interface can be built around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlashChipProfile {
    /// Chip name (e.g., "GD25Q16").
    pub name: String,
    /// Total capacity in bytes.
    pub total_bytes: u64,
    /// Program page size in bytes.
    pub page_bytes: u32,
    /// Erase sector size in bytes.
    pub sector_bytes: u32,
    /// Read opcodes the chip supports, slowest-but-safest first.
    pub read_opcodes: Vec<String>,
}

impl FlashChipProfile {
    /// GigaDevice GD25Q16: 16 Mbit SPI NOR.
    pub fn gd25q16() -> Self {
        Self {
            name: "GD25Q16".into(),
            total_bytes: 2 * 1024 * 1024,
            page_bytes: 256,
            sector_bytes: 4096,
            read_opcodes: vec!["READ_1_1_1".into(), "FAST_READ_1_1_1".into()],
        }
    }

    /// Winbond W25Q64: 64 Mbit SPI NOR.
    pub fn w25q64() -> Self {
        Self {
            name: "W25Q64".into(),
            total_bytes: 8 * 1024 * 1024,
            page_bytes: 256,
            sector_bytes: 4096,
            read_opcodes: vec!["READ_1_1_1".into(), "FAST_READ_1_1_1".into()],
        }
    }

    /// Resolve a chip name against the built-in catalog.
    pub fn lookup(name: &str) -> Result<Self> {
        match name {
            "GD25Q16" => Ok(Self::gd25q16()),
            "W25Q64" => Ok(Self::w25q64()),
            _ => Err(BoardError::UnknownFlashChip { name: name.into() }),
        }
    }

    /// Whether the chip supports a given read opcode.
    pub fn supports_read_opcode(&self, opcode: &str) -> bool {
        self.read_opcodes.iter().any(|o| o == opcode)
    }
}
