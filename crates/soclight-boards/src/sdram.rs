//! SDRAM module timing profiles.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// AC timing parameters of an SDR SDRAM device, in nanoseconds unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SdramTimings {
    /// Precharge-to-activate delay.
    pub trp_ns: f64,
    /// Activate-to-read/write delay.
    pub trcd_ns: f64,
    /// Write recovery time.
    pub twr_ns: f64,
    /// Refresh cycle time.
    pub trfc_ns: f64,
    /// Row active time.
    pub tras_ns: f64,
    /// Interval within which every row must be refreshed, in milliseconds.
    pub refresh_period_ms: f64,
}

/// Geometry and timing of an SDRAM module the memory controller can drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SdramModuleProfile {
    /// Module name (e.g., "M12L64322A").
    pub name: String,
    /// Data bus width in bits.
    pub data_width: u32,
    /// Number of banks.
    pub banks: u32,
    /// Rows per bank.
    pub rows: u32,
    /// Columns per row.
    pub cols: u32,
    pub timings: SdramTimings,
}

impl SdramModuleProfile {
    /// ESMT M12L64322A: 64 Mbit SDR SDRAM, 512K x 32 x 4 banks.
    pub fn m12l64322a() -> Self {
        Self {
            name: "M12L64322A".into(),
            data_width: 32,
            banks: 4,
            rows: 2048,
            cols: 256,
            timings: SdramTimings {
                trp_ns: 15.0,
                trcd_ns: 15.0,
                twr_ns: 15.0,
                trfc_ns: 55.0,
                tras_ns: 40.0,
                refresh_period_ms: 64.0,
            },
        }
    }

    /// Resolve a module name against the built-in catalog.
    pub fn lookup(name: &str) -> Result<Self> {
        match name {
            "M12L64322A" => Ok(Self::m12l64322a()),
            _ => Err(BoardError::UnknownSdramModule { name: name.into() }),
        }
    }

    /// Total capacity in bytes.
    pub fn total_bytes(&self) -> u64 {
        u64::from(self.banks) * u64::from(self.rows) * u64::from(self.cols)
            * u64::from(self.data_width / 8)
    }
}
