//! Reference clock sources.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Frequency of the fixed on-die master oscillator before division, in Hz.
pub const MASTER_OSC_HZ: f64 = 310e6;

/// Valid divider range for the on-die oscillator.
const OSC_DIV_MIN: u32 = 2;
const OSC_DIV_MAX: u32 = 128;

/// A named reference oscillator.
///
/// Either supplied by the board (a crystal routed to a clock input) or
/// generated on-die by dividing the fixed master oscillator. Immutable once
/// selected; every generator plan traces back to exactly one source, and the
/// source is only ever read after selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClockSource {
    /// Source name (e.g., "clk25", "oscg").
    pub name: String,
    /// Nominal frequency in Hz.
    pub freq_hz: f64,
    /// Whether the source is generated on-die rather than board-supplied.
    pub internal: bool,
}

impl ClockSource {
    /// A board-supplied external oscillator.
    pub fn external(name: impl Into<String>, freq_hz: f64) -> Self {
        Self {
            name: name.into(),
            freq_hz,
            internal: false,
        }
    }

    /// The on-die oscillator: the fixed master frequency divided by `div`.
    ///
    /// The divider must lie in the hardware's supported range (2..=128).
    pub fn internal_osc(div: u32) -> Result<Self, PlanError> {
        if !(OSC_DIV_MIN..=OSC_DIV_MAX).contains(&div) {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "internal oscillator divider {div} is outside the supported range \
                     {OSC_DIV_MIN}..={OSC_DIV_MAX}"
                ),
            });
        }
        Ok(Self {
            name: "oscg".into(),
            freq_hz: MASTER_OSC_HZ / f64::from(div),
            internal: true,
        })
    }
}
