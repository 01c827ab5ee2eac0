//! Clock-domain specifications.

use serde::{Deserialize, Serialize};

/// A named logical clock domain: one frequency/phase region of the design.
///
/// Domains are produced only as generator outputs (see
/// [`PllPlan`](crate::pll::PllPlan)); each one belongs to exactly one
/// generator plan for its lifetime, and subsystems refer to it by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClockDomainSpec {
    /// Domain name (e.g., "sys", "sys2x_ps", "pixel_clk").
    pub name: String,
    /// Target frequency in Hz.
    pub freq_hz: f64,
    /// Phase offset in degrees of the clock period relative to the
    /// generator's zero-phase output.
    #[serde(default)]
    pub phase_deg: f64,
    /// Frequency tolerance the generator may use when picking dividers.
    /// `None` leaves the generator's default tolerance in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

impl ClockDomainSpec {
    /// A zero-phase domain at the given frequency with default margin.
    pub fn new(name: impl Into<String>, freq_hz: f64) -> Self {
        Self {
            name: name.into(),
            freq_hz,
            phase_deg: 0.0,
            margin: None,
        }
    }

    /// Set the phase offset in degrees.
    pub fn with_phase(mut self, degrees: f64) -> Self {
        self.phase_deg = degrees;
        self
    }

    /// Pin the frequency margin instead of the generator default.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }
}
