//! PLL generator plans.

use serde::{Deserialize, Serialize};

use crate::domain::ClockDomainSpec;
use crate::error::PlanError;
use crate::source::ClockSource;

/// Maximum number of output clock domains one generator can drive.
pub const MAX_PLL_OUTPUTS: usize = 4;

/// Documented output frequency range of the generator technology, in Hz.
pub const PLL_OUTPUT_MIN_HZ: f64 = 3.125e6;
pub const PLL_OUTPUT_MAX_HZ: f64 = 400e6;

/// Documented reference-input frequency range of the generator, in Hz.
pub const PLL_INPUT_MIN_HZ: f64 = 8e6;
pub const PLL_INPUT_MAX_HZ: f64 = 400e6;

/// A planned frequency generator: one reference input, up to
/// [`MAX_PLL_OUTPUTS`] output clock domains.
///
/// The plan holds its clock source by name; the source itself lives on the
/// [`CompositionPlan`](crate::plan::CompositionPlan) and is shared read-only
/// between generator plans. All outputs of one plan derive from the same
/// input reference frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PllPlan {
    /// Generator name (e.g., "sys_pll", "video_pll").
    pub name: String,
    /// Name of the reference clock source feeding this generator.
    pub source: String,
    /// Reference input frequency in Hz, identical for every output.
    pub input_hz: f64,
    /// Output clock domains in creation order.
    pub outputs: Vec<ClockDomainSpec>,
}

impl PllPlan {
    /// An empty generator plan bound to `source`.
    pub fn new(name: impl Into<String>, source: &ClockSource) -> Self {
        Self {
            name: name.into(),
            source: source.name.clone(),
            input_hz: source.freq_hz,
            outputs: Vec::new(),
        }
    }

    /// Add an output clock domain.
    ///
    /// Fails with [`PlanError::GeneratorCapacityExceeded`] when the generator
    /// already drives its maximum output count, and with
    /// [`PlanError::InvalidConfig`] when the requested frequency is outside
    /// the generator's documented output range.
    pub fn create_output(&mut self, spec: ClockDomainSpec) -> Result<(), PlanError> {
        if self.outputs.len() >= MAX_PLL_OUTPUTS {
            return Err(PlanError::GeneratorCapacityExceeded {
                pll: self.name.clone(),
                requested: self.outputs.len() + 1,
                capacity: MAX_PLL_OUTPUTS,
            });
        }
        if !(PLL_OUTPUT_MIN_HZ..=PLL_OUTPUT_MAX_HZ).contains(&spec.freq_hz) {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "output '{}' frequency {:.3} MHz is outside the generator range \
                     {:.3}-{:.0} MHz",
                    spec.name,
                    spec.freq_hz / 1e6,
                    PLL_OUTPUT_MIN_HZ / 1e6,
                    PLL_OUTPUT_MAX_HZ / 1e6,
                ),
            });
        }
        self.outputs.push(spec);
        Ok(())
    }

    /// Look up an output domain by name.
    pub fn output(&self, name: &str) -> Option<&ClockDomainSpec> {
        self.outputs.iter().find(|d| d.name == name)
    }

    /// Number of output domains currently planned.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Re-check the capacity invariant on an already-assembled plan.
    pub fn validate_capacity(&self) -> Result<(), PlanError> {
        if self.outputs.len() > MAX_PLL_OUTPUTS {
            return Err(PlanError::GeneratorCapacityExceeded {
                pll: self.name.clone(),
                requested: self.outputs.len(),
                capacity: MAX_PLL_OUTPUTS,
            });
        }
        Ok(())
    }
}
