//! Elaboration report summarizing a resolved plan.

use std::fmt;

use serde::Serialize;
use soclight_core::plan::CompositionPlan;
use soclight_core::subsystem::MemoryTimingMode;

/// One clock-domain line of the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DomainLine {
    pub name: String,
    pub freq_hz: f64,
    pub phase_deg: f64,
}

/// Summary of a completed elaboration, rendered for the invoking build
/// process. The plan itself is the machine-readable artifact; this is the
/// human-readable companion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ElaborationReport {
    /// Board identifier.
    pub board: String,
    /// Board revision the plan was produced for.
    pub revision: String,
    /// Build identifier string.
    pub ident: String,
    /// Target system frequency in Hz.
    pub sys_clk_freq: f64,
    /// Memory-controller timing mode.
    pub timing_mode: MemoryTimingMode,
    /// Every clock domain in the plan, in generator order.
    pub domains: Vec<DomainLine>,
    /// Names of the emitted subsystems, in plan order.
    pub subsystems: Vec<String>,
    /// Short build tag (ident plus fingerprint prefix).
    pub build_tag: String,
}

impl ElaborationReport {
    /// Collect report lines from a finished plan.
    pub fn from_plan(
        board: &str,
        revision: &str,
        sys_clk_freq: f64,
        timing_mode: MemoryTimingMode,
        plan: &CompositionPlan,
    ) -> Self {
        Self {
            board: board.into(),
            revision: revision.into(),
            ident: plan.ident.clone(),
            sys_clk_freq,
            timing_mode,
            domains: plan
                .domains()
                .map(|d| DomainLine {
                    name: d.name.clone(),
                    freq_hz: d.freq_hz,
                    phase_deg: d.phase_deg,
                })
                .collect(),
            subsystems: plan.subsystems.iter().map(|s| s.name.clone()).collect(),
            build_tag: plan.build_tag(),
        }
    }
}

impl fmt::Display for ElaborationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Composition Plan ===")?;
        writeln!(f, "Board: {} (rev {})", self.board, self.revision)?;
        writeln!(f, "Ident: {}", self.ident)?;
        writeln!(f, "Build tag: {}", self.build_tag)?;
        writeln!(
            f,
            "System clock: {:.3} MHz ({})",
            self.sys_clk_freq / 1e6,
            self.timing_mode
        )?;
        writeln!(f)?;

        writeln!(f, "--- Clock domains ({}) ---", self.domains.len())?;
        for domain in &self.domains {
            if domain.phase_deg == 0.0 {
                writeln!(f, "  {:<12} {:>9.3} MHz", domain.name, domain.freq_hz / 1e6)?;
            } else {
                writeln!(
                    f,
                    "  {:<12} {:>9.3} MHz  phase {} deg",
                    domain.name,
                    domain.freq_hz / 1e6,
                    domain.phase_deg
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Subsystems ({}) ---", self.subsystems.len())?;
        for (i, name) in self.subsystems.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_display() {
        let report = ElaborationReport {
            board: "i5".into(),
            revision: "7.0".into(),
            ident: "SoC on Colorlight I5".into(),
            sys_clk_freq: 60e6,
            timing_mode: MemoryTimingMode::OneToOne,
            domains: vec![
                DomainLine {
                    name: "sys".into(),
                    freq_hz: 60e6,
                    phase_deg: 0.0,
                },
                DomainLine {
                    name: "sys_ps".into(),
                    freq_hz: 60e6,
                    phase_deg: 180.0,
                },
            ],
            subsystems: vec!["core".into(), "sdram".into()],
            build_tag: "SoC on Colorlight I5-deadbeef".into(),
        };

        let output = format!("{report}");
        assert!(output.contains("Composition Plan"));
        assert!(output.contains("i5 (rev 7.0)"));
        assert!(output.contains("60.000 MHz"));
        assert!(output.contains("phase 180 deg"));
        assert!(output.contains("1. core"));
    }
}
