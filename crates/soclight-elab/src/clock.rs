//! Clock plan resolution.
//!
//! Turns the selected reference source and the target frequencies into
//! generator plans. Core system domains and display domains are kept on
//! separate generators: one generator cannot mix unrelated frequency
//! families with unrelated phase requirements without exceeding its jitter
//! and filter design limits, so the split is part of the data model rather
//! than something discovered later during elaboration.

use soclight_core::domain::ClockDomainSpec;
use soclight_core::error::PlanError;
use soclight_core::pll::{PllPlan, PLL_INPUT_MAX_HZ, PLL_INPUT_MIN_HZ};
use soclight_core::source::ClockSource;
use soclight_core::subsystem::MemoryTimingMode;

/// Pixel clock for the fixed 800x600@60Hz video mode, in Hz.
pub const PIXEL_CLK_HZ: f64 = 40e6;

/// Serializer bit-clock multiple of the pixel clock.
pub const SERIAL_CLK_RATIO: f64 = 5.0;

/// Name of the core generator plan.
pub const SYS_PLL: &str = "sys_pll";

/// Name of the display generator plan.
pub const VIDEO_PLL: &str = "video_pll";

fn check_source(source: &ClockSource) -> Result<(), PlanError> {
    if source.freq_hz < PLL_INPUT_MIN_HZ || source.freq_hz > PLL_INPUT_MAX_HZ {
        return Err(PlanError::InvalidConfig {
            reason: format!(
                "reference '{}' at {:.3} MHz is outside the generator input range {:.0}-{:.0} MHz",
                source.name,
                source.freq_hz / 1e6,
                PLL_INPUT_MIN_HZ / 1e6,
                PLL_INPUT_MAX_HZ / 1e6,
            ),
        });
    }
    Ok(())
}

/// Resolve the core system clock domains into the `sys_pll` generator plan.
///
/// Always produces "sys" at the target frequency. In 1:2 timing mode the
/// memory controller additionally needs a double-rate domain and its 180°
/// phase-shifted companion for sampling-delay compensation ("sys2x" and
/// "sys2x_ps"); in 1:1 mode the 180° companion sits on the system clock
/// itself ("sys_ps"). The two shapes are mutually exclusive by construction.
pub fn resolve_core_domains(
    source: &ClockSource,
    target_sys_freq: f64,
    timing_mode: MemoryTimingMode,
) -> Result<PllPlan, PlanError> {
    if !(target_sys_freq > 0.0) {
        return Err(PlanError::InvalidConfig {
            reason: format!("target system frequency must be positive, got {target_sys_freq}"),
        });
    }
    check_source(source)?;

    let mut pll = PllPlan::new(SYS_PLL, source);
    pll.create_output(ClockDomainSpec::new("sys", target_sys_freq))?;
    match timing_mode {
        MemoryTimingMode::OneToTwo => {
            pll.create_output(ClockDomainSpec::new("sys2x", 2.0 * target_sys_freq))?;
            pll.create_output(
                ClockDomainSpec::new("sys2x_ps", 2.0 * target_sys_freq).with_phase(180.0),
            )?;
        }
        MemoryTimingMode::OneToOne => {
            pll.create_output(ClockDomainSpec::new("sys_ps", target_sys_freq).with_phase(180.0))?;
        }
    }
    Ok(pll)
}

/// Resolve the display clock domains, if a display was requested.
///
/// Returns `Ok(None)` when `enabled` is false: no generator is allocated and
/// no outputs are reserved. Otherwise allocates the `video_pll` generator on
/// the same reference source, producing the fixed pixel clock and the 5x
/// serializer bit clock, both with margin pinned to zero.
pub fn resolve_display_domains(
    source: &ClockSource,
    enabled: bool,
) -> Result<Option<PllPlan>, PlanError> {
    if !enabled {
        return Ok(None);
    }
    check_source(source)?;

    let mut pll = PllPlan::new(VIDEO_PLL, source);
    pll.create_output(ClockDomainSpec::new("pixel_clk", PIXEL_CLK_HZ).with_margin(0.0))?;
    pll.create_output(
        ClockDomainSpec::new("serial_clk", PIXEL_CLK_HZ * SERIAL_CLK_RATIO).with_margin(0.0),
    )?;
    Ok(Some(pll))
}
