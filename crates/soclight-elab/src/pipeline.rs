//! Elaboration pipeline orchestrator.

use soclight_boards::{BoardProfile, FlashChipProfile, SdramModuleProfile};
use soclight_core::plan::CompositionPlan;
use soclight_core::source::ClockSource;
use soclight_core::subsystem::{DisplayMode, MemoryTimingMode};

use crate::clock::{resolve_core_domains, resolve_display_domains};
use crate::compose::{compose, ComposeOptions};
use crate::error::ElaborationError;
use crate::report::ElaborationReport;

/// Configuration for one elaboration run.
///
/// Mirrors the external argument surface one-to-one; defaults match the
/// board's common bring-up configuration.
#[derive(Debug, Clone)]
pub struct ElabConfig {
    /// Board identifier ("i5" / "i9").
    pub board: String,
    /// Board revision; the profile default when `None`.
    pub revision: Option<String>,
    /// Target system frequency in Hz.
    pub sys_clk_freq: f64,
    /// Memory-controller timing mode.
    pub timing_mode: MemoryTimingMode,
    /// Use the on-die oscillator instead of the board reference clock.
    pub use_internal_osc: bool,
    /// Divider for the on-die oscillator.
    pub internal_osc_div: u32,
    /// Request a video terminal.
    pub with_video_terminal: bool,
    /// Request a video framebuffer.
    pub with_video_framebuffer: bool,
    /// Main memory already provisioned upstream; skip the memory controller.
    pub main_ram_provisioned: bool,
    /// Memory controller L2 cache size in bytes.
    pub l2_cache_size: u32,
}

impl Default for ElabConfig {
    fn default() -> Self {
        Self {
            board: "i5".into(),
            revision: None,
            sys_clk_freq: 60e6,
            timing_mode: MemoryTimingMode::OneToOne,
            use_internal_osc: false,
            internal_osc_div: 5,
            with_video_terminal: false,
            with_video_framebuffer: false,
            main_ram_provisioned: false,
            l2_cache_size: 8192,
        }
    }
}

/// Output of a successful elaboration run.
#[derive(Debug, Clone)]
pub struct ElabOutput {
    /// The immutable plan handed to the external elaboration service.
    pub plan: CompositionPlan,
    /// Human-readable summary.
    pub report: ElaborationReport,
}

/// Run the full elaboration pipeline:
/// board lookup -> source selection -> clock resolution -> composition.
///
/// All-or-nothing: either a complete plan is returned or the first
/// configuration error propagates and nothing partial escapes.
pub fn elaborate(config: &ElabConfig) -> Result<ElabOutput, ElaborationError> {
    let board = BoardProfile::lookup(&config.board)?;
    let revision = match &config.revision {
        Some(revision) => {
            board.validate_revision(revision)?;
            revision.clone()
        }
        None => board.default_revision.clone(),
    };
    let flash = FlashChipProfile::lookup(&board.flash_chip)?;
    let sdram = SdramModuleProfile::lookup(&board.sdram_module)?;

    // Conflicting display flags are rejected before anything is allocated;
    // the composer re-validates them.
    let display_mode =
        DisplayMode::from_flags(config.with_video_terminal, config.with_video_framebuffer)?;

    let source = if config.use_internal_osc {
        ClockSource::internal_osc(config.internal_osc_div)?
    } else {
        ClockSource::external(board.refclk_name.clone(), board.refclk_hz)
    };

    let sys_pll = resolve_core_domains(&source, config.sys_clk_freq, config.timing_mode)?;
    let video_pll = resolve_display_domains(&source, display_mode.is_some())?;

    let options = ComposeOptions {
        timing_mode: config.timing_mode,
        with_video_terminal: config.with_video_terminal,
        with_video_framebuffer: config.with_video_framebuffer,
        main_ram_provisioned: config.main_ram_provisioned,
        l2_cache_size: config.l2_cache_size,
    };
    let plan = compose(&board, &flash, &sdram, &options, source, sys_pll, video_pll)?;

    let report = ElaborationReport::from_plan(
        &board.id,
        &revision,
        config.sys_clk_freq,
        config.timing_mode,
        &plan,
    );

    Ok(ElabOutput { plan, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soclight_boards::BoardError;
    use soclight_core::error::PlanError;
    use soclight_core::subsystem::SubsystemKind;

    #[test]
    fn default_config_elaborates() {
        let out = elaborate(&ElabConfig::default()).unwrap();
        assert_eq!(out.plan.ident, "SoC on Colorlight I5");
        assert_eq!(out.plan.domain("sys").unwrap().freq_hz, 60e6);
        assert_eq!(out.plan.subsystems[0].kind, SubsystemKind::Core);
        assert_eq!(out.report.revision, "7.0");
    }

    #[test]
    fn terminal_scenario_produces_expected_domains() {
        let out = elaborate(&ElabConfig {
            with_video_terminal: true,
            ..ElabConfig::default()
        })
        .unwrap();

        let names: Vec<&str> = out.plan.domains().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["sys", "sys_ps", "pixel_clk", "serial_clk"]);
        assert_eq!(out.plan.domain("pixel_clk").unwrap().freq_hz, 40e6);
        assert_eq!(out.plan.domain("serial_clk").unwrap().freq_hz, 200e6);
    }

    #[test]
    fn half_rate_scenario_never_mixes_shapes() {
        let out = elaborate(&ElabConfig {
            timing_mode: MemoryTimingMode::OneToTwo,
            sys_clk_freq: 48e6,
            ..ElabConfig::default()
        })
        .unwrap();

        assert_eq!(out.plan.domain("sys2x").unwrap().freq_hz, 96e6);
        assert!(out.plan.domain("sys2x_ps").is_some());
        assert!(out.plan.domain("sys_ps").is_none());
    }

    #[test]
    fn unknown_board_fails() {
        let err = elaborate(&ElabConfig {
            board: "i7".into(),
            ..ElabConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ElaborationError::Board(BoardError::UnknownBoard { .. })
        ));
    }

    #[test]
    fn unknown_revision_fails() {
        let err = elaborate(&ElabConfig {
            revision: Some("1.0".into()),
            ..ElabConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ElaborationError::Board(BoardError::UnknownRevision { .. })
        ));
    }

    #[test]
    fn conflicting_video_flags_fail_for_any_board() {
        for board in ["i5", "i9"] {
            let err = elaborate(&ElabConfig {
                board: board.into(),
                with_video_terminal: true,
                with_video_framebuffer: true,
                ..ElabConfig::default()
            })
            .unwrap_err();
            assert!(matches!(
                err,
                ElaborationError::Plan(PlanError::MutuallyExclusiveOptions { .. })
            ));
        }
    }

    #[test]
    fn internal_osc_replaces_board_reference() {
        let out = elaborate(&ElabConfig {
            use_internal_osc: true,
            ..ElabConfig::default()
        })
        .unwrap();
        assert_eq!(out.plan.source.name, "oscg");
        assert_eq!(out.plan.source.freq_hz, 62e6);
        assert!(out.plan.source.internal);
    }

    #[test]
    fn i9_selects_its_own_flash_chip() {
        let out = elaborate(&ElabConfig {
            board: "i9".into(),
            ..ElabConfig::default()
        })
        .unwrap();
        match &out.plan.subsystem("spiflash").unwrap().params {
            soclight_core::subsystem::SubsystemParams::SpiFlash { chip, .. } => {
                assert_eq!(chip, "W25Q64");
            }
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn identical_configs_share_a_fingerprint() {
        let a = elaborate(&ElabConfig::default()).unwrap();
        let b = elaborate(&ElabConfig::default()).unwrap();
        assert_eq!(a.plan.fingerprint(), b.plan.fingerprint());

        let c = elaborate(&ElabConfig {
            sys_clk_freq: 48e6,
            ..ElabConfig::default()
        })
        .unwrap();
        assert_ne!(a.plan.fingerprint(), c.plan.fingerprint());
    }

    #[test]
    fn report_reflects_the_plan() {
        let out = elaborate(&ElabConfig {
            with_video_framebuffer: true,
            ..ElabConfig::default()
        })
        .unwrap();
        assert_eq!(out.report.domains.len(), out.plan.domain_count());
        assert_eq!(out.report.subsystems.len(), out.plan.subsystems.len());
        let rendered = format!("{}", out.report);
        assert!(rendered.contains("pixel_clk"));
        assert!(rendered.contains("video"));
    }
}
