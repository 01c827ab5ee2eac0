//! Subsystem composition.
//!
//! Decides, from configuration flags plus the resolved generator plans,
//! which subsystems exist, and emits them in dependency-respecting order:
//! the mandatory core always first, every other descriptor only after the
//! clock domains it references are part of the plan.

use soclight_boards::{BoardProfile, FlashChipProfile, SdramModuleProfile};
use soclight_core::error::PlanError;
use soclight_core::plan::{CompositionPlan, PlanBuilder};
use soclight_core::pll::PllPlan;
use soclight_core::source::ClockSource;
use soclight_core::subsystem::{
    DisplayMode, MemoryTimingMode, SubsystemDescriptor, SubsystemKind, SubsystemParams,
};

/// Video timing line for the fixed display mode.
pub const VIDEO_TIMINGS: &str = "800x600@60Hz";

/// Composition flags beyond the resolved clock domains.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Controller-to-device clock ratio for the memory controller.
    pub timing_mode: MemoryTimingMode,
    /// Request a video terminal on the display pipeline.
    pub with_video_terminal: bool,
    /// Request a framebuffer on the display pipeline.
    pub with_video_framebuffer: bool,
    /// Main memory was already provisioned upstream; emit no memory
    /// controller. This is reported explicitly by the caller, never inferred.
    pub main_ram_provisioned: bool,
    /// Memory controller L2 cache size in bytes.
    pub l2_cache_size: u32,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            timing_mode: MemoryTimingMode::OneToOne,
            with_video_terminal: false,
            with_video_framebuffer: false,
            main_ram_provisioned: false,
            l2_cache_size: 8192,
        }
    }
}

/// Compose the ordered subsystem descriptor list into a finished plan.
///
/// The generator plans must already be resolved; this function decides what
/// is instantiated and how it references the resolved domains. Display-mode
/// flags are re-validated here even when the caller already checked them.
pub fn compose(
    board: &BoardProfile,
    flash: &FlashChipProfile,
    sdram: &SdramModuleProfile,
    options: &ComposeOptions,
    source: ClockSource,
    sys_pll: PllPlan,
    video_pll: Option<PllPlan>,
) -> Result<CompositionPlan, PlanError> {
    let display_mode =
        DisplayMode::from_flags(options.with_video_terminal, options.with_video_framebuffer)?;

    let mut builder = PlanBuilder::new(board.ident(), source);
    builder.add_pll(sys_pll)?;
    if let Some(pll) = video_pll {
        builder.add_pll(pll)?;
    }

    builder.add_subsystem(
        SubsystemDescriptor::new(
            "core",
            SubsystemKind::Core,
            SubsystemParams::Core {
                ident: board.ident(),
            },
        )
        .bound_to("sys"),
    );

    let mut sdram_desc = SubsystemDescriptor::new(
        "sdram",
        SubsystemKind::Sdram,
        SubsystemParams::Sdram {
            module: sdram.name.clone(),
            timing_mode: options.timing_mode,
            l2_cache_size: options.l2_cache_size,
        },
    )
    .with_enabled(!options.main_ram_provisioned)
    .bound_to("sys");
    if options.timing_mode == MemoryTimingMode::OneToTwo {
        sdram_desc = sdram_desc.bound_to("sys2x").bound_to("sys2x_ps");
    }
    builder.add_subsystem(sdram_desc);

    builder.add_subsystem(
        SubsystemDescriptor::new(
            "spiflash",
            SubsystemKind::SpiFlash,
            SubsystemParams::SpiFlash {
                chip: flash.name.clone(),
                bus_width: "1x".into(),
                read_opcode: "READ_1_1_1".into(),
            },
        )
        .bound_to("sys"),
    );

    if let Some(mode) = display_mode {
        builder.add_subsystem(
            SubsystemDescriptor::new(
                "video",
                SubsystemKind::Video,
                SubsystemParams::Video {
                    mode,
                    timings: VIDEO_TIMINGS.into(),
                },
            )
            .bound_to("pixel_clk")
            .bound_to("serial_clk"),
        );
    }

    builder.build()
}
