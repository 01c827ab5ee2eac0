//! Elaboration engine for the soclight SoC planner.
//!
//! Turns a build configuration into an immutable composition plan through a
//! two-stage pipeline: clock plan resolution (reference source and target
//! frequencies to generator plans), then subsystem composition (configuration
//! flags and resolved domains to an ordered descriptor list). Either the
//! whole pipeline succeeds and returns a plan plus a report, or it fails
//! synchronously with a configuration error.

pub mod clock;
pub mod compose;
pub mod error;
pub mod pipeline;
pub mod report;

pub use clock::{
    resolve_core_domains, resolve_display_domains, PIXEL_CLK_HZ, SERIAL_CLK_RATIO, SYS_PLL,
    VIDEO_PLL,
};
pub use compose::{compose, ComposeOptions, VIDEO_TIMINGS};
pub use error::ElaborationError;
pub use pipeline::{elaborate, ElabConfig, ElabOutput};
pub use report::ElaborationReport;
