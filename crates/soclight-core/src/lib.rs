//! Core data model for the soclight SoC configuration planner.
//!
//! A build invocation resolves a set of clock domains from a single reference
//! oscillator, decides which optional hardware subsystems are instantiated,
//! and hands the resulting [`CompositionPlan`] to the external elaboration
//! service. This crate holds the vocabulary shared by the clock resolver and
//! the subsystem composer: clock sources, clock-domain specifications, PLL
//! generator plans, subsystem descriptors, and the error taxonomy.

pub mod domain;
pub mod error;
pub mod hash;
pub mod plan;
pub mod pll;
pub mod source;
pub mod subsystem;

pub use domain::ClockDomainSpec;
pub use error::PlanError;
pub use hash::{content_hash, hash_hex, short_tag, ContentHash};
pub use plan::{CompositionPlan, PlanBuilder};
pub use pll::{
    PllPlan, MAX_PLL_OUTPUTS, PLL_INPUT_MAX_HZ, PLL_INPUT_MIN_HZ, PLL_OUTPUT_MAX_HZ,
    PLL_OUTPUT_MIN_HZ,
};
pub use source::{ClockSource, MASTER_OSC_HZ};
pub use subsystem::{
    DisplayMode, MemoryTimingMode, SubsystemDescriptor, SubsystemKind, SubsystemParams,
};
