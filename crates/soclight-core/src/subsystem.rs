//! Subsystem descriptors and their kind-specific parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Memory-controller timing mode: the ratio between the controller clock and
/// the SDRAM device clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemoryTimingMode {
    /// Controller and device share one clock.
    #[default]
    #[serde(rename = "1:1")]
    OneToOne,
    /// Device runs at twice the controller clock, sampled through a
    /// phase-shifted companion domain.
    #[serde(rename = "1:2")]
    OneToTwo,
}

impl fmt::Display for MemoryTimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToOne => write!(f, "1:1"),
            Self::OneToTwo => write!(f, "1:2"),
        }
    }
}

impl FromStr for MemoryTimingMode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(Self::OneToOne),
            "1:2" => Ok(Self::OneToTwo),
            other => Err(PlanError::InvalidConfig {
                reason: format!("unknown memory timing mode '{other}' (expected 1:1 or 1:2)"),
            }),
        }
    }
}

/// Operating mode of the display pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Character terminal rendered over the video link.
    Terminal,
    /// Memory-mapped framebuffer scanned out over the video link.
    Framebuffer,
}

impl DisplayMode {
    /// Derive the display mode from the two input flags.
    ///
    /// Both flags set is a configuration error, never a silent override;
    /// neither set means no display pipeline is requested.
    pub fn from_flags(terminal: bool, framebuffer: bool) -> Result<Option<Self>, PlanError> {
        match (terminal, framebuffer) {
            (true, true) => Err(PlanError::MutuallyExclusiveOptions {
                first: "with-video-terminal".into(),
                second: "with-video-framebuffer".into(),
            }),
            (true, false) => Ok(Some(Self::Terminal)),
            (false, true) => Ok(Some(Self::Framebuffer)),
            (false, false) => Ok(None),
        }
    }
}

/// The kind of a planned hardware subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsystemKind {
    /// The mandatory CPU/bus core.
    Core,
    /// SDRAM memory controller.
    Sdram,
    /// Boot-flash SPI interface.
    SpiFlash,
    /// Display pipeline.
    Video,
}

/// Kind-specific subsystem parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsystemParams {
    Core {
        /// Identifier string used for build tagging.
        ident: String,
    },
    Sdram {
        /// SDRAM module profile name.
        module: String,
        /// Controller-to-device clock ratio.
        timing_mode: MemoryTimingMode,
        /// L2 cache size in bytes.
        l2_cache_size: u32,
    },
    SpiFlash {
        /// Flash chip profile name.
        chip: String,
        /// SPI bus width (e.g., "1x").
        bus_width: String,
        /// Read opcode the chip is driven with.
        read_opcode: String,
    },
    Video {
        /// Terminal or framebuffer operation.
        mode: DisplayMode,
        /// Video timing line (e.g., "800x600@60Hz").
        timings: String,
    },
}

/// A planned optional hardware subsystem and the clock domains it requires.
///
/// Descriptors never own clock domains; `clock_domains` holds name
/// back-references into the plan's domain set, and every reference must
/// resolve when the plan is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubsystemDescriptor {
    /// Subsystem instance name.
    pub name: String,
    pub kind: SubsystemKind,
    /// Names of the clock domains this subsystem samples or drives.
    pub clock_domains: Vec<String>,
    pub params: SubsystemParams,
    /// Derived from input flags; only enabled descriptors enter the plan.
    pub enabled: bool,
}

impl SubsystemDescriptor {
    /// An enabled descriptor with no clock-domain references yet.
    pub fn new(name: impl Into<String>, kind: SubsystemKind, params: SubsystemParams) -> Self {
        Self {
            name: name.into(),
            kind,
            clock_domains: Vec::new(),
            params,
            enabled: true,
        }
    }

    /// Add a clock-domain reference by name.
    pub fn bound_to(mut self, domain: impl Into<String>) -> Self {
        self.clock_domains.push(domain.into());
        self
    }

    /// Set the enabled state derived from input flags.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_mode_round_trip() {
        assert_eq!("1:1".parse::<MemoryTimingMode>().unwrap().to_string(), "1:1");
        assert_eq!("1:2".parse::<MemoryTimingMode>().unwrap().to_string(), "1:2");
    }

    #[test]
    fn timing_mode_unknown_rejected() {
        assert!(matches!(
            "2:1".parse::<MemoryTimingMode>(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn display_mode_from_flags() {
        assert_eq!(
            DisplayMode::from_flags(true, false).unwrap(),
            Some(DisplayMode::Terminal)
        );
        assert_eq!(
            DisplayMode::from_flags(false, true).unwrap(),
            Some(DisplayMode::Framebuffer)
        );
        assert_eq!(DisplayMode::from_flags(false, false).unwrap(), None);
    }

    #[test]
    fn display_mode_conflict_is_an_error() {
        let err = DisplayMode::from_flags(true, true).unwrap_err();
        assert!(matches!(err, PlanError::MutuallyExclusiveOptions { .. }));
    }

    #[test]
    fn descriptor_binding() {
        let desc = SubsystemDescriptor::new(
            "sdram",
            SubsystemKind::Sdram,
            SubsystemParams::Sdram {
                module: "M12L64322A".into(),
                timing_mode: MemoryTimingMode::OneToTwo,
                l2_cache_size: 8192,
            },
        )
        .bound_to("sys")
        .bound_to("sys2x")
        .bound_to("sys2x_ps");

        assert_eq!(desc.clock_domains, vec!["sys", "sys2x", "sys2x_ps"]);
        assert!(desc.enabled);
    }
}
