//! The composition plan and its builder.

use serde::{Deserialize, Serialize};

use crate::domain::ClockDomainSpec;
use crate::error::PlanError;
use crate::hash::{content_hash, hash_hex, short_tag};
use crate::pll::PllPlan;
use crate::source::ClockSource;
use crate::subsystem::{SubsystemDescriptor, SubsystemKind};

/// The final artifact of a build invocation: every generator plan plus the
/// ordered list of enabled subsystem descriptors.
///
/// Constructed once per invocation through [`PlanBuilder`], immutable
/// thereafter, serialized to JSON for the external elaboration service.
/// Subsystems are ordered so that the mandatory core comes first and no
/// descriptor precedes a clock domain it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompositionPlan {
    /// Build identifier used for tagging the produced image.
    pub ident: String,
    /// The single reference oscillator all generator plans share.
    pub source: ClockSource,
    /// Generator plans, core generator first.
    pub plls: Vec<PllPlan>,
    /// Enabled subsystem descriptors in dependency-respecting order.
    pub subsystems: Vec<SubsystemDescriptor>,
}

impl CompositionPlan {
    /// Look up a clock domain across all generator plans.
    pub fn domain(&self, name: &str) -> Option<&ClockDomainSpec> {
        self.plls.iter().find_map(|pll| pll.output(name))
    }

    /// Iterate over every clock domain in the plan.
    pub fn domains(&self) -> impl Iterator<Item = &ClockDomainSpec> {
        self.plls.iter().flat_map(|pll| pll.outputs.iter())
    }

    /// Total number of clock domains.
    pub fn domain_count(&self) -> usize {
        self.plls.iter().map(PllPlan::output_count).sum()
    }

    /// Look up a generator plan by name.
    pub fn pll(&self, name: &str) -> Option<&PllPlan> {
        self.plls.iter().find(|p| p.name == name)
    }

    /// Look up a subsystem descriptor by name.
    pub fn subsystem(&self, name: &str) -> Option<&SubsystemDescriptor> {
        self.subsystems.iter().find(|s| s.name == name)
    }

    /// Full SHA-256 fingerprint of the plan, as hex.
    pub fn fingerprint(&self) -> String {
        hash_hex(&content_hash(self))
    }

    /// Short build tag: the ident plus the first eight fingerprint chars.
    pub fn build_tag(&self) -> String {
        format!("{}-{}", self.ident, short_tag(&content_hash(self)))
    }
}

/// Assembles and validates a [`CompositionPlan`].
///
/// Generator plans are added first, then subsystem descriptors; what got
/// included is decided here and independently inspectable on the returned
/// immutable plan. [`build`](PlanBuilder::build) runs the cross-checks that
/// need the whole picture: domain-name uniqueness is enforced on insertion,
/// reference resolution and descriptor ordering at build time.
#[derive(Debug)]
pub struct PlanBuilder {
    ident: String,
    source: ClockSource,
    plls: Vec<PllPlan>,
    subsystems: Vec<SubsystemDescriptor>,
}

impl PlanBuilder {
    /// Start a plan for the given build identifier and reference source.
    pub fn new(ident: impl Into<String>, source: ClockSource) -> Self {
        Self {
            ident: ident.into(),
            source,
            plls: Vec::new(),
            subsystems: Vec::new(),
        }
    }

    /// Add a generator plan.
    ///
    /// The plan must be fed by the builder's reference source, stay within
    /// generator capacity, and must not redefine a domain name already owned
    /// by an earlier generator.
    pub fn add_pll(&mut self, pll: PllPlan) -> Result<(), PlanError> {
        pll.validate_capacity()?;
        if pll.source != self.source.name {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "generator '{}' is fed by source '{}', expected '{}'",
                    pll.name, pll.source, self.source.name
                ),
            });
        }
        if self.plls.iter().any(|p| p.name == pll.name) {
            return Err(PlanError::InvalidConfig {
                reason: format!("duplicate generator name '{}'", pll.name),
            });
        }
        for output in &pll.outputs {
            if self
                .plls
                .iter()
                .any(|p| p.output(&output.name).is_some())
            {
                return Err(PlanError::InvalidConfig {
                    reason: format!(
                        "clock domain '{}' is already owned by another generator",
                        output.name
                    ),
                });
            }
        }
        self.plls.push(pll);
        Ok(())
    }

    /// Record a subsystem descriptor.
    ///
    /// Disabled descriptors are dropped here: they allocate nothing and never
    /// appear in the built plan.
    pub fn add_subsystem(&mut self, descriptor: SubsystemDescriptor) {
        if descriptor.enabled {
            self.subsystems.push(descriptor);
        }
    }

    /// Validate cross-references and ordering, then freeze the plan.
    ///
    /// Fails with [`PlanError::UnresolvedDomainReference`] when any
    /// descriptor names a domain absent from the generator plans, and with
    /// [`PlanError::InvalidConfig`] when the mandatory core subsystem is
    /// missing or not first.
    pub fn build(self) -> Result<CompositionPlan, PlanError> {
        match self.subsystems.first() {
            Some(first) if first.kind == SubsystemKind::Core => {}
            Some(first) => {
                return Err(PlanError::InvalidConfig {
                    reason: format!(
                        "subsystem '{}' precedes the mandatory core subsystem",
                        first.name
                    ),
                })
            }
            None => {
                return Err(PlanError::InvalidConfig {
                    reason: "plan contains no core subsystem".into(),
                })
            }
        }

        let plan = CompositionPlan {
            ident: self.ident,
            source: self.source,
            plls: self.plls,
            subsystems: self.subsystems,
        };

        for subsystem in &plan.subsystems {
            for domain in &subsystem.clock_domains {
                if plan.domain(domain).is_none() {
                    return Err(PlanError::UnresolvedDomainReference {
                        subsystem: subsystem.name.clone(),
                        domain: domain.clone(),
                    });
                }
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subsystem::SubsystemParams;

    fn sys_pll(source: &ClockSource) -> PllPlan {
        let mut pll = PllPlan::new("sys_pll", source);
        pll.create_output(ClockDomainSpec::new("sys", 60e6)).unwrap();
        pll.create_output(ClockDomainSpec::new("sys_ps", 60e6).with_phase(180.0))
            .unwrap();
        pll
    }

    fn core_descriptor() -> SubsystemDescriptor {
        SubsystemDescriptor::new(
            "core",
            SubsystemKind::Core,
            SubsystemParams::Core {
                ident: "SoC on Colorlight I5".into(),
            },
        )
        .bound_to("sys")
    }

    #[test]
    fn build_minimal_plan() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("SoC on Colorlight I5", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        builder.add_subsystem(core_descriptor());

        let plan = builder.build().unwrap();
        assert_eq!(plan.domain_count(), 2);
        assert_eq!(plan.domain("sys").unwrap().freq_hz, 60e6);
        assert_eq!(plan.subsystems.len(), 1);
    }

    #[test]
    fn unresolved_reference_fails() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        builder.add_subsystem(core_descriptor());
        builder.add_subsystem(
            SubsystemDescriptor::new(
                "video",
                SubsystemKind::Video,
                SubsystemParams::Video {
                    mode: crate::subsystem::DisplayMode::Terminal,
                    timings: "800x600@60Hz".into(),
                },
            )
            .bound_to("pixel_clk"),
        );

        let err = builder.build().unwrap_err();
        match err {
            PlanError::UnresolvedDomainReference { subsystem, domain } => {
                assert_eq!(subsystem, "video");
                assert_eq!(domain, "pixel_clk");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn foreign_source_rejected() {
        let source = ClockSource::external("clk25", 25e6);
        let other = ClockSource::external("clk100", 100e6);
        let mut builder = PlanBuilder::new("test", source);
        let err = builder.add_pll(PllPlan::new("sys_pll", &other)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig { .. }));
    }

    #[test]
    fn duplicate_domain_name_rejected() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();

        let mut second = PllPlan::new("video_pll", &source);
        second
            .create_output(ClockDomainSpec::new("sys", 40e6))
            .unwrap();
        let err = builder.add_pll(second).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig { .. }));
    }

    #[test]
    fn missing_core_fails() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn core_must_come_first() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        builder.add_subsystem(
            SubsystemDescriptor::new(
                "flash",
                SubsystemKind::SpiFlash,
                SubsystemParams::SpiFlash {
                    chip: "GD25Q16".into(),
                    bus_width: "1x".into(),
                    read_opcode: "READ_1_1_1".into(),
                },
            )
            .bound_to("sys"),
        );
        builder.add_subsystem(core_descriptor());
        assert!(builder.build().is_err());
    }

    #[test]
    fn disabled_descriptor_never_enters_the_plan() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        builder.add_subsystem(core_descriptor());
        builder.add_subsystem(core_descriptor().with_enabled(false));

        let plan = builder.build().unwrap();
        assert_eq!(plan.subsystems.len(), 1);
    }

    #[test]
    fn plan_json_round_trip() {
        let source = ClockSource::external("clk25", 25e6);
        let mut builder = PlanBuilder::new("test", source.clone());
        builder.add_pll(sys_pll(&source)).unwrap();
        builder.add_subsystem(core_descriptor());
        let plan = builder.build().unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        let parsed: CompositionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, parsed);
    }

    #[test]
    fn fingerprint_tracks_configuration() {
        let source = ClockSource::external("clk25", 25e6);

        let build = |freq: f64| {
            let mut builder = PlanBuilder::new("test", source.clone());
            let mut pll = PllPlan::new("sys_pll", &source);
            pll.create_output(ClockDomainSpec::new("sys", freq)).unwrap();
            builder.add_pll(pll).unwrap();
            builder.add_subsystem(core_descriptor());
            builder.build().unwrap()
        };

        assert_eq!(build(60e6).fingerprint(), build(60e6).fingerprint());
        assert_ne!(build(60e6).fingerprint(), build(48e6).fingerprint());
        assert!(build(60e6).build_tag().starts_with("test-"));
    }
}
