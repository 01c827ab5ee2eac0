//! `soclight plan` — resolve clock domains and compose a build plan.

use std::path::Path;

use anyhow::{bail, Context, Result};
use soclight_core::subsystem::MemoryTimingMode;
use soclight_elab::{elaborate, ElabConfig};

/// Run the planning pipeline and print or write the result.
#[allow(clippy::too_many_arguments)]
pub fn run(
    board: &str,
    revision: Option<&str>,
    sys_clk_freq: f64,
    sdram_rate: &str,
    use_internal_osc: bool,
    osc_div: u32,
    with_video_terminal: bool,
    with_video_framebuffer: bool,
    main_ram_provisioned: bool,
    l2_size: u32,
    export: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let timing_mode: MemoryTimingMode = sdram_rate.parse()?;

    let config = ElabConfig {
        board: board.into(),
        revision: revision.map(Into::into),
        sys_clk_freq,
        timing_mode,
        use_internal_osc,
        internal_osc_div: osc_div,
        with_video_terminal,
        with_video_framebuffer,
        main_ram_provisioned,
        l2_cache_size: l2_size,
    };

    let out = elaborate(&config)?;

    match export {
        None | Some("human") => print!("{}", out.report),
        Some("json") => println!("{}", serde_json::to_string_pretty(&out.plan)?),
        Some(other) => bail!("unknown export format '{other}' (expected human or json)"),
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&out.plan)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing plan to {}", path.display()))?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_defaults(output: Option<&Path>) -> Result<()> {
        run(
            "i5", None, 60e6, "1:1", false, 5, false, false, false, 8192, None, output,
        )
    }

    #[test]
    fn default_plan_succeeds() {
        run_defaults(None).unwrap();
    }

    #[test]
    fn plan_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i5.plan.json");
        run_defaults(Some(&path)).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let plan: soclight_core::CompositionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan.ident, "SoC on Colorlight I5");
    }

    #[test]
    fn bad_sdram_rate_rejected() {
        let result = run(
            "i5", None, 60e6, "2:1", false, 5, false, false, false, 8192, None, None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn conflicting_video_flags_rejected() {
        let result = run(
            "i5", None, 60e6, "1:1", false, 5, true, true, false, 8192, None, None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_export_format_rejected() {
        let result = run(
            "i5", None, 60e6, "1:1", false, 5, false, false, false, 8192, Some("yaml"), None,
        );
        assert!(result.is_err());
    }
}
