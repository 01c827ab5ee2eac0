//! soclight CLI — SoC configuration planner for Colorlight boards.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "soclight",
    version,
    about = "SoC configuration planner for Colorlight boards"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve clock domains and compose a build plan
    Plan {
        /// Board type (i5/i9)
        #[arg(long, default_value = "i5")]
        board: String,
        /// Board revision (profile default when omitted)
        #[arg(long)]
        revision: Option<String>,
        /// Target system clock frequency in Hz
        #[arg(long, default_value_t = 60e6)]
        sys_clk_freq: f64,
        /// SDRAM timing mode (1:1 or 1:2)
        #[arg(long, default_value = "1:1")]
        sdram_rate: String,
        /// Use the on-die oscillator instead of the board clock
        #[arg(long)]
        use_internal_osc: bool,
        /// Divider for the on-die oscillator
        #[arg(long, default_value_t = 5)]
        osc_div: u32,
        /// Enable a video terminal on the display output
        #[arg(long, conflicts_with = "with_video_framebuffer")]
        with_video_terminal: bool,
        /// Enable a video framebuffer on the display output
        #[arg(long)]
        with_video_framebuffer: bool,
        /// Main RAM is provisioned upstream; skip the SDRAM controller
        #[arg(long)]
        main_ram_provisioned: bool,
        /// L2 cache size in bytes
        #[arg(long, default_value_t = 8192)]
        l2_size: u32,
        /// Output format (human, json)
        #[arg(long)]
        export: Option<String>,
        /// Write the plan JSON to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Inspect board profiles
    Board {
        #[command(subcommand)]
        action: BoardAction,
    },
}

#[derive(Subcommand)]
enum BoardAction {
    /// List supported boards
    List,
    /// Show details of a board profile
    Describe {
        /// Board identifier
        id: String,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print a template .board.toml for a new board
    Template {
        /// Board identifier
        id: String,
    },
    /// Validate a .board.toml definition
    Validate {
        /// Path to the .board.toml file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Plan {
            board,
            revision,
            sys_clk_freq,
            sdram_rate,
            use_internal_osc,
            osc_div,
            with_video_terminal,
            with_video_framebuffer,
            main_ram_provisioned,
            l2_size,
            export,
            output,
        } => commands::plan::run(
            &board,
            revision.as_deref(),
            sys_clk_freq,
            &sdram_rate,
            use_internal_osc,
            osc_div,
            with_video_terminal,
            with_video_framebuffer,
            main_ram_provisioned,
            l2_size,
            export.as_deref(),
            output.as_deref(),
        ),

        Commands::Board { action } => match action {
            BoardAction::List => commands::board::list(),
            BoardAction::Describe { id, format } => {
                commands::board::describe(&id, format.as_deref())
            }
            BoardAction::Template { id } => commands::board::template(&id),
            BoardAction::Validate { path } => commands::board::validate(&path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    /// The full pipeline runs through the CLI layer and leaves a readable
    /// plan file behind.
    #[test]
    fn plan_via_cli_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.plan.json");
        commands::plan::run(
            "i9",
            None,
            48e6,
            "1:2",
            false,
            5,
            true,
            false,
            false,
            8192,
            None,
            Some(&path),
        )
        .unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let plan: soclight_core::CompositionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan.ident, "SoC on Colorlight I9");
        assert!(plan.domain("sys2x").is_some());
        assert!(plan.subsystem("video").is_some());
    }

    #[test]
    fn conflicting_video_flags_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "soclight",
            "plan",
            "--with-video-terminal",
            "--with-video-framebuffer",
        ]);
        assert!(result.is_err());
    }
}
