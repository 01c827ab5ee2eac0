//! `soclight board` — board profile listing, description, and validation.

use std::path::Path;

use anyhow::{bail, Result};
use soclight_boards::{
    board_to_toml, generate_template, load_board_toml, supported_boards, validate_board,
    BoardProfile, FlashChipProfile, SdramModuleProfile,
};

/// List all built-in board profiles.
pub fn list() -> Result<()> {
    println!("Supported boards:");
    println!();
    for board in supported_boards() {
        println!(
            "  {:<6} {} (default rev {})",
            board.id, board.name, board.default_revision
        );
    }
    println!();
    println!("Use 'soclight board describe <id>' for details.");
    Ok(())
}

/// Describe a board profile in detail.
pub fn describe(id: &str, format: Option<&str>) -> Result<()> {
    let board = BoardProfile::lookup(id)?;

    match format {
        Some("toml") => {
            print!("{}", board_to_toml(&board)?);
            return Ok(());
        }
        Some(other) => bail!("unknown format '{other}' (expected toml)"),
        None => {}
    }

    println!("=== Board: {} ===", board.name);
    println!("Identifier: {}", board.id);
    println!(
        "Revisions: {} (default {})",
        board.revisions.join(", "),
        board.default_revision
    );
    println!();

    println!("--- Reference clock ---");
    println!("  {}: {:.3} MHz", board.refclk_name, board.refclk_hz / 1e6);
    println!();

    let flash = FlashChipProfile::lookup(&board.flash_chip)?;
    println!("--- Boot flash ---");
    println!(
        "  {}: {} KiB, {} B pages, {} KiB sectors",
        flash.name,
        flash.total_bytes / 1024,
        flash.page_bytes,
        flash.sector_bytes / 1024
    );
    println!();

    let sdram = SdramModuleProfile::lookup(&board.sdram_module)?;
    println!("--- SDRAM ---");
    println!(
        "  {}: {} MiB ({} banks x {} rows x {} cols, {}-bit bus)",
        sdram.name,
        sdram.total_bytes() / (1024 * 1024),
        sdram.banks,
        sdram.rows,
        sdram.cols,
        sdram.data_width
    );

    Ok(())
}

/// Print a template `.board.toml` for a new board.
pub fn template(id: &str) -> Result<()> {
    print!("{}", generate_template(id)?);
    Ok(())
}

/// Validate a `.board.toml` definition file.
pub fn validate(path: &Path) -> Result<()> {
    let board = load_board_toml(path)?;
    match validate_board(&board) {
        Ok(()) => {
            println!("{}: ok", path.display());
            Ok(())
        }
        Err(issues) => {
            let mut has_errors = false;
            for issue in &issues {
                if issue.severity == "error" {
                    has_errors = true;
                }
                eprintln!("{}: {}", issue.severity, issue.message);
            }
            if has_errors {
                bail!("board definition '{}' is invalid", board.id);
            }
            println!("{}: ok ({} warnings)", path.display(), issues.len());
            Ok(())
        }
    }
}
