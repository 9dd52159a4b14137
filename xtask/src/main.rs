//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest, then the doctests.
    Test,
    /// Run the criterion benchmarks.
    Bench {
        /// Only run benchmarks whose name matches this filter.
        filter: Option<String>,
    },
    /// Run the bundled usage example.
    Example,
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();
        Ok(Self { root })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench { filter } => bench(&paths, filter.as_deref()),
        CommandName::Example => example(&paths),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest. Nextest skips doctests, so those run
/// separately.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    cmd!(sh, "cargo test --doc -p ctrlgrid").run()?;
    Ok(())
}

/// Run the `ctrlgrid` benchmarks, optionally filtered by name.
fn bench(paths: &RepoPaths, filter: Option<&str>) -> Result<()> {
    let sh = repo_shell(paths)?;
    let filter = filter.into_iter().collect::<Vec<_>>();
    cmd!(sh, "cargo bench -p ctrlgrid -- {filter...}").run()?;
    Ok(())
}

/// Run the surface grid example.
fn example(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo run -q -p ctrlgrid --example grid").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}
