//! modforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use modforge_cli_lib::commands::{ResourceCommand, ResourceOptions, TargetKind};
use modforge_cli_lib::observability;

#[derive(Parser)]
#[command(name = "modforge")]
#[command(version)]
#[command(about = "Scaffold Express/Prisma resource modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Project root the modules directory is resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file to use instead of `<root>/modforge.toml`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only complete modules that already exist
    #[arg(long, global = true)]
    existing: bool,

    /// Create all missing files without asking
    #[arg(short, long, global = true)]
    yes: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a resource module under the modules root
    Resource {
        /// Resource name (e.g., `user`, `order-item`)
        name: Option<String>,
    },
    /// Scaffold a resource module inside nested folders
    NestedResource {
        /// Folder path ending in the resource name (e.g., `admin/billing/invoice`)
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.global.verbose)?;

    let options = ResourceOptions {
        project_root: cli.global.root,
        config_file: cli.global.config,
        existing_only: cli.global.existing,
        assume_yes: cli.global.yes,
        no_color: cli.global.no_color,
    };

    let cmd = match cli.command {
        Commands::Resource { name } => ResourceCommand::new(name, TargetKind::Flat, options),
        Commands::NestedResource { path } => {
            ResourceCommand::new(path, TargetKind::Nested, options)
        }
    };
    cmd.execute()?;

    Ok(())
}
