use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// trace host register usage and remapping over a register listing.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

impl Arguments {
    pub fn options(&self) -> &Options {
        self.command.options()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the registers each instruction reads, writes and modifies.
    #[command(visible_alias = "u")]
    Usage(Options),
    /// Replace virtual registers according to the listing's assignments.
    #[command(visible_alias = "r")]
    Rewrite(Options),
}

impl Command {
    pub fn options(&self) -> &Options {
        match self {
            Self::Usage(opts) => opts,
            Self::Rewrite(opts) => opts,
        }
    }

    pub fn rewrite(&self) -> bool {
        matches!(self, Self::Rewrite(_))
    }
}

#[derive(Debug, Args)]
pub struct Options {
    /// The target whose register bank real registers are checked against.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Print real registers by their architectural names.
    #[arg(long, action = ArgAction::SetTrue)]
    pub names: bool,

    /// Log every table mutation.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[arg(required = true)]
    pub path: PathBuf,
}
