//! CLI argument definitions for the Reorder binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use reorder::ReorderConfig;

use crate::output::OutputFormat;

/// Output format selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned tables for reading in a terminal
    Human,
    /// Machine-readable JSON on stdout
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Compute minimal position updates for reordering a collection
#[derive(Parser, Debug)]
#[command(name = "reorder")]
#[command(about = "Reorder: minimal-delta reordering for fractionally positioned collections")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, default_value = "human", global = true, env = "REORDER_FORMAT")]
    pub format: Format,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the collection in its current order
    Sort(InputArgs),
    /// Move one entity and print the changes to persist
    Move(MoveArgs),
    /// Report whether a move would force a renumber, and why
    Check(MoveArgs),
    /// Apply a list of change records and print the resulting order
    Apply(ApplyArgs),
    /// Work out which single move produces a target order
    Diff(DiffArgs),
}

/// Where to read the collection from
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON array of `{ "id": ..., "position": ... }` objects, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,
}

/// Arguments for the move and check commands
#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Id of the entity to move
    #[arg(long)]
    pub id: String,

    /// Index the entity should occupy in the final order
    #[arg(long)]
    pub index: usize,
}

/// Arguments for the apply command
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON array of `{ "id": ..., "position": ... }` change records
    #[arg(short, long)]
    pub changes: PathBuf,
}

/// Arguments for the diff command
#[derive(clap::Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Desired order as a comma separated list of ids
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub order: Vec<String>,
}

/// Engine thresholds. Flags win over the config file, which wins over defaults.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON config file with `minPositionGap`, `renumberSpacing`, `minPositionValue`
    #[arg(long, global = true, env = "REORDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum distance a new position keeps from its neighbours
    #[arg(long, global = true, env = "REORDER_MIN_GAP")]
    pub min_gap: Option<f64>,

    /// Spacing between positions after a renumber
    #[arg(long, global = true, env = "REORDER_SPACING")]
    pub spacing: Option<f64>,

    /// Lowest valid position value
    #[arg(long, global = true, env = "REORDER_MIN_POSITION")]
    pub min_position: Option<f64>,
}

impl ConfigArgs {
    /// Builds the effective config from the file and flag overrides.
    pub fn resolve(&self) -> reorder::Result<ReorderConfig> {
        let mut config = match &self.config {
            Some(path) => ReorderConfig::load_from_file(path)?,
            None => ReorderConfig::default(),
        };
        if let Some(gap) = self.min_gap {
            config.min_position_gap = gap;
        }
        if let Some(spacing) = self.spacing {
            config.renumber_spacing = spacing;
        }
        if let Some(min) = self.min_position {
            config.min_position_value = min;
        }
        config.validate()?;
        Ok(config)
    }
}
