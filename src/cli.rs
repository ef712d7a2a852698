use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Redistricting plan scorer
#[derive(Parser, Debug)]
#[command(name = "districtscore", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more plans, writing one JSON scorecard per line
    Score(ScoreArgs),

    /// Check shapes and adjacency graph for asymmetries and connectivity
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Precinct attribute table (CSV keyed by GEOID)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Precinct shapes (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub shapes: PathBuf,

    /// Precinct adjacency graph (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Number of districts; defaults to the distinct districts of the first plan
    #[arg(long)]
    pub districts: Option<u32>,

    /// Scoring configuration (JSON); missing keys take their defaults
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Worker threads for scoring several plans (overrides the config file)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Skip the arc symmetry check
    #[arg(long)]
    pub no_check_arcs: bool,

    /// Output file; scorecards go to stdout when omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,

    /// Plan files (CSV with GEOID and DISTRICT columns)
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub plans: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Precinct shapes (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub shapes: PathBuf,

    /// Precinct adjacency graph (JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Absolute tolerance for arc length comparisons
    #[arg(long, default_value_t = 1e-4)]
    pub tolerance: f64,
}
