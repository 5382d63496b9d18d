use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "windgrid")]
#[command(about = "Synthetic U/V wind grid generator with polygon masking")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate UGRD/VGRD records over a polygon
    Generate(GenerateArgs),

    /// Display information about a generated JSON file
    Inspect {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[arg(short, long, help = "Polygon vertex file (.json or .csv, lat/lon)")]
    pub polygon: PathBuf,

    #[arg(short, long, help = "Generation config file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long = "output",
        help = "Output JSON file path [default: output/windgrid-{YYMMDD}.json]"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(long, help = "Print the records to stdout instead of writing a file")]
    pub stdout: bool,

    #[arg(long, help = "Write compact JSON without indentation")]
    pub compact: bool,

    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_lon: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_lon: Option<f64>,

    #[arg(long, help = "Number of cells along longitude")]
    pub nx: Option<usize>,

    #[arg(long, help = "Number of cells along latitude")]
    pub ny: Option<usize>,

    #[arg(long, help = "Out-of-polygon policy: const, value or none")]
    pub policy: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub default_value: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub random_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub random_max: Option<f64>,

    #[arg(long, help = "Seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = num_cpus::get())]
    pub max_workers: usize,
}
