use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use host_specificity::Maxima;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Calculate the index and rank of host specificity",
    name = "host-specificity"
)]
pub struct Cli {
    /// Number of host species
    #[arg(short, long, required_unless_present_any = ["test", "input"])]
    pub species: Option<i64>,

    /// Number of host genera
    #[arg(short, long, required_unless_present_any = ["test", "input"])]
    pub genera: Option<i64>,

    /// Number of host families
    #[arg(short, long, required_unless_present_any = ["test", "input"])]
    pub families: Option<i64>,

    /// Number of host orders
    #[arg(short, long, required_unless_present_any = ["test", "input"])]
    pub orders: Option<i64>,

    /// Number of host classes
    #[arg(short, long, required_unless_present_any = ["test", "input"])]
    pub classes: Option<i64>,

    /// Run the built-in reference table
    #[arg(long, conflicts_with = "input")]
    pub test: bool,

    /// Score every profile in a batch file (.json array or delimited rows)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reject profiles with more taxa at an outer level than an inner one
    /// instead of repairing them
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub maxima: MaximaArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// Families, orders and classes each add a recursion frame per taxon and
// multiply the work of the levels inside them; species and genera are closed
// form.
const SPECIES_LIMIT: i64 = 1_000_000;
const GENERA_LIMIT: i64 = 500_000;
const FAMILIES_LIMIT: i64 = 1_000;
const ORDERS_LIMIT: i64 = 500;
const CLASSES_LIMIT: i64 = 20;

#[derive(Args, Debug)]
pub struct MaximaArgs {
    /// Maximum number of host species
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(i64).range(1..=SPECIES_LIMIT))]
    pub max_species: i64,

    /// Maximum number of host genera
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(i64).range(1..=GENERA_LIMIT))]
    pub max_genera: i64,

    /// Maximum number of host families
    #[arg(long, default_value = "150", value_parser = clap::value_parser!(i64).range(1..=FAMILIES_LIMIT))]
    pub max_families: i64,

    /// Maximum number of host orders
    #[arg(long, default_value = "75", value_parser = clap::value_parser!(i64).range(1..=ORDERS_LIMIT))]
    pub max_orders: i64,

    /// Maximum number of host classes
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(i64).range(1..=CLASSES_LIMIT))]
    pub max_classes: i64,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

impl Cli {
    /// Profile given directly on the command line, if all five counts are set
    pub fn profile(&self) -> Option<host_specificity::HostProfile> {
        Some(host_specificity::HostProfile::new(
            self.species?,
            self.genera?,
            self.families?,
            self.orders?,
            self.classes?,
        ))
    }
}

impl From<&MaximaArgs> for Maxima {
    fn from(args: &MaximaArgs) -> Self {
        Maxima {
            species: args.max_species,
            genera: args.max_genera,
            families: args.max_families,
            orders: args.max_orders,
            classes: args.max_classes,
        }
    }
}

impl From<OutputFormat> for host_specificity::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Tsv => Self::Tsv,
        }
    }
}
