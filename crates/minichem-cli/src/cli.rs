use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "miniChemistry developers",
    version,
    about = "miniChemistry CLI - Predicts the products of school inorganic reactions and balances their equations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format that overrides the built-in data tables.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the largest weight the Equalizer tries when combining solutions.
    #[arg(long, global = true, value_name = "INT")]
    pub threshold: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the products of one or two reagents and print the balanced equation.
    Predict(PredictArgs),
    /// Balance a reaction whose products are already known.
    Equate(EquateArgs),
    /// Describe one or more particles given by their formulas.
    Parse(ParseArgs),
    /// Print the short ionic equation of a predicted molecular reaction.
    Essential(EssentialArgs),
    /// Combine two reduction half-reactions from the potentials table into a redox equation.
    Redox(RedoxArgs),
    /// Process a file with one reaction per line.
    Batch(BatchArgs),
}

/// Options shared by every command that predicts products.
#[derive(Args, Debug, Clone, Copy)]
pub struct PredictionOptions {
    /// Use the ionic reaction table (ions, ion groups and molecules in solution).
    #[arg(long)]
    pub ionic: bool,

    /// Keep the predicted products even when a restriction rejects them.
    #[arg(long)]
    pub ignore_restrictions: bool,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Reagents joined by '+', e.g. "Na + H2O" or "Ag(1) + NaCl".
    #[arg(required = true, value_name = "REAGENTS")]
    pub reagents: String,

    #[command(flatten)]
    pub options: PredictionOptions,
}

#[derive(Args, Debug)]
pub struct EquateArgs {
    /// A full scheme, e.g. "H2 + O2 -> H2O" or "Cl2 + e(-1) = Cl(-1)".
    #[arg(required = true, value_name = "SCHEME")]
    pub scheme: String,

    /// Treat the scheme as a half-reaction with electrons, protons or neutrons.
    #[arg(long, conflicts_with = "ionic")]
    pub half: bool,

    /// Treat the scheme as an ionic reaction.
    #[arg(long)]
    pub ionic: bool,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Formulas such as "Al2(SO4)3", "SO4(-2)" or "Fe".
    #[arg(required = true, num_args = 1.., value_name = "FORMULA")]
    pub formulas: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EssentialArgs {
    /// Reagents of a molecular exchange reaction, e.g. "NaOH + HCl".
    #[arg(required = true, value_name = "REAGENTS")]
    pub reagents: String,
}

#[derive(Args, Debug)]
pub struct RedoxArgs {
    /// A reduction half-reaction listed in the potentials table, e.g. "Zn(2) + e(-1) -> Zn".
    #[arg(required = true, value_name = "HALF")]
    pub first: String,

    /// The second listed reduction half-reaction, e.g. "Cu(2) + e(-1) -> Cu".
    #[arg(required = true, value_name = "HALF")]
    pub second: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Text file with one reaction per line. Blank lines and lines starting with '#' are skipped.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub options: PredictionOptions,
}
