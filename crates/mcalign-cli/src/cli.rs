use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "mcalign",
    author = "Panyue Wang",
    version,
    about = "mcalign - Superimpose a protein structure onto a target by Monte Carlo translation search on the alpha-carbon RMSD.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Core Arguments ---
    /// Path to the mobile structure that will be moved onto the target.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the fixed target structure.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Path for the aligned output structure.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Optimization Overrides ---
    /// Override the Monte Carlo iteration budget.
    #[arg(short = 'n', long, value_name = "INT")]
    pub steps: Option<usize>,

    /// Override the initial translation step size (Å).
    #[arg(short = 's', long, value_name = "FLOAT")]
    pub step_size: Option<f64>,

    /// Override the convergence RMSD tolerance (Å).
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Seed the move generator for a reproducible run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Output Overrides ---
    /// Write the RMSD trajectory as CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Render the RMSD trajectory as an SVG chart to this path.
    #[arg(long, value_name = "PATH")]
    pub plot: Option<PathBuf>,

    /// Write coordinates into the standard PDB columns 31-54 instead of the legacy 33-54 layout.
    #[arg(long)]
    pub pdb_columns: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S optimization.steps=5000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positional_paths_are_enough() {
        let cli = Cli::try_parse_from(["mcalign", "in.pdb", "target.pdb", "out.pdb"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("in.pdb"));
        assert_eq!(cli.target, PathBuf::from("target.pdb"));
        assert_eq!(cli.output, PathBuf::from("out.pdb"));
        assert!(cli.config.is_none());
        assert!(cli.steps.is_none());
        assert!(!cli.pdb_columns);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn missing_positional_path_is_an_error() {
        assert!(Cli::try_parse_from(["mcalign", "in.pdb", "target.pdb"]).is_err());
    }

    #[test]
    fn optional_overrides_are_parsed() {
        let cli = Cli::try_parse_from([
            "mcalign", "a.pdb", "b.pdb", "c.pdb", "-n", "500", "-s", "1.5", "-t", "0.05", "--seed",
            "9", "--plot", "rmsd.svg", "-S", "optimization.steps=10", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.steps, Some(500));
        assert_eq!(cli.step_size, Some(1.5));
        assert_eq!(cli.tolerance, Some(0.05));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.plot, Some(PathBuf::from("rmsd.svg")));
        assert_eq!(cli.set_values, vec!["optimization.steps=10".to_string()]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mcalign", "a", "b", "c", "-q", "-v"]).is_err());
    }
}
