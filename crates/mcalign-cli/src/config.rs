use crate::cli::Cli;
use crate::error::{CliError, Result};
use mcalign::core::io::pdb::CoordinateLayout;
use mcalign::engine::config::{AlignmentConfig, AlignmentConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOptimizationConfig {
    steps: Option<usize>,
    #[serde(rename = "step-size")]
    step_size: Option<f64>,
    tolerance: Option<f64>,
    seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "trajectory-csv")]
    trajectory_csv: Option<PathBuf>,
    #[serde(rename = "plot-svg")]
    plot_svg: Option<PathBuf>,
    #[serde(rename = "pdb-columns")]
    pdb_columns: Option<bool>,
}

/// Configuration as read from a TOML file, every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAlignmentConfig {
    optimization: Option<PartialOptimizationConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for one `mcalign` invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub target: PathBuf,
    pub output: PathBuf,
    pub core_config: AlignmentConfig,
    pub trajectory_csv: Option<PathBuf>,
    pub plot_svg: Option<PathBuf>,
    pub layout: CoordinateLayout,
}

impl PartialAlignmentConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings. Precedence, highest first: explicit
    /// command-line flags, `--set` values, the config file, built-in defaults.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let opt_config = self.optimization.take().unwrap_or_default();
        let out_config = self.output.take().unwrap_or_default();

        let mut builder = AlignmentConfigBuilder::new();
        if let Some(steps) = args.steps.or(opt_config.steps) {
            builder = builder.steps(steps);
        }
        if let Some(step_size) = args.step_size.or(opt_config.step_size) {
            builder = builder.step_size(step_size);
        }
        if let Some(tolerance) = args.tolerance.or(opt_config.tolerance) {
            builder = builder.tolerance(tolerance);
        }
        if let Some(seed) = args.seed.or(opt_config.seed) {
            builder = builder.seed(seed);
        }
        let core_config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let layout = if args.pdb_columns || out_config.pdb_columns.unwrap_or(false) {
            CoordinateLayout::Pdb
        } else {
            CoordinateLayout::Legacy
        };

        Ok(AppConfig {
            input: args.input.clone(),
            target: args.target.clone(),
            output: args.output.clone(),
            core_config,
            trajectory_csv: args.trajectory.clone().or(out_config.trajectory_csv),
            plot_svg: args.plot.clone().or(out_config.plot_svg),
            layout,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "optimization.steps" => {
                    self.optimization.get_or_insert_with(Default::default).steps =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "optimization.step-size" => {
                    self.optimization
                        .get_or_insert_with(Default::default)
                        .step_size = Some(parse_value(key, value_str, "float")?);
                }
                "optimization.tolerance" => {
                    self.optimization
                        .get_or_insert_with(Default::default)
                        .tolerance = Some(parse_value(key, value_str, "float")?);
                }
                "optimization.seed" => {
                    self.optimization.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "output.trajectory-csv" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .trajectory_csv = Some(PathBuf::from(value_str));
                }
                "output.plot-svg" => {
                    self.output.get_or_insert_with(Default::default).plot_svg =
                        Some(PathBuf::from(value_str));
                }
                "output.pdb-columns" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .pdb_columns = Some(parse_value(key, value_str, "boolean")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}
