use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use mcalign::{
    core::io::{
        pdb::{PdbFile, PdbWriteOptions},
        traits::StructureFile,
        trajectory,
    },
    core::models::structure::Structure,
    engine::{progress::ProgressReporter, state::MonteCarloOutcome},
    workflows,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

fn load_structure(path: &Path) -> Result<Structure> {
    info!("Loading structure from {:?}", path);
    PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub fn run(config: &AppConfig, show_progress: bool) -> Result<()> {
    let mobile = load_structure(&config.input)?;
    let target = load_structure(&config.target)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = if show_progress {
        ProgressReporter::with_callback(progress_handler.get_callback())
    } else {
        ProgressReporter::new()
    };

    println!("Starting Monte Carlo alignment...");
    info!("Invoking the core alignment workflow...");
    let result = workflows::align::run(&target, &mobile, &config.core_config, &reporter)?;
    let outcome = &result.outcome;

    if !outcome.converged {
        warn!(
            "Alignment stopped after {} iterations without reaching the tolerance of {}.",
            outcome.iterations, config.core_config.tolerance
        );
    }

    info!("Writing aligned structure to {:?}", &config.output);
    write_output(config, outcome).map_err(|e| CliError::FileWriting {
        path: config.output.clone(),
        source: e,
    })?;
    println!(
        "✓ Aligned structure (RMSD {:.4} -> {:.4}) written to: {}",
        outcome.initial_rmsd,
        outcome.final_rmsd,
        config.output.display()
    );

    if let Some(csv_path) = &config.trajectory_csv {
        trajectory::write_csv_to_path(result.trajectory(), &outcome.step_sizes, csv_path)?;
        println!("  RMSD trajectory written to: {}", csv_path.display());
    }
    if let Some(plot_path) = &config.plot_svg {
        let written = trajectory::render_svg(result.trajectory(), plot_path)?;
        println!("  RMSD plot written to: {}", written.display());
    }

    println!(
        "  {} iterations, {} accepted, converged: {}",
        outcome.iterations, outcome.accepted, outcome.converged
    );
    Ok(())
}

/// Streams the mobile input again and splices the aligned coordinates into
/// its records.
fn write_output(config: &AppConfig, outcome: &MonteCarloOutcome) -> anyhow::Result<()> {
    let mut reader = BufReader::new(File::open(&config.input)?);
    let mut writer = BufWriter::new(File::create(&config.output)?);
    let options = PdbWriteOptions {
        layout: config.layout,
    };
    PdbFile::rewrite_from(&mut reader, &outcome.aligned_all_atoms, &options, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcalign::core::io::pdb::CoordinateLayout;
    use mcalign::engine::config::AlignmentConfigBuilder;
    use std::fs;

    fn ca_line(serial: usize, x: f64, y: f64, z: f64) -> String {
        format!(
            "ATOM  {:>5}  CA  ALA A{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C\n",
            serial, serial, x, y, z
        )
    }

    fn write_chain(path: &Path, shift: f64) {
        let mut text = String::new();
        for i in 0..5 {
            let i_f = i as f64;
            text.push_str(&ca_line(i + 1, 3.8 * i_f + shift, 0.5 * i_f + shift, shift));
        }
        text.push_str("TER\nEND\n");
        fs::write(path, text).unwrap();
    }

    fn app_config(dir: &Path) -> AppConfig {
        let input = dir.join("mobile.pdb");
        let target = dir.join("target.pdb");
        write_chain(&input, 0.0);
        write_chain(&target, 1.0);
        AppConfig {
            input,
            target,
            output: dir.join("aligned.pdb"),
            core_config: AlignmentConfigBuilder::new().steps(500).seed(5).build().unwrap(),
            trajectory_csv: Some(dir.join("rmsd.csv")),
            plot_svg: Some(dir.join("rmsd.svg")),
            layout: CoordinateLayout::Pdb,
        }
    }

    #[test]
    fn run_writes_structure_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let config = app_config(dir.path());

        run(&config, false).unwrap();

        let aligned = PdbFile::read_from_path(&config.output).unwrap();
        assert_eq!(aligned.backbone_len(), 5);
        assert!(fs::read_to_string(dir.path().join("rmsd.csv"))
            .unwrap()
            .starts_with("iteration,rmsd,step_size"));
        assert!(dir.path().join("rmsd.svg").exists());
    }

    #[test]
    fn missing_input_is_a_parsing_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = app_config(dir.path());
        config.input = dir.path().join("absent.pdb");

        let err = run(&config, false).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(!config.output.exists());
    }
}
