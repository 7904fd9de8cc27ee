use mcalign::core::io::pdb::{PdbFile, PdbWriteOptions};
use mcalign::core::io::traits::StructureFile;
use mcalign::core::io::trajectory;
use mcalign::core::utils::geometry::calculate_rmsd;
use mcalign::engine::config::AlignmentConfigBuilder;
use mcalign::engine::error::EngineError;
use mcalign::engine::progress::ProgressReporter;
use mcalign::workflows;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ATOM_NAMES: [&str; 4] = ["N", "CA", "C", "O"];

fn write_peptide(path: &Path, residues: usize, shift: [f64; 3]) {
    let mut out = String::new();
    let mut serial = 1;
    for res in 0..residues {
        for (k, name) in ATOM_NAMES.iter().enumerate() {
            let x = 3.8 * res as f64 + 0.9 * k as f64 + shift[0];
            let y = 1.1 * (res % 3) as f64 - 0.4 * k as f64 + shift[1];
            let z = 0.7 * res as f64 + 0.2 * k as f64 + shift[2];
            out.push_str(&format!(
                "ATOM  {:>5} {:<4} GLY A{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           {}\n",
                serial,
                format!(" {}", name),
                res + 1,
                x,
                y,
                z,
                &name[..1]
            ));
            serial += 1;
        }
    }
    out.push_str("TER\nEND\n");
    fs::write(path, out).unwrap();
}

struct Fixture {
    _dir: TempDir,
    mobile: PathBuf,
    target: PathBuf,
    output: PathBuf,
}

fn fixture(mobile_residues: usize, target_residues: usize) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let mobile = dir.path().join("mobile.pdb");
    let target = dir.path().join("target.pdb");
    let output = dir.path().join("aligned.pdb");
    write_peptide(&mobile, mobile_residues, [0.0, 0.0, 0.0]);
    write_peptide(&target, target_residues, [1.0, 1.0, 1.0]);
    Fixture {
        _dir: dir,
        mobile,
        target,
        output,
    }
}

#[test]
fn aligned_output_reparses_to_the_in_memory_coordinates() {
    let fx = fixture(8, 8);
    let mobile = PdbFile::read_from_path(&fx.mobile).unwrap();
    let target = PdbFile::read_from_path(&fx.target).unwrap();
    assert_eq!(mobile.backbone_len(), 8);
    assert_eq!(mobile.len(), 32);

    let config = AlignmentConfigBuilder::new().seed(3).build().unwrap();
    let result = workflows::align::run(&target, &mobile, &config, &ProgressReporter::new()).unwrap();

    let mut reader = BufReader::new(fs::File::open(&fx.mobile).unwrap());
    let mut writer = BufWriter::new(fs::File::create(&fx.output).unwrap());
    PdbFile::rewrite_from(
        &mut reader,
        &result.outcome.aligned_all_atoms,
        &PdbWriteOptions::default(),
        &mut writer,
    )
    .unwrap();
    writer.flush().unwrap();
    drop(writer);

    let reparsed = PdbFile::read_from_path(&fx.output).unwrap();
    assert_eq!(reparsed.len(), mobile.len());
    let backbone_error = calculate_rmsd(&result.aligned.backbone_coords(), &reparsed.backbone_coords()).unwrap();
    assert!(backbone_error < 1e-3, "round-trip error {backbone_error}");

    let fit = calculate_rmsd(&target.backbone_coords(), &reparsed.backbone_coords()).unwrap();
    assert!((fit - result.outcome.final_rmsd).abs() < 1e-2);
    assert!(fit < result.outcome.initial_rmsd);

    let text = fs::read_to_string(&fx.output).unwrap();
    assert!(text.ends_with("TER\nEND\n"));
}

#[test]
fn trajectory_reports_are_written_next_to_the_structure() {
    let fx = fixture(5, 5);
    let mobile = PdbFile::read_from_path(&fx.mobile).unwrap();
    let target = PdbFile::read_from_path(&fx.target).unwrap();
    let config = AlignmentConfigBuilder::new().steps(300).seed(21).build().unwrap();

    let result = workflows::align::run(&target, &mobile, &config, &ProgressReporter::new()).unwrap();

    let csv_path = fx.output.with_extension("csv");
    trajectory::write_csv_to_path(result.trajectory(), &result.outcome.step_sizes, &csv_path).unwrap();
    let rows = fs::read_to_string(&csv_path).unwrap().lines().count();
    assert_eq!(rows, result.trajectory().len() + 1);

    let svg = trajectory::render_svg(result.trajectory(), &fx.output.with_extension("svg")).unwrap();
    assert!(svg.exists());
}

#[test]
fn mismatched_backbone_counts_abort_the_run() {
    let fx = fixture(6, 7);
    let mobile = PdbFile::read_from_path(&fx.mobile).unwrap();
    let target = PdbFile::read_from_path(&fx.target).unwrap();

    let err = workflows::align::run(
        &target,
        &mobile,
        &AlignmentConfigBuilder::new().build().unwrap(),
        &ProgressReporter::new(),
    )
    .unwrap_err();

    assert!(matches!(err, EngineError::ShapeMismatch { target: 7, mobile: 6 }));
}
