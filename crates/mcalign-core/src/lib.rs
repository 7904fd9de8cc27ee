//! # mcalign
//!
//! Superimposes one protein structure onto another by Monte Carlo search over rigid
//! translations, minimizing the RMSD of their alpha-carbon backbone atoms.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, `Atom`), the
//!   fixed-column structure reader/writer, trajectory reports and the RMSD metric.
//!
//! - **[`engine`]: The Logic Core.** Configuration, progress reporting and the greedy
//!   Monte Carlo optimizer with its adaptive step size.
//!
//! - **[`workflows`]: The Public API.** [`workflows::align::run`] runs a complete
//!   alignment from two loaded structures.
//!
//! ## Example
//!
//! ```no_run
//! use mcalign::core::io::{pdb::PdbFile, traits::StructureFile};
//! use mcalign::engine::{config::AlignmentConfig, progress::ProgressReporter};
//! use mcalign::workflows;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mobile = PdbFile::read_from_path("mobile.pdb")?;
//! let target = PdbFile::read_from_path("target.pdb")?;
//! let result = workflows::align::run(&target, &mobile, &AlignmentConfig::default(), &ProgressReporter::new())?;
//! println!("final RMSD: {:.3}", result.outcome.final_rmsd);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
