//! Provides input/output functionality for structure files and run reports.
//!
//! Structure files are read and re-emitted through the [`traits::StructureFile`]
//! interface; the fixed-column coordinate format lives in [`pdb`]. The RMSD
//! trajectory of an alignment run can be exported with [`trajectory`].

pub mod pdb;
pub mod traits;
pub mod trajectory;
