use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use std::ops::Range;
use thiserror::Error;
use tracing::{debug, warn};

/// First token of the record that ends a structure.
pub const CHAIN_END_RECORD: &str = "TER";
/// Final record appended after the rewritten coordinates.
pub const END_RECORD: &str = "END";

const NAME_FIELD: usize = 2;
const X_FIELD: usize = 6;
const Y_FIELD: usize = 7;
const Z_FIELD: usize = 8;
const MIN_FIELDS: usize = Z_FIELD + 1;

/// How the writer lays aligned coordinates into a source record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinateLayout {
    /// Replace byte columns `[32, 54)` with `"{x:.3} {y:.3} {z:.3}"`.
    #[default]
    Legacy,
    /// Replace the standard PDB coordinate columns `[30, 54)` with three
    /// right-aligned `8.3` fields.
    Pdb,
}

impl CoordinateLayout {
    pub fn columns(self) -> Range<usize> {
        match self {
            CoordinateLayout::Legacy => 32..54,
            CoordinateLayout::Pdb => 30..54,
        }
    }

    pub fn format(self, coord: &Point3<f64>) -> String {
        match self {
            CoordinateLayout::Legacy => format!("{:.3} {:.3} {:.3}", coord.x, coord.y, coord.z),
            CoordinateLayout::Pdb => format!("{:>8.3}{:>8.3}{:>8.3}", coord.x, coord.y, coord.z),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdbWriteOptions {
    pub layout: CoordinateLayout,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Record count mismatch: {records} records were read but {coords} coordinates were given")]
    LengthMismatch { records: usize, coords: usize },
    #[error("Record {line} cannot be rewritten: {reason}")]
    InvalidRecord { line: usize, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum PdbParseErrorKind {
    #[error("Record has {found} whitespace-separated fields, at least 9 are required")]
    TooFewFields { found: usize },
    #[error("Invalid float format in field {field} (value: '{value}')")]
    InvalidFloat { field: usize, value: String },
    #[error("Non-finite coordinate in field {field} (value: '{value}')")]
    NonFiniteCoordinate { field: usize, value: String },
}

fn is_chain_end(line: &str) -> bool {
    line.split_whitespace().next() == Some(CHAIN_END_RECORD)
}

fn parse_coordinate(fields: &[&str], index: usize, line: usize) -> Result<f64, PdbError> {
    let value = fields[index];
    let parsed: f64 = value.parse().map_err(|_| PdbError::Parse {
        line,
        kind: PdbParseErrorKind::InvalidFloat {
            field: index + 1,
            value: value.into(),
        },
    })?;
    if !parsed.is_finite() {
        return Err(PdbError::Parse {
            line,
            kind: PdbParseErrorKind::NonFiniteCoordinate {
                field: index + 1,
                value: value.into(),
            },
        });
    }
    Ok(parsed)
}

/// Non-blank text in columns 31-32, which the legacy layout leaves in place
/// right before the rewritten x field. Wide 8.3 x values (x <= -10 or
/// x >= 100) start there.
fn legacy_lead_in(prefix: &str) -> Option<&str> {
    let start = CoordinateLayout::Legacy.columns().start;
    prefix
        .get(start - 2..start)
        .filter(|lead| !lead.trim().is_empty())
}

fn splice_coordinates(
    record: &str,
    coord: &Point3<f64>,
    layout: CoordinateLayout,
    line: usize,
) -> Result<String, PdbError> {
    let columns = layout.columns();
    let invalid = |reason: &str| PdbError::InvalidRecord {
        line,
        reason: reason.to_string(),
    };

    let mut output = String::with_capacity(record.len().max(columns.end) + 8);
    if record.len() < columns.start {
        output.push_str(record);
        output.extend(std::iter::repeat_n(' ', columns.start - record.len()));
        output.push_str(&layout.format(coord));
        return Ok(output);
    }

    let end = columns.end.min(record.len());
    let prefix = record
        .get(..columns.start)
        .ok_or_else(|| invalid("coordinate columns do not start on a character boundary"))?;
    let suffix = record
        .get(end..)
        .ok_or_else(|| invalid("coordinate columns do not end on a character boundary"))?;

    if layout == CoordinateLayout::Legacy {
        if let Some(lead) = legacy_lead_in(prefix) {
            warn!(
                "Record {} has '{}' in columns 31-32. The legacy layout keeps that text directly in front of the new x value, so x will fail to reparse or be read off by a power of ten. Write with the standard PDB columns (--pdb-columns) instead.",
                line,
                lead.trim()
            );
        }
    }

    output.push_str(prefix);
    output.push_str(&layout.format(coord));
    output.push_str(suffix);
    Ok(output)
}

pub struct PdbFile;

impl PdbFile {
    /// Reads the raw record sequence up to (not including) the chain-end
    /// sentinel, without interpreting any fields.
    pub fn read_records(reader: &mut impl BufRead) -> Result<Vec<String>, PdbError> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if is_chain_end(&line) {
                break;
            }
            records.push(line);
        }
        Ok(records)
    }

    /// Re-emits `records` with their coordinate columns replaced by `coords`,
    /// followed by the `TER` and `END` records.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::LengthMismatch`] if the record and coordinate
    /// counts differ; nothing is written in that case.
    pub fn write_aligned<S: AsRef<str>>(
        records: &[S],
        coords: &[Point3<f64>],
        options: &PdbWriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), PdbError> {
        if records.len() != coords.len() {
            return Err(PdbError::LengthMismatch {
                records: records.len(),
                coords: coords.len(),
            });
        }
        for (i, (record, coord)) in records.iter().zip(coords).enumerate() {
            let line = splice_coordinates(record.as_ref(), coord, options.layout, i + 1)?;
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer, "{}", CHAIN_END_RECORD)?;
        writeln!(writer, "{}", END_RECORD)?;
        Ok(())
    }

    /// Re-reads the original records from `reader` and writes them with the
    /// aligned coordinates.
    pub fn rewrite_from(
        reader: &mut impl BufRead,
        coords: &[Point3<f64>],
        options: &PdbWriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), PdbError> {
        let records = Self::read_records(reader)?;
        debug!("Re-read {} records for coordinate rewrite.", records.len());
        Self::write_aligned(&records, coords, options, writer)
    }
}

impl StructureFile for PdbFile {
    type WriteOptions = PdbWriteOptions;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.first() == Some(&CHAIN_END_RECORD) {
                break;
            }
            if fields.len() < MIN_FIELDS {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::TooFewFields {
                        found: fields.len(),
                    },
                });
            }

            let x = parse_coordinate(&fields, X_FIELD, line_num)?;
            let y = parse_coordinate(&fields, Y_FIELD, line_num)?;
            let z = parse_coordinate(&fields, Z_FIELD, line_num)?;

            let atom = Atom::new(fields[NAME_FIELD], Point3::new(x, y, z), line.clone());
            structure.push_atom(atom);
        }

        debug!(
            "Parsed {} atoms ({} backbone markers).",
            structure.len(),
            structure.backbone_len()
        );
        Ok(structure)
    }

    fn write_to(
        structure: &Structure,
        options: &Self::WriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let records: Vec<&str> = structure.records().collect();
        Self::write_aligned(&records, &structure.all_coords(), options, writer)
    }
}
