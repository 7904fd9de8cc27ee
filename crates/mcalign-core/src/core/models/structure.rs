use super::atom::Atom;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("Coordinate count mismatch: structure has {atoms} atoms but {coords} coordinates were given")]
    LengthMismatch { atoms: usize, coords: usize },
}

/// An ordered sequence of atoms read up to a chain-end marker.
///
/// Two views are derived from the atom list: the backbone marker atoms used
/// for alignment scoring, and the full atom list used for output. Both keep
/// the original input order, so the `i`-th coordinate of [`all_coords`]
/// always belongs to the `i`-th retained source record.
///
/// [`all_coords`]: Structure::all_coords
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
    backbone_indices: Vec<usize>,
}

impl Structure {
    /// Creates an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom, registering it in the backbone view if it is a
    /// backbone marker.
    pub fn push_atom(&mut self, atom: Atom) {
        if atom.is_backbone() {
            self.backbone_indices.push(self.atoms.len());
        }
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Number of backbone marker atoms.
    pub fn backbone_len(&self) -> usize {
        self.backbone_indices.len()
    }

    /// Iterates over the backbone marker atoms in input order.
    pub fn backbone_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.backbone_indices.iter().map(|&i| &self.atoms[i])
    }

    /// Coordinates of the backbone marker atoms (N×3).
    pub fn backbone_coords(&self) -> Vec<Point3<f64>> {
        self.backbone_atoms().map(|a| a.position).collect()
    }

    /// Coordinates of all atoms (M×3).
    pub fn all_coords(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// The verbatim source records, one per atom.
    pub fn records(&self) -> impl Iterator<Item = &str> {
        self.atoms.iter().map(|a| a.record.as_str())
    }

    /// Returns a copy of this structure with every atom moved to the matching
    /// entry of `coords`. Records and names are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::LengthMismatch`] if `coords` does not have
    /// exactly one entry per atom.
    pub fn with_coords(&self, coords: &[Point3<f64>]) -> Result<Self, StructureError> {
        if coords.len() != self.atoms.len() {
            return Err(StructureError::LengthMismatch {
                atoms: self.atoms.len(),
                coords: coords.len(),
            });
        }
        let atoms = self
            .atoms
            .iter()
            .zip(coords)
            .map(|(atom, &position)| Atom {
                position,
                ..atom.clone()
            })
            .collect();
        Ok(Self {
            atoms,
            backbone_indices: self.backbone_indices.clone(),
        })
    }

    /// Rigidly translates every atom by `shift`.
    pub fn translate(&mut self, shift: &Vector3<f64>) {
        for atom in &mut self.atoms {
            atom.position += shift;
        }
    }
}

impl FromIterator<Atom> for Structure {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        let mut structure = Structure::new();
        for atom in iter {
            structure.push_atom(atom);
        }
        structure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_structure() -> Structure {
        [
            Atom::new("N", Point3::new(0.0, 0.0, 0.0), "n1"),
            Atom::new("CA", Point3::new(1.0, 0.0, 0.0), "ca1"),
            Atom::new("C", Point3::new(2.0, 0.0, 0.0), "c1"),
            Atom::new("N", Point3::new(3.0, 0.0, 0.0), "n2"),
            Atom::new("CA", Point3::new(4.0, 1.0, 0.0), "ca2"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn backbone_view_keeps_input_order() {
        let structure = sample_structure();

        assert_eq!(structure.len(), 5);
        assert_eq!(structure.backbone_len(), 2);
        assert_eq!(
            structure.backbone_coords(),
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(4.0, 1.0, 0.0)]
        );
        let names: Vec<_> = structure.backbone_atoms().map(|a| a.record.as_str()).collect();
        assert_eq!(names, vec!["ca1", "ca2"]);
    }

    #[test]
    fn all_coords_and_records_follow_atom_order() {
        let structure = sample_structure();

        assert_eq!(structure.all_coords()[3], Point3::new(3.0, 0.0, 0.0));
        let records: Vec<_> = structure.records().collect();
        assert_eq!(records, vec!["n1", "ca1", "c1", "n2", "ca2"]);
    }

    #[test]
    fn with_coords_replaces_positions_and_keeps_records() {
        let structure = sample_structure();
        let shifted: Vec<_> = structure
            .all_coords()
            .iter()
            .map(|p| p + Vector3::new(0.0, 0.0, 5.0))
            .collect();

        let moved = structure.with_coords(&shifted).unwrap();

        assert_eq!(moved.all_coords(), shifted);
        assert_eq!(moved.backbone_coords()[0], Point3::new(1.0, 0.0, 5.0));
        assert!(moved.records().eq(structure.records()));
        assert_eq!(structure.all_coords()[0], Point3::origin());
    }

    #[test]
    fn with_coords_rejects_wrong_count() {
        let structure = sample_structure();
        let result = structure.with_coords(&[Point3::origin()]);

        assert_eq!(
            result,
            Err(StructureError::LengthMismatch { atoms: 5, coords: 1 })
        );
    }

    #[test]
    fn translate_moves_every_atom() {
        let mut structure = sample_structure();
        structure.translate(&Vector3::new(1.0, -1.0, 2.0));

        assert_eq!(structure.all_coords()[0], Point3::new(1.0, -1.0, 2.0));
        assert_eq!(structure.backbone_coords()[1], Point3::new(5.0, 0.0, 2.0));
    }

    #[test]
    fn empty_structure_has_no_views() {
        let structure = Structure::new();

        assert!(structure.is_empty());
        assert_eq!(structure.backbone_len(), 0);
        assert!(structure.backbone_coords().is_empty());
    }
}
