use nalgebra::Point3;

/// Atom name that marks the single scoring atom of each residue.
pub const BACKBONE_MARKER: &str = "CA";

/// Represents the role of an atom during alignment scoring.
///
/// Only backbone marker atoms (alpha carbons) contribute to the RMSD; every
/// other atom is carried along rigidly and only matters for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtomRole {
    /// Alpha-carbon backbone marker, used for scoring.
    Backbone,
    /// Any atom that is not a backbone marker.
    #[default]
    Other,
}

impl AtomRole {
    /// Classifies an atom by its name token.
    pub fn from_atom_name(name: &str) -> Self {
        if name == BACKBONE_MARKER {
            AtomRole::Backbone
        } else {
            AtomRole::Other
        }
    }
}

/// A single atom record of a coordinate file.
///
/// Besides the position, the atom keeps the verbatim source line so that the
/// writer can re-emit every non-coordinate column unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name token (e.g., "CA", "N", "CB").
    pub name: String,
    /// Scoring role derived from the name.
    pub role: AtomRole,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The original source line this atom was parsed from.
    pub record: String,
}

impl Atom {
    /// Creates a new `Atom`, classifying its role from `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name token.
    /// * `position` - The 3D coordinates of the atom.
    /// * `record` - The source line the atom came from.
    pub fn new(name: &str, position: Point3<f64>, record: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            role: AtomRole::from_atom_name(name),
            position,
            record: record.into(),
        }
    }

    #[inline]
    pub fn is_backbone(&self) -> bool {
        self.role == AtomRole::Backbone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn new_atom_classifies_alpha_carbon_as_backbone() {
        let atom = Atom::new("CA", Point3::new(1.0, 2.0, 3.0), "ATOM      2  CA");

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.role, AtomRole::Backbone);
        assert!(atom.is_backbone());
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.record, "ATOM      2  CA");
    }

    #[test]
    fn new_atom_classifies_other_names_as_other() {
        for name in ["N", "C", "O", "CB", "ca", "CA1"] {
            let atom = Atom::new(name, Point3::origin(), "");
            assert_eq!(atom.role, AtomRole::Other, "name {name} should not be backbone");
        }
    }

    #[test]
    fn role_follows_the_backbone_marker_exactly() {
        assert_eq!(AtomRole::from_atom_name(BACKBONE_MARKER), AtomRole::Backbone);
        assert_eq!(AtomRole::from_atom_name(" CA"), AtomRole::Other);
        assert_eq!(AtomRole::from_atom_name(""), AtomRole::Other);
    }

    #[test]
    fn default_role_is_other() {
        assert_eq!(AtomRole::default(), AtomRole::Other);
    }
}
