//! Boundary conditions at a node

use serde::{Deserialize, Serialize};

/// Restrained degrees of freedom at a node, ordered Tx, Ty, Tz, Rx, Ry, Rz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixity {
    /// Restrained in X translation
    pub tx: bool,
    /// Restrained in Y translation
    pub ty: bool,
    /// Restrained in Z translation
    pub tz: bool,
    /// Restrained in X rotation
    pub rx: bool,
    /// Restrained in Y rotation
    pub ry: bool,
    /// Restrained in Z rotation
    pub rz: bool,
}

impl Fixity {
    /// No restraints
    pub fn free() -> Self {
        Self::default()
    }

    /// All six DOFs restrained
    pub fn fixed() -> Self {
        Self::from_array([true; 6])
    }

    /// Translations restrained, rotations free
    pub fn pinned() -> Self {
        Self::from_array([true, true, true, false, false, false])
    }

    pub fn with_restraints(tx: bool, ty: bool, tz: bool, rx: bool, ry: bool, rz: bool) -> Self {
        Self { tx, ty, tz, rx, ry, rz }
    }

    pub fn from_array(dofs: [bool; 6]) -> Self {
        let [tx, ty, tz, rx, ry, rz] = dofs;
        Self { tx, ty, tz, rx, ry, rz }
    }

    /// Flags as [Tx, Ty, Tz, Rx, Ry, Rz]
    pub fn as_array(&self) -> [bool; 6] {
        [self.tx, self.ty, self.tz, self.rx, self.ry, self.rz]
    }

    /// Indices (0-5) of the restrained DOFs
    pub fn restrained_dofs(&self) -> Vec<usize> {
        self.as_array()
            .iter()
            .enumerate()
            .filter_map(|(dof, &restrained)| restrained.then_some(dof))
            .collect()
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        self.as_array().contains(&true)
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.as_array().iter().filter(|&&restrained| restrained).count()
    }

    /// Per-DOF rank among the restrained DOFs of this node.
    ///
    /// A free DOF maps to 0, the n-th restrained DOF (in Tx..Rz order) maps
    /// to n. Restraining Ty and Rz gives `[0, 1, 0, 0, 0, 2]`.
    pub fn dof_ranks(&self) -> [usize; 6] {
        let mut ranks = [0; 6];
        let mut rank = 0;
        for (slot, restrained) in ranks.iter_mut().zip(self.as_array()) {
            if restrained {
                rank += 1;
                *slot = rank;
            }
        }
        ranks
    }
}
