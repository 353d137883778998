//! Node - a point in 3D space carrying boundary conditions and nodal data

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::Fixity;

/// A node of the frame model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,

    /// Restrained DOFs
    pub fixity: Fixity,
    /// Applied load [FX, FY, FZ, MX, MY, MZ]
    pub load: [f64; 6],
    /// Prescribed displacement [DX, DY, DZ, RX, RY, RZ]
    pub displacement: [f64; 6],
    /// Lumped mass, never negative
    pub mass: f64,

    /// Selection state of the view layer, not persisted
    #[serde(skip)]
    pub highlighted: bool,
}

impl Node {
    /// Create a new free, unloaded node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            fixity: Fixity::free(),
            load: [0.0; 6],
            displacement: [0.0; 6],
            mass: 0.0,
            highlighted: false,
        }
    }

    pub fn from_point(point: &Point3<f64>) -> Self {
        Self::new(point.x, point.y, point.z)
    }

    pub fn with_fixity(mut self, fixity: Fixity) -> Self {
        self.fixity = fixity;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass.max(0.0);
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, position: [f64; 3]) {
        [self.x, self.y, self.z] = position;
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        nalgebra::distance(&self.position(), &other.position())
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.0, 2.0, 3.0);
        assert_eq!(node.coords(), [1.0, 2.0, 3.0]);
        assert!(!node.fixity.is_supported());
        assert_eq!(node.mass, 0.0);
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0, 0.0);
        let n2 = Node::new(3.0, 4.0, 0.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_mass_is_clamped() {
        assert_eq!(Node::default().with_mass(-2.0).mass, 0.0);
    }
}
