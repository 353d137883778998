//! Section catalogs for frame/brace elements and wall elements

use serde::{Deserialize, Serialize};

/// Material family of a frame section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    Wood,
    #[default]
    Steel,
}

impl MaterialKind {
    /// Parse the material token of a section record.
    ///
    /// Accepts the name or the numeric code; anything else falls back to steel.
    pub fn from_token(token: &str) -> Self {
        match token {
            "Wood" | "1" => Self::Wood,
            _ => Self::Steel,
        }
    }

    /// Numeric code written to the solver file
    pub fn code(self) -> u8 {
        match self {
            Self::Wood => 1,
            Self::Steel => 2,
        }
    }
}

/// Cross-section properties for frame and brace elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSection {
    pub material: MaterialKind,
    /// [E, G, width, height]
    pub parameters: [f64; 4],
}

impl FrameSection {
    pub fn new(material: MaterialKind, e: f64, g: f64, width: f64, height: f64) -> Self {
        Self {
            material,
            parameters: [e, g, width, height],
        }
    }

    pub fn steel(e: f64, g: f64, width: f64, height: f64) -> Self {
        Self::new(MaterialKind::Steel, e, g, width, height)
    }

    pub fn wood(e: f64, g: f64, width: f64, height: f64) -> Self {
        Self::new(MaterialKind::Wood, e, g, width, height)
    }

    /// Elastic modulus
    pub fn e(&self) -> f64 {
        self.parameters[0]
    }

    /// Shear modulus
    pub fn g(&self) -> f64 {
        self.parameters[1]
    }

    pub fn width(&self) -> f64 {
        self.parameters[2]
    }

    pub fn height(&self) -> f64 {
        self.parameters[3]
    }

    /// Gross area of the rectangular section
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Number of values in one row of a wall section record
pub const WALL_ROW_LEN: usize = 6;

/// Wall section: geometry row followed by two hysteretic backbone rows
///
/// Row layout, six values each:
/// - geometry: length, depth, elastic modulus, yield strength, thickness, dl
/// - first backbone: q0, q1, q2, xk, dmax, sdf
/// - second backbone: q0, q1, q2, xk, dmax, sdf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSection {
    pub parameters: [f64; 18],
}

impl WallSection {
    pub fn new(parameters: [f64; 18]) -> Self {
        Self { parameters }
    }

    pub fn from_rows(rows: [[f64; WALL_ROW_LEN]; 3]) -> Self {
        let mut parameters = [0.0; 18];
        for (chunk, row) in parameters.chunks_exact_mut(WALL_ROW_LEN).zip(rows.iter()) {
            chunk.copy_from_slice(row);
        }
        Self { parameters }
    }

    /// One of the three physical rows (0 = geometry)
    pub fn row(&self, index: usize) -> &[f64] {
        &self.parameters[index * WALL_ROW_LEN..(index + 1) * WALL_ROW_LEN]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.parameters.chunks_exact(WALL_ROW_LEN)
    }

    pub fn geometry(&self) -> &[f64] {
        self.row(0)
    }

    pub fn first_backbone(&self) -> &[f64] {
        self.row(1)
    }

    pub fn second_backbone(&self) -> &[f64] {
        self.row(2)
    }
}
