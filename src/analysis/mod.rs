//! Analysis settings carried in the solver file header

use serde::{Deserialize, Serialize};

/// Ground motion direction of an accelerogram record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    X,
    Y,
}

/// Convergence tolerance triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub force: f64,
    pub position: f64,
    pub displacement: f64,
}

impl Tolerance {
    pub fn new(force: f64, position: f64, displacement: f64) -> Self {
        Self {
            force,
            position,
            displacement,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.force, self.position, self.displacement]
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-3, 1e-3, 1e-3)
    }
}

/// Settings for the external solver run
///
/// Fields are private where a setter enforces a rule; the repository's
/// `change_*` methods go through the same setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Integration points of frame elements along each local axis
    pub frame_quadrature: [i32; 3],
    /// Integration points of wall elements along each local axis
    pub wall_quadrature: [i32; 2],
    /// Unit system code understood by the solver
    pub unit_system: i32,
    analysis_type: i32,
    damping_ratio: f64,
    scale_factor: f64,
    accelerograms: [String; 2],
    pub relative_tolerance: Tolerance,
    pub absolute_tolerance: Tolerance,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            frame_quadrature: [6; 3],
            wall_quadrature: [6; 2],
            unit_system: 1,
            analysis_type: 1,
            damping_ratio: 5.0,
            scale_factor: 1.0,
            accelerograms: [String::new(), String::new()],
            relative_tolerance: Tolerance::default(),
            absolute_tolerance: Tolerance::default(),
        }
    }
}

impl AnalysisSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analysis_type(&self) -> i32 {
        self.analysis_type
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Accelerogram path for a direction, `None` when no record is attached
    pub fn accelerogram(&self, direction: Direction) -> Option<&str> {
        let path = &self.accelerograms[Self::slot(direction)];
        (!path.is_empty()).then_some(path.as_str())
    }

    /// Only 0 and 1 are accepted, other values leave the setting unchanged
    pub fn set_analysis_type(&mut self, analysis_type: i32) {
        if analysis_type != 0 && analysis_type != 1 {
            log::debug!("Ignoring unsupported analysis type {}", analysis_type);
            return;
        }
        self.analysis_type = analysis_type;
    }

    pub fn set_damping_ratio(&mut self, damping_ratio: f64) {
        self.damping_ratio = damping_ratio.max(0.0);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor.max(0.0);
    }

    /// An empty path detaches the record. Paths holding whitespace, `,` or
    /// `!` cannot be stored in the solver file and are ignored.
    pub fn set_accelerogram(&mut self, direction: Direction, path: &str) {
        if path.contains(|c: char| c.is_whitespace() || c == ',' || c == '!') {
            log::warn!("Ignoring accelerogram path '{}': not a single file token", path);
            return;
        }
        self.accelerograms[Self::slot(direction)] = path.to_string();
    }

    /// Set the damping ratio (clamped to ≥ 0)
    pub fn with_damping(mut self, damping_ratio: f64) -> Self {
        self.set_damping_ratio(damping_ratio);
        self
    }

    /// Set the accelerogram scale factor (clamped to ≥ 0)
    pub fn with_scale(mut self, scale_factor: f64) -> Self {
        self.set_scale_factor(scale_factor);
        self
    }

    pub fn with_accelerogram(mut self, direction: Direction, path: &str) -> Self {
        self.set_accelerogram(direction, path);
        self
    }

    pub fn with_analysis_type(mut self, analysis_type: i32) -> Self {
        self.set_analysis_type(analysis_type);
        self
    }

    fn slot(direction: Direction) -> usize {
        match direction {
            Direction::X => 0,
            Direction::Y => 1,
        }
    }
}
