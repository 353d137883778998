//! Frame Model - pre-processor data model for 3D frame/wall structures
//!
//! This library holds the structural model a seismic frame solver consumes:
//! - Nodes with fixity, loads, masses and prescribed displacements
//! - Frame sections (wood/steel) and wall sections
//! - Frame, brace and wall elements between two nodes
//! - Element subdivision and tag compaction
//! - Loading and saving the solver's positional text file
//!
//! ## Example
//! ```rust
//! use frame_model::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! // Add nodes
//! model.add_node(1, Node::new(0.0, 0.0, 0.0).with_fixity(Fixity::fixed()));
//! model.add_node(2, Node::new(0.0, 0.0, 3.0));
//!
//! // Add a steel section and a column between the nodes
//! model.add_frame_section(1, FrameSection::steel(2e5, 8e4, 0.3, 0.3));
//! model.add_element(1, Element::frame(1, 2, 1));
//!
//! // Split the column into three
//! let parts = model.split_element(1, 3);
//! assert_eq!(parts.elements.len(), 3);
//!
//! // Serialize (tags are compacted first)
//! let text = model.to_text().unwrap();
//! assert!(text.starts_with("MODEL GENERATED BY FRAME MODEL CREATOR"));
//! ```

pub mod analysis;
pub mod codec;
pub mod elements;
pub mod error;
pub mod model;
pub mod summary;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisSettings, Direction, Tolerance};
    pub use crate::elements::{
        Element, ElementKind, Fixity, FrameSection, MaterialKind, Node, WallSection,
    };
    pub use crate::error::{ModelError, ModelResult, ParseError};
    pub use crate::model::{EntityKind, FrameModel, Renumbering, Subdivision, Tag, TagPattern};
    pub use crate::summary::ModelSummary;
}
