//! Model statistics

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::elements::ElementKind;
use crate::model::{EntityKind, FrameModel, Tag};

/// Counts and totals over a model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Total number of nodes
    pub nodes: usize,
    /// Frame (beam/column) elements
    pub frames: usize,
    pub braces: usize,
    pub walls: usize,
    pub frame_sections: usize,
    pub wall_sections: usize,
    /// Nodes with at least one restrained DOF
    pub supported_nodes: usize,
    /// Sum of nodal masses
    pub total_mass: f64,
    /// Largest node tag, 0 when there are no nodes
    pub max_node_tag: Tag,
    /// Largest element tag, 0 when there are no elements
    pub max_element_tag: Tag,
}

impl ModelSummary {
    pub fn num_elements(&self) -> usize {
        self.frames + self.braces + self.walls
    }

    /// True when node tags run 1..=nodes without gaps, i.e. a save would
    /// keep every node tag. Section catalogs are not covered.
    pub fn nodes_are_compact(&self) -> bool {
        usize::try_from(self.max_node_tag).map_or(false, |max| max == self.nodes)
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:           {} (max tag {})", self.nodes, self.max_node_tag)?;
        writeln!(
            f,
            "elements:        {} frame, {} brace, {} wall (max tag {})",
            self.frames, self.braces, self.walls, self.max_element_tag
        )?;
        writeln!(
            f,
            "sections:        {} frame, {} wall",
            self.frame_sections, self.wall_sections
        )?;
        writeln!(f, "supported nodes: {}", self.supported_nodes)?;
        write!(f, "total mass:      {}", self.total_mass)
    }
}

impl FrameModel {
    pub fn summary(&self) -> ModelSummary {
        let max_tag = |kind| self.tags(kind).last().copied().unwrap_or(0);
        ModelSummary {
            nodes: self.nodes().count(),
            frames: self.element_count(ElementKind::Frame),
            braces: self.element_count(ElementKind::Brace),
            walls: self.element_count(ElementKind::Wall),
            frame_sections: self.frame_sections().count(),
            wall_sections: self.wall_sections().count(),
            supported_nodes: self
                .nodes()
                .filter(|(_, node)| node.fixity.is_supported())
                .count(),
            total_mass: self.nodes().map(|(_, node)| node.mass).sum(),
            max_node_tag: max_tag(EntityKind::Node),
            max_element_tag: max_tag(EntityKind::Element),
        }
    }
}
