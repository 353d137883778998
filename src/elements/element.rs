//! Element - a two-node frame, brace or wall member

use serde::{Deserialize, Serialize};

use crate::model::Tag;

/// Kind of a two-node element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Frame,
    Brace,
    Wall,
}

impl ElementKind {
    /// Whether the section tag points into the wall section catalog
    pub fn uses_wall_section(self) -> bool {
        self == Self::Wall
    }
}

/// A two-node element of the frame model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    /// Start and end node tags
    pub nodes: [Tag; 2],
    /// Tag in the frame or wall section catalog, depending on `kind`
    pub section: Tag,
    /// Wall orientation (1 or 2), 0 for frames and braces
    pub orientation: i32,

    /// Selection state of the view layer, not persisted
    #[serde(skip)]
    pub highlighted: bool,
}

impl Element {
    pub fn new(kind: ElementKind, i_node: Tag, j_node: Tag, section: Tag, orientation: i32) -> Self {
        Self {
            kind,
            nodes: [i_node, j_node],
            section,
            orientation,
            highlighted: false,
        }
    }

    pub fn frame(i_node: Tag, j_node: Tag, section: Tag) -> Self {
        Self::new(ElementKind::Frame, i_node, j_node, section, 0)
    }

    pub fn brace(i_node: Tag, j_node: Tag, section: Tag) -> Self {
        Self::new(ElementKind::Brace, i_node, j_node, section, 0)
    }

    pub fn wall(i_node: Tag, j_node: Tag, section: Tag, orientation: i32) -> Self {
        Self::new(ElementKind::Wall, i_node, j_node, section, orientation)
    }

    pub fn i_node(&self) -> Tag {
        self.nodes[0]
    }

    pub fn j_node(&self) -> Tag {
        self.nodes[1]
    }

    /// Copy of this element between two other nodes
    pub fn with_nodes(&self, i_node: Tag, j_node: Tag) -> Self {
        Self {
            nodes: [i_node, j_node],
            highlighted: false,
            ..self.clone()
        }
    }

    pub fn references_node(&self, tag: Tag) -> bool {
        self.nodes.contains(&tag)
    }
}
