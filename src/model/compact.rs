//! Export-time renumbering of nodes and section catalogs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FrameModel, Tag};

/// Tags moved by one compaction pass, old -> new per pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Renumbering {
    pub nodes: BTreeMap<Tag, Tag>,
    pub frame_sections: BTreeMap<Tag, Tag>,
    pub wall_sections: BTreeMap<Tag, Tag>,
}

impl Renumbering {
    /// True when every pool was already dense
    pub fn is_identity(&self) -> bool {
        self.nodes.is_empty() && self.frame_sections.is_empty() && self.wall_sections.is_empty()
    }
}

impl FrameModel {
    /// Renumber nodes, wall sections and frame sections to 1..=N each and
    /// rewrite every element reference to match.
    ///
    /// Element tags are left alone. A second call on the result is a no-op.
    pub fn compress(&mut self) -> Renumbering {
        let renumbering = Renumbering {
            nodes: self.nodes.renumber(),
            wall_sections: self.wall_sections.renumber(),
            frame_sections: self.frame_sections.renumber(),
        };

        if renumbering.is_identity() {
            return renumbering;
        }

        for element in self.elements.values_mut() {
            for node in element.nodes.iter_mut() {
                if let Some(&new) = renumbering.nodes.get(node) {
                    *node = new;
                }
            }

            let sections = if element.kind.uses_wall_section() {
                &renumbering.wall_sections
            } else {
                &renumbering.frame_sections
            };
            if let Some(&new) = sections.get(&element.section) {
                element.section = new;
            }
        }

        log::info!(
            "Compacted {} node, {} frame section and {} wall section tag(s)",
            renumbering.nodes.len(),
            renumbering.frame_sections.len(),
            renumbering.wall_sections.len()
        );

        renumbering
    }
}
