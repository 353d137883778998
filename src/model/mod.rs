//! Frame model repository - the four entity pools behind one facade
//!
//! Error policy of the facade:
//! - `add_*` and `remove_*` report success as a `bool` and never fail hard.
//! - `change_*` and `highlight` silently do nothing for an absent tag.
//! - `get_*` on an absent tag is a hard `ModelError` the caller must surface.

mod compact;
mod pattern;
mod pool;
mod select;
mod split;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisSettings, Direction, Tolerance};
use crate::elements::{Element, ElementKind, Fixity, FrameSection, Node, WallSection};
use crate::error::{ModelError, ModelResult};

pub use compact::Renumbering;
pub use pattern::TagPattern;
pub use pool::Pool;
pub use split::Subdivision;

/// Positive identifier of an entity within its pool
pub type Tag = u32;

/// The four entity pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    FrameSection,
    WallSection,
    Element,
}

/// The structural frame model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameModel {
    nodes: Pool<Node>,
    frame_sections: Pool<FrameSection>,
    wall_sections: Pool<WallSection>,
    elements: Pool<Element>,
    /// Solver run settings written to the file header
    pub settings: AnalysisSettings,
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entity and restore default settings
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========================
    // Tag queries
    // ========================

    /// All tags of a pool in ascending order
    pub fn tags(&self, kind: EntityKind) -> Vec<Tag> {
        match kind {
            EntityKind::Node => self.nodes.tags(),
            EntityKind::FrameSection => self.frame_sections.tags(),
            EntityKind::WallSection => self.wall_sections.tags(),
            EntityKind::Element => self.elements.tags(),
        }
    }

    /// Advisory tag for the next insert: max existing tag + 1, or 1
    pub fn next_tag(&self, kind: EntityKind) -> Tag {
        match kind {
            EntityKind::Node => self.nodes.next_tag(),
            EntityKind::FrameSection => self.frame_sections.next_tag(),
            EntityKind::WallSection => self.wall_sections.next_tag(),
            EntityKind::Element => self.elements.next_tag(),
        }
    }

    pub fn contains(&self, kind: EntityKind, tag: Tag) -> bool {
        match kind {
            EntityKind::Node => self.nodes.contains(tag),
            EntityKind::FrameSection => self.frame_sections.contains(tag),
            EntityKind::WallSection => self.wall_sections.contains(tag),
            EntityKind::Element => self.elements.contains(tag),
        }
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node. Fails if the tag is taken.
    pub fn add_node(&mut self, tag: Tag, node: Node) -> bool {
        let added = self.nodes.insert(tag, node);
        if !added {
            log::debug!("Rejected node {}: tag unavailable", tag);
        }
        added
    }

    /// Add a frame section. Fails if the tag is taken.
    pub fn add_frame_section(&mut self, tag: Tag, section: FrameSection) -> bool {
        let added = self.frame_sections.insert(tag, section);
        if !added {
            log::debug!("Rejected frame section {}: tag unavailable", tag);
        }
        added
    }

    /// Add a wall section. Fails if the tag is taken.
    pub fn add_wall_section(&mut self, tag: Tag, section: WallSection) -> bool {
        let added = self.wall_sections.insert(tag, section);
        if !added {
            log::debug!("Rejected wall section {}: tag unavailable", tag);
        }
        added
    }

    /// Add an element. Fails, leaving every pool untouched, if the tag is
    /// taken or either end node is absent.
    ///
    /// The section tag is not checked here; see [`FrameModel::change_section`].
    pub fn add_element(&mut self, tag: Tag, element: Element) -> bool {
        if let Some(&missing) = element.nodes.iter().find(|&&node| !self.nodes.contains(node)) {
            log::debug!("Rejected element {}: node {} does not exist", tag, missing);
            return false;
        }
        let added = self.elements.insert(tag, element);
        if !added {
            log::debug!("Rejected element {}: tag unavailable", tag);
        }
        added
    }

    // ========================
    // Lookup
    // ========================

    pub fn get_node(&self, tag: Tag) -> ModelResult<&Node> {
        self.nodes.get(tag).ok_or(ModelError::NodeNotFound(tag))
    }

    pub fn get_frame_section(&self, tag: Tag) -> ModelResult<&FrameSection> {
        self.frame_sections
            .get(tag)
            .ok_or(ModelError::FrameSectionNotFound(tag))
    }

    pub fn get_wall_section(&self, tag: Tag) -> ModelResult<&WallSection> {
        self.wall_sections
            .get(tag)
            .ok_or(ModelError::WallSectionNotFound(tag))
    }

    pub fn get_element(&self, tag: Tag) -> ModelResult<&Element> {
        self.elements.get(tag).ok_or(ModelError::ElementNotFound(tag))
    }

    /// Nodes in ascending tag order
    pub fn nodes(&self) -> impl Iterator<Item = (Tag, &Node)> {
        self.nodes.iter()
    }

    pub fn frame_sections(&self) -> impl Iterator<Item = (Tag, &FrameSection)> {
        self.frame_sections.iter()
    }

    pub fn wall_sections(&self) -> impl Iterator<Item = (Tag, &WallSection)> {
        self.wall_sections.iter()
    }

    /// Elements in ascending tag order
    pub fn elements(&self) -> impl Iterator<Item = (Tag, &Element)> {
        self.elements.iter()
    }

    /// Straight-line distance between the end nodes of an element
    pub fn element_length(&self, tag: Tag) -> ModelResult<f64> {
        let element = self.get_element(tag)?;
        let i_node = self.get_node(element.i_node())?;
        let j_node = self.get_node(element.j_node())?;
        Ok(i_node.distance_to(j_node))
    }

    // ========================
    // Removal
    // ========================

    /// Remove a node together with every element attached to it
    pub fn remove_node(&mut self, tag: Tag) -> bool {
        let dropped = self.elements.retain(|_, element| !element.references_node(tag));
        if dropped > 0 {
            log::debug!("Removing node {} dropped {} element(s)", tag, dropped);
        }
        self.nodes.remove(tag).is_some()
    }

    /// Remove a frame section together with the frames and braces using it
    pub fn remove_frame_section(&mut self, tag: Tag) -> bool {
        let dropped = self
            .elements
            .retain(|_, element| element.kind.uses_wall_section() || element.section != tag);
        if dropped > 0 {
            log::debug!("Removing frame section {} dropped {} element(s)", tag, dropped);
        }
        self.frame_sections.remove(tag).is_some()
    }

    /// Remove a wall section together with the walls using it
    pub fn remove_wall_section(&mut self, tag: Tag) -> bool {
        let dropped = self
            .elements
            .retain(|_, element| !element.kind.uses_wall_section() || element.section != tag);
        if dropped > 0 {
            log::debug!("Removing wall section {} dropped {} element(s)", tag, dropped);
        }
        self.wall_sections.remove(tag).is_some()
    }

    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.elements.remove(tag).is_some()
    }

    pub fn remove_all_elements(&mut self) {
        self.elements.clear();
    }

    // ========================
    // Node setters (no-op for absent tags)
    // ========================

    pub fn change_position(&mut self, tag: Tag, position: [f64; 3]) {
        if let Some(node) = self.nodes.get_mut(tag) {
            node.set_position(position);
        }
    }

    pub fn change_fixity(&mut self, tag: Tag, fixity: Fixity) {
        if let Some(node) = self.nodes.get_mut(tag) {
            node.fixity = fixity;
        }
    }

    pub fn change_load(&mut self, tag: Tag, load: [f64; 6]) {
        if let Some(node) = self.nodes.get_mut(tag) {
            node.load = load;
        }
    }

    /// Negative masses are stored as zero
    pub fn change_mass(&mut self, tag: Tag, mass: f64) {
        if let Some(node) = self.nodes.get_mut(tag) {
            node.mass = mass.max(0.0);
        }
    }

    pub fn change_displacement(&mut self, tag: Tag, displacement: [f64; 6]) {
        if let Some(node) = self.nodes.get_mut(tag) {
            node.displacement = displacement;
        }
    }

    /// Point an element at another section of the catalog matching its kind.
    ///
    /// Nothing happens if the element or the section does not exist.
    pub fn change_section(&mut self, element_tag: Tag, section_tag: Tag) {
        let Some(element) = self.elements.get_mut(element_tag) else {
            return;
        };
        let exists = if element.kind.uses_wall_section() {
            self.wall_sections.contains(section_tag)
        } else {
            self.frame_sections.contains(section_tag)
        };
        if exists {
            element.section = section_tag;
        } else {
            log::debug!(
                "Ignoring section change of element {}: section {} does not exist",
                element_tag,
                section_tag
            );
        }
    }

    /// Set the transient selection flag. Sections carry none, so only nodes
    /// and elements are affected.
    pub fn highlight(&mut self, kind: EntityKind, tag: Tag, highlighted: bool) {
        match kind {
            EntityKind::Node => {
                if let Some(node) = self.nodes.get_mut(tag) {
                    node.highlighted = highlighted;
                }
            }
            EntityKind::Element => {
                if let Some(element) = self.elements.get_mut(tag) {
                    element.highlighted = highlighted;
                }
            }
            EntityKind::FrameSection | EntityKind::WallSection => {}
        }
    }

    // ========================
    // Bulk node operations
    // ========================

    pub fn clear_fixity(&mut self) {
        for tag in self.nodes.tags() {
            self.change_fixity(tag, Fixity::free());
        }
    }

    pub fn clear_loads(&mut self) {
        for tag in self.nodes.tags() {
            self.change_load(tag, [0.0; 6]);
        }
    }

    pub fn clear_masses(&mut self) {
        for tag in self.nodes.tags() {
            self.change_mass(tag, 0.0);
        }
    }

    pub fn clear_displacements(&mut self) {
        for tag in self.nodes.tags() {
            self.change_displacement(tag, [0.0; 6]);
        }
    }

    // ========================
    // Analysis settings
    // ========================

    pub fn change_unit(&mut self, unit_system: i32) {
        self.settings.unit_system = unit_system;
    }

    /// Values other than 0 and 1 are ignored
    pub fn change_analysis_type(&mut self, analysis_type: i32) {
        self.settings.set_analysis_type(analysis_type);
    }

    pub fn change_damping(&mut self, damping_ratio: f64) {
        self.settings.set_damping_ratio(damping_ratio);
    }

    pub fn change_scale(&mut self, scale_factor: f64) {
        self.settings.set_scale_factor(scale_factor);
    }

    pub fn change_accelerogram(&mut self, direction: Direction, path: &str) {
        self.settings.set_accelerogram(direction, path);
    }

    pub fn change_frame_quadrature(&mut self, quadrature: [i32; 3]) {
        self.settings.frame_quadrature = quadrature;
    }

    pub fn change_wall_quadrature(&mut self, quadrature: [i32; 2]) {
        self.settings.wall_quadrature = quadrature;
    }

    pub fn change_relative_tolerance(&mut self, tolerance: Tolerance) {
        self.settings.relative_tolerance = tolerance;
    }

    pub fn change_absolute_tolerance(&mut self, tolerance: Tolerance) {
        self.settings.absolute_tolerance = tolerance;
    }

    // ========================
    // Snapshots
    // ========================

    /// Full session snapshot as JSON (selection state is not kept)
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn element_count(&self, kind: ElementKind) -> usize {
        self.elements.values().filter(|element| element.kind == kind).count()
    }
}
