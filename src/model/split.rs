//! Element subdivision

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{FrameModel, Tag};
use crate::elements::Node;

/// Entities created by one split, in chain order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Interior nodes from the start end towards the far end
    pub nodes: Vec<Tag>,
    /// Replacement elements, start segment first
    pub elements: Vec<Tag>,
}

impl Subdivision {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// `count` consecutive tags from `first`, if all of them are insertable
fn fresh_tags(first: Tag, count: usize) -> Option<Range<Tag>> {
    let end = first.checked_add(Tag::try_from(count).ok()?)?;
    Some(first..end)
}

impl FrameModel {
    /// Replace an element by a chain of `segments` equal elements.
    ///
    /// Interior node k (1-based) sits at fraction k/segments along the line
    /// from the start node to the end node. New nodes and elements take
    /// consecutive tags from `next_tag` in chain order and inherit nothing
    /// but the element's kind, section and orientation. Returns an empty
    /// subdivision, leaving the model untouched, when `segments < 2`, the
    /// element does not exist or the new tags would run past the tag range.
    pub fn split_element(&mut self, tag: Tag, segments: usize) -> Subdivision {
        if segments < 2 {
            return Subdivision::default();
        }
        let Some(original) = self.elements.get(tag).cloned() else {
            return Subdivision::default();
        };
        let (Some(start), Some(end)) = (
            self.nodes.get(original.i_node()).map(Node::position),
            self.nodes.get(original.j_node()).map(Node::position),
        ) else {
            log::warn!("Element {} references a missing node, not splitting", tag);
            return Subdivision::default();
        };

        let (Some(node_tags), Some(element_tags)) = (
            fresh_tags(self.nodes.next_tag(), segments - 1),
            fresh_tags(self.elements.next_tag(), segments),
        ) else {
            log::warn!("Not splitting element {}: no room for {} new tags", tag, segments);
            return Subdivision::default();
        };

        let mut subdivision = Subdivision::default();

        for (k, node_tag) in (1..segments).zip(node_tags) {
            let fraction = k as f64 / segments as f64;
            let point = start + (end - start) * fraction;
            self.nodes.insert(node_tag, Node::from_point(&point));
            subdivision.nodes.push(node_tag);
        }

        let chain: Vec<Tag> = std::iter::once(original.i_node())
            .chain(subdivision.nodes.iter().copied())
            .chain(std::iter::once(original.j_node()))
            .collect();

        for (pair, element_tag) in chain.windows(2).zip(element_tags) {
            self.elements.insert(element_tag, original.with_nodes(pair[0], pair[1]));
            subdivision.elements.push(element_tag);
        }

        self.elements.remove(tag);

        log::debug!(
            "Split element {} into {:?} with interior nodes {:?}",
            tag,
            subdivision.elements,
            subdivision.nodes
        );

        subdivision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;
    use crate::model::EntityKind;

    fn single_wall() -> FrameModel {
        let mut model = FrameModel::new();
        model.add_node(1, Node::new(0.0, 0.0, 0.0));
        model.add_node(2, Node::new(0.0, 0.0, 9.0));
        model.add_element(5, Element::wall(1, 2, 3, 2));
        model
    }

    #[test]
    fn test_split_into_three() {
        let mut model = single_wall();
        let subdivision = model.split_element(5, 3);

        assert_eq!(subdivision.nodes, vec![3, 4]);
        assert_eq!(subdivision.elements, vec![6, 7, 8]);
        assert!(model.get_element(5).is_err());
        assert!((model.get_node(3).unwrap().z - 3.0).abs() < 1e-12);
        assert!((model.get_node(4).unwrap().z - 6.0).abs() < 1e-12);

        let path: Vec<[Tag; 2]> = subdivision
            .elements
            .iter()
            .map(|&tag| model.get_element(tag).unwrap().nodes)
            .collect();
        assert_eq!(path, vec![[1, 3], [3, 4], [4, 2]]);

        for &tag in &subdivision.elements {
            let element = model.get_element(tag).unwrap();
            assert_eq!(element.section, 3);
            assert_eq!(element.orientation, 2);
        }
    }

    #[test]
    fn test_split_into_two() {
        let mut model = single_wall();
        let subdivision = model.split_element(5, 2);
        assert_eq!(subdivision.nodes, vec![3]);
        assert_eq!(model.get_element(6).unwrap().nodes, [1, 3]);
        assert_eq!(model.get_element(7).unwrap().nodes, [3, 2]);
        assert!((model.get_node(3).unwrap().z - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_split_noops() {
        let mut model = single_wall();
        let before = model.clone();
        assert!(model.split_element(5, 1).is_empty());
        assert!(model.split_element(5, 0).is_empty());
        assert!(model.split_element(6, 4).is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn test_split_near_tag_limit_is_refused() {
        let mut model = FrameModel::new();
        model.add_node(1, Node::new(0.0, 0.0, 0.0));
        model.add_node(Tag::MAX - 1, Node::new(0.0, 0.0, 3.0));
        model.add_element(1, Element::frame(1, Tag::MAX - 1, 1));
        let before = model.clone();

        assert!(model.split_element(1, 3).is_empty());
        assert_eq!(model, before);

        // same for the element pool
        let mut model = single_wall();
        model.add_element(Tag::MAX - 2, Element::frame(1, 2, 1));
        let before = model.clone();
        assert!(model.split_element(5, 3).is_empty());
        assert_eq!(model, before);
        // two segments would need MAX - 1 and the reserved MAX
        assert!(model.split_element(5, 2).is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn test_repeated_splits_use_fresh_nodes() {
        let mut model = single_wall();
        let first = model.split_element(5, 2);
        let second = model.split_element(first.elements[1], 2);
        assert_eq!(second.nodes, vec![4]);
        assert_eq!(model.tags(EntityKind::Node), vec![1, 2, 3, 4]);
        assert_eq!(model.tags(EntityKind::Element), vec![6, 8, 9]);
        assert_eq!(model.get_element(8).unwrap().nodes, [3, 4]);
        assert_eq!(model.get_element(9).unwrap().nodes, [4, 2]);
    }
}
