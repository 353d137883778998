//! Patterned generation: node grids, repeated elements and bulk node data

use serde::{Deserialize, Serialize};

use super::{EntityKind, FrameModel, Tag};
use crate::elements::{Element, Fixity, Node};

/// Regular tag sequence `start + i·inc[0] + j·inc[1] + k·inc[2]`
/// for `i < repeat[0]`, `j < repeat[1]`, `k < repeat[2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPattern {
    pub start: Tag,
    pub repeat: [usize; 3],
    pub increment: [i64; 3],
}

impl TagPattern {
    /// Just `start`
    pub fn single(start: Tag) -> Self {
        Self {
            start,
            repeat: [1, 1, 1],
            increment: [0, 0, 0],
        }
    }

    pub fn new(start: Tag, repeat: [usize; 3], increment: [i64; 3]) -> Self {
        Self {
            start,
            repeat,
            increment,
        }
    }

    /// Tag at grid index `[i, j, k]`, `None` when it leaves the tag range
    fn tag_at(&self, index: [usize; 3]) -> Option<Tag> {
        let mut tag = i64::from(self.start);
        for (count, increment) in index.into_iter().zip(self.increment) {
            let step = i64::try_from(count).ok()?.checked_mul(increment)?;
            tag = tag.checked_add(step)?;
        }
        Tag::try_from(tag).ok().filter(|&tag| tag > 0)
    }

    /// Generated tags in i-major order. Entries that fall outside the
    /// positive tag range yield `None` so two patterns stay aligned.
    fn slots(&self) -> impl Iterator<Item = Option<Tag>> + '_ {
        let [ni, nj, nk] = self.repeat;
        (0..ni).flat_map(move |i| {
            (0..nj).flat_map(move |j| (0..nk).map(move |k| self.tag_at([i, j, k])))
        })
    }

    /// Positive tags of the pattern in generation order
    pub fn tags(&self) -> Vec<Tag> {
        self.slots().flatten().collect()
    }
}

impl FrameModel {
    /// Add a `counts[0] × counts[1] × counts[2]` grid of nodes at
    /// `origin + (i·dx, j·dy, k·dz)`, tags taken from `next_tag`.
    pub fn add_node_grid(&mut self, origin: [f64; 3], spacing: [f64; 3], counts: [usize; 3]) -> Vec<Tag> {
        let mut added = Vec::new();
        for i in 0..counts[0] {
            for j in 0..counts[1] {
                for k in 0..counts[2] {
                    let tag = self.next_tag(EntityKind::Node);
                    let node = Node::new(
                        origin[0] + spacing[0] * i as f64,
                        origin[1] + spacing[1] * j as f64,
                        origin[2] + spacing[2] * k as f64,
                    );
                    if self.add_node(tag, node) {
                        added.push(tag);
                    }
                }
            }
        }
        added
    }

    /// Add copies of `template` between the node pairs produced jointly by
    /// the two patterns. Pairs with an absent node are skipped.
    pub fn add_element_pattern(
        &mut self,
        template: &Element,
        i_nodes: &TagPattern,
        j_nodes: &TagPattern,
    ) -> Vec<Tag> {
        let mut added = Vec::new();
        for (i_node, j_node) in i_nodes.slots().zip(j_nodes.slots()) {
            let (Some(i_node), Some(j_node)) = (i_node, j_node) else {
                continue;
            };
            let tag = self.next_tag(EntityKind::Element);
            if self.add_element(tag, template.with_nodes(i_node, j_node)) {
                added.push(tag);
            }
        }
        added
    }

    pub fn apply_fixity(&mut self, pattern: &TagPattern, fixity: Fixity) {
        for tag in pattern.tags() {
            self.change_fixity(tag, fixity);
        }
    }

    pub fn apply_load(&mut self, pattern: &TagPattern, load: [f64; 6]) {
        for tag in pattern.tags() {
            self.change_load(tag, load);
        }
    }

    pub fn apply_mass(&mut self, pattern: &TagPattern, mass: f64) {
        for tag in pattern.tags() {
            self.change_mass(tag, mass);
        }
    }

    pub fn apply_displacement(&mut self, pattern: &TagPattern, displacement: [f64; 6]) {
        for tag in pattern.tags() {
            self.change_displacement(tag, displacement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_tags() {
        let pattern = TagPattern::new(1, [2, 3, 1], [10, 1, 0]);
        assert_eq!(pattern.tags(), vec![1, 2, 3, 11, 12, 13]);
        assert_eq!(TagPattern::single(4).tags(), vec![4]);
        assert!(TagPattern::new(1, [0, 1, 1], [1, 1, 1]).tags().is_empty());
    }

    #[test]
    fn test_pattern_skips_non_positive() {
        let pattern = TagPattern::new(2, [4, 1, 1], [-1, 0, 0]);
        assert_eq!(pattern.tags(), vec![2, 1]);
    }

    #[test]
    fn test_pattern_overflow_yields_no_tag() {
        let pattern = TagPattern::new(1, [3, 1, 1], [i64::MAX, 0, 0]);
        assert_eq!(pattern.tags(), vec![1]);

        let pattern = TagPattern::new(5, [1, 3, 1], [0, i64::MIN, 0]);
        assert_eq!(pattern.tags(), vec![5]);
        assert_eq!(pattern.slots().count(), 3);
    }

    #[test]
    fn test_node_grid() {
        let mut model = FrameModel::new();
        model.add_node(4, Node::default());
        let tags = model.add_node_grid([0.0, 0.0, 0.0], [6.0, 5.0, 3.5], [2, 1, 3]);
        assert_eq!(tags, vec![5, 6, 7, 8, 9, 10]);
        let last = model.get_node(10).unwrap();
        assert_eq!(last.coords(), [6.0, 0.0, 7.0]);
    }

    #[test]
    fn test_element_pattern_builds_columns() {
        let mut model = FrameModel::new();
        // two columns lines of three levels: tags 1..=3 and 4..=6
        model.add_node_grid([0.0; 3], [6.0, 1.0, 3.0], [2, 1, 3]);
        let columns = model.add_element_pattern(
            &Element::frame(0, 0, 1),
            &TagPattern::new(1, [2, 2, 1], [3, 1, 0]),
            &TagPattern::new(2, [2, 2, 1], [3, 1, 0]),
        );
        assert_eq!(columns, vec![1, 2, 3, 4]);
        assert_eq!(model.get_element(3).unwrap().nodes, [4, 5]);

        // the pair (3, 4) is fine but (4, 7) misses node 7
        let skipped = model.add_element_pattern(
            &Element::brace(0, 0, 1),
            &TagPattern::new(3, [2, 1, 1], [1, 0, 0]),
            &TagPattern::new(4, [2, 1, 1], [3, 0, 0]),
        );
        assert_eq!(skipped, vec![5]);
    }

    #[test]
    fn test_apply_helpers() {
        let mut model = FrameModel::new();
        model.add_node_grid([0.0; 3], [1.0; 3], [3, 1, 1]);
        let base = TagPattern::new(1, [5, 1, 1], [1, 0, 0]);
        model.apply_fixity(&base, Fixity::fixed());
        model.apply_mass(&TagPattern::single(2), 12.5);
        model.apply_load(&TagPattern::single(3), [0.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
        assert!(model.nodes().all(|(_, node)| node.fixity == Fixity::fixed()));
        assert_eq!(model.get_node(2).unwrap().mass, 12.5);
        assert_eq!(model.get_node(3).unwrap().load[2], -1.0);
    }
}
