//! Node selection queries used by the view layer

use super::{EntityKind, FrameModel, Tag};

fn matches(target: Option<f64>, value: f64) -> bool {
    target.map_or(true, |target| {
        (target - value).abs() <= 1e-9 * target.abs().max(value.abs()).max(1.0)
    })
}

impl FrameModel {
    /// Existing node tags on `start, start + step, …` up to `end`.
    ///
    /// The request is normalised first: a zero bound takes the other
    /// bound's value, the bounds are ordered, a negative step is flipped
    /// and a zero step spans the whole range in one jump.
    pub fn select_node_range(&self, start: Tag, step: i64, end: Tag) -> Vec<Tag> {
        let (mut start, mut end) = (start, end);
        if end == 0 {
            end = start;
        }
        if start == 0 {
            start = end;
        }
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }
        let step = match step.unsigned_abs() {
            0 => u64::from(end - start).max(1),
            step => step,
        };

        (u64::from(start)..=u64::from(end))
            .step_by(usize::try_from(step).unwrap_or(usize::MAX))
            .filter_map(|tag| Tag::try_from(tag).ok())
            .filter(|&tag| self.contains(EntityKind::Node, tag))
            .collect()
    }

    /// Tags of nodes whose given coordinates all match, ascending.
    /// Returns nothing when no coordinate is given.
    pub fn select_nodes_at(&self, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Vec<Tag> {
        if x.is_none() && y.is_none() && z.is_none() {
            return Vec::new();
        }
        self.nodes()
            .filter(|(_, node)| matches(x, node.x) && matches(y, node.y) && matches(z, node.z))
            .map(|(tag, _)| tag)
            .collect()
    }

    /// Highlight or clear a group of nodes; absent tags are skipped
    pub fn highlight_nodes(&mut self, tags: &[Tag], highlighted: bool) {
        for &tag in tags {
            self.highlight(EntityKind::Node, tag, highlighted);
        }
    }
}
