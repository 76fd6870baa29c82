//! Even distribution of sibling views along one axis.

use framekit_core::LayoutError;

use crate::tree::{ViewId, ViewTree};

/// Direction for distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Distribute along the x axis (left to right)
    #[default]
    Horizontal,
    /// Distribute along the y axis (top to bottom)
    Vertical,
}

/// Spacing policy for distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Centers evenly spaced at `span / n`, regardless of sizes.
    /// Oversized views may overlap; that is accepted behavior.
    #[default]
    EqualCenters,
    /// One uniform gap before, between, and after every view
    /// (`n + 1` gaps). A negative gap on overflow is kept, never clamped.
    EqualSpace,
}

/// Compute leading coordinates for `sizes` laid out within `span`.
///
/// Pure arithmetic; the caller applies the results to frames. Empty input
/// yields an empty vector.
pub fn distribute_spans(span: f64, sizes: &[f64], spacing: Spacing) -> Vec<f64> {
    let n = sizes.len();
    if n == 0 {
        return Vec::new();
    }

    match spacing {
        Spacing::EqualCenters => {
            let step = span / n as f64;
            sizes
                .iter()
                .enumerate()
                .map(|(i, &size)| step * (i as f64 + 0.5) - size / 2.0)
                .collect()
        }
        Spacing::EqualSpace => {
            let total: f64 = sizes.iter().sum();
            let gap = (span - total) / (n + 1) as f64;
            let mut cursor = gap;
            sizes
                .iter()
                .map(|&size| {
                    let leading = cursor;
                    cursor += size + gap;
                    leading
                })
                .collect()
        }
    }
}

impl ViewTree {
    /// Evenly distribute views along one axis of the acting view's bounds.
    ///
    /// The span is the acting view's own width (horizontal) or height
    /// (vertical); only the distribution-axis coordinate of each view is
    /// written, and the caller-supplied order is preserved as given (views
    /// are never re-sorted by position). An empty list is a no-op.
    pub fn distribute(
        &mut self,
        parent: ViewId,
        views: &[ViewId],
        direction: Direction,
        spacing: Spacing,
    ) -> Result<(), LayoutError> {
        let bounds = self.bounds_of(parent)?;
        self.ensure_known(views)?;
        if views.is_empty() {
            return Ok(());
        }

        let span = match direction {
            Direction::Horizontal => bounds.width,
            Direction::Vertical => bounds.height,
        };
        let sizes: Vec<f64> = views
            .iter()
            .map(|&id| {
                let frame = self.node(id)?.frame;
                Ok(match direction {
                    Direction::Horizontal => frame.width,
                    Direction::Vertical => frame.height,
                })
            })
            .collect::<Result<_, LayoutError>>()?;

        let leading = distribute_spans(span, &sizes, spacing);
        for (&id, &coord) in views.iter().zip(leading.iter()) {
            let node = self.node_mut(id)?;
            node.frame = match direction {
                Direction::Horizontal => node.frame.with_min_x(coord),
                Direction::Vertical => node.frame.with_min_y(coord),
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framekit_core::Rect;

    use crate::center::Axis;
    use crate::tree::ViewNode;

    fn tree_with_children(parent_frame: Rect, child_sizes: &[(f64, f64)]) -> (ViewTree, ViewId, Vec<ViewId>) {
        let mut tree = ViewTree::new();
        let parent = tree.next_id();
        tree.add_root(ViewNode::new(parent).with_frame(parent_frame));
        let ids = child_sizes
            .iter()
            .map(|&(w, h)| {
                let id = tree.next_id();
                tree.add_child(parent, ViewNode::new(id).with_frame(Rect::new(0.0, 0.0, w, h)))
                    .unwrap();
                id
            })
            .collect();
        (tree, parent, ids)
    }

    #[test]
    fn test_equal_centers_spacing() {
        // span 100, n = 4: centers at 12.5, 37.5, 62.5, 87.5
        let leading = distribute_spans(
            100.0,
            &[10.0, 20.0, 30.0, 4.0],
            Spacing::EqualCenters,
        );
        let centers: Vec<f64> = leading
            .iter()
            .zip([10.0, 20.0, 30.0, 4.0])
            .map(|(&l, s)| l + s / 2.0)
            .collect();
        for (center, expected) in centers.iter().zip([12.5, 37.5, 62.5, 87.5]) {
            assert!((center - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_space_worked_example() {
        // sizes [10, 20, 30] in span 100: g = 10, leading 10, 40, 80
        let leading = distribute_spans(100.0, &[10.0, 20.0, 30.0], Spacing::EqualSpace);
        assert!((leading[0] - 10.0).abs() < 1e-9);
        assert!((leading[1] - 40.0).abs() < 1e-9);
        assert!((leading[2] - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_space_negative_gap_is_kept() {
        // sizes sum to 120 in span 60: g = (60 - 120) / 3 = -20
        let leading = distribute_spans(60.0, &[60.0, 60.0], Spacing::EqualSpace);
        assert!((leading[0] - -20.0).abs() < 1e-9);
        assert!((leading[1] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_is_noop() {
        assert!(distribute_spans(100.0, &[], Spacing::EqualCenters).is_empty());

        let (mut tree, parent, _) = tree_with_children(Rect::new(0.0, 0.0, 100.0, 100.0), &[]);
        assert!(tree
            .distribute(parent, &[], Direction::Horizontal, Spacing::EqualSpace)
            .is_ok());
    }

    #[test]
    fn test_distribute_horizontal_writes_only_x() {
        let (mut tree, parent, ids) = tree_with_children(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            &[(10.0, 5.0), (20.0, 5.0), (30.0, 5.0)],
        );
        tree.set_origin_y(ids[1], 33.0).unwrap();

        tree.distribute(parent, &ids, Direction::Horizontal, Spacing::EqualSpace)
            .unwrap();

        assert!((tree.frame(ids[0]).unwrap().x - 10.0).abs() < 1e-9);
        assert!((tree.frame(ids[1]).unwrap().x - 40.0).abs() < 1e-9);
        assert!((tree.frame(ids[2]).unwrap().x - 80.0).abs() < 1e-9);
        // perpendicular coordinate untouched
        assert!((tree.frame(ids[1]).unwrap().y - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_vertical_equal_centers() {
        let (mut tree, parent, ids) = tree_with_children(
            Rect::new(0.0, 0.0, 50.0, 200.0),
            &[(5.0, 40.0), (5.0, 10.0)],
        );

        tree.distribute(parent, &ids, Direction::Vertical, Spacing::EqualCenters)
            .unwrap();

        // centers at 50 and 150 regardless of heights
        assert!((tree.frame(ids[0]).unwrap().mid_y() - 50.0).abs() < 1e-9);
        assert!((tree.frame(ids[1]).unwrap().mid_y() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_preserves_caller_order() {
        let (mut tree, parent, ids) = tree_with_children(
            Rect::new(0.0, 0.0, 90.0, 50.0),
            &[(10.0, 5.0), (10.0, 5.0)],
        );
        // pass the views in reverse: the *first listed* view gets the first slot
        let reversed = [ids[1], ids[0]];
        tree.distribute(parent, &reversed, Direction::Horizontal, Spacing::EqualSpace)
            .unwrap();

        let first = tree.frame(ids[1]).unwrap().x;
        let second = tree.frame(ids[0]).unwrap().x;
        assert!(first < second);
    }

    #[test]
    fn test_single_view_equal_space_matches_centering() {
        let (mut tree, parent, ids) = tree_with_children(
            Rect::new(0.0, 0.0, 300.0, 80.0),
            &[(120.0, 20.0)],
        );
        tree.distribute(parent, &ids, Direction::Horizontal, Spacing::EqualSpace)
            .unwrap();
        let distributed_x = tree.frame(ids[0]).unwrap().x;

        tree.set_origin_x(ids[0], 0.0).unwrap();
        let bounds = tree.bounds_of(parent).unwrap();
        tree.center_in_rect(ids[0], bounds, Axis::Horizontal).unwrap();
        let centered_x = tree.frame(ids[0]).unwrap().x;

        assert!((distributed_x - centered_x).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_unknown_view_fails_before_mutation() {
        let (mut tree, parent, ids) = tree_with_children(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &[(10.0, 10.0)],
        );
        let before = tree.frame(ids[0]).unwrap();
        let err = tree
            .distribute(parent, &[ids[0], ViewId(404)], Direction::Horizontal, Spacing::EqualSpace)
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownView { id: 404 }));
        assert_eq!(tree.frame(ids[0]).unwrap(), before);
    }
}
