//! Centering of single views and view groups.

use framekit_core::{bounding_rect, LayoutError, Rect};

use crate::tree::{ViewId, ViewTree};

/// Axis selector for axis-restricted operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Affect only the x coordinate
    Horizontal,
    /// Affect only the y coordinate
    Vertical,
    /// Affect both coordinates
    #[default]
    Both,
}

impl Axis {
    pub(crate) fn horizontal(self) -> bool {
        matches!(self, Axis::Horizontal | Axis::Both)
    }

    pub(crate) fn vertical(self) -> bool {
        matches!(self, Axis::Vertical | Axis::Both)
    }
}

/// Return `inner` translated so its center coincides with `outer`'s on the
/// selected axes; size unchanged, untargeted axis untouched.
pub fn center_rect_in_rect(inner: Rect, outer: Rect, axis: Axis) -> Rect {
    let mut rect = inner;
    if axis.horizontal() {
        rect = rect.with_mid_x(outer.mid_x());
    }
    if axis.vertical() {
        rect = rect.with_mid_y(outer.mid_y());
    }
    rect
}

impl ViewTree {
    /// Center a view within an arbitrary rect on the selected axes.
    ///
    /// The view does not have to be a child of whatever the rect describes.
    pub fn center_in_rect(
        &mut self,
        view: ViewId,
        container: Rect,
        axis: Axis,
    ) -> Result<(), LayoutError> {
        let node = self.node_mut(view)?;
        node.frame = center_rect_in_rect(node.frame, container, axis);
        Ok(())
    }

    /// Center a view within its parent's bounds on the selected axes.
    ///
    /// Without a parent the container is the zero rect, which collapses the
    /// targeted origin coordinates to `-size / 2`. That degenerate case is
    /// defined behavior, not an error.
    pub fn center_in_parent(&mut self, view: ViewId, axis: Axis) -> Result<(), LayoutError> {
        let container = self.parent_bounds(view)?;
        self.center_in_rect(view, container, axis)
    }

    /// Center a group of views, as a unit, within an arbitrary rect.
    ///
    /// The union bounding rect of the group's current frames is centered and
    /// the single resulting translation is applied to every member, so
    /// pairwise offsets within the group are preserved exactly. An empty
    /// group is a no-op.
    pub fn center_group_in_rect(
        &mut self,
        views: &[ViewId],
        container: Rect,
        axis: Axis,
    ) -> Result<(), LayoutError> {
        if views.is_empty() {
            return Ok(());
        }

        let group = self.group_bounds(views)?;
        let centered = center_rect_in_rect(group, container, axis);
        let dx = centered.x - group.x;
        let dy = centered.y - group.y;

        for &id in views {
            let node = self.node_mut(id)?;
            node.frame = node.frame.translated(dx, dy);
        }
        Ok(())
    }

    /// The minimal rect enclosing every listed view's current frame.
    ///
    /// Empty input yields the zero rect, never an error.
    pub fn group_bounds(&self, views: &[ViewId]) -> Result<Rect, LayoutError> {
        let frames: Vec<Rect> = views
            .iter()
            .map(|&id| self.node(id).map(|n| n.frame))
            .collect::<Result<_, _>>()?;
        Ok(bounding_rect(&frames))
    }

    /// Center a group of a view's children within the view's own bounds.
    pub fn center_children(
        &mut self,
        parent: ViewId,
        views: &[ViewId],
        axis: Axis,
    ) -> Result<(), LayoutError> {
        let bounds = self.bounds_of(parent)?;
        self.center_group_in_rect(views, bounds, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ViewNode;

    fn tree_with_parent_and_child() -> (ViewTree, ViewId, ViewId) {
        let mut tree = ViewTree::new();
        let parent = tree.next_id();
        tree.add_root(ViewNode::new(parent).with_frame(Rect::new(0.0, 0.0, 400.0, 300.0)));
        let child = tree.next_id();
        tree.add_child(
            parent,
            ViewNode::new(child).with_frame(Rect::new(0.0, 0.0, 100.0, 50.0)),
        )
        .unwrap();
        (tree, parent, child)
    }

    #[test]
    fn test_center_rect_in_itself_is_identity() {
        let r = Rect::new(12.0, 34.0, 56.0, 78.0);
        assert_eq!(center_rect_in_rect(r, r, Axis::Both), r);
    }

    #[test]
    fn test_center_in_parent_both_axes() {
        let (mut tree, _, child) = tree_with_parent_and_child();
        tree.center_in_parent(child, Axis::Both).unwrap();

        let frame = tree.frame(child).unwrap();
        assert!((frame.mid_x() - 200.0).abs() < 1e-9);
        assert!((frame.mid_y() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_in_parent_axis_restricted() {
        let (mut tree, _, child) = tree_with_parent_and_child();
        tree.set_origin(child, framekit_core::Point::new(7.0, 9.0)).unwrap();
        tree.center_in_parent(child, Axis::Horizontal).unwrap();

        let frame = tree.frame(child).unwrap();
        assert!((frame.mid_x() - 200.0).abs() < 1e-9);
        // vertical origin untouched
        assert!((frame.y - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_without_parent_collapses_to_half_size() {
        let mut tree = ViewTree::new();
        let orphan = tree.next_id();
        tree.add_root(ViewNode::new(orphan).with_frame(Rect::new(50.0, 60.0, 100.0, 40.0)));

        tree.center_in_parent(orphan, Axis::Both).unwrap();

        let frame = tree.frame(orphan).unwrap();
        assert!((frame.x - -50.0).abs() < 1e-9);
        assert!((frame.y - -20.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_group_preserves_offsets() {
        let mut tree = ViewTree::new();
        let parent = tree.next_id();
        tree.add_root(ViewNode::new(parent).with_frame(Rect::new(0.0, 0.0, 400.0, 400.0)));
        let a = tree.next_id();
        tree.add_child(parent, ViewNode::new(a).with_frame(Rect::new(0.0, 0.0, 40.0, 40.0)))
            .unwrap();
        let b = tree.next_id();
        tree.add_child(parent, ViewNode::new(b).with_frame(Rect::new(60.0, 10.0, 40.0, 40.0)))
            .unwrap();

        let before_a = tree.frame(a).unwrap();
        let before_b = tree.frame(b).unwrap();
        tree.center_children(parent, &[a, b], Axis::Both).unwrap();
        let after_a = tree.frame(a).unwrap();
        let after_b = tree.frame(b).unwrap();

        // pairwise offset unchanged
        assert!(((after_a.x - after_b.x) - (before_a.x - before_b.x)).abs() < 1e-9);
        assert!(((after_a.y - after_b.y) - (before_a.y - before_b.y)).abs() < 1e-9);

        // the union rect is centered: spans 0..100 x 0..50, so it lands at
        // 150..250 x 175..225
        assert!((after_a.x - 150.0).abs() < 1e-9);
        assert!((after_b.max_x() - 250.0).abs() < 1e-9);
        assert!((after_a.y - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_bounds_empty_is_zero_rect() {
        let tree = ViewTree::new();
        assert_eq!(tree.group_bounds(&[]).unwrap(), Rect::ZERO);
    }

    #[test]
    fn test_center_group_empty_is_noop() {
        let mut tree = ViewTree::new();
        assert!(tree
            .center_group_in_rect(&[], Rect::new(0.0, 0.0, 100.0, 100.0), Axis::Both)
            .is_ok());
    }

    #[test]
    fn test_center_group_unknown_view_fails_before_mutation() {
        let (mut tree, parent, child) = tree_with_parent_and_child();
        let before = tree.frame(child).unwrap();

        let err = tree
            .center_children(parent, &[child, ViewId(999)], Axis::Both)
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownView { id: 999 }));
        assert_eq!(tree.frame(child).unwrap(), before);
    }
}
