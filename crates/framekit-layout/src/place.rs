//! Relative placement and edge alignment.

use framekit_core::{ensure_finite, LayoutError, Rect};

use crate::center::{center_rect_in_rect, Axis};
use crate::tree::{ViewId, ViewTree};

/// Which side of a reference view to place against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Edge to edge above the reference
    Above,
    /// Edge to edge below the reference
    Below,
    /// Edge to edge left of the reference
    LeftOf,
    /// Edge to edge right of the reference
    RightOf,
}

impl Side {
    /// The axis perpendicular to the placement direction.
    fn cross_axis(self) -> Axis {
        match self {
            Side::Above | Side::Below => Axis::Horizontal,
            Side::LeftOf | Side::RightOf => Axis::Vertical,
        }
    }
}

/// A container edge to align against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// The axis perpendicular to the aligned edge.
    fn cross_axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Horizontal,
            Edge::Left | Edge::Right => Axis::Vertical,
        }
    }
}

fn frame_beside(frame: Rect, reference: Rect, side: Side, margin: f64) -> Rect {
    match side {
        Side::Above => frame.with_max_y(reference.min_y() - margin),
        Side::Below => frame.with_min_y(reference.max_y() + margin),
        Side::LeftOf => frame.with_max_x(reference.min_x() - margin),
        Side::RightOf => frame.with_min_x(reference.max_x() + margin),
    }
}

fn frame_at_edge(frame: Rect, bounds: Rect, edge: Edge, margin: f64) -> Rect {
    match edge {
        Edge::Top => frame.with_min_y(bounds.min_y() + margin),
        Edge::Bottom => frame.with_max_y(bounds.max_y() - margin),
        Edge::Left => frame.with_min_x(bounds.min_x() + margin),
        Edge::Right => frame.with_max_x(bounds.max_x() - margin),
    }
}

impl ViewTree {
    /// Place a view adjacent to a reference view.
    ///
    /// The placement-axis edge touches the reference's opposite edge offset
    /// by `margin`; the perpendicular coordinate is untouched unless
    /// `centered`, in which case the view is centered on that axis against
    /// the reference's frame. Both views must live in the same parent
    /// coordinate space.
    pub fn place_adjacent(
        &mut self,
        view: ViewId,
        reference: ViewId,
        side: Side,
        margin: f64,
        centered: bool,
    ) -> Result<(), LayoutError> {
        ensure_finite("margin", margin)?;
        let view_parent = self.node(view)?.parent;
        let reference_parent = self.node(reference)?.parent;
        if view_parent != reference_parent {
            return Err(LayoutError::CoordinateSpaceMismatch {
                view: view.0,
                reference: reference.0,
            });
        }

        let reference_frame = self.node(reference)?.frame;
        let mut frame = frame_beside(self.node(view)?.frame, reference_frame, side, margin);
        if centered {
            frame = center_rect_in_rect(frame, reference_frame, side.cross_axis());
        }
        self.node_mut(view)?.frame = frame;
        Ok(())
    }

    /// Align a view to an edge of its parent's bounds.
    ///
    /// Without a parent the bounds are the zero rect. The perpendicular
    /// coordinate is untouched unless `centered`, in which case the view is
    /// centered on that axis within the parent bounds.
    pub fn align_to_edge(
        &mut self,
        view: ViewId,
        edge: Edge,
        margin: f64,
        centered: bool,
    ) -> Result<(), LayoutError> {
        ensure_finite("margin", margin)?;
        let bounds = self.parent_bounds(view)?;
        let mut frame = frame_at_edge(self.node(view)?.frame, bounds, edge, margin);
        if centered {
            frame = center_rect_in_rect(frame, bounds, edge.cross_axis());
        }
        self.node_mut(view)?.frame = frame;
        Ok(())
    }

    /// Align a view to the bottom of its scrollable parent's content.
    ///
    /// If the immediate parent exposes a scroll content size the bottom edge
    /// targets `content.height - margin`; otherwise this degrades exactly to
    /// [`ViewTree::align_to_edge`] with [`Edge::Bottom`].
    pub fn align_to_scroll_bottom(
        &mut self,
        view: ViewId,
        margin: f64,
        centered: bool,
    ) -> Result<(), LayoutError> {
        ensure_finite("margin", margin)?;
        let parent = self.node(view)?.parent;
        let content = match parent {
            Some(parent_id) => self.node(parent_id)?.scroll_content,
            None => None,
        };
        let Some(content) = content else {
            return self.align_to_edge(view, Edge::Bottom, margin, centered);
        };

        let mut frame = self.node(view)?.frame.with_max_y(content.height - margin);
        if centered {
            let bounds = self.parent_bounds(view)?;
            frame = center_rect_in_rect(frame, bounds, Axis::Horizontal);
        }
        self.node_mut(view)?.frame = frame;
        Ok(())
    }
}
