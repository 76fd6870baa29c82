//! Frame accessor layer.
//!
//! Reads are projections of the stored frame through the pure [`Rect`]
//! accessors; writes validate finiteness up front and then rewrite exactly
//! one logical quantity, leaving every other derived value consistent.

use framekit_core::{ensure_finite, LayoutError, Point, Rect, Size};

use crate::tree::{ViewId, ViewTree};

impl ViewTree {
    /// The current frame of a view.
    pub fn frame(&self, id: ViewId) -> Result<Rect, LayoutError> {
        Ok(self.node(id)?.frame)
    }

    /// Replace the whole frame.
    pub fn set_frame(&mut self, id: ViewId, frame: Rect) -> Result<(), LayoutError> {
        frame.ensure_finite()?;
        self.node_mut(id)?.frame = frame;
        Ok(())
    }

    /// Set the origin point; size unchanged.
    pub fn set_origin(&mut self, id: ViewId, origin: Point) -> Result<(), LayoutError> {
        ensure_finite("x", origin.x)?;
        ensure_finite("y", origin.y)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_origin(origin);
        Ok(())
    }

    /// Set the x coordinate (left edge); y and size unchanged.
    pub fn set_origin_x(&mut self, id: ViewId, x: f64) -> Result<(), LayoutError> {
        ensure_finite("x", x)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_min_x(x);
        Ok(())
    }

    /// Set the y coordinate (top edge); x and size unchanged.
    pub fn set_origin_y(&mut self, id: ViewId, y: f64) -> Result<(), LayoutError> {
        ensure_finite("y", y)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_min_y(y);
        Ok(())
    }

    /// Move the horizontal center to `mid_x`; width fixed, so only x moves.
    pub fn set_mid_x(&mut self, id: ViewId, mid_x: f64) -> Result<(), LayoutError> {
        ensure_finite("mid_x", mid_x)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_mid_x(mid_x);
        Ok(())
    }

    /// Move the vertical center to `mid_y`; height fixed, so only y moves.
    pub fn set_mid_y(&mut self, id: ViewId, mid_y: f64) -> Result<(), LayoutError> {
        ensure_finite("mid_y", mid_y)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_mid_y(mid_y);
        Ok(())
    }

    /// Move the right edge to `max_x`; width fixed, so only x moves.
    pub fn set_max_x(&mut self, id: ViewId, max_x: f64) -> Result<(), LayoutError> {
        ensure_finite("max_x", max_x)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_max_x(max_x);
        Ok(())
    }

    /// Move the bottom edge to `max_y`; height fixed, so only y moves.
    pub fn set_max_y(&mut self, id: ViewId, max_y: f64) -> Result<(), LayoutError> {
        ensure_finite("max_y", max_y)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_max_y(max_y);
        Ok(())
    }

    /// Set the size; origin unchanged, so the max edges move.
    pub fn set_size(&mut self, id: ViewId, size: Size) -> Result<(), LayoutError> {
        ensure_finite("width", size.width)?;
        ensure_finite("height", size.height)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_size(size);
        Ok(())
    }

    /// Set the width; origin and height unchanged.
    pub fn set_width(&mut self, id: ViewId, width: f64) -> Result<(), LayoutError> {
        ensure_finite("width", width)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_width(width);
        Ok(())
    }

    /// Set the height; origin and width unchanged.
    pub fn set_height(&mut self, id: ViewId, height: f64) -> Result<(), LayoutError> {
        ensure_finite("height", height)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.with_height(height);
        Ok(())
    }

    /// Shift the origin by the given deltas; size unchanged.
    pub fn translate(&mut self, id: ViewId, dx: f64, dy: f64) -> Result<(), LayoutError> {
        ensure_finite("dx", dx)?;
        ensure_finite("dy", dy)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.translated(dx, dy);
        Ok(())
    }

    /// Multiply width and height by independent factors; origin unchanged.
    pub fn scale_size(&mut self, id: ViewId, sx: f64, sy: f64) -> Result<(), LayoutError> {
        ensure_finite("sx", sx)?;
        ensure_finite("sy", sy)?;
        let node = self.node_mut(id)?;
        node.frame = node.frame.scaled(sx, sy);
        Ok(())
    }
}
