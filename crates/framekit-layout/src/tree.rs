//! View-tree data structures.
//!
//! The tree mirrors the host toolkit's parent/child hierarchy. Every node
//! carries a frame expressed in its parent's coordinate space; child order is
//! insertion order and is meaningful for distribution.

use indexmap::IndexMap;
use smallvec::SmallVec;

use framekit_core::{LayoutError, Rect, Size};

use crate::center::Axis;

/// Unique identifier for a view in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// A view: a rectangular element with a frame in its parent's space.
#[derive(Debug, Clone)]
pub struct ViewNode {
    /// Unique ID for this view
    pub id: ViewId,
    /// Optional name for debugging
    pub name: Option<String>,
    /// Frame relative to the parent (or the outermost space if root)
    pub frame: Rect,
    /// Parent view ID (None for root)
    pub parent: Option<ViewId>,
    /// Child view IDs, in insertion order
    pub children: SmallVec<[ViewId; 8]>,
    /// Scrollable content size, present only for scroll containers
    pub scroll_content: Option<Size>,
}

impl ViewNode {
    /// Create a new view with a zero frame.
    pub fn new(id: ViewId) -> Self {
        Self {
            id,
            name: None,
            frame: Rect::ZERO,
            parent: None,
            children: SmallVec::new(),
            scroll_content: None,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the frame.
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    /// Mark this view as a scroll container with the given content size.
    pub fn with_scroll_content(mut self, content: Size) -> Self {
        self.scroll_content = Some(content);
        self
    }
}

/// A tree of views, owned by the host.
///
/// The tree is the reference implementation of the capability surface the
/// layout operations consume: frames, parent links, ordered children, and
/// the scroll-content query. A GUI-toolkit binding supplies the same surface
/// over its own view objects.
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    /// All views, indexed by ID; iteration order is insertion order
    nodes: IndexMap<ViewId, ViewNode>,
    /// Root view IDs
    roots: Vec<ViewId>,
    /// Counter for generating unique IDs
    next_id: u64,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique view ID.
    pub fn next_id(&mut self) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a root view.
    pub fn add_root(&mut self, node: ViewNode) -> ViewId {
        let id = node.id;
        self.nodes.insert(id, node);
        self.roots.push(id);
        id
    }

    /// Add a child view to a parent.
    pub fn add_child(&mut self, parent_id: ViewId, mut node: ViewNode) -> Result<ViewId, LayoutError> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(LayoutError::UnknownView { id: parent_id.0 });
        }
        let id = node.id;
        node.parent = Some(parent_id);
        self.nodes.insert(id, node);
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
        Ok(id)
    }

    /// Add several children to a parent, in order.
    pub fn add_children(
        &mut self,
        parent_id: ViewId,
        nodes: Vec<ViewNode>,
    ) -> Result<Vec<ViewId>, LayoutError> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(LayoutError::UnknownView { id: parent_id.0 });
        }
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            ids.push(self.add_child(parent_id, node)?);
        }
        Ok(ids)
    }

    /// Add a child and immediately center it within the parent's bounds.
    ///
    /// Insertion and recentering happen back to back; no other operation can
    /// observe the frame in between.
    pub fn add_child_centered(
        &mut self,
        parent_id: ViewId,
        node: ViewNode,
        axis: Axis,
    ) -> Result<ViewId, LayoutError> {
        let id = self.add_child(parent_id, node)?;
        self.center_in_parent(id, axis)?;
        Ok(id)
    }

    /// Get a view by ID.
    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable view by ID.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(&id)
    }

    /// Check whether a view is present.
    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get the root views.
    pub fn roots(&self) -> &[ViewId] {
        &self.roots
    }

    /// Number of views in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no views.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The parent of a view, if any.
    pub fn parent_of(&self, id: ViewId) -> Result<Option<ViewId>, LayoutError> {
        Ok(self.node(id)?.parent)
    }

    /// The children of a view, in insertion order.
    pub fn children_of(&self, id: ViewId) -> Result<&[ViewId], LayoutError> {
        Ok(&self.node(id)?.children)
    }

    /// The scroll content size of a view, if it is a scroll container.
    pub fn scroll_content_size(&self, id: ViewId) -> Result<Option<Size>, LayoutError> {
        Ok(self.node(id)?.scroll_content)
    }

    /// A view's own bounds: its size at origin (0, 0).
    pub fn bounds_of(&self, id: ViewId) -> Result<Rect, LayoutError> {
        let frame = self.node(id)?.frame;
        Ok(Rect::new(0.0, 0.0, frame.width, frame.height))
    }

    /// The bounds a view is laid out against: its parent's bounds at origin
    /// (0, 0), or the zero rect for an unparented view.
    pub fn parent_bounds(&self, id: ViewId) -> Result<Rect, LayoutError> {
        match self.node(id)?.parent {
            Some(parent_id) => self.bounds_of(parent_id),
            None => Ok(Rect::ZERO),
        }
    }

    pub(crate) fn node(&self, id: ViewId) -> Result<&ViewNode, LayoutError> {
        self.nodes.get(&id).ok_or(LayoutError::UnknownView { id: id.0 })
    }

    pub(crate) fn node_mut(&mut self, id: ViewId) -> Result<&mut ViewNode, LayoutError> {
        self.nodes.get_mut(&id).ok_or(LayoutError::UnknownView { id: id.0 })
    }

    /// Check that every ID in the slice is present, before any mutation.
    pub(crate) fn ensure_known(&self, ids: &[ViewId]) -> Result<(), LayoutError> {
        for &id in ids {
            self.node(id)?;
        }
        Ok(())
    }
}
