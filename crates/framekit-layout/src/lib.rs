//! Layout conveniences for view-frame hierarchies.
//!
//! This crate positions rectangular views within a parent/child tree without
//! the caller recomputing frame arithmetic: derived frame accessors,
//! centering of single views and groups, relative placement, edge alignment
//! (including the scroll-container case), and even distribution of siblings.
//!
//! # Architecture
//!
//! 1. **View tree**: an arena of views with parent links and ordered children
//! 2. **Frame accessors**: validated single-quantity reads/writes over frames
//! 3. **Layout operations**: pure rect math applied back to the tree
//!
//! Every operation is a one-shot, synchronous frame computation; nothing is
//! solved incrementally and no state is kept between calls.
//!
//! # Example
//!
//! ```ignore
//! use framekit_layout::{Axis, Edge, ViewNode, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let screen = tree.next_id();
//! tree.add_root(ViewNode::new(screen).with_frame(bounds));
//!
//! let button = tree.next_id();
//! tree.add_child_centered(screen, ViewNode::new(button).with_frame(size), Axis::Horizontal)?;
//! tree.align_to_edge(button, Edge::Bottom, 24.0, false)?;
//! ```

mod center;
mod distribute;
mod frame;
mod place;
mod tree;

pub use center::{center_rect_in_rect, Axis};
pub use distribute::{distribute_spans, Direction, Spacing};
pub use place::{Edge, Side};
pub use tree::{ViewId, ViewNode, ViewTree};
