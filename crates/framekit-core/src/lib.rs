//! Core geometry types and errors for the framekit layout library.
//!
//! This crate provides the foundational types used by the layout crate:
//! - Plain `f64` value types ([`Point`], [`Size`], [`Rect`]) with derived
//!   edge/center accessors and pure single-field rewrites
//! - Reducers over rect groups (bounding rect, summed extents)
//! - Error types

pub mod errors;
pub mod geometry;

pub use errors::*;
pub use geometry::*;
